//! record/types.rs
//! `Record` contract plus the field writer/reader handed to generated code.

use serde_json::Value;

use crate::codec::{Codec, Mapping};
use crate::types::{CodecError, Result};
use crate::utils::field_path;

/// A typed value with a fixed, statically known set of named fields.
///
/// Implemented by generated code. `encode_fields` writes every declared
/// field through the [`FieldWriter`]; `decode_fields` reads them back through
/// the [`FieldReader`].
pub trait Record: Sized {
    /// Schema name, used in diagnostics.
    const NAME: &'static str;
    /// Declared field names in declaration order.
    const FIELDS: &'static [&'static str];

    fn encode_fields(&self, out: &mut FieldWriter) -> Result<()>;
    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self>;
}

/// Collects encoded fields of one record.
#[derive(Debug)]
pub struct FieldWriter {
    owner: &'static str,
    fields: Mapping,
}

impl FieldWriter {
    pub fn new(owner: &'static str) -> Self {
        Self { owner, fields: Mapping::new() }
    }

    /// Encode a field that is always present.
    pub fn required<T: Codec>(&mut self, name: &'static str, value: &T) -> Result<()> {
        let encoded = value
            .encode()
            .map_err(|e| e.at(|| field_path(self.owner, name)))?;
        self.fields.insert(name.to_owned(), encoded);
        Ok(())
    }

    /// Encode an optional field; `None` leaves the key out entirely.
    pub fn optional<T: Codec>(&mut self, name: &'static str, value: &Option<T>) -> Result<()> {
        match value {
            Some(inner) => self.required(name, inner),
            None => Ok(()),
        }
    }

    pub fn into_mapping(self) -> Mapping {
        self.fields
    }
}

/// Read access to the fields of one record mapping.
#[derive(Debug, Clone, Copy)]
pub struct FieldReader<'a> {
    owner: &'static str,
    fields: &'a Mapping,
}

impl<'a> FieldReader<'a> {
    pub fn new(owner: &'static str, fields: &'a Mapping) -> Self {
        Self { owner, fields }
    }

    /// Decode a field that must be present. A `null` value goes to the
    /// field's own codec, which rejects it unless `T` admits null.
    pub fn required<T: Codec>(&self, name: &str) -> Result<T> {
        let value = self
            .fields
            .get(name)
            .ok_or_else(|| CodecError::missing_field(self.owner, name))?;
        T::decode(value).map_err(|e| e.at(|| field_path(self.owner, name)))
    }

    /// Decode an optional field; absent and `null` both read as `None`.
    pub fn optional<T: Codec>(&self, name: &str) -> Result<Option<T>> {
        match self.fields.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(v) => T::decode(v)
                .map(Some)
                .map_err(|e| e.at(|| field_path(self.owner, name))),
        }
    }
}
