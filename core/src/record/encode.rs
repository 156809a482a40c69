//! record/encode.rs
//!
//! Record encoding.
//!
//! Design notes:
//! - Each declared field is encoded by its own type's codec.
//! - A generated `encode_fields` that writes a key the record does not
//!   declare is rejected, so encoded mappings always match the schema.

use serde_json::Value;

use crate::codec::Mapping;
use crate::record::types::{FieldWriter, Record};
use crate::types::{CodecError, Result};
use crate::utils::field_path;

/// Encode a record into a generic mapping.
pub fn encode<R: Record>(value: &R) -> Result<Value> {
    encode_mapping(value).map(Value::Object)
}

/// Encode a record's fields without wrapping them in a `Value`.
pub fn encode_mapping<R: Record>(value: &R) -> Result<Mapping> {
    let mut out = FieldWriter::new(R::NAME);
    value.encode_fields(&mut out)?;
    let fields = out.into_mapping();

    if let Some(undeclared) = fields.keys().find(|k| !R::FIELDS.contains(&k.as_str())) {
        return Err(CodecError::malformed(
            field_path(R::NAME, undeclared),
            "field is not declared by the record",
        ));
    }

    Ok(fields)
}
