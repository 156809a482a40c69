//! record/decode.rs
//!
//! Record decoding.
//!
//! Design notes:
//! - Input must be a mapping; anything else is `MalformedData`.
//! - Missing or mismatched fields fail the whole record, no partial values.

use serde_json::Value;

use crate::codec::Mapping;
use crate::record::types::{FieldReader, Record};
use crate::types::{CodecError, Result};

/// Decode a record from a generic value, which must be a mapping.
pub fn decode<R: Record>(value: &Value) -> Result<R> {
    let fields = value
        .as_object()
        .ok_or_else(|| CodecError::shape_mismatch(R::NAME, "mapping", value))?;
    decode_mapping(fields)
}

/// Decode a record from an already unwrapped mapping.
pub fn decode_mapping<R: Record>(fields: &Mapping) -> Result<R> {
    R::decode_fields(&FieldReader::new(R::NAME, fields))
}
