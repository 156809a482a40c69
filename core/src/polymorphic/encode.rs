//! polymorphic/encode.rs
//!
//! Variant encoding.
//!
//! Design notes:
//! - Fields are encoded exactly as the record codec would.
//! - `"type"` is always written, and written first.
//! - A variant may not declare a field named `"type"`.

use serde_json::Value;

use crate::codec::Mapping;
use crate::constants::TYPE_KEY;
use crate::polymorphic::types::{Interface, Variant};
use crate::record;
use crate::types::{CodecError, Result};
use crate::utils::field_path;

/// Encode one variant: its record fields plus the discriminant.
pub fn encode_variant<V: Variant>(variant: &V) -> Result<Mapping> {
    if V::FIELDS.contains(&TYPE_KEY) {
        return Err(CodecError::malformed(
            field_path(V::NAME, TYPE_KEY),
            "field collides with the reserved discriminant key",
        ));
    }

    let fields = record::encode_mapping(variant)?;

    let mut out = Mapping::with_capacity(fields.len() + 1);
    out.insert(TYPE_KEY.to_owned(), Value::String(V::TAG.to_owned()));
    out.extend(fields);
    Ok(out)
}

/// Encode an interface value through its active variant.
pub fn encode<I: Interface>(value: &I) -> Result<Value> {
    value.encode_variant().map(Value::Object)
}
