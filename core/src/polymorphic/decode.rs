//! polymorphic/decode.rs
//!
//! Interface decoding.
//!
//! Design notes:
//! - Single-step dispatch: read the tag, hand the mapping to one variant.
//! - Tags match by exact string equality only.
//! - The `"type"` entry is not a declared field of any variant; the record
//!   decode ignores it.

use serde_json::Value;
use tracing::{debug, trace};

use crate::codec::Mapping;
use crate::constants::TYPE_KEY;
use crate::polymorphic::types::{Interface, Variant};
use crate::record;
use crate::types::{CodecError, Result};
use crate::utils::field_path;

/// Decode an interface value, dispatching on the `"type"` discriminant.
///
/// # Errors
/// - `MalformedData` if the input is not a mapping, or `"type"` is missing
///   or not a string, or the selected variant's fields are invalid.
/// - `UnknownVariantTag` if no variant carries the discriminant.
pub fn decode<I: Interface>(value: &Value) -> Result<I> {
    let fields = value
        .as_object()
        .ok_or_else(|| CodecError::shape_mismatch(I::NAME, "mapping", value))?;
    let tag = read_tag(I::NAME, fields)?;

    trace!(interface = I::NAME, tag, "dispatching variant");
    I::decode_variant(tag, fields)
}

/// Decode the fields of the variant selected by dispatch.
pub fn decode_variant<V: Variant>(fields: &Mapping) -> Result<V> {
    record::decode_mapping(fields)
}

/// Decode a mapping that must hold exactly variant `V`.
///
/// # Errors
/// `UnknownVariantTag` if the mapping carries another discriminant.
pub fn decode_as<V: Variant>(value: &Value) -> Result<V> {
    let fields = value
        .as_object()
        .ok_or_else(|| CodecError::shape_mismatch(V::NAME, "mapping", value))?;
    let tag = read_tag(V::NAME, fields)?;
    if tag != V::TAG {
        debug!(variant = V::NAME, tag, expected = V::TAG, "variant tag mismatch");
        return Err(CodecError::unknown_variant_tag(V::NAME, tag));
    }
    decode_variant(fields)
}

/// Error for the default dispatch arm.
pub fn unknown_tag<I: Interface>(tag: &str) -> CodecError {
    debug!(interface = I::NAME, tag, "unknown variant tag");
    CodecError::unknown_variant_tag(I::NAME, tag)
}

fn read_tag<'a>(owner: &str, fields: &'a Mapping) -> Result<&'a str> {
    match fields.get(TYPE_KEY) {
        Some(Value::String(tag)) => Ok(tag),
        Some(other) => Err(CodecError::type_mismatch(
            field_path(owner, TYPE_KEY),
            "string",
            other,
        )),
        None => Err(CodecError::missing_field(owner, TYPE_KEY)),
    }
}
