//! enumeration/repr.rs
//! Constant-time path for fieldless `#[repr]` enums.
//!
//! `num_enum::TryFromPrimitive` generates the reverse lookup as a `match`,
//! so decode does not scan. Fieldless variants are `Copy` constants: the
//! returned value is the member itself.

use num_enum::TryFromPrimitive;
use serde_json::Value;
use tracing::debug;

use crate::types::{CodecError, Result};

/// Encode a repr enum as its discriminant.
pub fn encode_repr<E>(member: E) -> Value
where
    E: TryFromPrimitive + Into<<E as TryFromPrimitive>::Primitive>,
    <E as TryFromPrimitive>::Primitive: Into<Value>,
{
    let raw: E::Primitive = member.into();
    raw.into()
}

/// Decode a repr enum from its discriminant.
///
/// # Errors
/// `UnknownEnumValue` when the wire value is not an integer, does not fit
/// the repr type, or names no variant.
pub fn decode_repr<E>(value: &Value) -> Result<E>
where
    E: TryFromPrimitive,
    <E as TryFromPrimitive>::Primitive: TryFrom<i64>,
{
    let unknown = || {
        debug!(enumeration = E::NAME, ordinal = %value, "unknown enum value");
        CodecError::unknown_enum_value(E::NAME, value.clone())
    };

    let raw = value
        .as_i64()
        .and_then(|n| <E::Primitive as TryFrom<i64>>::try_from(n).ok())
        .ok_or_else(unknown)?;

    E::try_from_primitive(raw).map_err(|_| unknown())
}
