//! enumeration/decode.rs
//!
//! Enumeration decoding.
//!
//! Design notes:
//! - Decode returns the stored singleton, never a copy.

use serde_json::Value;
use tracing::{debug, trace};

use crate::enumeration::types::{Enumeration, OrdinalValue};
use crate::types::{CodecError, Result};

/// Decode a wire ordinal into the matching singleton.
///
/// Linear scan over `E::members()`; enumerations are small and fixed.
///
/// # Errors
/// `UnknownEnumValue` carrying the offending wire value when no member
/// matches, including when the wire value has the wrong JSON kind.
pub fn decode<E: Enumeration>(value: &Value) -> Result<&'static E> {
    match E::members().iter().find(|m| m.ordinal().matches(value)) {
        Some(member) => {
            trace!(enumeration = E::NAME, member = member.name(), "decoded enum member");
            Ok(member)
        }
        None => {
            debug!(enumeration = E::NAME, ordinal = %value, "unknown enum value");
            Err(CodecError::unknown_enum_value(E::NAME, value.clone()))
        }
    }
}

/// Decode an already typed ordinal into the matching singleton.
pub fn decode_ordinal<E: Enumeration>(ordinal: E::Ordinal) -> Result<&'static E> {
    E::from_ordinal(ordinal).ok_or_else(|| {
        debug!(enumeration = E::NAME, ordinal = ?ordinal, "unknown enum value");
        CodecError::unknown_enum_value(E::NAME, ordinal.to_wire())
    })
}
