//! tuple/decode.rs
//!
//! Tuple decoding.
//!
//! Design notes:
//! - Length is checked before any element is decoded.
//! - Generated code must consume every position it declared.

use serde_json::Value;

use crate::tuple::types::{ElementReader, Tuple};
use crate::types::{CodecError, Result};

/// Decode a tuple from a sequence.
///
/// # Errors
/// - `MalformedData` if the input is not a sequence or an element is invalid.
/// - `ArityMismatch` if the sequence length differs from `T::ARITY`.
pub fn decode<T: Tuple>(value: &Value) -> Result<T> {
    let elements = value
        .as_array()
        .ok_or_else(|| CodecError::shape_mismatch(T::NAME, "sequence", value))?;

    if elements.len() != T::ARITY {
        return Err(CodecError::ArityMismatch {
            tuple: T::NAME,
            expected: T::ARITY,
            actual: elements.len(),
        });
    }

    let mut reader = ElementReader::new(T::NAME, elements);
    let decoded = T::decode_elements(&mut reader)?;

    if reader.remaining() != 0 {
        return Err(CodecError::malformed(
            T::NAME,
            format!("{} elements left unread", reader.remaining()),
        ));
    }

    Ok(decoded)
}
