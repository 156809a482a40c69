//! tuple/encode.rs
//!
//! Tuple encoding.

use serde_json::Value;

use crate::tuple::types::{ElementWriter, Tuple};
use crate::types::{CodecError, Result};

/// Encode a tuple into a sequence of exactly `T::ARITY` elements.
pub fn encode<T: Tuple>(value: &T) -> Result<Value> {
    let mut out = ElementWriter::new(T::NAME, T::ARITY);
    value.encode_elements(&mut out)?;

    if out.len() != T::ARITY {
        return Err(CodecError::malformed(
            T::NAME,
            format!("encoded {} elements, tuple declares {}", out.len(), T::ARITY),
        ));
    }

    Ok(Value::Array(out.into_elements()))
}
