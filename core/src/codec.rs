//! codec.rs
//! Value-level codec shared by every field and element.
//!
//! Design notes:
//! - Primitives map straight onto JSON kinds; nothing is coerced.
//! - Containers recurse into their element codec.
//! - Leaf errors are raised with the `value` placeholder context; the
//!   enclosing record/tuple codec rewrites it to the field or index path.

use std::collections::BTreeMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Number, Value};

use crate::constants::{DATETIME_PRECISION, DATETIME_USE_Z, VALUE_CONTEXT};
use crate::types::{CodecError, Result};

/// The generic mapping: string keys to dynamically-typed values.
pub type Mapping = serde_json::Map<String, Value>;

/// Canonical encode/decode contract between a typed value and its generic form.
pub trait Codec: Sized {
    fn encode(&self) -> Result<Value>;
    fn decode(value: &Value) -> Result<Self>;
}

fn mismatch(expected: &str, found: &Value) -> CodecError {
    CodecError::type_mismatch(VALUE_CONTEXT, expected, found)
}

impl Codec for bool {
    fn encode(&self) -> Result<Value> {
        Ok(Value::Bool(*self))
    }

    fn decode(value: &Value) -> Result<Self> {
        value.as_bool().ok_or_else(|| mismatch("boolean", value))
    }
}

impl Codec for String {
    fn encode(&self) -> Result<Value> {
        Ok(Value::String(self.clone()))
    }

    fn decode(value: &Value) -> Result<Self> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| mismatch("string", value))
    }
}

macro_rules! signed_codec {
    ($($ty:ty),+) => {$(
        impl Codec for $ty {
            fn encode(&self) -> Result<Value> {
                Ok(Value::from(*self))
            }

            fn decode(value: &Value) -> Result<Self> {
                let n = value.as_i64().ok_or_else(|| mismatch("integer", value))?;
                <$ty>::try_from(n).map_err(|_| {
                    CodecError::malformed(
                        VALUE_CONTEXT,
                        format!("{} out of range for {}", n, stringify!($ty)),
                    )
                })
            }
        }
    )+};
}

macro_rules! unsigned_codec {
    ($($ty:ty),+) => {$(
        impl Codec for $ty {
            fn encode(&self) -> Result<Value> {
                Ok(Value::from(*self))
            }

            fn decode(value: &Value) -> Result<Self> {
                let n = value
                    .as_u64()
                    .ok_or_else(|| mismatch("unsigned integer", value))?;
                <$ty>::try_from(n).map_err(|_| {
                    CodecError::malformed(
                        VALUE_CONTEXT,
                        format!("{} out of range for {}", n, stringify!($ty)),
                    )
                })
            }
        }
    )+};
}

signed_codec!(i8, i16, i32, i64);
unsigned_codec!(u8, u16, u32, u64);

impl Codec for f64 {
    fn encode(&self) -> Result<Value> {
        Number::from_f64(*self)
            .map(Value::Number)
            .ok_or_else(|| CodecError::malformed(VALUE_CONTEXT, format!("non-finite float {}", self)))
    }

    fn decode(value: &Value) -> Result<Self> {
        value.as_f64().ok_or_else(|| mismatch("number", value))
    }
}

impl Codec for f32 {
    fn encode(&self) -> Result<Value> {
        f64::from(*self).encode()
    }

    fn decode(value: &Value) -> Result<Self> {
        let n = f64::decode(value)?;
        let narrowed = n as f32;
        if narrowed.is_finite() {
            Ok(narrowed)
        } else {
            Err(CodecError::malformed(
                VALUE_CONTEXT,
                format!("{} out of range for f32", n),
            ))
        }
    }
}

/// Schema `any`: passed through untouched.
impl Codec for Value {
    fn encode(&self) -> Result<Value> {
        Ok(self.clone())
    }

    fn decode(value: &Value) -> Result<Self> {
        Ok(value.clone())
    }
}

/// Nullable element: `null` <-> `None`.
impl<T: Codec> Codec for Option<T> {
    fn encode(&self) -> Result<Value> {
        match self {
            Some(inner) => inner.encode(),
            None => Ok(Value::Null),
        }
    }

    fn decode(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::decode(other).map(Some),
        }
    }
}

impl<T: Codec> Codec for Box<T> {
    fn encode(&self) -> Result<Value> {
        (**self).encode()
    }

    fn decode(value: &Value) -> Result<Self> {
        T::decode(value).map(Box::new)
    }
}

/// Schema `[T]`.
impl<T: Codec> Codec for Vec<T> {
    fn encode(&self) -> Result<Value> {
        self.iter()
            .map(Codec::encode)
            .collect::<Result<Vec<_>>>()
            .map(Value::Array)
    }

    fn decode(value: &Value) -> Result<Self> {
        value
            .as_array()
            .ok_or_else(|| mismatch("sequence", value))?
            .iter()
            .map(T::decode)
            .collect()
    }
}

/// Schema `{string: T}`.
impl<T: Codec> Codec for BTreeMap<String, T> {
    fn encode(&self) -> Result<Value> {
        let mut out = Mapping::new();
        for (key, item) in self {
            out.insert(key.clone(), item.encode()?);
        }
        Ok(Value::Object(out))
    }

    fn decode(value: &Value) -> Result<Self> {
        value
            .as_object()
            .ok_or_else(|| mismatch("mapping", value))?
            .iter()
            .map(|(key, item)| T::decode(item).map(|decoded| (key.clone(), decoded)))
            .collect()
    }
}

/// Schema `bytes`, carried as a standard base64 string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bytes(pub Vec<u8>);

impl From<Vec<u8>> for Bytes {
    fn from(raw: Vec<u8>) -> Self {
        Bytes(raw)
    }
}

impl AsRef<[u8]> for Bytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Codec for Bytes {
    fn encode(&self) -> Result<Value> {
        Ok(Value::String(STANDARD.encode(&self.0)))
    }

    fn decode(value: &Value) -> Result<Self> {
        let text = value.as_str().ok_or_else(|| mismatch("base64 string", value))?;
        STANDARD
            .decode(text)
            .map(Bytes)
            .map_err(|e| CodecError::malformed(VALUE_CONTEXT, format!("invalid base64: {}", e)))
    }
}

/// Schema `datetime`, carried as an RFC 3339 string in UTC.
impl Codec for DateTime<Utc> {
    fn encode(&self) -> Result<Value> {
        Ok(Value::String(
            self.to_rfc3339_opts(DATETIME_PRECISION, DATETIME_USE_Z),
        ))
    }

    fn decode(value: &Value) -> Result<Self> {
        let text = value
            .as_str()
            .ok_or_else(|| mismatch("RFC 3339 string", value))?;
        DateTime::parse_from_rfc3339(text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| CodecError::malformed(VALUE_CONTEXT, format!("invalid datetime: {}", e)))
    }
}

/// Opaque field backed by the type's own serde implementation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Serde<T>(pub T);

impl<T: Serialize + DeserializeOwned> Codec for Serde<T> {
    fn encode(&self) -> Result<Value> {
        serde_json::to_value(&self.0)
            .map_err(|e| CodecError::malformed(VALUE_CONTEXT, e.to_string()))
    }

    fn decode(value: &Value) -> Result<Self> {
        serde_json::from_value(value.clone())
            .map(Serde)
            .map_err(|e| CodecError::malformed(VALUE_CONTEXT, e.to_string()))
    }
}
