//! types.rs
//! Error taxonomy shared by every codec.

use serde_json::Value;

use crate::constants::VALUE_CONTEXT;
use crate::utils::{field_path, value_kind};

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Coarse error taxonomy shared by every codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Structurally invalid input: missing field, wrong JSON kind, value out of range.
    MalformedData,
    /// Tuple sequence length differs from the declared arity.
    ArityMismatch,
    /// Ordinal does not belong to any member of the enumeration.
    UnknownEnumValue,
    /// Discriminant does not belong to any registered variant.
    UnknownVariantTag,
}

/// Unified codec error.
/// - Raised at the point of detection and propagated unchanged with `?`.
/// - Every variant carries enough context (type name, field, ordinal, tag)
///   to point at the offending part of the document.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CodecError {
    /// Missing or type-mismatched field, non-object record input, bad encode value.
    #[error("malformed data at {context}: {reason}")]
    MalformedData { context: String, reason: String },

    /// Tuple length mismatch on decode.
    #[error("tuple {tuple}: expected {expected} elements, got {actual}")]
    ArityMismatch {
        tuple: &'static str,
        expected: usize,
        actual: usize,
    },

    /// No enumeration member carries this ordinal.
    #[error("enum {enumeration}: no member with ordinal {ordinal}")]
    UnknownEnumValue {
        enumeration: &'static str,
        ordinal: Value,
    },

    /// No registered variant carries this discriminant.
    #[error("interface {interface}: unknown variant tag {tag:?}")]
    UnknownVariantTag { interface: &'static str, tag: String },
}

impl CodecError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::MalformedData { .. } => ErrorKind::MalformedData,
            CodecError::ArityMismatch { .. } => ErrorKind::ArityMismatch,
            CodecError::UnknownEnumValue { .. } => ErrorKind::UnknownEnumValue,
            CodecError::UnknownVariantTag { .. } => ErrorKind::UnknownVariantTag,
        }
    }

    pub fn malformed(context: impl Into<String>, reason: impl Into<String>) -> Self {
        CodecError::MalformedData {
            context: context.into(),
            reason: reason.into(),
        }
    }

    /// Wrong JSON kind where `expected` was required.
    pub fn type_mismatch(context: impl Into<String>, expected: &str, found: &Value) -> Self {
        Self::malformed(
            context,
            format!("expected {}, found {}", expected, value_kind(found)),
        )
    }

    /// Wrong JSON kind for a whole record, tuple or interface. Carries the
    /// placeholder context so an enclosing field or element can claim it.
    pub fn shape_mismatch(owner: &str, expected: &str, found: &Value) -> Self {
        Self::malformed(
            VALUE_CONTEXT,
            format!("expected {} for {}, found {}", expected, owner, value_kind(found)),
        )
    }

    pub fn missing_field(owner: &str, field: &str) -> Self {
        Self::malformed(field_path(owner, field), "missing required field")
    }

    /// Attach a location to an error raised by a leaf value codec.
    /// Errors that already name their location pass through unchanged.
    pub(crate) fn at(self, location: impl FnOnce() -> String) -> Self {
        match self {
            CodecError::MalformedData { context, reason } if context == VALUE_CONTEXT => {
                CodecError::MalformedData {
                    context: location(),
                    reason,
                }
            }
            other => other,
        }
    }

    pub fn unknown_enum_value(enumeration: &'static str, ordinal: Value) -> Self {
        CodecError::UnknownEnumValue {
            enumeration,
            ordinal,
        }
    }

    pub fn unknown_variant_tag(interface: &'static str, tag: impl Into<String>) -> Self {
        CodecError::UnknownVariantTag {
            interface,
            tag: tag.into(),
        }
    }
}
