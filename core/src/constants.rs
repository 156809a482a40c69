//! constants.rs
//! Reserved keys and wire-level constants shared by every codec.

/// Reserved mapping key holding the discriminant of a polymorphic variant.
/// Present only in mappings produced/consumed by the polymorphic codec.
pub const TYPE_KEY: &str = "type";

/// Seconds precision used when `datetime` fields are written as RFC 3339.
/// `AutoSi` keeps sub-second digits only when present, so encode/decode
/// is lossless down to nanoseconds.
pub const DATETIME_PRECISION: chrono::SecondsFormat = chrono::SecondsFormat::AutoSi;

/// Datetimes are always written in UTC with a `Z` suffix.
pub const DATETIME_USE_Z: bool = true;

/// Placeholder context for errors raised by a leaf value codec.
/// The enclosing record/tuple codec replaces it with the field or index path.
pub const VALUE_CONTEXT: &str = "value";
