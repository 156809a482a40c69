//! schema-codec
//!
//! Typed values <-> generic key-value mappings.
//! Records, tuples, ordinal enumerations and tagged unions, each with a
//! canonical encode/decode contract. No I/O, no transport.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;
pub mod codec;

mod macros;

// Codecs
pub mod record;
pub mod tuple;
pub mod enumeration;
pub mod polymorphic;

pub use serde_json;

pub use codec::{Bytes, Codec, Mapping, Serde};
pub use types::{CodecError, ErrorKind, Result};

// -----------------------------------------------------------------------------
// Prelude (generated code and callers)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::codec::{Bytes, Codec, Mapping, Serde};
    pub use crate::enumeration::{Enumeration, OrdinalValue};
    pub use crate::polymorphic::{Interface, Variant};
    pub use crate::record::{FieldReader, FieldWriter, Record};
    pub use crate::tuple::{ElementReader, ElementWriter, Tuple};
    pub use crate::types::{CodecError, ErrorKind, Result};
    pub use crate::{interface_codec, record_codec, repr_enum_codec, tuple_codec};
}
