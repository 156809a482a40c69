//! enumeration/mod.rs
//! Closed sets of named singletons travelling as small ordinals.
//!
//! Notes:
//! - Members live in static storage, built once and never mutated.
//! - Decode hands back a `&'static` reference to the existing member, so
//!   identity survives a round trip (`std::ptr::eq`).
//! - Fieldless `#[repr]` enums deriving `num_enum::TryFromPrimitive` can use
//!   the constant-time path in `repr`.

pub mod types;
pub mod encode;
pub mod decode;
pub mod repr;

pub use types::*;
pub use encode::*;
pub use decode::*;
pub use repr::*;
