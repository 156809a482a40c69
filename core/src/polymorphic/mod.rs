//! polymorphic/mod.rs
//! Tagged-union codec: one of several record-shaped variants sharing an
//! interface, selected by the reserved `"type"` discriminant.
//!
//! Notes:
//! - Encode is per variant: the variant's record fields plus `"type"`.
//! - Decode is per interface: read `"type"`, then one exhaustive `match`
//!   in generated code delegates to the variant's record decode.
//! - The variant set is closed at compile time; there is no runtime registry.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
