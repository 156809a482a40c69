//! record/mod.rs
//! Codec for plain records: a fixed set of named fields, no polymorphism.
//!
//! Notes:
//! - One mapping entry per declared field; optional fields may be absent.
//! - Keys the record does not declare are ignored on decode.
//! - The polymorphic codec reuses this module for each variant's own fields.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
