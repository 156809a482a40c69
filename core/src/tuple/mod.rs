//! tuple/mod.rs
//! Codec for fixed-arity, unlabeled tuples.
//!
//! A tuple travels as a sequence of exactly `ARITY` elements, in order.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
