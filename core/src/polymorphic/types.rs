//! polymorphic/types.rs
//! Variant and interface contracts.

use crate::codec::Mapping;
use crate::record::Record;
use crate::types::{CodecError, Result};

/// A concrete record shape belonging to one interface.
pub trait Variant: Record {
    /// Class-level discriminant, unique within the interface.
    const TAG: &'static str;
}

/// A closed sum of variants.
///
/// Generated code implements this on a Rust enum with one arm per variant:
///
/// ```ignore
/// fn decode_variant(tag: &str, fields: &Mapping) -> Result<Self> {
///     match tag {
///         Circle::TAG => Ok(Shape::Circle(polymorphic::decode_variant(fields)?)),
///         Square::TAG => Ok(Shape::Square(polymorphic::decode_variant(fields)?)),
///         other => Err(polymorphic::unknown_tag::<Self>(other)),
///     }
/// }
/// ```
pub trait Interface: Sized {
    const NAME: &'static str;
    /// Discriminants of every variant, in declaration order.
    const TAGS: &'static [&'static str];

    /// Discriminant of the active variant.
    fn discriminant(&self) -> &'static str;

    /// Encode the active variant with `polymorphic::encode_variant`.
    fn encode_variant(&self) -> Result<Mapping>;

    /// Dispatch on `tag`. The single default arm must return
    /// `polymorphic::unknown_tag::<Self>(tag)`.
    fn decode_variant(tag: &str, fields: &Mapping) -> Result<Self>;
}

/// Check that no two variants of `I` share a discriminant.
pub fn verify_tags<I: Interface>() -> Result<()> {
    for (i, tag) in I::TAGS.iter().enumerate() {
        if I::TAGS[i + 1..].contains(tag) {
            return Err(CodecError::malformed(
                I::NAME,
                format!("discriminant {:?} declared by more than one variant", tag),
            ));
        }
    }
    Ok(())
}
