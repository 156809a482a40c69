//! enumeration/types.rs
//! `Enumeration` contract and ordinal representations.

use std::fmt;

use serde_json::Value;

use crate::codec::Codec;
use crate::types::{CodecError, Result};

/// Wire representation of an ordinal.
///
/// - `i64`: the default integer ordinal.
/// - `&'static str`: explicit string values (`enum E as string`).
pub trait OrdinalValue: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    fn to_wire(self) -> Value;
    /// Exact match against a wire value. Different JSON kinds never match.
    fn matches(self, wire: &Value) -> bool;
}

impl OrdinalValue for i64 {
    fn to_wire(self) -> Value {
        Value::from(self)
    }

    fn matches(self, wire: &Value) -> bool {
        wire.as_i64() == Some(self)
    }
}

impl OrdinalValue for &'static str {
    fn to_wire(self) -> Value {
        Value::String(self.to_owned())
    }

    fn matches(self, wire: &Value) -> bool {
        wire.as_str() == Some(self)
    }
}

/// A closed, fixed set of named singleton members.
///
/// `members()` must return the same static slice on every call; decode
/// returns references into it.
pub trait Enumeration: Sized + Sync + 'static {
    const NAME: &'static str;
    type Ordinal: OrdinalValue;

    fn members() -> &'static [Self];
    fn ordinal(&self) -> Self::Ordinal;
    fn name(&self) -> &'static str;

    /// The member carrying `ordinal`, if any.
    fn from_ordinal(ordinal: Self::Ordinal) -> Option<&'static Self> {
        Self::members().iter().find(|m| m.ordinal() == ordinal)
    }

    /// The member named `name`, if any.
    fn by_name(name: &str) -> Option<&'static Self> {
        Self::members().iter().find(|m| m.name() == name)
    }
}

/// Fields of enumeration type hold the singleton itself.
impl<E: Enumeration> Codec for &'static E {
    fn encode(&self) -> Result<Value> {
        Ok(crate::enumeration::encode(*self))
    }

    fn decode(value: &Value) -> Result<Self> {
        crate::enumeration::decode::<E>(value)
    }
}

/// Check that no two members share an ordinal or a name.
pub fn verify_ordinals<E: Enumeration>() -> Result<()> {
    let members = E::members();
    for (i, member) in members.iter().enumerate() {
        for other in &members[i + 1..] {
            if member.ordinal() == other.ordinal() {
                return Err(CodecError::malformed(
                    E::NAME,
                    format!(
                        "members {} and {} share ordinal {:?}",
                        member.name(),
                        other.name(),
                        member.ordinal()
                    ),
                ));
            }
            if member.name() == other.name() {
                return Err(CodecError::malformed(
                    E::NAME,
                    format!("member name {} declared twice", member.name()),
                ));
            }
        }
    }
    Ok(())
}
