//! enumeration/encode.rs
//!
//! Enumeration encoding.

use serde_json::Value;

use crate::enumeration::types::{Enumeration, OrdinalValue};

/// Encode a member as its ordinal. Total: every member has one.
pub fn encode<E: Enumeration>(member: &E) -> Value {
    member.ordinal().to_wire()
}
