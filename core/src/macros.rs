//! macros.rs
//! `Codec` impls for generated types, so they nest as fields of each other.

/// Implement `Codec` for record types through the record codec.
#[macro_export]
macro_rules! record_codec {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::codec::Codec for $ty {
            fn encode(&self) -> $crate::Result<$crate::serde_json::Value> {
                $crate::record::encode(self)
            }

            fn decode(value: &$crate::serde_json::Value) -> $crate::Result<Self> {
                $crate::record::decode(value)
            }
        }
    )+};
}

/// Implement `Codec` for tuple types through the tuple codec.
#[macro_export]
macro_rules! tuple_codec {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::codec::Codec for $ty {
            fn encode(&self) -> $crate::Result<$crate::serde_json::Value> {
                $crate::tuple::encode(self)
            }

            fn decode(value: &$crate::serde_json::Value) -> $crate::Result<Self> {
                $crate::tuple::decode(value)
            }
        }
    )+};
}

/// Implement `Codec` for interface types through the polymorphic codec.
#[macro_export]
macro_rules! interface_codec {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::codec::Codec for $ty {
            fn encode(&self) -> $crate::Result<$crate::serde_json::Value> {
                $crate::polymorphic::encode(self)
            }

            fn decode(value: &$crate::serde_json::Value) -> $crate::Result<Self> {
                $crate::polymorphic::decode(value)
            }
        }
    )+};
}

/// Implement `Codec` for fieldless `#[repr]` enums deriving
/// `num_enum::{TryFromPrimitive, IntoPrimitive}`.
#[macro_export]
macro_rules! repr_enum_codec {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::codec::Codec for $ty {
            fn encode(&self) -> $crate::Result<$crate::serde_json::Value> {
                Ok($crate::enumeration::encode_repr(*self))
            }

            fn decode(value: &$crate::serde_json::Value) -> $crate::Result<Self> {
                $crate::enumeration::decode_repr(value)
            }
        }
    )+};
}
