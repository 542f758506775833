//! Typed values stored on DataSet nodes.
//!
//! This module provides the [`Value`] enum, one variant per scalar kind a node
//! can hold, and the [`KeyType`] tag describing it.
//!
//! ## Core Types
//!
//! - [`Value`]: a tagged scalar (string, 8/16/32/64-bit signed and unsigned
//!   integers, bool)
//! - [`KeyType`]: the type tag of a value, used in lookups and rendering
//! - [`KeyValInfo`]: descriptor yielded while enumerating a node's keys
//! - [`Lookup`]: result of a defaulted lookup, distinguishing a found value
//!   from a returned default
//!
//! ## Usage Patterns
//!
//! ```rust
//! use dataset_show::{KeyType, Value};
//!
//! let value = Value::from(42u16);
//! assert_eq!(value.key_type(), KeyType::U16);
//! assert_eq!(value.size(), 2);
//! assert_eq!(value.as_u16(), Some(42));
//! assert_eq!(value.as_u32(), None);
//! ```
//!
//! Strings report the byte length of their UTF-16 encoding including the
//! terminating NUL, the width a wide string occupies on the wire:
//!
//! ```rust
//! use dataset_show::Value;
//!
//! assert_eq!(Value::from("abc").size(), 8);
//! ```

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// The type tag of a stored value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyType {
    WStr,
    U64,
    I64,
    U32,
    I32,
    U16,
    I16,
    U8,
    I8,
    Bool,
}

impl KeyType {
    /// Returns the short lowercase name used in rendered output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            KeyType::WStr => "wstr",
            KeyType::U64 => "u64",
            KeyType::I64 => "i64",
            KeyType::U32 => "u32",
            KeyType::I32 => "i32",
            KeyType::U16 => "u16",
            KeyType::I16 => "i16",
            KeyType::U8 => "u8",
            KeyType::I8 => "i8",
            KeyType::Bool => "bool",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed scalar attached to a node under a key.
///
/// The type tag and byte size are derived from the variant, so they can never
/// disagree with the stored payload.
///
/// # Examples
///
/// ```rust
/// use dataset_show::Value;
///
/// let id = Value::from("0x0001");
/// let healthy = Value::from(true);
///
/// assert!(id.is_wstr());
/// assert_eq!(healthy.as_bool(), Some(true));
/// assert_eq!(healthy.to_string(), "true");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    WStr(String),
    U64(u64),
    I64(i64),
    U32(u32),
    I32(i32),
    U16(u16),
    I16(i16),
    U8(u8),
    I8(i8),
    Bool(bool),
}

impl Value {
    /// Returns the type tag of this value.
    #[inline]
    #[must_use]
    pub const fn key_type(&self) -> KeyType {
        match self {
            Value::WStr(_) => KeyType::WStr,
            Value::U64(_) => KeyType::U64,
            Value::I64(_) => KeyType::I64,
            Value::U32(_) => KeyType::U32,
            Value::I32(_) => KeyType::I32,
            Value::U16(_) => KeyType::U16,
            Value::I16(_) => KeyType::I16,
            Value::U8(_) => KeyType::U8,
            Value::I8(_) => KeyType::I8,
            Value::Bool(_) => KeyType::Bool,
        }
    }

    /// Returns the byte size of the encoded value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dataset_show::Value;
    ///
    /// assert_eq!(Value::from(1u64).size(), 8);
    /// assert_eq!(Value::from(-1i8).size(), 1);
    /// assert_eq!(Value::from(false).size(), 1);
    /// assert_eq!(Value::from("").size(), 2);
    /// ```
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Value::WStr(s) => (s.encode_utf16().count() + 1) * 2,
            Value::U64(_) | Value::I64(_) => 8,
            Value::U32(_) | Value::I32(_) => 4,
            Value::U16(_) | Value::I16(_) => 2,
            Value::U8(_) | Value::I8(_) | Value::Bool(_) => 1,
        }
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_wstr(&self) -> bool {
        matches!(self, Value::WStr(_))
    }

    /// Returns `true` if the value is any of the integer variants.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        !matches!(self, Value::WStr(_) | Value::Bool(_))
    }

    /// If the value is a string, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_wstr(&self) -> Option<&str> {
        match self {
            Value::WStr(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns `true` for a string that needs escaping in markup output.
    pub(crate) fn needs_escaping(&self) -> bool {
        match self {
            Value::WStr(s) => s.chars().any(|ch| {
                matches!(ch, '<' | '>' | '&' | '"' | '\'' | '\u{fffe}' | '\u{ffff}')
                    || (ch.is_ascii_control() && !matches!(ch, '\t' | '\n' | '\r' | '\u{7f}'))
            }),
            _ => false,
        }
    }
}

macro_rules! int_accessors {
    ($($variant:ident => $ty:ty, $as_fn:ident;)*) => {
        impl Value {
            $(
                /// Returns the stored integer when the variant matches exactly.
                #[inline]
                #[must_use]
                pub const fn $as_fn(&self) -> Option<$ty> {
                    match self {
                        Value::$variant(v) => Some(*v),
                        _ => None,
                    }
                }
            )*
        }

        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }

            impl FromValue for $ty {
                const KEY_TYPE: KeyType = KeyType::$variant;

                fn from_value(value: &Value) -> Option<Self> {
                    value.$as_fn()
                }
            }
        )*
    };
}

int_accessors! {
    U64 => u64, as_u64;
    I64 => i64, as_i64;
    U32 => u32, as_u32;
    I32 => i32, as_i32;
    U16 => u16, as_u16;
    I16 => i16, as_i16;
    U8 => u8, as_u8;
    I8 => i8, as_i8;
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::WStr(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::WStr(value.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::WStr(s) => f.write_str(s),
            Value::U64(v) => write!(f, "{}", v),
            Value::I64(v) => write!(f, "{}", v),
            Value::U32(v) => write!(f, "{}", v),
            Value::I32(v) => write!(f, "{}", v),
            Value::U16(v) => write!(f, "{}", v),
            Value::I16(v) => write!(f, "{}", v),
            Value::U8(v) => write!(f, "{}", v),
            Value::I8(v) => write!(f, "{}", v),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::WStr(s) => serializer.serialize_str(s),
            Value::U64(v) => serializer.serialize_u64(*v),
            Value::I64(v) => serializer.serialize_i64(*v),
            Value::U32(v) => serializer.serialize_u32(*v),
            Value::I32(v) => serializer.serialize_i32(*v),
            Value::U16(v) => serializer.serialize_u16(*v),
            Value::I16(v) => serializer.serialize_i16(*v),
            Value::U8(v) => serializer.serialize_u8(*v),
            Value::I8(v) => serializer.serialize_i8(*v),
            Value::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

/// Rust types that can be read back out of a [`Value`] by exact type tag.
///
/// No widening is performed: a `u16` stored value is not readable
/// as `u32`.
pub trait FromValue: Sized {
    /// Tag a stored value must carry to be converted.
    const KEY_TYPE: KeyType;

    /// Converts the value, or returns `None` on a tag mismatch.
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for bool {
    const KEY_TYPE: KeyType = KeyType::Bool;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromValue for String {
    const KEY_TYPE: KeyType = KeyType::WStr;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_wstr().map(str::to_string)
    }
}

/// Outcome of a lookup that falls back to a caller-supplied default.
///
/// # Examples
///
/// ```rust
/// use dataset_show::{DataSet, Lookup};
///
/// let mut node = DataSet::new("Sensor");
/// node.set_i32("Temp", 41);
///
/// assert_eq!(node.get_i32("Temp", 0).unwrap(), Lookup::Found(41));
/// assert_eq!(node.get_i32("Alarm", -1).unwrap(), Lookup::NotFound(-1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The key was present with the requested type
    Found(T),
    /// The key was absent; carries the untouched default
    NotFound(T),
}

impl<T> Lookup<T> {
    /// Returns `true` if the value came from the node.
    #[inline]
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// Returns the held value, whether it was found or defaulted.
    #[inline]
    pub fn into_value(self) -> T {
        match self {
            Lookup::Found(v) | Lookup::NotFound(v) => v,
        }
    }

    /// Returns the found value, discarding a default.
    #[inline]
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(v) => Some(v),
            Lookup::NotFound(_) => None,
        }
    }
}

/// Descriptor of one key/value pair, produced by key enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyValInfo<'a> {
    pub key: &'a str,
    pub key_type: KeyType,
    pub size: usize,
}

impl<'a> KeyValInfo<'a> {
    pub(crate) fn new(key: &'a str, value: &Value) -> Self {
        KeyValInfo {
            key,
            key_type: value.key_type(),
            size: value.size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_follow_type() {
        assert_eq!(Value::from(0u64).size(), 8);
        assert_eq!(Value::from(0i64).size(), 8);
        assert_eq!(Value::from(0u32).size(), 4);
        assert_eq!(Value::from(0i32).size(), 4);
        assert_eq!(Value::from(0u16).size(), 2);
        assert_eq!(Value::from(0i16).size(), 2);
        assert_eq!(Value::from(0u8).size(), 1);
        assert_eq!(Value::from(0i8).size(), 1);
        assert_eq!(Value::from(true).size(), 1);
    }

    #[test]
    fn test_wstr_size_counts_utf16_units() {
        assert_eq!(Value::from("DIMM").size(), 10);
        // U+1F600 is a surrogate pair in UTF-16
        assert_eq!(Value::from("\u{1F600}").size(), 6);
    }

    #[test]
    fn test_no_widening() {
        let v = Value::from(7u16);
        assert_eq!(u16::from_value(&v), Some(7));
        assert_eq!(u32::from_value(&v), None);
        assert_eq!(i16::from_value(&v), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(-12i16).to_string(), "-12");
        assert_eq!(Value::from(false).to_string(), "false");
        assert_eq!(Value::from("x y").to_string(), "x y");
    }

    #[test]
    fn test_lookup_helpers() {
        assert!(Lookup::Found(1).is_found());
        assert_eq!(Lookup::NotFound(3).into_value(), 3);
        assert_eq!(Lookup::NotFound(3).found(), None);
    }

    #[test]
    fn test_serialize_value() {
        let json = serde_json::to_string(&Value::from(5u8)).unwrap();
        assert_eq!(json, "5");
        let json = serde_json::to_string(&Value::from("a")).unwrap();
        assert_eq!(json, "\"a\"");
    }
}
