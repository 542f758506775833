//! Ordered key/value storage for DataSet nodes.
//!
//! This module provides [`KeyValueMap`], a wrapper around [`IndexMap`] that keeps
//! keys in insertion order. Order matters: every renderer emits a node's
//! attributes in the order the producer set them, and key enumeration with
//! [`KeyValueMap::next_key`] walks that same order.
//!
//! Overwriting a key replaces its value (and with it the type tag) but keeps
//! the key's original position.
//!
//! ## Examples
//!
//! ```rust
//! use dataset_show::{KeyValueMap, Value};
//!
//! let mut map = KeyValueMap::new();
//! map.insert("DimmID".to_string(), Value::from("0x0001"));
//! map.insert("Capacity".to_string(), Value::from(16u64));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("Capacity").and_then(|v| v.as_u64()), Some(16));
//! ```

use crate::{KeyValInfo, Value};
use indexmap::IndexMap;

/// An insertion-ordered map of keys to typed values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyValueMap(IndexMap<String, Value>);

impl KeyValueMap {
    /// Creates an empty `KeyValueMap`.
    #[must_use]
    pub fn new() -> Self {
        KeyValueMap(IndexMap::new())
    }

    /// Creates an empty `KeyValueMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        KeyValueMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and the
    /// key keeps its position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dataset_show::{KeyValueMap, Value};
    ///
    /// let mut map = KeyValueMap::new();
    /// assert!(map.insert("key".to_string(), Value::from(42u32)).is_none());
    /// assert_eq!(
    ///     map.insert("key".to_string(), Value::from(true)),
    ///     Some(Value::from(42u32))
    /// );
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Removes a key, preserving the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the map holds a value for the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the descriptor of the key following `previous`.
    ///
    /// `None` yields the first key. The last key, or a key that is not in the
    /// map, yields `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dataset_show::{KeyType, KeyValueMap, Value};
    ///
    /// let mut map = KeyValueMap::new();
    /// map.insert("a".to_string(), Value::from(1u8));
    /// map.insert("b".to_string(), Value::from("x"));
    ///
    /// let first = map.next_key(None).unwrap();
    /// assert_eq!((first.key, first.key_type), ("a", KeyType::U8));
    /// let second = map.next_key(Some(first.key)).unwrap();
    /// assert_eq!(second.key, "b");
    /// assert!(map.next_key(Some(second.key)).is_none());
    /// ```
    #[must_use]
    pub fn next_key(&self, previous: Option<&str>) -> Option<KeyValInfo<'_>> {
        let index = match previous {
            None => 0,
            Some(key) => self.0.get_index_of(key)? + 1,
        };
        self.0
            .get_index(index)
            .map(|(key, value)| KeyValInfo::new(key, value))
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a KeyValueMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for KeyValueMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        KeyValueMap(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_keeps_position() {
        let mut map = KeyValueMap::new();
        map.insert("a".to_string(), Value::from(1u32));
        map.insert("b".to_string(), Value::from(2u32));
        map.insert("a".to_string(), Value::from("one"));

        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(map.get("a"), Some(&Value::from("one")));
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut map: KeyValueMap = ["a", "b", "c"]
            .iter()
            .map(|k| (k.to_string(), Value::from(true)))
            .collect();
        assert!(map.remove("b").is_some());
        assert!(map.remove("b").is_none());

        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn test_next_key_unknown_previous() {
        let mut map = KeyValueMap::new();
        map.insert("a".to_string(), Value::from(1i8));
        assert!(map.next_key(Some("zzz")).is_none());
        assert!(KeyValueMap::new().next_key(None).is_none());
    }
}
