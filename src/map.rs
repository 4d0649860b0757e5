//! Ordered map type for Ako tables.
//!
//! [`AkoMap`] wraps an [`IndexMap`] so that table fields keep the order in
//! which they were first assigned. Re-assigning an existing key replaces its
//! value without moving it, which is what dotted-path assignment relies on.
//!
//! ## Examples
//!
//! ```rust
//! use serde_ako::{AkoMap, AkoValue};
//!
//! let mut map = AkoMap::new();
//! map.insert("name".to_string(), AkoValue::from("Miku"));
//! map.insert("level".to_string(), AkoValue::from(39));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Miku"));
//! ```

use crate::AkoValue;
use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of string keys to Ako values.
///
/// # Examples
///
/// ```rust
/// use serde_ako::{AkoMap, AkoValue};
///
/// let mut map = AkoMap::new();
/// map.insert("first".to_string(), AkoValue::from(1));
/// map.insert("second".to_string(), AkoValue::from(2));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AkoMap(IndexMap<String, AkoValue>);

impl AkoMap {
    /// Creates an empty `AkoMap`.
    #[must_use]
    pub fn new() -> Self {
        AkoMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        AkoMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ako::{AkoMap, AkoValue};
    ///
    /// let mut map = AkoMap::new();
    /// assert!(map.insert("key".to_string(), AkoValue::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), AkoValue::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: AkoValue) -> Option<AkoValue> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AkoValue> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut AkoValue> {
        self.0.get_mut(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key, shifting later entries to keep the remaining order.
    pub fn remove(&mut self, key: &str) -> Option<AkoValue> {
        self.0.shift_remove(key)
    }

    /// Returns the nested table stored at `key`, first replacing an absent or
    /// non-table value with an empty table.
    pub fn table_entry(&mut self, key: String) -> Option<&mut AkoMap> {
        let slot = self.0.entry(key).or_insert(AkoValue::Null);
        if !slot.is_table() {
            *slot = AkoValue::Table(AkoMap::new());
        }
        slot.as_table_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, AkoValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, AkoValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, AkoValue> {
        self.0.iter()
    }
}

impl From<HashMap<String, AkoValue>> for AkoMap {
    fn from(map: HashMap<String, AkoValue>) -> Self {
        AkoMap(map.into_iter().collect())
    }
}

impl From<AkoMap> for HashMap<String, AkoValue> {
    fn from(map: AkoMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for AkoMap {
    type Item = (String, AkoValue);
    type IntoIter = indexmap::map::IntoIter<String, AkoValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a AkoMap {
    type Item = (&'a String, &'a AkoValue);
    type IntoIter = indexmap::map::Iter<'a, String, AkoValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, AkoValue)> for AkoMap {
    fn from_iter<T: IntoIterator<Item = (String, AkoValue)>>(iter: T) -> Self {
        AkoMap(IndexMap::from_iter(iter))
    }
}
