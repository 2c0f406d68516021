//! Ordered container type for GGON values.
//!
//! GGON has one associative shape for both lists and maps. [`GgonMap`] keeps
//! entries in insertion order and is keyed by [`Key`], which is either an
//! integer or a string. Whether a container is written as `[...]` or `{...}`
//! is decided at encode time by [`GgonMap::list_len`].
//!
//! ## Why IndexMap?
//!
//! Map entries are written in the order they were inserted, and the consuming
//! ecosystem relies on that order. `IndexMap` gives:
//!
//! - **Deterministic output**: entries encode in a stable order
//! - **Order-preserving removal**: [`GgonMap::remove`] shifts later entries
//!   down instead of swapping the last one in
//!
//! ## Examples
//!
//! ```rust
//! use ggon::{GgonMap, Value};
//!
//! let mut map = GgonMap::new();
//! map.insert("name", Value::from("Scout"));
//! map.insert("class", Value::from("runner"));
//!
//! assert_eq!(map.len(), 2);
//! assert!(!map.is_list());
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Scout"));
//! ```

use crate::Value;
use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::fmt;

/// The reserved key carrying a list's element count.
pub const LENGTH_KEY: &str = "length";

/// A container key: an integer or a string.
///
/// The two never alias. `Key::Int(0)` and `Key::Str("0")` are different keys,
/// and only integer keys count as list indices.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    /// Returns the string if this is a string key.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Str(s) => Some(s),
            Key::Int(_) => None,
        }
    }

    /// Returns the integer if this is an integer key.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(i) => Some(*i),
            Key::Str(_) => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{}", i),
            Key::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Str(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Str(value)
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::Str(value.clone())
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

macro_rules! impl_key_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Key {
                fn from(value: $ty) -> Self {
                    Key::Int(value as i64)
                }
            }
        )*
    };
}

impl_key_from_int!(i8, i16, i32, i64, u8, u16, u32);

// Wider unsigned indices only become keys when they fit in an `i64`.
macro_rules! impl_key_try_from_int {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<$ty> for Key {
                type Error = crate::Error;

                fn try_from(value: $ty) -> crate::Result<Self> {
                    i64::try_from(value)
                        .map(Key::Int)
                        .map_err(|_| crate::Error::custom(format!("key {} out of range", value)))
                }
            }
        )*
    };
}

impl_key_try_from_int!(u64, usize);

impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Key::Int(i) => serializer.serialize_i64(*i),
            Key::Str(s) => serializer.serialize_str(s),
        }
    }
}

/// An insertion-ordered container of GGON values.
///
/// # Examples
///
/// ```rust
/// use ggon::{GgonMap, Key, Value};
///
/// let list = GgonMap::from_list(vec![Value::from("x"), Value::from("y")]);
/// assert_eq!(list.list_len(), Some(2));
///
/// // Iteration maintains insertion order: the length entry comes first
/// let keys: Vec<_> = list.keys().cloned().collect();
/// assert_eq!(keys, vec![Key::from("length"), Key::Int(0), Key::Int(1)]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GgonMap(IndexMap<Key, Value>);

impl GgonMap {
    /// Creates an empty `GgonMap`.
    #[must_use]
    pub fn new() -> Self {
        GgonMap(IndexMap::new())
    }

    /// Creates an empty `GgonMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        GgonMap(IndexMap::with_capacity(capacity))
    }

    /// Builds a container in list shape: a `length` entry followed by the
    /// elements under integer keys `0..n`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ggon::{encode, GgonMap, Value};
    ///
    /// let list = GgonMap::from_list(vec![Value::from("a"), Value::from("b")]);
    /// assert_eq!(encode(&Value::from(list)).unwrap(), "[a,b]");
    /// ```
    #[must_use]
    pub fn from_list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let items = items.into_iter();
        let mut map = GgonMap::with_capacity(items.size_hint().0 + 1);
        map.insert(LENGTH_KEY, Value::Text(String::new()));
        let mut len: i64 = 0;
        for item in items {
            map.insert(Key::Int(len), item);
            len += 1;
        }
        map.insert(LENGTH_KEY, Value::Text(len.to_string()));
        map
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the key was already present its value is replaced in place, keeping
    /// the original position, and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ggon::{GgonMap, Value};
    ///
    /// let mut map = GgonMap::new();
    /// assert!(map.insert("key", Value::from("a")).is_none());
    /// assert!(map.insert("key", Value::from("b")).is_some());
    /// ```
    pub fn insert(&mut self, key: impl Into<Key>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.0.get(&key.into())
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut Value> {
        self.0.get_mut(&key.into())
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.0.contains_key(&key.into())
    }

    /// Removes a key, shifting later entries down so insertion order of the
    /// remaining entries is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ggon::{encode, GgonMap, Value};
    ///
    /// let mut map = GgonMap::new();
    /// map.insert("a", Value::from("1"));
    /// map.insert("b", Value::from("2"));
    /// map.insert("c", Value::from("3"));
    /// map.remove("a");
    /// assert_eq!(encode(&Value::from(map)).unwrap(), "{b:2,c:3}");
    /// ```
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Value> {
        self.0.shift_remove(&key.into())
    }

    /// Returns the value stored under the integer key `index`.
    #[must_use]
    pub fn element(&self, index: usize) -> Option<&Value> {
        let index = i64::try_from(index).ok()?;
        self.0.get(&Key::Int(index))
    }

    /// Returns the number of entries, including any `length` entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the list length if this container is written as a GGON list.
    ///
    /// A container is a list of length `N` exactly when:
    ///
    /// 1. it has an entry under the string key `length`,
    /// 2. that entry's text form is all ASCII digits (empty means `0`),
    /// 3. the container holds exactly `N + 1` entries, and
    /// 4. every integer key in `0..N` is present.
    ///
    /// Any container meeting these is a list, even one built as a record that
    /// happens to have a `length` field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ggon::{GgonMap, Value};
    ///
    /// let mut map = GgonMap::new();
    /// map.insert("length", Value::from("2"));
    /// map.insert(0, Value::from("x"));
    /// assert_eq!(map.list_len(), None);
    ///
    /// map.insert(1, Value::from("y"));
    /// assert_eq!(map.list_len(), Some(2));
    /// ```
    #[must_use]
    pub fn list_len(&self) -> Option<usize> {
        let length = self.0.get(&Key::from(LENGTH_KEY))?;
        let digits = length.text_form();
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let len: usize = if digits.is_empty() {
            0
        } else {
            // Too many digits for usize can never equal an entry count.
            digits.parse().ok()?
        };
        if self.0.len() != len.checked_add(1)? {
            return None;
        }
        if (0..len).all(|i| self.element(i).is_some()) {
            Some(len)
        } else {
            None
        }
    }

    /// Returns `true` if this container is written as a GGON list.
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.list_len().is_some()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.0.iter()
    }
}

impl IntoIterator for GgonMap {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a GgonMap {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<Key>> FromIterator<(K, Value)> for GgonMap {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        GgonMap(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<K: Into<Key>> Extend<(K, Value)> for GgonMap {
    fn extend<T: IntoIterator<Item = (K, Value)>>(&mut self, iter: T) {
        self.0.extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
    }
}

impl Serialize for GgonMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.list_len() {
            Some(len) => {
                let mut seq = serializer.serialize_seq(Some(len))?;
                for element in (0..len).filter_map(|i| self.element(i)) {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            None => {
                let mut map = serializer.serialize_map(Some(self.len()))?;
                for (k, v) in self.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}
