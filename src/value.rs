//! Dynamic value representation for GGON data.
//!
//! This module provides the [`Value`] enum, the input to the encoder.
//!
//! ## Core Types
//!
//! - [`Value`]: text, a number, a container, or one of the kinds GGON cannot
//!   represent (`null`, booleans)
//! - [`Number`]: an integer or floating-point magnitude
//!
//! Containers are [`GgonMap`]s. A container is not marked as a list or a map
//! when it is built; the encoder decides from its shape.
//!
//! ## Creating Values
//!
//! ```rust
//! use ggon::{ggon, Value};
//!
//! let text = Value::from("hello");
//! let number = Value::from(42);
//! let list = Value::from(vec![Value::from("a"), Value::from("b")]);
//!
//! let config = ggon!({
//!     "name": "Scout",
//!     "loadout": ["scattergun", "pistol"]
//! });
//! assert!(config.is_container());
//! ```

use crate::map::GgonMap;
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// A dynamically-typed value handed to the GGON encoder.
///
/// Only [`Value::Text`], [`Value::Container`] and, with numeric coercion,
/// [`Value::Number`] can be encoded. [`Value::Null`] and [`Value::Bool`] exist
/// so that arbitrary Rust data can be converted into a `Value`; encoding them
/// fails with [`Error::UnencodableType`](crate::Error::UnencodableType).
///
/// # Examples
///
/// ```rust
/// use ggon::{Number, Value};
///
/// let text = Value::Text("hello".to_string());
/// let num = Value::Number(Number::Integer(42));
///
/// assert!(text.is_text());
/// assert!(num.is_number());
/// assert_eq!(num.kind(), "integer");
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    Container(GgonMap),
}

/// A numeric value: an integer or a float.
///
/// # Examples
///
/// ```rust
/// use ggon::Number;
///
/// assert_eq!(Number::Integer(42).to_string(), "42");
/// assert_eq!(Number::Float(3.14).to_string(), "3.14");
/// assert_eq!(Number::Float(1.0).to_string(), "1");
/// assert_eq!(Number::Float(1e20).to_string(), "1.0E+20");
/// assert_eq!(Number::Float(0.1 + 0.2).to_string(), "0.3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if it has no fractional part and
    /// fits in range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ggon::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Converts this number to an `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => f.write_str(&crate::number::format_float(*fl)),
        }
    }
}

macro_rules! impl_number_from {
    ($variant:ident as $target:ty: $($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::$variant(value as $target)
                }
            }

            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::$variant(value as $target))
                }
            }
        )*
    };
}

impl_number_from!(Integer as i64: i8, i16, i32, i64, u8, u16, u32);
impl_number_from!(Float as f64: f32, f64);

impl Value {
    /// Names the kind of this value, as reported in encoding errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ggon::Value;
    ///
    /// assert_eq!(Value::Null.kind(), "NULL");
    /// assert_eq!(Value::from(true).kind(), "boolean");
    /// assert_eq!(Value::from(1.5).kind(), "double");
    /// assert_eq!(Value::from("x").kind(), "string");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Null => "NULL",
            Value::Bool(_) => "boolean",
            Value::Number(Number::Integer(_)) => "integer",
            Value::Number(Number::Float(_)) => "double",
            Value::Text(_) => "string",
            Value::Container(_) => "array",
        }
    }

    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is text.
    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Returns `true` if the value is a container.
    #[inline]
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Value::Container(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is text, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ggon::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a number, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// If the value is an i64 integer or a whole-number float, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a container, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_container(&self) -> Option<&GgonMap> {
        match self {
            Value::Container(map) => Some(map),
            _ => None,
        }
    }

    /// If the value is a container, returns a mutable reference to it.
    #[inline]
    pub fn as_container_mut(&mut self) -> Option<&mut GgonMap> {
        match self {
            Value::Container(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the loose text form of this value.
    ///
    /// This is the conversion used when reading a container's `length`
    /// entry: text is itself, numbers are their decimal form, `true` is `"1"`,
    /// `false` and null are empty, and a container is `"Array"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ggon::Value;
    ///
    /// assert_eq!(Value::from("12").text_form(), "12");
    /// assert_eq!(Value::from(12).text_form(), "12");
    /// assert_eq!(Value::Bool(true).text_form(), "1");
    /// assert_eq!(Value::Null.text_form(), "");
    /// ```
    #[must_use]
    pub fn text_form(&self) -> Cow<'_, str> {
        match self {
            Value::Text(s) => Cow::Borrowed(s),
            Value::Number(n) => Cow::Owned(n.to_string()),
            Value::Bool(true) => Cow::Borrowed("1"),
            Value::Bool(false) | Value::Null => Cow::Borrowed(""),
            Value::Container(_) => Cow::Borrowed("Array"),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Container(map) => map.serialize(serializer),
        }
    }
}

// TryFrom implementations for extracting values from Value
impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Number(n) => n.as_i64().ok_or_else(|| {
                crate::Error::custom(format!("cannot convert {} to i64", n))
            }),
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {}",
                value.kind()
            ))),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Number(n) => Ok(n.as_f64()),
            _ => Err(crate::Error::custom(format!(
                "expected number, found {}",
                value.kind()
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Text(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected text, found {}",
                value.kind()
            ))),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<GgonMap> for Value {
    fn from(value: GgonMap) -> Self {
        Value::Container(value)
    }
}

/// Builds a list-shaped container.
impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Container(GgonMap::from_list(value))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
