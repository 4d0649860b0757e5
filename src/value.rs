//! Dynamic value representation for Ako data.
//!
//! This module provides the [`AkoValue`] enum which represents any valid Ako value.
//! It is what [`parse`](crate::parse) produces and what [`serialize`](crate::serialize)
//! consumes.
//!
//! ## Core Types
//!
//! - [`AkoValue`]: null, bool, number, string, vector, array or table
//! - [`Number`]: a 64-bit integer or a double-precision float
//! - [`Vector`]: two to four numbers written in `1x2x3` cross notation
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use serde_ako::{AkoValue, Vector};
//!
//! let null = AkoValue::Null;
//! let boolean = AkoValue::from(true);
//! let number = AkoValue::from(42);
//! let text = AkoValue::from("hello");
//! let size = AkoValue::from(Vector::try_from(vec![1280.into(), 720.into()]).unwrap());
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use serde_ako::AkoValue;
//! use std::convert::TryFrom;
//!
//! let value = AkoValue::from(42);
//! let num: i64 = i64::try_from(value).unwrap();
//! assert_eq!(num, 42);
//! ```
//!
//! ### Parsing and Printing
//!
//! ```rust
//! use serde_ako::AkoValue;
//!
//! let value: AkoValue = "window.size 1280x720".parse().unwrap();
//! assert_eq!(value.to_string(), "window [ size 1280x720 ] ");
//! ```

use crate::{AkoMap, Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A dynamically-typed representation of any valid Ako value.
///
/// # Examples
///
/// ```rust
/// use serde_ako::{AkoValue, Number};
///
/// let null = AkoValue::Null;
/// let num = AkoValue::Number(Number::Integer(42));
/// let text = AkoValue::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum AkoValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Vector(Vector),
    Array(Vec<AkoValue>),
    Table(AkoMap),
}

/// A numeric value: either a 64-bit integer or a double-precision float.
///
/// # Examples
///
/// ```rust
/// use serde_ako::Number;
///
/// let integer = Number::Integer(42);
/// let float = Number::Float(3.5);
///
/// assert!(integer.is_integer());
/// assert_eq!(integer.as_i64(), Some(42));
/// assert_eq!(float.as_f64(), 3.5);
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

    /// Converts this number to an `i64` if possible.
    ///
    /// Returns `Some(i64)` for integers and for floats with no fractional part
    /// that fit in i64 range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ako::Number;
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
                // i64::MAX as f64 rounds up to 2^63, which is out of range.
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

/// Formats the number the way the serializer writes it.
///
/// Whole floats keep a `.0` suffix so they read back as floats.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) if fl.is_finite() && fl.fract() == 0.0 => write!(f, "{:.1}", fl),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

macro_rules! number_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Integer(i64::from(value))
                }
            }
        )*
    };
}

number_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// A fixed-length numeric vector of two to four components.
///
/// Vectors are written in cross notation, e.g. `1280x720` or `1x2.5x3x3.5`.
/// The length is checked on construction.
///
/// # Examples
///
/// ```rust
/// use serde_ako::{Number, Vector};
///
/// let v = Vector::try_from(vec![Number::Integer(1), Number::Float(2.5)]).unwrap();
/// assert_eq!(v.len(), 2);
/// assert_eq!(v.to_string(), "1x2.5");
///
/// assert!(Vector::try_from(vec![Number::Integer(1)]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Vector(Vec<Number>);

#[allow(clippy::len_without_is_empty)]
impl Vector {
    pub const MIN_LEN: usize = 2;
    pub const MAX_LEN: usize = 4;

    /// Builds a vector, failing unless it has two to four components.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Custom`] when the length is out of range.
    pub fn new(components: Vec<Number>) -> Result<Self> {
        if (Self::MIN_LEN..=Self::MAX_LEN).contains(&components.len()) {
            Ok(Vector(components))
        } else {
            Err(Error::custom(format!(
                "vector must have {} to {} components, got {}",
                Self::MIN_LEN,
                Self::MAX_LEN,
                components.len()
            )))
        }
    }

    /// Builds a vector from array elements when every element is a number
    /// and the length is in range.
    #[must_use]
    pub fn from_values(values: &[AkoValue]) -> Option<Self> {
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&values.len()) {
            return None;
        }
        values
            .iter()
            .map(|v| match v {
                AkoValue::Number(n) => Some(*n),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .map(Vector)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Number] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Number> {
        self.0.iter()
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Number> {
        self.0
    }
}

impl TryFrom<Vec<Number>> for Vector {
    type Error = Error;

    fn try_from(components: Vec<Number>) -> Result<Self> {
        Vector::new(components)
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Number;
    type IntoIter = std::slice::Iter<'a, Number>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("x")?;
            }
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}

impl AkoValue {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, AkoValue::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, AkoValue::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, AkoValue::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, AkoValue::String(_))
    }

    /// Returns `true` if the value is a vector.
    #[inline]
    #[must_use]
    pub const fn is_vector(&self) -> bool {
        matches!(self, AkoValue::Vector(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, AkoValue::Array(_))
    }

    /// Returns `true` if the value is a table.
    #[inline]
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, AkoValue::Table(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AkoValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ako::AkoValue;
    ///
    /// assert_eq!(AkoValue::from("hello").as_str(), Some("hello"));
    /// assert_eq!(AkoValue::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AkoValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an i64 integer or a whole-number float, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AkoValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a number, returns it as an `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AkoValue::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_vector(&self) -> Option<&Vector> {
        match self {
            AkoValue::Vector(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<AkoValue>> {
        match self {
            AkoValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_table(&self) -> Option<&AkoMap> {
        match self {
            AkoValue::Table(table) => Some(table),
            _ => None,
        }
    }

    #[inline]
    pub fn as_table_mut(&mut self) -> Option<&mut AkoMap> {
        match self {
            AkoValue::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Looks up a nested value by a dotted path such as `window.size`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ako::parse;
    ///
    /// let doc = parse("player.level 39").unwrap();
    /// assert_eq!(doc.pointer("player.level").and_then(|v| v.as_i64()), Some(39));
    /// assert!(doc.pointer("player.name").is_none());
    /// ```
    #[must_use]
    pub fn pointer(&self, path: &str) -> Option<&AkoValue> {
        path.split('.')
            .try_fold(self, |value, key| value.as_table()?.get(key))
    }
}

/// Writes the compact serialization of the value.
impl fmt::Display for AkoValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serialize(self, &crate::AkoOptions::compact()))
    }
}

impl FromStr for AkoValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse(s)
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Number::Integer(i) => serializer.serialize_i64(*i),
            Number::Float(f) => serializer.serialize_f64(*f),
        }
    }
}

impl Serialize for AkoValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::{SerializeMap, SerializeSeq};

        match self {
            AkoValue::Null => serializer.serialize_unit(),
            AkoValue::Bool(b) => serializer.serialize_bool(*b),
            AkoValue::Number(n) => n.serialize(serializer),
            AkoValue::String(s) => serializer.serialize_str(s),
            AkoValue::Vector(v) => {
                let mut seq = serializer.serialize_seq(Some(v.len()))?;
                for n in v {
                    seq.serialize_element(n)?;
                }
                seq.end()
            }
            AkoValue::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            AkoValue::Table(table) => {
                let mut map = serializer.serialize_map(Some(table.len()))?;
                for (k, v) in table.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for AkoValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct AkoValueVisitor;

        impl<'de> Visitor<'de> for AkoValueVisitor {
            type Value = AkoValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid Ako value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E> {
                Ok(AkoValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E> {
                Ok(AkoValue::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E> {
                Ok(AkoValue::Number(match i64::try_from(value) {
                    Ok(i) => Number::Integer(i),
                    Err(_) => Number::Float(value as f64),
                }))
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E> {
                Ok(AkoValue::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E> {
                Ok(AkoValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E> {
                Ok(AkoValue::String(value))
            }

            fn visit_unit<E>(self) -> std::result::Result<Self::Value, E> {
                Ok(AkoValue::Null)
            }

            fn visit_none<E>(self) -> std::result::Result<Self::Value, E> {
                Ok(AkoValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(AkoValue::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = AkoMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(AkoValue::Table(values))
            }
        }

        deserializer.deserialize_any(AkoValueVisitor)
    }
}

// TryFrom implementations for extracting values from AkoValue
impl TryFrom<AkoValue> for i64 {
    type Error = Error;

    fn try_from(value: AkoValue) -> Result<Self> {
        match value {
            AkoValue::Number(n) => n
                .as_i64()
                .ok_or_else(|| Error::custom(format!("cannot convert {} to i64", n))),
            _ => Err(Error::custom(format!(
                "expected integer, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<AkoValue> for f64 {
    type Error = Error;

    fn try_from(value: AkoValue) -> Result<Self> {
        match value {
            AkoValue::Number(n) => Ok(n.as_f64()),
            _ => Err(Error::custom(format!("expected number, found {:?}", value))),
        }
    }
}

impl TryFrom<AkoValue> for bool {
    type Error = Error;

    fn try_from(value: AkoValue) -> Result<Self> {
        match value {
            AkoValue::Bool(b) => Ok(b),
            _ => Err(Error::custom(format!("expected bool, found {:?}", value))),
        }
    }
}

impl TryFrom<AkoValue> for String {
    type Error = Error;

    fn try_from(value: AkoValue) -> Result<Self> {
        match value {
            AkoValue::String(s) => Ok(s),
            _ => Err(Error::custom(format!("expected string, found {:?}", value))),
        }
    }
}

impl From<bool> for AkoValue {
    fn from(value: bool) -> Self {
        AkoValue::Bool(value)
    }
}

macro_rules! value_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AkoValue {
                fn from(value: $ty) -> Self {
                    AkoValue::Number(Number::from(value))
                }
            }
        )*
    };
}

value_from_number!(i8, i16, i32, i64, u8, u16, u32, f32, f64);

impl From<Number> for AkoValue {
    fn from(value: Number) -> Self {
        AkoValue::Number(value)
    }
}

impl From<String> for AkoValue {
    fn from(value: String) -> Self {
        AkoValue::String(value)
    }
}

impl From<&str> for AkoValue {
    fn from(value: &str) -> Self {
        AkoValue::String(value.to_string())
    }
}

impl From<Vector> for AkoValue {
    fn from(value: Vector) -> Self {
        AkoValue::Vector(value)
    }
}

impl From<Vec<AkoValue>> for AkoValue {
    fn from(value: Vec<AkoValue>) -> Self {
        AkoValue::Array(value)
    }
}

impl From<AkoMap> for AkoValue {
    fn from(value: AkoMap) -> Self {
        AkoValue::Table(value)
    }
}

impl<T: Into<AkoValue>> From<Option<T>> for AkoValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AkoValue::Null, Into::into)
    }
}
