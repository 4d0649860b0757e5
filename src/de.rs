//! Ako deserialization.
//!
//! Text is first parsed into an [`AkoValue`] tree, and the [`Deserializer`]
//! then walks that tree to drive serde visitors. Any `AkoValue` can be
//! deserialized this way, which is also how [`from_value`](crate::from_value)
//! works.
//!
//! ## Usage
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_ako::from_str;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Window {
//!     title: String,
//!     size: (u32, u32),
//!     fullscreen: bool,
//! }
//!
//! let window: Window = from_str("title \"Ako\" size 1280x720 -fullscreen").unwrap();
//! assert_eq!(
//!     window,
//!     Window { title: "Ako".to_string(), size: (1280, 720), fullscreen: false }
//! );
//! ```
//!
//! ## Data Model
//!
//! - `;` (null) deserializes as `None` or `()`
//! - vectors deserialize as sequences, so `1x2x3` fits `[f64; 3]`, tuples or `Vec`
//! - enums are externally tagged: a unit variant is a string, any other
//!   variant is a single-entry table keyed by the variant name
//! - an empty document is an empty table when a struct or map is expected

use crate::{AkoMap, AkoValue, Error, Number, Result};
use serde::de::IntoDeserializer;
use serde::{de, forward_to_deserialize_any};

/// A deserializer over an owned [`AkoValue`].
pub struct Deserializer {
    value: AkoValue,
}

impl Deserializer {
    #[must_use]
    pub fn new(value: AkoValue) -> Self {
        Deserializer { value }
    }

    /// Parses `input` and returns a deserializer over the resulting document.
    ///
    /// # Errors
    ///
    /// Returns the lex or parse error of the input text.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &str) -> Result<Self> {
        crate::parse(input).map(Deserializer::new)
    }
}

impl<'de> de::Deserializer<'de> for Deserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            AkoValue::Null => visitor.visit_unit(),
            AkoValue::Bool(b) => visitor.visit_bool(b),
            AkoValue::Number(Number::Integer(i)) => visitor.visit_i64(i),
            AkoValue::Number(Number::Float(f)) => visitor.visit_f64(f),
            AkoValue::String(s) => visitor.visit_string(s),
            AkoValue::Vector(v) => visitor.visit_seq(SeqDeserializer::new(
                v.into_inner().into_iter().map(AkoValue::Number).collect(),
            )),
            AkoValue::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            AkoValue::Table(table) => visitor.visit_map(MapDeserializer::new(table)),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            AkoValue::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            AkoValue::Table(table) => visitor.visit_map(MapDeserializer::new(table)),
            AkoValue::Null => visitor.visit_map(MapDeserializer::new(AkoMap::new())),
            other => Err(Error::custom(format!("expected table, found {:?}", other))),
        }
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_map(visitor)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            AkoValue::String(s) => visitor.visit_enum(s.into_deserializer()),
            AkoValue::Table(table) if table.len() == 1 => {
                match table.into_iter().next() {
                    Some((variant, value)) => {
                        visitor.visit_enum(EnumDeserializer::new(variant, value))
                    }
                    None => Err(Error::custom("expected enum variant")),
                }
            }
            AkoValue::Table(_) => Err(Error::custom(
                "expected a table with a single variant entry",
            )),
            other => Err(Error::custom(format!("expected enum, found {:?}", other))),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct identifier ignored_any
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<AkoValue>,
}

impl SeqDeserializer {
    fn new(vec: Vec<AkoValue>) -> Self {
        SeqDeserializer {
            iter: vec.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(Deserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<String, AkoValue>,
    value: Option<AkoValue>,
}

impl MapDeserializer {
    fn new(map: AkoMap) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(Deserializer::new(AkoValue::String(key)))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(Deserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct EnumDeserializer {
    variant: String,
    value: AkoValue,
}

impl EnumDeserializer {
    fn new(variant: String, value: AkoValue) -> Self {
        EnumDeserializer { variant, value }
    }
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(Deserializer::new(AkoValue::String(self.variant)))?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: AkoValue,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            AkoValue::Null => Ok(()),
            _ => Err(Error::custom("expected unit variant")),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(Deserializer::new(self.value))
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            value @ (AkoValue::Array(_) | AkoValue::Vector(_)) => {
                de::Deserializer::deserialize_any(Deserializer::new(value), visitor)
            }
            _ => Err(Error::custom("expected tuple variant")),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            AkoValue::Table(table) => visitor.visit_map(MapDeserializer::new(table)),
            _ => Err(Error::custom("expected struct variant")),
        }
    }
}
