//! Ako serialization.
//!
//! Two pieces live here:
//!
//! - [`Serializer`] renders an [`AkoValue`] tree as canonical Ako text. It
//!   cannot fail: every variant of the closed value model has a textual form.
//! - [`ValueSerializer`] is a serde serializer that turns any `T: Serialize`
//!   into an [`AkoValue`], which [`to_string`](crate::to_string) then renders.
//!
//! ## Canonical Form
//!
//! - `true`, `false` and null are written `+`, `-` and `;`, and are placed
//!   *before* their key (`+enabled`)
//! - vectors, and arrays of two to four numbers, use cross notation (`1x2x3`)
//! - other arrays are `[[ ... ]]` blocks, nested tables are `[ ... ]` blocks
//! - the root table has no enclosing brackets
//!
//! ```rust
//! use serde_ako::{ako, serialize, AkoOptions};
//!
//! let value = ako!({
//!     "fullscreen": true,
//!     "size": [1280, 720],
//!     "title": "Ako"
//! });
//!
//! assert_eq!(
//!     serialize(&value, &AkoOptions::new()),
//!     "+fullscreen\nsize 1280x720\ntitle \"Ako\"\n"
//! );
//! ```

use crate::lexer::is_bare_identifier;
use crate::{AkoMap, AkoOptions, AkoValue, Error, Number, Result, Vector};
use serde::{ser, Serialize};

/// Renders [`AkoValue`] trees as Ako text.
///
/// ```rust
/// use serde_ako::{ako, AkoOptions, Serializer};
///
/// let mut serializer = Serializer::new(AkoOptions::compact());
/// serializer.write_document(&ako!([1, 2, 3, 4, 5]));
/// assert_eq!(serializer.into_inner(), "[[ 1 2 3 4 5 ]]");
/// ```
pub struct Serializer {
    output: String,
    indent: String,
    end_statement: &'static str,
}

impl Serializer {
    pub fn new(options: AkoOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            indent: options.indent_unit(),
            end_statement: options.end_statement(),
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Writes `value` as a whole document.
    ///
    /// A root table is written without enclosing brackets; any other value is
    /// written as it would be in value position.
    pub fn write_document(&mut self, value: &AkoValue) {
        match value {
            AkoValue::Table(table) => self.write_entries(table, 0),
            other => self.write_value(other, 0),
        }
    }

    fn write_indent(&mut self, level: usize) {
        for _ in 0..level {
            self.output.push_str(&self.indent);
        }
    }

    fn end_statement(&mut self) {
        self.output.push_str(self.end_statement);
    }

    fn write_entries(&mut self, table: &AkoMap, level: usize) {
        for (key, value) in table {
            self.write_indent(level);
            match value_first_literal(value) {
                Some(literal) => {
                    self.output.push_str(literal);
                    self.write_key(key);
                }
                None => {
                    self.write_key(key);
                    self.output.push(' ');
                    self.write_value(value, level);
                }
            }
            self.end_statement();
        }
    }

    fn write_value(&mut self, value: &AkoValue, level: usize) {
        match value {
            AkoValue::Null => self.output.push(';'),
            AkoValue::Bool(true) => self.output.push('+'),
            AkoValue::Bool(false) => self.output.push('-'),
            AkoValue::Number(n) => self.write_number(n),
            AkoValue::String(s) => self.write_string(s),
            AkoValue::Vector(v) => self.write_vector(v, level),
            AkoValue::Array(arr) if arr.is_empty() => self.output.push_str("[[]]"),
            AkoValue::Array(arr) => match Vector::from_values(arr) {
                Some(v) => self.write_vector(&v, level),
                None => self.write_array(arr, level),
            },
            AkoValue::Table(table) => {
                self.output.push('[');
                self.end_statement();
                self.write_entries(table, level + 1);
                self.write_indent(level);
                self.output.push(']');
            }
        }
    }

    fn write_array(&mut self, elements: &[AkoValue], level: usize) {
        self.output.push_str("[[");
        self.end_statement();
        for element in elements {
            self.write_indent(level + 1);
            self.write_value(element, level + 1);
            self.end_statement();
        }
        self.write_indent(level);
        self.output.push_str("]]");
    }

    // Non-finite components have no cross-notation form; fall back to a block.
    fn write_vector(&mut self, vector: &Vector, level: usize) {
        if vector.iter().all(|n| is_finite(n)) {
            self.output.push_str(&vector.to_string());
        } else {
            let elements: Vec<_> = vector.iter().map(|n| AkoValue::Number(*n)).collect();
            self.write_array(&elements, level);
        }
    }

    fn write_number(&mut self, n: &Number) {
        if is_finite(n) {
            self.output.push_str(&n.to_string());
        } else {
            self.output.push(';');
        }
    }

    fn write_key(&mut self, key: &str) {
        if is_bare_identifier(key) {
            self.output.push_str(key);
        } else {
            self.write_string(key);
        }
    }

    fn write_string(&mut self, s: &str) {
        self.output.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                '\u{0008}' => self.output.push_str("\\b"),
                '\u{000C}' => self.output.push_str("\\f"),
                c if c.is_control() && (c as u32) < 0x20 => {
                    self.output.push_str(&format!("\\u{:04x}", c as u32));
                }
                c => self.output.push(c),
            }
        }
        self.output.push('"');
    }
}

fn is_finite(n: &Number) -> bool {
    match n {
        Number::Integer(_) => true,
        Number::Float(f) => f.is_finite(),
    }
}

/// The literal written in front of the key, for values rendered as `+`, `-` or `;`.
fn value_first_literal(value: &AkoValue) -> Option<&'static str> {
    match value {
        AkoValue::Bool(true) => Some("+"),
        AkoValue::Bool(false) => Some("-"),
        AkoValue::Null => Some(";"),
        AkoValue::Number(n) if !is_finite(n) => Some(";"),
        _ => None,
    }
}

/// Renders `value` as Ako text.
///
/// # Examples
///
/// ```rust
/// use serde_ako::{ako, serialize, AkoOptions};
///
/// let value = ako!({ "abc": true });
/// assert_eq!(serialize(&value, &AkoOptions::new()), "+abc\n");
/// ```
#[must_use]
pub fn serialize(value: &AkoValue, options: &AkoOptions) -> String {
    let mut serializer = Serializer::new(options.clone());
    serializer.write_document(value);
    let output = serializer.into_inner();
    log::debug!("serialized document into {} bytes", output.len());
    output
}

/// A serde serializer producing [`AkoValue`] trees.
///
/// Enums use the externally tagged representation: a variant with data
/// becomes a single-entry table keyed by the variant name.
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<AkoValue>,
    variant: Option<&'static str>,
}

pub struct SerializeMap {
    map: AkoMap,
    current_key: Option<String>,
    variant: Option<&'static str>,
}

impl ser::Serializer for ValueSerializer {
    type Ok = AkoValue;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<AkoValue> {
        Ok(AkoValue::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<AkoValue> {
        Ok(AkoValue::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<AkoValue> {
        Ok(AkoValue::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<AkoValue> {
        Ok(AkoValue::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<AkoValue> {
        Ok(AkoValue::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<AkoValue> {
        i64::try_from(v)
            .map(AkoValue::from)
            .map_err(|_| Error::unsupported_type("i128 outside the 64-bit integer range"))
    }

    fn serialize_u8(self, v: u8) -> Result<AkoValue> {
        Ok(AkoValue::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<AkoValue> {
        Ok(AkoValue::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<AkoValue> {
        Ok(AkoValue::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<AkoValue> {
        match i64::try_from(v) {
            Ok(i) => Ok(AkoValue::Number(Number::Integer(i))),
            Err(_) => Ok(AkoValue::Number(Number::Float(v as f64))),
        }
    }

    fn serialize_u128(self, v: u128) -> Result<AkoValue> {
        i64::try_from(v)
            .map(AkoValue::from)
            .map_err(|_| Error::unsupported_type("u128 outside the 64-bit integer range"))
    }

    fn serialize_f32(self, v: f32) -> Result<AkoValue> {
        Ok(AkoValue::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<AkoValue> {
        Ok(AkoValue::from(v))
    }

    fn serialize_char(self, v: char) -> Result<AkoValue> {
        Ok(AkoValue::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<AkoValue> {
        Ok(AkoValue::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<AkoValue> {
        Ok(AkoValue::Array(v.iter().map(|&b| AkoValue::from(b)).collect()))
    }

    fn serialize_none(self) -> Result<AkoValue> {
        Ok(AkoValue::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<AkoValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<AkoValue> {
        Ok(AkoValue::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<AkoValue> {
        Ok(AkoValue::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<AkoValue> {
        Ok(AkoValue::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<AkoValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<AkoValue>
    where
        T: ?Sized + Serialize,
    {
        Ok(tagged(variant, to_ako_value(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0), None))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, None))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, None))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, Some(variant)))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new(None))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new(None))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeMap> {
        Ok(SerializeMap::new(Some(variant)))
    }
}

impl SerializeVec {
    fn new(capacity: usize, variant: Option<&'static str>) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
            variant,
        }
    }

    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.vec.push(to_ako_value(value)?);
        Ok(())
    }

    fn finish(self) -> AkoValue {
        let array = AkoValue::Array(self.vec);
        match self.variant {
            Some(variant) => tagged(variant, array),
            None => array,
        }
    }
}

impl SerializeMap {
    fn new(variant: Option<&'static str>) -> Self {
        SerializeMap {
            map: AkoMap::new(),
            current_key: None,
            variant,
        }
    }

    fn finish(self) -> AkoValue {
        let table = AkoValue::Table(self.map);
        match self.variant {
            Some(variant) => tagged(variant, table),
            None => table,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = AkoValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<AkoValue> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = AkoValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<AkoValue> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = AkoValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<AkoValue> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = AkoValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<AkoValue> {
        Ok(self.finish())
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = AkoValue;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = match to_ako_value(key)? {
            AkoValue::String(s) => s,
            AkoValue::Number(n) => n.to_string(),
            AkoValue::Bool(b) => b.to_string(),
            _ => return Err(Error::unsupported_type("map keys must be strings or scalars")),
        };
        self.current_key = Some(key);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_ako_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<AkoValue> {
        Ok(self.finish())
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = AkoValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_ako_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<AkoValue> {
        Ok(self.finish())
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = AkoValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_ako_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<AkoValue> {
        Ok(self.finish())
    }
}

fn tagged(variant: &str, value: AkoValue) -> AkoValue {
    let mut map = AkoMap::with_capacity(1);
    map.insert(variant.to_string(), value);
    AkoValue::Table(map)
}

fn to_ako_value<T: Serialize + ?Sized>(value: &T) -> Result<AkoValue> {
    value.serialize(ValueSerializer)
}
