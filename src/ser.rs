//! GGON encoding.
//!
//! This module provides the [`Encoder`] that writes a [`Value`] as GGON text,
//! and the [`ValueSerializer`] that turns any `T: Serialize` into a
//! [`Value`].
//!
//! ## Overview
//!
//! Encoding is a single depth-first pass:
//!
//! - **Text**: written bare when simple, otherwise single-quoted and escaped
//! - **Containers**: `[a,b]` when the container has list shape
//!   (see [`GgonMap::list_len`]), `{k:v,...}` otherwise
//! - **Numbers**: written as text only when coercion is enabled
//! - **Everything else**: rejected with [`Error::UnencodableType`]
//!
//! ## Direct Encoder Usage
//!
//! Most users should use [`encode`](crate::encode) or
//! [`to_string`](crate::to_string). The encoder can also be driven directly:
//!
//! ```rust
//! use ggon::{ggon, EncodeOptions, Encoder};
//!
//! let mut encoder = Encoder::new(EncodeOptions::coerced());
//! encoder.encode(&ggon!({ "port": 8190, "name": "My Server" })).unwrap();
//! assert_eq!(encoder.into_inner(), "{port:8190,name:'My Server'}");
//! ```

use crate::map::{GgonMap, Key};
use crate::{EncodeOptions, Error, Number, Result, Value};
use serde::{ser, Serialize};

/// The GGON encoder.
///
/// Writes into an internal buffer. A failed [`Encoder::encode`] leaves the
/// buffer as it was before the call.
pub struct Encoder {
    output: String,
    options: EncodeOptions,
    depth: usize,
}

impl Encoder {
    pub fn new(options: EncodeOptions) -> Self {
        Encoder {
            output: String::with_capacity(64),
            options,
            depth: 0,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Encodes `value`, appending to the buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnencodableType`] at the first leaf GGON cannot
    /// represent, or [`Error::DepthExceeded`] when a depth limit is set and
    /// exceeded. Nothing from the failed value is left in the buffer.
    pub fn encode(&mut self, value: &Value) -> Result<()> {
        let start = self.output.len();
        let result = self.encode_value(value, self.options.coerce_numbers);
        if result.is_err() {
            self.output.truncate(start);
        }
        result
    }

    fn encode_value(&mut self, value: &Value, coerce_numbers: bool) -> Result<()> {
        match value {
            Value::Text(s) => {
                self.write_string(s);
                Ok(())
            }
            Value::Container(map) => self.encode_container(map, coerce_numbers),
            Value::Number(n) if coerce_numbers => {
                self.write_number(n);
                Ok(())
            }
            other => {
                tracing::debug!(kind = other.kind(), "value cannot be encoded as GGON");
                Err(Error::unencodable_type(other.kind()))
            }
        }
    }

    fn encode_container(&mut self, map: &GgonMap, coerce_numbers: bool) -> Result<()> {
        if let Some(max_depth) = self.options.max_depth {
            if self.depth >= max_depth {
                return Err(Error::depth_exceeded(max_depth));
            }
        }
        self.depth += 1;
        let result = match map.list_len() {
            Some(len) => {
                tracing::trace!(len, "container classified as list");
                self.write_list(map, len, coerce_numbers)
            }
            None => {
                tracing::trace!(entries = map.len(), "container classified as map");
                self.write_map(map, coerce_numbers)
            }
        };
        self.depth -= 1;
        result
    }

    fn write_list(&mut self, map: &GgonMap, len: usize, coerce_numbers: bool) -> Result<()> {
        self.output.push('[');
        for i in 0..len {
            if i != 0 {
                self.output.push(',');
            }
            let element = map
                .element(i)
                .ok_or_else(|| Error::custom(format!("list element {} missing", i)))?;
            self.encode_value(element, coerce_numbers)?;
        }
        self.output.push(']');
        Ok(())
    }

    fn write_map(&mut self, map: &GgonMap, coerce_numbers: bool) -> Result<()> {
        self.output.push('{');
        for (i, (key, value)) in map.iter().enumerate() {
            if i != 0 {
                self.output.push(',');
            }
            self.write_key(key);
            self.output.push(':');
            self.encode_value(value, coerce_numbers)?;
        }
        self.output.push('}');
        Ok(())
    }

    // Keys are always written as text, whatever the coercion flag says.
    fn write_key(&mut self, key: &Key) {
        match key {
            Key::Int(i) => self.write_string(&i.to_string()),
            Key::Str(s) => self.write_string(s),
        }
    }

    fn write_number(&mut self, n: &Number) {
        self.write_string(&n.to_string());
    }

    #[inline]
    fn write_string(&mut self, s: &str) {
        if is_simple(s) {
            self.output.push_str(s);
            return;
        }
        self.output.reserve(s.len() + 2);
        self.output.push('\'');
        for ch in s.chars() {
            match ch {
                '\'' => self.output.push_str("\\'"),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                '\0' => self.output.push_str("\\0"),
                _ => self.output.push(ch),
            }
        }
        self.output.push('\'');
    }
}

/// Returns `true` if `s` can be written without quotes: non-empty and made
/// only of ASCII letters, digits, `_`, `.`, `+` and `-`.
///
/// # Examples
///
/// ```rust
/// use ggon::ser::is_simple;
///
/// assert!(is_simple("scout_1.5+x-y"));
/// assert!(!is_simple(""));
/// assert!(!is_simple("two words"));
/// assert!(!is_simple("café"));
/// ```
#[inline]
#[must_use]
pub fn is_simple(s: &str) -> bool {
    !s.is_empty()
        && s
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'+' | b'-'))
}

/// Converts any `T: Serialize` into a [`Value`].
///
/// Sequences and tuples become list-shaped containers, structs and maps
/// become containers in field order, and enum variants with data become a
/// single-entry container keyed by the variant name.
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
    variant: Option<&'static str>,
}

pub struct SerializeMap {
    map: GgonMap,
    current_key: Option<Key>,
    variant: Option<&'static str>,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        match i64::try_from(v) {
            Ok(i) => Ok(Value::Number(Number::Integer(i))),
            Err(_) => Ok(Value::Number(Number::Float(v as f64))),
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Number(Number::Float(v as f64)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::Text(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::Text(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Container(GgonMap::from_list(
            v.iter().map(|&b| Value::Number(Number::Integer(b as i64))),
        )))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::Text(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
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
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(tagged(variant, to_ggon_value(value)?))
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

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len.unwrap_or(0), None))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len, None))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len, Some(variant)))
    }
}

impl SerializeVec {
    fn new(len: usize, variant: Option<&'static str>) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(len),
            variant,
        }
    }

    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.vec.push(to_ggon_value(value)?);
        Ok(())
    }

    fn finish(self) -> Value {
        let list = Value::Container(GgonMap::from_list(self.vec));
        match self.variant {
            Some(variant) => tagged(variant, list),
            None => list,
        }
    }
}

impl SerializeMap {
    fn new(len: usize, variant: Option<&'static str>) -> Self {
        SerializeMap {
            map: GgonMap::with_capacity(len),
            current_key: None,
            variant,
        }
    }

    fn finish(self) -> Value {
        let map = Value::Container(self.map);
        match self.variant {
            Some(variant) => tagged(variant, map),
            None => map,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = match to_ggon_value(key)? {
            Value::Text(s) => Key::Str(s),
            Value::Number(Number::Integer(i)) => Key::Int(i),
            other => {
                return Err(Error::custom(format!(
                    "map keys must be text or integers, found {}",
                    other.kind()
                )))
            }
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
        self.map.insert(key, to_ggon_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key, to_ggon_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key, to_ggon_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

fn to_ggon_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

fn tagged(variant: &'static str, value: Value) -> Value {
    let mut map = GgonMap::with_capacity(1);
    map.insert(variant, value);
    Value::Container(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ggon;

    fn encode(value: &Value) -> Result<String> {
        let mut encoder = Encoder::new(EncodeOptions::new());
        encoder.encode(value)?;
        Ok(encoder.into_inner())
    }

    #[test]
    fn test_is_simple() {
        assert!(is_simple("abcXYZ019"));
        assert!(is_simple("_.+-"));
        assert!(!is_simple(""));
        assert!(!is_simple("a b"));
        assert!(!is_simple("a:b"));
        assert!(!is_simple("a,b"));
        assert!(!is_simple("'"));
        assert!(!is_simple("ü"));
    }

    #[test]
    fn test_write_string_escapes() {
        assert_eq!(encode(&Value::from("")).unwrap(), "''");
        assert_eq!(encode(&Value::from("it's")).unwrap(), r"'it\'s'");
        assert_eq!(encode(&Value::from(r"a\b")).unwrap(), r"'a\\b'");
        assert_eq!(encode(&Value::from("a\nb")).unwrap(), r"'a\nb'");
        assert_eq!(encode(&Value::from("a\rb")).unwrap(), r"'a\rb'");
        assert_eq!(encode(&Value::from("a\tb")).unwrap(), r"'a\tb'");
        assert_eq!(encode(&Value::from("a\0b")).unwrap(), r"'a\0b'");
    }

    #[test]
    fn test_other_characters_verbatim() {
        assert_eq!(encode(&Value::from("a\u{7}b")).unwrap(), "'a\u{7}b'");
        assert_eq!(encode(&Value::from("héllo")).unwrap(), "'héllo'");
        assert_eq!(encode(&Value::from("\"q\"")).unwrap(), "'\"q\"'");
    }

    #[test]
    fn test_map_keys_are_coerced() {
        let mut map = GgonMap::new();
        map.insert(5, Value::from("five"));
        map.insert(-1, Value::from("neg"));
        map.insert("a key", Value::from("x"));
        assert_eq!(
            encode(&Value::from(map)).unwrap(),
            "{5:five,-1:neg,'a key':x}"
        );
    }

    #[test]
    fn test_depth_is_restored_between_siblings() {
        let value = ggon!({ "a": ["x"], "b": ["y"] });
        let mut encoder = Encoder::new(EncodeOptions::new().with_max_depth(2));
        encoder.encode(&value).unwrap();
        assert_eq!(encoder.into_inner(), "{a:[x],b:[y]}");
    }

    #[test]
    fn test_depth_zero_rejects_containers() {
        let mut encoder = Encoder::new(EncodeOptions::new().with_max_depth(0));
        assert_eq!(
            encoder.encode(&Value::from(GgonMap::new())),
            Err(Error::DepthExceeded { max_depth: 0 })
        );

        let mut encoder = Encoder::new(EncodeOptions::new().with_max_depth(0));
        encoder.encode(&Value::from("text")).unwrap();
        assert_eq!(encoder.into_inner(), "text");
    }

    #[test]
    fn test_failed_encode_leaves_buffer_untouched() {
        let mut encoder = Encoder::new(EncodeOptions::default());
        assert_eq!(
            encoder.encode(&ggon!({ "ok": "fine", "bad": true })),
            Err(Error::unencodable_type("boolean"))
        );
        assert_eq!(encoder.into_inner(), "");

        let mut encoder = Encoder::new(EncodeOptions::default());
        encoder.encode(&Value::from("first")).unwrap();
        assert!(encoder.encode(&ggon!(["kept", null])).is_err());
        encoder.encode(&Value::from("second")).unwrap();
        assert_eq!(encoder.into_inner(), "firstsecond");
    }

    #[test]
    fn test_value_serializer_primitives() {
        assert_eq!(to_ggon_value(&true).unwrap(), Value::Bool(true));
        assert_eq!(to_ggon_value(&7u8).unwrap(), Value::from(7));
        assert_eq!(
            to_ggon_value(&u64::MAX).unwrap(),
            Value::Number(Number::Float(u64::MAX as f64))
        );
        assert_eq!(to_ggon_value(&'c').unwrap(), Value::from("c"));
        assert_eq!(to_ggon_value(&()).unwrap(), Value::Null);
        assert_eq!(to_ggon_value(&None::<i32>).unwrap(), Value::Null);
    }

    #[test]
    fn test_value_serializer_sequences_are_lists() {
        let value = to_ggon_value(&vec!["a", "b"]).unwrap();
        assert_eq!(value.as_container().and_then(GgonMap::list_len), Some(2));
        assert_eq!(encode(&value).unwrap(), "[a,b]");

        let value = to_ggon_value(&("x", "y")).unwrap();
        assert_eq!(encode(&value).unwrap(), "[x,y]");
    }

    #[test]
    fn test_value_serializer_enum_variants() {
        #[derive(Serialize)]
        enum Shape {
            Dot,
            Circle(String),
            Pair(String, String),
            Rect { w: String, h: String },
        }

        assert_eq!(encode(&to_ggon_value(&Shape::Dot).unwrap()).unwrap(), "Dot");
        assert_eq!(
            encode(&to_ggon_value(&Shape::Circle("r1".into())).unwrap()).unwrap(),
            "{Circle:r1}"
        );
        assert_eq!(
            encode(&to_ggon_value(&Shape::Pair("a".into(), "b".into())).unwrap()).unwrap(),
            "{Pair:[a,b]}"
        );
        assert_eq!(
            encode(&to_ggon_value(&Shape::Rect { w: "2".into(), h: "3".into() }).unwrap())
                .unwrap(),
            "{Rect:{w:2,h:3}}"
        );
    }

    #[test]
    fn test_value_serializer_map_keys() {
        let mut ints = std::collections::BTreeMap::new();
        ints.insert(2, "b");
        ints.insert(1, "a");
        let value = to_ggon_value(&ints).unwrap();
        assert_eq!(value.as_container().unwrap().get(1), Some(&Value::from("a")));

        let mut bad = std::collections::BTreeMap::new();
        bad.insert(true, "x");
        let err = to_ggon_value(&bad).unwrap_err();
        assert!(err.to_string().contains("map keys must be text or integers"));
    }
}
