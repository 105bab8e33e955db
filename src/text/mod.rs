//! Types for parsing the JSON encoding of a document
//!
//! JSON objects are parsed into an ordered list of members rather than a map
//! so that duplicate keys survive parsing. Which of the duplicates wins is
//! then decided by the decoder of the field, not by the parser.
//!
//! ```
//! use cutout::{text::TextValue, ValueKind, ValueReader};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tree = TextValue::from_slice(br#"{"a":1,"a":2}"#)?;
//! let keys: Vec<_> = (&tree).members().unwrap().map(|(key, _)| key).collect();
//! assert_eq!(keys, vec!["a", "a"]);
//! assert_eq!((&tree).kind(), ValueKind::Object);
//! # Ok(())
//! # }
//! ```

use crate::{Error, ValueKind, ValueReader};
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use std::fmt;
use std::slice;

/// An owned JSON tree that preserves member order and duplicate keys
#[derive(Debug, Clone, PartialEq)]
pub enum TextValue {
    Null,
    Bool(bool),
    UInt(u64),
    Int(i64),
    Double(f64),
    String(String),
    Array(Vec<TextValue>),
    Object(Vec<(String, TextValue)>),
}

impl TextValue {
    /// Parse JSON text into a tree
    pub fn from_slice(data: &[u8]) -> Result<TextValue, Error> {
        Ok(serde_json::from_slice(data)?)
    }

    /// Create an integer value, using the unsigned variant whenever the
    /// number is not negative (which is what the JSON parser produces)
    pub fn from_i64(value: i64) -> TextValue {
        match u64::try_from(value) {
            Ok(x) => TextValue::UInt(x),
            Err(_) => TextValue::Int(value),
        }
    }
}

impl From<bool> for TextValue {
    fn from(value: bool) -> Self {
        TextValue::Bool(value)
    }
}

impl From<u32> for TextValue {
    fn from(value: u32) -> Self {
        TextValue::UInt(u64::from(value))
    }
}

impl From<f32> for TextValue {
    fn from(value: f32) -> Self {
        TextValue::Double(f64::from(value))
    }
}

impl From<&str> for TextValue {
    fn from(value: &str) -> Self {
        TextValue::String(value.to_string())
    }
}

impl From<String> for TextValue {
    fn from(value: String) -> Self {
        TextValue::String(value)
    }
}

impl<'de> Deserialize<'de> for TextValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TextValueVisitor;

        impl<'de> Visitor<'de> for TextValueVisitor {
            type Value = TextValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a json value")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(TextValue::Null)
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(TextValue::Null)
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(TextValue::Bool(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(TextValue::UInt(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(TextValue::from_i64(v))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(TextValue::Double(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(TextValue::String(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(TextValue::String(v))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(value) = seq.next_element()? {
                    values.push(value);
                }
                Ok(TextValue::Array(values))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut members = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(member) = map.next_entry::<String, TextValue>()? {
                    members.push(member);
                }
                Ok(TextValue::Object(members))
            }
        }

        deserializer.deserialize_any(TextValueVisitor)
    }
}

/// Iterator over the members of a [`TextValue::Object`]
#[derive(Debug, Clone)]
pub struct TextMembers<'a> {
    inner: slice::Iter<'a, (String, TextValue)>,
}

impl<'a> Iterator for TextMembers<'a> {
    type Item = (&'a str, &'a TextValue);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, value)| (key.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> ValueReader<'a> for &'a TextValue {
    type Elements = slice::Iter<'a, TextValue>;
    type Members = TextMembers<'a>;

    fn kind(&self) -> ValueKind {
        match *self {
            TextValue::Null => ValueKind::Null,
            TextValue::Bool(_) => ValueKind::Bool,
            TextValue::UInt(_) => ValueKind::UInt,
            TextValue::Int(_) => ValueKind::Int,
            TextValue::Double(_) => ValueKind::Double,
            TextValue::String(_) => ValueKind::String,
            TextValue::Array(_) => ValueKind::Array,
            TextValue::Object(_) => ValueKind::Object,
        }
    }

    fn elements(&self) -> Option<Self::Elements> {
        match *self {
            TextValue::Array(values) => Some(values.iter()),
            _ => None,
        }
    }

    fn members(&self) -> Option<Self::Members> {
        match *self {
            TextValue::Object(members) => Some(TextMembers {
                inner: members.iter(),
            }),
            _ => None,
        }
    }

    fn as_str(&self) -> Option<&'a str> {
        match *self {
            TextValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    fn as_u64(&self) -> Option<u64> {
        match *self {
            TextValue::UInt(x) => Some(*x),
            _ => None,
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match *self {
            TextValue::UInt(x) => i64::try_from(*x).ok(),
            TextValue::Int(x) => Some(*x),
            _ => None,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match *self {
            TextValue::UInt(x) => Some(*x as f64),
            TextValue::Int(x) => Some(*x as f64),
            TextValue::Double(x) => Some(*x),
            _ => None,
        }
    }

    fn as_bool(&self) -> Option<bool> {
        match *self {
            TextValue::Bool(x) => Some(*x),
            _ => None,
        }
    }
}
