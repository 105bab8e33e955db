//! Types for parsing the MessagePack encoding of a document
//!
//! The parse tree is [`rmpv::Value`], which implements
//! [`ValueReader`](crate::ValueReader) directly. A msgpack map is only
//! treated as an object when every key is a string; any other map reports
//! [`ValueKind::Other`](crate::ValueKind::Other).
//!
//! The module also converts between the JSON and msgpack trees, which is how
//! a JSON document is re-encoded as msgpack.
//!
//! ```
//! use cutout::{binary, text::TextValue};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let text = TextValue::from_slice(br#"{"fps":24}"#)?;
//! let data = binary::to_vec(&binary::from_text(&text))?;
//! assert_eq!(data, vec![0x81, 0xa3, b'f', b'p', b's', 0x18]);
//! assert_eq!(binary::to_text(&binary::from_slice(&data)?), text);
//! # Ok(())
//! # }
//! ```

use crate::{text::TextValue, Error, ErrorKind, ValueKind, ValueReader};
use rmpv::Value;
use std::slice;

/// Nesting limit of the msgpack parser, the same limit serde_json applies to
/// JSON text
const MAX_DEPTH: usize = 128;

/// Parse a msgpack encoded value. The value must span the entire input and
/// may not nest deeper than the JSON parser allows.
pub fn from_slice(data: &[u8]) -> Result<Value, Error> {
    let mut rd = data;
    let value = rmpv::decode::read_value_with_max_depth(&mut rd, MAX_DEPTH)?;
    if !rd.is_empty() {
        let offset = data.len() - rd.len();
        return Err(Error::new(ErrorKind::TrailingData { offset }));
    }

    Ok(value)
}

/// Encode a msgpack value to bytes
pub fn to_vec(value: &Value) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    rmpv::encode::write_value(&mut out, value)
        .map_err(|e| Error::new(ErrorKind::Encode(e.to_string())))?;
    Ok(out)
}

/// Convert a JSON tree into the equivalent msgpack tree. Member order and
/// duplicate keys are kept.
pub fn from_text(value: &TextValue) -> Value {
    match value {
        TextValue::Null => Value::Nil,
        TextValue::Bool(x) => Value::Boolean(*x),
        TextValue::UInt(x) => Value::from(*x),
        TextValue::Int(x) => Value::from(*x),
        TextValue::Double(x) => Value::F64(*x),
        TextValue::String(x) => Value::from(x.as_str()),
        TextValue::Array(values) => Value::Array(values.iter().map(from_text).collect()),
        TextValue::Object(members) => Value::Map(
            members
                .iter()
                .map(|(key, value)| (Value::from(key.as_str()), from_text(value)))
                .collect(),
        ),
    }
}

/// Convert a msgpack tree into a JSON tree so that it can be inspected as
/// text. Values without a JSON counterpart are rendered as lossy strings:
/// binary and ext payloads as their bytes, map keys with their debug form.
pub fn to_text(value: &Value) -> TextValue {
    match value {
        Value::Nil => TextValue::Null,
        Value::Boolean(x) => TextValue::Bool(*x),
        Value::Integer(x) => match (x.as_u64(), x.as_i64()) {
            (Some(x), _) => TextValue::UInt(x),
            (None, Some(x)) => TextValue::Int(x),
            (None, None) => TextValue::Null,
        },
        Value::F32(x) => TextValue::Double(f64::from(*x)),
        Value::F64(x) => TextValue::Double(*x),
        Value::String(x) => TextValue::String(String::from_utf8_lossy(x.as_bytes()).into_owned()),
        Value::Binary(x) => TextValue::String(String::from_utf8_lossy(x).into_owned()),
        Value::Ext(_, x) => TextValue::String(String::from_utf8_lossy(x).into_owned()),
        Value::Array(values) => TextValue::Array(values.iter().map(to_text).collect()),
        Value::Map(members) => TextValue::Object(
            members
                .iter()
                .map(|(key, value)| {
                    let key = match key.as_str() {
                        Some(k) => k.to_string(),
                        None => key.to_string(),
                    };
                    (key, to_text(value))
                })
                .collect(),
        ),
    }
}

/// Iterator over the string keyed members of a msgpack map
#[derive(Debug, Clone)]
pub struct BinaryMembers<'a> {
    inner: slice::Iter<'a, (Value, Value)>,
}

impl<'a> Iterator for BinaryMembers<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        // keys were verified to be strings when the map was classified
        loop {
            let (key, value) = self.inner.next()?;
            if let Some(key) = key.as_str() {
                return Some((key, value));
            }
        }
    }
}

fn is_object(members: &[(Value, Value)]) -> bool {
    members.iter().all(|(key, _)| key.as_str().is_some())
}

impl<'a> ValueReader<'a> for &'a Value {
    type Elements = slice::Iter<'a, Value>;
    type Members = BinaryMembers<'a>;

    fn kind(&self) -> ValueKind {
        match *self {
            Value::Nil => ValueKind::Null,
            Value::Boolean(_) => ValueKind::Bool,
            Value::Integer(x) if x.as_u64().is_some() => ValueKind::UInt,
            Value::Integer(_) => ValueKind::Int,
            Value::F32(_) | Value::F64(_) => ValueKind::Double,
            Value::String(x) if x.is_str() => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Map(members) if is_object(members) => ValueKind::Object,
            _ => ValueKind::Other,
        }
    }

    fn elements(&self) -> Option<Self::Elements> {
        match *self {
            Value::Array(values) => Some(values.iter()),
            _ => None,
        }
    }

    fn members(&self) -> Option<Self::Members> {
        match *self {
            Value::Map(members) if is_object(members) => Some(BinaryMembers {
                inner: members.iter(),
            }),
            _ => None,
        }
    }

    fn as_str(&self) -> Option<&'a str> {
        match *self {
            Value::String(x) => x.as_str(),
            _ => None,
        }
    }

    fn as_u64(&self) -> Option<u64> {
        match *self {
            Value::Integer(x) => x.as_u64(),
            _ => None,
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Integer(x) => x.as_i64(),
            _ => None,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Integer(x) => x.as_f64(),
            Value::F32(x) => Some(f64::from(*x)),
            Value::F64(x) => Some(*x),
            _ => None,
        }
    }

    fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Boolean(x) => Some(*x),
            _ => None,
        }
    }
}
