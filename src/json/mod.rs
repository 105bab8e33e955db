//! Writes trees and documents as JSON text
//!
//! ```
//! use cutout::{json::ExportOptions, Document};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = Document::from_json_slice(br#"{"parts": {"eye": [[2, 3]]}}"#)?;
//!
//! let options = ExportOptions::new().with_prettyprint(false);
//!
//! // These are the default options
//! assert_eq!(options, ExportOptions::default());
//!
//! let actual = String::from_utf8(doc.to_json(options)?)?;
//! assert_eq!(
//!     actual,
//!     r#"{"scenes":{},"animations":{},"parts":{"eye":[[2,3,0,0,0,0,0,0]]}}"#
//! );
//! # Ok(())
//! # }
//! ```

use crate::{text::TextValue, Error, ErrorKind};
use serde::{
    ser::{self, SerializeMap, SerializeSeq},
    Serialize, Serializer,
};

/// Customizes the JSON output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportOptions {
    /// Controls if the JSON should be pretty printed
    pretty: bool,
}

impl ExportOptions {
    /// Creates the structure with default options
    pub fn new() -> Self {
        ExportOptions::default()
    }

    /// Sets if the JSON should be pretty printed or minified
    pub fn with_prettyprint(mut self, pretty: bool) -> ExportOptions {
        self.pretty = pretty;
        self
    }

    /// Output JSON to the given writer. Non-finite numbers have no JSON
    /// representation and are an [`ErrorKind::Encode`] error.
    pub fn to_writer<W>(&self, writer: W, value: &TextValue) -> Result<(), Error>
    where
        W: std::io::Write,
    {
        writer_json(writer, self.pretty, value)
    }

    /// Output JSON to vec that contains UTF-8 data
    pub fn to_vec(&self, value: &TextValue) -> Result<Vec<u8>, Error> {
        let mut out = Vec::new();
        self.to_writer(&mut out, value)?;
        Ok(out)
    }
}

fn writer_json<W, S>(writer: W, pretty: bool, ser: S) -> Result<(), Error>
where
    W: std::io::Write,
    S: serde::Serialize,
{
    let result = if pretty {
        serde_json::to_writer_pretty(writer, &ser)
    } else {
        serde_json::to_writer(writer, &ser)
    };

    result.map_err(|e| {
        if e.is_io() {
            Error::new(ErrorKind::Io(e.into()))
        } else {
            Error::new(ErrorKind::Encode(e.to_string()))
        }
    })
}

impl Serialize for TextValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TextValue::Null => serializer.serialize_unit(),
            TextValue::Bool(x) => serializer.serialize_bool(*x),
            TextValue::UInt(x) => serializer.serialize_u64(*x),
            TextValue::Int(x) => serializer.serialize_i64(*x),
            TextValue::Double(x) if !x.is_finite() => Err(ser::Error::custom(format!(
                "{} has no json representation",
                x
            ))),
            TextValue::Double(x) => serializer.serialize_f64(*x),
            TextValue::String(x) => serializer.serialize_str(x),
            TextValue::Array(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
            TextValue::Object(members) => {
                let mut map = serializer.serialize_map(Some(members.len()))?;
                for (key, value) in members {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serialize_str(value: &TextValue) -> String {
        String::from_utf8(ExportOptions::new().to_vec(value).unwrap()).unwrap()
    }

    #[test]
    fn json_keeps_duplicate_keys() {
        let tree = TextValue::from_slice(br#"{"a":1,"b":[true,null],"a":-2.5}"#).unwrap();
        assert_eq!(serialize_str(&tree), r#"{"a":1,"b":[true,null],"a":-2.5}"#);
    }

    #[test]
    fn json_pretty() {
        let tree = TextValue::from_slice(br#"{"a":[1]}"#).unwrap();
        let out = ExportOptions::new()
            .with_prettyprint(true)
            .to_vec(&tree)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\n  \"a\": [\n    1\n  ]\n}"
        );
    }

    #[test]
    fn json_non_finite_is_an_error() {
        for x in &[f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let tree = TextValue::Array(vec![TextValue::UInt(1), TextValue::Double(*x)]);
            let err = ExportOptions::new().to_vec(&tree).unwrap_err();
            assert!(matches!(err.kind(), ErrorKind::Encode(_)), "{}", x);
        }

        assert_eq!(serialize_str(&TextValue::Double(-0.5)), "-0.5");
    }
}
