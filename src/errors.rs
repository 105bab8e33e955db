use crate::ValueKind;
use std::fmt;
use std::io;

/// An error that can occur when loading or decoding a document
#[derive(Debug)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Error {
        Error(Box::new(kind))
    }

    pub(crate) fn shape(expected: &'static str, found: ValueKind) -> Error {
        Error::new(ErrorKind::ShapeMismatch { expected, found })
    }

    /// Return the specific type of error
    pub fn kind(&self) -> &ErrorKind {
        &self.0
    }

    /// Consume the error and return the specific type of error
    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }
}

/// Specific type of error
#[derive(Debug)]
pub enum ErrorKind {
    /// The file name did not end in a recognized extension. No bytes were read.
    UnsupportedFormat { extension: Option<String> },

    /// Reading or writing a file failed
    Io(io::Error),

    /// The text input was not well formed JSON
    Json(serde_json::Error),

    /// The binary input was not well formed MessagePack
    Mpack(rmpv::decode::Error),

    /// Bytes remained after the root MessagePack value
    TrailingData { offset: usize },

    /// A value had a different structural kind than the field it decodes into
    ShapeMismatch {
        expected: &'static str,
        found: ValueKind,
    },

    /// The document could not be exported, such as a non-finite number bound
    /// for JSON or a failed msgpack write
    Encode(String),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self.0 {
            ErrorKind::Io(ref err) => Some(err),
            ErrorKind::Json(ref err) => Some(err),
            ErrorKind::Mpack(ref err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self.0 {
            ErrorKind::UnsupportedFormat { ref extension } => match extension {
                Some(ext) => write!(f, "unsupported data type: .{}", ext),
                None => write!(f, "unsupported data type: missing file extension"),
            },
            ErrorKind::Io(ref err) => write!(f, "io error: {}", err),
            ErrorKind::Json(ref err) => write!(f, "malformed json: {}", err),
            ErrorKind::Mpack(ref err) => write!(f, "malformed msgpack: {}", err),
            ErrorKind::TrailingData { offset } => write!(
                f,
                "unexpected data after the root msgpack value (offset: {})",
                offset
            ),
            ErrorKind::ShapeMismatch { expected, found } => {
                write!(f, "expected {} but found {}", expected, found)
            }
            ErrorKind::Encode(ref msg) => write!(f, "unable to encode document: {}", msg),
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::new(ErrorKind::Io(error))
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::new(ErrorKind::Json(error))
    }
}

impl From<rmpv::decode::Error> for Error {
    fn from(error: rmpv::decode::Error) -> Self {
        Error::new(ErrorKind::Mpack(error))
    }
}
