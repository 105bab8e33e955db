use std::fmt;

/// The structural kind of a parsed value, independent of the wire format it
/// came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// `null` / msgpack nil
    Null,

    /// `true` or `false`
    Bool,

    /// An integer that is zero or positive
    UInt,

    /// A negative integer
    Int,

    /// A floating point number
    Double,

    /// A UTF-8 string
    String,

    /// An ordered sequence of values
    Array,

    /// String keyed members, in source order and possibly duplicated
    Object,

    /// Anything the document model has no use for: msgpack binary and ext
    /// payloads, strings that aren't UTF-8, maps with non-string keys
    Other,
}

impl ValueKind {
    /// Returns true for any of the numeric kinds
    pub fn is_number(self) -> bool {
        matches!(self, ValueKind::UInt | ValueKind::Int | ValueKind::Double)
    }

    fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::UInt => "unsigned integer",
            ValueKind::Int => "integer",
            ValueKind::Double => "double",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
            ValueKind::Other => "unsupported value",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only view of a node in a parsed tree.
///
/// Every entity decoder is written once against this trait. Each wire format
/// supplies an implementation over its own parse tree:
///
/// - [`TextValue`](crate::text::TextValue) for JSON
/// - [`rmpv::Value`] for MessagePack
///
/// Accessors return `None` when the value is of a different kind, and never
/// convert between kinds except that `as_f64` accepts every numeric kind.
pub trait ValueReader<'a>: Copy {
    /// Iterator over the elements of an array
    type Elements: Iterator<Item = Self>;

    /// Iterator over the members of an object, in source order. Duplicate
    /// keys are yielded as many times as they occur.
    type Members: Iterator<Item = (&'a str, Self)>;

    /// The structural kind of the value
    fn kind(&self) -> ValueKind;

    /// Returns the elements if the value is an array
    fn elements(&self) -> Option<Self::Elements>;

    /// Returns the members if the value is an object
    fn members(&self) -> Option<Self::Members>;

    /// Returns the string data if the value is a string
    fn as_str(&self) -> Option<&'a str>;

    /// Returns the number if the value is a non-negative integer
    fn as_u64(&self) -> Option<u64>;

    /// Returns the number if the value is an integer that fits in an i64
    fn as_i64(&self) -> Option<i64>;

    /// Returns any numeric value widened to a double
    fn as_f64(&self) -> Option<f64>;

    /// Returns the boolean if the value is a bool
    fn as_bool(&self) -> Option<bool>;

    fn is_object(&self) -> bool {
        self.kind() == ValueKind::Object
    }

    fn is_array(&self) -> bool {
        self.kind() == ValueKind::Array
    }

    fn is_string(&self) -> bool {
        self.kind() == ValueKind::String
    }

    fn is_uint(&self) -> bool {
        self.kind() == ValueKind::UInt
    }

    fn is_double(&self) -> bool {
        self.kind() == ValueKind::Double
    }

    fn is_bool(&self) -> bool {
        self.kind() == ValueKind::Bool
    }
}
