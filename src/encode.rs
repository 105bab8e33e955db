use crate::text::TextValue;
use std::collections::BTreeMap;

/// Build the tree a value decodes from.
///
/// Export is layered on top of decoding: encoding produces a
/// [`TextValue`] which is then written out as JSON or converted to msgpack.
/// Decoding the encoded tree yields an equal value, with the exception of
/// fields that are never decoded (`Keyframe::index`, `Sprite::rotated`,
/// `Sprite::trimmed`) which are not written.
pub trait Encode {
    fn encode(&self) -> TextValue;
}

impl Encode for u32 {
    fn encode(&self) -> TextValue {
        TextValue::from(*self)
    }
}

impl Encode for String {
    fn encode(&self) -> TextValue {
        TextValue::from(self.as_str())
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self) -> TextValue {
        TextValue::Array(self.iter().map(Encode::encode).collect())
    }
}

impl<T: Encode> Encode for BTreeMap<String, T> {
    fn encode(&self) -> TextValue {
        TextValue::Object(
            self.iter()
                .map(|(key, value)| (key.clone(), value.encode()))
                .collect(),
        )
    }
}
