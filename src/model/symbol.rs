use crate::decode::expect_object;
use crate::field::{SymbolField, SYMBOL_FIELDS};
use crate::{Decode, Encode, Error, Keyframe, TextValue, ValueReader};
use std::collections::BTreeMap;

/// A scene or animation: keyframe tracks plus named frames
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Symbol {
    pub duration: u32,
    pub fps: u32,

    /// Frame index for each label
    pub labels: BTreeMap<String, u32>,

    /// Outer sequence is the track (depth), inner is the keyframes of that
    /// track in time order
    pub objects: Vec<Vec<Keyframe>>,
}

impl Symbol {
    /// The frame index a label refers to
    ///
    /// ```
    /// use cutout::{Decode, Symbol, TextValue};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let tree = TextValue::from_slice(br#"{"labels": {"idle": 0, "walk": 12}}"#)?;
    /// let symbol = Symbol::decode(&tree)?;
    /// assert_eq!(symbol.label_index("walk"), Some(12));
    /// assert_eq!(symbol.label_index("run"), None);
    /// assert_eq!(symbol.label_at(12), Some("walk"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn label_index(&self, name: &str) -> Option<u32> {
        self.labels.get(name).copied()
    }

    /// The first label, in name order, that refers to the given frame
    pub fn label_at(&self, frame: u32) -> Option<&str> {
        self.labels
            .iter()
            .find(|(_, index)| **index == frame)
            .map(|(name, _)| name.as_str())
    }

    /// The keyframes of a track
    pub fn track(&self, depth: usize) -> Option<&[Keyframe]> {
        self.objects.get(depth).map(|x| x.as_slice())
    }
}

impl Decode for Symbol {
    fn decode_into<'a, V: ValueReader<'a>>(&mut self, value: V) -> Result<(), Error> {
        for (key, member) in expect_object(value)? {
            match SYMBOL_FIELDS.resolve(key) {
                SymbolField::Duration => self.duration.decode_into(member)?,
                SymbolField::Fps => self.fps.decode_into(member)?,
                SymbolField::Labels => self.labels.decode_into(member)?,
                SymbolField::Objects => self.objects.decode_into(member)?,
                SymbolField::Invalid => log::trace!("skipping symbol member {:?}", key),
            }
        }

        Ok(())
    }
}

impl Encode for Symbol {
    fn encode(&self) -> TextValue {
        TextValue::Object(vec![
            (String::from("duration"), self.duration.encode()),
            (String::from("fps"), self.fps.encode()),
            (String::from("labels"), self.labels.encode()),
            (String::from("objects"), self.objects.encode()),
        ])
    }
}
