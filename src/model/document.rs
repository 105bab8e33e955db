use crate::decode::expect_object;
use crate::field::{DocumentField, DOCUMENT_FIELDS};
use crate::json::ExportOptions;
use crate::{binary, Decode, Encode, Error, Format, Sprite, Symbol, TextValue, ValueReader};
use std::collections::BTreeMap;
use std::path::Path;

/// The root of a decoded animation file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub scenes: BTreeMap<String, Symbol>,
    pub animations: BTreeMap<String, Symbol>,

    /// Sprite atlas entries, grouped by part name
    pub parts: BTreeMap<String, Vec<Sprite>>,
}

impl Document {
    /// Load a document, picking the format from the file extension.
    ///
    /// ```
    /// use cutout::{Document, ErrorKind};
    ///
    /// let err = Document::open("anim.xml").unwrap_err();
    /// assert!(matches!(err.kind(), ErrorKind::UnsupportedFormat { .. }));
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Document, Error> {
        crate::format::open(path.as_ref())
    }

    /// Decode a document from bytes in the given format
    pub fn from_slice(data: &[u8], format: Format) -> Result<Document, Error> {
        match format {
            Format::Json => Document::from_json_slice(data),
            Format::Mpack => Document::from_mpack_slice(data),
        }
    }

    /// Decode a document from JSON text
    ///
    /// ```
    /// use cutout::Document;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let doc = Document::from_json_slice(br#"{"parts": {"head": [[32, 16]]}}"#)?;
    /// assert_eq!(doc.parts["head"][0].sprite.w, 16);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_json_slice(data: &[u8]) -> Result<Document, Error> {
        let tree = TextValue::from_slice(data)?;
        Document::decode(&tree)
    }

    /// Decode a document from msgpack bytes
    pub fn from_mpack_slice(data: &[u8]) -> Result<Document, Error> {
        let tree = binary::from_slice(data)?;
        Document::decode(&tree)
    }

    /// Export the document as JSON. Fails with [`ErrorKind::Encode`] when a
    /// matrix holds a non-finite number, which JSON cannot represent.
    ///
    /// [`ErrorKind::Encode`]: crate::ErrorKind::Encode
    pub fn to_json(&self, options: ExportOptions) -> Result<Vec<u8>, Error> {
        options.to_vec(&self.encode())
    }

    /// Export the document as msgpack
    pub fn to_mpack(&self) -> Result<Vec<u8>, Error> {
        binary::to_vec(&binary::from_text(&self.encode()))
    }

    /// Export the document in the given format
    pub fn to_vec(&self, format: Format) -> Result<Vec<u8>, Error> {
        match format {
            Format::Json => self.to_json(ExportOptions::default()),
            Format::Mpack => self.to_mpack(),
        }
    }
}

impl Decode for Document {
    fn decode_into<'a, V: ValueReader<'a>>(&mut self, value: V) -> Result<(), Error> {
        for (key, member) in expect_object(value)? {
            match DOCUMENT_FIELDS.resolve(key) {
                DocumentField::Scenes => self.scenes.decode_into(member)?,
                DocumentField::Animations => self.animations.decode_into(member)?,
                DocumentField::Parts => self.parts.decode_into(member)?,
                DocumentField::Invalid => log::trace!("skipping document member {:?}", key),
            }
        }

        Ok(())
    }
}

impl Encode for Document {
    fn encode(&self) -> TextValue {
        TextValue::Object(vec![
            (String::from("scenes"), self.scenes.encode()),
            (String::from("animations"), self.animations.encode()),
            (String::from("parts"), self.parts.encode()),
        ])
    }
}
