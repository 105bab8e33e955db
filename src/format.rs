use crate::{Document, Error, ErrorKind};
use std::path::Path;

/// Wire format of a document, determined by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `.json`
    Json,

    /// `.mpack`
    Mpack,
}

impl Format {
    /// Detect the format from the text after the last `.` of the file name,
    /// so a file named just `.json` is JSON. Matching is case sensitive.
    ///
    /// ```
    /// use cutout::Format;
    ///
    /// assert_eq!(Format::from_path("dragon.json"), Some(Format::Json));
    /// assert_eq!(Format::from_path("out/dragon.mpack"), Some(Format::Mpack));
    /// assert_eq!(Format::from_path("dragon.JSON"), None);
    /// assert_eq!(Format::from_path("dragon"), None);
    /// assert_eq!(Format::from_path("assets/.mpack"), Some(Format::Mpack));
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Format> {
        match file_extension(path.as_ref())? {
            "json" => Some(Format::Json),
            "mpack" => Some(Format::Mpack),
            _ => None,
        }
    }

    /// Like [`Format::from_path`] but an unrecognized extension is an
    /// [`ErrorKind::UnsupportedFormat`] error
    pub fn detect<P: AsRef<Path>>(path: P) -> Result<Format, Error> {
        let path = path.as_ref();
        Format::from_path(path).ok_or_else(|| {
            Error::new(ErrorKind::UnsupportedFormat {
                extension: file_extension(path).map(String::from),
            })
        })
    }

    /// The file extension, without the leading dot
    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Mpack => "mpack",
        }
    }
}

fn file_extension(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    name.rsplit_once('.').map(|(_, ext)| ext)
}

pub(crate) fn open(path: &Path) -> Result<Document, Error> {
    let format = Format::detect(path)?;
    let data = std::fs::read(path)?;
    log::debug!(
        "decoding {} ({} bytes) as {:?}",
        path.display(),
        data.len(),
        format
    );

    Document::from_slice(&data, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_extension_reads_nothing() {
        // the file doesn't exist, so an io error would mean a read was attempted
        let err = open(Path::new("does/not/exist/anim.xml")).unwrap_err();
        match err.kind() {
            ErrorKind::UnsupportedFormat { extension } => {
                assert_eq!(extension.as_deref(), Some("xml"))
            }
            x => panic!("unexpected error: {:?}", x),
        }
    }

    #[test]
    fn missing_extension() {
        let err = open(Path::new("does/not/exist/anim")).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::UnsupportedFormat { extension: None }
        ));
    }

    #[test]
    fn missing_file() {
        let err = open(Path::new("does/not/exist/anim.mpack")).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Io(_)));
    }

    #[test]
    fn extension_of_dot_files() {
        assert_eq!(Format::from_path(".json"), Some(Format::Json));
        assert_eq!(Format::from_path("out/.mpack"), Some(Format::Mpack));
        assert_eq!(Format::from_path("dragon.tar.json"), Some(Format::Json));
        assert_eq!(Format::from_path("dragon."), None);
        assert_eq!(Format::from_path("anim.json/dragon"), None);
    }

    #[test]
    fn extension_round_trip() {
        for format in &[Format::Json, Format::Mpack] {
            let name = format!("a.{}", format.extension());
            assert_eq!(Format::from_path(name), Some(*format));
        }
    }
}
