//! Member name dispatch for the object shaped entities.
//!
//! Each entity resolves member names through a table built once on first use.
//! Names that aren't in the table resolve to the `Invalid` selector and the
//! member is skipped.

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub(crate) struct FieldTable<F: 'static> {
    fields: HashMap<&'static str, F>,
    invalid: F,
}

impl<F: Copy> FieldTable<F> {
    fn new(invalid: F, fields: &[(&'static str, F)]) -> Self {
        FieldTable {
            fields: fields.iter().copied().collect(),
            invalid,
        }
    }

    pub(crate) fn resolve(&self, name: &str) -> F {
        self.fields.get(name).copied().unwrap_or(self.invalid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DocumentField {
    Invalid,
    Scenes,
    Animations,
    Parts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SymbolField {
    Invalid,
    Duration,
    Fps,
    Labels,
    Objects,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyframeField {
    Invalid,
    Cmd,
    Index,
    Duration,
    Character,
    Matrix,
    Name,
    Tween,
}

pub(crate) static DOCUMENT_FIELDS: Lazy<FieldTable<DocumentField>> = Lazy::new(|| {
    FieldTable::new(
        DocumentField::Invalid,
        &[
            ("scenes", DocumentField::Scenes),
            ("animations", DocumentField::Animations),
            ("parts", DocumentField::Parts),
        ],
    )
});

pub(crate) static SYMBOL_FIELDS: Lazy<FieldTable<SymbolField>> = Lazy::new(|| {
    FieldTable::new(
        SymbolField::Invalid,
        &[
            ("duration", SymbolField::Duration),
            ("fps", SymbolField::Fps),
            ("labels", SymbolField::Labels),
            ("objects", SymbolField::Objects),
        ],
    )
});

pub(crate) static KEYFRAME_FIELDS: Lazy<FieldTable<KeyframeField>> = Lazy::new(|| {
    FieldTable::new(
        KeyframeField::Invalid,
        &[
            ("cmd", KeyframeField::Cmd),
            ("index", KeyframeField::Index),
            ("duration", KeyframeField::Duration),
            ("character", KeyframeField::Character),
            ("matrix", KeyframeField::Matrix),
            ("name", KeyframeField::Name),
            ("tween", KeyframeField::Tween),
        ],
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_members() {
        assert_eq!(DOCUMENT_FIELDS.resolve("parts"), DocumentField::Parts);
        assert_eq!(SYMBOL_FIELDS.resolve("fps"), SymbolField::Fps);
        assert_eq!(KEYFRAME_FIELDS.resolve("tween"), KeyframeField::Tween);
        assert_eq!(KEYFRAME_FIELDS.resolve("index"), KeyframeField::Index);
    }

    #[test]
    fn resolve_unknown_members() {
        assert_eq!(DOCUMENT_FIELDS.resolve("version"), DocumentField::Invalid);
        assert_eq!(SYMBOL_FIELDS.resolve("Duration"), SymbolField::Invalid);
        assert_eq!(KEYFRAME_FIELDS.resolve(""), KeyframeField::Invalid);
    }
}
