use crate::schema::{clamp_i32, clamp_u32, Schema, Slot};
use crate::{Decode, Encode, Error, TextValue, ValueReader};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

/// Sprite atlas entry: where the trimmed sprite sits in the atlas and the
/// frame it was trimmed from
///
/// Encoded as the array
/// `[sprite.h, sprite.w, sprite.y, sprite.x, frame.h, frame.w, frame.y, frame.x]`.
/// Numbers with a fractional part are truncated. `rotated` and `trimmed` are
/// not part of the encoding and are always `false` after decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sprite {
    pub frame: Rect,
    pub sprite: Rect,
    pub rotated: bool,
    pub trimmed: bool,
}

static SPRITE_SLOTS: [Slot<Sprite>; 8] = [
    Slot::Int {
        get: |s: &Sprite| i64::from(s.sprite.h),
        set: |s: &mut Sprite, v: i64| s.sprite.h = clamp_u32(v),
    },
    Slot::Int {
        get: |s: &Sprite| i64::from(s.sprite.w),
        set: |s: &mut Sprite, v: i64| s.sprite.w = clamp_u32(v),
    },
    Slot::Int {
        get: |s: &Sprite| i64::from(s.sprite.y),
        set: |s: &mut Sprite, v: i64| s.sprite.y = clamp_i32(v),
    },
    Slot::Int {
        get: |s: &Sprite| i64::from(s.sprite.x),
        set: |s: &mut Sprite, v: i64| s.sprite.x = clamp_i32(v),
    },
    Slot::Int {
        get: |s: &Sprite| i64::from(s.frame.h),
        set: |s: &mut Sprite, v: i64| s.frame.h = clamp_u32(v),
    },
    Slot::Int {
        get: |s: &Sprite| i64::from(s.frame.w),
        set: |s: &mut Sprite, v: i64| s.frame.w = clamp_u32(v),
    },
    Slot::Int {
        get: |s: &Sprite| i64::from(s.frame.y),
        set: |s: &mut Sprite, v: i64| s.frame.y = clamp_i32(v),
    },
    Slot::Int {
        get: |s: &Sprite| i64::from(s.frame.x),
        set: |s: &mut Sprite, v: i64| s.frame.x = clamp_i32(v),
    },
];

static SPRITE: Schema<Sprite> = Schema::new(&SPRITE_SLOTS);

impl Decode for Sprite {
    fn decode_into<'a, V: ValueReader<'a>>(&mut self, value: V) -> Result<(), Error> {
        SPRITE.decode_into(self, value)
    }
}

impl Encode for Sprite {
    fn encode(&self) -> TextValue {
        SPRITE.encode(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(data: &str) -> Result<Sprite, Error> {
        let tree = TextValue::from_slice(data.as_bytes()).unwrap();
        Sprite::decode(&tree)
    }

    #[test]
    fn sprite_full_array() {
        let s = decode("[1, 2, 3, 4, 5, 6, 7, 8]").unwrap();
        assert_eq!(s.sprite, Rect { h: 1, w: 2, y: 3, x: 4 });
        assert_eq!(s.frame, Rect { h: 5, w: 6, y: 7, x: 8 });
        assert!(!s.rotated);
        assert!(!s.trimmed);
    }

    #[test]
    fn sprite_partial_array() {
        let s = decode("[64, 32]").unwrap();
        assert_eq!(s.sprite, Rect { h: 64, w: 32, y: 0, x: 0 });
        assert_eq!(s.frame, Rect::default());
    }

    #[test]
    fn sprite_negative_offsets_and_fractions() {
        let s = decode("[10.9, 20, -3, -4.5, 12, 22, 0, 0]").unwrap();
        assert_eq!(s.sprite, Rect { h: 10, w: 20, y: -3, x: -4 });
        assert_eq!(s.frame, Rect { h: 12, w: 22, y: 0, x: 0 });
    }

    #[test]
    fn sprite_ignores_extra_elements() {
        let s = decode(r#"[1, 2, 3, 4, 5, 6, 7, 8, 9, "ten", {}]"#).unwrap();
        assert_eq!(s.sprite, Rect { h: 1, w: 2, y: 3, x: 4 });
        assert_eq!(s.frame, Rect { h: 5, w: 6, y: 7, x: 8 });
    }

    #[test]
    fn sprite_requires_array() {
        assert!(decode(r#"{"x": 1}"#).is_err());
        assert!(decode(r#"[true]"#).is_err());
    }

    #[test]
    fn sprite_encode() {
        let s = decode("[1, 2, -3, 4, 5, 6, 7, 8]").unwrap();
        let expected = TextValue::from_slice(b"[1, 2, -3, 4, 5, 6, 7, 8]").unwrap();
        assert_eq!(s.encode(), expected);
    }
}
