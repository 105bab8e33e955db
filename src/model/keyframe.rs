use crate::decode::{expect_object, expect_str};
use crate::field::{KeyframeField, KEYFRAME_FIELDS};
use crate::{Command, Decode, Encode, Error, Matrix, TextValue, Tween, ValueReader};

/// One timed instruction on a track
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Keyframe {
    pub cmd: Command,

    /// Position on the track. Not part of the encoding: always `0` after
    /// decoding, even when an `index` member is present.
    pub index: u32,

    pub duration: u32,
    pub character: Option<String>,
    pub matrix: Option<Matrix>,
    pub name: Option<String>,
    pub tween: Option<Tween>,
}

impl Keyframe {
    pub fn new(cmd: Command, index: u32, duration: u32) -> Self {
        Keyframe {
            cmd,
            index,
            duration,
            ..Keyframe::default()
        }
    }
}

impl Decode for Keyframe {
    fn decode_into<'a, V: ValueReader<'a>>(&mut self, value: V) -> Result<(), Error> {
        for (key, member) in expect_object(value)? {
            match KEYFRAME_FIELDS.resolve(key) {
                KeyframeField::Cmd => self.cmd = Command::from_name(expect_str(member)?),
                KeyframeField::Index => {}
                KeyframeField::Duration => self.duration.decode_into(member)?,
                KeyframeField::Character => self.character.decode_into(member)?,
                KeyframeField::Matrix => self.matrix.decode_into(member)?,
                KeyframeField::Name => self.name.decode_into(member)?,
                KeyframeField::Tween => self.tween.decode_into(member)?,
                KeyframeField::Invalid => log::trace!("skipping keyframe member {:?}", key),
            }
        }

        Ok(())
    }
}

impl Encode for Keyframe {
    fn encode(&self) -> TextValue {
        let mut members = vec![
            (String::from("cmd"), TextValue::from(self.cmd.name())),
            (String::from("duration"), self.duration.encode()),
        ];

        if let Some(character) = &self.character {
            members.push((String::from("character"), character.encode()));
        }

        if let Some(matrix) = &self.matrix {
            members.push((String::from("matrix"), matrix.encode()));
        }

        if let Some(name) = &self.name {
            members.push((String::from("name"), name.encode()));
        }

        if let Some(tween) = &self.tween {
            members.push((String::from("tween"), tween.encode()));
        }

        TextValue::Object(members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, Rotation};

    fn decode(data: &str) -> Result<Keyframe, Error> {
        let tree = TextValue::from_slice(data.as_bytes()).unwrap();
        Keyframe::decode(&tree)
    }

    #[test]
    fn keyframe_all_members() {
        let k = decode(
            r#"{
                "cmd": "place",
                "duration": 12,
                "character": "head",
                "matrix": [1, 0, 0, 1, 5, 6],
                "name": "h1",
                "tween": [true, "auto", 1]
            }"#,
        )
        .unwrap();

        assert_eq!(k.cmd, Command::Place);
        assert_eq!(k.duration, 12);
        assert_eq!(k.character.as_deref(), Some("head"));
        assert_eq!(k.name.as_deref(), Some("h1"));
        assert_eq!(
            k.matrix,
            Some(Matrix {
                ty: 5.0,
                tx: 6.0,
                ..Matrix::IDENTITY
            })
        );
        assert_eq!(
            k.tween,
            Some(Tween {
                tween: true,
                rotate_direction: Rotation::Auto,
                rotate_times: 1,
            })
        );
    }

    #[test]
    fn keyframe_absent_members_are_defaults() {
        let k = decode("{}").unwrap();
        assert_eq!(k, Keyframe::default());
        assert_eq!(k.cmd, Command::Invalid);
        assert!(k.matrix.is_none());
    }

    #[test]
    fn keyframe_index_is_never_decoded() {
        let k = decode(r#"{"cmd": "move", "index": 7}"#).unwrap();
        assert_eq!(k.index, 0);
        assert_eq!(k.cmd, Command::Move);
    }

    #[test]
    fn keyframe_unknown_members_are_skipped() {
        let k = decode(r#"{"ease": [1, 2], "cmd": "remove", "color": {}}"#).unwrap();
        assert_eq!(k, Keyframe::new(Command::Remove, 0, 0));
    }

    #[test]
    fn keyframe_unknown_command() {
        let k = decode(r#"{"cmd": "teleport"}"#).unwrap();
        assert_eq!(k.cmd, Command::Invalid);
    }

    #[test]
    fn keyframe_bad_shapes() {
        for input in &[
            r#"{"cmd": 1}"#,
            r#"{"duration": "1"}"#,
            r#"{"matrix": {"sx": 1}}"#,
            r#"{"tween": true}"#,
            r#"{"name": null}"#,
            r#"[]"#,
        ] {
            let err = decode(input).unwrap_err();
            assert!(
                matches!(err.kind(), ErrorKind::ShapeMismatch { .. }),
                "{}",
                input
            );
        }
    }

    #[test]
    fn keyframe_repeated_member_decodes_again() {
        let k = decode(r#"{"duration": 1, "duration": 2, "matrix": [2], "matrix": [3, 4]}"#).unwrap();
        assert_eq!(k.duration, 2);
        assert_eq!(
            k.matrix,
            Some(Matrix {
                sy: 3.0,
                shx: 4.0,
                ..Matrix::IDENTITY
            })
        );
    }

    #[test]
    fn keyframe_encode_skips_absent() {
        let k = Keyframe {
            character: Some(String::from("arm")),
            ..Keyframe::new(Command::Place, 3, 4)
        };
        let expected =
            TextValue::from_slice(br#"{"cmd":"place","duration":4,"character":"arm"}"#).unwrap();
        assert_eq!(k.encode(), expected);
    }
}
