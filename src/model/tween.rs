use crate::schema::{Schema, Slot};
use crate::{Decode, Encode, Error, Rotation, TextValue, ValueReader};

/// Interpolation settings attached to a keyframe
///
/// Encoded as the array `[tween, rotateDirection, rotateTimes]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tween {
    pub tween: bool,
    pub rotate_direction: Rotation,
    pub rotate_times: u32,
}

static TWEEN_SLOTS: [Slot<Tween>; 3] = [
    Slot::Bool {
        get: |t: &Tween| t.tween,
        set: |t: &mut Tween, v: bool| t.tween = v,
    },
    Slot::Name {
        get: |t: &Tween| t.rotate_direction.name(),
        set: |t: &mut Tween, v: &str| t.rotate_direction = Rotation::from_name(v),
    },
    Slot::UInt {
        get: |t: &Tween| t.rotate_times,
        set: |t: &mut Tween, v: u32| t.rotate_times = v,
    },
];

static TWEEN: Schema<Tween> = Schema::new(&TWEEN_SLOTS);

impl Decode for Tween {
    fn decode_into<'a, V: ValueReader<'a>>(&mut self, value: V) -> Result<(), Error> {
        TWEEN.decode_into(self, value)
    }
}

impl Encode for Tween {
    fn encode(&self) -> TextValue {
        TWEEN.encode(self)
    }
}
