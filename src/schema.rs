//! Positional array encoding for the compact value types.
//!
//! A [`Schema`] is an ordered list of slots: the slot at index `p` reads and
//! writes the field stored at array position `p`. Decoding walks
//! `min(array length, schema length)` positions. Positions past the end of a
//! short array keep the target's defaults, and elements past the end of the
//! schema are ignored.
//!
//! Positions are assigned in order, so if an element at position `p` has the
//! wrong kind, positions before `p` have already been written and nothing at
//! or after `p` is touched. A non-array value fails before any position is
//! written.

use crate::decode::{expect_array, expect_bool, expect_f64, expect_int, expect_str, expect_u32};
use crate::{text::TextValue, Error, ValueReader};

/// How the field behind one array position is read and written
pub(crate) enum Slot<T> {
    /// Any number, narrowed to a float
    Float {
        get: fn(&T) -> f32,
        set: fn(&mut T, f32),
    },

    /// Any number. Doubles are truncated.
    Int {
        get: fn(&T) -> i64,
        set: fn(&mut T, i64),
    },

    /// Unsigned integer that fits in 32 bits
    UInt {
        get: fn(&T) -> u32,
        set: fn(&mut T, u32),
    },

    Bool {
        get: fn(&T) -> bool,
        set: fn(&mut T, bool),
    },

    /// Interned name
    Name {
        get: fn(&T) -> &'static str,
        set: fn(&mut T, &str),
    },
}

impl<T> Slot<T> {
    fn assign<'a, V: ValueReader<'a>>(&self, target: &mut T, value: V) -> Result<(), Error> {
        match self {
            Slot::Float { set, .. } => set(target, expect_f64(value)? as f32),
            Slot::Int { set, .. } => set(target, expect_int(value)?),
            Slot::UInt { set, .. } => set(target, expect_u32(value)?),
            Slot::Bool { set, .. } => set(target, expect_bool(value)?),
            Slot::Name { set, .. } => set(target, expect_str(value)?),
        }

        Ok(())
    }

    fn read(&self, source: &T) -> TextValue {
        match self {
            Slot::Float { get, .. } => TextValue::from(get(source)),
            Slot::Int { get, .. } => TextValue::from_i64(get(source)),
            Slot::UInt { get, .. } => TextValue::from(get(source)),
            Slot::Bool { get, .. } => TextValue::from(get(source)),
            Slot::Name { get, .. } => TextValue::from(get(source)),
        }
    }
}

pub(crate) struct Schema<T: 'static> {
    slots: &'static [Slot<T>],
}

impl<T: 'static> Schema<T> {
    pub(crate) const fn new(slots: &'static [Slot<T>]) -> Self {
        Schema { slots }
    }

    pub(crate) fn decode_into<'a, V: ValueReader<'a>>(
        &self,
        target: &mut T,
        value: V,
    ) -> Result<(), Error> {
        let elements = expect_array(value)?;
        for (slot, element) in self.slots.iter().zip(elements) {
            slot.assign(target, element)?;
        }

        Ok(())
    }

    /// Every position of the schema, in order
    pub(crate) fn encode(&self, source: &T) -> TextValue {
        TextValue::Array(self.slots.iter().map(|slot| slot.read(source)).collect())
    }
}

/// Saturating conversion for rectangle coordinates
pub(crate) fn clamp_i32(x: i64) -> i32 {
    x.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Saturating conversion for rectangle extents
pub(crate) fn clamp_u32(x: i64) -> u32 {
    x.clamp(0, i64::from(u32::MAX)) as u32
}
