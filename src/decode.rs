use crate::{Error, ValueReader};
use std::collections::{btree_map::Entry, BTreeMap};

/// Populate a value from a node of either parse tree.
///
/// Decoding is additive: containers are appended to and inserted into, so
/// `decode_into` is meant to be called on a freshly constructed value. Use
/// [`Decode::decode`] unless building up a value by hand.
///
/// When an error is returned the target may hold whatever was decoded before
/// the fault, and should be discarded.
pub trait Decode: Default {
    fn decode_into<'a, V: ValueReader<'a>>(&mut self, value: V) -> Result<(), Error>;

    fn decode<'a, V: ValueReader<'a>>(value: V) -> Result<Self, Error> {
        let mut result = Self::default();
        result.decode_into(value)?;
        Ok(result)
    }
}

#[inline]
pub(crate) fn expect_array<'a, V: ValueReader<'a>>(value: V) -> Result<V::Elements, Error> {
    value
        .elements()
        .ok_or_else(|| Error::shape("array", value.kind()))
}

#[inline]
pub(crate) fn expect_object<'a, V: ValueReader<'a>>(value: V) -> Result<V::Members, Error> {
    value
        .members()
        .ok_or_else(|| Error::shape("object", value.kind()))
}

#[inline]
pub(crate) fn expect_str<'a, V: ValueReader<'a>>(value: V) -> Result<&'a str, Error> {
    value
        .as_str()
        .ok_or_else(|| Error::shape("string", value.kind()))
}

#[inline]
pub(crate) fn expect_u32<'a, V: ValueReader<'a>>(value: V) -> Result<u32, Error> {
    value
        .as_u64()
        .and_then(|x| u32::try_from(x).ok())
        .ok_or_else(|| Error::shape("unsigned 32 bit integer", value.kind()))
}

#[inline]
pub(crate) fn expect_f64<'a, V: ValueReader<'a>>(value: V) -> Result<f64, Error> {
    value
        .as_f64()
        .ok_or_else(|| Error::shape("number", value.kind()))
}

/// Any number as an integer. Integers are taken as is, doubles are truncated
/// toward zero and saturate at the bounds of `i64`.
#[inline]
pub(crate) fn expect_int<'a, V: ValueReader<'a>>(value: V) -> Result<i64, Error> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|x| x as i64))
        .ok_or_else(|| Error::shape("number", value.kind()))
}

#[inline]
pub(crate) fn expect_bool<'a, V: ValueReader<'a>>(value: V) -> Result<bool, Error> {
    value
        .as_bool()
        .ok_or_else(|| Error::shape("bool", value.kind()))
}

impl Decode for u32 {
    fn decode_into<'a, V: ValueReader<'a>>(&mut self, value: V) -> Result<(), Error> {
        *self = expect_u32(value)?;
        Ok(())
    }
}

impl Decode for String {
    fn decode_into<'a, V: ValueReader<'a>>(&mut self, value: V) -> Result<(), Error> {
        let s = expect_str(value)?;
        self.clear();
        self.push_str(s);
        Ok(())
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode_into<'a, V: ValueReader<'a>>(&mut self, value: V) -> Result<(), Error> {
        let elements = expect_array(value)?;
        self.reserve(elements.size_hint().0);
        for element in elements {
            self.push(T::decode(element)?);
        }

        Ok(())
    }
}

/// The first occurrence of a key wins. Later duplicates are still decoded
/// (and so can still fail) but are then dropped.
impl<T: Decode> Decode for BTreeMap<String, T> {
    fn decode_into<'a, V: ValueReader<'a>>(&mut self, value: V) -> Result<(), Error> {
        for (key, member) in expect_object(value)? {
            let decoded = T::decode(member)?;
            match self.entry(key.to_string()) {
                Entry::Vacant(slot) => {
                    slot.insert(decoded);
                }
                Entry::Occupied(_) => {
                    log::trace!("dropping duplicate key {:?}", key);
                }
            }
        }

        Ok(())
    }
}

/// Present members decode into `Some`. A repeated member decodes into the
/// value already there.
impl<T: Decode> Decode for Option<T> {
    fn decode_into<'a, V: ValueReader<'a>>(&mut self, value: V) -> Result<(), Error> {
        self.get_or_insert_with(T::default).decode_into(value)
    }
}
