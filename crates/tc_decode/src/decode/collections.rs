use alloc::collections::{BTreeMap, VecDeque};
use alloc::string::String;
use alloc::vec::Vec;
use core::hash::BuildHasher;

use crate::decode::Decode;
use crate::decoder::{Decoder, KeyedReader, SeqReader};
use crate::error::DecodeError;

fn read_elements<T: Decode>(
    seq: &mut (dyn SeqReader + '_),
    mut push: impl FnMut(T),
) -> Result<(), DecodeError> {
    while !seq.is_at_end() {
        push(seq.decode::<T>()?);
    }
    Ok(())
}

fn read_entries<V: Decode>(
    keyed: &(dyn KeyedReader + '_),
    mut insert: impl FnMut(String, V),
) -> Result<(), DecodeError> {
    for key in keyed.keys() {
        let value = keyed.decode::<V>(&key)?;
        insert(key, value);
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Sequences

impl<T: Decode> Decode for Vec<T> {
    fn decode(decoder: &dyn Decoder) -> Result<Self, DecodeError> {
        let mut seq = decoder.seq_reader()?;
        let mut items = Vec::with_capacity(seq.count().unwrap_or(0));
        read_elements(&mut *seq, |item| items.push(item))?;
        Ok(items)
    }
}

impl<T: Decode> Decode for VecDeque<T> {
    fn decode(decoder: &dyn Decoder) -> Result<Self, DecodeError> {
        let mut seq = decoder.seq_reader()?;
        let mut items = VecDeque::with_capacity(seq.count().unwrap_or(0));
        read_elements(&mut *seq, |item| items.push_back(item))?;
        Ok(items)
    }
}

// -----------------------------------------------------------------------------
// Maps

impl<V: Decode> Decode for BTreeMap<String, V> {
    fn decode(decoder: &dyn Decoder) -> Result<Self, DecodeError> {
        let keyed = decoder.keyed_reader()?;
        let mut map = BTreeMap::new();
        read_entries(&*keyed, |key, value| {
            map.insert(key, value);
        })?;
        Ok(map)
    }
}

impl<V, S> Decode for tc_utils::hash::hashbrown::HashMap<String, V, S>
where
    V: Decode,
    S: BuildHasher + Default + 'static,
{
    fn decode(decoder: &dyn Decoder) -> Result<Self, DecodeError> {
        let keyed = decoder.keyed_reader()?;
        let mut map = Self::with_hasher(S::default());
        read_entries(&*keyed, |key, value| {
            map.insert(key, value);
        })?;
        Ok(map)
    }
}

#[cfg(feature = "std")]
impl<V, S> Decode for std::collections::HashMap<String, V, S>
where
    V: Decode,
    S: BuildHasher + Default + 'static,
{
    fn decode(decoder: &dyn Decoder) -> Result<Self, DecodeError> {
        let keyed = decoder.keyed_reader()?;
        let mut map = Self::with_hasher(S::default());
        read_entries(&*keyed, |key, value| {
            map.insert(key, value);
        })?;
        Ok(map)
    }
}
