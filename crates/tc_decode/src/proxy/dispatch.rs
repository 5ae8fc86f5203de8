//! Override dispatch shared by every typed entry point.

use core::any::type_name;

use log::{debug, trace};

use crate::decode::Decode;
use crate::decoder::{Decoder, KeyedReader, SeqReader};
use crate::error::DecodeError;
use crate::registry::Conversion;

#[inline]
fn lookup<T: 'static>(decoder: &dyn Decoder) -> Option<&Conversion<T>> {
    decoder.conversions()?.get::<T>()
}

/// Whether a failed nil probe counts as absence.
///
/// Always `true`. Only failures other than a missing key or an exhausted
/// sequence are worth a log line.
fn absent_after(err: &DecodeError) -> bool {
    if !matches!(
        err,
        DecodeError::KeyNotFound { .. } | DecodeError::ValueNotFound { .. }
    ) {
        debug!("treating failed nil probe as absent: {err}");
    }
    true
}

// -----------------------------------------------------------------------------
// Values

/// Runs the conversion for `T` if one is registered, else `T::decode`.
pub(crate) fn value<T: Decode>(decoder: &dyn Decoder) -> Result<T, DecodeError> {
    match lookup::<T>(decoder) {
        Some(conversion) => {
            trace!(
                "converting `{}` at `{}`",
                type_name::<T>(),
                decoder.coding_path()
            );
            conversion.convert(decoder)
        }
        None => T::decode(decoder),
    }
}

/// Decodes a value known to be present as `Option<T>`.
///
/// A conversion for `Option<T>` wins over one for `T`.
fn present<T: Decode>(decoder: &dyn Decoder) -> Result<Option<T>, DecodeError> {
    match lookup::<Option<T>>(decoder) {
        Some(conversion) => {
            trace!(
                "converting `{}` at `{}`",
                type_name::<Option<T>>(),
                decoder.coding_path()
            );
            conversion.convert(decoder)
        }
        None => T::intercept(decoder).map(Some),
    }
}

/// `Option<T>` at a single position: null is `None` without any lookup.
pub(crate) fn optional<T: Decode>(decoder: &dyn Decoder) -> Result<Option<T>, DecodeError> {
    let is_nil = match decoder.single_value_reader() {
        Ok(reader) => reader.decode_nil(),
        Err(err) => absent_after(&err),
    };
    if is_nil {
        return Ok(None);
    }
    present(decoder)
}

// -----------------------------------------------------------------------------
// Fields

pub(crate) fn field<T: Decode>(
    reader: &(dyn KeyedReader + '_),
    key: &str,
) -> Result<T, DecodeError> {
    let decoder = reader.super_decoder_for_key(key)?;
    T::intercept(&*decoder)
}

/// An absent key or a null value is `None` without any lookup.
pub(crate) fn field_if_present<T: Decode>(
    reader: &(dyn KeyedReader + '_),
    key: &str,
) -> Result<Option<T>, DecodeError> {
    let is_absent = reader
        .decode_nil(key)
        .unwrap_or_else(|err| absent_after(&err));
    if is_absent {
        return Ok(None);
    }
    let decoder = reader.super_decoder_for_key(key)?;
    present(&*decoder)
}

// -----------------------------------------------------------------------------
// Elements

pub(crate) fn element<T: Decode>(reader: &mut (dyn SeqReader + '_)) -> Result<T, DecodeError> {
    let decoder = reader.super_decoder()?;
    T::intercept(&*decoder)
}

/// A null element is consumed and yields `None` without any lookup.
pub(crate) fn element_if_present<T: Decode>(
    reader: &mut (dyn SeqReader + '_),
) -> Result<Option<T>, DecodeError> {
    let is_absent = reader
        .decode_nil()
        .unwrap_or_else(|err| absent_after(&err));
    if is_absent {
        return Ok(None);
    }
    let decoder = reader.super_decoder()?;
    present(&*decoder)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::absent_after;
    use crate::decoder::{Decoder, KeyedReader, SeqReader};
    use crate::proxy::{ProxyKeyedReader, ProxySeqReader};
    use crate::{CodingPath, Conversion, ConversionRegistry, DecodeError};
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::cell::Cell;

    fn not_a_null(path: &CodingPath) -> DecodeError {
        DecodeError::type_mismatch(path, "null", "opaque")
    }

    fn read_after_probe(path: &CodingPath) -> DecodeError {
        DecodeError::data_corrupted(path, "value was read after a failed nil probe")
    }

    /// An object whose nil probe always fails.
    struct OpaqueObject {
        path: CodingPath,
    }

    impl KeyedReader for OpaqueObject {
        fn coding_path(&self) -> &CodingPath {
            &self.path
        }

        fn keys(&self) -> Vec<String> {
            Vec::from([String::from("n")])
        }

        fn contains(&self, key: &str) -> bool {
            key == "n"
        }

        fn decode_nil(&self, _key: &str) -> Result<bool, DecodeError> {
            Err(not_a_null(&self.path))
        }

        fn nested_keyed(&self, _key: &str) -> Result<Box<dyn KeyedReader + '_>, DecodeError> {
            Err(read_after_probe(&self.path))
        }

        fn nested_seq(&self, _key: &str) -> Result<Box<dyn SeqReader + '_>, DecodeError> {
            Err(read_after_probe(&self.path))
        }

        fn super_decoder(&self) -> Result<Box<dyn Decoder + '_>, DecodeError> {
            Err(read_after_probe(&self.path))
        }

        fn super_decoder_for_key(&self, _key: &str) -> Result<Box<dyn Decoder + '_>, DecodeError> {
            Err(read_after_probe(&self.path))
        }
    }

    /// A one-element array whose nil probe always fails.
    struct OpaqueArray {
        path: CodingPath,
    }

    impl SeqReader for OpaqueArray {
        fn coding_path(&self) -> &CodingPath {
            &self.path
        }

        fn count(&self) -> Option<usize> {
            Some(1)
        }

        fn current_index(&self) -> usize {
            0
        }

        fn decode_nil(&mut self) -> Result<bool, DecodeError> {
            Err(not_a_null(&self.path))
        }

        fn nested_keyed(&mut self) -> Result<Box<dyn KeyedReader + '_>, DecodeError> {
            Err(read_after_probe(&self.path))
        }

        fn nested_seq(&mut self) -> Result<Box<dyn SeqReader + '_>, DecodeError> {
            Err(read_after_probe(&self.path))
        }

        fn super_decoder(&mut self) -> Result<Box<dyn Decoder + '_>, DecodeError> {
            Err(read_after_probe(&self.path))
        }
    }

    fn counting_registry(calls: &Rc<Cell<usize>>) -> ConversionRegistry {
        let mut registry = ConversionRegistry::new();
        let plain = Rc::clone(calls);
        registry.insert(Conversion::<i64>::new(move |_| {
            plain.set(plain.get() + 1);
            Ok(1)
        }));
        let optional = Rc::clone(calls);
        registry.insert(Conversion::<Option<i64>>::new(move |_| {
            optional.set(optional.get() + 1);
            Ok(Some(2))
        }));
        registry
    }

    #[test]
    fn failed_probe_counts_as_absent() {
        let path = CodingPath::root();
        assert!(absent_after(&DecodeError::key_not_found(&path, "n")));
        assert!(absent_after(&DecodeError::value_not_found(&path, "value")));
        assert!(absent_after(&not_a_null(&path)));
    }

    #[test]
    fn field_with_failed_probe_is_none() {
        let calls = Rc::new(Cell::new(0));
        let registry = counting_registry(&calls);
        let object = OpaqueObject {
            path: CodingPath::root().field("outer"),
        };
        let proxy = ProxyKeyedReader::new(Box::new(object), &registry);
        let reader: &dyn KeyedReader = &proxy;

        assert_eq!(reader.decode_if_present::<i64>("n"), Ok(None));
        assert_eq!(reader.decode::<Option<i64>>("n"), Ok(None));
        assert_eq!(calls.get(), 0);

        // Required fields still reach the reader and fail there.
        assert!(reader.decode::<i64>("n").is_err());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn element_with_failed_probe_is_none() {
        let calls = Rc::new(Cell::new(0));
        let registry = counting_registry(&calls);
        let array = OpaqueArray {
            path: CodingPath::root().field("items"),
        };
        let mut proxy = ProxySeqReader::new(Box::new(array), &registry);
        let reader: &mut dyn SeqReader = &mut proxy;

        assert_eq!(reader.decode_if_present::<i64>(), Ok(None));
        assert_eq!(reader.decode::<Option<i64>>(), Ok(None));
        assert_eq!(calls.get(), 0);
    }

    #[cfg(feature = "json")]
    #[test]
    fn exhausted_sequence_is_none() {
        use crate::json::JsonDecoder;
        use crate::ConversionDecoder;

        let calls = Rc::new(Cell::new(0));
        let mut decoder = ConversionDecoder::new(JsonDecoder::new());
        *decoder.conversions_mut() = counting_registry(&calls);

        assert_eq!(
            decoder.decode_str::<(i64, Option<i64>)>("[7]"),
            Ok((1, None))
        );
        assert_eq!(calls.get(), 1);

        let plain = ConversionDecoder::new(JsonDecoder::new());
        assert_eq!(plain.decode_str::<(i64, Option<i64>)>("[7]"), Ok((7, None)));
        assert!(plain.decode_str::<(i64, i64)>("[7]").is_err());
    }
}
