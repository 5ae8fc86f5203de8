//! Readers that consult a [`ConversionRegistry`] on every typed request.
//!
//! A [`ProxyDecoder`] wraps another [`Decoder`] and a borrowed registry.
//! Every reader or decoder it hands out is wrapped again, carrying the same
//! registry, so conversions apply at any depth: in fields, in elements, in
//! nested objects and inside other conversions.
//!
//! [`ConversionDecoder`](crate::ConversionDecoder) builds this layer for each
//! decode call. It can also be used directly on a decoder obtained elsewhere:
//!
//! ```
//! # #[cfg(feature = "json")] {
//! use tc_decode::proxy::ProxyDecoder;
//! use tc_decode::json::JsonValueDecoder;
//! use tc_decode::{Conversion, ConversionRegistry, Decoder, UserInfo};
//!
//! let mut registry = ConversionRegistry::new();
//! registry.insert(Conversion::<u8>::new(|_| Ok(42)));
//!
//! let value = serde_json::json!([1, 2]);
//! let info = UserInfo::new();
//! let plain = JsonValueDecoder::new(&value, &info);
//! let proxy = ProxyDecoder::new(&plain, &registry);
//!
//! let decoder: &dyn Decoder = &proxy;
//! assert_eq!(decoder.decode::<Vec<u8>>().unwrap(), [42, 42]);
//! # }
//! ```
//!
//! [`ConversionRegistry`]: crate::ConversionRegistry
//! [`Decoder`]: crate::Decoder

pub(crate) mod dispatch;

mod decoder;
mod keyed;
mod seq;
mod single;

pub use decoder::ProxyDecoder;
pub use keyed::ProxyKeyedReader;
pub use seq::ProxySeqReader;
pub use single::ProxySingleValueReader;

// -----------------------------------------------------------------------------
// Tests

#[cfg(all(test, feature = "json"))]
mod tests {
    use crate::json::JsonDecoder;
    use crate::{ConversionDecoder, Decode, DecodeError, Decoder};
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    fn int_from_string(decoder: &dyn Decoder) -> Result<i64, DecodeError> {
        let text = decoder.decode::<String>()?;
        text.parse()
            .map_err(|_| DecodeError::data_corrupted(decoder.coding_path(), "not an integer"))
    }

    fn session() -> ConversionDecoder<JsonDecoder> {
        let mut decoder = ConversionDecoder::new(JsonDecoder::new());
        decoder.register(int_from_string);
        decoder
    }

    /// Reads every integer through a reader obtained from another reader.
    #[derive(Debug, PartialEq)]
    struct Nested {
        keyed_in_keyed: i64,
        seq_in_keyed: i64,
        seq_in_seq: i64,
        keyed_in_seq: i64,
    }

    impl Decode for Nested {
        fn decode(decoder: &dyn Decoder) -> Result<Self, DecodeError> {
            let keyed = decoder.keyed_reader()?;

            let keyed_in_keyed = keyed.nested_keyed("a")?.decode::<i64>("n")?;

            let mut outer = keyed.nested_seq("b")?;
            let seq_in_keyed = outer.decode::<i64>()?;
            let seq_in_seq = outer.nested_seq()?.decode::<i64>()?;
            let keyed_in_seq = outer.nested_keyed()?.decode::<i64>("n")?;

            Ok(Self {
                keyed_in_keyed,
                seq_in_keyed,
                seq_in_seq,
                keyed_in_seq,
            })
        }
    }

    /// Reads its integer through a single value reader.
    #[derive(Debug, PartialEq)]
    struct Single(i64);

    impl Decode for Single {
        fn decode(decoder: &dyn Decoder) -> Result<Self, DecodeError> {
            decoder.single_value_reader()?.decode::<i64>().map(Single)
        }
    }

    #[test]
    fn nested_readers_keep_conversions() {
        let text = r#"{"a": {"n": "1"}, "b": ["2", ["3"], {"n": "4"}]}"#;
        let nested: Nested = session().decode_str(text).unwrap();
        assert_eq!(
            nested,
            Nested {
                keyed_in_keyed: 1,
                seq_in_keyed: 2,
                seq_in_seq: 3,
                keyed_in_seq: 4,
            }
        );

        // Without the conversion the same strings are rejected.
        let plain = ConversionDecoder::new(JsonDecoder::new());
        assert!(plain.decode_str::<Nested>(text).is_err());
    }

    #[test]
    fn nested_errors_carry_the_full_path() {
        let text = r#"{"a": {"n": "x"}, "b": []}"#;
        let err = session().decode_str::<Nested>(text).unwrap_err();
        assert_eq!(err.path().map(ToString::to_string).as_deref(), Some("a.n"));
    }

    #[test]
    fn single_value_reader_keeps_conversions() {
        let decoder = session();
        assert_eq!(decoder.decode_str::<Single>(r#""5""#), Ok(Single(5)));

        let values: Vec<Single> = decoder.decode_str(r#"["6", "7"]"#).unwrap();
        assert_eq!(values, [Single(6), Single(7)]);
    }
}
