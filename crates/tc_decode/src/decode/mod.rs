//! The [`Decode`] trait and its implementations for standard types.

mod collections;
mod option;
mod primitives;
mod tuples;

use crate::decoder::{Decoder, KeyedReader, SeqReader};
use crate::error::DecodeError;
use crate::proxy::dispatch;

/// A type that can be decoded from a [`Decoder`].
///
/// Implementors write [`decode`](Decode::decode), which builds `Self` from the
/// structure at the decoder's position. The three `intercept*` hooks are the
/// entry points every typed request goes through; their default bodies check
/// the decoder's conversions for an override of `Self` and fall back to
/// `decode`. Only wrappers with their own absence rules, like `Option`,
/// override them.
///
/// Implement this with [`#[derive(Decode)]`](derive@crate::Decode) where
/// possible.
///
/// # Examples
///
/// ```
/// use tc_decode::{Decode, DecodeError, Decoder};
///
/// struct Celsius(f64);
///
/// impl Decode for Celsius {
///     fn decode(decoder: &dyn Decoder) -> Result<Self, DecodeError> {
///         let keyed = decoder.keyed_reader()?;
///         Ok(Celsius(keyed.decode::<f64>("celsius")?))
///     }
/// }
/// ```
pub trait Decode: Sized + 'static {
    /// Decodes `Self` without looking for a conversion of `Self`.
    ///
    /// Nested values requested through the readers are still intercepted.
    fn decode(decoder: &dyn Decoder) -> Result<Self, DecodeError>;

    /// Decodes `Self` at `decoder`'s position.
    #[inline]
    fn intercept(decoder: &dyn Decoder) -> Result<Self, DecodeError> {
        dispatch::value(decoder)
    }

    /// Decodes `Self` from the field `key` of `reader`.
    #[inline]
    fn intercept_field(reader: &(dyn KeyedReader + '_), key: &str) -> Result<Self, DecodeError> {
        dispatch::field(reader, key)
    }

    /// Decodes `Self` from the next element of `reader`.
    #[inline]
    fn intercept_element(reader: &mut (dyn SeqReader + '_)) -> Result<Self, DecodeError> {
        dispatch::element(reader)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(all(test, feature = "json"))]
mod tests {
    use crate::json::JsonDecoder;
    use crate::{CodingPath, ConversionDecoder, Decode, DecodeError, WrappableDecoder};
    use alloc::string::String;
    use alloc::vec::Vec;

    fn decode<T: Decode>(text: &str) -> Result<T, DecodeError> {
        JsonDecoder::new().decode(text.as_bytes())
    }

    #[derive(Decode, Debug, PartialEq)]
    #[decode(rename_all = "camelCase")]
    struct Account {
        user_id: u64,
        #[decode(rename = "display")]
        display_name: String,
        #[decode(default)]
        login_count: u32,
        #[decode(skip)]
        cached: Vec<u8>,
    }

    #[derive(Decode, Debug, PartialEq)]
    #[decode(rename_all = "SCREAMING_SNAKE_CASE")]
    struct Tagged {
        r#type: String,
        item_count: u8,
    }

    #[derive(Decode, Debug, PartialEq)]
    struct Keyword {
        r#loop: bool,
    }

    #[derive(Decode, Debug, PartialEq)]
    struct Meters(f64);

    #[derive(Decode, Debug, PartialEq)]
    struct Point(i32, i32);

    #[derive(Decode, Debug, PartialEq)]
    struct Marker;

    #[derive(Decode, Debug, PartialEq)]
    #[decode(rename_all = "snake_case")]
    enum Color {
        DarkBlue,
        #[decode(rename = "red!")]
        Red,
    }

    #[derive(Decode, Debug, PartialEq)]
    struct Wrapper<T> {
        inner: T,
    }

    #[test]
    fn container_and_field_attributes() {
        let account: Account =
            decode(r#"{"userId": 1, "display": "ann", "cached": [1, 2]}"#).unwrap();
        assert_eq!(
            account,
            Account {
                user_id: 1,
                display_name: "ann".into(),
                login_count: 0,
                cached: Vec::new(),
            }
        );

        let account: Account =
            decode(r#"{"userId": 1, "display": "ann", "loginCount": null}"#).unwrap();
        assert_eq!(account.login_count, 0);

        let account: Account =
            decode(r#"{"userId": 1, "display": "ann", "loginCount": 4}"#).unwrap();
        assert_eq!(account.login_count, 4);
    }

    #[test]
    fn raw_identifiers_lose_their_prefix() {
        assert_eq!(
            decode::<Tagged>(r#"{"TYPE": "crate", "ITEM_COUNT": 2}"#),
            Ok(Tagged {
                r#type: "crate".into(),
                item_count: 2,
            })
        );
        assert!(decode::<Tagged>(r#"{"R#TYPE": "crate", "ITEM_COUNT": 2}"#).is_err());
        assert_eq!(
            decode::<Keyword>(r#"{"loop": true}"#),
            Ok(Keyword { r#loop: true })
        );
    }

    #[test]
    fn missing_required_field() {
        let err = decode::<Account>(r#"{"display": "ann"}"#).unwrap_err();
        assert_eq!(err, DecodeError::key_not_found(&CodingPath::root(), "userId"));
    }

    #[test]
    fn struct_shapes() {
        assert_eq!(decode::<Meters>("2.5"), Ok(Meters(2.5)));
        assert_eq!(decode::<Point>("[1, -2]"), Ok(Point(1, -2)));
        assert_eq!(decode::<Marker>(r#"{"anything": 1}"#), Ok(Marker));
        assert_eq!(
            decode::<Wrapper<bool>>(r#"{"inner": true}"#),
            Ok(Wrapper { inner: true })
        );
    }

    #[test]
    fn enum_tags() {
        assert_eq!(decode::<Color>(r#""dark_blue""#), Ok(Color::DarkBlue));
        assert_eq!(decode::<Color>(r#""red!""#), Ok(Color::Red));

        let err = decode::<Vec<Color>>(r#"["red!", "Red"]"#).unwrap_err();
        assert_eq!(
            err,
            DecodeError::unknown_variant(&CodingPath::root().index(1), "Red", &["dark_blue", "red!"])
        );
    }

    #[test]
    fn newtype_sees_inner_conversion() {
        let mut decoder = ConversionDecoder::new(JsonDecoder::new());
        decoder.register::<f64, _>(|decoder| {
            let text = decoder.decode::<String>()?;
            Ok(text.len() as f64)
        });
        assert_eq!(decoder.decode_str::<Meters>(r#""abc""#), Ok(Meters(3.0)));
    }
}
