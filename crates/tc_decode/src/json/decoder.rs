use alloc::string::ToString;

use serde_json::Value;

use crate::decoder::UserInfo;
use crate::error::DecodeError;
use crate::session::{DecodeSeed, WrappableDecoder};

use super::JsonValueDecoder;

/// Decodes JSON text.
///
/// # Examples
///
/// ```
/// use tc_decode::WrappableDecoder;
/// use tc_decode::json::JsonDecoder;
///
/// let decoder = JsonDecoder::new();
/// let values: Vec<Option<i32>> = decoder.decode(b"[1, null, 3]").unwrap();
/// assert_eq!(values, [Some(1), None, Some(3)]);
/// ```
#[derive(Debug, Default)]
pub struct JsonDecoder {
    user_info: UserInfo,
}

impl JsonDecoder {
    #[inline]
    pub const fn new() -> Self {
        Self {
            user_info: UserInfo::new(),
        }
    }

    #[inline]
    pub const fn with_user_info(user_info: UserInfo) -> Self {
        Self { user_info }
    }

    /// Runs `seed` on an already parsed `value`.
    pub fn decode_value_seed<S: DecodeSeed>(
        &self,
        value: &Value,
        seed: S,
    ) -> Result<S::Value, DecodeError> {
        let root = JsonValueDecoder::new(value, &self.user_info);
        seed.decode(&root)
    }
}

impl WrappableDecoder for JsonDecoder {
    #[inline]
    fn user_info(&self) -> &UserInfo {
        &self.user_info
    }

    #[inline]
    fn user_info_mut(&mut self) -> &mut UserInfo {
        &mut self.user_info
    }

    fn decode_seed<S: DecodeSeed>(&self, bytes: &[u8], seed: S) -> Result<S::Value, DecodeError> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|err| DecodeError::Malformed(err.to_string()))?;
        self.decode_value_seed(&value, seed)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::JsonDecoder;
    use crate::{CodingKey, CodingPath, DecodeError, Decoder, UserInfo, WrappableDecoder};
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::json::JsonValueDecoder;

    fn decode<T: crate::Decode>(text: &str) -> Result<T, DecodeError> {
        JsonDecoder::new().decode(text.as_bytes())
    }

    #[test]
    fn integers_must_be_exact() {
        assert_eq!(decode::<i64>("3.0"), Ok(3));
        assert_eq!(decode::<u64>("-0.0"), Ok(0));
        assert!(matches!(
            decode::<i64>("3.5"),
            Err(DecodeError::DataCorrupted { .. })
        ));
        assert!(matches!(
            decode::<u64>("-1"),
            Err(DecodeError::DataCorrupted { .. })
        ));
        assert!(matches!(
            decode::<i64>("18446744073709551615"),
            Err(DecodeError::DataCorrupted { .. })
        ));
    }

    #[test]
    fn narrowing_reports_the_path() {
        let err = decode::<Vec<u8>>("[1, 300]").unwrap_err();
        assert_eq!(
            err,
            DecodeError::DataCorrupted {
                path: CodingPath::root().index(1),
                message: "number 300 does not fit in u8".into(),
            }
        );
    }

    #[test]
    fn null_and_kind_mismatch() {
        assert_eq!(
            decode::<bool>("null"),
            Err(DecodeError::value_not_found(&CodingPath::root(), "bool"))
        );
        assert_eq!(
            decode::<String>("12"),
            Err(DecodeError::type_mismatch(&CodingPath::root(), "string", "number"))
        );
        assert_eq!(
            decode::<Vec<i64>>("{}"),
            Err(DecodeError::type_mismatch(&CodingPath::root(), "array", "object"))
        );
    }

    #[test]
    fn malformed_input() {
        assert!(matches!(decode::<i64>("{"), Err(DecodeError::Malformed(_))));
        assert!(matches!(decode::<i64>(""), Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn collections_and_tuples() {
        let map: BTreeMap<String, Option<u16>> = decode(r#"{"a": 1, "b": null}"#).unwrap();
        assert_eq!(map.get("a"), Some(&Some(1)));
        assert_eq!(map.get("b"), Some(&None));

        let hashed: tc_utils::hash::HashMap<String, i64> = decode(r#"{"k": 3}"#).unwrap();
        assert_eq!(hashed.get("k"), Some(&3));

        let pair: (String, f32) = decode(r#"["x", 1.5]"#).unwrap();
        assert_eq!(pair, (String::from("x"), 1.5_f32));

        let err = decode::<(i64, i64)>("[1]").unwrap_err();
        assert_eq!(err, DecodeError::value_not_found(&CodingPath::root().index(1), "value"));
    }

    #[test]
    fn chars_and_boxes() {
        assert_eq!(decode::<char>(r#""z""#), Ok('z'));
        assert!(decode::<char>(r#""zz""#).is_err());
        assert_eq!(decode::<Box<i32>>("7"), Ok(Box::new(7)));
    }

    #[test]
    fn keyed_reader_walk() {
        let value = serde_json::json!({
            "name": "base",
            "super": { "id": 1 },
            "tags": ["a", null],
            "gone": null,
        });
        let info = UserInfo::new();
        let root = JsonValueDecoder::new(&value, &info);
        let root: &dyn Decoder = &root;

        let keyed = root.keyed_reader().unwrap();
        assert!(keyed.contains("name"));
        assert_eq!(keyed.decode_nil("gone"), Ok(true));
        assert_eq!(keyed.decode_nil("name"), Ok(false));
        assert_eq!(
            keyed.decode_nil("missing"),
            Err(DecodeError::key_not_found(&CodingPath::root(), "missing"))
        );

        let base = keyed.super_decoder().unwrap();
        assert_eq!(base.coding_path().last(), Some(&CodingKey::Super));
        assert_eq!(base.keyed_reader().unwrap().decode::<u8>("id"), Ok(1));

        let mut tags = keyed.nested_seq("tags").unwrap();
        assert_eq!(tags.count(), Some(2));
        assert_eq!(tags.decode::<String>(), Ok("a".into()));
        assert_eq!(tags.decode_nil(), Ok(true));
        assert!(tags.is_at_end());
        assert!(matches!(
            tags.decode_nil(),
            Err(DecodeError::ValueNotFound { .. })
        ));
    }

    #[test]
    fn optional_fields() {
        let value = serde_json::json!({ "a": null, "b": 2 });
        let info = UserInfo::new();
        let root = JsonValueDecoder::new(&value, &info);
        let root: &dyn Decoder = &root;
        let keyed = root.keyed_reader().unwrap();

        assert_eq!(keyed.decode_if_present::<i64>("a"), Ok(None));
        assert_eq!(keyed.decode_if_present::<i64>("b"), Ok(Some(2)));
        assert_eq!(keyed.decode_if_present::<i64>("c"), Ok(None));
        assert_eq!(keyed.decode::<Option<i64>>("c"), Ok(None));
        assert_eq!(
            keyed.decode::<i64>("c"),
            Err(DecodeError::key_not_found(&CodingPath::root(), "c"))
        );
    }

    #[test]
    fn user_info_reaches_nested_decoders() {
        struct Marker(u8);

        let mut info = UserInfo::new();
        info.insert(Marker(9));
        let decoder = JsonDecoder::with_user_info(info);
        assert_eq!(decoder.user_info().get::<Marker>().map(|m| m.0), Some(9));

        let value = serde_json::json!([[1]]);
        let root = JsonValueDecoder::new(&value, decoder.user_info());
        let root: &dyn Decoder = &root;
        let mut outer = root.seq_reader().unwrap();
        let inner = outer.super_decoder().unwrap();
        assert_eq!(inner.user_info().get::<Marker>().map(|m| m.0), Some(9));
        assert_eq!(inner.coding_path(), &CodingPath::root().index(0));
    }
}
