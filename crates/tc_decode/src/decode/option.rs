use crate::decode::Decode;
use crate::decoder::{Decoder, KeyedReader, SeqReader};
use crate::error::DecodeError;
use crate::proxy::dispatch;

impl<T: Decode> Decode for Option<T> {
    fn decode(decoder: &dyn Decoder) -> Result<Self, DecodeError> {
        if decoder.single_value_reader()?.decode_nil() {
            return Ok(None);
        }
        T::intercept(decoder).map(Some)
    }

    #[inline]
    fn intercept(decoder: &dyn Decoder) -> Result<Self, DecodeError> {
        dispatch::optional(decoder)
    }

    #[inline]
    fn intercept_field(reader: &(dyn KeyedReader + '_), key: &str) -> Result<Self, DecodeError> {
        dispatch::field_if_present(reader, key)
    }

    #[inline]
    fn intercept_element(reader: &mut (dyn SeqReader + '_)) -> Result<Self, DecodeError> {
        dispatch::element_if_present(reader)
    }
}
