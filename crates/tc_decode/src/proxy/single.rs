use alloc::boxed::Box;
use alloc::string::String;

use crate::decoder::{Decoder, SingleValueReader};
use crate::error::DecodeError;
use crate::path::CodingPath;
use crate::registry::ConversionRegistry;

use super::ProxyDecoder;

/// A [`SingleValueReader`] that carries a [`ConversionRegistry`].
///
/// The raw `read_*` methods forward unchanged; only
/// [`super_decoder`](SingleValueReader::super_decoder) is re-wrapped, which
/// is where typed requests on this reader are routed.
pub struct ProxySingleValueReader<'a> {
    inner: Box<dyn SingleValueReader + 'a>,
    conversions: &'a ConversionRegistry,
}

impl<'a> ProxySingleValueReader<'a> {
    #[inline]
    pub fn new(
        inner: Box<dyn SingleValueReader + 'a>,
        conversions: &'a ConversionRegistry,
    ) -> Self {
        Self { inner, conversions }
    }
}

impl SingleValueReader for ProxySingleValueReader<'_> {
    #[inline]
    fn coding_path(&self) -> &CodingPath {
        self.inner.coding_path()
    }

    #[inline]
    fn decode_nil(&self) -> bool {
        self.inner.decode_nil()
    }

    #[inline]
    fn read_bool(&self) -> Result<bool, DecodeError> {
        self.inner.read_bool()
    }

    #[inline]
    fn read_i64(&self) -> Result<i64, DecodeError> {
        self.inner.read_i64()
    }

    #[inline]
    fn read_u64(&self) -> Result<u64, DecodeError> {
        self.inner.read_u64()
    }

    #[inline]
    fn read_f64(&self) -> Result<f64, DecodeError> {
        self.inner.read_f64()
    }

    #[inline]
    fn read_string(&self) -> Result<String, DecodeError> {
        self.inner.read_string()
    }

    fn super_decoder(&self) -> Result<Box<dyn Decoder + '_>, DecodeError> {
        let decoder = self.inner.super_decoder()?;
        Ok(Box::new(ProxyDecoder::from_boxed(decoder, self.conversions)))
    }
}
