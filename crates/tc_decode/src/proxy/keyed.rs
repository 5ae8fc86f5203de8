use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::decoder::{Decoder, KeyedReader, SeqReader};
use crate::error::DecodeError;
use crate::path::CodingPath;
use crate::registry::ConversionRegistry;

use super::{ProxyDecoder, ProxySeqReader};

/// A [`KeyedReader`] that carries a [`ConversionRegistry`].
pub struct ProxyKeyedReader<'a> {
    inner: Box<dyn KeyedReader + 'a>,
    conversions: &'a ConversionRegistry,
}

impl<'a> ProxyKeyedReader<'a> {
    #[inline]
    pub fn new(inner: Box<dyn KeyedReader + 'a>, conversions: &'a ConversionRegistry) -> Self {
        Self { inner, conversions }
    }
}

impl KeyedReader for ProxyKeyedReader<'_> {
    #[inline]
    fn coding_path(&self) -> &CodingPath {
        self.inner.coding_path()
    }

    #[inline]
    fn keys(&self) -> Vec<String> {
        self.inner.keys()
    }

    #[inline]
    fn contains(&self, key: &str) -> bool {
        self.inner.contains(key)
    }

    #[inline]
    fn decode_nil(&self, key: &str) -> Result<bool, DecodeError> {
        self.inner.decode_nil(key)
    }

    fn nested_keyed(&self, key: &str) -> Result<Box<dyn KeyedReader + '_>, DecodeError> {
        let reader = self.inner.nested_keyed(key)?;
        Ok(Box::new(ProxyKeyedReader::new(reader, self.conversions)))
    }

    fn nested_seq(&self, key: &str) -> Result<Box<dyn SeqReader + '_>, DecodeError> {
        let reader = self.inner.nested_seq(key)?;
        Ok(Box::new(ProxySeqReader::new(reader, self.conversions)))
    }

    fn super_decoder(&self) -> Result<Box<dyn Decoder + '_>, DecodeError> {
        let decoder = self.inner.super_decoder()?;
        Ok(Box::new(ProxyDecoder::from_boxed(decoder, self.conversions)))
    }

    fn super_decoder_for_key(&self, key: &str) -> Result<Box<dyn Decoder + '_>, DecodeError> {
        let decoder = self.inner.super_decoder_for_key(key)?;
        Ok(Box::new(ProxyDecoder::from_boxed(decoder, self.conversions)))
    }
}
