use alloc::boxed::Box;

use crate::decoder::{Decoder, KeyedReader, SeqReader};
use crate::error::DecodeError;
use crate::path::CodingPath;
use crate::registry::ConversionRegistry;

use super::{ProxyDecoder, ProxyKeyedReader};

/// A [`SeqReader`] that carries a [`ConversionRegistry`].
///
/// Position and end detection are those of the wrapped reader.
pub struct ProxySeqReader<'a> {
    inner: Box<dyn SeqReader + 'a>,
    conversions: &'a ConversionRegistry,
}

impl<'a> ProxySeqReader<'a> {
    #[inline]
    pub fn new(inner: Box<dyn SeqReader + 'a>, conversions: &'a ConversionRegistry) -> Self {
        Self { inner, conversions }
    }
}

impl SeqReader for ProxySeqReader<'_> {
    #[inline]
    fn coding_path(&self) -> &CodingPath {
        self.inner.coding_path()
    }

    #[inline]
    fn count(&self) -> Option<usize> {
        self.inner.count()
    }

    #[inline]
    fn current_index(&self) -> usize {
        self.inner.current_index()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.inner.is_at_end()
    }

    #[inline]
    fn decode_nil(&mut self) -> Result<bool, DecodeError> {
        self.inner.decode_nil()
    }

    fn nested_keyed(&mut self) -> Result<Box<dyn KeyedReader + '_>, DecodeError> {
        let reader = self.inner.nested_keyed()?;
        Ok(Box::new(ProxyKeyedReader::new(reader, self.conversions)))
    }

    fn nested_seq(&mut self) -> Result<Box<dyn SeqReader + '_>, DecodeError> {
        let reader = self.inner.nested_seq()?;
        Ok(Box::new(ProxySeqReader::new(reader, self.conversions)))
    }

    fn super_decoder(&mut self) -> Result<Box<dyn Decoder + '_>, DecodeError> {
        let decoder = self.inner.super_decoder()?;
        Ok(Box::new(ProxyDecoder::from_boxed(decoder, self.conversions)))
    }
}
