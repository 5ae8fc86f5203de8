use alloc::boxed::Box;
use core::fmt;

use crate::decoder::{Decoder, KeyedReader, SeqReader, SingleValueReader, UserInfo};
use crate::error::DecodeError;
use crate::path::CodingPath;
use crate::registry::ConversionRegistry;

use super::{ProxyKeyedReader, ProxySeqReader, ProxySingleValueReader};

enum Inner<'a> {
    Borrowed(&'a dyn Decoder),
    Owned(Box<dyn Decoder + 'a>),
}

impl<'a> Inner<'a> {
    #[inline]
    fn get(&self) -> &(dyn Decoder + 'a) {
        match self {
            Inner::Borrowed(decoder) => *decoder,
            Inner::Owned(decoder) => &**decoder,
        }
    }
}

/// A [`Decoder`] that carries a [`ConversionRegistry`].
///
/// Path, context bag and raw reads come from the wrapped decoder unchanged.
/// Every reader it returns is a proxy over the wrapped decoder's reader.
pub struct ProxyDecoder<'a> {
    inner: Inner<'a>,
    conversions: &'a ConversionRegistry,
}

impl<'a> ProxyDecoder<'a> {
    /// Wraps a borrowed decoder, usually the root of a decode call.
    #[inline]
    pub fn new(decoder: &'a dyn Decoder, conversions: &'a ConversionRegistry) -> Self {
        Self {
            inner: Inner::Borrowed(decoder),
            conversions,
        }
    }

    /// Wraps a decoder handed out by one of the wrapped readers.
    #[inline]
    pub fn from_boxed(decoder: Box<dyn Decoder + 'a>, conversions: &'a ConversionRegistry) -> Self {
        Self {
            inner: Inner::Owned(decoder),
            conversions,
        }
    }

    /// The wrapped decoder.
    #[inline]
    pub fn inner(&self) -> &(dyn Decoder + 'a) {
        self.inner.get()
    }
}

impl Decoder for ProxyDecoder<'_> {
    #[inline]
    fn coding_path(&self) -> &CodingPath {
        self.inner.get().coding_path()
    }

    #[inline]
    fn user_info(&self) -> &UserInfo {
        self.inner.get().user_info()
    }

    fn keyed_reader(&self) -> Result<Box<dyn KeyedReader + '_>, DecodeError> {
        let reader = self.inner.get().keyed_reader()?;
        Ok(Box::new(ProxyKeyedReader::new(reader, self.conversions)))
    }

    fn seq_reader(&self) -> Result<Box<dyn SeqReader + '_>, DecodeError> {
        let reader = self.inner.get().seq_reader()?;
        Ok(Box::new(ProxySeqReader::new(reader, self.conversions)))
    }

    fn single_value_reader(&self) -> Result<Box<dyn SingleValueReader + '_>, DecodeError> {
        let reader = self.inner.get().single_value_reader()?;
        Ok(Box::new(ProxySingleValueReader::new(
            reader,
            self.conversions,
        )))
    }

    #[inline]
    fn conversions(&self) -> Option<&ConversionRegistry> {
        Some(self.conversions)
    }
}

impl fmt::Debug for ProxyDecoder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyDecoder")
            .field("coding_path", self.coding_path())
            .field("conversions", self.conversions)
            .finish_non_exhaustive()
    }
}
