//! The structural reader contract.
//!
//! A wrapped decoder exposes one [`Decoder`] per position. From it a caller
//! obtains exactly one reader shape: [`KeyedReader`] for objects,
//! [`SeqReader`] for arrays, or [`SingleValueReader`] for everything else.
//!
//! All four traits are object safe. The typed entry points (`decode`,
//! `decode_if_present`) are inherent methods on the trait objects, so every
//! typed request funnels through [`Decode`]'s interception hooks no matter
//! which implementation sits behind the object.

mod user_info;

pub use user_info::UserInfo;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::decode::Decode;
use crate::error::DecodeError;
use crate::path::CodingPath;
use crate::proxy::dispatch;
use crate::registry::ConversionRegistry;

// -----------------------------------------------------------------------------
// Decoder

/// A decoder positioned at one value.
pub trait Decoder {
    /// Path from the root to this position.
    fn coding_path(&self) -> &CodingPath;

    /// The caller-supplied context bag of the running session.
    fn user_info(&self) -> &UserInfo;

    /// Reads the value as an object.
    fn keyed_reader(&self) -> Result<Box<dyn KeyedReader + '_>, DecodeError>;

    /// Reads the value as an array.
    fn seq_reader(&self) -> Result<Box<dyn SeqReader + '_>, DecodeError>;

    /// Reads the value as a scalar, or as a position to hand on.
    fn single_value_reader(&self) -> Result<Box<dyn SingleValueReader + '_>, DecodeError>;

    /// The conversions consulted at this position.
    ///
    /// Plain decoders return `None`; the [proxy](crate::proxy) layer returns
    /// the registry it carries.
    #[inline]
    fn conversions(&self) -> Option<&ConversionRegistry> {
        None
    }
}

impl dyn Decoder + '_ {
    /// Decodes a `T` at this position.
    ///
    /// A conversion registered for `T` takes precedence over `T`'s own
    /// [`Decode`] impl when this decoder carries a registry.
    #[inline]
    pub fn decode<T: Decode>(&self) -> Result<T, DecodeError> {
        T::intercept(self)
    }
}

// -----------------------------------------------------------------------------
// KeyedReader

/// Reads the fields of an object.
pub trait KeyedReader {
    fn coding_path(&self) -> &CodingPath;

    /// Every key present.
    fn keys(&self) -> Vec<String>;

    fn contains(&self, key: &str) -> bool;

    /// Returns `true` if the value at `key` is null.
    ///
    /// # Errors
    ///
    /// [`DecodeError::KeyNotFound`] if `key` is absent.
    fn decode_nil(&self, key: &str) -> Result<bool, DecodeError>;

    fn nested_keyed(&self, key: &str) -> Result<Box<dyn KeyedReader + '_>, DecodeError>;

    fn nested_seq(&self, key: &str) -> Result<Box<dyn SeqReader + '_>, DecodeError>;

    /// A decoder for the conventional `"super"` key.
    fn super_decoder(&self) -> Result<Box<dyn Decoder + '_>, DecodeError>;

    /// A decoder positioned at `key`.
    fn super_decoder_for_key(&self, key: &str) -> Result<Box<dyn Decoder + '_>, DecodeError>;
}

impl dyn KeyedReader + '_ {
    /// Decodes the field `key` as a `T`.
    ///
    /// Requesting an `Option<_>` behaves like [`decode_if_present`].
    ///
    /// [`decode_if_present`]: Self::decode_if_present
    #[inline]
    pub fn decode<T: Decode>(&self, key: &str) -> Result<T, DecodeError> {
        T::intercept_field(self, key)
    }

    /// Decodes the field `key`, treating an absent key or a null value as `None`.
    #[inline]
    pub fn decode_if_present<T: Decode>(&self, key: &str) -> Result<Option<T>, DecodeError> {
        dispatch::field_if_present(self, key)
    }
}

// -----------------------------------------------------------------------------
// SeqReader

/// Reads the elements of an array in order.
pub trait SeqReader {
    fn coding_path(&self) -> &CodingPath;

    /// Number of elements, if known up front.
    fn count(&self) -> Option<usize>;

    /// Index of the next element to be read.
    fn current_index(&self) -> usize;

    /// Readers that cannot know their count must override this.
    #[inline]
    fn is_at_end(&self) -> bool {
        self.count().is_some_and(|count| self.current_index() >= count)
    }

    /// Returns `true` and advances if the next element is null.
    ///
    /// # Errors
    ///
    /// [`DecodeError::ValueNotFound`] if the sequence is exhausted.
    fn decode_nil(&mut self) -> Result<bool, DecodeError>;

    fn nested_keyed(&mut self) -> Result<Box<dyn KeyedReader + '_>, DecodeError>;

    fn nested_seq(&mut self) -> Result<Box<dyn SeqReader + '_>, DecodeError>;

    /// A decoder positioned at the next element. Advances.
    fn super_decoder(&mut self) -> Result<Box<dyn Decoder + '_>, DecodeError>;
}

impl dyn SeqReader + '_ {
    /// Decodes the next element as a `T`.
    #[inline]
    pub fn decode<T: Decode>(&mut self) -> Result<T, DecodeError> {
        T::intercept_element(self)
    }

    /// Decodes the next element, treating a null as `None`.
    #[inline]
    pub fn decode_if_present<T: Decode>(&mut self) -> Result<Option<T>, DecodeError> {
        dispatch::element_if_present(self)
    }
}

// -----------------------------------------------------------------------------
// SingleValueReader

/// Reads one value.
///
/// The `read_*` methods are raw: they never consult a registry. Typed
/// requests go through [`decode`](#method.decode).
pub trait SingleValueReader {
    fn coding_path(&self) -> &CodingPath;

    fn decode_nil(&self) -> bool;

    fn read_bool(&self) -> Result<bool, DecodeError>;

    fn read_i64(&self) -> Result<i64, DecodeError>;

    fn read_u64(&self) -> Result<u64, DecodeError>;

    fn read_f64(&self) -> Result<f64, DecodeError>;

    fn read_string(&self) -> Result<String, DecodeError>;

    /// A decoder for this same position.
    fn super_decoder(&self) -> Result<Box<dyn Decoder + '_>, DecodeError>;
}

impl dyn SingleValueReader + '_ {
    /// Decodes the value as a `T`.
    #[inline]
    pub fn decode<T: Decode>(&self) -> Result<T, DecodeError> {
        let decoder = self.super_decoder()?;
        T::intercept(&*decoder)
    }
}
