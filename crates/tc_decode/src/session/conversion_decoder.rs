use core::fmt;

use crate::decode::Decode;
use crate::decoder::{Decoder, UserInfo};
use crate::error::DecodeError;
use crate::registry::{Conversion, ConversionRegistry};

use super::{Interceptor, WrappableDecoder};

/// A decoder whose typed requests can be overridden per type.
///
/// Owns a [`WrappableDecoder`] and a [`ConversionRegistry`]. Every value
/// decoded through [`decode`](Self::decode) is checked against the registry:
/// the top-level value, object fields, array elements, nested values and the
/// values requested from inside a conversion.
///
/// Registration takes `&mut self` and decoding takes `&self`, so the set of
/// conversions is fixed for the length of a decode call. Conversions persist
/// across calls.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "json")] {
/// use tc_decode::{ConversionDecoder, DecodeError};
/// use tc_decode::json::JsonDecoder;
///
/// let mut decoder = ConversionDecoder::new(JsonDecoder::new());
/// decoder.register::<u32, _>(|decoder| {
///     let text = decoder.decode::<String>()?;
///     u32::from_str_radix(&text, 16).map_err(DecodeError::custom)
/// });
///
/// let values: Vec<u32> = decoder.decode_str(r#"["ff", "10"]"#).unwrap();
/// assert_eq!(values, [255, 16]);
///
/// decoder.unregister::<u32>();
/// let values: Vec<u32> = decoder.decode_str("[1, 2]").unwrap();
/// assert_eq!(values, [1, 2]);
/// # }
/// ```
pub struct ConversionDecoder<D> {
    wrapped: D,
    conversions: ConversionRegistry,
}

impl<D: WrappableDecoder> ConversionDecoder<D> {
    /// Wraps `decoder` with an empty registry.
    #[inline]
    pub fn new(decoder: D) -> Self {
        Self {
            wrapped: decoder,
            conversions: ConversionRegistry::new(),
        }
    }

    /// Uses `conversion` wherever a `T` is decoded, replacing any previous one.
    pub fn register<T, F>(&mut self, conversion: F) -> &mut Self
    where
        T: 'static,
        F: Fn(&dyn Decoder) -> Result<T, DecodeError> + 'static,
    {
        self.conversions.insert(Conversion::new(conversion));
        self
    }

    /// Uses `conversion` wherever an `Option<T>` is decoded from a present,
    /// non-null value.
    ///
    /// Absent keys and nulls still yield `None` without calling it.
    pub fn register_optional<T, F>(&mut self, conversion: F) -> &mut Self
    where
        T: 'static,
        F: Fn(&dyn Decoder) -> Result<Option<T>, DecodeError> + 'static,
    {
        self.conversions.insert(Conversion::new(conversion));
        self
    }

    /// Stores or clears the conversion for `T`.
    pub fn set_conversion<T: 'static>(&mut self, conversion: Option<Conversion<T>>) -> &mut Self {
        self.conversions.set(conversion);
        self
    }

    /// Restores default decoding of `T`. Returns `true` if a conversion was removed.
    #[inline]
    pub fn unregister<T: 'static>(&mut self) -> bool {
        self.conversions.remove::<T>()
    }

    #[inline]
    pub fn conversions(&self) -> &ConversionRegistry {
        &self.conversions
    }

    #[inline]
    pub fn conversions_mut(&mut self) -> &mut ConversionRegistry {
        &mut self.conversions
    }

    #[inline]
    pub fn wrapped(&self) -> &D {
        &self.wrapped
    }

    #[inline]
    pub fn wrapped_mut(&mut self) -> &mut D {
        &mut self.wrapped
    }

    /// The wrapped decoder's context bag.
    #[inline]
    pub fn user_info_mut(&mut self) -> &mut UserInfo {
        self.wrapped.user_info_mut()
    }

    #[inline]
    pub fn into_inner(self) -> D {
        self.wrapped
    }

    /// Decodes a `T` from `bytes`, applying the registered conversions.
    ///
    /// # Errors
    ///
    /// Parse failures of the wrapped decoder, and any error raised by a
    /// conversion or a default decode, unchanged.
    pub fn decode<T: Decode>(&self, bytes: &[u8]) -> Result<T, DecodeError> {
        self.wrapped
            .decode_seed(bytes, Interceptor::<T>::new(&self.conversions))
    }

    #[inline]
    pub fn decode_str<T: Decode>(&self, text: &str) -> Result<T, DecodeError> {
        self.decode(text.as_bytes())
    }
}

impl<D: WrappableDecoder + Default> Default for ConversionDecoder<D> {
    #[inline]
    fn default() -> Self {
        Self::new(D::default())
    }
}

impl<D: fmt::Debug> fmt::Debug for ConversionDecoder<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionDecoder")
            .field("wrapped", &self.wrapped)
            .field("conversions", &self.conversions)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests
