use core::marker::PhantomData;

use crate::decode::Decode;
use crate::decoder::{Decoder, UserInfo};
use crate::error::DecodeError;

// -----------------------------------------------------------------------------
// DecodeSeed

/// Stateful decoding of one value from a root [`Decoder`].
///
/// The wrapped decoder parses its input, then hands its root decoder to the
/// seed. `PhantomData<T>` is the stateless seed that decodes a `T`.
pub trait DecodeSeed {
    type Value;

    fn decode(self, decoder: &dyn Decoder) -> Result<Self::Value, DecodeError>;
}

impl<T: Decode> DecodeSeed for PhantomData<T> {
    type Value = T;

    #[inline]
    fn decode(self, decoder: &dyn Decoder) -> Result<T, DecodeError> {
        T::intercept(decoder)
    }
}

// -----------------------------------------------------------------------------
// WrappableDecoder

/// A format decoder that turns bytes into a root [`Decoder`].
pub trait WrappableDecoder {
    /// The context bag visible to every decoder created by this one.
    fn user_info(&self) -> &UserInfo;

    fn user_info_mut(&mut self) -> &mut UserInfo;

    /// Parses `bytes` and runs `seed` on the root value.
    ///
    /// # Errors
    ///
    /// [`DecodeError::Malformed`] if `bytes` is not valid input, otherwise
    /// whatever `seed` returns.
    fn decode_seed<S: DecodeSeed>(&self, bytes: &[u8], seed: S) -> Result<S::Value, DecodeError>;

    /// Parses `bytes` and decodes a `T` from the root value.
    #[inline]
    fn decode<T: Decode>(&self, bytes: &[u8]) -> Result<T, DecodeError> {
        self.decode_seed(bytes, PhantomData::<T>)
    }
}
