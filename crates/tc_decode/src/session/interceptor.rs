use core::fmt;
use core::marker::PhantomData;

use crate::decode::Decode;
use crate::decoder::Decoder;
use crate::error::DecodeError;
use crate::proxy::ProxyDecoder;
use crate::registry::ConversionRegistry;

use super::DecodeSeed;

/// A seed that decodes a `T` through the proxy layer.
///
/// It wraps the root decoder it receives in a [`ProxyDecoder`] carrying
/// `conversions`, so the top-level value is intercepted like any other.
pub struct Interceptor<'r, T> {
    conversions: &'r ConversionRegistry,
    marker: PhantomData<fn() -> T>,
}

impl<'r, T> Interceptor<'r, T> {
    #[inline]
    pub const fn new(conversions: &'r ConversionRegistry) -> Self {
        Self {
            conversions,
            marker: PhantomData,
        }
    }
}

impl<T: Decode> DecodeSeed for Interceptor<'_, T> {
    type Value = T;

    fn decode(self, decoder: &dyn Decoder) -> Result<T, DecodeError> {
        let root = ProxyDecoder::new(decoder, self.conversions);
        T::intercept(&root)
    }
}

impl<T> fmt::Debug for Interceptor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interceptor")
            .field("type", &core::any::type_name::<T>())
            .field("conversions", self.conversions)
            .finish()
    }
}
