//! Decoding sessions: the wrapped-decoder contract and the facade over it.

mod conversion_decoder;
mod interceptor;
mod seed;

pub use conversion_decoder::ConversionDecoder;
pub use interceptor::Interceptor;
pub use seed::{DecodeSeed, WrappableDecoder};
