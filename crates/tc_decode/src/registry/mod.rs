//! Conversions keyed by the type they produce.

mod conversion;
mod conversion_registry;

pub use conversion::Conversion;
pub use conversion_registry::ConversionRegistry;
