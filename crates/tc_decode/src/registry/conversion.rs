use alloc::boxed::Box;
use core::any::type_name;
use core::fmt;

use crate::decoder::Decoder;
use crate::error::DecodeError;

/// A caller-supplied decoding function for `T`.
///
/// The decoder it receives sits at the position where a `T` was requested
/// and carries the same registry, so the function can hand sub-pieces back
/// to intercepted decoding. It must not request a `T` at that same position,
/// which would call itself again.
pub struct Conversion<T> {
    func: Box<dyn Fn(&dyn Decoder) -> Result<T, DecodeError>>,
}

impl<T: 'static> Conversion<T> {
    /// Wraps `func`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tc_decode::{Conversion, Decoder};
    ///
    /// let conversion = Conversion::<bool>::new(|decoder: &dyn Decoder| {
    ///     Ok(decoder.decode::<String>()? == "yes")
    /// });
    /// # let _ = conversion;
    /// ```
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&dyn Decoder) -> Result<T, DecodeError> + 'static,
    {
        Self {
            func: Box::new(func),
        }
    }

    /// Runs the conversion at `decoder`'s position.
    #[inline]
    pub fn convert(&self, decoder: &dyn Decoder) -> Result<T, DecodeError> {
        (self.func)(decoder)
    }
}

impl<T> fmt::Debug for Conversion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Conversion<{}>", type_name::<T>())
    }
}
