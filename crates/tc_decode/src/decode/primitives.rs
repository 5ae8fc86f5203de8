use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;

use crate::decode::Decode;
use crate::decoder::Decoder;
use crate::error::DecodeError;

// -----------------------------------------------------------------------------
// Raw scalars

impl Decode for bool {
    #[inline]
    fn decode(decoder: &dyn Decoder) -> Result<Self, DecodeError> {
        decoder.single_value_reader()?.read_bool()
    }
}

impl Decode for i64 {
    #[inline]
    fn decode(decoder: &dyn Decoder) -> Result<Self, DecodeError> {
        decoder.single_value_reader()?.read_i64()
    }
}

impl Decode for u64 {
    #[inline]
    fn decode(decoder: &dyn Decoder) -> Result<Self, DecodeError> {
        decoder.single_value_reader()?.read_u64()
    }
}

impl Decode for f64 {
    #[inline]
    fn decode(decoder: &dyn Decoder) -> Result<Self, DecodeError> {
        decoder.single_value_reader()?.read_f64()
    }
}

impl Decode for String {
    #[inline]
    fn decode(decoder: &dyn Decoder) -> Result<Self, DecodeError> {
        decoder.single_value_reader()?.read_string()
    }
}

// -----------------------------------------------------------------------------
// Narrowed scalars

macro_rules! impl_narrow_int {
    ($read:ident => $($ty:ty),* $(,)?) => {$(
        impl Decode for $ty {
            fn decode(decoder: &dyn Decoder) -> Result<Self, DecodeError> {
                let reader = decoder.single_value_reader()?;
                let value = reader.$read()?;
                <$ty>::try_from(value).map_err(|_| {
                    DecodeError::data_corrupted(
                        reader.coding_path(),
                        format!("number {value} does not fit in {}", stringify!($ty)),
                    )
                })
            }
        }
    )*};
}

impl_narrow_int!(read_i64 => i8, i16, i32, isize);
impl_narrow_int!(read_u64 => u8, u16, u32, usize);

impl Decode for f32 {
    fn decode(decoder: &dyn Decoder) -> Result<Self, DecodeError> {
        let reader = decoder.single_value_reader()?;
        let value = reader.read_f64()?;
        let narrowed = value as f32;
        if value.is_finite() && !narrowed.is_finite() {
            return Err(DecodeError::data_corrupted(
                reader.coding_path(),
                format!("number {value} does not fit in f32"),
            ));
        }
        Ok(narrowed)
    }
}

impl Decode for char {
    fn decode(decoder: &dyn Decoder) -> Result<Self, DecodeError> {
        let reader = decoder.single_value_reader()?;
        let text = reader.read_string()?;
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(DecodeError::data_corrupted(
                reader.coding_path(),
                format!("expected a single character, found {text:?}"),
            )),
        }
    }
}

// -----------------------------------------------------------------------------
// Others

impl Decode for () {
    #[inline]
    fn decode(_decoder: &dyn Decoder) -> Result<Self, DecodeError> {
        Ok(())
    }
}

impl<T: Decode> Decode for Box<T> {
    #[inline]
    fn decode(decoder: &dyn Decoder) -> Result<Self, DecodeError> {
        T::intercept(decoder).map(Box::new)
    }
}
