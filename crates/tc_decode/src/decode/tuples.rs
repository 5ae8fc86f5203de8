use crate::decode::Decode;
use crate::decoder::Decoder;
use crate::error::DecodeError;

macro_rules! impl_tuple {
    ($($name:ident),+) => {
        impl<$($name: Decode),+> Decode for ($($name,)+) {
            fn decode(decoder: &dyn Decoder) -> Result<Self, DecodeError> {
                let mut seq = decoder.seq_reader()?;
                Ok(($(seq.decode::<$name>()?,)+))
            }
        }
    };
}

impl_tuple!(A);
impl_tuple!(A, B);
impl_tuple!(A, B, C);
impl_tuple!(A, B, C, D);
