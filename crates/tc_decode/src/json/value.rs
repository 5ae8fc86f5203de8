use alloc::boxed::Box;
use core::fmt;

use serde_json::Value;

use crate::decoder::{Decoder, KeyedReader, SeqReader, SingleValueReader, UserInfo};
use crate::error::DecodeError;
use crate::path::CodingPath;

use super::{JsonKeyedReader, JsonSeqReader, JsonSingleValueReader};

/// A [`Decoder`] over a borrowed [`Value`].
pub struct JsonValueDecoder<'v> {
    value: &'v Value,
    path: CodingPath,
    user_info: &'v UserInfo,
}

impl<'v> JsonValueDecoder<'v> {
    /// A decoder for `value` as the root.
    #[inline]
    pub fn new(value: &'v Value, user_info: &'v UserInfo) -> Self {
        Self::at(value, CodingPath::root(), user_info)
    }

    #[inline]
    pub(crate) fn at(value: &'v Value, path: CodingPath, user_info: &'v UserInfo) -> Self {
        Self {
            value,
            path,
            user_info,
        }
    }

    #[inline]
    pub fn value(&self) -> &'v Value {
        self.value
    }
}

impl Decoder for JsonValueDecoder<'_> {
    #[inline]
    fn coding_path(&self) -> &CodingPath {
        &self.path
    }

    #[inline]
    fn user_info(&self) -> &UserInfo {
        self.user_info
    }

    fn keyed_reader(&self) -> Result<Box<dyn KeyedReader + '_>, DecodeError> {
        let reader = JsonKeyedReader::new(self.value, self.path.clone(), self.user_info)?;
        Ok(Box::new(reader))
    }

    fn seq_reader(&self) -> Result<Box<dyn SeqReader + '_>, DecodeError> {
        let reader = JsonSeqReader::new(self.value, self.path.clone(), self.user_info)?;
        Ok(Box::new(reader))
    }

    fn single_value_reader(&self) -> Result<Box<dyn SingleValueReader + '_>, DecodeError> {
        let reader = JsonSingleValueReader::new(self.value, self.path.clone(), self.user_info);
        Ok(Box::new(reader))
    }
}

impl fmt::Debug for JsonValueDecoder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonValueDecoder")
            .field("path", &self.path)
            .field("value", self.value)
            .finish_non_exhaustive()
    }
}
