use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use serde_json::{Map, Number, Value};

use crate::decoder::{Decoder, KeyedReader, SeqReader, SingleValueReader, UserInfo};
use crate::error::DecodeError;
use crate::path::CodingPath;

use super::{JsonValueDecoder, kind};

/// The error for reading `found` where `expected` was required.
fn unexpected(path: &CodingPath, expected: &'static str, found: &Value) -> DecodeError {
    match found {
        Value::Null => DecodeError::value_not_found(path, expected),
        other => DecodeError::type_mismatch(path, expected, kind(other)),
    }
}

// -----------------------------------------------------------------------------
// JsonKeyedReader

/// Reads the fields of a JSON object.
pub struct JsonKeyedReader<'v> {
    map: &'v Map<String, Value>,
    path: CodingPath,
    user_info: &'v UserInfo,
}

impl<'v> JsonKeyedReader<'v> {
    pub(crate) fn new(
        value: &'v Value,
        path: CodingPath,
        user_info: &'v UserInfo,
    ) -> Result<Self, DecodeError> {
        match value {
            Value::Object(map) => Ok(Self {
                map,
                path,
                user_info,
            }),
            other => Err(unexpected(&path, "object", other)),
        }
    }

    fn entry(&self, key: &str) -> Result<&'v Value, DecodeError> {
        self.map
            .get(key)
            .ok_or_else(|| DecodeError::key_not_found(&self.path, key))
    }
}

impl KeyedReader for JsonKeyedReader<'_> {
    #[inline]
    fn coding_path(&self) -> &CodingPath {
        &self.path
    }

    fn keys(&self) -> Vec<String> {
        self.map.keys().cloned().collect()
    }

    #[inline]
    fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    fn decode_nil(&self, key: &str) -> Result<bool, DecodeError> {
        self.entry(key).map(Value::is_null)
    }

    fn nested_keyed(&self, key: &str) -> Result<Box<dyn KeyedReader + '_>, DecodeError> {
        let value = self.entry(key)?;
        let reader = JsonKeyedReader::new(value, self.path.field(key), self.user_info)?;
        Ok(Box::new(reader))
    }

    fn nested_seq(&self, key: &str) -> Result<Box<dyn SeqReader + '_>, DecodeError> {
        let value = self.entry(key)?;
        let reader = JsonSeqReader::new(value, self.path.field(key), self.user_info)?;
        Ok(Box::new(reader))
    }

    fn super_decoder(&self) -> Result<Box<dyn Decoder + '_>, DecodeError> {
        let value = self.entry("super")?;
        let decoder = JsonValueDecoder::at(value, self.path.super_key(), self.user_info);
        Ok(Box::new(decoder))
    }

    fn super_decoder_for_key(&self, key: &str) -> Result<Box<dyn Decoder + '_>, DecodeError> {
        let value = self.entry(key)?;
        let decoder = JsonValueDecoder::at(value, self.path.field(key), self.user_info);
        Ok(Box::new(decoder))
    }
}

// -----------------------------------------------------------------------------
// JsonSeqReader

/// Reads the elements of a JSON array.
pub struct JsonSeqReader<'v> {
    items: &'v [Value],
    index: usize,
    path: CodingPath,
    user_info: &'v UserInfo,
}

impl<'v> JsonSeqReader<'v> {
    pub(crate) fn new(
        value: &'v Value,
        path: CodingPath,
        user_info: &'v UserInfo,
    ) -> Result<Self, DecodeError> {
        match value {
            Value::Array(items) => Ok(Self {
                items,
                index: 0,
                path,
                user_info,
            }),
            other => Err(unexpected(&path, "array", other)),
        }
    }

    /// The next element and its path, without advancing.
    fn peek(&self, expected: &'static str) -> Result<(&'v Value, CodingPath), DecodeError> {
        let path = self.path.index(self.index);
        match self.items.get(self.index) {
            Some(value) => Ok((value, path)),
            None => Err(DecodeError::value_not_found(&path, expected)),
        }
    }
}

impl SeqReader for JsonSeqReader<'_> {
    #[inline]
    fn coding_path(&self) -> &CodingPath {
        &self.path
    }

    #[inline]
    fn count(&self) -> Option<usize> {
        Some(self.items.len())
    }

    #[inline]
    fn current_index(&self) -> usize {
        self.index
    }

    fn decode_nil(&mut self) -> Result<bool, DecodeError> {
        let (value, _) = self.peek("value")?;
        let is_nil = value.is_null();
        if is_nil {
            self.index += 1;
        }
        Ok(is_nil)
    }

    fn nested_keyed(&mut self) -> Result<Box<dyn KeyedReader + '_>, DecodeError> {
        let (value, path) = self.peek("object")?;
        let reader = JsonKeyedReader::new(value, path, self.user_info)?;
        self.index += 1;
        Ok(Box::new(reader))
    }

    fn nested_seq(&mut self) -> Result<Box<dyn SeqReader + '_>, DecodeError> {
        let (value, path) = self.peek("array")?;
        let reader = JsonSeqReader::new(value, path, self.user_info)?;
        self.index += 1;
        Ok(Box::new(reader))
    }

    fn super_decoder(&mut self) -> Result<Box<dyn Decoder + '_>, DecodeError> {
        let (value, path) = self.peek("value")?;
        self.index += 1;
        Ok(Box::new(JsonValueDecoder::at(value, path, self.user_info)))
    }
}

// -----------------------------------------------------------------------------
// JsonSingleValueReader

/// Reads one JSON value.
pub struct JsonSingleValueReader<'v> {
    value: &'v Value,
    path: CodingPath,
    user_info: &'v UserInfo,
}

impl<'v> JsonSingleValueReader<'v> {
    #[inline]
    pub(crate) fn new(value: &'v Value, path: CodingPath, user_info: &'v UserInfo) -> Self {
        Self {
            value,
            path,
            user_info,
        }
    }

    fn number(&self, expected: &'static str) -> Result<&'v Number, DecodeError> {
        match self.value {
            Value::Number(number) => Ok(number),
            other => Err(unexpected(&self.path, expected, other)),
        }
    }

    fn out_of_range(&self, number: &Number, target: &str) -> DecodeError {
        DecodeError::data_corrupted(&self.path, format!("number {number} does not fit in {target}"))
    }
}

const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

fn exact_i64(value: f64) -> Option<i64> {
    let truncated = value as i64;
    ((-TWO_POW_63..TWO_POW_63).contains(&value) && truncated as f64 == value).then_some(truncated)
}

fn exact_u64(value: f64) -> Option<u64> {
    let truncated = value as u64;
    ((0.0..TWO_POW_64).contains(&value) && truncated as f64 == value).then_some(truncated)
}

impl SingleValueReader for JsonSingleValueReader<'_> {
    #[inline]
    fn coding_path(&self) -> &CodingPath {
        &self.path
    }

    #[inline]
    fn decode_nil(&self) -> bool {
        self.value.is_null()
    }

    fn read_bool(&self) -> Result<bool, DecodeError> {
        match self.value {
            Value::Bool(value) => Ok(*value),
            other => Err(unexpected(&self.path, "bool", other)),
        }
    }

    fn read_i64(&self) -> Result<i64, DecodeError> {
        let number = self.number("i64")?;
        if let Some(value) = number.as_i64() {
            return Ok(value);
        }
        number
            .as_f64()
            .filter(|_| number.is_f64())
            .and_then(exact_i64)
            .ok_or_else(|| self.out_of_range(number, "i64"))
    }

    fn read_u64(&self) -> Result<u64, DecodeError> {
        let number = self.number("u64")?;
        if let Some(value) = number.as_u64() {
            return Ok(value);
        }
        number
            .as_f64()
            .filter(|_| number.is_f64())
            .and_then(exact_u64)
            .ok_or_else(|| self.out_of_range(number, "u64"))
    }

    fn read_f64(&self) -> Result<f64, DecodeError> {
        let number = self.number("f64")?;
        number
            .as_f64()
            .ok_or_else(|| self.out_of_range(number, "f64"))
    }

    fn read_string(&self) -> Result<String, DecodeError> {
        match self.value {
            Value::String(value) => Ok(value.clone()),
            other => Err(unexpected(&self.path, "string", other)),
        }
    }

    fn super_decoder(&self) -> Result<Box<dyn Decoder + '_>, DecodeError> {
        let decoder = JsonValueDecoder::at(self.value, self.path.clone(), self.user_info);
        Ok(Box::new(decoder))
    }
}
