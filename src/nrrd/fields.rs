//! Typed access to raw header fields
//!
//! Every lookup checks arity and requiredness up front: a present field
//! must carry exactly the expected number of tokens, and a required field
//! must be present. Optional fields that are absent come back as `None`.

use crate::nrrd::constants::tokens;
use crate::nrrd::errors::{NrrdError, NrrdResult};
use crate::nrrd::raw_header::RawHeader;

/// Checked field lookups over an immutable [`RawHeader`]
#[derive(Debug, Clone, Copy)]
pub struct FieldAccessor<'a> {
    header: &'a RawHeader,
}

impl<'a> FieldAccessor<'a> {
    pub fn new(header: &'a RawHeader) -> Self {
        FieldAccessor { header }
    }

    /// Raw tokens of a field, without any checks
    pub fn raw(&self, key: &str) -> Option<&'a [String]> {
        self.header.field(key)
    }

    /// Returns exactly `n` tokens of `key`
    ///
    /// # Errors
    /// * `MissingField` if `required` and the field is absent
    /// * `ArityMismatch` if the field has other than `n` tokens
    pub fn strings(&self, key: &str, n: usize, required: bool) -> NrrdResult<Option<&'a [String]>> {
        let tokens = match self.header.field(key) {
            Some(tokens) => tokens,
            None if required => {
                return Err(NrrdError::MissingField { field: key.to_string() });
            }
            None => return Ok(None),
        };

        if tokens.len() != n {
            return Err(NrrdError::ArityMismatch {
                field: key.to_string(),
                expected: n,
                actual: tokens.len(),
            });
        }

        Ok(Some(tokens))
    }

    /// Returns exactly `n` tokens of `key` parsed as 32-bit integers
    pub fn ints(&self, key: &str, n: usize, required: bool) -> NrrdResult<Option<Vec<i32>>> {
        self.parsed(key, n, required, |t| t.parse::<i32>().ok())
    }

    /// Returns exactly `n` tokens of `key` parsed as 64-bit integers
    pub fn longs(&self, key: &str, n: usize, required: bool) -> NrrdResult<Option<Vec<i64>>> {
        self.parsed(key, n, required, |t| t.parse::<i64>().ok())
    }

    /// Returns exactly `n` tokens of `key` parsed as doubles; `nan` is NaN
    pub fn doubles(&self, key: &str, n: usize, required: bool) -> NrrdResult<Option<Vec<f64>>> {
        self.parsed(key, n, required, parse_double)
    }

    /// Required single integer
    pub fn required_long(&self, key: &str) -> NrrdResult<i64> {
        match self.longs(key, 1, true)? {
            Some(values) => Ok(values[0]),
            None => Err(NrrdError::MissingField { field: key.to_string() }),
        }
    }

    /// Optional single integer
    pub fn optional_long(&self, key: &str) -> NrrdResult<Option<i64>> {
        Ok(self.longs(key, 1, false)?.map(|values| values[0]))
    }

    /// Optional single double
    pub fn optional_double(&self, key: &str) -> NrrdResult<Option<f64>> {
        Ok(self.doubles(key, 1, false)?.map(|values| values[0]))
    }

    /// Optional single token
    pub fn optional_string(&self, key: &str) -> NrrdResult<Option<&'a str>> {
        Ok(self.strings(key, 1, false)?.map(|values| values[0].as_str()))
    }

    /// Required single token
    pub fn required_string(&self, key: &str) -> NrrdResult<&'a str> {
        match self.strings(key, 1, true)? {
            Some(values) => Ok(values[0].as_str()),
            None => Err(NrrdError::MissingField { field: key.to_string() }),
        }
    }

    fn parsed<T, F>(&self, key: &str, n: usize, required: bool, convert: F) -> NrrdResult<Option<Vec<T>>>
    where
        F: Fn(&str) -> Option<T>,
    {
        let tokens = match self.strings(key, n, required)? {
            Some(tokens) => tokens,
            None => return Ok(None),
        };

        tokens
            .iter()
            .map(|token| {
                convert(token).ok_or_else(|| NrrdError::NumericParse {
                    field: key.to_string(),
                    token: token.clone(),
                })
            })
            .collect::<NrrdResult<Vec<T>>>()
            .map(Some)
    }
}

/// Parses a decimal number, accepting the literal `nan` and nothing else
/// that is not a plain finite number (no `inf`, `NaN`, `infinity`, and no
/// literals such as `1e400` that overflow to infinity)
pub fn parse_double(token: &str) -> Option<f64> {
    if token == tokens::NAN {
        return Some(f64::NAN);
    }

    if token.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return None;
    }

    token.parse::<f64>().ok().filter(|value| value.is_finite())
}
