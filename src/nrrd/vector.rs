//! Vector grammar
//!
//! Vectors appear in a header as single tokens of the form `(v1,v2,...,vk)`
//! with no whitespace. The token `none` stands for an explicitly absent
//! vector, which is different from a malformed one.

use crate::nrrd::constants::tokens;
use crate::nrrd::errors::{NrrdError, NrrdResult};
use crate::nrrd::fields::parse_double;

/// Parses a vector token of exactly `len` components
///
/// Returns `Ok(None)` for `none`. Components may be `nan`.
///
/// # Errors
/// * `VectorSyntax` if the parentheses are missing or a component is not a number
/// * `VectorLengthMismatch` if the component count differs from `len`
pub fn parse_vector(field: &str, token: &str, len: usize) -> NrrdResult<Option<Vec<f64>>> {
    if token == tokens::NONE {
        return Ok(None);
    }

    let inner = token
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| syntax_error(field, token))?;

    let components: Vec<&str> = inner.split(',').collect();
    if components.len() != len {
        return Err(NrrdError::VectorLengthMismatch {
            field: field.to_string(),
            expected: len,
            actual: components.len(),
        });
    }

    components
        .into_iter()
        .map(|component| parse_double(component).ok_or_else(|| syntax_error(field, token)))
        .collect::<NrrdResult<Vec<f64>>>()
        .map(Some)
}

/// Parses a vector token that must not be `none`
pub fn parse_required_vector(field: &str, token: &str, len: usize) -> NrrdResult<Vec<f64>> {
    parse_vector(field, token, len)?.ok_or_else(|| syntax_error(field, token))
}

/// Formats a vector as `(v1,v2,...)`, writing NaN as `nan`
pub fn format_vector(values: &[f64]) -> String {
    let components: Vec<String> = values
        .iter()
        .map(|v| if v.is_nan() { tokens::NAN.to_string() } else { v.to_string() })
        .collect();
    format!("({})", components.join(","))
}

fn syntax_error(field: &str, token: &str) -> NrrdError {
    NrrdError::VectorSyntax {
        field: field.to_string(),
        token: token.to_string(),
    }
}
