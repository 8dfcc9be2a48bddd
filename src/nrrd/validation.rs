//! Structural validation
//!
//! The basic layout of the array: type, encoding, dimension, sizes, sample
//! and byte counts, byte order and skips. Each step depends on the ones
//! before it, so they run strictly in order and stop at the first failure.

use log::{debug, warn};

use crate::nrrd::canonical::{DataType, Encoding, Endianness};
use crate::nrrd::constants::{fields, limits};
use crate::nrrd::errors::{NrrdError, NrrdResult};
use crate::nrrd::fields::FieldAccessor;

/// Basic array layout, produced before any file or space processing
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    pub data_type: DataType,
    pub encoding: Encoding,
    pub sizes: Vec<u64>,
    pub byte_width: u64,
    pub sample_count: u64,
    pub byte_count: u64,
    pub endianness: Endianness,
    pub line_skip: u64,
    pub byte_skip: u64,
}

/// Runs the structural checks in order
pub fn validate_structure(accessor: &FieldAccessor<'_>) -> NrrdResult<Structure> {
    let encoding: Encoding = accessor.required_string(fields::ENCODING)?.parse()?;
    let data_type: DataType = accessor.required_string(fields::TYPE)?.parse()?;
    debug!("Type: {}, encoding: {}", data_type, encoding);

    let dimension = read_dimension(accessor)?;
    let sizes = read_sizes(accessor, dimension)?;
    let byte_width = read_byte_width(accessor, data_type)?;
    let (sample_count, byte_count) = compute_counts(&sizes, byte_width)?;
    debug!("Samples: {}, bytes: {}", sample_count, byte_count);

    let endianness = read_endianness(accessor, data_type, encoding, byte_width)?;
    let line_skip = read_skip(accessor, fields::LINE_SKIP)?;
    let byte_skip = read_skip(accessor, fields::BYTE_SKIP)?;

    Ok(Structure {
        data_type,
        encoding,
        sizes,
        byte_width,
        sample_count,
        byte_count,
        endianness,
        line_skip,
        byte_skip,
    })
}

/// Validates a numeric range to ensure it's within bounds
///
/// # Arguments
/// * `value` - The value to validate
/// * `min` - The minimum valid value (inclusive)
/// * `max` - The maximum valid value (inclusive)
/// * `name` - Field name for error messages
pub fn validate_range(value: i64, min: i64, max: i64, name: &str) -> NrrdResult<()> {
    if value < min || value > max {
        return Err(NrrdError::DimensionOutOfRange {
            field: name.to_string(),
            value,
            min,
            max,
        });
    }

    Ok(())
}

fn read_dimension(accessor: &FieldAccessor<'_>) -> NrrdResult<usize> {
    let dimension = accessor.required_long(fields::DIMENSION)?;
    validate_range(dimension, 1, limits::DIM_MAX, fields::DIMENSION)?;
    Ok(dimension as usize)
}

/// Reads `dimension` sizes; every size must be positive
fn read_sizes(accessor: &FieldAccessor<'_>, dimension: usize) -> NrrdResult<Vec<u64>> {
    let sizes = accessor
        .longs(fields::SIZES, dimension, true)?
        .ok_or_else(|| NrrdError::MissingField { field: fields::SIZES.to_string() })?;

    sizes
        .iter()
        .map(|&size| {
            if size < 1 {
                Err(NrrdError::InvalidSampleCount(format!(
                    "size {} in {:?}; check sizes field",
                    size, sizes
                )))
            } else {
                Ok(size as u64)
            }
        })
        .collect()
}

/// Bytes per sample, from the type table or from `block size`
fn read_byte_width(accessor: &FieldAccessor<'_>, data_type: DataType) -> NrrdResult<u64> {
    let width = match data_type.byte_width() {
        Some(width) => width as i64,
        None => {
            let block_size = accessor.required_long(fields::BLOCK_SIZE)?;
            if block_size < 1 {
                return Err(NrrdError::InvalidBlockSize(block_size));
            }
            block_size
        }
    };

    if width < 1 {
        return Err(NrrdError::InvalidByteWidth(width));
    }

    Ok(width as u64)
}

/// Sample count as the product of sizes, and the matching byte count
pub fn compute_counts(sizes: &[u64], byte_width: u64) -> NrrdResult<(u64, u64)> {
    let overflow = || NrrdError::InvalidSampleCount(format!("product of sizes {:?} overflows", sizes));

    let sample_count = sizes
        .iter()
        .try_fold(1u64, |acc, &size| acc.checked_mul(size))
        .ok_or_else(overflow)?;

    if sample_count < 1 {
        return Err(NrrdError::InvalidSampleCount(format!(
            "{}; check sizes field",
            sample_count
        )));
    }

    let byte_count = sample_count.checked_mul(byte_width).ok_or_else(overflow)?;

    Ok((sample_count, byte_count))
}

/// Whether a byte order must be given for this layout
pub fn endianness_required(data_type: DataType, encoding: Encoding, byte_width: u64) -> bool {
    data_type != DataType::Block && encoding != Encoding::Txt && byte_width > 1
}

fn read_endianness(
    accessor: &FieldAccessor<'_>,
    data_type: DataType,
    encoding: Encoding,
    byte_width: u64,
) -> NrrdResult<Endianness> {
    if endianness_required(data_type, encoding, byte_width) {
        let tokens = accessor
            .strings(fields::ENDIAN, 1, true)?
            .ok_or_else(|| NrrdError::MissingField { field: fields::ENDIAN.to_string() })?;
        return tokens[0].parse();
    }

    // Not needed: record a valid value, ignore anything else
    match accessor.raw(fields::ENDIAN) {
        Some([token]) => match token.parse::<Endianness>() {
            Ok(endianness) => {
                debug!("Endian '{}' given but not needed for this data", endianness);
                Ok(endianness)
            }
            Err(_) => {
                warn!("Ignoring endian '{}' on data that does not need one", token);
                Ok(Endianness::Unspecified)
            }
        },
        Some(tokens) => {
            warn!("Ignoring endian {:?} on data that does not need one", tokens);
            Ok(Endianness::Unspecified)
        }
        None => Ok(Endianness::Unspecified),
    }
}

/// Reads an optional non-negative skip count, defaulting to 0
fn read_skip(accessor: &FieldAccessor<'_>, field: &str) -> NrrdResult<u64> {
    match accessor.optional_long(field)? {
        Some(value) if value < 0 => Err(NrrdError::InvalidSkip {
            field: field.to_string(),
            value,
        }),
        Some(value) => Ok(value as u64),
        None => Ok(0),
    }
}
