//! Space and orientation processing
//!
//! Resolves the physical frame an array lives in: a named space or a bare
//! space dimension, the per-axis direction vectors, the origin, and the
//! measurement frame.

use std::fmt;

use log::{debug, warn};

use crate::nrrd::canonical::NamedSpace;
use crate::nrrd::constants::{fields, limits};
use crate::nrrd::errors::{NrrdError, NrrdResult};
use crate::nrrd::fields::FieldAccessor;
use crate::nrrd::vector::{format_vector, parse_required_vector, parse_vector};

/// Coordinate frame of the array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Space {
    /// Named frame, absent when only `space dimension` was given
    pub name: Option<NamedSpace>,
    /// Number of coordinates in the frame
    pub dimension: usize,
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => write!(f, "{} ({}D)", name, self.dimension),
            None => write!(f, "unnamed ({}D)", self.dimension),
        }
    }
}

/// Square change-of-basis matrix, stored column by column
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementFrame {
    columns: Vec<Vec<f64>>,
}

impl MeasurementFrame {
    /// Builds a frame from its column vectors
    pub fn from_columns(columns: Vec<Vec<f64>>) -> Self {
        MeasurementFrame { columns }
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, index: usize) -> Option<&[f64]> {
        self.columns.get(index).map(Vec::as_slice)
    }

    /// Element at `row`, `col`
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.columns.get(col).and_then(|column| column.get(row)).copied()
    }

    pub fn columns(&self) -> &[Vec<f64>] {
        &self.columns
    }
}

impl fmt::Display for MeasurementFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns: Vec<String> = self.columns.iter().map(|c| format_vector(c)).collect();
        f.write_str(&columns.join(" "))
    }
}

/// Everything the space fields of a header resolve to
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpaceInfo {
    pub space: Option<Space>,
    /// One entry per axis; `None` where the axis has no direction
    pub directions: Option<Vec<Option<Vec<f64>>>>,
    pub units: Option<Vec<String>>,
    pub origin: Option<Vec<f64>>,
    pub measurement_frame: Option<MeasurementFrame>,
}

/// Reads the space fields of a header whose array has `dimension` axes
pub fn process_space(accessor: &FieldAccessor<'_>, dimension: usize) -> NrrdResult<SpaceInfo> {
    let space = match resolve_space(accessor)? {
        Some(space) => space,
        None => {
            if accessor.raw(fields::SPACE_DIRECTIONS).is_some() {
                warn!("Ignoring 'space directions' on a header without space information");
            }
            return Ok(SpaceInfo::default());
        }
    };
    debug!("Space: {}", space);

    let space_dim = space.dimension;

    let direction_tokens = accessor
        .strings(fields::SPACE_DIRECTIONS, dimension, true)?
        .unwrap_or_default();
    let directions = direction_tokens
        .iter()
        .map(|token| parse_vector(fields::SPACE_DIRECTIONS, token, space_dim))
        .collect::<NrrdResult<Vec<_>>>()?;

    let units = accessor
        .strings(fields::SPACE_UNITS, space_dim, false)?
        .map(<[String]>::to_vec);

    let origin = match accessor.optional_string(fields::SPACE_ORIGIN)? {
        Some(token) => parse_vector(fields::SPACE_ORIGIN, token, space_dim)?,
        None => None,
    };

    let measurement_frame = read_measurement_frame(accessor, dimension, space_dim)?;

    Ok(SpaceInfo {
        space: Some(space),
        directions: Some(directions),
        units,
        origin,
        measurement_frame,
    })
}

/// Works out the frame from `space` and `space dimension`
///
/// Returns `None` when neither is present or the declared dimension is 0.
fn resolve_space(accessor: &FieldAccessor<'_>) -> NrrdResult<Option<Space>> {
    let named = accessor
        .optional_string(fields::SPACE)?
        .map(str::parse::<NamedSpace>)
        .transpose()?;

    let declared = match accessor.optional_long(fields::SPACE_DIMENSION)? {
        Some(value) if !(0..=limits::SPACE_DIM_MAX).contains(&value) => {
            return Err(NrrdError::DimensionOutOfRange {
                field: fields::SPACE_DIMENSION.to_string(),
                value,
                min: 0,
                max: limits::SPACE_DIM_MAX,
            });
        }
        Some(value) => Some(value as usize),
        None => None,
    };

    match (named, declared) {
        (Some(name), Some(declared)) if declared != name.dimension() => {
            Err(NrrdError::SpaceDimensionMismatch {
                space: name.name().to_string(),
                declared,
            })
        }
        (Some(name), _) => Ok(Some(Space {
            name: Some(name),
            dimension: name.dimension(),
        })),
        (None, Some(dimension)) if dimension > 0 => Ok(Some(Space { name: None, dimension })),
        (None, _) => Ok(None),
    }
}

/// Reads the measurement frame
///
/// The field is read with one token per array axis, and its first
/// `space_dim` vectors become the columns of the matrix.
fn read_measurement_frame(
    accessor: &FieldAccessor<'_>,
    dimension: usize,
    space_dim: usize,
) -> NrrdResult<Option<MeasurementFrame>> {
    let tokens = match accessor.strings(fields::MEASUREMENT_FRAME, dimension, false)? {
        Some(tokens) => tokens,
        None => return Ok(None),
    };

    if tokens.len() < space_dim {
        return Err(NrrdError::ArityMismatch {
            field: fields::MEASUREMENT_FRAME.to_string(),
            expected: space_dim,
            actual: tokens.len(),
        });
    }
    if tokens.len() > space_dim {
        warn!(
            "Measurement frame has {} vectors; using the first {}",
            tokens.len(),
            space_dim
        );
    }

    let columns = tokens[..space_dim]
        .iter()
        .map(|token| parse_required_vector(fields::MEASUREMENT_FRAME, token, space_dim))
        .collect::<NrrdResult<Vec<_>>>()?;

    Ok(Some(MeasurementFrame::from_columns(columns)))
}
