//! NRRD header parser
//!
//! Turns a tokenized [`RawHeader`] into a validated [`ParsedHeader`]. The
//! work happens in a fixed order, because later steps consume what earlier
//! ones produce:
//! 1. Structure: type, encoding, dimension, sizes, counts, byte order, skips
//! 2. Data files, which need the sizes and counts
//! 3. Space and orientation
//! 4. Per-axis assembly, reconciling all of the above
//!
//! The first failure ends parsing; nothing partially built escapes.

use log::{debug, info};

use crate::nrrd::axis::AxisInfo;
use crate::nrrd::canonical::AxisCenter;
use crate::nrrd::constants::fields;
use crate::nrrd::data_files::{resolve_data_files, ArrayLayout, FileLocator, FsLocator};
use crate::nrrd::errors::NrrdResult;
use crate::nrrd::fields::FieldAccessor;
use crate::nrrd::raw_header::RawHeader;
use crate::nrrd::space::{process_space, SpaceInfo};
use crate::nrrd::types::ParsedHeader;
use crate::nrrd::validation::validate_structure;

/// Parser for NRRD headers
pub struct NrrdParser<'a> {
    /// Existence check for detached data files
    locator: &'a dyn FileLocator,
}

impl Default for NrrdParser<'static> {
    fn default() -> Self {
        NrrdParser::new()
    }
}

impl NrrdParser<'static> {
    /// Creates a parser that checks data files on the local filesystem
    pub fn new() -> Self {
        NrrdParser { locator: &FsLocator }
    }
}

impl<'a> NrrdParser<'a> {
    /// Creates a parser with a custom data file locator
    pub fn with_locator(locator: &'a dyn FileLocator) -> Self {
        NrrdParser { locator }
    }

    /// Parses and validates a header
    ///
    /// # Arguments
    /// * `header` - Tokenized header fields
    ///
    /// # Returns
    /// The validated header, or the first validation failure
    pub fn parse(&self, header: &RawHeader) -> NrrdResult<ParsedHeader> {
        debug!("Parsing header: {}", header.filename());
        let accessor = FieldAccessor::new(header);

        let structure = validate_structure(&accessor)?;
        let dimension = structure.sizes.len();

        let layout = ArrayLayout {
            sizes: &structure.sizes,
            sample_count: structure.sample_count,
            byte_count: structure.byte_count,
        };
        let resolved = resolve_data_files(header, &layout, self.locator)?;

        let SpaceInfo {
            space,
            directions,
            units: space_units,
            origin: space_origin,
            measurement_frame,
        } = process_space(&accessor, dimension)?;

        let axes = assemble_axes(&accessor, &structure.sizes, directions.as_deref())?;

        info!(
            "Parsed header {}: {} {:?} ({} data files)",
            header.filename(),
            structure.data_type,
            structure.sizes,
            resolved.files.len()
        );

        Ok(ParsedHeader {
            data_type: structure.data_type,
            encoding: structure.encoding,
            dimension,
            sizes: structure.sizes,
            sample_count: structure.sample_count,
            byte_count: structure.byte_count,
            byte_width: structure.byte_width,
            endianness: structure.endianness,
            line_skip: structure.line_skip,
            byte_skip: structure.byte_skip,
            directory: header.directory().to_path_buf(),
            filename: header.filename().to_string(),
            detached: header.is_detached(),
            data_files: resolved.files,
            data_file_subdim: resolved.subdim,
            slab_byte_count: resolved.slab_byte_count,
            content: accessor.raw(fields::CONTENT).map(|tokens| tokens.join(" ")),
            sample_units: accessor.raw(fields::SAMPLE_UNITS).map(|tokens| tokens.join(" ")),
            min: accessor.optional_double(fields::MIN)?,
            max: accessor.optional_double(fields::MAX)?,
            old_min: accessor.optional_double(fields::OLD_MIN)?,
            old_max: accessor.optional_double(fields::OLD_MAX)?,
            space,
            space_units,
            space_origin,
            measurement_frame,
            axes,
        })
    }
}

/// Builds one [`AxisInfo`] per axis
///
/// Space directions are applied first, then spacings, mins, maxs and units,
/// so a conflict is reported against the metric field that collides.
fn assemble_axes(
    accessor: &FieldAccessor<'_>,
    sizes: &[u64],
    directions: Option<&[Option<Vec<f64>>]>,
) -> NrrdResult<Vec<AxisInfo>> {
    let dimension = sizes.len();

    let spacings = accessor.doubles(fields::SPACINGS, dimension, false)?;
    let thicknesses = accessor.doubles(fields::THICKNESSES, dimension, false)?;
    let mins = accessor.doubles(fields::AXIS_MINS, dimension, false)?;
    let maxs = accessor.doubles(fields::AXIS_MAXS, dimension, false)?;
    let centers = accessor.strings(fields::CENTERS, dimension, false)?;
    let labels = accessor.strings(fields::LABELS, dimension, false)?;
    let units = accessor.strings(fields::UNITS, dimension, false)?;
    let kinds = accessor.strings(fields::KINDS, dimension, false)?;

    let mut axes = Vec::with_capacity(dimension);
    for (i, &size) in sizes.iter().enumerate() {
        let mut axis = AxisInfo::new(size);

        if let Some(Some(direction)) = directions.map(|d| &d[i]) {
            axis.set_space_direction(i, direction.clone())?;
        }
        if let Some(spacings) = &spacings {
            axis.set_spacing(i, spacings[i])?;
        }
        if let Some(mins) = &mins {
            axis.set_min(i, mins[i])?;
        }
        if let Some(maxs) = &maxs {
            axis.set_max(i, maxs[i])?;
        }
        if let Some(units) = units {
            axis.set_units(i, &units[i])?;
        }

        axis.thickness = thicknesses.as_ref().map(|t| t[i]).filter(|t| !t.is_nan());
        if let Some(centers) = centers {
            axis.center = AxisCenter::parse_optional(&centers[i])?;
        }
        axis.label = labels.map(|l| l[i].clone());
        axis.kind = kinds.map(|k| k[i].clone());

        axes.push(axis);
    }

    Ok(axes)
}

/// Parses a header, checking data files on the local filesystem
pub fn parse_header(header: &RawHeader) -> NrrdResult<ParsedHeader> {
    NrrdParser::new().parse(header)
}
