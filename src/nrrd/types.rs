//! Core NRRD data structures

use std::fmt;
use std::path::PathBuf;

use crate::nrrd::axis::AxisInfo;
use crate::nrrd::canonical::{DataType, Encoding, Endianness};
use crate::nrrd::space::{MeasurementFrame, Space};
use crate::nrrd::vector::format_vector;

/// Validated description of where an array's samples are and how to read them
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedHeader {
    pub data_type: DataType,
    pub encoding: Encoding,
    /// Number of axes, 1 to 16
    pub dimension: usize,
    /// Samples along each axis, fastest first
    pub sizes: Vec<u64>,
    /// Product of `sizes`
    pub sample_count: u64,
    /// `sample_count` times the per-sample width
    pub byte_count: u64,
    /// Bytes per sample (the block size for `block` data)
    pub byte_width: u64,
    pub endianness: Endianness,
    pub line_skip: u64,
    pub byte_skip: u64,

    /// Directory the header was read from
    pub directory: PathBuf,
    /// File name of the header
    pub filename: String,
    pub(crate) detached: bool,
    /// Files holding the samples, in order
    pub data_files: Vec<PathBuf>,
    /// Number of slowest axes spanned by each data file
    pub data_file_subdim: Option<usize>,
    /// Bytes held by each data file
    pub slab_byte_count: Option<u64>,

    pub content: Option<String>,
    pub sample_units: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub old_min: Option<f64>,
    pub old_max: Option<f64>,

    pub space: Option<Space>,
    pub space_units: Option<Vec<String>>,
    pub space_origin: Option<Vec<f64>>,
    pub measurement_frame: Option<MeasurementFrame>,

    /// One record per axis
    pub axes: Vec<AxisInfo>,
}

impl ParsedHeader {
    /// Dimension of the physical space, or 0 without space information
    pub fn space_dimension(&self) -> usize {
        self.space.map_or(0, |space| space.dimension)
    }

    pub fn axis(&self, index: usize) -> Option<&AxisInfo> {
        self.axes.get(index)
    }

    /// Whether the samples live outside the header file
    pub fn is_detached(&self) -> bool {
        self.detached
    }
}

impl fmt::Display for ParsedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "NRRD Header: {}", self.filename)?;
        writeln!(f, "  Type: {} ({} bytes/sample)", self.data_type, self.byte_width)?;
        writeln!(f, "  Encoding: {}", self.encoding)?;
        writeln!(f, "  Endian: {}", self.endianness)?;
        writeln!(f, "  Dimension: {}", self.dimension)?;
        writeln!(f, "  Sizes: {:?}", self.sizes)?;
        writeln!(f, "  Samples: {}, bytes: {}", self.sample_count, self.byte_count)?;

        if self.line_skip > 0 || self.byte_skip > 0 {
            writeln!(f, "  Skip: {} lines, {} bytes", self.line_skip, self.byte_skip)?;
        }
        if let Some(content) = &self.content {
            writeln!(f, "  Content: {}", content)?;
        }

        writeln!(
            f,
            "  Data files: {}{}",
            self.data_files.len(),
            if self.detached { " (detached)" } else { "" }
        )?;
        if let Some(subdim) = self.data_file_subdim {
            writeln!(f, "  Data file subdim: {}", subdim)?;
        }

        if let Some(space) = &self.space {
            writeln!(f, "  Space: {}", space)?;
        }
        if let Some(origin) = &self.space_origin {
            writeln!(f, "  Space origin: {}", format_vector(origin))?;
        }
        if let Some(frame) = &self.measurement_frame {
            writeln!(f, "  Measurement frame: {}", frame)?;
        }

        for (i, axis) in self.axes.iter().enumerate() {
            writeln!(f, "  Axis {}: {}", i, axis)?;
        }

        Ok(())
    }
}
