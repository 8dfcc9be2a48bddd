//! Custom error types for NRRD header processing

use std::fmt;
use std::io;
use std::path::PathBuf;

/// NRRD-specific error types
///
/// Each variant names a distinct validation failure. Where a failure is
/// tied to a header field, the field name travels with the error so the
/// caller can report exactly which line of the header is at fault.
#[derive(Debug)]
pub enum NrrdError {
    /// I/O error while reading a header description
    IoError(io::Error),
    /// A required field is absent
    MissingField { field: String },
    /// A field carries the wrong number of tokens
    ArityMismatch { field: String, expected: usize, actual: usize },
    /// A token could not be converted to a number
    NumericParse { field: String, token: String },
    /// Unrecognized data type name
    UnknownType(String),
    /// Unrecognized encoding name
    UnknownEncoding(String),
    /// Block size below one byte
    InvalidBlockSize(i64),
    /// Per-sample byte width below one byte
    InvalidByteWidth(i64),
    /// A dimensionality outside its permitted range
    DimensionOutOfRange { field: String, value: i64, min: i64, max: i64 },
    /// Sizes that do not describe at least one sample
    InvalidSampleCount(String),
    /// Endian value other than `little` or `big`
    UnknownEndian(String),
    /// Token is not a parenthesized vector, or a component is not numeric
    VectorSyntax { field: String, token: String },
    /// Vector has the wrong number of components
    VectorLengthMismatch { field: String, expected: usize, actual: usize },
    /// Resolved data file does not exist
    DataFileNotFound(PathBuf),
    /// `data file: LIST` with no file lines following it
    EmptyFileList,
    /// Filename pattern whose numbers or format cannot be used
    InvalidPatternSpec(String),
    /// `data file` with an unsupported number of tokens
    MalformedDataFileField(usize),
    /// Data file subdimension outside [1, dimension]
    SubdimOutOfRange { subdim: i64, dimension: usize },
    /// File count does not divide the number of samples
    SlabCountMismatch { files: usize, samples: u64 },
    /// File count does not match the sizes spanned by the files
    FileCountMismatch { files: usize, expected: u64 },
    /// Unrecognized space name
    UnknownSpace(String),
    /// Per-axis metric field and space direction both given for one axis
    AxisFieldConflict { axis: usize, field: String },
    /// Negative line or byte skip
    InvalidSkip { field: String, value: i64 },
    /// Per-axis center other than cell, node, ??? or none
    UnknownCenter(String),
    /// `space` and `space dimension` disagree
    SpaceDimensionMismatch { space: String, declared: usize },
    /// Header description could not be interpreted
    InvalidConfig(String),
}

impl NrrdError {
    /// Name of the header field this error concerns, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            NrrdError::MissingField { field }
            | NrrdError::ArityMismatch { field, .. }
            | NrrdError::NumericParse { field, .. }
            | NrrdError::DimensionOutOfRange { field, .. }
            | NrrdError::VectorSyntax { field, .. }
            | NrrdError::VectorLengthMismatch { field, .. }
            | NrrdError::InvalidSkip { field, .. } => Some(field.as_str()),
            NrrdError::UnknownType(_) => Some("type"),
            NrrdError::UnknownEncoding(_) => Some("encoding"),
            NrrdError::InvalidBlockSize(_) => Some("block size"),
            NrrdError::InvalidSampleCount(_) => Some("sizes"),
            NrrdError::UnknownEndian(_) => Some("endian"),
            NrrdError::DataFileNotFound(_)
            | NrrdError::EmptyFileList
            | NrrdError::InvalidPatternSpec(_)
            | NrrdError::MalformedDataFileField(_)
            | NrrdError::SubdimOutOfRange { .. }
            | NrrdError::SlabCountMismatch { .. }
            | NrrdError::FileCountMismatch { .. } => Some("data file"),
            NrrdError::UnknownSpace(_) | NrrdError::SpaceDimensionMismatch { .. } => Some("space"),
            NrrdError::AxisFieldConflict { field, .. } => Some(field.as_str()),
            NrrdError::UnknownCenter(_) => Some("centers"),
            NrrdError::IoError(_) | NrrdError::InvalidByteWidth(_) | NrrdError::InvalidConfig(_) => None,
        }
    }
}

impl fmt::Display for NrrdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NrrdError::IoError(e) => write!(f, "I/O error: {}", e),
            NrrdError::MissingField { field } => write!(f, "Required field '{}' is missing", field),
            NrrdError::ArityMismatch { field, expected, actual } => write!(
                f,
                "Field '{}' must have exactly {} values (found {})",
                field, expected, actual
            ),
            NrrdError::NumericParse { field, token } => {
                write!(f, "Field '{}': cannot parse '{}' as a number", field, token)
            }
            NrrdError::UnknownType(t) => write!(f, "Unknown data type: {}", t),
            NrrdError::UnknownEncoding(e) => write!(f, "Unknown encoding: {}", e),
            NrrdError::InvalidBlockSize(v) => write!(f, "Invalid block size: {} (must be at least 1)", v),
            NrrdError::InvalidByteWidth(v) => write!(
                f,
                "Inferred byte size {} is less than 1; check type or block size",
                v
            ),
            NrrdError::DimensionOutOfRange { field, value, min, max } => write!(
                f,
                "Invalid {}: {} (must be between {} and {})",
                field, value, min, max
            ),
            NrrdError::InvalidSampleCount(msg) => write!(f, "Invalid number of samples: {}", msg),
            NrrdError::UnknownEndian(e) => write!(f, "Unknown endian specification: {}", e),
            NrrdError::VectorSyntax { field, token } => {
                write!(f, "Field '{}': '{}' is not a valid vector", field, token)
            }
            NrrdError::VectorLengthMismatch { field, expected, actual } => write!(
                f,
                "Field '{}': vector should have length {} (found {})",
                field, expected, actual
            ),
            NrrdError::DataFileNotFound(path) => write!(f, "Unable to find data file: {}", path.display()),
            NrrdError::EmptyFileList => write!(f, "No data files listed after 'data file: LIST'"),
            NrrdError::InvalidPatternSpec(msg) => write!(
                f,
                "Could not parse data file pattern ({}); expected <format> <min> <max> <step> [<subdim>]",
                msg
            ),
            NrrdError::MalformedDataFileField(n) => {
                write!(f, "Field 'data file' has an unsupported number of tokens: {}", n)
            }
            NrrdError::SubdimOutOfRange { subdim, dimension } => write!(
                f,
                "Data file subdim {} must be in range [1,{}]",
                subdim, dimension
            ),
            NrrdError::SlabCountMismatch { files, samples } => write!(
                f,
                "Number of slabs indicated by 'data file' ({}) does not divide evenly into number of samples ({})",
                files, samples
            ),
            NrrdError::FileCountMismatch { files, expected } => write!(
                f,
                "Number of data files indicated by 'data file' ({}) does not match expected count {}",
                files, expected
            ),
            NrrdError::UnknownSpace(s) => write!(f, "Unknown space: {}", s),
            NrrdError::AxisFieldConflict { axis, field } => write!(
                f,
                "Axis {}: conflict between space direction and '{}' field",
                axis, field
            ),
            NrrdError::InvalidSkip { field, value } => {
                write!(f, "Field '{}' must not be negative (found {})", field, value)
            }
            NrrdError::UnknownCenter(c) => write!(f, "Unknown axis center: {}", c),
            NrrdError::SpaceDimensionMismatch { space, declared } => write!(
                f,
                "Space '{}' conflicts with declared space dimension {}",
                space, declared
            ),
            NrrdError::InvalidConfig(msg) => write!(f, "Invalid header description: {}", msg),
        }
    }
}

impl std::error::Error for NrrdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NrrdError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for NrrdError {
    fn from(error: io::Error) -> Self {
        NrrdError::IoError(error)
    }
}

/// Result type for NRRD operations
pub type NrrdResult<T> = Result<T, NrrdError>;
