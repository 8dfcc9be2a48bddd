//! NRRD header parsing module
//!
//! This module turns the tokenized fields of an NRRD header into a
//! validated description of the array and the files that hold it.

pub mod errors;
pub mod constants;
pub mod canonical;
pub mod raw_header;
pub mod fields;
pub mod vector;
pub mod axis;
pub(crate) mod validation;
pub mod data_files;
pub mod space;
pub mod types;
pub mod parser;
mod tests;

pub use axis::{AxisGeometry, AxisInfo, AxisMetric};
pub use canonical::{AxisCenter, DataType, Encoding, Endianness, NamedSpace};
pub use data_files::{FileLocator, FsLocator};
pub use errors::{NrrdError, NrrdResult};
pub use parser::{parse_header, NrrdParser};
pub use raw_header::RawHeader;
pub use space::{MeasurementFrame, Space};
pub use types::ParsedHeader;
pub use vector::{format_vector, parse_vector};
