pub mod nrrd;
pub mod utils;
pub mod commands;

pub use nrrd::{parse_header, NrrdError, NrrdParser, NrrdResult, ParsedHeader, RawHeader};
