use std::collections::HashSet;
use std::path::PathBuf;

use crate::nrrd::raw_header::RawHeader;

/// Directory used for in-memory headers
pub const HEADER_DIR: &str = "/data/scan";

/// A minimal attached header: 2D shorts, 4x4, little endian
pub fn basic_header() -> RawHeader {
    RawHeader::new(HEADER_DIR, "scan.nrrd")
        .with_field("type", ["short"])
        .with_field("encoding", ["raw"])
        .with_field("dimension", ["2"])
        .with_field("sizes", ["4", "4"])
        .with_field("endian", ["little"])
}

/// A detached 3D header with the given sizes
pub fn detached_header(sizes: [&str; 3]) -> RawHeader {
    RawHeader::new(HEADER_DIR, "scan.nhdr")
        .detached(true)
        .with_field("type", ["uchar"])
        .with_field("encoding", ["raw"])
        .with_field("dimension", ["3"])
        .with_field("sizes", sizes)
}

/// A locator that knows the given names inside [`HEADER_DIR`]
pub fn locator_with<'a, I>(names: I) -> HashSet<PathBuf>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .map(|name| PathBuf::from(HEADER_DIR).join(name))
        .collect()
}
