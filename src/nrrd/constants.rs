//! NRRD format constants
//!
//! Field names as they appear in a header, dimensional limits, and the
//! alias tables used to canonicalize type, encoding and space names.

/// Dimensional limits
pub mod limits {
    /// Largest array dimension a header may declare
    pub const DIM_MAX: i64 = 16;

    /// Largest explicit space dimension
    pub const SPACE_DIM_MAX: i64 = 8;

    /// Widest field a data file name pattern may pad a number to
    pub const PATTERN_WIDTH_MAX: usize = 64;
}

/// Header field names
pub mod fields {
    // Basic array layout
    pub const TYPE: &str = "type";
    pub const ENCODING: &str = "encoding";
    pub const DIMENSION: &str = "dimension";
    pub const SIZES: &str = "sizes";
    pub const BLOCK_SIZE: &str = "block size";
    pub const ENDIAN: &str = "endian";
    pub const LINE_SKIP: &str = "line skip";
    pub const BYTE_SKIP: &str = "byte skip";
    pub const DATA_FILE: &str = "data file";

    // Per-array information
    pub const CONTENT: &str = "content";
    pub const SAMPLE_UNITS: &str = "sample units";
    pub const MIN: &str = "min";
    pub const MAX: &str = "max";
    pub const OLD_MIN: &str = "old min";
    pub const OLD_MAX: &str = "old max";

    // Space and orientation
    pub const SPACE: &str = "space";
    pub const SPACE_DIMENSION: &str = "space dimension";
    pub const SPACE_DIRECTIONS: &str = "space directions";
    pub const SPACE_UNITS: &str = "space units";
    pub const SPACE_ORIGIN: &str = "space origin";
    pub const MEASUREMENT_FRAME: &str = "measurement frame";

    // Per-axis information
    pub const SPACINGS: &str = "spacings";
    pub const THICKNESSES: &str = "thicknesses";
    pub const AXIS_MINS: &str = "axis mins";
    pub const AXIS_MAXS: &str = "axis maxs";
    pub const CENTERS: &str = "centers";
    pub const LABELS: &str = "labels";
    pub const UNITS: &str = "units";
    pub const KINDS: &str = "kinds";
}

/// Special tokens recognized inside field values
pub mod tokens {
    /// Marks a list of data files on the lines following the header
    pub const LIST: &str = "LIST";
    /// An explicitly absent vector
    pub const NONE: &str = "none";
    /// IEEE not-a-number
    pub const NAN: &str = "nan";
    /// Suffix turning a named space into a space-time frame
    pub const TIME_SUFFIX: &str = "-time";
    /// Placeholder meaning "unknown" in per-axis string fields
    pub const UNKNOWN: &str = "???";
}

/// Lexical variants of each integer type name, keyed by canonical name
pub mod type_aliases {
    pub const INT8: &[&str] = &["char", "int8", "int8_t", "signed char"];
    pub const UINT8: &[&str] = &["uchar", "uint8", "uint8_t", "unsigned char"];
    pub const INT16: &[&str] = &["int16", "int16_t", "short", "short int", "signed short", "signed short int"];
    pub const UINT16: &[&str] = &["uint16", "uint16_t", "unsigned short", "unsigned short int", "ushort"];
    pub const INT32: &[&str] = &["int", "int32", "int32_t", "signed int"];
    pub const UINT32: &[&str] = &["uint", "uint32", "uint32_t", "unsigned int"];
    pub const INT64: &[&str] = &[
        "int64", "int64_t", "long long", "long long int", "longlong",
        "signed long long", "signed long long int",
    ];
    pub const UINT64: &[&str] = &[
        "uint64", "uint64_t", "ulonglong", "unsigned long long", "unsigned long long int",
    ];
    pub const FLOAT: &[&str] = &["float"];
    pub const DOUBLE: &[&str] = &["double"];
    pub const BLOCK: &[&str] = &["block"];
}

/// Lexical variants of each encoding name
pub mod encoding_aliases {
    pub const RAW: &[&str] = &["raw"];
    pub const HEX: &[&str] = &["hex"];
    pub const TXT: &[&str] = &["txt", "text", "ascii"];
    pub const GZ: &[&str] = &["gz", "gzip"];
    pub const BZ2: &[&str] = &["bz2", "bzip2"];
}

/// Abbreviated and full anatomical space names
pub mod space_aliases {
    pub const RAS: &[&str] = &["ras", "right-anterior-superior"];
    pub const RAST: &[&str] = &["rast", "right-anterior-superior-time"];
    pub const LAS: &[&str] = &["las", "left-anterior-superior"];
    pub const LAST: &[&str] = &["last", "left-anterior-superior-time"];
    pub const LPS: &[&str] = &["lps", "left-posterior-superior"];
    pub const LPST: &[&str] = &["lpst", "left-posterior-superior-time"];
    pub const SCANNER_XYZ: &str = "scanner-xyz";
    pub const RIGHT_HANDED_3D: &str = "3d-right-handed";
    pub const LEFT_HANDED_3D: &str = "3d-left-handed";
}
