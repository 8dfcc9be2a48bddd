//! Canonical names for types, encodings, byte orders, spaces and centers
//!
//! Header authors may spell a value several ways (`short`, `int16_t`,
//! `signed short int`). Everything downstream works with the canonical
//! tags defined here, resolved by plain lookup over the alias tables in
//! [`constants`](crate::nrrd::constants).

use std::fmt;
use std::str::FromStr;

use crate::nrrd::constants::{encoding_aliases, space_aliases, tokens, type_aliases};
use crate::nrrd::errors::{NrrdError, NrrdResult};

/// Canonical sample type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float,
    Double,
    /// Opaque fixed-size records; the width comes from `block size`
    Block,
}

const DATA_TYPE_TABLE: &[(&[&str], DataType)] = &[
    (type_aliases::INT8, DataType::Int8),
    (type_aliases::UINT8, DataType::UInt8),
    (type_aliases::INT16, DataType::Int16),
    (type_aliases::UINT16, DataType::UInt16),
    (type_aliases::INT32, DataType::Int32),
    (type_aliases::UINT32, DataType::UInt32),
    (type_aliases::INT64, DataType::Int64),
    (type_aliases::UINT64, DataType::UInt64),
    (type_aliases::FLOAT, DataType::Float),
    (type_aliases::DOUBLE, DataType::Double),
    (type_aliases::BLOCK, DataType::Block),
];

impl DataType {
    /// Canonical name of this type
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Int8 => "int8",
            DataType::UInt8 => "uint8",
            DataType::Int16 => "int16",
            DataType::UInt16 => "uint16",
            DataType::Int32 => "int32",
            DataType::UInt32 => "uint32",
            DataType::Int64 => "int64",
            DataType::UInt64 => "uint64",
            DataType::Float => "float",
            DataType::Double => "double",
            DataType::Block => "block",
        }
    }

    /// Bytes per sample, or `None` for `block` which has no intrinsic width
    pub fn byte_width(&self) -> Option<u64> {
        match self {
            DataType::Int8 | DataType::UInt8 => Some(1),
            DataType::Int16 | DataType::UInt16 => Some(2),
            DataType::Int32 | DataType::UInt32 | DataType::Float => Some(4),
            DataType::Int64 | DataType::UInt64 | DataType::Double => Some(8),
            DataType::Block => None,
        }
    }
}

impl FromStr for DataType {
    type Err = NrrdError;

    fn from_str(s: &str) -> NrrdResult<Self> {
        DATA_TYPE_TABLE
            .iter()
            .find(|(aliases, _)| aliases.contains(&s))
            .map(|(_, data_type)| *data_type)
            .ok_or_else(|| NrrdError::UnknownType(s.to_string()))
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Canonical data encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    Raw,
    Hex,
    Txt,
    Gzip,
    Bzip2,
}

const ENCODING_TABLE: &[(&[&str], Encoding)] = &[
    (encoding_aliases::RAW, Encoding::Raw),
    (encoding_aliases::HEX, Encoding::Hex),
    (encoding_aliases::TXT, Encoding::Txt),
    (encoding_aliases::GZ, Encoding::Gzip),
    (encoding_aliases::BZ2, Encoding::Bzip2),
];

impl Encoding {
    /// Canonical name of this encoding
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Raw => "raw",
            Encoding::Hex => "hex",
            Encoding::Txt => "txt",
            Encoding::Gzip => "gz",
            Encoding::Bzip2 => "bz2",
        }
    }
}

impl FromStr for Encoding {
    type Err = NrrdError;

    fn from_str(s: &str) -> NrrdResult<Self> {
        ENCODING_TABLE
            .iter()
            .find(|(aliases, _)| aliases.contains(&s))
            .map(|(_, encoding)| *encoding)
            .ok_or_else(|| NrrdError::UnknownEncoding(s.to_string()))
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Byte order of multi-byte samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
    Little,
    Big,
    /// No byte order given, and none needed
    #[default]
    Unspecified,
}

impl Endianness {
    pub fn name(&self) -> &'static str {
        match self {
            Endianness::Little => "little",
            Endianness::Big => "big",
            Endianness::Unspecified => "unspecified",
        }
    }
}

impl FromStr for Endianness {
    type Err = NrrdError;

    /// Only the exact words `little` and `big` are accepted
    fn from_str(s: &str) -> NrrdResult<Self> {
        match s {
            "little" => Ok(Endianness::Little),
            "big" => Ok(Endianness::Big),
            _ => Err(NrrdError::UnknownEndian(s.to_string())),
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named physical coordinate frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedSpace {
    RightAnteriorSuperior,
    RightAnteriorSuperiorTime,
    LeftAnteriorSuperior,
    LeftAnteriorSuperiorTime,
    LeftPosteriorSuperior,
    LeftPosteriorSuperiorTime,
    ScannerXyz,
    ScannerXyzTime,
    RightHanded3D,
    RightHanded3DTime,
    LeftHanded3D,
    LeftHanded3DTime,
}

const ANATOMICAL_SPACE_TABLE: &[(&[&str], NamedSpace)] = &[
    (space_aliases::RAS, NamedSpace::RightAnteriorSuperior),
    (space_aliases::RAST, NamedSpace::RightAnteriorSuperiorTime),
    (space_aliases::LAS, NamedSpace::LeftAnteriorSuperior),
    (space_aliases::LAST, NamedSpace::LeftAnteriorSuperiorTime),
    (space_aliases::LPS, NamedSpace::LeftPosteriorSuperior),
    (space_aliases::LPST, NamedSpace::LeftPosteriorSuperiorTime),
];

impl NamedSpace {
    /// Canonical (long) name of this space
    pub fn name(&self) -> &'static str {
        match self {
            NamedSpace::RightAnteriorSuperior => "right-anterior-superior",
            NamedSpace::RightAnteriorSuperiorTime => "right-anterior-superior-time",
            NamedSpace::LeftAnteriorSuperior => "left-anterior-superior",
            NamedSpace::LeftAnteriorSuperiorTime => "left-anterior-superior-time",
            NamedSpace::LeftPosteriorSuperior => "left-posterior-superior",
            NamedSpace::LeftPosteriorSuperiorTime => "left-posterior-superior-time",
            NamedSpace::ScannerXyz => "scanner-xyz",
            NamedSpace::ScannerXyzTime => "scanner-xyz-time",
            NamedSpace::RightHanded3D => "3d-right-handed",
            NamedSpace::RightHanded3DTime => "3d-right-handed-time",
            NamedSpace::LeftHanded3D => "3d-left-handed",
            NamedSpace::LeftHanded3DTime => "3d-left-handed-time",
        }
    }

    /// Whether the frame carries a time axis
    pub fn is_time(&self) -> bool {
        matches!(
            self,
            NamedSpace::RightAnteriorSuperiorTime
                | NamedSpace::LeftAnteriorSuperiorTime
                | NamedSpace::LeftPosteriorSuperiorTime
                | NamedSpace::ScannerXyzTime
                | NamedSpace::RightHanded3DTime
                | NamedSpace::LeftHanded3DTime
        )
    }

    /// Number of coordinates in this frame: 3, or 4 for space-time
    pub fn dimension(&self) -> usize {
        if self.is_time() { 4 } else { 3 }
    }
}

impl FromStr for NamedSpace {
    type Err = NrrdError;

    fn from_str(s: &str) -> NrrdResult<Self> {
        if let Some((_, space)) = ANATOMICAL_SPACE_TABLE.iter().find(|(aliases, _)| aliases.contains(&s)) {
            return Ok(*space);
        }

        let (base, time) = match s.strip_suffix(tokens::TIME_SUFFIX) {
            Some(base) => (base, true),
            None => (s, false),
        };

        let space = match (base, time) {
            (space_aliases::SCANNER_XYZ, false) => NamedSpace::ScannerXyz,
            (space_aliases::SCANNER_XYZ, true) => NamedSpace::ScannerXyzTime,
            (space_aliases::RIGHT_HANDED_3D, false) => NamedSpace::RightHanded3D,
            (space_aliases::RIGHT_HANDED_3D, true) => NamedSpace::RightHanded3DTime,
            (space_aliases::LEFT_HANDED_3D, false) => NamedSpace::LeftHanded3D,
            (space_aliases::LEFT_HANDED_3D, true) => NamedSpace::LeftHanded3DTime,
            _ => return Err(NrrdError::UnknownSpace(s.to_string())),
        };

        Ok(space)
    }
}

impl fmt::Display for NamedSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sample centering along an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisCenter {
    Cell,
    Node,
}

impl AxisCenter {
    /// Parses a `centers` token; `???` and `none` mean no centering
    pub fn parse_optional(s: &str) -> NrrdResult<Option<Self>> {
        match s {
            "cell" => Ok(Some(AxisCenter::Cell)),
            "node" => Ok(Some(AxisCenter::Node)),
            tokens::UNKNOWN | tokens::NONE => Ok(None),
            _ => Err(NrrdError::UnknownCenter(s.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AxisCenter::Cell => "cell",
            AxisCenter::Node => "node",
        }
    }
}

impl fmt::Display for AxisCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
