//! Tests for type, encoding and space canonicalization

use crate::nrrd::canonical::{AxisCenter, DataType, Encoding, Endianness, NamedSpace};
use crate::nrrd::constants::type_aliases;
use crate::nrrd::errors::NrrdError;

#[test]
fn test_int16_aliases_share_one_tag() {
    for alias in ["short", "int16", "int16_t", "short int", "signed short", "signed short int"] {
        assert_eq!(alias.parse::<DataType>().unwrap(), DataType::Int16, "alias {}", alias);
    }
}

#[test]
fn test_every_alias_group_resolves_to_its_tag() {
    let groups = [
        (type_aliases::INT8, DataType::Int8),
        (type_aliases::UINT8, DataType::UInt8),
        (type_aliases::INT16, DataType::Int16),
        (type_aliases::UINT16, DataType::UInt16),
        (type_aliases::INT32, DataType::Int32),
        (type_aliases::UINT32, DataType::UInt32),
        (type_aliases::INT64, DataType::Int64),
        (type_aliases::UINT64, DataType::UInt64),
    ];

    for (aliases, expected) in groups {
        for alias in aliases {
            assert_eq!(alias.parse::<DataType>().unwrap(), expected, "alias {}", alias);
        }
    }

    assert_eq!("float".parse::<DataType>().unwrap(), DataType::Float);
    assert_eq!("double".parse::<DataType>().unwrap(), DataType::Double);
    assert_eq!("block".parse::<DataType>().unwrap(), DataType::Block);
}

#[test]
fn test_unknown_type() {
    let err = "complex".parse::<DataType>().unwrap_err();
    assert!(matches!(err, NrrdError::UnknownType(ref t) if t == "complex"));
    assert_eq!(err.field(), Some("type"));
}

#[test]
fn test_byte_widths() {
    assert_eq!(DataType::Int8.byte_width(), Some(1));
    assert_eq!(DataType::UInt8.byte_width(), Some(1));
    assert_eq!(DataType::UInt16.byte_width(), Some(2));
    assert_eq!(DataType::Float.byte_width(), Some(4));
    assert_eq!(DataType::UInt32.byte_width(), Some(4));
    assert_eq!(DataType::Int64.byte_width(), Some(8));
    assert_eq!(DataType::Double.byte_width(), Some(8));
    assert_eq!(DataType::Block.byte_width(), None);
}

#[test]
fn test_encoding_aliases() {
    assert_eq!("raw".parse::<Encoding>().unwrap(), Encoding::Raw);
    assert_eq!("hex".parse::<Encoding>().unwrap(), Encoding::Hex);
    for alias in ["txt", "text", "ascii"] {
        assert_eq!(alias.parse::<Encoding>().unwrap(), Encoding::Txt);
    }
    assert_eq!("gzip".parse::<Encoding>().unwrap(), Encoding::Gzip);
    assert_eq!("gz".parse::<Encoding>().unwrap(), Encoding::Gzip);
    assert_eq!("bzip2".parse::<Encoding>().unwrap(), Encoding::Bzip2);
    assert_eq!(Encoding::Bzip2.name(), "bz2");

    assert!(matches!("zip".parse::<Encoding>(), Err(NrrdError::UnknownEncoding(_))));
}

#[test]
fn test_endianness_is_exact() {
    assert_eq!("little".parse::<Endianness>().unwrap(), Endianness::Little);
    assert_eq!("big".parse::<Endianness>().unwrap(), Endianness::Big);
    assert!(matches!("Little".parse::<Endianness>(), Err(NrrdError::UnknownEndian(_))));
}

#[test]
fn test_space_time_variant_has_four_dimensions() {
    let space = "right-anterior-superior-time".parse::<NamedSpace>().unwrap();
    assert_eq!(space, NamedSpace::RightAnteriorSuperiorTime);
    assert_eq!(space.dimension(), 4);
}

#[test]
fn test_space_abbreviations() {
    assert_eq!("ras".parse::<NamedSpace>().unwrap(), NamedSpace::RightAnteriorSuperior);
    assert_eq!("lps".parse::<NamedSpace>().unwrap().dimension(), 3);
    assert_eq!("lpst".parse::<NamedSpace>().unwrap().dimension(), 4);
    assert_eq!("las".parse::<NamedSpace>().unwrap().name(), "left-anterior-superior");
}

#[test]
fn test_scanner_and_handed_spaces() {
    assert_eq!("scanner-xyz".parse::<NamedSpace>().unwrap().dimension(), 3);
    assert_eq!("scanner-xyz-time".parse::<NamedSpace>().unwrap().dimension(), 4);
    assert_eq!("3d-right-handed".parse::<NamedSpace>().unwrap().dimension(), 3);
    assert_eq!("3d-left-handed-time".parse::<NamedSpace>().unwrap().dimension(), 4);
}

#[test]
fn test_unknown_space() {
    assert!(matches!("patient".parse::<NamedSpace>(), Err(NrrdError::UnknownSpace(_))));
    assert!(matches!("scanner-xyz-extra".parse::<NamedSpace>(), Err(NrrdError::UnknownSpace(_))));
}

#[test]
fn test_axis_centers() {
    assert_eq!(AxisCenter::parse_optional("cell").unwrap(), Some(AxisCenter::Cell));
    assert_eq!(AxisCenter::parse_optional("node").unwrap(), Some(AxisCenter::Node));
    assert_eq!(AxisCenter::parse_optional("???").unwrap(), None);
    assert_eq!(AxisCenter::parse_optional("none").unwrap(), None);
    assert!(matches!(AxisCenter::parse_optional("edge"), Err(NrrdError::UnknownCenter(_))));
}
