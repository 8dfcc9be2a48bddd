//! Tests for checked field access

use crate::nrrd::errors::NrrdError;
use crate::nrrd::fields::{parse_double, FieldAccessor};
use crate::nrrd::raw_header::RawHeader;

fn header() -> RawHeader {
    RawHeader::new("/tmp", "a.nrrd")
        .with_field("sizes", ["3", "4", "5"])
        .with_field("spacings", ["1.5", "nan", "2"])
        .with_field("labels", ["x", "y"])
        .with_field("bad", ["12", "twelve"])
}

#[test]
fn test_strings_exact_arity() {
    let raw = header();
    let accessor = FieldAccessor::new(&raw);

    let labels = accessor.strings("labels", 2, true).unwrap().unwrap();
    assert_eq!(labels, ["x", "y"]);
}

#[test]
fn test_arity_mismatch() {
    let raw = header();
    let accessor = FieldAccessor::new(&raw);

    let err = accessor.longs("sizes", 2, true).unwrap_err();
    match err {
        NrrdError::ArityMismatch { field, expected, actual } => {
            assert_eq!(field, "sizes");
            assert_eq!(expected, 2);
            assert_eq!(actual, 3);
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_missing_required_and_optional() {
    let raw = header();
    let accessor = FieldAccessor::new(&raw);

    assert!(matches!(
        accessor.ints("dimension", 1, true),
        Err(NrrdError::MissingField { ref field }) if field == "dimension"
    ));
    assert_eq!(accessor.ints("dimension", 1, false).unwrap(), None);
}

#[test]
fn test_numeric_conversion() {
    let raw = header();
    let accessor = FieldAccessor::new(&raw);

    assert_eq!(accessor.longs("sizes", 3, true).unwrap(), Some(vec![3, 4, 5]));

    let spacings = accessor.doubles("spacings", 3, true).unwrap().unwrap();
    assert_eq!(spacings[0], 1.5);
    assert!(spacings[1].is_nan());
    assert_eq!(spacings[2], 2.0);

    let err = accessor.ints("bad", 2, true).unwrap_err();
    assert!(matches!(err, NrrdError::NumericParse { ref token, .. } if token == "twelve"));
}

#[test]
fn test_only_lowercase_nan_is_special() {
    assert!(parse_double("nan").unwrap().is_nan());
    assert_eq!(parse_double("NaN"), None);
    assert_eq!(parse_double("inf"), None);
    assert_eq!(parse_double("-infinity"), None);
    assert_eq!(parse_double("1e3"), Some(1000.0));
    assert_eq!(parse_double("1e400"), None);
    assert_eq!(parse_double("-1e400"), None);
    assert_eq!(parse_double("-2.5E-1"), Some(-0.25));
}
