//! Tests for the vector grammar

use crate::nrrd::errors::NrrdError;
use crate::nrrd::vector::{format_vector, parse_required_vector, parse_vector};

/// Element-wise equality that treats NaN as equal to NaN
fn same_components(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x.is_nan() && y.is_nan()) || x == y)
}

#[test]
fn test_parse_vector() {
    let v = parse_vector("space origin", "(1.5,-2,3e2)", 3).unwrap().unwrap();
    assert_eq!(v, vec![1.5, -2.0, 300.0]);
}

#[test]
fn test_none_is_absent_not_an_error() {
    assert_eq!(parse_vector("space directions", "none", 3).unwrap(), None);
}

#[test]
fn test_nan_component() {
    let v = parse_vector("space directions", "(nan,nan,1)", 3).unwrap().unwrap();
    assert!(v[0].is_nan() && v[1].is_nan());
    assert_eq!(v[2], 1.0);
}

#[test]
fn test_length_mismatch() {
    let err = parse_vector("space origin", "(1,2)", 3).unwrap_err();
    assert!(matches!(
        err,
        NrrdError::VectorLengthMismatch { expected: 3, actual: 2, .. }
    ));
}

#[test]
fn test_syntax_errors() {
    for token in ["1,2,3", "(1,2,3", "1,2,3)", "(1,x,3)", "(1, 2,3)", "(1;2;3)", "()"] {
        let result = parse_vector("space origin", token, 3);
        assert!(
            matches!(
                result,
                Err(NrrdError::VectorSyntax { .. }) | Err(NrrdError::VectorLengthMismatch { .. })
            ),
            "token {} should be rejected",
            token
        );
    }

    assert!(matches!(
        parse_vector("space origin", "[1,2,3]", 3),
        Err(NrrdError::VectorSyntax { .. })
    ));
    assert!(matches!(
        parse_vector("space origin", "(1,x,3)", 3),
        Err(NrrdError::VectorSyntax { .. })
    ));
}

#[test]
fn test_required_vector_rejects_none() {
    assert!(matches!(
        parse_required_vector("measurement frame", "none", 3),
        Err(NrrdError::VectorSyntax { .. })
    ));
}

#[test]
fn test_format_then_parse_round_trip() {
    let vectors = [
        vec![0.0, 1.0, -1.0],
        vec![0.125, -3.5e-7, 12345.678],
        vec![f64::NAN, 2.0, f64::NAN, 4.0],
    ];

    for original in vectors {
        let token = format_vector(&original);
        let parsed = parse_vector("v", &token, original.len()).unwrap().unwrap();
        assert!(same_components(&original, &parsed), "{} did not round-trip", token);
    }
}

#[test]
fn test_overflowing_component_is_rejected() {
    // would otherwise format as `inf`, which does not parse back
    assert!(matches!(
        parse_vector("space origin", "(1e400,0,0)", 3),
        Err(NrrdError::VectorSyntax { .. })
    ));
}

#[test]
fn test_format_vector_writes_nan() {
    assert_eq!(format_vector(&[1.0, f64::NAN]), "(1,nan)");
}
