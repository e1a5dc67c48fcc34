//! Galois Field GF(2^m) Tests
//!
//! Tests for field construction, the preset barcode fields, and element
//! arithmetic through the public API.

use rsecc::reed_solomon::galois::{
    aztec_data_6_field, aztec_param_field, data_matrix_field, make_field, qr_code_field,
    GaloisField,
};
use rsecc::{ErrorKind, FieldConfig, RsError};

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_make_field_general_constructor() {
    let field = make_field(0x012D, 256, 1).unwrap();
    assert_eq!(field.primitive(), 0x012D);
    assert_eq!(field.size(), 256);
    assert_eq!(field.generator_base(), 1);
    assert_eq!(field.config(), FieldConfig::DATA_MATRIX);
    assert_eq!(&field, data_matrix_field());
}

#[test]
fn test_every_preset_is_primitive() {
    // GaloisField::new validates primitivity; presets skip it, so check here
    for config in [
        FieldConfig::DATA_MATRIX,
        FieldConfig::QR_CODE,
        FieldConfig::AZTEC_DATA_6,
        FieldConfig::AZTEC_PARAM,
    ] {
        assert!(GaloisField::new(config).is_ok(), "{} rejected", config);
    }
}

#[test]
fn test_preset_parameters() {
    assert_eq!(qr_code_field().config(), FieldConfig::QR_CODE);
    assert_eq!(aztec_data_6_field().size(), 64);
    assert_eq!(aztec_param_field().size(), 16);
}

#[test]
fn test_non_primitive_polynomial_rejected() {
    // AES polynomial: irreducible, but 2 only generates 51 elements
    match make_field(0x11B, 256, 0) {
        Err(err @ RsError::InvalidField { .. }) => {
            assert_eq!(err.kind(), ErrorKind::Configuration);
            assert!(err.to_string().contains("not primitive"));
        }
        other => panic!("expected InvalidField, got {:?}", other),
    }
}

#[test]
fn test_tiny_field() {
    // GF(2) with x + 1: the multiplicative group is {1}
    let field = make_field(0b11, 2, 0).unwrap();
    assert_eq!(field.exp(0), 1);
    assert_eq!(field.exp(5), 1);
    assert_eq!(field.inverse(1).unwrap(), 1);
    assert_eq!(field.multiply(1, 1), 1);
}

// ============================================================================
// Element arithmetic
// ============================================================================

#[test]
fn test_add_is_xor() {
    assert_eq!(GaloisField::add_or_subtract(0x53, 0xCA), 0x53 ^ 0xCA);
    assert_eq!(GaloisField::add_or_subtract(0x42, 0x42), 0);
}

#[test]
fn test_exp_is_cyclic() {
    let field = qr_code_field();
    for i in 0..255 {
        assert_eq!(field.exp(i), field.exp(i + 255));
    }
}

#[test]
fn test_multiply_matches_exp_addition() {
    let field = data_matrix_field();
    for i in 0..255 {
        for j in [0, 1, 17, 200, 254] {
            assert_eq!(field.multiply(field.exp(i), field.exp(j)), field.exp(i + j));
        }
    }
}

#[test]
fn test_inverse_in_every_preset() {
    for field in [
        data_matrix_field(),
        qr_code_field(),
        aztec_data_6_field(),
        aztec_param_field(),
    ] {
        for a in 1..field.size() {
            let a = a as u8;
            assert_eq!(field.multiply(a, field.inverse(a).unwrap()), 1);
        }
        assert_eq!(field.inverse(0), Err(RsError::InverseOfZero));
        assert_eq!(field.log(0), Err(RsError::LogOfZero));
    }
}

#[test]
fn test_fields_differ() {
    // Same element, different reduction
    assert_ne!(qr_code_field().exp(8), data_matrix_field().exp(8));
    assert_eq!(qr_code_field().exp(8), 0x1D);
    assert_eq!(data_matrix_field().exp(8), 0x2D);
}

#[test]
fn test_debug_and_display() {
    let field = qr_code_field();
    assert_eq!(field.to_string(), "GF(0x11d,256)");
    let debug = format!("{:?}", field);
    assert!(debug.contains("0x11d"));
    assert!(debug.contains("generator_base: 0"));
}
