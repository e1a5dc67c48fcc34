//! Polynomial Arithmetic Tests
//!
//! Tests for polynomial construction, evaluation and the ring operations
//! over the barcode fields.

use rsecc::reed_solomon::galois::{data_matrix_field, qr_code_field};
use rsecc::{Polynomial, RsError};

fn qr(coefficients: &[u8]) -> Polynomial<'static> {
    Polynomial::from_slice(qr_code_field(), coefficients)
}

// ============================================================================
// Construction and identities
// ============================================================================

#[test]
fn test_field_identities() {
    let field = qr_code_field();
    let p = qr(&[9, 8, 7]);

    assert!(field.zero().is_zero());
    assert_eq!(field.one().coefficients(), &[1]);
    assert_eq!(p.multiply(&field.one()).unwrap(), p);
    assert_eq!(p.add_or_subtract(&field.zero()).unwrap(), p);
    assert_eq!(field.zero().add_or_subtract(&p).unwrap(), p);
}

#[test]
fn test_monomial_matches_shifted_one() {
    let field = qr_code_field();
    assert_eq!(
        field.build_monomial(4, 3),
        field.one().multiply_by_monomial(4, 3)
    );
}

// ============================================================================
// Evaluation
// ============================================================================

#[test]
fn test_evaluate_matches_naive_sum() {
    let field = data_matrix_field();
    let p = Polynomial::from_slice(field, &[44, 0, 201, 3, 17]);
    for x in 0..=255u8 {
        let mut expected = 0u8;
        let mut power = 1u8;
        for degree in 0..=p.degree() {
            expected ^= field.multiply(p.coefficient(degree), power);
            power = field.multiply(power, x);
        }
        assert_eq!(p.evaluate_at(x), expected, "x = {}", x);
    }
}

#[test]
fn test_product_roots() {
    // (x - a^3)(x - a^9) vanishes at both roots
    let field = qr_code_field();
    let p = qr(&[1, field.exp(3)])
        .multiply(&qr(&[1, field.exp(9)]))
        .unwrap();
    assert_eq!(p.degree(), 2);
    assert_eq!(p.evaluate_at(field.exp(3)), 0);
    assert_eq!(p.evaluate_at(field.exp(9)), 0);
    assert_ne!(p.evaluate_at(field.exp(4)), 0);
}

// ============================================================================
// Division
// ============================================================================

#[test]
fn test_exact_division() {
    let a = qr(&[3, 1, 4, 1]);
    let b = qr(&[5, 9, 2]);
    let product = a.multiply(&b).unwrap();

    let (quotient, remainder) = product.divide(&b).unwrap();
    assert_eq!(quotient, a);
    assert!(remainder.is_zero());
}

#[test]
fn test_division_by_larger_degree() {
    let small = qr(&[7, 7]);
    let large = qr(&[1, 0, 0, 1]);
    let (quotient, remainder) = small.divide(&large).unwrap();
    assert!(quotient.is_zero());
    assert_eq!(remainder, small);
}

#[test]
fn test_division_by_constant() {
    let field = qr_code_field();
    let p = qr(&[10, 20, 30]);
    let (quotient, remainder) = p.divide(&qr(&[5])).unwrap();
    assert!(remainder.is_zero());
    assert_eq!(quotient, p.multiply_scalar(field.inverse(5).unwrap()));
}

#[test]
fn test_errors() {
    let p = qr(&[1, 2, 3]);
    assert_eq!(p.divide(&qr(&[0, 0])), Err(RsError::DivideByZero));

    let other = Polynomial::from_slice(data_matrix_field(), &[1, 2, 3]);
    assert!(matches!(
        p.add_or_subtract(&other),
        Err(RsError::FieldMismatch { .. })
    ));
}
