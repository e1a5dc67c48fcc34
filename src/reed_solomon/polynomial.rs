//! Polynomials over a [`GaloisField`]
//!
//! Coefficients are stored most-significant degree first, matching the byte
//! order of a codeword: position 0 of a buffer is the highest-degree term.
//! Values are immutable; every operation returns a new polynomial.

use super::error::{Result, RsError};
use super::galois::GaloisField;
use std::fmt;

/// Polynomial with coefficients in `field`
///
/// Leading zero coefficients are stripped on construction, so the zero
/// polynomial is the single coefficient `[0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial<'f> {
    field: &'f GaloisField,
    coefficients: Vec<u8>,
}

impl<'f> Polynomial<'f> {
    /// Build from coefficients, highest degree first. An empty list is the zero polynomial.
    pub fn new(field: &'f GaloisField, mut coefficients: Vec<u8>) -> Self {
        match coefficients.iter().position(|&c| c != 0) {
            Some(0) => {}
            Some(first_non_zero) => {
                coefficients.drain(..first_non_zero);
            }
            None => {
                coefficients.clear();
                coefficients.push(0);
            }
        }
        Self {
            field,
            coefficients,
        }
    }

    pub fn from_slice(field: &'f GaloisField, coefficients: &[u8]) -> Self {
        Self::new(field, coefficients.to_vec())
    }

    pub fn field(&self) -> &'f GaloisField {
        self.field
    }

    pub fn coefficients(&self) -> &[u8] {
        &self.coefficients
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients[0] == 0
    }

    /// Coefficient of x^degree; terms above the polynomial's degree read as 0
    pub fn coefficient(&self, degree: usize) -> u8 {
        self.degree()
            .checked_sub(degree)
            .map_or(0, |index| self.coefficients[index])
    }

    /// Evaluate at `a` using Horner's method
    pub fn evaluate_at(&self, a: u8) -> u8 {
        match a {
            0 => self.coefficient(0),
            // Sum of all coefficients, which is XOR in characteristic 2
            1 => self.coefficients.iter().fold(0, |acc, &c| acc ^ c),
            _ => self
                .coefficients
                .iter()
                .fold(0, |acc, &c| self.field.multiply(a, acc) ^ c),
        }
    }

    fn check_field(&self, other: &Polynomial<'_>) -> Result<()> {
        if self.field != other.field {
            return Err(RsError::FieldMismatch {
                left: self.field.config(),
                right: other.field.config(),
            });
        }
        Ok(())
    }

    pub fn add_or_subtract(&self, other: &Polynomial<'f>) -> Result<Polynomial<'f>> {
        self.check_field(other)?;
        if self.is_zero() {
            return Ok(other.clone());
        }
        if other.is_zero() {
            return Ok(self.clone());
        }

        let (smaller, larger) = if self.coefficients.len() > other.coefficients.len() {
            (&other.coefficients, &self.coefficients)
        } else {
            (&self.coefficients, &other.coefficients)
        };

        // High-order terms of the longer operand carry over unchanged
        let length_diff = larger.len() - smaller.len();
        let mut sum = larger.clone();
        for (term, &c) in sum[length_diff..].iter_mut().zip(smaller) {
            *term ^= c;
        }

        Ok(Polynomial::new(self.field, sum))
    }

    pub fn multiply(&self, other: &Polynomial<'f>) -> Result<Polynomial<'f>> {
        self.check_field(other)?;
        if self.is_zero() || other.is_zero() {
            return Ok(self.field.zero());
        }

        let a = &self.coefficients;
        let b = &other.coefficients;
        let mut product = vec![0u8; a.len() + b.len() - 1];
        for (i, &a_coeff) in a.iter().enumerate() {
            for (j, &b_coeff) in b.iter().enumerate() {
                product[i + j] ^= self.field.multiply(a_coeff, b_coeff);
            }
        }

        Ok(Polynomial::new(self.field, product))
    }

    pub fn multiply_scalar(&self, scalar: u8) -> Polynomial<'f> {
        match scalar {
            0 => self.field.zero(),
            1 => self.clone(),
            _ => {
                let product = self
                    .coefficients
                    .iter()
                    .map(|&c| self.field.multiply(c, scalar))
                    .collect();
                Polynomial::new(self.field, product)
            }
        }
    }

    /// Multiply by `coefficient * x^degree`
    pub fn multiply_by_monomial(&self, degree: usize, coefficient: u8) -> Polynomial<'f> {
        if coefficient == 0 {
            return self.field.zero();
        }

        let mut product = Vec::with_capacity(self.coefficients.len() + degree);
        product.extend(
            self.coefficients
                .iter()
                .map(|&c| self.field.multiply(c, coefficient)),
        );
        product.resize(self.coefficients.len() + degree, 0);

        Polynomial::new(self.field, product)
    }

    /// Long division, returning `(quotient, remainder)`
    pub fn divide(&self, other: &Polynomial<'f>) -> Result<(Polynomial<'f>, Polynomial<'f>)> {
        self.check_field(other)?;
        if other.is_zero() {
            return Err(RsError::DivideByZero);
        }

        let mut quotient = self.field.zero();
        let mut remainder = self.clone();

        let denominator_leading_term = other.coefficient(other.degree());
        let inverse_denominator_leading_term = self.field.inverse(denominator_leading_term)?;

        // Each step cancels the remainder's leading term, so its degree strictly drops
        while remainder.degree() >= other.degree() && !remainder.is_zero() {
            let degree_difference = remainder.degree() - other.degree();
            let scale = self.field.multiply(
                remainder.coefficient(remainder.degree()),
                inverse_denominator_leading_term,
            );
            let term = other.multiply_by_monomial(degree_difference, scale);
            let iteration_quotient = self.field.build_monomial(degree_difference, scale);
            quotient = quotient.add_or_subtract(&iteration_quotient)?;
            remainder = remainder.add_or_subtract(&term)?;
        }

        Ok((quotient, remainder))
    }
}

/// Coefficients are written as powers of the primitive element `a`: `x^2 + a^3x + 1`
impl fmt::Display for Polynomial<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }

        let mut first = true;
        for degree in (0..=self.degree()).rev() {
            let coefficient = self.coefficient(degree);
            if coefficient == 0 {
                continue;
            }
            if !first {
                f.write_str(" + ")?;
            }
            first = false;

            if degree == 0 || coefficient != 1 {
                match self.field.log(coefficient).map_err(|_| fmt::Error)? {
                    0 => f.write_str("1")?,
                    1 => f.write_str("a")?,
                    power => write!(f, "a^{}", power)?,
                }
            }
            match degree {
                0 => {}
                1 => f.write_str("x")?,
                _ => write!(f, "x^{}", degree)?,
            }
        }
        Ok(())
    }
}
