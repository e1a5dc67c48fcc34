//! Syndrome-based Reed-Solomon decoder
//!
//! Decoding runs in four steps:
//!
//! 1. Evaluate the received word at the generator roots (the syndromes).
//!    All zero means the codeword is intact.
//! 2. Run the extended Euclidean algorithm on `x^ec_len` and the syndrome
//!    polynomial to get the error locator (sigma) and evaluator (omega).
//! 3. Find the roots of sigma by trying every nonzero element (Chien search);
//!    their inverses are the error locations.
//! 4. Compute each error magnitude with Forney's formula and XOR it out.
//!
//! Up to `ec_len / 2` corrupted bytes are always corrected. Beyond that the
//! decoder either reports a [`DecodeFailure`] or returns a wrong codeword; there is
//! no way to tell a miscorrection apart from a valid result.

use super::error::{DecodeFailure, Result, RsError};
use super::galois::GaloisField;
use super::polynomial::Polynomial;
use log::{debug, trace};
use smallvec::SmallVec;

/// Error locations or magnitudes; 16 covers a 32-byte parity block inline
type ErrorValues = SmallVec<[u8; 16]>;

/// Reed-Solomon decoder bound to one field
///
/// Holds no mutable state; one instance may decode on many threads at once.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'f> {
    field: &'f GaloisField,
}

impl<'f> Decoder<'f> {
    pub fn new(field: &'f GaloisField) -> Self {
        Self { field }
    }

    pub fn field(&self) -> &'f GaloisField {
        self.field
    }

    /// Correct `received` in place, returning the number of bytes corrected
    ///
    /// The last `ec_len` bytes are parity. An intact codeword is left untouched
    /// and yields 0.
    pub fn decode(&self, received: &mut [u8], ec_len: usize) -> Result<usize> {
        if ec_len == 0 {
            return Err(RsError::ZeroParityLength);
        }
        self.field.check_symbols(received)?;

        let field = self.field;
        let poly = Polynomial::from_slice(field, received);
        let mut syndrome_coefficients = vec![0u8; ec_len];
        let mut no_error = true;
        for i in 0..ec_len {
            let eval = poly.evaluate_at(field.exp(i + field.generator_base()));
            syndrome_coefficients[ec_len - 1 - i] = eval;
            if eval != 0 {
                no_error = false;
            }
        }
        if no_error {
            return Ok(0);
        }
        trace!("Syndromes: {:?}", syndrome_coefficients);

        let syndrome = Polynomial::new(field, syndrome_coefficients);
        let (sigma, omega) =
            self.run_euclidean_algorithm(field.build_monomial(ec_len, 1), syndrome, ec_len)?;
        let error_locations = self.find_error_locations(&sigma)?;
        let error_magnitudes = self.find_error_magnitudes(&omega, &error_locations)?;

        for (&location, &magnitude) in error_locations.iter().zip(&error_magnitudes) {
            let log = field.log(location)?;
            let position = received
                .len()
                .checked_sub(1 + log)
                .ok_or(DecodeFailure::PositionOutOfRange {
                    log,
                    len: received.len(),
                })?;
            received[position] ^= magnitude;
        }

        debug!(
            "Corrected {} error(s) in {}-byte codeword over {}",
            error_locations.len(),
            received.len(),
            field
        );
        Ok(error_locations.len())
    }

    /// Extended Euclid on `a` and `b`, stopped once the remainder degree drops
    /// below `r / 2`. Returns `(sigma, omega)` normalized so `sigma(0) == 1`.
    fn run_euclidean_algorithm(
        &self,
        a: Polynomial<'f>,
        b: Polynomial<'f>,
        r: usize,
    ) -> Result<(Polynomial<'f>, Polynomial<'f>)> {
        // Assume a's degree is >= b's
        let (a, b) = if a.degree() < b.degree() { (b, a) } else { (a, b) };

        let mut r_last = a;
        let mut r_cur = b;
        let mut t_last = self.field.zero();
        let mut t_cur = self.field.one();

        while r_cur.degree() >= r / 2 {
            let r_last_last = std::mem::replace(&mut r_last, r_cur);
            let t_last_last = std::mem::replace(&mut t_last, t_cur);

            if r_last.is_zero() {
                return Err(DecodeFailure::ZeroRemainder.into());
            }
            let (quotient, remainder) = r_last_last.divide(&r_last)?;
            r_cur = remainder;
            t_cur = quotient.multiply(&t_last)?.add_or_subtract(&t_last_last)?;

            if r_cur.degree() >= r_last.degree() {
                return Err(DecodeFailure::DivisionDidNotReduce.into());
            }
        }

        let sigma_tilde_at_zero = t_cur.coefficient(0);
        if sigma_tilde_at_zero == 0 {
            return Err(DecodeFailure::ZeroLocatorConstant.into());
        }

        let inverse = self.field.inverse(sigma_tilde_at_zero)?;
        let sigma = t_cur.multiply_scalar(inverse);
        let omega = r_cur.multiply_scalar(inverse);
        Ok((sigma, omega))
    }

    /// Error locations are the inverses of sigma's roots
    fn find_error_locations(&self, error_locator: &Polynomial<'f>) -> Result<ErrorValues> {
        let num_errors = error_locator.degree();
        if num_errors == 1 {
            // sigma = 1 + s1*x has the single root 1/s1
            return Ok(SmallVec::from_slice(&[error_locator.coefficient(1)]));
        }

        let mut result = ErrorValues::new();
        // Nonzero syndromes with a constant locator would otherwise "succeed"
        // without correcting anything
        if num_errors > 0 {
            for i in 1..self.field.size() {
                if result.len() >= num_errors {
                    break;
                }
                let candidate = i as u8;
                if error_locator.evaluate_at(candidate) == 0 {
                    result.push(self.field.inverse(candidate)?);
                }
            }
        }

        if result.len() != num_errors || num_errors == 0 {
            return Err(DecodeFailure::RootCountMismatch {
                degree: num_errors,
                roots: result.len(),
            }
            .into());
        }
        trace!("Error locations: {:?}", result);
        Ok(result)
    }

    /// Forney's formula for each location
    fn find_error_magnitudes(
        &self,
        error_evaluator: &Polynomial<'f>,
        error_locations: &[u8],
    ) -> Result<ErrorValues> {
        let field = self.field;
        let mut result = ErrorValues::with_capacity(error_locations.len());

        for (i, &location) in error_locations.iter().enumerate() {
            let xi_inverse = field.inverse(location)?;
            let denominator = error_locations
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold(1u8, |acc, (_, &other)| {
                    // 1 + x_j / x_i
                    let term = field.multiply(other, xi_inverse);
                    field.multiply(acc, GaloisField::add_or_subtract(1, term))
                });

            let mut magnitude = field.multiply(
                error_evaluator.evaluate_at(xi_inverse),
                field.inverse(denominator)?,
            );
            if field.generator_base() != 0 {
                magnitude = field.multiply(magnitude, xi_inverse);
            }
            result.push(magnitude);
        }

        Ok(result)
    }
}
