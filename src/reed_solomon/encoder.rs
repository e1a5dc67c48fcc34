//! Systematic Reed-Solomon encoder
//!
//! Parity is the remainder of `message(x) * x^ec_len` divided by the generator
//! polynomial `(x - a^b)(x - a^(b+1))...(x - a^(b+ec_len-1))`, where `b` is the
//! field's generator base. The data bytes are left untouched.

use super::error::Result;
use super::galois::GaloisField;
use super::polynomial::Polynomial;
use super::types::CodewordLayout;
use log::debug;
use rustc_hash::FxHashMap as HashMap;
use std::sync::{Mutex, PoisonError};

/// Reed-Solomon encoder bound to one field
///
/// Generator polynomials are memoized per degree. The cache sits behind a
/// mutex, so one encoder can be shared across threads; call [`Encoder::prewarm`]
/// first to keep threads from queueing on cache growth.
#[derive(Debug)]
pub struct Encoder<'f> {
    field: &'f GaloisField,
    cached_generators: Mutex<HashMap<usize, Polynomial<'f>>>,
}

impl<'f> Encoder<'f> {
    pub fn new(field: &'f GaloisField) -> Self {
        let mut cached_generators = HashMap::default();
        cached_generators.insert(0, field.one());
        Self {
            field,
            cached_generators: Mutex::new(cached_generators),
        }
    }

    pub fn field(&self) -> &'f GaloisField {
        self.field
    }

    /// Generator polynomial of the given degree, extending the cache as needed
    pub fn build_generator(&self, degree: usize) -> Result<Polynomial<'f>> {
        // Entries are only ever added whole, so a poisoned cache is still consistent
        let mut cache = self
            .cached_generators
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // Degrees 0..len are always present
        let highest = cache.len() - 1;
        if degree > highest {
            debug!(
                "Extending {} generator cache from degree {} to {}",
                self.field, highest, degree
            );
            let mut last_generator = cache[&highest].clone();
            for d in highest + 1..=degree {
                let root = self.field.exp(d - 1 + self.field.generator_base());
                let factor = Polynomial::new(self.field, vec![1, root]);
                last_generator = last_generator.multiply(&factor)?;
                cache.insert(d, last_generator.clone());
            }
        }

        Ok(cache[&degree].clone())
    }

    /// Build every generator up to `max_degree`
    pub fn prewarm(&self, max_degree: usize) -> Result<()> {
        self.build_generator(max_degree).map(|_| ())
    }

    /// Fill the last `ec_len` bytes of `buffer` with parity for the bytes before them
    pub fn encode(&self, buffer: &mut [u8], ec_len: usize) -> Result<()> {
        let layout = CodewordLayout::new(buffer.len(), ec_len)?;
        let data = &buffer[layout.data_region()];
        self.field.check_symbols(data)?;

        let generator = self.build_generator(ec_len)?;
        let info = Polynomial::from_slice(self.field, data).multiply_by_monomial(ec_len, 1);
        let (_, remainder) = info.divide(&generator)?;

        // The remainder drops leading zeros; pad back out to ec_len
        let coefficients = remainder.coefficients();
        let parity = &mut buffer[layout.parity_region()];
        let num_zero_coefficients = ec_len - coefficients.len();
        parity[..num_zero_coefficients].fill(0);
        parity[num_zero_coefficients..].copy_from_slice(coefficients);

        Ok(())
    }
}
