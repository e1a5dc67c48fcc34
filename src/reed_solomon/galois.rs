//! Galois Field GF(2^m) arithmetic for barcode Reed-Solomon codes
//!
//! ## Primitive polynomials
//!
//! Each symbology fixes its own field:
//!
//! - **Data Matrix / Aztec 8-bit**: 0x12D (x⁸ + x⁵ + x³ + x² + 1), generator base 1
//! - **QR Code**: 0x11D (x⁸ + x⁴ + x³ + x² + 1), generator base 0
//! - **Aztec 6-bit / MaxiCode**: 0x43 (x⁶ + x + 1), generator base 1
//! - **Aztec mode message**: 0x13 (x⁴ + x + 1), generator base 1
//!
//! The generator base is the exponent of the first root of the generator
//! polynomial; it shifts both the encoder's roots and the decoder's syndromes.
//!
//! Fields are immutable once built and are shared by reference, so one table
//! serves any number of encoders and decoders on any number of threads.

use super::config::FieldConfig;
use super::error::{Result, RsError};
use super::polynomial::Polynomial;
use log::debug;
use std::fmt;
use std::sync::OnceLock;

/// Exp/log tables for one GF(2^m) instance
pub struct GaloisField {
    config: FieldConfig,
    exp_table: Vec<u8>,
    log_table: Vec<u8>,
}

impl GaloisField {
    /// Build a field, rejecting parameters that do not describe a primitive GF(2^m)
    pub fn new(config: FieldConfig) -> Result<Self> {
        let invalid = |reason| RsError::InvalidField { config, reason };

        if !config.size.is_power_of_two() || !(2..=256).contains(&config.size) {
            return Err(invalid("size must be a power of two between 2 and 256"));
        }
        let primitive = config.primitive as usize;
        if primitive < config.size || primitive >= config.size * 2 {
            return Err(invalid("primitive polynomial degree does not match field size"));
        }

        let field = Self::build(config);

        // A primitive polynomial walks every nonzero element before returning to 1
        let mut seen = vec![false; config.size];
        for &value in &field.exp_table[..config.size - 1] {
            if value == 0 || seen[value as usize] {
                return Err(invalid("polynomial is not primitive"));
            }
            seen[value as usize] = true;
        }

        Ok(field)
    }

    /// Build tables without validation, for the known-good presets
    fn build(config: FieldConfig) -> Self {
        let size = config.size;
        let mut field = GaloisField {
            config,
            exp_table: vec![0; size],
            log_table: vec![0; size],
        };
        field.build_tables();
        field
    }

    fn build_tables(&mut self) {
        let size = self.config.size;
        let mut x = 1usize;

        for i in 0..size {
            self.exp_table[i] = x as u8;

            x <<= 1;
            if x >= size {
                x ^= self.config.primitive as usize;
                x &= size - 1;
            }
        }

        for i in 0..size - 1 {
            self.log_table[self.exp_table[i] as usize] = i as u8;
        }
        // log(0) is undefined; the slot stays 0 and is never read
    }

    pub fn config(&self) -> FieldConfig {
        self.config
    }

    pub fn primitive(&self) -> u32 {
        self.config.primitive
    }

    pub fn size(&self) -> usize {
        self.config.size
    }

    pub fn generator_base(&self) -> usize {
        self.config.generator_base
    }

    /// Whether `value` is an element of this field
    #[inline]
    pub fn contains(&self, value: u8) -> bool {
        (value as usize) < self.config.size
    }

    /// Reject buffers holding bytes that are not field elements
    pub fn check_symbols(&self, symbols: &[u8]) -> Result<()> {
        match symbols.iter().position(|&value| !self.contains(value)) {
            Some(position) => Err(RsError::SymbolOutOfRange {
                position,
                value: symbols[position],
                size: self.config.size,
            }),
            None => Ok(()),
        }
    }

    /// Add two elements - XOR, which is also subtraction in characteristic 2
    #[inline]
    pub fn add_or_subtract(a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// a^i where a is the primitive element; `i` wraps with period size - 1
    #[inline]
    pub fn exp(&self, i: usize) -> u8 {
        self.exp_table[i % (self.config.size - 1)]
    }

    /// Discrete logarithm base a
    ///
    /// # Panics
    /// If `a` is not an element of the field.
    #[inline]
    pub fn log(&self, a: u8) -> Result<usize> {
        if a == 0 {
            return Err(RsError::LogOfZero);
        }
        Ok(self.log_table[a as usize] as usize)
    }

    /// Multiplicative inverse
    ///
    /// # Panics
    /// If `a` is not an element of the field.
    #[inline]
    pub fn inverse(&self, a: u8) -> Result<u8> {
        if a == 0 {
            return Err(RsError::InverseOfZero);
        }
        let order = self.config.size - 1;
        Ok(self.exp_table[(order - self.log_table[a as usize] as usize) % order])
    }

    /// Product of two elements
    ///
    /// # Panics
    /// If either operand is not an element of the field.
    #[inline]
    pub fn multiply(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_sum =
            self.log_table[a as usize] as usize + self.log_table[b as usize] as usize;
        self.exp_table[log_sum % (self.config.size - 1)]
    }

    /// The polynomial `coefficient * x^degree`
    pub fn build_monomial(&self, degree: usize, coefficient: u8) -> Polynomial<'_> {
        if coefficient == 0 {
            return self.zero();
        }
        let mut coefficients = vec![0u8; degree + 1];
        coefficients[0] = coefficient;
        Polynomial::new(self, coefficients)
    }

    pub fn zero(&self) -> Polynomial<'_> {
        Polynomial::new(self, vec![0])
    }

    pub fn one(&self) -> Polynomial<'_> {
        Polynomial::new(self, vec![1])
    }
}

impl PartialEq for GaloisField {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl Eq for GaloisField {}

impl fmt::Debug for GaloisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GaloisField")
            .field("primitive", &format_args!("0x{:x}", self.config.primitive))
            .field("size", &self.config.size)
            .field("generator_base", &self.config.generator_base)
            .finish()
    }
}

impl fmt::Display for GaloisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.config, f)
    }
}

/// Build a field from raw parameters
pub fn make_field(primitive: u32, size: usize, generator_base: usize) -> Result<GaloisField> {
    GaloisField::new(FieldConfig::new(primitive, size, generator_base))
}

fn preset(cell: &'static OnceLock<GaloisField>, config: FieldConfig) -> &'static GaloisField {
    cell.get_or_init(|| {
        debug!("Building {} tables (generator base {})", config, config.generator_base);
        GaloisField::build(config)
    })
}

/// Data Matrix field, also used for 8-bit Aztec data words
pub fn data_matrix_field() -> &'static GaloisField {
    static FIELD: OnceLock<GaloisField> = OnceLock::new();
    preset(&FIELD, FieldConfig::DATA_MATRIX)
}

/// QR Code field
pub fn qr_code_field() -> &'static GaloisField {
    static FIELD: OnceLock<GaloisField> = OnceLock::new();
    preset(&FIELD, FieldConfig::QR_CODE)
}

pub fn aztec_data_8_field() -> &'static GaloisField {
    data_matrix_field()
}

/// Aztec 6-bit data words
pub fn aztec_data_6_field() -> &'static GaloisField {
    static FIELD: OnceLock<GaloisField> = OnceLock::new();
    preset(&FIELD, FieldConfig::AZTEC_DATA_6)
}

/// Aztec mode message (4-bit words)
pub fn aztec_param_field() -> &'static GaloisField {
    static FIELD: OnceLock<GaloisField> = OnceLock::new();
    preset(&FIELD, FieldConfig::AZTEC_PARAM)
}

pub fn maxicode_field() -> &'static GaloisField {
    aztec_data_6_field()
}
