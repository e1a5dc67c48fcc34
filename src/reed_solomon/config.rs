//! Field parameters for the barcode Reed-Solomon codes

use std::fmt;

/// Defining parameters of a GF(2^m) instance
///
/// Element values are bytes, so `size` is at most 256.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldConfig {
    /// Primitive polynomial as a bitmask, including the x^m term
    pub primitive: u32,
    /// Number of field elements (2^m)
    pub size: usize,
    /// Exponent of the first generator root (b in a^b, a^(b+1), ...)
    pub generator_base: usize,
}

impl FieldConfig {
    /// x^8 + x^5 + x^3 + x^2 + 1, roots starting at a^1
    pub const DATA_MATRIX: FieldConfig = FieldConfig::new(0x012D, 256, 1);
    /// x^8 + x^4 + x^3 + x^2 + 1, roots starting at a^0
    pub const QR_CODE: FieldConfig = FieldConfig::new(0x011D, 256, 0);
    /// Aztec 8-bit data words share the Data Matrix field
    pub const AZTEC_DATA_8: FieldConfig = FieldConfig::DATA_MATRIX;
    /// x^6 + x + 1
    pub const AZTEC_DATA_6: FieldConfig = FieldConfig::new(0x43, 64, 1);
    /// x^4 + x + 1, used for the Aztec mode message
    pub const AZTEC_PARAM: FieldConfig = FieldConfig::new(0x13, 16, 1);
    pub const MAXICODE: FieldConfig = FieldConfig::AZTEC_DATA_6;

    pub const fn new(primitive: u32, size: usize, generator_base: usize) -> Self {
        Self {
            primitive,
            size,
            generator_base,
        }
    }

    /// Field degree m, when `size` is a power of two
    pub fn degree(&self) -> Option<u32> {
        self.size
            .is_power_of_two()
            .then(|| self.size.trailing_zeros())
    }
}

impl fmt::Display for FieldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF(0x{:x},{})", self.primitive, self.size)
    }
}
