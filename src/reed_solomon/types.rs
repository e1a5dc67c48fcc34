//! Types and structures for Reed-Solomon operations

use super::error::{Result, RsError};
use std::ops::Range;

/// Split of a codeword buffer into its data and parity regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodewordLayout {
    pub data_len: usize,
    pub ec_len: usize,
}

impl CodewordLayout {
    /// Layout for a buffer of `buffer_len` bytes ending in `ec_len` parity bytes
    pub fn new(buffer_len: usize, ec_len: usize) -> Result<Self> {
        if ec_len == 0 {
            return Err(RsError::ZeroParityLength);
        }
        match buffer_len.checked_sub(ec_len) {
            Some(data_len) if data_len > 0 => Ok(Self { data_len, ec_len }),
            _ => Err(RsError::NoDataRegion { buffer_len, ec_len }),
        }
    }

    pub fn total_len(&self) -> usize {
        self.data_len + self.ec_len
    }

    pub fn data_region(&self) -> Range<usize> {
        0..self.data_len
    }

    pub fn parity_region(&self) -> Range<usize> {
        self.data_len..self.total_len()
    }

    /// Number of corrupted symbols the parity is guaranteed to correct
    pub fn correction_capacity(&self) -> usize {
        self.ec_len / 2
    }
}
