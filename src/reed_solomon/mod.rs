//! Reed-Solomon Error Correction Module
//!
//! This module provides the Reed-Solomon codes used by 2D barcode symbologies
//! (QR Code, Data Matrix, Aztec, MaxiCode). All of them work over small binary
//! fields GF(2^m) and store one field element per byte.
//!
//! A codeword is the message bytes followed by `ec_len` parity bytes. The
//! [`Encoder`] fills in the parity; the [`Decoder`] corrects up to `ec_len / 2`
//! corrupted bytes anywhere in the codeword.

pub mod blocks;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod galois;
pub mod polynomial;
pub mod types;

pub use blocks::{decode_blocks, encode_blocks};
pub use config::FieldConfig;
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{DecodeFailure, ErrorKind, Result, RsError};
pub use galois::*;
pub use polynomial::Polynomial;
pub use types::CodewordLayout;
