//! Reed-Solomon error correction for 2D barcodes
//!
//! ```
//! use rsecc::{data_matrix_field, Decoder, Encoder};
//!
//! let field = data_matrix_field();
//! let mut codeword = [142, 164, 186, 0, 0, 0, 0, 0];
//! Encoder::new(field).encode(&mut codeword, 5)?;
//! assert_eq!(&codeword[3..], &[114, 25, 5, 88, 102]);
//!
//! codeword[0] = 0;
//! codeword[6] ^= 0x10;
//! assert_eq!(Decoder::new(field).decode(&mut codeword, 5)?, 2);
//! assert_eq!(codeword[0], 142);
//! # Ok::<(), rsecc::RsError>(())
//! ```

pub mod reed_solomon;

pub use reed_solomon::*;
