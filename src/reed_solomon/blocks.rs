//! Parallel encode/decode of independent Reed-Solomon blocks
//!
//! Larger QR Code and Data Matrix symbols split their data into several blocks,
//! each with its own parity. The blocks share a field and parity length, so they
//! can be processed on rayon's pool with one shared encoder or decoder.

use super::decoder::Decoder;
use super::encoder::Encoder;
use super::error::Result;
use rayon::prelude::*;

/// Encode every block in parallel; stops at the first error
pub fn encode_blocks<B>(encoder: &Encoder<'_>, blocks: &mut [B], ec_len: usize) -> Result<()>
where
    B: AsMut<[u8]> + Send,
{
    // Grow the generator cache once up front instead of under contention
    encoder.prewarm(ec_len)?;
    blocks
        .par_iter_mut()
        .try_for_each(|block| encoder.encode(block.as_mut(), ec_len))
}

/// Decode every block in parallel, one result per block in input order
pub fn decode_blocks<B>(
    decoder: &Decoder<'_>,
    blocks: &mut [B],
    ec_len: usize,
) -> Vec<Result<usize>>
where
    B: AsMut<[u8]> + Send,
{
    blocks
        .par_iter_mut()
        .map(|block| decoder.decode(block.as_mut(), ec_len))
        .collect()
}
