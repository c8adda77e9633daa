//! Special handling for converting the BigUint to u8 vectors

use alloc::vec::Vec;
use num_bigint::BigUint;
use zeroize::Zeroizing;

use crate::errors::{Error, Result};

/// Returns a new vector of the given length, with 0s left padded.
///
/// The primitives emit the minimal encoding of their result; this widens it
/// back to the modulus width.
///
/// ```
/// use rsa_primitives::left_pad;
///
/// assert_eq!(left_pad(&[0xab], 3).unwrap(), [0x00, 0x00, 0xab]);
/// assert!(left_pad(&[0xab, 0xcd], 1).is_err());
/// ```
#[inline]
pub fn left_pad(input: &[u8], padded_len: usize) -> Result<Vec<u8>> {
    if input.len() > padded_len {
        return Err(Error::Parameter("input longer than padded length"));
    }

    let mut out = vec![0u8; padded_len];
    out[padded_len - input.len()..].copy_from_slice(input);
    Ok(out)
}

/// Writes the minimal big-endian encoding of `input` to the front of `out`
/// and returns its length. Zero encodes as a single `0x00` byte.
#[inline]
pub(crate) fn write_be(input: &BigUint, out: &mut [u8]) -> Result<usize> {
    let bytes = Zeroizing::new(input.to_bytes_be());
    out.get_mut(..bytes.len())
        .ok_or(Error::Internal)?
        .copy_from_slice(&bytes);
    Ok(bytes.len())
}
