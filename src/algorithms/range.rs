//! Representative range check

use num_bigint::BigUint;
use zeroize::Zeroizing;

/// Returns whether the unsigned big-endian integer `a` is strictly less than
/// the unsigned big-endian integer `n`. The two encodings may have different
/// lengths.
///
/// ```
/// use rsa_primitives::in_range;
///
/// assert!(in_range(&[0x00, 0x00, 0x05], &[0x06]));
/// assert!(!in_range(&[0x06], &[0x00, 0x06]));
/// ```
pub fn in_range(a: &[u8], n: &[u8]) -> bool {
    let a = Zeroizing::new(BigUint::from_bytes_be(a));
    let n = BigUint::from_bytes_be(n);

    *a < n
}
