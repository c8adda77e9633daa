//! Equality of big-endian integer encodings

use subtle::{Choice, ConstantTimeEq};

/// Compares two byte strings.
///
/// Strings of the same length are equal when they are identical. When the
/// lengths differ they are unequal, unless `zero_fill` is set: then they are
/// equal when the surplus leading bytes of the longer string are all `0x00`
/// and the remaining bytes match the shorter one, i.e. when both are
/// big-endian encodings of the same integer. An empty string encodes zero.
///
/// ```
/// use rsa_primitives::compare;
///
/// assert!(compare(&[0x00, 0x01], &[0x01], true));
/// assert!(!compare(&[0x00, 0x01], &[0x01], false));
/// assert!(!compare(&[0x00, 0x02], &[0x01], true));
/// ```
pub fn compare(left: &[u8], right: &[u8], zero_fill: bool) -> bool {
    if left.len() == right.len() {
        return left.ct_eq(right).into();
    }

    if !zero_fill {
        return false;
    }

    let (longer, shorter) = if left.len() > right.len() {
        (left, right)
    } else {
        (right, left)
    };
    let (pad, rest) = longer.split_at(longer.len() - shorter.len());

    let pad_is_zero = pad
        .iter()
        .fold(Choice::from(1u8), |acc, b| acc & b.ct_eq(&0u8));

    (pad_is_zero & rest.ct_eq(shorter)).into()
}
