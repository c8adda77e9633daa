//! Raw RSA signatures as described in [RFC8017 § 5.2].
//!
//! The message is a representative the caller has already encoded to the
//! modulus width; no hashing or padding happens here.
//!
//! [RFC8017 § 5.2]: https://datatracker.ietf.org/doc/html/rfc8017#section-5.2

use alloc::vec::Vec;
use log::debug;
use zeroize::Zeroizing;

use crate::algorithms::compare::compare;
use crate::errors::{Error, Result};
use crate::hazmat::{rsasp1, rsavp1};
use crate::key::Mode;
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// Signs the representative `m`, writing the signature to the front of
/// `out` and returning its length. Same contract as [`rsasp1`].
#[inline]
pub fn sign<K: PrivateKeyParts + ?Sized>(
    key: &K,
    m: &[u8],
    out: &mut [u8],
    mode: Mode,
) -> Result<usize> {
    rsasp1(key, m, out, mode)
}

/// Verifies a raw signature.
///
/// `sig` must be exactly as long as the modulus. The representative
/// recovered from `sig` is compared with `m` as big-endian integers, so `m`
/// may carry more or fewer leading zero bytes than the recovered value.
///
/// Returns [`Error::Verification`] when the signature is well-formed but does
/// not match `m`, and [`Error::Resource`] when the scratch buffer for the
/// recovered value cannot be allocated.
pub fn verify<K: PublicKeyParts + ?Sized>(key: &K, m: &[u8], sig: &[u8]) -> Result<()> {
    if key.size() != sig.len() {
        debug!("rejected: signature length does not match modulus");
        return Err(Error::Parameter("signature length does not match modulus"));
    }

    let mut em = Zeroizing::new(Vec::new());
    em.try_reserve_exact(sig.len())?;
    em.resize(sig.len(), 0u8);

    let len = rsavp1(key, sig, &mut em)?;

    if compare(&em[..len], m, true) {
        Ok(())
    } else {
        Err(Error::Verification)
    }
}
