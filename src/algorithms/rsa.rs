//! Generic RSA implementation

use core::mem;
use log::trace;
use num_bigint::{BigUint, IntoBigInt, IntoBigUint, ToBigInt};
use num_traits::{Signed, Zero};
use zeroize::Zeroizing;

use crate::errors::{Error, Result};
use crate::key::{CrtComponents, Mode};
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// Raw RSA encryption of m with the public key. No padding is performed.
///
/// `m` must already be known to be smaller than the modulus.
#[inline]
pub(crate) fn rsa_encrypt<K: PublicKeyParts + ?Sized>(key: &K, m: &BigUint) -> Result<BigUint> {
    let n = BigUint::from_bytes_be(key.n());
    if n.is_zero() {
        return Err(Error::Internal);
    }
    let e = BigUint::from_bytes_be(key.e());

    Ok(m.modpow(&e, &n))
}

/// Performs raw RSA decryption with no padding, resulting in a plaintext `BigUint`.
///
/// `c` must already be known to be smaller than the modulus.
#[inline]
pub(crate) fn rsa_decrypt<K: PrivateKeyParts + ?Sized>(
    key: &K,
    c: &BigUint,
    mode: Mode,
) -> Result<BigUint> {
    match mode {
        Mode::Direct => {
            let n = BigUint::from_bytes_be(key.n());
            if n.is_zero() {
                return Err(Error::Internal);
            }
            let d = Zeroizing::new(BigUint::from_bytes_be(key.d()));

            Ok(c.modpow(&d, &n))
        }
        Mode::Crt => {
            let crt = key
                .crt()
                .ok_or(Error::Parameter("key has no CRT components"))?;
            rsa_decrypt_crt(crt, c)
        }
    }
}

/// RFC 8017 § 5.1.2 step 2.b for a two-prime key.
fn rsa_decrypt_crt(crt: &CrtComponents, c: &BigUint) -> Result<BigUint> {
    let p = Zeroizing::new(BigUint::from_bytes_be(crt.p()));
    let q = Zeroizing::new(BigUint::from_bytes_be(crt.q()));
    if p.is_zero() || q.is_zero() {
        return Err(Error::Internal);
    }
    let dp = Zeroizing::new(BigUint::from_bytes_be(crt.dp()));
    let dq = Zeroizing::new(BigUint::from_bytes_be(crt.dq()));
    let qinv = Zeroizing::new(
        BigUint::from_bytes_be(crt.qinv())
            .into_bigint()
            .ok_or(Error::Internal)?,
    );

    // m_1 = c^dP mod p, m_2 = c^dQ mod q
    let mut m = Zeroizing::new(c.modpow(&dp, &p).into_bigint().ok_or(Error::Internal)?);
    let m2 = Zeroizing::new(c.modpow(&dq, &q).into_bigint().ok_or(Error::Internal)?);

    let p = Zeroizing::new(p.to_bigint().ok_or(Error::Internal)?);
    let q = Zeroizing::new(q.to_bigint().ok_or(Error::Internal)?);

    // m_1 < p and m_2 < q, so m_1 - m_2 can go negative. The product with
    // qInv below must be reduced from a non-negative value.
    *m -= &*m2;
    let mut rounds = 0usize;
    while m.is_negative() {
        *m += &*p;
        rounds += 1;
    }
    trace!("crt: {} correction round(s)", rounds);

    // h = (m_1 - m_2) * qInv mod p
    *m *= &*qinv;
    *m %= &*p;

    // m = m_2 + q * h
    *m *= &*q;
    *m += &*m2;

    mem::take(&mut *m).into_biguint().ok_or(Error::Internal)
}
