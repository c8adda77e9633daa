//! ⚠️ Low-level "hazmat" RSA primitives.
//!
//! # ☢️️ WARNING: HAZARDOUS API ☢️
//!
//! This module holds the RSA primitives of [RFC8017 § 5] applied to raw
//! representatives without adding or removing any padding. A well-reviewed
//! padding scheme is crucial to the security of RSA; these functions are the
//! building blocks such schemes are implemented on.
//!
//! Every primitive checks, in this order:
//!
//! 1. the modulus is 128, 256, 384 or 512 bytes,
//! 2. the input and output buffer lengths and the key field lengths,
//! 3. the input representative is smaller than the modulus,
//!
//! and only then touches the big integer arithmetic. Steps 1 and 2 fail with
//! [`Error::Parameter`], step 3 with [`Error::OutOfRange`]. Nothing is
//! written to the output buffer unless the call succeeds.
//!
//! [RFC8017 § 5]: https://datatracker.ietf.org/doc/html/rfc8017#section-5

use log::{debug, trace};
use num_bigint::BigUint;
use zeroize::Zeroizing;

use crate::algorithms::pad::write_be;
use crate::algorithms::range::in_range;
use crate::algorithms::rsa::{rsa_decrypt, rsa_encrypt};
use crate::errors::{Error, Result};
use crate::key::{Mode, ModulusSize};
use crate::traits::{PrivateKeyParts, PublicKeyParts};

#[inline]
fn reject(reason: &'static str) -> Error {
    debug!("rejected: {}", reason);
    Error::Parameter(reason)
}

#[inline]
fn check_range(rep: &[u8], n: &[u8]) -> Result<()> {
    if in_range(rep, n) {
        Ok(())
    } else {
        debug!("rejected: representative out of range");
        Err(Error::OutOfRange)
    }
}

#[inline]
fn modulus_size(n: &[u8]) -> Result<ModulusSize> {
    ModulusSize::from_len(n.len()).ok_or_else(|| reject("unsupported modulus size"))
}

/// ⚠️ RSAEP: `c = m^e mod n`.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// Use this function with great care! Raw RSA should never be used without an appropriate padding
/// or signature scheme. See the [module-level documentation][crate::hazmat] for more information.
///
/// `m` and `out` must both be exactly as long as the modulus, and the public
/// exponent must be non-empty and no longer than the modulus. On success the
/// minimal big-endian encoding of `c` is written to the front of `out` and
/// its length returned; it is shorter than the modulus when the leading
/// bytes of `c` are zero.
pub fn rsaep<K: PublicKeyParts + ?Sized>(key: &K, m: &[u8], out: &mut [u8]) -> Result<usize> {
    let size = modulus_size(key.n())?;
    let k = size.len();
    trace!("rsaep: {} bit modulus", size.bits());

    if m.len() != k {
        return Err(reject("message representative length does not match modulus"));
    }
    if out.len() != k {
        return Err(reject("output length does not match modulus"));
    }
    if key.e().is_empty() || key.e().len() > k {
        return Err(reject("invalid public exponent length"));
    }
    check_range(m, key.n())?;

    let m = Zeroizing::new(BigUint::from_bytes_be(m));
    let c = rsa_encrypt(key, &m)?;

    write_be(&c, out)
}

/// ⚠️ RSADP: `m = c^d mod n`, computed directly or through the CRT.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// Use this function with great care! Raw RSA should never be used without an appropriate padding
/// or signature scheme. See the [module-level documentation][crate::hazmat] for more information.
///
/// `c` and `out` must both be exactly as long as the modulus. With
/// [`Mode::Direct`] the private exponent must be as long as the modulus; with
/// [`Mode::Crt`] the key must carry CRT components, each exactly half as long
/// as the modulus. On success the minimal big-endian encoding of `m` is
/// written to the front of `out` and its length returned.
pub fn rsadp<K: PrivateKeyParts + ?Sized>(
    key: &K,
    c: &[u8],
    out: &mut [u8],
    mode: Mode,
) -> Result<usize> {
    let size = modulus_size(key.n())?;
    let k = size.len();
    trace!("rsadp: {} bit modulus, {:?}", size.bits(), mode);

    if c.len() != k {
        return Err(reject("ciphertext representative length does not match modulus"));
    }
    if out.len() != k {
        return Err(reject("output length does not match modulus"));
    }
    match mode {
        Mode::Direct if key.d().len() != k => {
            return Err(reject("private exponent length does not match modulus"));
        }
        Mode::Crt => match key.crt() {
            Some(crt) if crt.all_of_len(k / 2) => {}
            Some(_) => return Err(reject("CRT component length is not half the modulus")),
            None => return Err(reject("key has no CRT components")),
        },
        Mode::Direct => {}
    }
    check_range(c, key.n())?;

    let c = Zeroizing::new(BigUint::from_bytes_be(c));
    let m = Zeroizing::new(rsa_decrypt(key, &c, mode)?);

    write_be(&m, out)
}

/// ⚠️ RSASP1: signature generation, `s = m^d mod n`.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// Use this function with great care! Raw RSA should never be used without an appropriate padding
/// or signature scheme. See the [module-level documentation][crate::hazmat] for more information.
///
/// `m` must be exactly as long as the modulus and `out` at least as long.
/// The signature is computed by [`rsadp`] into the first modulus-width bytes
/// of `out`.
pub fn rsasp1<K: PrivateKeyParts + ?Sized>(
    key: &K,
    m: &[u8],
    out: &mut [u8],
    mode: Mode,
) -> Result<usize> {
    let k = key.size();
    if m.len() != k {
        return Err(reject("message representative length does not match modulus"));
    }
    if out.len() < k {
        return Err(reject("signature buffer too small"));
    }

    rsadp(key, m, &mut out[..k], mode)
}

/// ⚠️ RSAVP1: signature recovery, `m = s^e mod n`.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// Use this function with great care! Raw RSA should never be used without an appropriate padding
/// or signature scheme. See the [module-level documentation][crate::hazmat] for more information.
///
/// `s` must be exactly as long as the modulus and `out` at least as long.
/// The message representative is recovered by [`rsaep`] into the first
/// modulus-width bytes of `out`.
pub fn rsavp1<K: PublicKeyParts + ?Sized>(key: &K, s: &[u8], out: &mut [u8]) -> Result<usize> {
    let k = key.size();
    if s.len() != k {
        return Err(reject("signature representative length does not match modulus"));
    }
    if out.len() < k {
        return Err(reject("message buffer too small"));
    }

    rsaep(key, s, &mut out[..k])
}
