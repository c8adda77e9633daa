use alloc::vec::Vec;
use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::{Error, Result};
use crate::hazmat::{rsadp, rsaep};
use crate::signature::{sign, verify};
use crate::traits::{ModulusParts, PrivateKeyParts, PublicKeyParts};

/// Modulus widths accepted by the primitives.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ModulusSize {
    /// 1024-bit modulus, 128 bytes.
    Rsa1024,
    /// 2048-bit modulus, 256 bytes.
    Rsa2048,
    /// 3072-bit modulus, 384 bytes.
    Rsa3072,
    /// 4096-bit modulus, 512 bytes.
    Rsa4096,
}

impl ModulusSize {
    /// Looks up the width for a modulus of `len` bytes.
    pub const fn from_len(len: usize) -> Option<Self> {
        match len {
            128 => Some(Self::Rsa1024),
            256 => Some(Self::Rsa2048),
            384 => Some(Self::Rsa3072),
            512 => Some(Self::Rsa4096),
            _ => None,
        }
    }

    /// Modulus width in bytes.
    pub const fn len(self) -> usize {
        match self {
            Self::Rsa1024 => 128,
            Self::Rsa2048 => 256,
            Self::Rsa3072 => 384,
            Self::Rsa4096 => 512,
        }
    }

    /// Modulus width in bits.
    pub const fn bits(self) -> usize {
        self.len() * 8
    }
}

impl TryFrom<usize> for ModulusSize {
    type Error = Error;

    fn try_from(len: usize) -> Result<Self> {
        Self::from_len(len).ok_or(Error::Parameter("unsupported modulus size"))
    }
}

/// How the private-key primitives compute `c^d mod n`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Mode {
    /// Single exponentiation with the private exponent `d`.
    #[default]
    Direct,
    /// Two half-size exponentiations recombined with the CRT quintuple.
    Crt,
}

/// The CRT quintuple `(p, q, dP, dQ, qInv)` of a two-prime RSA key.
///
/// Every component is a big-endian byte string. The private-key primitives
/// require each of them to be exactly half the modulus width.
#[derive(Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CrtComponents {
    #[cfg_attr(feature = "serde", serde(with = "hex_or_bin"))]
    p: Vec<u8>,
    #[cfg_attr(feature = "serde", serde(with = "hex_or_bin"))]
    q: Vec<u8>,
    #[cfg_attr(feature = "serde", serde(with = "hex_or_bin"))]
    dp: Vec<u8>,
    #[cfg_attr(feature = "serde", serde(with = "hex_or_bin"))]
    dq: Vec<u8>,
    #[cfg_attr(feature = "serde", serde(with = "hex_or_bin"))]
    qinv: Vec<u8>,
}

impl CrtComponents {
    /// Bundles the primes `p`, `q`, the exponents `dP = d mod (p-1)`,
    /// `dQ = d mod (q-1)` and the coefficient `qInv = q^-1 mod p`.
    pub fn new(p: Vec<u8>, q: Vec<u8>, dp: Vec<u8>, dq: Vec<u8>, qinv: Vec<u8>) -> Self {
        Self {
            p,
            q,
            dp,
            dq,
            qinv,
        }
    }

    /// First prime factor.
    pub fn p(&self) -> &[u8] {
        &self.p
    }

    /// Second prime factor.
    pub fn q(&self) -> &[u8] {
        &self.q
    }

    /// `d mod (p-1)`
    pub fn dp(&self) -> &[u8] {
        &self.dp
    }

    /// `d mod (q-1)`
    pub fn dq(&self) -> &[u8] {
        &self.dq
    }

    /// `q^-1 mod p`
    pub fn qinv(&self) -> &[u8] {
        &self.qinv
    }

    /// Whether every component is exactly `len` bytes long.
    pub(crate) fn all_of_len(&self, len: usize) -> bool {
        [&self.p, &self.q, &self.dp, &self.dq, &self.qinv]
            .iter()
            .all(|c| c.len() == len)
    }
}

impl fmt::Debug for CrtComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrtComponents").finish_non_exhaustive()
    }
}

impl Zeroize for CrtComponents {
    fn zeroize(&mut self) {
        self.p.zeroize();
        self.q.zeroize();
        self.dp.zeroize();
        self.dq.zeroize();
        self.qinv.zeroize();
    }
}

impl Drop for CrtComponents {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for CrtComponents {}

/// Represents the public part of an RSA key.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RsaPublicKey {
    /// Modulus: product of prime numbers `p` and `q`
    #[cfg_attr(feature = "serde", serde(with = "hex_or_bin"))]
    n: Vec<u8>,
    /// Public exponent: power to which a plaintext message is raised in
    /// order to encrypt it.
    ///
    /// Typically 0x10001 (65537)
    #[cfg_attr(feature = "serde", serde(with = "hex_or_bin"))]
    e: Vec<u8>,
}

impl RsaPublicKey {
    /// Create a new public key from its big-endian components.
    ///
    /// No validation happens here; the primitives check every length
    /// relationship when the key is used.
    pub fn new(n: Vec<u8>, e: Vec<u8>) -> Self {
        Self { n, e }
    }

    /// RSAEP: raw encryption of the representative `m` into `out`.
    ///
    /// See [`rsaep`] for the exact preconditions.
    pub fn encrypt_raw(&self, m: &[u8], out: &mut [u8]) -> Result<usize> {
        rsaep(self, m, out)
    }

    /// Verify a raw signature over the representative `m`.
    ///
    /// See [`verify`] for the exact preconditions.
    pub fn verify(&self, m: &[u8], sig: &[u8]) -> Result<()> {
        verify(self, m, sig)
    }
}

impl ModulusParts for RsaPublicKey {
    fn n(&self) -> &[u8] {
        &self.n
    }
}

impl PublicKeyParts for RsaPublicKey {
    fn e(&self) -> &[u8] {
        &self.e
    }
}

/// Represents a whole RSA key, public and private parts.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RsaPrivateKey {
    /// Modulus
    #[cfg_attr(feature = "serde", serde(with = "hex_or_bin"))]
    n: Vec<u8>,
    /// Private exponent
    #[cfg_attr(feature = "serde", serde(with = "hex_or_bin"))]
    d: Vec<u8>,
    /// CRT quintuple, when the key was constructed with one.
    crt: Option<CrtComponents>,
}

impl RsaPrivateKey {
    /// Constructs an RSA key pair from the modulus, the private exponent and
    /// optionally the CRT quintuple.
    ///
    /// The same key can be used with either [`Mode`]; whether the chosen
    /// mode is usable is decided per call.
    pub fn from_components(n: Vec<u8>, d: Vec<u8>, crt: Option<CrtComponents>) -> Self {
        Self { n, d, crt }
    }

    /// Get the public key from the private key, cloning `n` and taking `e`,
    /// which the private key does not carry.
    pub fn to_public_key(&self, e: Vec<u8>) -> RsaPublicKey {
        RsaPublicKey::new(self.n.clone(), e)
    }

    /// RSADP: raw decryption of the representative `c` into `out`.
    ///
    /// See [`rsadp`] for the exact preconditions.
    pub fn decrypt_raw(&self, c: &[u8], out: &mut [u8], mode: Mode) -> Result<usize> {
        rsadp(self, c, out, mode)
    }

    /// Raw signature over the representative `m`.
    ///
    /// See [`sign`] for the exact preconditions.
    pub fn sign(&self, m: &[u8], out: &mut [u8], mode: Mode) -> Result<usize> {
        sign(self, m, out, mode)
    }
}

impl ModulusParts for RsaPrivateKey {
    fn n(&self) -> &[u8] {
        &self.n
    }
}

impl PrivateKeyParts for RsaPrivateKey {
    fn d(&self) -> &[u8] {
        &self.d
    }

    fn crt(&self) -> Option<&CrtComponents> {
        self.crt.as_ref()
    }
}

impl fmt::Debug for RsaPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaPrivateKey")
            .field("size", &self.n.len())
            .field("crt", &self.crt.is_some())
            .finish_non_exhaustive()
    }
}

impl Zeroize for RsaPrivateKey {
    fn zeroize(&mut self) {
        self.d.zeroize();
        if let Some(crt) = self.crt.as_mut() {
            crt.zeroize();
        }
    }
}

impl Drop for RsaPrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for RsaPrivateKey {}

#[cfg(feature = "serde")]
mod hex_or_bin {
    use alloc::vec::Vec;
    use serdect::serde::{Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serdect::slice::serialize_hex_lower_or_bin(&bytes, serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        serdect::slice::deserialize_hex_or_bin_vec(deserializer)
    }
}
