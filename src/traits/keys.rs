//! Traits related to the key components

use crate::key::CrtComponents;

/// Modulus shared by both halves of an RSA key.
pub trait ModulusParts {
    /// Returns the big-endian modulus `n`.
    fn n(&self) -> &[u8];

    /// Returns the modulus size in bytes. Representatives, ciphertexts and
    /// signatures for this key all have this length.
    fn size(&self) -> usize {
        self.n().len()
    }
}

/// Components of an RSA public key.
pub trait PublicKeyParts: ModulusParts {
    /// Returns the big-endian public exponent `e`.
    fn e(&self) -> &[u8];
}

/// Components of an RSA private key.
pub trait PrivateKeyParts: ModulusParts {
    /// Returns the big-endian private exponent `d`.
    fn d(&self) -> &[u8];

    /// Returns the CRT quintuple, if the key carries one.
    fn crt(&self) -> Option<&CrtComponents>;
}
