#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo_small.png")]
#![warn(missing_docs)]

//! # Supported primitives
//!
//! This crate implements the RSA primitives described in [RFC8017 § 5]:
//!
//! - [RSAEP](hazmat::rsaep): `c = m^e mod n`
//! - [RSADP](hazmat::rsadp): `m = c^d mod n`, either directly or through the
//!   Chinese Remainder Theorem
//! - [RSASP1](hazmat::rsasp1) / [RSAVP1](hazmat::rsavp1): the same two
//!   operations viewed as signature generation and recovery
//!
//! together with a raw [`sign`] / [`verify`] pair built on them.
//!
//! No padding is applied. Representatives are unsigned big-endian byte
//! strings whose length equals the modulus width, and only 1024, 2048, 3072
//! and 4096-bit moduli are accepted.
//!
//! # Usage
//!
//! ```
//! use rsa_primitives::{Error, Mode, RsaPrivateKey, RsaPublicKey};
//!
//! // A 100 byte modulus is not a supported width.
//! let public_key = RsaPublicKey::new(vec![0xff; 100], vec![0x01, 0x00, 0x01]);
//! let mut out = [0u8; 100];
//! assert_eq!(
//!     public_key.encrypt_raw(&[0u8; 100], &mut out),
//!     Err(Error::Parameter("unsupported modulus size"))
//! );
//!
//! let private_key = RsaPrivateKey::from_components(vec![0xff; 100], vec![0x03; 100], None);
//! assert!(matches!(
//!     private_key.decrypt_raw(&[0u8; 100], &mut out, Mode::Direct),
//!     Err(Error::Parameter(_))
//! ));
//! ```
//!
//! Outputs are written to the front of the caller's buffer as the minimal
//! big-endian encoding of the result. Use [`left_pad`] when a fixed-width
//! encoding is needed, or [`compare`] with `zero_fill` set to compare two
//! encodings of different widths.
//!
//! [RFC8017 § 5]: https://datatracker.ietf.org/doc/html/rfc8017#section-5

#[cfg(doctest)]
pub struct ReadmeDoctests;

#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use num_bigint::BigUint;

mod algorithms;
pub mod errors;
pub mod hazmat;
pub mod signature;
pub mod traits;

mod key;

pub use crate::{
    algorithms::{compare::compare, pad::left_pad, range::in_range},
    errors::{Error, Result},
    key::{CrtComponents, Mode, ModulusSize, RsaPrivateKey, RsaPublicKey},
    signature::{sign, verify},
};
