//! Useful algorithms related to RSA.

pub(crate) mod compare;
pub(crate) mod pad;
pub(crate) mod range;
pub(crate) mod rsa;
