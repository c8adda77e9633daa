//! Error types.

/// Alias for [`core::result::Result`] with the `rsa-primitives` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A buffer length, modulus width or key field length is not acceptable.
    #[error("invalid parameter: {0}")]
    Parameter(&'static str),

    /// Representative is not in `[0, n)`.
    #[error("representative out of range")]
    OutOfRange,

    /// Signature recovered but does not match the expected message.
    #[error("verification error")]
    Verification,

    /// Scratch buffer could not be allocated.
    #[error("resource exhausted")]
    Resource,

    /// Internal error.
    #[error("internal error")]
    Internal,
}

impl From<alloc::collections::TryReserveError> for Error {
    fn from(_err: alloc::collections::TryReserveError) -> Error {
        Error::Resource
    }
}
