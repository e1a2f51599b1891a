use ntru_core::encode::EncodeError;
use thiserror::Error;

/// Errors surfaced by the user-visible NTRUEncrypt operations. Inner
/// routines such as the inversions signal failure with an absent value
/// instead, so the retry loops never unwind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A caller-supplied value violates the parameter set.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The ciphertext failed one of the SVES consistency checks.
    #[error("invalid ciphertext: {0}")]
    InvalidCiphertext(&'static str),
    /// An encoded input ended before the expected number of bytes.
    #[error("input ends before the expected number of bytes")]
    ShortInput,
    /// No invertible private polynomial was found within the retry cap.
    #[error("key generation failed to find an invertible polynomial")]
    KeygenFailure,
    /// No well-balanced message representative was found within the
    /// retry cap.
    #[error("encryption failed to find a well-balanced message representative")]
    EncryptFailure,
}

impl From<EncodeError> for Error {
    fn from(e: EncodeError) -> Self {
        match e {
            EncodeError::ShortInput => Error::ShortInput,
            EncodeError::InvalidEncoding => {
                Error::InvalidArgument("invalid polynomial encoding")
            }
        }
    }
}
