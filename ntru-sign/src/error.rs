use ntru_core::encode::EncodeError;
use thiserror::Error;

/// Errors surfaced by basis generation and key encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignError {
    /// No coprime (f, g) pair was found within the retry cap.
    #[error("key generation failed to find a coprime basis")]
    KeygenFailure,
    /// A key encoding could not be decoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}
