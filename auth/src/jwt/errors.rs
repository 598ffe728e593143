use thiserror::Error;

/// Error type for JWT operations.
///
/// Verification failures keep their specific cause so callers can log it.
/// Anything facing a client should collapse them into a single "unauthorized".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token signature does not match")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Missing required claim: {0}")]
    MissingClaim(String),
}
