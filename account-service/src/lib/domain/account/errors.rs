use auth::JwtError;
use auth::PasswordError;
use thiserror::Error;

/// Error for AccountId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error(
        "Username contains invalid characters (only alphanumeric, underscore, and hyphen allowed)"
    )]
    InvalidCharacters,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for avatar payload validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AvatarError {
    #[error("Avatar payload is empty")]
    Empty,

    #[error("Avatar payload is not valid base64: {0}")]
    InvalidBase64(String),
}

/// Top-level error for account and session operations
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid avatar: {0}")]
    InvalidAvatar(#[from] AvatarError),

    // Domain-level errors
    #[error("Account not found: {0}")]
    NotFound(String),

    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    // Token errors; the inner cause is for logs only
    #[error("Missing token")]
    MissingToken,

    #[error("Invalid token: {0}")]
    InvalidToken(JwtError),

    #[error("Token is no longer the current session of its account")]
    SessionSuperseded,

    // Infrastructure errors
    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),

    #[error("Credential error: {0}")]
    Credential(#[from] PasswordError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl AccountError {
    /// True for every failure that must reach a client as a plain "unauthorized".
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            AccountError::MissingToken
                | AccountError::InvalidToken(_)
                | AccountError::SessionSuperseded
                | AccountError::InvalidCredentials
        )
    }
}
