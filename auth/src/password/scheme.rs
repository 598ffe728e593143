use serde::Deserialize;
use serde::Serialize;

use super::argon2::PasswordHasher;
use super::errors::PasswordError;

/// How account passwords are stored and compared.
///
/// Both schemes accept exactly the same passwords: a candidate matches only if
/// it is byte-for-byte the password given at signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordScheme {
    /// Argon2id PHC strings.
    #[default]
    Argon2,

    /// The password itself is stored and compared with string equality.
    ///
    /// Compatibility mode for data imported from plaintext stores. Never
    /// enable this for new deployments.
    Plaintext,
}

impl PasswordScheme {
    /// Turn a plaintext password into the value to persist.
    ///
    /// # Errors
    /// * `HashingFailed` - Argon2 hashing failed
    pub fn seal(&self, password: &str) -> Result<String, PasswordError> {
        match self {
            PasswordScheme::Argon2 => PasswordHasher::new().hash(password),
            PasswordScheme::Plaintext => Ok(password.to_string()),
        }
    }

    /// Check a candidate password against a persisted value.
    ///
    /// # Errors
    /// * `VerificationFailed` - Stored value is not a valid PHC string (Argon2 only)
    pub fn matches(&self, candidate: &str, stored: &str) -> Result<bool, PasswordError> {
        match self {
            PasswordScheme::Argon2 => PasswordHasher::new().verify(candidate, stored),
            PasswordScheme::Plaintext => Ok(candidate == stored),
        }
    }
}
