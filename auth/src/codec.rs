use crate::jwt::ExpiryPolicy;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::SessionClaims;

/// Mints and verifies session tokens.
///
/// The signing key and expiry policy are fixed at construction. The codec
/// holds no per-call state and can be shared freely between tasks.
pub struct TokenCodec {
    jwt_handler: JwtHandler,
    expiry: ExpiryPolicy,
}

/// Content of a token whose signature and expiry have been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedToken {
    /// Identifier of the account the token was minted for
    pub subject: String,

    /// Expiration time (Unix timestamp)
    pub expires_at: i64,
}

impl TokenCodec {
    /// Create a new codec.
    ///
    /// # Arguments
    /// * `secret` - HS256 signing key
    /// * `expiry` - Policy for the `exp` claim of minted tokens
    pub fn new(secret: &[u8], expiry: ExpiryPolicy) -> Self {
        Self {
            jwt_handler: JwtHandler::new(secret),
            expiry,
        }
    }

    /// Mint a fresh token bound to `subject`.
    ///
    /// Every call yields a new value, even for the same subject.
    ///
    /// # Errors
    /// * `EncodingFailed` - Expiry out of range or token encoding failed
    pub fn mint(&self, subject: impl ToString) -> Result<String, JwtError> {
        let claims = SessionClaims::for_subject(subject, &self.expiry)?;
        self.jwt_handler.encode(&claims)
    }

    /// Verify a token's signature and expiry.
    ///
    /// # Errors
    /// * `InvalidSignature` - Token was not signed with this codec's key
    /// * `Expired` - Expiry claim is in the past
    /// * `Malformed` / `MissingClaim` - Token cannot be parsed as session claims
    pub fn verify(&self, token: &str) -> Result<VerifiedToken, JwtError> {
        let claims: SessionClaims = self.jwt_handler.decode(token)?;

        if claims.sub.is_empty() {
            return Err(JwtError::MissingClaim("sub".to_string()));
        }

        Ok(VerifiedToken {
            subject: claims.sub,
            expires_at: claims.exp,
        })
    }
}
