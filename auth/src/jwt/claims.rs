use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::errors::JwtError;
use super::expiry::ExpiryPolicy;

/// Claims carried by a session token.
///
/// `sub` and `exp` are the session payload. `iat` and `jti` make every minted
/// token a distinct value, even when two are issued for the same subject within
/// the same second under the far-future policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// Subject (account identifier)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Token identifier
    pub jti: String,
}

impl SessionClaims {
    /// Create claims for a subject, issued now.
    ///
    /// # Arguments
    /// * `subject` - Account identifier the token is bound to
    /// * `expiry` - Policy deciding the `exp` claim
    ///
    /// # Returns
    /// Claims with sub, exp, iat and a random jti set
    ///
    /// # Errors
    /// * `EncodingFailed` - The expiry cannot be represented
    pub fn for_subject(subject: impl ToString, expiry: &ExpiryPolicy) -> Result<Self, JwtError> {
        Self::issued_at(subject, expiry, Utc::now())
    }

    /// Create claims for a subject with an explicit issue time.
    pub fn issued_at(
        subject: impl ToString,
        expiry: &ExpiryPolicy,
        now: DateTime<Utc>,
    ) -> Result<Self, JwtError> {
        Ok(Self {
            sub: subject.to_string(),
            exp: expiry.expires_at(now)?,
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_for_subject_sets_all_claims() {
        let expiry = ExpiryPolicy::after_hours(24).unwrap();
        let claims = SessionClaims::for_subject("user123", &expiry).unwrap();

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_far_future_expiry() {
        let now = Utc.with_ymd_and_hms(2025, 1, 27, 12, 0, 0).unwrap();
        let claims = SessionClaims::issued_at("user123", &ExpiryPolicy::FarFuture, now).unwrap();

        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp, ExpiryPolicy::FAR_FUTURE_TIMESTAMP);
    }

    #[test]
    fn test_jti_differs_between_tokens_of_same_second() {
        let now = Utc::now();
        let first = SessionClaims::issued_at("user123", &ExpiryPolicy::FarFuture, now).unwrap();
        let second = SessionClaims::issued_at("user123", &ExpiryPolicy::FarFuture, now).unwrap();

        assert_eq!(first.exp, second.exp);
        assert_ne!(first.jti, second.jti);
        assert_ne!(first, second);
    }
}
