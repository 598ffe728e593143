use chrono::DateTime;
use chrono::TimeDelta;
use chrono::Utc;

use super::errors::JwtError;

/// Policy deciding the `exp` claim of newly minted tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpiryPolicy {
    /// Tokens expire at a fixed date far in the future, which in practice
    /// means they never expire. Any leaked token stays usable indefinitely.
    #[default]
    FarFuture,

    /// Tokens expire a fixed duration after they are issued.
    After(TimeDelta),
}

impl ExpiryPolicy {
    /// 4001-01-01T00:00:00Z
    pub const FAR_FUTURE_TIMESTAMP: i64 = 64_092_211_200;

    /// Lifetime of `hours`, or `None` when it does not fit a `TimeDelta`.
    pub fn after_hours(hours: i64) -> Option<Self> {
        TimeDelta::try_hours(hours).map(Self::After)
    }

    /// Expiration timestamp for a token issued at `issued_at`.
    ///
    /// # Errors
    /// * `EncodingFailed` - The lifetime pushes the expiry past the representable date range
    pub fn expires_at(&self, issued_at: DateTime<Utc>) -> Result<i64, JwtError> {
        match self {
            ExpiryPolicy::FarFuture => Ok(Self::FAR_FUTURE_TIMESTAMP),
            ExpiryPolicy::After(lifetime) => issued_at
                .checked_add_signed(*lifetime)
                .map(|expiry| expiry.timestamp())
                .ok_or_else(|| {
                    JwtError::EncodingFailed(format!("token lifetime {} overflows", lifetime))
                }),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, ExpiryPolicy::FarFuture)
    }
}
