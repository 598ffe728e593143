use serde::Deserialize;

use crate::domain::account::models::AccountId;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::Username;

/// Identity resolved from a verified session token.
///
/// Lives in the request extensions for the duration of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityClaim {
    pub account_id: AccountId,
}

/// Token handed out by a successful signup or signin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedSession {
    pub account_id: AccountId,
    pub token: String,
}

/// How presented tokens relate to the token stored on the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPolicy {
    /// Signature and expiry are all that is checked. Older tokens of an
    /// account stay valid after a new signin.
    #[default]
    Stateless,

    /// The presented token must also equal the account's current token, so a
    /// signin revokes every earlier token of that account.
    SingleSession,
}

/// Command to register a new account
#[derive(Debug)]
pub struct SignupCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: String,
    pub secret_response: String,
}

impl SignupCommand {
    pub fn new(
        username: Username,
        email: EmailAddress,
        password: String,
        secret_response: String,
    ) -> Self {
        Self {
            username,
            email,
            password,
            secret_response,
        }
    }
}

/// Command to sign in with username and password
#[derive(Debug)]
pub struct SigninCommand {
    pub username: Username,
    pub password: String,
}
