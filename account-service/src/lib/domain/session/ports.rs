use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::session::models::IdentityClaim;
use crate::domain::session::models::IssuedSession;
use crate::domain::session::models::SigninCommand;
use crate::domain::session::models::SignupCommand;

/// Port for issuing and verifying session tokens.
#[async_trait]
pub trait SessionServicePort: Send + Sync + 'static {
    /// Register a new account and issue its first token.
    ///
    /// # Arguments
    /// * `command` - Validated username and email, raw password and secret response
    ///
    /// # Returns
    /// Account ID and the token now stored as its current token
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken (nothing is persisted)
    /// * `Credential` - Password could not be sealed
    /// * `TokenIssuance` - Token minting failed
    /// * `DatabaseError` - Database operation failed
    async fn signup(&self, command: SignupCommand) -> Result<IssuedSession, AccountError>;

    /// Check credentials and issue a new token, replacing the stored one.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password (nothing is mutated)
    /// * `TokenIssuance` - Token minting failed
    /// * `DatabaseError` - Database operation failed
    async fn signin(&self, command: SigninCommand) -> Result<IssuedSession, AccountError>;

    /// Resolve a bearer token into the identity it grants.
    ///
    /// # Errors
    /// * `InvalidToken` - Bad signature, expired or malformed
    /// * `SessionSuperseded` - Single-session policy only: not the account's current token
    /// * `DatabaseError` - Single-session policy only: account lookup failed
    async fn authorize(&self, token: &str) -> Result<IdentityClaim, AccountError>;
}
