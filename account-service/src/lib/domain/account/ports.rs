use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::Avatar;
use crate::domain::account::models::AvatarChange;
use crate::domain::account::models::Username;
use crate::domain::session::models::IdentityClaim;

/// Port for operations on the caller's own account.
///
/// Every operation takes the identity resolved by the auth gate. None of them
/// verify tokens themselves.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Retrieve the caller's account.
    ///
    /// # Errors
    /// * `NotFound` - Account was deleted after the token was issued
    /// * `DatabaseError` - Database operation failed
    async fn get_profile(&self, claim: &IdentityClaim) -> Result<Account, AccountError>;

    /// Delete the caller's account.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist (already deleted)
    /// * `DatabaseError` - Database operation failed
    async fn delete_account(&self, claim: &IdentityClaim) -> Result<(), AccountError>;

    /// Validate and store an avatar payload.
    ///
    /// # Returns
    /// Whether an avatar was added or an existing one replaced
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `InvalidAvatar` - Payload is not valid base64 (stored avatar is left as is)
    /// * `DatabaseError` - Database operation failed
    async fn set_avatar(
        &self,
        claim: &IdentityClaim,
        payload: String,
    ) -> Result<AvatarChange, AccountError>;

    /// Retrieve the caller's avatar, `None` when none was ever set.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_avatar(&self, claim: &IdentityClaim) -> Result<Option<Avatar>, AccountError>;

    /// Retrieve the token currently stored on the caller's account.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `DatabaseError` - Database operation failed
    async fn current_token(&self, claim: &IdentityClaim) -> Result<String, AccountError>;

    /// Retrieve all accounts.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_accounts(&self) -> Result<Vec<Account>, AccountError>;
}

/// Persistence operations for account aggregate.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist new account to storage.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, account: Account) -> Result<Account, AccountError>;

    /// Retrieve account by identifier.
    ///
    /// # Returns
    /// Optional account entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountError>;

    /// Retrieve account by username.
    ///
    /// # Returns
    /// Optional account entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username)
        -> Result<Option<Account>, AccountError>;

    /// Retrieve all accounts from storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Account>, AccountError>;

    /// Overwrite the account's current token in a single atomic update.
    ///
    /// Concurrent calls for the same account resolve as last write wins.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_token(&self, id: &AccountId, token: &str) -> Result<(), AccountError>;

    /// Overwrite the account's avatar.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_avatar(&self, id: &AccountId, avatar: &Avatar) -> Result<(), AccountError>;

    /// Remove account from storage.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &AccountId) -> Result<(), AccountError>;
}
