use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::Avatar;
use crate::domain::account::models::AvatarChange;
use crate::domain::account::ports::AccountRepository;
use crate::domain::account::ports::AccountServicePort;
use crate::domain::session::models::IdentityClaim;

/// Domain service implementation for account operations.
///
/// Concrete implementation of AccountServicePort with dependency injection.
pub struct AccountService<AR>
where
    AR: AccountRepository,
{
    repository: Arc<AR>,
}

impl<AR> AccountService<AR>
where
    AR: AccountRepository,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Account persistence implementation
    pub fn new(repository: Arc<AR>) -> Self {
        Self { repository }
    }

    async fn load(&self, id: &AccountId) -> Result<Account, AccountError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AccountError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl<AR> AccountServicePort for AccountService<AR>
where
    AR: AccountRepository,
{
    async fn get_profile(&self, claim: &IdentityClaim) -> Result<Account, AccountError> {
        self.load(&claim.account_id).await
    }

    async fn delete_account(&self, claim: &IdentityClaim) -> Result<(), AccountError> {
        self.repository.delete(&claim.account_id).await?;

        tracing::info!(account_id = %claim.account_id, "Account deleted");
        Ok(())
    }

    async fn set_avatar(
        &self,
        claim: &IdentityClaim,
        payload: String,
    ) -> Result<AvatarChange, AccountError> {
        let account = self.load(&claim.account_id).await?;

        let avatar = Avatar::parse(payload).map_err(|e| {
            tracing::warn!(account_id = %account.id, error = %e, "Avatar payload rejected");
            AccountError::from(e)
        })?;

        let change = match account.avatar {
            Some(_) => AvatarChange::Updated,
            None => AvatarChange::Added,
        };

        self.repository.update_avatar(&account.id, &avatar).await?;

        tracing::info!(account_id = %account.id, change = change.as_str(), "Avatar stored");
        Ok(change)
    }

    async fn get_avatar(&self, claim: &IdentityClaim) -> Result<Option<Avatar>, AccountError> {
        self.load(&claim.account_id)
            .await
            .map(|account| account.avatar)
    }

    async fn current_token(&self, claim: &IdentityClaim) -> Result<String, AccountError> {
        self.load(&claim.account_id)
            .await
            .map(|account| account.current_token)
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, AccountError> {
        self.repository.list_all().await
    }
}
