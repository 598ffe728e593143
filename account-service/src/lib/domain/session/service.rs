use std::sync::Arc;

use async_trait::async_trait;
use auth::JwtError;
use auth::PasswordScheme;
use auth::TokenCodec;
use chrono::Utc;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::ports::AccountRepository;
use crate::domain::session::models::IdentityClaim;
use crate::domain::session::models::IssuedSession;
use crate::domain::session::models::SessionPolicy;
use crate::domain::session::models::SigninCommand;
use crate::domain::session::models::SignupCommand;
use crate::domain::session::ports::SessionServicePort;

/// Issues session tokens on signup/signin and resolves presented tokens.
///
/// Every issued token is written to the account's `current_token`. Whether
/// that stored value matters on verification is decided by the
/// [`SessionPolicy`].
pub struct SessionService<AR>
where
    AR: AccountRepository,
{
    repository: Arc<AR>,
    codec: Arc<TokenCodec>,
    password_scheme: PasswordScheme,
    policy: SessionPolicy,
}

impl<AR> SessionService<AR>
where
    AR: AccountRepository,
{
    /// Create a new session service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Account persistence implementation
    /// * `codec` - Token codec holding the signing key
    /// * `password_scheme` - How stored passwords are sealed and compared
    /// * `policy` - Whether verification also checks the stored token
    pub fn new(
        repository: Arc<AR>,
        codec: Arc<TokenCodec>,
        password_scheme: PasswordScheme,
        policy: SessionPolicy,
    ) -> Self {
        Self {
            repository,
            codec,
            password_scheme,
            policy,
        }
    }

    fn mint(&self, account_id: &AccountId) -> Result<String, AccountError> {
        self.codec.mint(account_id).map_err(|e| {
            tracing::error!(account_id = %account_id, error = %e, "Token minting failed");
            AccountError::TokenIssuance(e.to_string())
        })
    }
}

#[async_trait]
impl<AR> SessionServicePort for SessionService<AR>
where
    AR: AccountRepository,
{
    async fn signup(&self, command: SignupCommand) -> Result<IssuedSession, AccountError> {
        if self
            .repository
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            tracing::info!(username = %command.username, "Signup rejected, username taken");
            return Err(AccountError::UsernameAlreadyExists(
                command.username.to_string(),
            ));
        }

        let password = self.password_scheme.seal(&command.password)?;
        let account_id = AccountId::new();
        let token = self.mint(&account_id)?;

        let account = Account {
            id: account_id,
            username: command.username,
            email: command.email,
            password,
            secret_response: command.secret_response,
            avatar: None,
            current_token: token.clone(),
            created_at: Utc::now(),
        };

        let created = self.repository.create(account).await?;

        tracing::info!(account_id = %created.id, username = %created.username, "Account signed up");
        Ok(IssuedSession {
            account_id: created.id,
            token,
        })
    }

    async fn signin(&self, command: SigninCommand) -> Result<IssuedSession, AccountError> {
        let account = self
            .repository
            .find_by_username(&command.username)
            .await?
            .ok_or_else(|| {
                tracing::info!(username = %command.username, "Signin rejected, unknown username");
                AccountError::InvalidCredentials
            })?;

        // A stored value the scheme cannot read never matches
        let matched = self
            .password_scheme
            .matches(&command.password, &account.password)
            .unwrap_or_else(|e| {
                tracing::error!(
                    account_id = %account.id,
                    error = %e,
                    "Stored password cannot be verified"
                );
                false
            });

        if !matched {
            tracing::info!(account_id = %account.id, "Signin rejected, wrong password");
            return Err(AccountError::InvalidCredentials);
        }

        let token = self.mint(&account.id)?;
        self.repository.update_token(&account.id, &token).await?;

        tracing::info!(account_id = %account.id, "Account signed in");
        Ok(IssuedSession {
            account_id: account.id,
            token,
        })
    }

    async fn authorize(&self, token: &str) -> Result<IdentityClaim, AccountError> {
        let verified = self.codec.verify(token).map_err(AccountError::InvalidToken)?;

        let account_id = AccountId::from_string(&verified.subject)
            .map_err(|e| AccountError::InvalidToken(JwtError::Malformed(e.to_string())))?;

        if self.policy == SessionPolicy::SingleSession {
            let account = self
                .repository
                .find_by_id(&account_id)
                .await?
                .ok_or(AccountError::SessionSuperseded)?;

            if account.current_token != token {
                return Err(AccountError::SessionSuperseded);
            }
        }

        Ok(IdentityClaim { account_id })
    }
}
