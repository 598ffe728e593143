use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::Avatar;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::Username;
use crate::domain::account::ports::AccountRepository;

const USERNAME_UNIQUE_CONSTRAINT: &str = "accounts_username_key";

const SELECT_ACCOUNT: &str = r#"
    SELECT id, username, email, password, secret_response, avatar, current_token, created_at
    FROM accounts
"#;

pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AccountRow {
    id: Uuid,
    username: String,
    email: String,
    password: String,
    secret_response: String,
    avatar: Option<String>,
    current_token: String,
    created_at: DateTime<Utc>,
}

// Rows that no longer pass validation are a storage fault, not a client error
impl TryFrom<AccountRow> for Account {
    type Error = AccountError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let corrupt = |e: &dyn std::fmt::Display| {
            AccountError::DatabaseError(format!("Corrupt account row {}: {}", id, e))
        };

        Ok(Account {
            id: AccountId(row.id),
            username: Username::new(row.username).map_err(|e| corrupt(&e))?,
            email: EmailAddress::new(row.email).map_err(|e| corrupt(&e))?,
            password: row.password,
            secret_response: row.secret_response,
            avatar: row
                .avatar
                .map(Avatar::parse)
                .transpose()
                .map_err(|e| corrupt(&e))?,
            current_token: row.current_token,
            created_at: row.created_at,
        })
    }
}

fn database_error(e: sqlx::Error) -> AccountError {
    AccountError::DatabaseError(e.to_string())
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, AccountError> {
        sqlx::query(
            r#"
            INSERT INTO accounts
                (id, username, email, password, secret_response, avatar, current_token, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(account.id.0)
        .bind(account.username.as_str())
        .bind(account.email.as_str())
        .bind(&account.password)
        .bind(&account.secret_response)
        .bind(account.avatar.as_ref().map(Avatar::as_str))
        .bind(&account.current_token)
        .bind(account.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some(USERNAME_UNIQUE_CONSTRAINT)
                {
                    return AccountError::UsernameAlreadyExists(
                        account.username.as_str().to_string(),
                    );
                }
            }
            database_error(e)
        })?;

        Ok(account)
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountError> {
        let row = sqlx::query_as::<_, AccountRow>(&format!("{} WHERE id = $1", SELECT_ACCOUNT))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        row.map(Account::try_from).transpose()
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Account>, AccountError> {
        let row =
            sqlx::query_as::<_, AccountRow>(&format!("{} WHERE username = $1", SELECT_ACCOUNT))
                .bind(username.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(database_error)?;

        row.map(Account::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Account>, AccountError> {
        let rows =
            sqlx::query_as::<_, AccountRow>(&format!("{} ORDER BY created_at DESC", SELECT_ACCOUNT))
                .fetch_all(&self.pool)
                .await
                .map_err(database_error)?;

        rows.into_iter().map(Account::try_from).collect()
    }

    async fn update_token(&self, id: &AccountId, token: &str) -> Result<(), AccountError> {
        let result = sqlx::query(
            r#"
            UPDATE accounts
            SET current_token = $2
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .bind(token)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(AccountError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn update_avatar(&self, id: &AccountId, avatar: &Avatar) -> Result<(), AccountError> {
        let result = sqlx::query(
            r#"
            UPDATE accounts
            SET avatar = $2
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .bind(avatar.as_str())
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(AccountError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn delete(&self, id: &AccountId) -> Result<(), AccountError> {
        let result = sqlx::query(
            r#"
            DELETE FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(AccountError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
