use std::env;

use auth::ExpiryPolicy;
use auth::PasswordScheme;
use chrono::Utc;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

use crate::domain::session::models::SessionPolicy;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime; absent means tokens expire in the far future
    #[serde(default)]
    pub expiration_hours: Option<i64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SessionConfig {
    #[serde(default)]
    pub policy: SessionPolicy,
    #[serde(default)]
    pub password_scheme: PasswordScheme,
}

impl JwtConfig {
    /// Minimum HS256 key length, in bytes, below which startup warns
    pub const MIN_SECRET_LENGTH: usize = 32;

    /// Token expiry policy; absent `expiration_hours` means far future.
    ///
    /// # Errors
    /// * `ConfigError::Message` - Lifetime is not positive or cannot be represented
    pub fn expiry_policy(&self) -> Result<ExpiryPolicy, ConfigError> {
        let Some(hours) = self.expiration_hours else {
            return Ok(ExpiryPolicy::FarFuture);
        };

        if hours <= 0 {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_hours must be positive, got {}",
                hours
            )));
        }

        ExpiryPolicy::after_hours(hours)
            .filter(|policy| policy.expires_at(Utc::now()).is_ok())
            .ok_or_else(|| {
                ConfigError::Message(format!("jwt.expiration_hours is out of range: {}", hours))
            })
    }

    pub fn has_weak_secret(&self) -> bool {
        self.secret.len() < Self::MIN_SECRET_LENGTH
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, SESSION__POLICY, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        Self::from_source(configuration)
    }

    fn from_source(configuration: ConfigBuilder) -> Result<Self, ConfigError> {
        let config: Config = configuration.try_deserialize()?;
        config.jwt.expiry_policy()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use config::FileFormat;

    use super::*;

    fn try_from_toml(source: &str) -> Result<Config, ConfigError> {
        ConfigBuilder::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()
            .and_then(Config::from_source)
    }

    fn from_toml(source: &str) -> Config {
        try_from_toml(source).expect("Failed to load config")
    }

    fn with_expiration_hours(hours: &str) -> Result<Config, ConfigError> {
        try_from_toml(&format!(
            r#"
            [database]
            url = "postgresql://localhost/accounts"
            [server]
            http_port = 8080
            [jwt]
            secret = "test-secret-key-for-jwt-signing-at-least-32-bytes"
            expiration_hours = {}
            "#,
            hours
        ))
    }

    #[test]
    fn test_defaults_when_session_section_absent() {
        let config = from_toml(
            r#"
            [database]
            url = "postgresql://localhost/accounts"
            [server]
            http_port = 8080
            [jwt]
            secret = "test-secret-key-for-jwt-signing-at-least-32-bytes"
            "#,
        );

        assert_eq!(config.session.policy, SessionPolicy::Stateless);
        assert_eq!(config.session.password_scheme, PasswordScheme::Argon2);
        assert_eq!(config.jwt.expiry_policy().unwrap(), ExpiryPolicy::FarFuture);
        assert!(!config.jwt.has_weak_secret());
    }

    #[test]
    fn test_explicit_session_settings() {
        let config = from_toml(
            r#"
            [database]
            url = "postgresql://localhost/accounts"
            [server]
            http_port = 8080
            [jwt]
            secret = "short"
            expiration_hours = 24
            [session]
            policy = "single_session"
            password_scheme = "plaintext"
            "#,
        );

        assert_eq!(config.session.policy, SessionPolicy::SingleSession);
        assert_eq!(config.session.password_scheme, PasswordScheme::Plaintext);
        assert_eq!(
            config.jwt.expiry_policy().unwrap(),
            ExpiryPolicy::After(TimeDelta::hours(24))
        );
        assert!(config.jwt.has_weak_secret());
    }

    #[test]
    fn test_non_positive_expiration_rejected() {
        assert!(matches!(
            with_expiration_hours("0"),
            Err(ConfigError::Message(_))
        ));
        assert!(matches!(
            with_expiration_hours("-1"),
            Err(ConfigError::Message(_))
        ));
    }

    #[test]
    fn test_out_of_range_expiration_rejected() {
        assert!(matches!(
            with_expiration_hours("100000000000"),
            Err(ConfigError::Message(_))
        ));
        assert!(matches!(
            with_expiration_hours(&i64::MAX.to_string()),
            Err(ConfigError::Message(_))
        ));
    }
}
