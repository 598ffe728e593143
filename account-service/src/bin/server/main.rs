use std::sync::Arc;

use account_service::config::Config;
use account_service::config::JwtConfig;
use account_service::domain::account::service::AccountService;
use account_service::domain::session::models::SessionPolicy;
use account_service::domain::session::service::SessionService;
use account_service::inbound::http::router::create_router;
use account_service::outbound::repositories::PostgresAccountRepository;
use auth::PasswordScheme;
use auth::TokenCodec;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "account_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "account-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        session_policy = ?config.session.policy,
        password_scheme = ?config.session.password_scheme,
        expiration_hours = ?config.jwt.expiration_hours,
        "Configuration loaded"
    );

    if config.jwt.has_weak_secret() {
        tracing::warn!(
            min_length = JwtConfig::MIN_SECRET_LENGTH,
            "JWT secret is shorter than recommended"
        );
    }
    let expiry = config.jwt.expiry_policy()?;
    if expiry.is_unbounded() {
        tracing::warn!("Tokens are minted without a practical expiry");
    }
    if config.session.password_scheme == PasswordScheme::Plaintext {
        tracing::warn!("Passwords are stored and compared in plaintext");
    }
    if config.session.policy == SessionPolicy::Stateless {
        tracing::info!("Earlier tokens stay valid after a new signin");
    }

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let codec = Arc::new(TokenCodec::new(config.jwt.secret.as_bytes(), expiry));
    let account_repository = Arc::new(PostgresAccountRepository::new(pg_pool));

    let session_service = Arc::new(SessionService::new(
        Arc::clone(&account_repository),
        codec,
        config.session.password_scheme,
        config.session.policy,
    ));
    let account_service = Arc::new(AccountService::new(account_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(session_service, account_service);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}
