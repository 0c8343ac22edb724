use std::sync::Arc;

use identity_service::config::Config;
use identity_service::domain::role::manager::RoleManager;
use identity_service::domain::signin::pipeline::SignInPipeline;
use identity_service::domain::user::manager::UserManager;
use identity_service::inbound::http::router::create_router;
use identity_service::inbound::http::router::AppState;
use identity_service::outbound::repositories::PostgresRoleStore;
use identity_service::outbound::repositories::PostgresUserStore;
use identity_service::outbound::security::Argon2CredentialHasher;
use identity_service::outbound::token::JwtTokenIssuer;
use sqlx::postgres::PgPoolOptions;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "identity_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "identity-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        default_role_id = config.signup.default_role_id,
        "Configuration loaded"
    );

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

    let user_store = Arc::new(PostgresUserStore::new(pg_pool.clone()));
    let role_store = Arc::new(PostgresRoleStore::new(pg_pool));
    let hasher = Arc::new(Argon2CredentialHasher::new());
    let token_issuer = Arc::new(JwtTokenIssuer::new(
        config.jwt.secret.as_bytes(),
        config.jwt.expiration_hours,
        config.jwt.issuer.clone(),
    ));

    let user_manager = Arc::new(UserManager::new(user_store, hasher));
    let role_manager = Arc::new(RoleManager::new(role_store));
    let sign_in = Arc::new(SignInPipeline::new(
        Arc::clone(&user_manager),
        Arc::clone(&role_manager),
        token_issuer,
    ));

    // One token serves both graceful shutdown and the sign-in pipeline's
    // entry check: once it fires, new sign-ins abort before touching any
    // collaborator.
    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            signal_token.cancel();
        }
    });

    let state = AppState {
        user_manager,
        role_manager,
        sign_in,
        default_role_id: config.signup.default_role_id,
        shutdown: shutdown.clone(),
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state))
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;

    tracing::info!("Server exited");

    Ok(())
}
