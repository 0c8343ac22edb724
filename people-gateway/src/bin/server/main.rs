use std::sync::Arc;

use auth::JwtHandler;
use people_gateway::config::Config;
use people_gateway::domain::authz::policy::RolePolicy;
use people_gateway::inbound::http::router::create_router;
use people_gateway::inbound::http::router::AppState;
use people_gateway::outbound::identity::HttpIdentityClient;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "people_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "people-gateway",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        identity_base_url = %config.identity.base_url,
        admin_role = %config.authorization.admin_role,
        "Configuration loaded"
    );

    let state = AppState {
        identity: Arc::new(HttpIdentityClient::new(config.identity.base_url.clone())),
        jwt: Arc::new(JwtHandler::new(config.jwt.secret.as_bytes())),
        policy: Arc::new(RolePolicy::new(
            config.authorization.admin_role.clone(),
            config.authorization.elevated_roles.clone(),
        )),
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;

    Ok(())
}
