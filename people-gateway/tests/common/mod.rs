use std::sync::Arc;

use auth::IdentityClaims;
use auth::JwtHandler;
use people_gateway::domain::authz::policy::RolePolicy;
use people_gateway::domain::result::Envelope;
use people_gateway::inbound::http::router::create_router;
use people_gateway::inbound::http::router::AppState;
use people_gateway::outbound::identity::IdentityApi;
use serde_json::Value;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

mockall::mock! {
    pub Identity {}

    #[async_trait::async_trait]
    impl IdentityApi for Identity {
        async fn get(&self, path: &str) -> Envelope<Value>;
        async fn post(&self, path: &str, body: Value) -> Envelope<Value>;
        async fn put(&self, path: &str, body: Value) -> Envelope<Value>;
        async fn delete(&self, path: &str) -> Envelope<Value>;
    }
}

/// Test application that spawns the gateway on a random port with a
/// mocked identity client behind it.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the gateway in a background task and return TestApp
    pub async fn spawn(identity: MockIdentity) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().expect("No local address").port();
        let address = format!("http://127.0.0.1:{}", port);

        let state = AppState {
            identity: Arc::new(identity),
            jwt: Arc::new(JwtHandler::new(TEST_JWT_SECRET)),
            policy: Arc::new(RolePolicy::new(
                "HR ADMIN".to_string(),
                vec!["MANAGER".to_string(), "HR ADMIN".to_string()],
            )),
        };

        let app = create_router(state);
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server crashed");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(TEST_JWT_SECRET),
        }
    }

    /// Mint a token the gateway will accept.
    pub fn token_for(&self, user_id: i32, roles: &[&str]) -> String {
        let claims = IdentityClaims::new(
            user_id,
            format!("user{}@example.com", user_id),
            format!("user{}", user_id),
            roles.iter().map(|r| r.to_string()).collect(),
            1,
        );
        self.jwt_handler
            .encode(&claims)
            .expect("Failed to encode test token")
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }
}
