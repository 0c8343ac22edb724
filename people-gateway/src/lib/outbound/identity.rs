use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::domain::result::Envelope;

/// Outbound port to the identity service.
///
/// A generic relay: handlers build the upstream path, the adapter moves
/// the envelope. Transport and decode failures become failure envelopes so
/// handlers deal with exactly one shape.
#[async_trait]
pub trait IdentityApi: Send + Sync + 'static {
    async fn get(&self, path: &str) -> Envelope<Value>;
    async fn post(&self, path: &str, body: Value) -> Envelope<Value>;
    async fn put(&self, path: &str, body: Value) -> Envelope<Value>;
    async fn delete(&self, path: &str) -> Envelope<Value>;
}

/// HTTP implementation of the identity port.
pub struct HttpIdentityClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpIdentityClient {
    /// # Arguments
    /// * `base_url` - Identity service origin, no trailing slash
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Envelope<Value> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.http.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, %method, path, "Identity service unreachable");
                return Envelope::failure(
                    "Unexpected error occurred while contacting the identity service.",
                );
            }
        };

        match response.json::<Envelope<Value>>().await {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::error!(error = %e, %method, path, "Identity service reply undecodable");
                Envelope::failure("Unexpected null result.")
            }
        }
    }
}

#[async_trait]
impl IdentityApi for HttpIdentityClient {
    async fn get(&self, path: &str) -> Envelope<Value> {
        self.send(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: Value) -> Envelope<Value> {
        self.send(Method::POST, path, Some(body)).await
    }

    async fn put(&self, path: &str, body: Value) -> Envelope<Value> {
        self.send(Method::PUT, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> Envelope<Value> {
        self.send(Method::DELETE, path, None).await
    }
}
