use axum::extract::State;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;

use super::request_aborted;
use super::ApiReply;
use super::SessionData;
use crate::domain::signin::models::Credentials;
use crate::domain::signin::pipeline::SignInCancelled;
use crate::inbound::http::router::AppState;

pub async fn sign_in(State(state): State<AppState>, Json(body): Json<SignInRequest>) -> Response {
    let credentials = Credentials {
        email: body.email,
        password: body.password,
    };

    match state.sign_in.sign_in(&credentials, &state.shutdown).await {
        Ok(result) => ApiReply(result.map(SessionData::from)).into_response(),
        Err(SignInCancelled) => {
            tracing::info!("Sign-in aborted by cancellation");
            request_aborted()
        }
    }
}

/// HTTP request body for sign-in (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    email: String,
    password: String,
}
