use axum::extract::State;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiReply;
use crate::domain::result::OpResult;
use crate::domain::role::errors::RoleDescriptionError;
use crate::domain::role::errors::RoleNameError;
use crate::domain::role::models::RoleDescription;
use crate::domain::role::models::RoleName;
use crate::domain::role::ports::RoleManagerPort;
use crate::inbound::http::router::AppState;

pub async fn create_role(
    State(state): State<AppState>,
    Json(body): Json<CreateRoleRequest>,
) -> Response {
    let (name, description) = match body.try_into_fields() {
        Ok(fields) => fields,
        Err(e) => return ApiReply(OpResult::<bool>::failure(e.to_string())).into_response(),
    };

    let result = state.role_manager.create_role(&name, &description).await;
    ApiReply(result).into_response()
}

/// HTTP request body for creating a role (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoleRequest {
    name: String,
    description: String,
}

#[derive(Debug, Clone, Error)]
pub(super) enum ParseRoleError {
    #[error("Invalid role name: {0}")]
    Name(#[from] RoleNameError),

    #[error("Invalid role description: {0}")]
    Description(#[from] RoleDescriptionError),
}

impl CreateRoleRequest {
    fn try_into_fields(self) -> Result<(RoleName, RoleDescription), ParseRoleError> {
        Ok((
            RoleName::new(self.name)?,
            RoleDescription::new(self.description)?,
        ))
    }
}
