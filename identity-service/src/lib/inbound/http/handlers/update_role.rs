use axum::extract::Path;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;

use super::create_role::ParseRoleError;
use super::ApiReply;
use crate::domain::result::OpResult;
use crate::domain::role::models::RoleDescription;
use crate::domain::role::models::RoleId;
use crate::domain::role::models::RoleName;
use crate::domain::role::ports::RoleManagerPort;
use crate::inbound::http::router::AppState;

pub async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateRoleRequest>,
) -> Response {
    let (name, description) = match body.try_into_fields() {
        Ok(fields) => fields,
        Err(e) => return ApiReply(OpResult::<bool>::failure(e.to_string())).into_response(),
    };

    let result = state
        .role_manager
        .update_role(RoleId(id), &name, &description)
        .await;
    ApiReply(result).into_response()
}

/// HTTP request body for updating a role (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleRequest {
    name: String,
    description: String,
}

impl UpdateRoleRequest {
    fn try_into_fields(self) -> Result<(RoleName, RoleDescription), ParseRoleError> {
        Ok((
            RoleName::new(self.name)?,
            RoleDescription::new(self.description)?,
        ))
    }
}
