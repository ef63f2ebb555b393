//! Permission-role assignment.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{Method, StatusCode},
    response::Response,
};
use serde::Deserialize;

use super::{item_path, parse_body, proxy};
use crate::auth::RequireAuth;
use crate::error::{ErrorBody, ProxyError};
use crate::server::GatewayState;
use crate::upstream::ForwardOptions;

pub(super) const PERMISSIONS_PATH: &str = "/api/permissions";

const PERMISSION_ID_REQUIRED: &str = "permissionId is required";

/// Upstream path for one permission-role link.
fn assignment_path(permission_id: &str, role_id: &str) -> String {
    format!(
        "{}/roles/{}",
        item_path(PERMISSIONS_PATH, permission_id),
        urlencoding::encode(role_id)
    )
}

pub(super) async fn assign_role(
    State(state): State<Arc<GatewayState>>,
    auth: RequireAuth,
    Path((permission_id, role_id)): Path<(String, String)>,
) -> Result<Response, ProxyError> {
    proxy(
        &state,
        &auth,
        &assignment_path(&permission_id, &role_id),
        ForwardOptions::new(Method::POST),
    )
    .await
}

pub(super) async fn revoke_role(
    State(state): State<Arc<GatewayState>>,
    auth: RequireAuth,
    Path((permission_id, role_id)): Path<(String, String)>,
) -> Result<Response, ProxyError> {
    proxy(
        &state,
        &auth,
        &assignment_path(&permission_id, &role_id),
        ForwardOptions::delete(),
    )
    .await
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GrantRequest {
    #[serde(default)]
    permission_id: serde_json::Value,
}

/// Role-centric form of [`assign_role`]: the permission id comes in the body.
pub(super) async fn grant_to_role(
    State(state): State<Arc<GatewayState>>,
    auth: RequireAuth,
    Path(role_id): Path<String>,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let request: GrantRequest = serde_json::from_value(parse_body(&body)?)?;

    let permission_id = match request.permission_id {
        serde_json::Value::String(id) if !id.is_empty() => id,
        serde_json::Value::Number(id) => id.to_string(),
        _ => {
            return Ok(ErrorBody::new(PERMISSION_ID_REQUIRED)
                .into_response_with(StatusCode::BAD_REQUEST));
        }
    };

    proxy(
        &state,
        &auth,
        &assignment_path(&permission_id, &role_id),
        ForwardOptions::new(Method::POST),
    )
    .await
}

/// Role-centric form of [`revoke_role`].
pub(super) async fn revoke_from_role(
    State(state): State<Arc<GatewayState>>,
    auth: RequireAuth,
    Path((role_id, permission_id)): Path<(String, String)>,
) -> Result<Response, ProxyError> {
    proxy(
        &state,
        &auth,
        &assignment_path(&permission_id, &role_id),
        ForwardOptions::delete(),
    )
    .await
}
