//! Navigation views over the static table.
//!
//! Public: the console needs its menu before anyone logs in. The table only
//! describes the UI; the routes it points at are guarded separately.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use erp_console_core::navigation::SidebarView;
use erp_console_core::{NavEntry, SidebarConfig};

use crate::error::ErrorBody;
use crate::server::GatewayState;

const SIDEBAR_NOT_FOUND: &str = "sidebar not found";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NavigationOverview<'a> {
    entries: Vec<&'a NavEntry>,
    sidebars: Vec<SidebarView<'a>>,
    protected_paths: &'a [String],
}

pub(super) async fn overview(State(state): State<Arc<GatewayState>>) -> Response {
    let navigation = &state.navigation;
    Json(NavigationOverview {
        entries: navigation.list_nav_entries(),
        sidebars: navigation.list_sidebar_configs(),
        protected_paths: &state.protected_paths,
    })
    .into_response()
}

pub(super) async fn sidebar_by_id(
    State(state): State<Arc<GatewayState>>,
    Path(id): Path<String>,
) -> Response {
    match state.navigation.find_sidebar_config_by_id(&id) {
        Some(sidebar) => Json::<&SidebarConfig>(sidebar).into_response(),
        None => ErrorBody::new(SIDEBAR_NOT_FOUND).into_response_with(StatusCode::NOT_FOUND),
    }
}

#[derive(Deserialize)]
pub(super) struct SidebarQuery {
    path: String,
}

pub(super) async fn sidebar_for_path(
    State(state): State<Arc<GatewayState>>,
    Query(query): Query<SidebarQuery>,
) -> Response {
    match state.navigation.sidebar_for_path(&query.path) {
        Some(view) => Json(view).into_response(),
        None => ErrorBody::new(SIDEBAR_NOT_FOUND).into_response_with(StatusCode::NOT_FOUND),
    }
}
