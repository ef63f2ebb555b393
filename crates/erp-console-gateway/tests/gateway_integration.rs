//! Gateway integration tests.
//!
//! The gateway router is driven through tower's `oneshot`, and forwards to a
//! mock upstream bound on an ephemeral local port.

use axum::body::{Body, Bytes};
use axum::extract::Path;
use axum::http::{HeaderMap, Request, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;

use erp_console_core::Config;
use erp_console_gateway::Gateway;

const USERS_BODY: &str = r#"[{"id":1,"username":"admin"},{"id":2,"username":"jane"}]"#;

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

async fn mock_verify(headers: HeaderMap) -> Response {
    match bearer(&headers) {
        Some("good") => Json(json!({"user": {"id": 1, "username": "admin"}})).into_response(),
        Some("garbled") => (StatusCode::UNAUTHORIZED, "nope").into_response(),
        Some("bare") => (StatusCode::FORBIDDEN, Json(json!({"detail": "x"}))).into_response(),
        Some("listed") => Json(json!([])).into_response(),
        _ => (StatusCode::UNAUTHORIZED, Json(json!({"error": "token expired"}))).into_response(),
    }
}

async fn mock_login(Json(body): Json<Value>) -> Response {
    let received: Vec<String> = body
        .as_object()
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default();

    if body["username"] == "admin" && body["password"] == "secret" {
        Json(json!({
            "token": "good",
            "user": {"username": "admin"},
            "received": received,
        }))
        .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "invalid credentials"})),
        )
            .into_response()
    }
}

async fn mock_users() -> Response {
    (
        [(header::CONTENT_TYPE, "application/json")],
        USERS_BODY,
    )
        .into_response()
}

async fn mock_update_user(Path(id): Path<String>, Json(body): Json<Value>) -> Response {
    if body.get("email").is_none() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "email required"})),
        )
            .into_response();
    }
    Json(json!({"id": id, "email": body["email"]})).into_response()
}

async fn mock_show(Path(id): Path<String>) -> Json<Value> {
    Json(json!({"id": id}))
}

async fn mock_delete_user() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn mock_create_role(Json(body): Json<Value>) -> Response {
    (StatusCode::CREATED, Json(json!({"id": 5, "name": body["name"]}))).into_response()
}

async fn mock_broken() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "<html>upstream down</html>").into_response()
}

async fn mock_echo_authorization(headers: HeaderMap) -> Json<Value> {
    Json(json!({"authorization": bearer(&headers)}))
}

async fn mock_assignment(Path((permission_id, role_id)): Path<(String, String)>) -> Json<Value> {
    Json(json!({"permission": permission_id, "role": role_id}))
}

fn mock_upstream() -> Router {
    Router::new()
        .route("/api/auth/verify", get(mock_verify))
        .route("/api/auth/login", post(mock_login))
        .route("/api/users", get(mock_users))
        .route(
            "/api/users/{id}",
            get(mock_show).put(mock_update_user).delete(mock_delete_user),
        )
        .route("/api/roles", get(mock_broken).post(mock_create_role))
        .route("/api/roles/{id}", get(mock_show))
        .route("/api/permissions", get(mock_echo_authorization))
        .route("/api/permissions/{id}", get(mock_show))
        .route(
            "/api/permissions/{permission_id}/roles/{role_id}",
            post(mock_assignment).delete(mock_assignment),
        )
}

async fn spawn_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, mock_upstream()).await.unwrap();
    });
    format!("http://{addr}")
}

fn app_for(base_url: String) -> Router {
    let mut config = Config::default();
    config.upstream.base_url = base_url;
    Gateway::new(config).unwrap().router()
}

async fn test_app() -> Router {
    app_for(spawn_upstream().await)
}

fn request(method: &str, uri: &str) -> axum::http::request::Builder {
    Request::builder().method(method).uri(uri)
}

fn empty(builder: axum::http::request::Builder) -> Request<Body> {
    builder.body(Body::empty()).unwrap()
}

fn with_json(builder: axum::http::request::Builder, body: &Value) -> Request<Body> {
    builder
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

async fn body_bytes(response: Response) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

async fn json_body(response: Response) -> Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        let text = String::from_utf8_lossy(&bytes);
        panic!("not valid JSON: {text}");
    })
}

// ---------------------------------------------------------------------------
// Auth gate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_missing_token_is_rejected() {
    let app = test_app().await;

    for (method, uri) in [
        ("GET", "/api/users"),
        ("POST", "/api/roles"),
        ("DELETE", "/api/permissions/3"),
        ("GET", "/api/auth/verify"),
    ] {
        let response = app.clone().oneshot(empty(request(method, uri))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert_eq!(json_body(response).await, json!({"error": "no token provided"}));
    }
}

#[tokio::test]
async fn test_rejected_token_carries_upstream_message() {
    let app = test_app().await;

    let response = app
        .oneshot(empty(
            request("GET", "/api/users").header(header::AUTHORIZATION, "Bearer stale"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await, json!({"error": "token expired"}));
}

#[tokio::test]
async fn test_rejection_fallback_messages() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(empty(
            request("GET", "/api/users").header(header::AUTHORIZATION, "Bearer garbled"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await, json!({"error": "verification failed"}));

    let response = app
        .oneshot(empty(
            request("GET", "/api/users").header(header::AUTHORIZATION, "Bearer bare"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await, json!({"error": "authentication failed"}));
}

#[tokio::test]
async fn test_verification_without_user_object_is_accepted() {
    let app = test_app().await;

    let response = app
        .oneshot(empty(
            request("GET", "/api/users").header(header::AUTHORIZATION, "Bearer listed"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, Bytes::from_static(USERS_BODY.as_bytes()));
}

#[tokio::test]
async fn test_unreachable_verifier_is_internal_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let app = app_for(format!("http://{addr}"));

    let response = app
        .oneshot(empty(
            request("GET", "/api/users").header(header::AUTHORIZATION, "Bearer good"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await, json!({"error": "internal error"}));
}

#[tokio::test]
async fn test_header_token_wins_over_cookie() {
    let app = test_app().await;

    let response = app
        .oneshot(empty(
            request("GET", "/api/permissions")
                .header(header::AUTHORIZATION, "Bearer good")
                .header(header::COOKIE, "token=stale"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"authorization": "good"}));
}

#[tokio::test]
async fn test_cookie_token_is_forwarded_as_bearer() {
    let app = test_app().await;

    let response = app
        .oneshot(empty(
            request("GET", "/api/permissions").header(header::COOKIE, "theme=dark; token=good"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"authorization": "good"}));
}

// ---------------------------------------------------------------------------
// Pass-through
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_success_is_relayed_byte_for_byte() {
    let app = test_app().await;

    let response = app
        .oneshot(empty(
            request("GET", "/api/users").header(header::AUTHORIZATION, "Bearer good"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    assert_eq!(body_bytes(response).await, Bytes::from_static(USERS_BODY.as_bytes()));
}

#[tokio::test]
async fn test_item_routes_of_every_collection() {
    let app = test_app().await;

    for (uri, id) in [
        ("/api/users/7", "7"),
        ("/api/roles/ops%20team", "ops team"),
        ("/api/permissions/users%3Aread", "users:read"),
    ] {
        let response = app
            .clone()
            .oneshot(empty(
                request("GET", uri).header(header::AUTHORIZATION, "Bearer good"),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(json_body(response).await, json!({"id": id}), "{uri}");
    }
}

#[tokio::test]
async fn test_created_status_is_kept() {
    let app = test_app().await;

    let response = app
        .oneshot(with_json(
            request("POST", "/api/roles").header(header::AUTHORIZATION, "Bearer good"),
            &json!({"name": "auditor"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(json_body(response).await, json!({"id": 5, "name": "auditor"}));
}

#[tokio::test]
async fn test_put_with_empty_body_relays_upstream_validation() {
    let app = test_app().await;

    let response = app
        .oneshot(empty(
            request("PUT", "/api/users/42").header(header::AUTHORIZATION, "Bearer good"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await, json!({"error": "email required"}));
}

#[tokio::test]
async fn test_put_forwards_body_and_id() {
    let app = test_app().await;

    let response = app
        .oneshot(with_json(
            request("PUT", "/api/users/42").header(header::AUTHORIZATION, "Bearer good"),
            &json!({"email": "jane@example.com"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"id": "42", "email": "jane@example.com"})
    );
}

#[tokio::test]
async fn test_no_content_is_relayed_empty() {
    let app = test_app().await;

    let response = app
        .oneshot(empty(
            request("DELETE", "/api/users/42").header(header::AUTHORIZATION, "Bearer good"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_internal_error() {
    let app = test_app().await;

    let response = app
        .oneshot(
            request("POST", "/api/roles")
                .header(header::AUTHORIZATION, "Bearer good")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"name\":"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(response).await, json!({"error": "internal error"}));
}

#[tokio::test]
async fn test_non_json_upstream_error_is_internal_error() {
    let app = test_app().await;

    let response = app
        .oneshot(empty(
            request("GET", "/api/roles").header(header::AUTHORIZATION, "Bearer good"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(response).await, json!({"error": "internal error"}));
}

#[tokio::test]
async fn test_role_assignment_routes() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(empty(
            request("POST", "/api/permissions/3/roles/9")
                .header(header::AUTHORIZATION, "Bearer good"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"permission": "3", "role": "9"}));

    let response = app
        .clone()
        .oneshot(with_json(
            request("POST", "/api/role-permissions/9/permissions")
                .header(header::AUTHORIZATION, "Bearer good"),
            &json!({"permissionId": 3}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"permission": "3", "role": "9"}));

    let response = app
        .clone()
        .oneshot(empty(
            request("DELETE", "/api/role-permissions/9/permissions/3")
                .header(header::AUTHORIZATION, "Bearer good"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"permission": "3", "role": "9"}));

    let response = app
        .oneshot(with_json(
            request("POST", "/api/role-permissions/9/permissions")
                .header(header::AUTHORIZATION, "Bearer good"),
            &json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await, json!({"error": "permissionId is required"}));
}

// ---------------------------------------------------------------------------
// Login / verify / logout
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_login_requires_credentials() {
    let app = test_app().await;

    for body in [json!({}), json!({"username": "admin"}), json!({"username": "", "password": "x"})] {
        let response = app
            .clone()
            .oneshot(with_json(request("POST", "/api/auth/login"), &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({"error": "username and password are required"})
        );
    }
}

#[tokio::test]
async fn test_login_failure_is_relayed() {
    let app = test_app().await;

    let response = app
        .oneshot(with_json(
            request("POST", "/api/auth/login"),
            &json!({"username": "admin", "password": "wrong"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    assert_eq!(json_body(response).await, json!({"error": "invalid credentials"}));
}

#[tokio::test]
async fn test_login_success_sets_cookie() {
    let app = test_app().await;

    let response = app
        .oneshot(with_json(
            request("POST", "/api/auth/login"),
            &json!({"username": "admin", "password": "secret", "remember": true}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap().to_string();
    assert!(cookie.starts_with("token=good;"));
    assert!(cookie.contains("HttpOnly"));

    let body = json_body(response).await;
    assert_eq!(body["token"], "good");
    assert_eq!(body["received"], json!(["password", "username"]));
}

#[tokio::test]
async fn test_login_cookie_can_be_disabled() {
    let mut config = Config::default();
    config.upstream.base_url = spawn_upstream().await;
    config.auth.set_cookie_on_login = false;
    let app = Gateway::new(config).unwrap().router();

    let response = app
        .oneshot(with_json(
            request("POST", "/api/auth/login"),
            &json!({"username": "admin", "password": "secret"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn test_login_transport_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let app = app_for(format!("http://{addr}"));

    let response = app
        .oneshot(with_json(
            request("POST", "/api/auth/login"),
            &json!({"username": "admin", "password": "secret"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(response).await, json!({"error": "internal error"}));
}

#[tokio::test]
async fn test_verify_passes_through() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(empty(
            request("GET", "/api/auth/verify").header(header::COOKIE, "token=good"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"user": {"id": 1, "username": "admin"}})
    );

    let response = app
        .clone()
        .oneshot(empty(
            request("GET", "/api/auth/verify").header(header::AUTHORIZATION, "Bearer stale"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await, json!({"error": "token expired"}));

    let response = app
        .oneshot(empty(
            request("GET", "/api/auth/verify").header(header::AUTHORIZATION, "Bearer garbled"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await, json!({"error": "verification failed"}));
}

#[tokio::test]
async fn test_logout_expires_cookie() {
    let app = test_app().await;

    let response = app
        .oneshot(empty(request("POST", "/api/auth/logout")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap().to_string();
    assert!(cookie.starts_with("token=;"));
    assert!(cookie.contains("Max-Age=0"));
    assert_eq!(json_body(response).await, json!({"message": "logged out"}));
}

// ---------------------------------------------------------------------------
// Route guard
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_guard_redirects_without_token() {
    let app = test_app().await;

    let response = app
        .oneshot(empty(request("GET", "/dashboard/x/anything")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/login?redirect=%2Fdashboard%2Fx%2Fanything"
    );
}

#[tokio::test]
async fn test_guard_allows_with_token_cookie() {
    let app = test_app().await;

    let response = app
        .oneshot(empty(
            request("GET", "/settings/role-management").header(header::COOKIE, "token=anything"),
        ))
        .await
        .unwrap();

    // no static directory configured, so the page itself is a 404
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_guard_ignores_public_paths() {
    let app = test_app().await;

    for uri in ["/", "/login", "/about"] {
        let response = app.clone().oneshot(empty(request("GET", uri))).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn test_guard_serves_static_pages() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("dashboard")).unwrap();
    std::fs::write(dir.path().join("dashboard/index.html"), "<h1>dashboard</h1>").unwrap();

    let mut config = Config::default();
    config.upstream.base_url = spawn_upstream().await;
    config.gateway.static_dir = Some(dir.path().to_path_buf());
    let app = Gateway::new(config).unwrap().router();

    let response = app
        .clone()
        .oneshot(empty(request("GET", "/dashboard/index.html")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);

    let response = app
        .oneshot(empty(
            request("GET", "/dashboard/index.html").header(header::COOKIE, "token=t"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, Bytes::from_static(b"<h1>dashboard</h1>"));
}

#[tokio::test]
async fn test_guard_covers_alternate_spellings_of_static_pages() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("dashboard")).unwrap();
    std::fs::write(dir.path().join("dashboard/index.html"), "<h1>dashboard</h1>").unwrap();

    let mut config = Config::default();
    config.upstream.base_url = spawn_upstream().await;
    config.gateway.static_dir = Some(dir.path().to_path_buf());
    let app = Gateway::new(config).unwrap().router();

    for uri in [
        "/%64ashboard/index.html",
        "//dashboard/index.html",
        "/./dashboard/index.html",
    ] {
        let response = app.clone().oneshot(empty(request("GET", uri))).await.unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "{uri}");
        assert_eq!(
            response.headers()[header::LOCATION],
            "/login?redirect=%2Fdashboard%2Findex.html",
            "{uri}"
        );
    }

    let response = app
        .oneshot(empty(
            request("GET", "/%64ashboard/index.html").header(header::COOKIE, "token=t"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Navigation and health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_navigation_overview() {
    let app = test_app().await;

    let response = app
        .oneshot(empty(request("GET", "/api/navigation")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let ids: Vec<&str> = body["entries"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["id"].as_str())
        .collect();
    assert_eq!(ids, vec!["home", "dashboard"]);

    let keys: Vec<&str> = body["sidebars"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|s| s["key"].as_str())
        .collect();
    assert_eq!(
        keys,
        vec!["system-management", "business-intelligence", "inventory"]
    );
    assert_eq!(body["protectedPaths"][0], "/dashboard");
}

#[tokio::test]
async fn test_navigation_sidebar_lookup() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(empty(request("GET", "/api/navigation/sidebars/inventory")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 2);

    let response = app
        .clone()
        .oneshot(empty(request("GET", "/api/navigation/sidebars/nope")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(empty(request(
            "GET",
            "/api/navigation/sidebar?path=%2Fsettings%2Frole-management",
        )))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["key"], "system-management");
}

#[tokio::test]
async fn test_health() {
    let app = test_app().await;

    let response = app.oneshot(empty(request("GET", "/health"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}
