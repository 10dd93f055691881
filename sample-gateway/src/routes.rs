//! Axum route handlers for the Sample API.

use std::sync::Arc;

use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::StatusCode,
    middleware::from_fn_with_state,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use sample_core::{Foobar, Role};
use sample_store::{Datasource, FoobarService};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::Settings,
    error::ApiError,
    guard::{require_role, RequiredRole},
};

// ── Shared state ─────────────────────────────────────────────────────────────

/// Collaborators injected into the route group at construction.
#[derive(Clone)]
pub struct AppState {
    /// Named configuration values.
    pub settings: Arc<Settings>,
    /// Database query collaborator.
    pub database: Arc<dyn Datasource>,
    /// Foobar domain collaborator.
    pub foobars: Arc<FoobarService>,
}

// ── Request / response types ──────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct HelloQuery {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NumberQuery {
    pub bar: Option<i64>,
}

/// Body accepted by `POST /sample/hello/body`. Unknown fields are
/// rejected by the deserializer.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SampleBody {
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<bool>,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router with the given collaborators.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/sample", sample_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// The `/sample` route group. The admin route carries its role
/// requirement as a route layer consumed by the guard.
fn sample_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(sample))
        .route("/hello", get(hello))
        .route("/hello/query", get(hello_query))
        .route("/hello/param/{name}", get(hello_param))
        .route("/hello/number/{foo}", get(hello_number))
        .route("/hello/body", post(hello_body))
        .route("/database", get(database))
        .route("/foobars", get(foobars))
        .route(
            "/admin",
            get(admin).route_layer(from_fn_with_state(
                RequiredRole(Role::Admin),
                require_role,
            )),
        )
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /sample` — the `hello` and `foo` configuration values.
/// Keys without a value serialize as `null`.
pub async fn sample(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "hello": state.settings.get("hello"),
        "foo": state.settings.get("foo"),
    }))
}

/// `GET /sample/hello` — echo the original request URI.
pub async fn hello(OriginalUri(uri): OriginalUri) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": uri.to_string(),
    }))
}

/// `GET /sample/hello/query?name=` — greet by query parameter.
///
/// # Errors
/// Returns [`ApiError::InvalidParameter`] if `name` is absent or empty.
pub async fn hello_query(Query(query): Query<HelloQuery>) -> Result<String, ApiError> {
    match query.name.as_deref() {
        Some(name) if !name.is_empty() => Ok(format!("helloQuery: {name}")),
        _ => Err(ApiError::InvalidParameter),
    }
}

/// `GET /sample/hello/param/:name` — greet by path segment.
pub async fn hello_param(Path(name): Path<String>) -> String {
    format!("helloParam: {name}")
}

/// `GET /sample/hello/number/:foo?bar=` — declared-numeric parameters.
///
/// Both values are parsed to integers by the extractors; non-numeric
/// input is rejected with the framework's 4xx response, and an absent
/// `bar` serializes as `null`.
pub async fn hello_number(
    Path(foo): Path<i64>,
    Query(query): Query<NumberQuery>,
) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "foo": foo,
        "bar": query.bar,
        "fooBar": "string",
    }))
}

/// `POST /sample/hello/body` — echo the JSON serialization of the
/// parsed body. Structural validation is the `Json` extractor's
/// rejection.
///
/// # Errors
/// Returns [`ApiError::Serialization`] if the parsed body cannot be
/// re-serialized.
pub async fn hello_body(Json(body): Json<SampleBody>) -> Result<String, ApiError> {
    Ok(format!("helloBody: {}", serde_json::to_string(&body)?))
}

/// `GET /sample/database` — first canned query of the database
/// collaborator.
///
/// # Errors
/// Propagates [`ApiError::Store`] from the collaborator unchanged.
pub async fn database(State(state): State<AppState>) -> Result<Json<Vec<Foobar>>, ApiError> {
    Ok(Json(state.database.query_first_set().await?))
}

/// `GET /sample/foobars` — rows from the foobar domain collaborator.
///
/// # Errors
/// Propagates [`ApiError::Store`] from the collaborator unchanged.
pub async fn foobars(State(state): State<AppState>) -> Result<Json<Vec<Foobar>>, ApiError> {
    Ok(Json(state.foobars.get_foobars().await?))
}

/// `GET /sample/admin` — reachable only through the admin role guard.
pub async fn admin() -> &'static str {
    "Need admin role"
}
