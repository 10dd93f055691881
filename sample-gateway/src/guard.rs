//! Role-based access guard.
//!
//! A route declares its required role by attaching [`require_role`] as a
//! route layer with a [`RequiredRole`] state. The guard rejects the
//! request before the handler runs unless the `x-roles` header grants
//! that role.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use sample_core::Role;

use crate::error::ApiError;

/// Header carrying the caller's roles as a comma-separated list.
pub const ROLES_HEADER: &str = "x-roles";

/// Role a guarded route requires.
#[derive(Debug, Clone, Copy)]
pub struct RequiredRole(pub Role);

/// Middleware enforcing [`RequiredRole`] on the wrapped route.
///
/// Unauthorized callers receive [`ApiError::Forbidden`] and the handler
/// never executes.
pub async fn require_role(
    State(RequiredRole(required)): State<RequiredRole>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let raw = request
        .headers()
        .get(ROLES_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    if !roles_from_header(raw).contains(&required) {
        tracing::debug!(role = %required, "request rejected by role guard");
        return ApiError::Forbidden(required).into_response();
    }

    next.run(request).await
}

/// Parse a comma-separated roles header. Unknown role names are ignored.
#[must_use]
pub fn roles_from_header(raw: &str) -> Vec<Role> {
    raw.split(',')
        .filter_map(|part| part.parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        middleware::from_fn_with_state,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    use super::*;

    async fn dummy_handler() -> &'static str {
        "ok"
    }

    fn guarded_app(required: Role) -> Router {
        Router::new().route(
            "/guarded",
            get(dummy_handler)
                .route_layer(from_fn_with_state(RequiredRole(required), require_role)),
        )
    }

    fn request(roles: Option<&str>) -> Request<Body> {
        let builder = Request::builder().uri("/guarded");
        let builder = match roles {
            Some(value) => builder.header(ROLES_HEADER, value),
            None => builder,
        };
        match builder.body(Body::empty()) {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        }
    }

    #[tokio::test]
    async fn missing_header_is_forbidden() {
        let resp = match guarded_app(Role::Admin).oneshot(request(None)).await {
            Ok(r) => r,
            Err(e) => panic!("guard error: {e}"),
        };
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn wrong_role_is_forbidden() {
        let resp = match guarded_app(Role::Admin).oneshot(request(Some("user"))).await {
            Ok(r) => r,
            Err(e) => panic!("guard error: {e}"),
        };
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn matching_role_passes_through() {
        let resp = match guarded_app(Role::Admin)
            .oneshot(request(Some("user,admin")))
            .await
        {
            Ok(r) => r,
            Err(e) => panic!("guard error: {e}"),
        };
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[test]
    fn header_parse_ignores_unknown_roles_and_whitespace() {
        let roles = roles_from_header("Admin, bogus ,user");
        assert_eq!(roles, vec![Role::Admin, Role::User]);
        assert!(roles_from_header("").is_empty());
        assert!(roles_from_header("root,superuser").is_empty());
    }
}
