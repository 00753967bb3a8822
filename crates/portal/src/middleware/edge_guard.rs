//! Edge guard middleware.
//!
//! Runs on every request before routing. Public paths pass straight through.
//! For everything else the caller's role is resolved from the identity
//! cookies and checked with [`EdgeGuard`]; a denied navigation gets a
//! `303 See Other` to the guard's target. An allowed request carries its
//! [`SessionContext`] in the request extensions.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;

use dossier_portal_core::access::{AccessGuard, Decision, EdgeGuard, is_public_path};

use crate::services::auth::{CookieStore, SessionContext};

/// Enforce role-based access from the identity cookies.
pub async fn edge_guard_middleware(mut request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    if is_public_path(&path) {
        return next.run(request).await;
    }

    let store = CookieStore::from_headers(request.headers());
    let context = SessionContext::resolve(&store, Utc::now());

    match EdgeGuard.decide(context.role, &path) {
        Decision::Allow => {
            request.extensions_mut().insert(context);
            next.run(request).await
        }
        Decision::RedirectTo(target) => {
            tracing::debug!(
                guard = EdgeGuard.name(),
                %path,
                role = ?context.role,
                %target,
                "Navigation denied"
            );
            Redirect::to(&target).into_response()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        Extension, Router,
        body::Body,
        http::{Request as HttpRequest, StatusCode, header},
        routing::get,
    };
    use serde_json::json;
    use tower::ServiceExt;

    use super::*;
    use crate::services::auth::test_tokens::token;

    fn app() -> Router {
        Router::new()
            .route("/", get(|| async { "home" }))
            .route(
                "/{locale}/{*rest}",
                get(|Extension(context): Extension<SessionContext>| async move {
                    format!("{:?}", context.role)
                }),
            )
            .layer(axum::middleware::from_fn(edge_guard_middleware))
    }

    fn cookie_for(kind: &str, superadmin: bool) -> String {
        let token = token(&json!({"exp": 4_000_000_000_i64, "type": kind}));
        let mut cookie = format!("token={token}; userType={kind}");
        if superadmin {
            cookie.push_str("; isSuperAdmin=true");
        }
        cookie
    }

    async fn get_with(path: &str, cookie: Option<&str>) -> axum::response::Response {
        let mut request = HttpRequest::get(path);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        app()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    fn location(response: &axum::response::Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
    }

    #[tokio::test]
    async fn test_public_path_passes_without_cookies() {
        let response = get_with("/", None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_anonymous_is_sent_to_login() {
        let response = get_with("/fr/user/dashboard", None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/login");
    }

    #[tokio::test]
    async fn test_expired_token_is_sent_to_login() {
        let expired = token(&json!({"exp": 1_000, "type": "admin"}));
        let cookie = format!("token={expired}; userType=admin; isSuperAdmin=true");
        let response = get_with("/fr/admin/dossiers", Some(&cookie)).await;
        assert_eq!(location(&response), "/login");
    }

    #[tokio::test]
    async fn test_client_is_sent_to_dashboard() {
        let cookie = cookie_for("client", false);
        let response = get_with("/en/admin/dossiers", Some(&cookie)).await;
        assert_eq!(location(&response), "/en/user/dashboard");
    }

    #[tokio::test]
    async fn test_superadmin_is_steered_from_admin_dashboard() {
        let cookie = cookie_for("admin", true);
        let response = get_with("/ar/admin/dashboard", Some(&cookie)).await;
        assert_eq!(location(&response), "/ar/superadmin/dashboard");
    }

    #[tokio::test]
    async fn test_allowed_request_carries_context() {
        let cookie = cookie_for("admin", false);
        let response = get_with("/fr/admin/dossiers", Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Some(Admin)");
    }
}
