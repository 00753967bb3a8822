//! Integration tests for the dossier portal.
//!
//! Tests drive the full router in-process with `tower::ServiceExt::oneshot`,
//! so no server or network is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p dossier-portal-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `session_flow` - Login, guarded navigation, logout
//! - `guards` - Edge and app-shell redirects over HTTP
//! - `qr_endpoint` - QR claim parsing API

use std::collections::BTreeMap;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, Response, StatusCode, header},
};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};
use tower::ServiceExt;
use tower_sessions::cookie::{Cookie, time::Duration};

use dossier_portal::{build_router, config::PortalConfig, state::AppState};

/// Expiry far in the future, for tokens that should stay valid.
pub const FAR_FUTURE_EXP: i64 = 4_000_000_000;

/// Build a JWT carrying `claims`, signed with a key the portal never sees.
///
/// # Panics
///
/// Panics if `claims` cannot be encoded.
#[must_use]
pub fn token(claims: &Value) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(b"remote-api-secret"),
    )
    .expect("Failed to encode token")
}

/// Build a valid token for `user_type`.
#[must_use]
pub fn valid_token(user_type: &str) -> String {
    token(&json!({"exp": FAR_FUTURE_EXP, "type": user_type}))
}

/// A browser-like client over one in-process portal.
///
/// Keeps a cookie jar: `Set-Cookie` headers are stored, and cookies expired
/// with `Max-Age=0` are dropped.
pub struct TestContext {
    app: Router,
    cookies: BTreeMap<String, String>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Create a context over a fresh portal with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            app: build_router(AppState::new(PortalConfig::default())),
            cookies: BTreeMap::new(),
        }
    }

    /// Current value of a cookie in the jar.
    #[must_use]
    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    /// Overwrite a cookie in the jar, as a tampering browser would.
    pub fn set_cookie(&mut self, name: &str, value: &str) {
        self.cookies.insert(name.to_string(), value.to_string());
    }

    /// Send a request with the jar's cookies and store any cookies set.
    pub async fn send(
        &mut self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Response<Body> {
        let content = body.map(|json| ("application/json", json.to_string()));
        self.send_raw(method, path, content).await
    }

    /// Send a request with an arbitrary body and content type.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the router fails.
    pub async fn send_raw(
        &mut self,
        method: Method,
        path: &str,
        content: Option<(&str, String)>,
    ) -> Response<Body> {
        let mut request = Request::builder().method(method).uri(path);
        if !self.cookies.is_empty() {
            let cookie_header = self
                .cookies
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; ");
            request = request.header(header::COOKIE, cookie_header);
        }
        let body = match content {
            Some((content_type, body)) => {
                request = request.header(header::CONTENT_TYPE, content_type);
                Body::from(body)
            }
            None => Body::empty(),
        };

        let response = self
            .app
            .clone()
            .oneshot(request.body(body).expect("Failed to build request"))
            .await
            .expect("Router is infallible");

        for value in response.headers().get_all(header::SET_COOKIE) {
            let Some(cookie) = value.to_str().ok().and_then(|v| Cookie::parse(v).ok()) else {
                continue;
            };
            if cookie.max_age() == Some(Duration::ZERO) {
                self.cookies.remove(cookie.name());
            } else {
                self.cookies
                    .insert(cookie.name().to_string(), cookie.value().to_string());
            }
        }

        response
    }

    /// `GET path`.
    pub async fn get(&mut self, path: &str) -> Response<Body> {
        self.send(Method::GET, path, None).await
    }

    /// `POST path` with a JSON body.
    pub async fn post_json(&mut self, path: &str, body: &Value) -> Response<Body> {
        self.send(Method::POST, path, Some(body)).await
    }

    /// `DELETE path`.
    pub async fn delete(&mut self, path: &str) -> Response<Body> {
        self.send(Method::DELETE, path, None).await
    }

    /// Log in with a valid token for `user_type` and an optional profile.
    ///
    /// # Panics
    ///
    /// Panics if the portal rejects the login.
    pub async fn login(&mut self, user_type: &str, user: Option<Value>) -> Value {
        let mut payload = json!({
            "access_token": valid_token(user_type),
            "user_type": user_type,
            "expires_in": 3600,
        });
        if let Some(user) = user {
            payload["user"] = user;
        }
        let response = self.post_json("/api/session", &payload).await;
        assert_eq!(response.status(), StatusCode::OK, "login failed");
        body_json(response).await
    }
}

/// Read a response body as bytes.
///
/// # Panics
///
/// Panics if the body cannot be read.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body")
        .to_vec()
}

/// Read a response body as JSON.
///
/// # Panics
///
/// Panics if the body is not JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("Body is not JSON")
}

/// The `Location` header of a redirect.
///
/// # Panics
///
/// Panics if the response is not a redirect.
#[must_use]
pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("Response has no Location header")
}
