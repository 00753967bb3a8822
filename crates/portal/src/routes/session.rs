//! Login and logout.
//!
//! The remote API authenticates the user; the browser forwards its login
//! result here. The portal keeps the identity twice: a [`StoredSession`] in
//! the server session for the app-shell guard, and three identity cookies for
//! the edge guard.

use axum::{
    Json,
    extract::State,
    http::{HeaderValue, StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tower_sessions::{
    Session,
    cookie::{Cookie, SameSite, time::Duration},
};

use dossier_portal_core::{Locale, Role, UserProfile, UserType, navigation::home_route};

use crate::error::{AppError, Result};
use crate::models::{StoredSession, cookie_names, session_keys};
use crate::services::auth::{AuthError, SessionContext, validate_token};
use crate::state::AppState;

/// Login result as returned by the remote API.
#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub access_token: String,
    pub user_type: UserType,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    /// Profile fetched right after login, if the call succeeded.
    #[serde(default)]
    pub user: Option<UserProfile>,
    /// Interface locale for the landing page.
    #[serde(default)]
    pub locale: Option<Locale>,
}

/// Response to a successful login.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub role: Role,
    /// Landing page for the role.
    pub redirect: String,
}

/// Build one identity cookie.
fn identity_cookie(
    name: &'static str,
    value: String,
    max_age: Duration,
    secure: bool,
) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .max_age(max_age)
        .same_site(SameSite::Strict)
        .http_only(true)
        .secure(secure)
        .build()
}

fn append_cookies(response: &mut Response, cookies: &[Cookie<'static>]) -> Result<()> {
    for cookie in cookies {
        let value = HeaderValue::from_str(&cookie.to_string())
            .map_err(|e| AppError::Internal(format!("invalid cookie header: {e}")))?;
        response.headers_mut().append(SET_COOKIE, value);
    }
    Ok(())
}

/// Store the remote login result and set the identity cookies.
///
/// # Errors
///
/// Returns `AppError::Auth` when the token cannot be decoded or has expired.
/// Nothing is stored in that case.
pub async fn create_session(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginPayload>,
) -> Result<Response> {
    let now = Utc::now();
    let claims = validate_token(&payload.access_token, now).map_err(AuthError::from)?;

    let is_superadmin = payload
        .user
        .as_ref()
        .is_some_and(UserProfile::has_superadmin_marker);

    let stored = StoredSession {
        token: payload.access_token,
        user_type: payload.user_type,
        is_superadmin,
        profile: payload.user,
    };

    let role = SessionContext::resolve(&stored, now)
        .role
        .ok_or(AuthError::Undecidable)?;

    // New identity, new session ID
    session.cycle_id().await?;
    session
        .insert(session_keys::CURRENT_SESSION, &stored)
        .await?;

    let max_age = Duration::seconds(payload.expires_in);
    let secure = state.config().secure_cookies();
    let mut cookies = vec![
        identity_cookie(cookie_names::TOKEN, stored.token.clone(), max_age, secure),
        identity_cookie(
            cookie_names::USER_TYPE,
            stored.user_type.to_string(),
            max_age,
            secure,
        ),
    ];
    if is_superadmin {
        cookies.push(identity_cookie(
            cookie_names::SUPERADMIN,
            "true".to_string(),
            max_age,
            secure,
        ));
    }

    tracing::info!(%role, token_exp = claims.exp, "Session created");

    let body = LoginResponse {
        role,
        redirect: home_route(role, payload.locale.unwrap_or_default()),
    };
    let mut response = Json(body).into_response();
    append_cookies(&mut response, &cookies)?;
    Ok(response)
}

/// Log out: flush the server session and expire the identity cookies.
///
/// # Errors
///
/// Returns `AppError::Session` if the session store fails.
pub async fn delete_session(State(state): State<AppState>, session: Session) -> Result<Response> {
    session.flush().await?;

    let secure = state.config().secure_cookies();
    let cookies: Vec<_> = cookie_names::ALL
        .iter()
        .map(|&name| identity_cookie(name, String::new(), Duration::ZERO, secure))
        .collect();

    let mut response = StatusCode::NO_CONTENT.into_response();
    append_cookies(&mut response, &cookies)?;
    Ok(response)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_cookie_attributes() {
        let cookie = identity_cookie("token", "abc".to_string(), Duration::seconds(3600), false);
        let header = cookie.to_string();
        assert!(header.starts_with("token=abc"));
        assert!(header.contains("Path=/"));
        assert!(header.contains("Max-Age=3600"));
        assert!(header.contains("SameSite=Strict"));
        assert!(!header.contains("Secure"));
    }

    #[test]
    fn test_identity_cookie_secure() {
        let cookie = identity_cookie("userType", "admin".to_string(), Duration::ZERO, true);
        let header = cookie.to_string();
        assert!(header.contains("Secure"));
        assert!(header.contains("Max-Age=0"));
    }

    #[test]
    fn test_login_payload_defaults() {
        let payload: LoginPayload = serde_json::from_str(
            r#"{"access_token": "a.b.c", "user_type": "client", "expires_in": 60}"#,
        )
        .unwrap();
        assert_eq!(payload.user_type, UserType::Client);
        assert!(payload.user.is_none());
        assert!(payload.locale.is_none());
    }

    #[test]
    fn test_login_payload_rejects_unknown_user_type() {
        let result = serde_json::from_str::<LoginPayload>(
            r#"{"access_token": "a.b.c", "user_type": "root", "expires_in": 60}"#,
        );
        assert!(result.is_err());
    }
}
