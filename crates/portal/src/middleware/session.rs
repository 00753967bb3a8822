//! Session middleware configuration.
//!
//! Sets up in-memory sessions using tower-sessions. The server session plays
//! the part of the browser's local storage: it keeps the token, flags, and
//! cached profile that the app-shell guard reads.

use tower_sessions::{
    Expiry, MemoryStore, SessionManagerLayer,
    cookie::{SameSite, time::Duration},
};

use crate::config::PortalConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "dp_session";

/// Create the session layer with an in-memory store.
///
/// Sessions are lost on restart; users then log in again, exactly as after
/// their access token expires.
#[must_use]
pub fn create_session_layer(config: &PortalConfig) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(Duration::seconds(
            config.session_inactivity_secs,
        )))
        .with_secure(config.secure_cookies())
        .with_same_site(SameSite::Strict)
        .with_http_only(true)
        .with_path("/")
}
