//! HTTP route handlers for the portal.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                    - Landing page
//! GET    /login               - Login page
//! GET    /health              - Health check (registered in `build_router`)
//!
//! # Session
//! POST   /api/session         - Store the remote login result, set identity cookies
//! DELETE /api/session         - Log out, expire identity cookies
//!
//! # Claims
//! POST   /api/qr/parse        - Fill a claim form from a scanned QR payload
//!
//! # App shell (role-guarded)
//! GET    /{locale}            - Shell view for a bare locale
//! GET    /{locale}/{*rest}    - Shell view for any localized page
//! ```

pub mod pages;
pub mod qr;
pub mod session;
pub mod shell;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the JSON API router, nested under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/session",
            post(session::create_session).delete(session::delete_session),
        )
        .route("/qr/parse", post(qr::parse_qr))
}

/// Create all portal routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/login", get(pages::login))
        .nest("/api", api_routes())
        .route("/{locale}", get(shell::app_shell))
        .route("/{locale}/{*rest}", get(shell::app_shell))
}
