//! Public page handlers.
//!
//! The rendered UI lives in the browser bundle; these handlers only mark the
//! public entry points so the guards have somewhere to send callers.

use axum::response::Html;

/// Landing page.
pub async fn home() -> Html<&'static str> {
    Html("<!doctype html><title>Dossier portal</title><a href=\"/login\">Log in</a>")
}

/// Login page. Unauthenticated callers are redirected here.
pub async fn login() -> Html<&'static str> {
    Html("<!doctype html><title>Log in</title><main id=\"login\"></main>")
}
