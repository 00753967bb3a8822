//! App-shell endpoint.
//!
//! Every localized page loads through the layout shell, which checks access a
//! second time against the server session. The edge guard has already run on
//! the cookies; this check catches a session that no longer matches them.

use axum::{
    Json,
    http::Uri,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use serde::Serialize;
use tower_sessions::Session;

use dossier_portal_core::{
    AccessGuard, AppShellGuard, Decision, Locale, Partition, Role,
    access::{LOGIN_PATH, Route},
    navigation::{NavItem, menu_for},
};

use crate::error::{AppError, Result};
use crate::models::{StoredSession, session_keys};
use crate::services::auth::SessionContext;

/// What the layout shell needs to render a page.
#[derive(Debug, Serialize)]
pub struct ShellView {
    pub locale: Locale,
    pub role: Role,
    /// Requested path.
    pub path: String,
    pub partition: Option<Partition>,
    /// Side menu for the role.
    pub navigation: Vec<NavItem>,
}

/// Guard a localized page and describe its shell.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an allowed path with an unsupported
/// locale, or `AppError::Session` if the session store fails.
pub async fn app_shell(session: Session, uri: Uri) -> Result<Response> {
    let path = uri.path();

    let stored: Option<StoredSession> = session.get(session_keys::CURRENT_SESSION).await?;
    let context = stored
        .as_ref()
        .map(|stored| SessionContext::resolve(stored, Utc::now()))
        .unwrap_or_default();

    match (AppShellGuard.decide(context.role, path), context.role) {
        (Decision::Allow, Some(role)) => {
            let route = Route::parse(path).ok_or_else(|| AppError::NotFound(path.to_string()))?;
            Ok(Json(ShellView {
                locale: route.locale,
                role,
                path: path.to_string(),
                partition: route.partition,
                navigation: menu_for(role, route.locale),
            })
            .into_response())
        }
        (Decision::RedirectTo(target), role) => {
            tracing::debug!(
                guard = AppShellGuard.name(),
                %path,
                ?role,
                %target,
                "Navigation denied"
            );
            Ok(Redirect::to(&target).into_response())
        }
        (Decision::Allow, None) => Ok(Redirect::to(LOGIN_PATH).into_response()),
    }
}
