//! Guard evaluation command.
//!
//! # Usage
//!
//! ```bash
//! dp-cli guard /fr/superadmin/users --role admin
//! # redirect /fr/admin/dashboard
//!
//! dp-cli guard /fr/superadmin/users --role admin --layer app-shell
//! # redirect /fr/admin/dossiers
//! ```

use std::io::Write;

use clap::ValueEnum;
use dossier_portal_core::{AccessGuard, AppShellGuard, Decision, EdgeGuard, Role, RoleError};
use thiserror::Error;

/// Errors that can occur while evaluating a guard.
#[derive(Debug, Error)]
pub enum GuardError {
    /// The role argument is not a known role or `none`.
    #[error("{0}. Valid roles: superadmin, admin, client, none")]
    InvalidRole(#[from] RoleError),

    /// Writing the result failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Enforcement layer to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Layer {
    /// Request middleware, redirects to dashboards.
    Edge,
    /// Layout shell, redirects to working pages.
    AppShell,
}

/// Parse a role argument; `none` means unauthenticated.
fn parse_role(value: &str) -> Result<Option<Role>, RoleError> {
    if value == "none" {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

/// Decide `path` for `role` with the guard of `layer`.
fn evaluate(path: &str, role: &str, layer: Layer) -> Result<Decision, GuardError> {
    let role = parse_role(role)?;
    let decision = match layer {
        Layer::Edge => EdgeGuard.decide(role, path),
        Layer::AppShell => AppShellGuard.decide(role, path),
    };
    tracing::debug!(?layer, path, ?role, %decision, "Evaluated guard");
    Ok(decision)
}

/// Print the guard decision for `path` and `role`.
///
/// # Errors
///
/// Returns `GuardError` if the role is unknown or stdout is closed.
pub fn run(path: &str, role: &str, layer: Layer) -> Result<(), GuardError> {
    let decision = evaluate(path, role, layer)?;
    writeln!(std::io::stdout().lock(), "{decision}")?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_role() {
        assert_eq!(parse_role("none").unwrap(), None);
        assert_eq!(parse_role("client").unwrap(), Some(Role::Client));
        assert!(parse_role("root").is_err());
    }

    #[test]
    fn test_layers_differ_on_denial() {
        let edge = evaluate("/fr/superadmin/users", "admin", Layer::Edge).unwrap();
        assert_eq!(edge.to_string(), "redirect /fr/admin/dashboard");

        let shell = evaluate("/fr/superadmin/users", "admin", Layer::AppShell).unwrap();
        assert_eq!(shell.to_string(), "redirect /fr/admin/dossiers");
    }

    #[test]
    fn test_allow_and_anonymous() {
        let allowed = evaluate("/en/user/dashboard", "client", Layer::Edge).unwrap();
        assert_eq!(allowed.to_string(), "allow");

        let anonymous = evaluate("/en/user/dashboard", "none", Layer::AppShell).unwrap();
        assert_eq!(anonymous.to_string(), "redirect /login");
    }

    #[test]
    fn test_unknown_role_is_an_error() {
        let err = evaluate("/fr/user/dashboard", "guest", Layer::Edge).unwrap_err();
        assert!(err.to_string().contains("guest"));
    }
}
