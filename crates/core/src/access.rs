//! Role-based route guarding.
//!
//! Every navigable path is either public or lives under `/{locale}/` and
//! belongs to at most one role partition (`user`, `admin`, `superadmin`).
//! Two guards enforce the same allow/deny rules at different layers:
//!
//! - [`EdgeGuard`] runs as request middleware before anything renders and
//!   sends denied callers to their dashboard.
//! - [`AppShellGuard`] runs again when the layout shell loads and sends
//!   denied callers to a working page of their own partition.
//!
//! Both share [`AccessGuard::decide`] and differ only in their
//! [`RedirectTable`]. Neither touches I/O; the caller derives the role.
//!
//! # Decision table
//!
//! ```text
//! role \ partition | user  | admin                      | superadmin
//! -----------------+-------+----------------------------+-----------
//! client           | allow | -> client target           | -> client target
//! admin            | -> admin target | allow            | -> admin target
//! superadmin       | -> superadmin target | allow, except the admin
//!                  |       | dashboard -> superadmin dashboard | allow
//! none             | -> /login everywhere
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{Locale, Role};

/// Where unauthenticated callers are sent.
pub const LOGIN_PATH: &str = "/login";

/// A role-scoped URL namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Partition {
    /// Client pages.
    User,
    /// Admin pages, also open to superadmins.
    Admin,
    /// Superadmin-only pages.
    Superadmin,
}

/// Partition segments in match order. The first match wins, so `user` takes
/// precedence over `admin`, which takes precedence over `superadmin`.
pub const PARTITION_ORDER: [(&str, Partition); 3] = [
    ("user", Partition::User),
    ("admin", Partition::Admin),
    ("superadmin", Partition::Superadmin),
];

/// Returns true for paths that skip the guards entirely.
///
/// The public set is the home page, the login page, the health check, static
/// assets, the JSON API, and any file-like path (one containing a `.`).
#[must_use]
pub fn is_public_path(path: &str) -> bool {
    matches!(path, "/" | "/login" | "/health" | "/api")
        || path.starts_with("/static/")
        || path.starts_with("/api/")
        || path.contains('.')
}

/// A locale-prefixed path split into its routing parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route<'a> {
    /// Locale from the first path segment.
    pub locale: Locale,
    /// Matched partition, if any.
    pub partition: Option<Partition>,
    /// Remainder after the partition segment, without surrounding slashes.
    pub rest: &'a str,
}

impl<'a> Route<'a> {
    /// Split `path` into locale, partition, and remainder.
    ///
    /// Returns `None` when the first segment is not a supported locale.
    #[must_use]
    pub fn parse(path: &'a str) -> Option<Self> {
        let trimmed = path.strip_prefix('/')?;
        let (locale_segment, remainder) = trimmed.split_once('/').unwrap_or((trimmed, ""));
        let locale = locale_segment.parse::<Locale>().ok()?;

        let matched = PARTITION_ORDER.iter().find_map(|(segment, partition)| {
            remainder
                .strip_prefix(*segment)
                .filter(|after| after.is_empty() || after.starts_with('/'))
                .map(|after| (*partition, after.trim_matches('/')))
        });

        Some(match matched {
            Some((partition, rest)) => Self {
                locale,
                partition: Some(partition),
                rest,
            },
            None => Self {
                locale,
                partition: None,
                rest: remainder.trim_matches('/'),
            },
        })
    }

    /// Returns true for the admin dashboard page itself.
    #[must_use]
    pub fn is_admin_dashboard(&self) -> bool {
        self.partition == Some(Partition::Admin) && self.rest == "dashboard"
    }
}

/// Outcome of a guard check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "target", rename_all = "snake_case")]
pub enum Decision {
    /// Let the navigation proceed.
    Allow,
    /// Send the caller to this absolute path instead.
    RedirectTo(String),
}

impl Decision {
    /// Returns true if the navigation may proceed.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Returns the redirect target, if any.
    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::RedirectTo(target) => Some(target),
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Allow => f.write_str("allow"),
            Self::RedirectTo(target) => write!(f, "redirect {target}"),
        }
    }
}

/// Redirect targets of a guard, relative to the caller's locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedirectTable {
    /// Where a client outside the `user` partition goes.
    pub client: &'static str,
    /// Where an admin outside the `admin` partition goes.
    pub admin: &'static str,
    /// Where a superadmin inside the `user` partition goes.
    pub superadmin: &'static str,
    /// Where a superadmin asking for the admin dashboard goes.
    pub superadmin_from_admin_dashboard: &'static str,
}

/// A route guard: one enforcement point with its own redirect targets.
pub trait AccessGuard {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Redirect targets used when this guard denies a navigation.
    fn redirects(&self) -> &RedirectTable;

    /// Decide whether `role` may navigate to `path`.
    ///
    /// Public paths are expected to be filtered out by the caller with
    /// [`is_public_path`]. A missing role always redirects to [`LOGIN_PATH`].
    /// A path without a supported locale, or outside every partition, is
    /// allowed for any authenticated role.
    fn decide(&self, role: Option<Role>, path: &str) -> Decision {
        let Some(role) = role else {
            return Decision::RedirectTo(LOGIN_PATH.to_string());
        };
        let Some(route) = Route::parse(path) else {
            return Decision::Allow;
        };
        let Some(partition) = route.partition else {
            return Decision::Allow;
        };

        let table = self.redirects();
        let target = match (role, partition) {
            (Role::Client, Partition::User)
            | (Role::Admin, Partition::Admin)
            | (Role::Superadmin, Partition::Superadmin) => None,
            (Role::Superadmin, Partition::Admin) => route
                .is_admin_dashboard()
                .then_some(table.superadmin_from_admin_dashboard),
            (Role::Superadmin, Partition::User) => Some(table.superadmin),
            (Role::Client, _) => Some(table.client),
            (Role::Admin, _) => Some(table.admin),
        };

        target.map_or(Decision::Allow, |rest| {
            Decision::RedirectTo(route.locale.path(rest))
        })
    }
}

/// Guard applied by request middleware before a page renders.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeGuard;

impl EdgeGuard {
    const REDIRECTS: RedirectTable = RedirectTable {
        client: "user/dashboard",
        admin: "admin/dashboard",
        superadmin: "superadmin/dashboard",
        superadmin_from_admin_dashboard: "superadmin/dashboard",
    };
}

impl AccessGuard for EdgeGuard {
    fn name(&self) -> &'static str {
        "edge"
    }

    fn redirects(&self) -> &RedirectTable {
        &Self::REDIRECTS
    }
}

/// Guard applied by the layout shell once a page loads.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppShellGuard;

impl AppShellGuard {
    const REDIRECTS: RedirectTable = RedirectTable {
        client: "user/consulter-dossier",
        admin: "admin/dossiers",
        superadmin: "superadmin/users",
        superadmin_from_admin_dashboard: "superadmin/dashboard",
    };
}

impl AccessGuard for AppShellGuard {
    fn name(&self) -> &'static str {
        "app_shell"
    }

    fn redirects(&self) -> &RedirectTable {
        &Self::REDIRECTS
    }
}
