//! Per-role navigation menus and landing pages.

use serde::Serialize;

use crate::types::{Locale, Role};

/// One entry of the layout's side menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Absolute, locale-prefixed link.
    pub href: String,
    /// Translation key for the label.
    pub label_key: &'static str,
}

const SUPERADMIN_MENU: &[(&str, &str)] = &[
    ("superadmin/dashboard", "nav.superadminDashboard"),
    ("superadmin/users", "nav.users"),
    ("superadmin/messages", "nav.messages"),
    ("admin/dossiers", "nav.dossiers"),
    ("admin/dossiers-clotures", "nav.dossiersClotures"),
    ("admin/note-honoraires", "nav.noteHonoraires"),
    ("superadmin/profile", "nav.profile"),
];

const ADMIN_MENU: &[(&str, &str)] = &[
    ("admin/dashboard", "nav.dashboard"),
    ("admin/dossiers", "nav.dossiers"),
    ("admin/dossiers-clotures", "nav.dossiersClotures"),
    ("admin/note-honoraires", "nav.noteHonoraires"),
    ("admin/profile", "nav.profile"),
];

const CLIENT_MENU: &[(&str, &str)] = &[
    ("user/dashboard", "nav.dashboard"),
    ("user/nouveau-dossier", "nav.nouveauDossier"),
    ("user/consulter-dossier", "nav.consulterDossier"),
    ("user/contact", "nav.contact"),
    ("user/profile", "nav.profile"),
];

/// Side menu for `role`, in display order.
#[must_use]
pub fn menu_for(role: Role, locale: Locale) -> Vec<NavItem> {
    let entries = match role {
        Role::Superadmin => SUPERADMIN_MENU,
        Role::Admin => ADMIN_MENU,
        Role::Client => CLIENT_MENU,
    };

    entries
        .iter()
        .map(|&(rest, label_key)| NavItem {
            href: locale.path(rest),
            label_key,
        })
        .collect()
}

/// Landing page for `role` right after login.
#[must_use]
pub fn home_route(role: Role, locale: Locale) -> String {
    let rest = match role {
        Role::Superadmin => "superadmin/dashboard",
        Role::Admin => "admin/dashboard",
        Role::Client => "user/dashboard",
    };
    locale.path(rest)
}
