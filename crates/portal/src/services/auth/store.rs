//! Read-only session stores.
//!
//! The guards never read cookies or sessions directly. Each enforcement point
//! hands [`SessionContext::resolve`](super::SessionContext::resolve) a store:
//! the edge middleware a [`CookieStore`], the app shell a
//! [`StoredSession`].

use axum::http::{HeaderMap, header::COOKIE};
use tower_sessions::cookie::Cookie;

use dossier_portal_core::{UserProfile, UserType};

use crate::models::{StoredSession, cookie_names};

/// Read access to the persisted identity facts of a caller.
pub trait SessionStore {
    /// Raw access token.
    fn token(&self) -> Option<&str>;

    /// User type recorded at login.
    fn user_type(&self) -> Option<UserType>;

    /// Persisted superadmin flag.
    fn superadmin_flag(&self) -> bool;

    /// Cached user profile.
    fn profile(&self) -> Option<&UserProfile>;
}

/// Identity facts carried by request cookies.
///
/// Cookies never hold the profile, so only the flag can make a superadmin
/// at this layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieStore {
    token: Option<String>,
    user_type: Option<UserType>,
    superadmin: bool,
}

impl CookieStore {
    /// Collect the identity cookies from the request headers.
    ///
    /// Unparsable cookies and empty values are skipped. When a cookie appears
    /// more than once, the last value wins.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut store = Self::default();

        let cookies = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(Cookie::split_parse)
            .filter_map(Result::ok);

        for cookie in cookies {
            let value = cookie.value();
            if value.is_empty() {
                continue;
            }
            match cookie.name() {
                cookie_names::TOKEN => store.token = Some(value.to_string()),
                cookie_names::USER_TYPE => store.user_type = value.parse().ok(),
                cookie_names::SUPERADMIN => store.superadmin = value == "true",
                _ => {}
            }
        }

        store
    }
}

impl SessionStore for CookieStore {
    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn user_type(&self) -> Option<UserType> {
        self.user_type
    }

    fn superadmin_flag(&self) -> bool {
        self.superadmin
    }

    fn profile(&self) -> Option<&UserProfile> {
        None
    }
}

impl SessionStore for StoredSession {
    fn token(&self) -> Option<&str> {
        (!self.token.is_empty()).then_some(self.token.as_str())
    }

    fn user_type(&self) -> Option<UserType> {
        Some(self.user_type)
    }

    fn superadmin_flag(&self) -> bool {
        self.is_superadmin
    }

    fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }
}
