//! Session-related types.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use dossier_portal_core::{UserProfile, UserType};

/// Session-stored identity.
///
/// Written once at login from the remote API's login and profile responses.
/// The app-shell guard reads it back on every page load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    /// Raw access token as issued by the remote API.
    pub token: String,
    /// User type reported by the login response.
    pub user_type: UserType,
    /// Superadmin flag decided at login.
    pub is_superadmin: bool,
    /// Cached profile, when the profile call succeeded.
    pub profile: Option<UserProfile>,
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the logged-in identity.
    pub const CURRENT_SESSION: &str = "current_session";
}

/// Names of the identity cookies read by the edge guard.
pub mod cookie_names {
    /// Raw access token.
    pub const TOKEN: &str = "token";

    /// User type (`admin` or `client`).
    pub const USER_TYPE: &str = "userType";

    /// Present with value `true` for superadmins.
    pub const SUPERADMIN: &str = "isSuperAdmin";

    /// All identity cookies, in the order they are set.
    pub const ALL: [&str; 3] = [TOKEN, USER_TYPE, SUPERADMIN];
}
