//! Roles and user types.

use serde::{Deserialize, Serialize};

use super::profile::UserProfile;

/// Errors that can occur when parsing a [`Role`] or [`UserType`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RoleError {
    /// The value is not a known role.
    #[error("invalid role: {0}")]
    InvalidRole(String),
    /// The value is not a known user type.
    #[error("invalid user type: {0}")]
    InvalidUserType(String),
}

/// Account type issued by the remote API at login.
///
/// Carried as the `type` claim of the access token and as the `userType`
/// cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    /// Expert or administrator account.
    Admin,
    /// Insured client account.
    Client,
}

impl UserType {
    /// Returns the wire name of the user type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Client => "client",
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserType {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "client" => Ok(Self::Client),
            _ => Err(RoleError::InvalidUserType(s.to_string())),
        }
    }
}

/// Effective permission level of a caller.
///
/// An undecidable caller has no role at all: guards take `Option<Role>` and
/// treat `None` as unauthenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Manages users and messages, and can see every admin page.
    Superadmin,
    /// Expert handling dossiers.
    Admin,
    /// Insured client filing dossiers.
    Client,
}

impl Role {
    /// Derive the effective role from the session's identity facts.
    ///
    /// The caller must already have checked that the access token is present
    /// and unexpired. A caller is a superadmin when the stored superadmin flag
    /// is set, or when an admin's cached profile has `is_superadmin == 1`.
    /// Otherwise the role follows the user type; no user type means no role.
    #[must_use]
    pub fn derive(
        user_type: Option<UserType>,
        superadmin_flag: bool,
        profile: Option<&UserProfile>,
    ) -> Option<Self> {
        if superadmin_flag {
            return Some(Self::Superadmin);
        }

        match user_type? {
            UserType::Admin if profile.is_some_and(UserProfile::is_superadmin) => {
                Some(Self::Superadmin)
            }
            UserType::Admin => Some(Self::Admin),
            UserType::Client => Some(Self::Client),
        }
    }

    /// Returns the wire name of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Superadmin => "superadmin",
            Self::Admin => "admin",
            Self::Client => "client",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "superadmin" => Ok(Self::Superadmin),
            "admin" => Ok(Self::Admin),
            "client" => Ok(Self::Client),
            _ => Err(RoleError::InvalidRole(s.to_string())),
        }
    }
}
