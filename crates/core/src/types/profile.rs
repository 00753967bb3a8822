//! Cached user profile.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User profile as returned by the remote API's profile endpoint.
///
/// Only `is_superadmin` matters for access decisions. Everything else is kept
/// verbatim in `extra` so the cached copy round-trips unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Remote user ID, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Superadmin marker. The API sends a number, but strings and booleans
    /// have been seen too.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_superadmin: Option<Value>,
    /// Remaining profile fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    /// Returns true when the numeric `is_superadmin` field equals 1.
    ///
    /// This is the strict check used when deriving a role.
    #[must_use]
    pub fn is_superadmin(&self) -> bool {
        self.is_superadmin
            .as_ref()
            .and_then(Value::as_i64)
            .is_some_and(|v| v == 1)
    }

    /// Returns true when `is_superadmin` is `1`, `"1"`, `true`, or `"true"`.
    ///
    /// This is the lenient check applied once at login, when the persisted
    /// superadmin flag is decided.
    #[must_use]
    pub fn has_superadmin_marker(&self) -> bool {
        match &self.is_superadmin {
            Some(Value::Number(n)) => n.as_i64() == Some(1),
            Some(Value::String(s)) => s == "1" || s == "true",
            Some(Value::Bool(b)) => *b,
            _ => false,
        }
    }
}
