//! Authentication service.
//!
//! Decodes access tokens and resolves the caller's role from a session store.
//!
//! Access tokens are JWTs issued by the remote API. The portal does not hold
//! the signing key, so only the payload is read: `exp` for expiry and `type`
//! for the account type. Signature checks stay with the API, which rejects
//! forged tokens on every data call.

mod error;
mod store;

pub use error::{AuthError, TokenError};
pub use store::{CookieStore, SessionStore};

use chrono::{DateTime, Utc};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::Deserialize;

use dossier_portal_core::{Role, UserType};

/// Claims read from an access token payload.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    /// Expiry, seconds since the epoch.
    pub exp: i64,
    /// Account type claim. Unknown values are kept as-is and ignored.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl TokenClaims {
    /// Returns the account type claim, if it names a known type.
    #[must_use]
    pub fn user_type(&self) -> Option<UserType> {
        self.kind.as_deref().and_then(|kind| kind.parse().ok())
    }
}

/// Decode the payload of a JWT without verifying its signature.
///
/// Expiry is not checked here; see [`validate_token`].
///
/// # Errors
///
/// Returns `TokenError::Jwt` if the token is not a JWT, or its payload is not
/// a claims object with an `exp`.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.leeway = 0;

    let data = decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation)?;
    Ok(data.claims)
}

/// Decode a token and check that it has not expired at `now`.
///
/// # Errors
///
/// Returns `TokenError::Expired` when `exp <= now`, or any decoding error
/// from [`decode_claims`]. A token expiring exactly at `now` is expired.
pub fn validate_token(token: &str, now: DateTime<Utc>) -> Result<TokenClaims, TokenError> {
    let claims = decode_claims(token)?;
    if claims.exp <= now.timestamp() {
        return Err(TokenError::Expired { exp: claims.exp });
    }
    Ok(claims)
}

/// Identity of the caller for one navigation.
///
/// Resolved afresh on every request and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionContext {
    /// Effective role; `None` means unauthenticated or undecidable.
    pub role: Option<Role>,
}

impl SessionContext {
    /// Resolve the caller's role from `store` at `now`.
    ///
    /// A missing, undecodable, or expired token yields no role. The token's
    /// `type` claim names the account type, falling back to the stored user
    /// type when the claim is absent.
    pub fn resolve<S: SessionStore + ?Sized>(store: &S, now: DateTime<Utc>) -> Self {
        let Some(token) = store.token() else {
            return Self::default();
        };

        let claims = match validate_token(token, now) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring unusable access token");
                return Self::default();
            }
        };

        let user_type = claims.user_type().or_else(|| store.user_type());
        Self {
            role: Role::derive(user_type, store.superadmin_flag(), store.profile()),
        }
    }

    /// Returns true if a role was resolved.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }
}
