//! Authentication error types.

use thiserror::Error;

/// Errors that can occur while decoding an access token.
///
/// None of these reach a navigating user: the guards fold every variant into
/// "no role". They surface only from the session endpoints.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token is not a decodable JWT with an `exp` claim.
    #[error("token is not a usable JWT: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// The token's `exp` claim is in the past.
    #[error("token expired at {exp}")]
    Expired {
        /// Expiry timestamp, seconds since the epoch.
        exp: i64,
    },
}

/// Errors that can occur while opening a session.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The access token is unusable.
    #[error("invalid token: {0}")]
    InvalidToken(#[from] TokenError),

    /// The token is valid but no role can be derived from it.
    #[error("no role could be derived from the session")]
    Undecidable,
}
