//! Domain models for the portal.
//!
//! Types stored in the server session and the names of identity cookies.

pub mod session;

pub use session::{StoredSession, cookie_names, keys as session_keys};
