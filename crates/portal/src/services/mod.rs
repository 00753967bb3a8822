//! Business logic services for the portal.
//!
//! # Services
//!
//! - `auth` - Access token decoding, session stores, and role resolution

pub mod auth;
