//! Core types for the dossier portal.
//!
//! This module provides type-safe wrappers for the identity and claim concepts.

pub mod claim;
pub mod locale;
pub mod profile;
pub mod role;

pub use claim::{ClaimForm, DossierStatus};
pub use locale::{Locale, LocaleError};
pub use profile::UserProfile;
pub use role::{Role, RoleError, UserType};
