//! Dossier Portal Core - Shared types and access rules.
//!
//! This crate provides the pure logic used by every dossier portal component:
//! - `portal` - The web server (edge middleware and app-shell endpoints)
//! - `cli` - Command-line tools for checking payloads and guard decisions
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no clocks. Token decoding and session loading live in the portal; this
//! crate receives their results as plain values.
//!
//! # Modules
//!
//! - [`types`] - Roles, locales, user profiles, and the claim form
//! - [`access`] - Route partitions and the edge/app-shell guards
//! - [`navigation`] - Per-role navigation menus
//! - [`qr`] - QR payload parsing into a claim form

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod access;
pub mod navigation;
pub mod qr;
pub mod types;

pub use access::{AccessGuard, AppShellGuard, Decision, EdgeGuard, Partition};
pub use types::*;
