//! CLI subcommands.

pub mod guard;
pub mod qr;
