//! Dossier portal CLI - offline checks for QR payloads and route guards.
//!
//! # Usage
//!
//! ```bash
//! # Parse a scanned claim QR payload into a claim form
//! dp-cli qr "0;1;2;S-1;01-02-2024;;03-02-2024;..."
//!
//! # Merge into an existing form snapshot
//! dp-cli qr "$PAYLOAD" --current form.json
//!
//! # Ask a guard what happens to a navigation
//! dp-cli guard /fr/admin/dossiers --role client
//! dp-cli guard /en/admin/dashboard --role superadmin --layer app-shell
//! ```
//!
//! # Commands
//!
//! - `qr` - Parse a QR payload and print the claim form as JSON
//! - `guard` - Print `allow` or `redirect <target>` for a path and role

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

use commands::guard::Layer;

#[derive(Parser)]
#[command(name = "dp-cli")]
#[command(author, version, about = "Dossier portal CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a claim QR payload
    Qr {
        /// Raw decoded QR text
        payload: String,

        /// JSON file holding the current claim form
        #[arg(short, long)]
        current: Option<PathBuf>,
    },
    /// Evaluate a guard decision
    Guard {
        /// Requested path, e.g. `/fr/admin/dossiers`
        path: String,

        /// Caller role (`superadmin`, `admin`, `client`, or `none`)
        #[arg(short, long)]
        role: String,

        /// Which guard to evaluate
        #[arg(short, long, value_enum, default_value_t = Layer::Edge)]
        layer: Layer,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Qr { payload, current } => {
            commands::qr::run(&payload, current.as_deref())?;
        }
        Commands::Guard { path, role, layer } => {
            commands::guard::run(&path, &role, layer)?;
        }
    }
    Ok(())
}
