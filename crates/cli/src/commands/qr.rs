//! QR payload parsing command.
//!
//! # Usage
//!
//! ```bash
//! dp-cli qr "$PAYLOAD"
//! dp-cli qr "$PAYLOAD" --current form.json
//! ```
//!
//! The result is printed as pretty JSON using the API field names, so it can
//! be fed back through `--current`.

use std::io::Write;
use std::path::Path;

use dossier_portal_core::{ClaimForm, qr};
use thiserror::Error;

/// Errors that can occur while parsing a payload.
#[derive(Debug, Error)]
pub enum QrError {
    /// The current-form file could not be read, or output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The current-form file is not a claim form.
    #[error("Invalid claim form JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse `payload` over the form read from `current_json`, or an empty form.
fn parse_over(payload: &str, current_json: Option<&str>) -> Result<ClaimForm, QrError> {
    let current = match current_json {
        Some(json) => serde_json::from_str(json)?,
        None => ClaimForm::default(),
    };

    if !qr::is_parseable(payload) {
        tracing::warn!(
            required = qr::MIN_PARTS,
            "Payload too short, form left unchanged"
        );
    }

    Ok(qr::parse(payload, &current))
}

/// Parse `payload` and print the resulting claim form.
///
/// # Errors
///
/// Returns `QrError` if the current-form file cannot be read or parsed.
pub fn run(payload: &str, current: Option<&Path>) -> Result<(), QrError> {
    let current_json = current.map(std::fs::read_to_string).transpose()?;
    let form = parse_over(payload, current_json.as_deref())?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &form)?;
    writeln!(stdout)?;
    Ok(())
}
