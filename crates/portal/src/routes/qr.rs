//! QR claim parsing endpoint.

use axum::Json;
use serde::Deserialize;

use dossier_portal_core::{ClaimForm, qr};

/// Body of `POST /api/qr/parse`.
#[derive(Debug, Deserialize)]
pub struct QrParseRequest {
    /// Raw decoded QR text.
    pub payload: String,
    /// Form as currently filled in. Missing means an empty form.
    #[serde(default)]
    pub current: ClaimForm,
}

/// Fill a claim form from a scanned QR payload.
///
/// A payload too short to be a claim QR code returns `current` unchanged.
pub async fn parse_qr(Json(request): Json<QrParseRequest>) -> Json<ClaimForm> {
    if !qr::is_parseable(&request.payload) {
        tracing::debug!(
            required = qr::MIN_PARTS,
            "QR payload too short, keeping current form"
        );
    }
    Json(qr::parse(&request.payload, &request.current))
}
