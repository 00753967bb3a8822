//! Claim (dossier) form state.

use serde::{Deserialize, Serialize};

/// Dossier workflow status, set by admins only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DossierStatus {
    #[default]
    New,
    InProgress,
    Ended,
}

/// Text fields of a dossier creation form.
///
/// Field names follow the remote API's dossier schema on the wire. Missing
/// fields deserialize to empty strings, so a partial JSON object is a valid
/// form snapshot. Dates are `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimForm {
    /// Agency that registered the claim.
    pub agence: String,
    #[serde(rename = "num_sinistre")]
    pub claim_number: String,
    #[serde(rename = "date_sinistre")]
    pub incident_date: String,
    #[serde(rename = "date_declaration")]
    pub declaration_date: String,
    #[serde(rename = "expert_nom")]
    pub expert_name: String,
    #[serde(rename = "assure_nom")]
    pub insured_name: String,
    #[serde(rename = "num_police")]
    pub policy_number: String,
    /// Insurer company name.
    pub compagnie: String,
    #[serde(rename = "code_agence")]
    pub agency_code: String,
    #[serde(rename = "num_chassis")]
    pub chassis_number: String,
    /// Registration plate.
    #[serde(rename = "matricule")]
    pub registration_number: String,
    #[serde(rename = "annee", skip_serializing_if = "Option::is_none")]
    pub vehicle_year: Option<i32>,
    #[serde(rename = "categorie")]
    pub vehicle_category: String,
    #[serde(rename = "date_debut_assurance")]
    pub insurance_start: String,
    #[serde(rename = "date_fin_assurance")]
    pub insurance_end: String,
    #[serde(rename = "tiers_nom")]
    pub third_party_name: String,
    #[serde(rename = "tiers_matricule")]
    pub third_party_registration: String,
    #[serde(rename = "tiers_code_agence")]
    pub third_party_agency_code: String,
    #[serde(rename = "tiers_num_police")]
    pub third_party_policy_number: String,
    #[serde(rename = "tiers_compagnie")]
    pub third_party_company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DossierStatus>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let form: ClaimForm =
            serde_json::from_str(r#"{"num_sinistre": "X", "annee": 2019}"#).unwrap();
        assert_eq!(form.claim_number, "X");
        assert_eq!(form.vehicle_year, Some(2019));
        assert_eq!(form.compagnie, "");
        assert_eq!(form.status, None);
    }

    #[test]
    fn test_serializes_api_field_names() {
        let form = ClaimForm {
            third_party_company: "CAAT".to_string(),
            status: Some(DossierStatus::InProgress),
            ..ClaimForm::default()
        };
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["tiers_compagnie"], "CAAT");
        assert_eq!(json["status"], "in_progress");
        assert!(json.get("annee").is_none());
    }
}
