//! QR payload parsing into a claim form.
//!
//! Claim declarations carry a QR code whose text is a `;`-separated list of
//! positional fields:
//!
//! ```text
//! index  field                          index  field
//!   3    claim number                    13    chassis number
//!   4    declaration date (DD-MM-YYYY)   14    registration plate
//!   6    incident date (DD-MM-YYYY)      15    vehicle year
//!   7    insured name                    17    vehicle category
//!   8    policy number                   18    insurance start (DD-MM-YYYY)
//!   9    third-party name                19    insurance end (DD-MM-YYYY)
//!  10    third-party policy number       20    third-party plate
//!  11    third-party company             23    insurer company
//!  12    third-party agency code
//! ```
//!
//! Index 5 repeats the claim number and is ignored. The incident date is read
//! from index 6.

use crate::types::ClaimForm;

/// Payloads with fewer parts than this are ignored.
pub const MIN_PARTS: usize = 21;

/// Fields of a split payload.
struct Fields<'a>(Vec<&'a str>);

impl<'a> Fields<'a> {
    /// Non-empty field at `index`.
    fn text(&self, index: usize) -> Option<&'a str> {
        self.0.get(index).copied().filter(|value| !value.is_empty())
    }

    fn assign(&self, index: usize, target: &mut String) {
        if let Some(value) = self.text(index) {
            value.clone_into(target);
        }
    }

    fn assign_date(&self, index: usize, target: &mut String) {
        if let Some(value) = self.text(index) {
            *target = normalize_date(value);
        }
    }
}

/// Reverse the `-`-separated components of a date, so `24-12-2024` becomes
/// `2024-12-24`.
#[must_use]
pub fn normalize_date(value: &str) -> String {
    value.split('-').rev().collect::<Vec<_>>().join("-")
}

/// Returns true when `raw` has enough fields to be applied to a form.
#[must_use]
pub fn is_parseable(raw: &str) -> bool {
    raw.split(';').count() >= MIN_PARTS
}

/// Apply a scanned payload to `current` and return the updated form.
///
/// A payload with fewer than [`MIN_PARTS`] fields leaves the form unchanged.
/// Otherwise each mapped field is overwritten only when its segment is
/// non-empty; a non-numeric year keeps the current year.
#[must_use]
pub fn parse(raw: &str, current: &ClaimForm) -> ClaimForm {
    if !is_parseable(raw) {
        return current.clone();
    }
    let fields = Fields(raw.split(';').collect());

    let mut form = current.clone();
    fields.assign(3, &mut form.claim_number);
    fields.assign_date(4, &mut form.declaration_date);
    // Checked and read at index 6; index 5 only repeats the claim number.
    fields.assign_date(6, &mut form.incident_date);
    fields.assign(7, &mut form.insured_name);
    fields.assign(8, &mut form.policy_number);
    fields.assign(9, &mut form.third_party_name);
    fields.assign(10, &mut form.third_party_policy_number);
    fields.assign(11, &mut form.third_party_company);
    fields.assign(12, &mut form.third_party_agency_code);
    fields.assign(13, &mut form.chassis_number);
    fields.assign(14, &mut form.registration_number);
    if let Some(year) = fields.text(15).and_then(|v| v.trim().parse::<i32>().ok()) {
        form.vehicle_year = Some(year);
    }
    fields.assign(17, &mut form.vehicle_category);
    fields.assign_date(18, &mut form.insurance_start);
    fields.assign_date(19, &mut form.insurance_end);
    fields.assign(20, &mut form.third_party_registration);
    fields.assign(23, &mut form.compagnie);
    form
}
