//! Canonical message construction.
//!
//! The canonical message is the exact byte sequence the signer hashed: the
//! request id, approval token, rejection reason, reason code, total value and
//! total VAT, concatenated with no delimiters. Any rendering difference in a
//! single field invalidates every signature, so each field has exactly one
//! textual form.

use crate::error::CanonicalError;
use crate::validation::ValidationResult;

/// Build the canonical message for `result`.
///
/// # Errors
///
/// Returns [`CanonicalError::MissingField`] if the request id, the approval
/// decision or the reason code is absent, and [`CanonicalError::InvalidNumber`] if either amount is
/// missing or not a finite number.
pub fn canonical_message(result: &ValidationResult) -> Result<String, CanonicalError> {
    let id = result
        .validation_request_id
        .as_deref()
        .ok_or(CanonicalError::MissingField("ValidationRequestId"))?;
    let approved = result
        .approved
        .ok_or(CanonicalError::MissingField("Approved"))?;
    let code = result
        .reason_not_approved_code
        .as_ref()
        .ok_or(CanonicalError::MissingField("ReasonNotApprovedCode"))?;
    let reason = result.reason_not_approved.as_deref().unwrap_or_default();
    let total_value = result
        .total_value
        .as_ref()
        .ok_or_else(|| CanonicalError::InvalidNumber("TotalValue is missing".to_owned()))?
        .canonical()?;
    let total_vat = result
        .total_vat
        .as_ref()
        .ok_or_else(|| CanonicalError::InvalidNumber("TotalVat is missing".to_owned()))?
        .canonical()?;

    Ok(format!("{id}{approved}{reason}{code}{total_value}{total_vat}"))
}
