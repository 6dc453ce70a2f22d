//! Batch verification of a signed request against its embedded certificate.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

use sigproof_core::error::CanonicalError;
use sigproof_core::message::canonical_message;
use sigproof_core::validation::{SignedRequest, ValidationResult};
use sigproof_crypto::certificate::SignerCertificate;
use sigproof_crypto::error::VerifyError;
use sigproof_crypto::verifier::{message_digest, RsaSha512Verifier, SignatureVerifier};

/// Errors that abort a whole batch: without the signer key no item can be checked.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The request's certificate could not be parsed or carries a non-RSA key.
    #[error("cannot load signer certificate: {0}")]
    Certificate(#[from] VerifyError),
}

/// Errors recorded against a single validation result.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ItemError {
    /// The canonical message could not be built.
    #[error(transparent)]
    Message(#[from] CanonicalError),
    /// The signature could not be decoded or checked.
    #[error(transparent)]
    Signature(#[from] VerifyError),
}

impl ItemError {
    /// Short name of the error kind, stable for reports.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Message(CanonicalError::InvalidNumber(_)) => "InvalidNumber",
            Self::Message(CanonicalError::MissingField(_)) => "MissingField",
            Self::Signature(VerifyError::MalformedSignature(_)) => "MalformedSignature",
            Self::Signature(VerifyError::CertificateParse(_)) => "CertificateParseError",
            Self::Signature(VerifyError::UnsupportedKeyType { .. }) => "UnsupportedKeyType",
        }
    }
}

impl Serialize for ItemError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ItemError", 2)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Verification result for one validation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationOutcome {
    /// The `ValidationRequestId`, empty when the item had none.
    pub id: String,
    /// The exact string that was hashed, when it could be built.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_message: Option<String>,
    /// Hex SHA-512 digest of the canonical message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    /// Whether the signature verified.
    pub is_valid: bool,
    /// Why the item could not be verified, if it could not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ItemError>,
}

/// Outcomes for every validation result of one request, in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// One outcome per validation result.
    pub outcomes: Vec<VerificationOutcome>,
}

impl BatchReport {
    /// Number of outcomes whose signature verified.
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_valid).count()
    }

    /// Number of outcomes that did not verify, including per-item errors.
    #[must_use]
    pub fn invalid_count(&self) -> usize {
        self.outcomes.len() - self.valid_count()
    }

    /// Whether every signature in the batch verified.
    #[must_use]
    pub fn all_valid(&self) -> bool {
        self.outcomes.iter().all(|o| o.is_valid)
    }
}

/// Verify every validation result of `request` against its certificate.
///
/// The certificate is parsed once and its key shared by all items. A failure
/// on one item is recorded on its outcome and does not stop the others.
///
/// # Errors
///
/// Returns [`BatchError::Certificate`] if the certificate cannot be parsed or
/// its key is not RSA; no item is verified in that case.
pub fn verify_request(request: &SignedRequest) -> Result<BatchReport, BatchError> {
    let certificate = SignerCertificate::from_base64(&request.public_key)?;
    let verifier = RsaSha512Verifier::new(certificate.public_key());
    Ok(verify_results(&verifier, &request.validation_results))
}

/// Verify `results` with an already constructed `verifier`.
pub fn verify_results(
    verifier: &dyn SignatureVerifier,
    results: &[ValidationResult],
) -> BatchReport {
    BatchReport {
        outcomes: results
            .iter()
            .map(|result| verify_result(verifier, result))
            .collect(),
    }
}

fn verify_result(
    verifier: &dyn SignatureVerifier,
    result: &ValidationResult,
) -> VerificationOutcome {
    let mut outcome = VerificationOutcome {
        id: result.validation_request_id.clone().unwrap_or_default(),
        canonical_message: None,
        digest: None,
        is_valid: false,
        error: None,
    };

    let message = match canonical_message(result) {
        Ok(message) => message,
        Err(e) => {
            outcome.error = Some(e.into());
            return outcome;
        }
    };
    outcome.digest = Some(hex::encode(message_digest(&message)));

    match decode_signature(result)
        .and_then(|sig| verifier.verify(&message, &sig).map_err(ItemError::from))
    {
        Ok(is_valid) => outcome.is_valid = is_valid,
        Err(e) => outcome.error = Some(e),
    }
    outcome.canonical_message = Some(message);
    outcome
}

fn decode_signature(result: &ValidationResult) -> Result<Vec<u8>, ItemError> {
    let encoded = result
        .signature_of_proof
        .as_deref()
        .ok_or(CanonicalError::MissingField("SignatureOfProof"))?;
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    STANDARD.decode(compact.as_bytes()).map_err(|e| {
        ItemError::Signature(VerifyError::MalformedSignature(format!(
            "signature is not valid base64: {e}"
        )))
    })
}
