//! Signed validation request model, as delivered by the approval service.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::amount::Amount;

/// A batch of validation results signed by the holder of one certificate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignedRequest {
    /// Base64-encoded DER X.509 certificate carrying the signer's RSA key.
    pub public_key: String,
    /// Validation results in the order they were issued.
    pub validation_results: Vec<ValidationResult>,
}

/// One approval decision together with its proof-of-approval signature.
///
/// Mandatory fields are still modelled as `Option` so that a single malformed
/// item can be reported without rejecting the whole request. A field whose
/// value has the wrong shape reads as absent; amounts keep the bad value so it
/// can be named in the error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValidationResult {
    /// Opaque request identifier, included verbatim in the canonical message.
    #[serde(default, deserialize_with = "lenient")]
    pub validation_request_id: Option<String>,
    /// The approval decision.
    #[serde(default, deserialize_with = "lenient")]
    pub approved: Option<ApprovalStatus>,
    /// Free-text rejection reason; absent for approved results.
    #[serde(default, deserialize_with = "lenient")]
    pub reason_not_approved: Option<String>,
    /// Rejection reason code, numeric or textual.
    #[serde(default, deserialize_with = "lenient")]
    pub reason_not_approved_code: Option<ReasonCode>,
    /// Total value of the validated claim.
    #[serde(default)]
    pub total_value: Option<Amount>,
    /// Total VAT of the validated claim.
    #[serde(default)]
    pub total_vat: Option<Amount>,
    /// Base64-encoded RSASSA-PKCS1-v1_5 signature over the canonical message.
    #[serde(default, deserialize_with = "lenient")]
    pub signature_of_proof: Option<String>,
}

/// Read any JSON value and keep it only if it converts to `T`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Approval decision, accepted on the wire as a boolean or as its token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawApproval", into = "String")]
pub enum ApprovalStatus {
    /// Rendered as `Approved`.
    Approved,
    /// Rendered as `NotApproved`.
    NotApproved,
}

impl ApprovalStatus {
    /// Return the token used in the canonical message.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::NotApproved => "NotApproved",
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<bool> for ApprovalStatus {
    fn from(approved: bool) -> Self {
        if approved {
            Self::Approved
        } else {
            Self::NotApproved
        }
    }
}

impl From<ApprovalStatus> for String {
    fn from(status: ApprovalStatus) -> Self {
        status.as_str().to_owned()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawApproval {
    Flag(bool),
    Token(String),
}

impl TryFrom<RawApproval> for ApprovalStatus {
    type Error = String;

    fn try_from(raw: RawApproval) -> Result<Self, Self::Error> {
        match raw {
            RawApproval::Flag(flag) => Ok(Self::from(flag)),
            RawApproval::Token(token) => match token.as_str() {
                "Approved" => Ok(Self::Approved),
                "NotApproved" => Ok(Self::NotApproved),
                other => Err(format!(
                    "expected 'Approved', 'NotApproved' or a boolean, got '{other}'"
                )),
            },
        }
    }
}

/// A rejection reason code, numeric or textual, rendered via its natural text form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReasonCode {
    /// A numeric code such as `0` or `101`.
    Number(serde_json::Number),
    /// A textual code.
    Text(String),
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ReasonCode {
    fn from(code: u64) -> Self {
        Self::Number(code.into())
    }
}

impl From<&str> for ReasonCode {
    fn from(code: &str) -> Self {
        Self::Text(code.to_owned())
    }
}
