//! Error types for cryptographic operations.

use thiserror::Error;

/// Errors that can occur while loading a certificate or verifying a signature.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerifyError {
    /// The certificate is not valid base64 or not a well-formed DER X.509 certificate.
    #[error("certificate parsing failed: {0}")]
    CertificateParse(String),
    /// The certificate's subject public key is not an RSA key.
    #[error("unsupported public key algorithm {oid}, expected rsaEncryption")]
    UnsupportedKeyType {
        /// Dotted OID of the subject public key algorithm.
        oid: String,
    },
    /// The signature cannot be a PKCS#1 v1.5 signature under the given key.
    #[error("malformed signature: {0}")]
    MalformedSignature(String),
}
