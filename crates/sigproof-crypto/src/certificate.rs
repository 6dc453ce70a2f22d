//! Signer certificate loading and RSA subject key extraction.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rsa::pkcs8::DecodePublicKey;
use rsa::traits::PublicKeyParts;
use rsa::RsaPublicKey;
use x509_cert::der::oid::ObjectIdentifier;
use x509_cert::der::{Decode, Encode};
use x509_cert::Certificate;

use crate::error::VerifyError;

/// Subject public key algorithm OID for RSA keys (`rsaEncryption`).
pub const RSA_ENCRYPTION: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

/// A parsed signer certificate and the RSA public key it carries.
///
/// The certificate is taken as already trusted: no chain building, validity
/// period or revocation checks happen here.
#[derive(Debug, Clone)]
pub struct SignerCertificate {
    public_key: RsaPublicKey,
    issuer: String,
    subject: String,
    serial_hex: String,
    der_len: usize,
}

impl SignerCertificate {
    /// Decode a base64 DER certificate, as carried in a request's `PublicKey` field.
    ///
    /// ASCII whitespace (line breaks in wrapped base64) is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::CertificateParse`] if the text is not base64 or
    /// the bytes are not a certificate, and [`VerifyError::UnsupportedKeyType`]
    /// if the subject key is not RSA.
    pub fn from_base64(encoded: &str) -> Result<Self, VerifyError> {
        let compact: String = encoded
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        let der = STANDARD
            .decode(compact.as_bytes())
            .map_err(|e| VerifyError::CertificateParse(format!("invalid base64: {e}")))?;
        Self::from_der(&der)
    }

    /// Parse a DER-encoded X.509 certificate and extract its RSA public key.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::CertificateParse`] on malformed DER or an
    /// undecodable RSA key, and [`VerifyError::UnsupportedKeyType`] if the
    /// subject key algorithm is anything other than `rsaEncryption`.
    pub fn from_der(der: &[u8]) -> Result<Self, VerifyError> {
        let cert =
            Certificate::from_der(der).map_err(|e| VerifyError::CertificateParse(e.to_string()))?;
        let tbs = &cert.tbs_certificate;
        let spki = &tbs.subject_public_key_info;

        if spki.algorithm.oid != RSA_ENCRYPTION {
            return Err(VerifyError::UnsupportedKeyType {
                oid: spki.algorithm.oid.to_string(),
            });
        }

        let spki_der = spki
            .to_der()
            .map_err(|e| VerifyError::CertificateParse(e.to_string()))?;
        let public_key = RsaPublicKey::from_public_key_der(&spki_der)
            .map_err(|e| VerifyError::CertificateParse(format!("invalid RSA public key: {e}")))?;

        Ok(Self {
            public_key,
            issuer: tbs.issuer.to_string(),
            subject: tbs.subject.to_string(),
            serial_hex: hex::encode(tbs.serial_number.as_bytes()),
            der_len: der.len(),
        })
    }

    /// The RSA public key from the certificate's subject public key info.
    #[must_use]
    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public_key
    }

    /// Issuer distinguished name in RFC 4514 form.
    #[must_use]
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Subject distinguished name in RFC 4514 form.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Serial number as lowercase hex.
    #[must_use]
    pub fn serial_hex(&self) -> &str {
        &self.serial_hex
    }

    /// RSA modulus size in bits.
    #[must_use]
    pub fn key_bits(&self) -> usize {
        self.public_key.size() * 8
    }

    /// Length of the DER encoding the certificate was parsed from.
    #[must_use]
    pub fn der_len(&self) -> usize {
        self.der_len
    }
}
