//! Proof signature verification: SHA-512 digest checked with RSASSA-PKCS1-v1_5.

use rsa::traits::PublicKeyParts;
use rsa::{BigUint, Pkcs1v15Sign, RsaPublicKey};
use sha2::{Digest, Sha512};

use crate::error::VerifyError;

/// Length in bytes of a SHA-512 message digest.
pub const DIGEST_LEN: usize = 64;

/// Verifies a detached signature over a canonical message.
pub trait SignatureVerifier: Send + Sync {
    /// Return whether `signature` is a valid signature over `message`.
    ///
    /// A well-formed signature that does not match is `Ok(false)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::MalformedSignature`] if `signature` cannot be a
    /// signature under this verifier's key.
    fn verify(&self, message: &str, signature: &[u8]) -> Result<bool, VerifyError>;
}

/// RSASSA-PKCS1-v1_5 with SHA-512, borrowing a read-only public key.
#[derive(Debug, Clone, Copy)]
pub struct RsaSha512Verifier<'k> {
    key: &'k RsaPublicKey,
}

impl<'k> RsaSha512Verifier<'k> {
    /// Create a verifier over `key`.
    #[must_use]
    pub fn new(key: &'k RsaPublicKey) -> Self {
        Self { key }
    }
}

impl SignatureVerifier for RsaSha512Verifier<'_> {
    fn verify(&self, message: &str, signature: &[u8]) -> Result<bool, VerifyError> {
        verify_signature(self.key, message, signature)
    }
}

/// Compute the SHA-512 digest of the UTF-8 bytes of `message`.
#[must_use]
pub fn message_digest(message: &str) -> [u8; DIGEST_LEN] {
    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&Sha512::digest(message.as_bytes()));
    digest
}

/// Verify an RSASSA-PKCS1-v1_5 / SHA-512 `signature` over `message` with `key`.
///
/// # Errors
///
/// Returns [`VerifyError::MalformedSignature`] if the signature length differs
/// from the modulus length or its integer value is not below the modulus.
pub fn verify_signature(
    key: &RsaPublicKey,
    message: &str,
    signature: &[u8],
) -> Result<bool, VerifyError> {
    let expected = key.size();
    if signature.len() != expected {
        return Err(VerifyError::MalformedSignature(format!(
            "expected {expected} bytes for a {}-bit key, got {}",
            expected * 8,
            signature.len()
        )));
    }
    if &BigUint::from_bytes_be(signature) >= key.n() {
        return Err(VerifyError::MalformedSignature(
            "signature value is not below the key modulus".to_owned(),
        ));
    }

    let digest = message_digest(message);
    Ok(key
        .verify(Pkcs1v15Sign::new::<Sha512>(), &digest, signature)
        .is_ok())
}
