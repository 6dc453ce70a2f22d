mod common;

use rsa::traits::PublicKeyParts;
use sigproof_crypto::certificate::SignerCertificate;
use sigproof_crypto::error::VerifyError;
use sigproof_crypto::verifier::{verify_signature, RsaSha512Verifier, SignatureVerifier};

const MESSAGE: &str = "N000680W00008200003000009071ApprovedNone0300.0052.07";

fn certificate() -> SignerCertificate {
    SignerCertificate::from_der(common::certificate_der()).unwrap()
}

#[test]
fn genuine_signature_verifies() {
    let cert = certificate();
    let verifier = RsaSha512Verifier::new(cert.public_key());
    let signature = common::sign(MESSAGE);
    assert!(verifier.verify(MESSAGE, &signature).unwrap());
}

#[test]
fn flipped_signature_byte_fails() {
    let cert = certificate();
    let mut signature = common::sign(MESSAGE);
    // Flip a low-order byte so the value stays below the modulus.
    let last = signature.len() - 1;
    signature[last] ^= 0x01;
    assert!(!verify_signature(cert.public_key(), MESSAGE, &signature).unwrap());
}

#[test]
fn altered_message_fails() {
    let cert = certificate();
    let signature = common::sign(MESSAGE);
    let tampered = MESSAGE.replacen("N000680", "N000681", 1);
    assert!(!verify_signature(cert.public_key(), &tampered, &signature).unwrap());
}

#[test]
fn verification_is_deterministic() {
    let cert = certificate();
    let verifier = RsaSha512Verifier::new(cert.public_key());
    let signature = common::sign(MESSAGE);
    let first = verifier.verify(MESSAGE, &signature).unwrap();
    for _ in 0..3 {
        assert_eq!(verifier.verify(MESSAGE, &signature).unwrap(), first);
    }
}

#[test]
fn wrong_length_signature_is_malformed() {
    let cert = certificate();
    let err = verify_signature(cert.public_key(), MESSAGE, &[0u8; 16]).unwrap_err();
    assert!(matches!(err, VerifyError::MalformedSignature(_)), "{err:?}");
}

#[test]
fn signature_above_modulus_is_malformed() {
    let cert = certificate();
    let oversized = vec![0xffu8; cert.public_key().size()];
    let err = verify_signature(cert.public_key(), MESSAGE, &oversized).unwrap_err();
    assert!(matches!(err, VerifyError::MalformedSignature(_)), "{err:?}");
}

#[test]
fn zero_signature_is_invalid_not_malformed() {
    let cert = certificate();
    let zeros = vec![0u8; cert.public_key().size()];
    assert!(!verify_signature(cert.public_key(), MESSAGE, &zeros).unwrap());
}
