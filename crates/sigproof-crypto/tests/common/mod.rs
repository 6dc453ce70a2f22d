//! Throwaway signer material: a self-signed RSA certificate and genuine signatures.
#![allow(dead_code)]

use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rsa::pkcs1v15::{Signature, SigningKey};
use rsa::signature::{RandomizedSigner, SignatureEncoding};
use rsa::RsaPrivateKey;
use sha2::{Sha256, Sha512};
use x509_cert::builder::{Builder, CertificateBuilder, Profile};
use x509_cert::der::oid::ObjectIdentifier;
use x509_cert::der::{Decode, Encode};
use x509_cert::name::Name;
use x509_cert::serial_number::SerialNumber;
use x509_cert::spki::SubjectPublicKeyInfoOwned;
use x509_cert::time::Validity;
use x509_cert::Certificate;

pub const SUBJECT: &str = "CN=Proof Signer,O=Example Trustlink B.V.,C=NL";

/// id-ecPublicKey
pub const EC_PUBLIC_KEY: &str = "1.2.840.10045.2.1";

pub fn private_key() -> &'static RsaPrivateKey {
    static KEY: OnceLock<RsaPrivateKey> = OnceLock::new();
    KEY.get_or_init(|| RsaPrivateKey::new(&mut rand::thread_rng(), 1024).unwrap())
}

pub fn certificate_der() -> &'static [u8] {
    static DER: OnceLock<Vec<u8>> = OnceLock::new();
    DER.get_or_init(|| {
        let key = private_key();
        let signer = SigningKey::<Sha256>::new(key.clone());
        let spki = SubjectPublicKeyInfoOwned::from_key(key.to_public_key()).unwrap();
        let builder = CertificateBuilder::new(
            Profile::Root,
            SerialNumber::new(&[0x5a, 0x6d, 0x0d, 0x55]).unwrap(),
            Validity::from_now(Duration::from_secs(3600)).unwrap(),
            Name::from_str(SUBJECT).unwrap(),
            spki,
            &signer,
        )
        .unwrap();
        builder.build::<Signature>().unwrap().to_der().unwrap()
    })
}

pub fn certificate_base64() -> String {
    STANDARD.encode(certificate_der())
}

/// The same certificate with its subject key algorithm relabelled as EC.
pub fn non_rsa_certificate_der() -> Vec<u8> {
    let mut cert = Certificate::from_der(certificate_der()).unwrap();
    cert.tbs_certificate.subject_public_key_info.algorithm.oid =
        ObjectIdentifier::new_unwrap(EC_PUBLIC_KEY);
    cert.to_der().unwrap()
}

/// Sign `message` the way the approval service does: RSASSA-PKCS1-v1_5 over SHA-512.
pub fn sign(message: &str) -> Vec<u8> {
    let signing_key = SigningKey::<Sha512>::new(private_key().clone());
    signing_key
        .sign_with_rng(&mut rand::thread_rng(), message.as_bytes())
        .to_bytes()
        .to_vec()
}
