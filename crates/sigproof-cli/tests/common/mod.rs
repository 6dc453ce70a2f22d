//! Signed request fixtures backed by a throwaway self-signed RSA certificate.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rsa::pkcs1v15::{Signature, SigningKey};
use rsa::signature::{RandomizedSigner, SignatureEncoding};
use rsa::RsaPrivateKey;
use serde_json::{json, Value};
use sha2::{Sha256, Sha512};
use x509_cert::builder::{Builder, CertificateBuilder, Profile};
use x509_cert::der::oid::ObjectIdentifier;
use x509_cert::der::{Decode, Encode};
use x509_cert::name::Name;
use x509_cert::serial_number::SerialNumber;
use x509_cert::spki::SubjectPublicKeyInfoOwned;
use x509_cert::time::Validity;
use x509_cert::Certificate;

pub fn private_key() -> &'static RsaPrivateKey {
    static KEY: OnceLock<RsaPrivateKey> = OnceLock::new();
    KEY.get_or_init(|| RsaPrivateKey::new(&mut rand::thread_rng(), 1024).unwrap())
}

fn certificate_der() -> &'static [u8] {
    static DER: OnceLock<Vec<u8>> = OnceLock::new();
    DER.get_or_init(|| {
        let key = private_key();
        let signer = SigningKey::<Sha256>::new(key.clone());
        let spki = SubjectPublicKeyInfoOwned::from_key(key.to_public_key()).unwrap();
        let builder = CertificateBuilder::new(
            Profile::Root,
            SerialNumber::new(&[0x01]).unwrap(),
            Validity::from_now(Duration::from_secs(3600)).unwrap(),
            Name::from_str("CN=QuoVadis Test Signer,O=Example Trustlink B.V.,C=NL").unwrap(),
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

pub fn non_rsa_certificate_base64() -> String {
    let mut cert = Certificate::from_der(certificate_der()).unwrap();
    cert.tbs_certificate.subject_public_key_info.algorithm.oid =
        ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");
    STANDARD.encode(cert.to_der().unwrap())
}

pub fn sign_base64(message: &str) -> String {
    let signing_key = SigningKey::<Sha512>::new(private_key().clone());
    let signature = signing_key
        .sign_with_rng(&mut rand::thread_rng(), message.as_bytes())
        .to_bytes();
    STANDARD.encode(signature)
}

/// An approved item whose signature covers its own canonical message.
pub fn approved_item(id: &str, total_value: f64, total_vat: f64, message: &str) -> Value {
    json!({
        "ValidationRequestId": id,
        "Approved": "Approved",
        "ReasonNotApproved": null,
        "ReasonNotApprovedCode": 0,
        "TotalValue": total_value,
        "TotalVat": total_vat,
        "SignatureOfProof": sign_base64(message),
    })
}

pub fn request(public_key: &str, items: Vec<Value>) -> Value {
    json!({ "PublicKey": public_key, "ValidationResults": items })
}

pub fn write_request(dir: &Path, name: &str, request: &Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(request).unwrap()).unwrap();
    path
}
