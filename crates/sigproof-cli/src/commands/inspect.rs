//! `sigproof inspect` — show the signer certificate embedded in a request.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use sigproof_crypto::certificate::SignerCertificate;

use crate::loader::load_request;

/// Print issuer, subject, serial number and key size of the request's certificate.
///
/// # Errors
///
/// Returns an error if the request cannot be loaded, the certificate is
/// unusable, or writing to `out` fails.
pub fn run_inspect<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let request = load_request(path)?;
    let cert = SignerCertificate::from_base64(&request.public_key)
        .with_context(|| format!("reading certificate from {}", path.display()))?;

    writeln!(out, "issuer:  {}", cert.issuer())?;
    writeln!(out, "subject: {}", cert.subject())?;
    writeln!(out, "serial:  {}", cert.serial_hex())?;
    writeln!(out, "key:     RSA {} bits", cert.key_bits())?;
    writeln!(out, "der:     {} bytes", cert.der_len())?;
    Ok(())
}
