//! `sigproof message` — print canonical messages and digests without verifying.

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use sigproof_core::message::canonical_message;
use sigproof_crypto::verifier::message_digest;

use crate::loader::load_request;

/// Print the canonical message, its UTF-8 length and SHA-512 digest for every
/// validation result in the request at `path`.
///
/// # Errors
///
/// Returns an error if the request cannot be loaded or writing to `out` fails.
/// Items whose message cannot be built are reported inline.
pub fn run_message<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let request = load_request(path)?;
    for (index, result) in request.validation_results.iter().enumerate() {
        match canonical_message(result) {
            Ok(message) => {
                writeln!(out, "[{index}] {message}")?;
                writeln!(out, "    bytes:  {}", message.len())?;
                writeln!(out, "    sha512: {}", hex::encode(message_digest(&message)))?;
            }
            Err(e) => writeln!(out, "[{index}] error: {e}")?,
        }
    }
    Ok(())
}
