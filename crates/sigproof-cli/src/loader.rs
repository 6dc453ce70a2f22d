//! Reads signed request files from disk.

use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use sigproof_core::validation::SignedRequest;

/// Errors that can occur while loading a request file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// Path of the request file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The file is not a valid signed request document.
    #[error("cannot parse {}: {source}", .path.display())]
    Json {
        /// Path of the request file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Read and deserialize the signed request at `path`.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read and
/// [`LoadError::Json`] if it is not a signed request document.
pub fn load_request(path: &Path) -> Result<SignedRequest, LoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })?;
    let request: SignedRequest = serde_json::from_str(&raw).map_err(|source| LoadError::Json {
        path: path.to_owned(),
        source,
    })?;
    debug!(
        "loaded {} with {} validation results",
        path.display(),
        request.validation_results.len()
    );
    Ok(request)
}
