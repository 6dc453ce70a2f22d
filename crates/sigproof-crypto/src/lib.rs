//! Cryptographic primitives for sigproof: certificate key extraction and signature verification.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![warn(missing_docs)]

pub mod certificate;
pub mod error;
pub mod verifier;
