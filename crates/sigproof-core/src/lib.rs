//! Core domain types for sigproof: validation results and canonical messages.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![warn(missing_docs)]

pub mod amount;
pub mod error;
pub mod message;
pub mod validation;
