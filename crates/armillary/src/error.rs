//! Error types for Armillary operations.
//!
//! This module provides the main error type [`ArmillaryError`] for the
//! outer surfaces: document I/O today. The node model itself never
//! fails; a lookup miss is a normal `None`, and the core crate's
//! fallible constructors (color parsing) report through
//! `Result<_, String>` at the call site.

use std::io;

use thiserror::Error;

/// The main error type for Armillary operations.
#[derive(Debug, Error)]
pub enum ArmillaryError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
