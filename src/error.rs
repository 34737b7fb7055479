//! Domain error types for numpick
//!
//! - `RangeInputError` for malformed range field input (always normalized)
//! - `PickerError` as the top-level error type

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for numpick
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Config error in {path}: {message}")]
    Config { path: PathBuf, message: String },
}

/// Reasons the range field text could not be taken literally.
///
/// These never reach the user: `RangeConfig::set_from_text` maps each one
/// onto a known-good bound.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeInputError {
    #[error("'{0}' is not an integer")]
    NotAnInteger(String),

    #[error("{0} is below the minimum of 1")]
    BelowMinimum(String),
}

/// Result type alias for PickerError
pub type Result<T> = std::result::Result<T, PickerError>;

