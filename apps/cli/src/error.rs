//! # CLI Error Type
//!
//! Failures of the application shell itself: receipt output only.
//! Evaluation outcomes and catalog-source failures are never errors here -
//! they ride on the receipt as data.

use thiserror::Error;

/// Application shell errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Receipt output failed.
    #[error("receipt output failed: {0}")]
    Io(#[from] std::io::Error),
}
