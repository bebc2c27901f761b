//! # Error Types
//!
//! Receipt error codes and domain error types for check-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  check-core errors (this file)                                         │
//! │  ├── CheckError       - Terminal receipt outcome, carried as DATA      │
//! │  ├── CoreError        - Typed component failures inside evaluation     │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  check-data errors (separate crate)                                    │
//! │  └── DataError        - Catalog source failures                        │
//! │                                                                         │
//! │  Flow: CoreError ──maps to──► CheckError::BadRequest on the receipt    │
//! │        DataError ──maps to──► CheckError::BadRequest at the caller     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The evaluation boundary never returns `Err`: every outcome is a
//! [`crate::CheckInfo`] whose `error` field is one of the [`CheckError`]
//! codes. `CoreError` exists for the components underneath the evaluator,
//! which do use `Result` so that failure reasons stay distinguishable.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Check Error (receipt outcome)
// =============================================================================

/// Terminal outcome of one evaluation, carried on the receipt as data.
///
/// Exactly one of these is reachable per evaluation: success, a rejected
/// request, or an affordability failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckError {
    /// Evaluation succeeded; the receipt carries lines and totals.
    #[default]
    None,

    /// Malformed input, invalid product id, unavailable data source, or
    /// insufficient stock for a requested line.
    BadRequest,

    /// All lines priced validly, but the discounted total exceeds the
    /// customer's balance.
    NotEnoughMoney,
}

/// Renders the codes the way the result file prints them.
impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CheckError::None => "NONE",
            CheckError::BadRequest => "BAD REQUEST",
            CheckError::NotEnoughMoney => "NOT ENOUGH MONEY",
        };
        write!(f, "{}", text)
    }
}

// =============================================================================
// Core Error
// =============================================================================

/// Typed failures from the components underneath the evaluator.
///
/// Every variant maps to [`CheckError::BadRequest`] on the receipt; the
/// variants exist so tests and logs can tell the cases apart.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Requested product id falls outside the valid [1, 20] range.
    #[error("product id {id} is out of range")]
    ProductIdOutOfRange { id: u32 },

    /// Requested id is in range but the catalog has no product at that
    /// position (catalog shorter than required).
    #[error("product id {id} has no catalog entry")]
    UnknownProduct { id: u32 },

    /// Requested quantity exceeds the product's stock.
    #[error("insufficient stock for {description}: available {available}, requested {requested}")]
    InsufficientStock {
        description: String,
        available: u32,
        requested: u32,
    },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// The receipt code this failure surfaces as.
    pub fn check_error(&self) -> CheckError {
        CheckError::BadRequest
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when raw input doesn't meet requirements, before business
/// logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: &'static str },

    /// Invalid format (e.g. unparseable number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: String,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
