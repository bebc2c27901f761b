//! # Validation Module
//!
//! Input validation helpers for the check engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI argument parser                                          │
//! │  ├── Token shape checks (id-qty pairs, key=value settings)             │
//! │  └── Sets the request's `malformed` flag, never aborts                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - field-level rules                              │
//! │  ├── Used by the parser and the catalog loaders                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Evaluator                                                    │
//! │  └── Authoritative id-range, stock, and balance checks                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{MAX_CARD_NUMBER, MAX_PRODUCT_ID, MIN_CARD_NUMBER};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a requested product id.
///
/// ## Rules
/// - Must be within [1, 20]; ids are 1-based catalog positions
pub fn validate_product_id(id: u32) -> ValidationResult<()> {
    if id < 1 || id > MAX_PRODUCT_ID {
        return Err(ValidationError::OutOfRange {
            field: "product id",
            min: 1,
            max: MAX_PRODUCT_ID as i64,
        });
    }

    Ok(())
}

/// Validates a requested quantity.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive { field: "quantity" });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price",
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a customer balance in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
pub fn validate_balance_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "balance",
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a registered card's number as loaded from a catalog source.
///
/// Request-side card numbers are NOT validated here: the discount selector
/// treats out-of-range numbers as "no card presented". This check is for
/// card records themselves, which must be four-digit.
pub fn validate_card_number(number: u32) -> ValidationResult<()> {
    if number < MIN_CARD_NUMBER || number > MAX_CARD_NUMBER {
        return Err(ValidationError::OutOfRange {
            field: "card number",
            min: MIN_CARD_NUMBER as i64,
            max: MAX_CARD_NUMBER as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
