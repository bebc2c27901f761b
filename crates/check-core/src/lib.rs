//! # check-core: Pure Business Logic for the Check Engine
//!
//! This crate is the **heart** of the check system. It contains all pricing
//! and discount logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Check Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     apps/cli (check binary)                     │   │
//! │  │    argument parsing ──► snapshot loading ──► receipt output    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ check-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  discount │  │  pricing  │  │   │
//! │  │   │  Product  │  │   Money   │  │  selector │  │ line math │  │   │
//! │  │   │ CheckInfo │  │   Rate    │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐                                 │   │
//! │  │   │  catalog  │  │   check   │                                 │   │
//! │  │   │  resolver │  │ evaluator │                                 │   │
//! │  │   └───────────┘  └───────────┘                                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CONSOLE • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  check-data (Catalog Sources)                   │   │
//! │  │              CSV files, PostgreSQL, availability probe          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, DiscountCard, CheckRequest, CheckInfo)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Receipt error codes and domain error types
//! - [`validation`] - Input validation helpers
//! - [`catalog`] - Resolves requested id/quantity pairs against the catalog
//! - [`discount`] - Selects the transaction-wide discount context
//! - [`pricing`] - Prices a single line, including the wholesale rule
//! - [`check`] - The transaction evaluator producing the final receipt
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, file system, console access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Errors As Data**: The receipt carries its error code; evaluation never throws
//!
//! ## Example Usage
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use check_core::{check, CatalogSnapshot, CheckRequest, CheckError, Money, Product};
//!
//! let snapshot = CatalogSnapshot {
//!     products: vec![Product {
//!         id: 1,
//!         description: "Milk".to_string(),
//!         price_cents: 107,
//!         quantity_in_stock: 10,
//!         wholesale: true,
//!     }],
//!     discount_cards: vec![],
//! };
//!
//! let mut lines = BTreeMap::new();
//! lines.insert(1, 3);
//! let request = CheckRequest::new(lines, 0, Money::from_cents(10_00), false);
//!
//! let receipt = check::evaluate(&request, &snapshot);
//! assert_eq!(receipt.error, CheckError::None);
//! assert_eq!(receipt.total_price_cents, 321); // 3 × $1.07
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod check;
pub mod discount;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use check_core::Money` instead of
// `use check_core::money::Money`

pub use error::{CheckError, CoreError, ValidationError};
pub use money::{Money, Rate};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Highest product id a request may reference.
///
/// Requested ids are 1-based positions into the catalog; anything outside
/// [1, MAX_PRODUCT_ID] invalidates the entire request.
pub const MAX_PRODUCT_ID: u32 = 20;

/// Lowest well-formed discount card number.
pub const MIN_CARD_NUMBER: u32 = 1000;

/// Highest well-formed discount card number.
pub const MAX_CARD_NUMBER: u32 = 9999;

/// Quantity at which a wholesale-flagged product switches to the
/// fixed wholesale discount rate.
pub const WHOLESALE_THRESHOLD: u32 = 5;

/// Wholesale discount percentage applied at or above [`WHOLESALE_THRESHOLD`].
pub const WHOLESALE_DISCOUNT_PCT: u8 = 10;

/// Discount percentage synthesized for a well-formed but unregistered
/// card number.
pub const FALLBACK_DISCOUNT_PCT: u8 = 2;
