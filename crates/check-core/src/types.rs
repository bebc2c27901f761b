//! # Domain Types
//!
//! Core domain types used throughout the check engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  DiscountCard   │   │  CheckRequest   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  lines (id→qty) │       │
//! │  │  description    │   │  number         │   │  discount_card  │       │
//! │  │  price_cents    │   │  discount_pct   │   │  balance_cents  │       │
//! │  │  stock          │   └─────────────────┘   │  save_to_file   │       │
//! │  │  wholesale      │                         │  malformed      │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │                                                                         │
//! │  ┌──────────────────────┐   ┌─────────────────────────────────┐        │
//! │  │  ProductCheckRecord  │   │           CheckInfo             │        │
//! │  │  ──────────────────  │   │  ─────────────────────────────  │        │
//! │  │  description         │   │  check_time                     │        │
//! │  │  price / quantity    │   │  records / total_price          │        │
//! │  │  discount / total    │   │  discount_card / error          │        │
//! │  └──────────────────────┘   └─────────────────────────────────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products and discount cards are loaded once per evaluation and passed in
//! as a read-only [`CatalogSnapshot`]; the engine never mutates them.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CheckError;
use crate::money::{Money, Rate};

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Positive catalog identifier.
    pub id: u32,

    /// Display name shown on the receipt.
    pub description: String,

    /// Unit price in cents (smallest currency unit), non-negative.
    pub price_cents: i64,

    /// Current stock level; requests above this abort the transaction.
    pub quantity_in_stock: u32,

    /// Whether the wholesale-quantity discount rule applies to this product.
    pub wholesale: bool,
}

impl Product {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether the requested quantity can be taken from stock.
    #[inline]
    pub fn can_fulfill(&self, quantity: u32) -> bool {
        self.quantity_in_stock >= quantity
    }
}

// =============================================================================
// Discount Card
// =============================================================================

/// A registered discount card.
///
/// Card numbers are four-digit values in [1000, 9999]. The discount is a
/// whole percentage (2 means 2%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountCard {
    /// Record identifier. 0 for cards synthesized at evaluation time.
    pub id: u32,

    /// Four-digit card number.
    pub number: u32,

    /// Discount percentage (2 = 2%).
    pub discount_pct: u8,
}

impl DiscountCard {
    /// Returns the card's discount as a [`Rate`].
    #[inline]
    pub fn rate(&self) -> Rate {
        Rate::from_percent(self.discount_pct)
    }
}

// =============================================================================
// Check Request
// =============================================================================

/// One evaluation request: what the customer asked for and how they pay.
///
/// Requested lines are keyed by product id. A `BTreeMap` keeps the
/// iteration order deterministic, so the fail-fast stock check always
/// trips on the same line for the same input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckRequest {
    /// Requested product-id → quantity pairs (ids 1-based, quantities > 0).
    pub lines: BTreeMap<u32, u32>,

    /// Requested discount card number; 0 means no card presented.
    pub discount_card: u32,

    /// Customer's available balance in cents.
    pub balance_cents: i64,

    /// Whether the caller wants the receipt persisted (passthrough only).
    pub save_to_file: bool,

    /// Set by the caller when upstream parsing already failed; the
    /// evaluator short-circuits to BAD_REQUEST.
    pub malformed: bool,
}

impl CheckRequest {
    /// Creates a well-formed request.
    pub fn new(
        lines: BTreeMap<u32, u32>,
        discount_card: u32,
        balance: Money,
        save_to_file: bool,
    ) -> Self {
        CheckRequest {
            lines,
            discount_card,
            balance_cents: balance.cents(),
            save_to_file,
            malformed: false,
        }
    }

    /// Creates a request that only carries the upstream failure signal.
    pub fn rejected(save_to_file: bool) -> Self {
        CheckRequest {
            lines: BTreeMap::new(),
            discount_card: 0,
            balance_cents: 0,
            save_to_file,
            malformed: true,
        }
    }

    /// Returns the customer balance as Money.
    #[inline]
    pub fn balance(&self) -> Money {
        Money::from_cents(self.balance_cents)
    }
}

// =============================================================================
// Catalog Snapshot
// =============================================================================

/// The immutable catalog state one evaluation runs against.
///
/// Loaded once per evaluation by a catalog source and passed through every
/// component call. Concurrent callers each get their own snapshot; there is
/// no shared mutable catalog state anywhere in the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// Products in catalog order; requested id `k` is position `k`.
    pub products: Vec<Product>,

    /// Registered discount cards.
    pub discount_cards: Vec<DiscountCard>,
}

// =============================================================================
// Product Check Record
// =============================================================================

/// One priced line on the receipt.
///
/// `total_cents` is price × quantity BEFORE the discount is subtracted;
/// the discount is reported separately, never netted into the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCheckRecord {
    /// Product description at evaluation time.
    pub description: String,

    /// Unit price in cents.
    pub price_cents: i64,

    /// Quantity sold.
    pub quantity: u32,

    /// Discount for this line in cents, rounded half-up.
    pub discount_cents: i64,

    /// Line total (price × quantity) in cents, before discount.
    pub total_cents: i64,
}

impl ProductCheckRecord {
    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the line discount as Money.
    #[inline]
    pub fn discount(&self) -> Money {
        Money::from_cents(self.discount_cents)
    }

    /// Returns the line total (pre-discount) as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Check Info
// =============================================================================

/// The evaluation result: a receipt or a typed failure.
///
/// Always returned by value; the error code is data, never a thrown error.
/// A receipt with `error != CheckError::None` carries no lines and zero
/// totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInfo {
    /// When the receipt was produced.
    pub check_time: DateTime<Utc>,

    /// Priced lines, in resolved request order. Empty on failure.
    pub records: Vec<ProductCheckRecord>,

    /// Sum of line totals (pre-discount) in cents. Zero on failure.
    pub total_price_cents: i64,

    /// The discount card that governed the transaction, if any. This is
    /// the registered card or the synthesized fallback card.
    pub discount_card: Option<DiscountCard>,

    /// Persistence flag passed through from the request.
    pub save_to_file: bool,

    /// Terminal outcome of the evaluation.
    pub error: CheckError,
}

impl CheckInfo {
    /// Creates a failure receipt carrying only the error code.
    pub fn failure(error: CheckError, save_to_file: bool) -> Self {
        CheckInfo {
            check_time: Utc::now(),
            records: Vec::new(),
            total_price_cents: 0,
            discount_card: None,
            save_to_file,
            error,
        }
    }

    /// Whether the evaluation succeeded.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.error == CheckError::None
    }

    /// Sum of line totals (pre-discount) as Money.
    #[inline]
    pub fn total_price(&self) -> Money {
        Money::from_cents(self.total_price_cents)
    }

    /// Sum of line discounts, derived from the records.
    pub fn total_discount(&self) -> Money {
        Money::from_cents(self.records.iter().map(|r| r.discount_cents).sum())
    }

    /// Amount actually owed: total price minus total discount.
    pub fn total_with_discount(&self) -> Money {
        self.total_price() - self.total_discount()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
