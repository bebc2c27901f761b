//! # Transaction Evaluator
//!
//! Top-level entry point: turns a [`CheckRequest`] and a [`CatalogSnapshot`]
//! into a [`CheckInfo`] receipt.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Evaluation Pipeline                                │
//! │                                                                         │
//! │  request.malformed? ──────────────────────────────► BAD_REQUEST        │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  catalog::resolve ───────── bad id ───────────────► BAD_REQUEST        │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  discount::select  (once per transaction)                              │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  per line: stock check ──── shortfall ────────────► BAD_REQUEST        │
//! │            then price                                (fail-fast,        │
//! │        │                                              no partials)      │
//! │        ▼                                                                │
//! │  aggregate totals                                                       │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  total − discount > balance? ─────────────────────► NOT_ENOUGH_MONEY   │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  success receipt (error = NONE)                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Exactly one terminal outcome per call, always returned as a value.
//! The evaluator is a pure function of its two arguments (timestamp aside):
//! the snapshot is read-only for the whole call, and nothing is cached
//! across calls.
//!
//! Source unavailability is the caller's concern: when the catalog source
//! cannot produce a snapshot at all, the caller constructs
//! `CheckInfo::failure(CheckError::BadRequest, ..)` directly; the core
//! never sees a half-loaded catalog.

use chrono::Utc;

use crate::catalog;
use crate::discount;
use crate::error::CheckError;
use crate::money::Money;
use crate::pricing;
use crate::types::{CatalogSnapshot, CheckInfo, CheckRequest};

/// Evaluates one transaction against an immutable catalog snapshot.
///
/// ## Example
/// ```rust
/// use std::collections::BTreeMap;
/// use check_core::{check, CatalogSnapshot, CheckError, CheckRequest, Money, Product};
///
/// let snapshot = CatalogSnapshot {
///     products: vec![Product {
///         id: 1,
///         description: "Milk".to_string(),
///         price_cents: 107,
///         quantity_in_stock: 10,
///         wholesale: false,
///     }],
///     discount_cards: vec![],
/// };
///
/// let request = CheckRequest::new(
///     BTreeMap::from([(1, 3)]),
///     0,
///     Money::from_cents(10_00),
///     false,
/// );
///
/// let receipt = check::evaluate(&request, &snapshot);
/// assert_eq!(receipt.error, CheckError::None);
/// assert_eq!(receipt.total_price_cents, 321);
/// ```
pub fn evaluate(request: &CheckRequest, snapshot: &CatalogSnapshot) -> CheckInfo {
    // 1. Upstream parsing already failed: nothing to evaluate.
    if request.malformed {
        return CheckInfo::failure(CheckError::BadRequest, request.save_to_file);
    }

    // 2. Resolve requested ids against the catalog, all-or-nothing.
    let lines = match catalog::resolve(&snapshot.products, &request.lines) {
        Ok(lines) => lines,
        Err(err) => return CheckInfo::failure(err.check_error(), request.save_to_file),
    };

    // 3. One discount context governs the whole transaction.
    let context = discount::select(request.discount_card, &snapshot.discount_cards);

    // 4. Stock check then pricing, per line, fail-fast on the first shortfall.
    let mut records = Vec::with_capacity(lines.len());
    for line in &lines {
        if !line.product.can_fulfill(line.quantity) {
            return CheckInfo::failure(CheckError::BadRequest, request.save_to_file);
        }
        records.push(pricing::price_line(&line.product, line.quantity, &context));
    }

    // 5. Aggregate. Line figures are already rounded, so plain sums are exact.
    let total_price: Money =
        Money::from_cents(records.iter().map(|r| r.total_cents).sum());
    let total_discount: Money =
        Money::from_cents(records.iter().map(|r| r.discount_cents).sum());

    // 6. Affordability: the discounted total must fit the balance.
    if total_price - total_discount > request.balance() {
        return CheckInfo::failure(CheckError::NotEnoughMoney, request.save_to_file);
    }

    // 7. Success receipt.
    CheckInfo {
        check_time: Utc::now(),
        records,
        total_price_cents: total_price.cents(),
        discount_card: context.into_card(),
        save_to_file: request.save_to_file,
        error: CheckError::None,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
