//! # Line Pricer
//!
//! Prices a single resolved line into a [`ProductCheckRecord`].
//!
//! ## Discount Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Per-Line Discount Decision                          │
//! │                                                                         │
//! │  wholesale && qty >= 5 ────────────────► 10% of price × qty            │
//! │        │                                  (wholesale always wins,       │
//! │        │                                   card rate ignored)           │
//! │        ▼                                                                │
//! │  card context active ──────────────────► card rate of price × qty      │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  otherwise ────────────────────────────► 0.00                          │
//! │                                                                         │
//! │  total is ALWAYS price × qty, before any discount is subtracted         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stock checking is NOT done here: the evaluator checks stock before
//! calling in, and aborts the whole transaction on the first shortfall.
//! Every discount is rounded half-up to the cent as it is computed.

use crate::discount::DiscountContext;
use crate::money::{Money, Rate};
use crate::types::{Product, ProductCheckRecord};
use crate::{WHOLESALE_DISCOUNT_PCT, WHOLESALE_THRESHOLD};

/// The fixed rate for wholesale-quantity lines.
pub const WHOLESALE_RATE: Rate = Rate::from_percent(WHOLESALE_DISCOUNT_PCT);

/// Prices one line under the transaction's discount context.
///
/// ## Example
/// ```rust
/// use check_core::discount::DiscountContext;
/// use check_core::pricing::price_line;
/// use check_core::Product;
///
/// let product = Product {
///     id: 1,
///     description: "Rice".to_string(),
///     price_cents: 1000,
///     quantity_in_stock: 100,
///     wholesale: true,
/// };
///
/// // Wholesale quantity reached: fixed 10% regardless of card
/// let record = price_line(&product, 5, &DiscountContext::NoCard);
/// assert_eq!(record.total_cents, 5000);
/// assert_eq!(record.discount_cents, 500);
/// ```
pub fn price_line(product: &Product, quantity: u32, context: &DiscountContext) -> ProductCheckRecord {
    let total = product.price().multiply_quantity(quantity);

    let discount = if product.wholesale && quantity >= WHOLESALE_THRESHOLD {
        // Quantity discount supersedes any card rate
        total.calculate_discount(WHOLESALE_RATE)
    } else if let Some(rate) = context.rate() {
        total.calculate_discount(rate)
    } else {
        Money::zero()
    };

    ProductCheckRecord {
        description: product.description.clone(),
        price_cents: product.price_cents,
        quantity,
        discount_cents: discount.cents(),
        total_cents: total.cents(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DiscountCard;

    fn product(price_cents: i64, wholesale: bool) -> Product {
        Product {
            id: 1,
            description: "Test".to_string(),
            price_cents,
            quantity_in_stock: 100,
            wholesale,
        }
    }

    fn card_context(pct: u8) -> DiscountContext {
        DiscountContext::Card(DiscountCard {
            id: 1,
            number: 1111,
            discount_pct: pct,
        })
    }

    #[test]
    fn test_plain_line_no_card() {
        // price 10.00, qty 3, no card → total 30.00, discount 0.00
        let record = price_line(&product(1000, false), 3, &DiscountContext::NoCard);
        assert_eq!(record.total_cents, 3000);
        assert_eq!(record.discount_cents, 0);
        assert_eq!(record.quantity, 3);
        assert_eq!(record.price_cents, 1000);
    }

    #[test]
    fn test_wholesale_at_threshold_no_card() {
        // wholesale, qty 5, no card → total 50.00, discount 5.00
        let record = price_line(&product(1000, true), 5, &DiscountContext::NoCard);
        assert_eq!(record.total_cents, 5000);
        assert_eq!(record.discount_cents, 500);
    }

    #[test]
    fn test_wholesale_below_threshold_uses_card_rate() {
        // wholesale, qty 3, card 5% → total 30.00, discount 1.50
        let record = price_line(&product(1000, true), 3, &card_context(5));
        assert_eq!(record.total_cents, 3000);
        assert_eq!(record.discount_cents, 150);
    }

    #[test]
    fn test_wholesale_below_threshold_no_card_is_free_of_discount() {
        let record = price_line(&product(1000, true), 4, &DiscountContext::NoCard);
        assert_eq!(record.discount_cents, 0);
    }

    #[test]
    fn test_wholesale_supersedes_card_rate_at_threshold() {
        // Even a larger card rate loses to the fixed 10% once qty >= 5
        let record = price_line(&product(1000, true), 5, &card_context(50));
        assert_eq!(record.discount_cents, 500);

        // And a smaller one is not used either
        let record = price_line(&product(1000, true), 5, &card_context(2));
        assert_eq!(record.discount_cents, 500);
    }

    #[test]
    fn test_quantity_four_to_five_switches_rate_basis() {
        let card = card_context(3);

        let at_four = price_line(&product(1000, true), 4, &card);
        assert_eq!(at_four.discount_cents, 120); // 3% of 40.00

        let at_five = price_line(&product(1000, true), 5, &card);
        assert_eq!(at_five.discount_cents, 500); // 10% of 50.00
    }

    #[test]
    fn test_non_wholesale_card_discount_rounds_half_up() {
        // price 1.07, qty 3, card 3% → total 3.21, discount 0.0963 → 0.10
        let record = price_line(&product(107, false), 3, &card_context(3));
        assert_eq!(record.total_cents, 321);
        assert_eq!(record.discount_cents, 10);
    }

    #[test]
    fn test_discount_never_exceeds_total() {
        // Rates are bounded well below 100%
        let record = price_line(&product(1, true), 5, &card_context(10));
        assert!(record.discount_cents <= record.total_cents);
    }
}
