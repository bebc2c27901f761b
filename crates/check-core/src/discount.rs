//! # Discount Selector
//!
//! Decides which discount context governs a transaction.
//!
//! ## Decision Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Requested number          Known cards         Context                  │
//! │  ────────────────          ───────────         ───────                  │
//! │  0                         any                 NoCard                   │
//! │  outside [1000, 9999]      any                 NoCard                   │
//! │  in range                  exact match         Card(registered)         │
//! │  in range                  no match            Card(fallback, 2%)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The decision is made once per transaction, never per line. The fallback
//! card models a generic loyalty default for any plausible card number and
//! is used identically to a registered card downstream.

use crate::money::Rate;
use crate::types::DiscountCard;
use crate::{FALLBACK_DISCOUNT_PCT, MAX_CARD_NUMBER, MIN_CARD_NUMBER};

// =============================================================================
// Discount Context
// =============================================================================

/// The discount context for one whole transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscountContext {
    /// No card presented (or the number was not well-formed); non-wholesale
    /// lines get zero discount.
    NoCard,

    /// A card governs the transaction: either a registered card or the
    /// synthesized fallback card.
    Card(DiscountCard),
}

impl DiscountContext {
    /// The governing card, if any.
    #[inline]
    pub fn card(&self) -> Option<&DiscountCard> {
        match self {
            DiscountContext::NoCard => None,
            DiscountContext::Card(card) => Some(card),
        }
    }

    /// The card rate applied to non-wholesale lines, if a card governs.
    #[inline]
    pub fn rate(&self) -> Option<Rate> {
        self.card().map(DiscountCard::rate)
    }

    /// Consumes the context, yielding the card for the receipt.
    #[inline]
    pub fn into_card(self) -> Option<DiscountCard> {
        match self {
            DiscountContext::NoCard => None,
            DiscountContext::Card(card) => Some(card),
        }
    }
}

// =============================================================================
// Selection
// =============================================================================

/// Whether a requested number has the shape of a card number at all.
#[inline]
pub fn is_well_formed(number: u32) -> bool {
    (MIN_CARD_NUMBER..=MAX_CARD_NUMBER).contains(&number)
}

/// Selects the discount context for the transaction.
///
/// ## Example
/// ```rust
/// use check_core::discount::{select, DiscountContext};
/// use check_core::DiscountCard;
///
/// let cards = vec![DiscountCard { id: 1, number: 1111, discount_pct: 3 }];
///
/// // Registered card
/// let ctx = select(1111, &cards);
/// assert_eq!(ctx.card().unwrap().discount_pct, 3);
///
/// // Well-formed but unregistered: fixed 2% fallback
/// let ctx = select(2222, &cards);
/// assert_eq!(ctx.card().unwrap().discount_pct, 2);
///
/// // No card presented
/// assert_eq!(select(0, &cards), DiscountContext::NoCard);
/// ```
pub fn select(requested: u32, cards: &[DiscountCard]) -> DiscountContext {
    if !is_well_formed(requested) {
        return DiscountContext::NoCard;
    }

    if let Some(card) = cards.iter().find(|c| c.number == requested) {
        return DiscountContext::Card(card.clone());
    }

    // Unregistered but plausible number: synthesize the fixed-rate card
    DiscountContext::Card(DiscountCard {
        id: 0,
        number: requested,
        discount_pct: FALLBACK_DISCOUNT_PCT,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cards() -> Vec<DiscountCard> {
        vec![
            DiscountCard {
                id: 1,
                number: 1111,
                discount_pct: 3,
            },
            DiscountCard {
                id: 2,
                number: 2222,
                discount_pct: 5,
            },
        ]
    }

    #[test]
    fn test_no_card_when_number_is_zero() {
        assert_eq!(select(0, &cards()), DiscountContext::NoCard);
    }

    #[test]
    fn test_no_card_when_number_is_malformed() {
        assert_eq!(select(999, &cards()), DiscountContext::NoCard);
        assert_eq!(select(10000, &cards()), DiscountContext::NoCard);
    }

    #[test]
    fn test_registered_card_wins() {
        let ctx = select(2222, &cards());
        let card = ctx.card().unwrap();
        assert_eq!(card.number, 2222);
        assert_eq!(card.discount_pct, 5);
        assert_eq!(ctx.rate().unwrap().percent(), 5);
    }

    #[test]
    fn test_unregistered_number_gets_fallback_rate() {
        let ctx = select(4321, &cards());
        let card = ctx.card().unwrap();
        assert_eq!(card.id, 0);
        assert_eq!(card.number, 4321);
        assert_eq!(card.discount_pct, FALLBACK_DISCOUNT_PCT);
    }

    #[test]
    fn test_boundary_numbers_are_well_formed() {
        assert!(is_well_formed(1000));
        assert!(is_well_formed(9999));
        assert!(!is_well_formed(999));
        assert!(!is_well_formed(10000));

        // 1000 and 9999 fall through to the fallback when unregistered
        assert!(select(1000, &cards()).card().is_some());
        assert!(select(9999, &cards()).card().is_some());
    }
}
