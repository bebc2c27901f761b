//! # Discount Card Repository
//!
//! Reads the `discount_card` table into domain [`DiscountCard`] values.

use sqlx::PgPool;
use tracing::debug;

use crate::error::{DataError, DataResult};
use check_core::validation::validate_card_number;
use check_core::DiscountCard;

/// Repository for discount-card reads.
#[derive(Debug, Clone)]
pub struct DiscountCardRepository {
    pool: PgPool,
}

/// Raw `discount_card` row, one-to-one with the table columns.
#[derive(Debug, sqlx::FromRow)]
struct DiscountCardRow {
    id: i32,
    number: i32,
    amount: i32,
}

impl DiscountCardRepository {
    /// Creates a new DiscountCardRepository.
    pub fn new(pool: PgPool) -> Self {
        DiscountCardRepository { pool }
    }

    /// Loads all discount cards in id order.
    pub async fn all(&self) -> DataResult<Vec<DiscountCard>> {
        debug!("loading discount cards from database");

        let rows = sqlx::query_as::<_, DiscountCardRow>(
            r#"
            SELECT id, number, amount
            FROM discount_card
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let cards = rows
            .into_iter()
            .map(DiscountCardRow::into_card)
            .collect::<DataResult<Vec<_>>>()?;

        debug!(count = cards.len(), "discount cards loaded");
        Ok(cards)
    }
}

impl DiscountCardRow {
    fn into_card(self) -> DataResult<DiscountCard> {
        let id = u32::try_from(self.id)
            .map_err(|_| DataError::malformed_field("card id", &self.id.to_string()))?;

        let number = u32::try_from(self.number)
            .map_err(|_| DataError::malformed_field("card number", &self.number.to_string()))?;
        validate_card_number(number).map_err(|e| DataError::Malformed(e.to_string()))?;

        let discount_pct = u8::try_from(self.amount)
            .map_err(|_| DataError::malformed_field("discount amount", &self.amount.to_string()))?;

        Ok(DiscountCard {
            id,
            number,
            discount_pct,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_conversion() {
        let card = DiscountCardRow {
            id: 1,
            number: 1111,
            amount: 3,
        }
        .into_card()
        .unwrap();

        assert_eq!(card.number, 1111);
        assert_eq!(card.discount_pct, 3);
    }

    #[test]
    fn test_out_of_range_number_is_malformed() {
        let err = DiscountCardRow {
            id: 1,
            number: 99,
            amount: 3,
        }
        .into_card()
        .unwrap_err();

        assert!(matches!(err, DataError::Malformed(_)));
    }

    #[test]
    fn test_negative_amount_is_malformed() {
        let err = DiscountCardRow {
            id: 1,
            number: 1111,
            amount: -3,
        }
        .into_card()
        .unwrap_err();

        assert!(matches!(err, DataError::Malformed(_)));
    }
}
