//! # Product Repository
//!
//! Reads the `product` table into domain [`Product`] values.
//!
//! Prices are selected as text and parsed through [`Money`], so the exact
//! two-decimal catalog value reaches the engine with no floating-point
//! round trip.

use sqlx::PgPool;
use tracing::debug;

use crate::error::{DataError, DataResult};
use check_core::validation::validate_price_cents;
use check_core::{Money, Product};

/// Repository for product reads.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
/// let products = repo.all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

/// Raw `product` row, one-to-one with the table columns.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i32,
    description: String,
    price: String,
    quantity_in_stock: i32,
    wholesale_product: bool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: PgPool) -> Self {
        ProductRepository { pool }
    }

    /// Loads all products in id order.
    pub async fn all(&self) -> DataResult<Vec<Product>> {
        debug!("loading products from database");

        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT
                id,
                description,
                price::text AS price,
                quantity_in_stock,
                wholesale_product
            FROM product
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let products = rows
            .into_iter()
            .map(ProductRow::into_product)
            .collect::<DataResult<Vec<_>>>()?;

        debug!(count = products.len(), "products loaded");
        Ok(products)
    }
}

impl ProductRow {
    fn into_product(self) -> DataResult<Product> {
        let id = u32::try_from(self.id)
            .map_err(|_| DataError::malformed_field("product id", &self.id.to_string()))?;

        let price: Money = self
            .price
            .parse()
            .map_err(|_| DataError::malformed_field("price", &self.price))?;
        validate_price_cents(price.cents()).map_err(|e| DataError::Malformed(e.to_string()))?;

        let quantity_in_stock = u32::try_from(self.quantity_in_stock).map_err(|_| {
            DataError::malformed_field("quantity_in_stock", &self.quantity_in_stock.to_string())
        })?;

        Ok(Product {
            id,
            description: self.description,
            price_cents: price.cents(),
            quantity_in_stock,
            wholesale: self.wholesale_product,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn row(price: &str, stock: i32) -> ProductRow {
        ProductRow {
            id: 1,
            description: "Milk".to_string(),
            price: price.to_string(),
            quantity_in_stock: stock,
            wholesale_product: true,
        }
    }

    #[test]
    fn test_row_conversion() {
        let product = row("1.07", 10).into_product().unwrap();

        assert_eq!(product.id, 1);
        assert_eq!(product.price_cents, 107);
        assert_eq!(product.quantity_in_stock, 10);
        assert!(product.wholesale);
    }

    #[test]
    fn test_row_with_bad_price_is_malformed() {
        let err = row("1,07", 10).into_product().unwrap_err();
        assert!(matches!(err, DataError::Malformed(_)));
    }

    #[test]
    fn test_row_with_negative_stock_is_malformed() {
        let err = row("1.07", -1).into_product().unwrap_err();
        assert!(matches!(err, DataError::Malformed(_)));
    }
}
