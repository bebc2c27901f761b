//! # CSV Catalog Source
//!
//! Reads the product and discount-card catalogs from semicolon-delimited
//! CSV files.
//!
//! ## File Shapes
//! ```text
//! products.csv                          discountCards.csv
//! ─────────────────────────────────     ───────────────────────
//! id;description;price;               id;number;discount_amount
//!    quantity_in_stock;                1;1111;3
//!    wholesale_product                 2;2222;5
//! 1;Milk;1.07;10;true
//! 2;Cream;2.71;20;false
//! ```
//!
//! Rows with the wrong field count are skipped, not fatal; rows with the
//! right shape but unparseable fields are `Malformed` errors. A file that
//! cannot be opened is `Unreachable`.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::{DataError, DataResult};
use check_core::validation::{validate_card_number, validate_price_cents};
use check_core::{CatalogSnapshot, DiscountCard, Money, Product};

/// Field count of a well-formed product row.
const PRODUCT_FIELDS: usize = 5;

/// Field count of a well-formed discount-card row.
const CARD_FIELDS: usize = 3;

// =============================================================================
// File Catalog
// =============================================================================

/// Catalog source backed by a pair of CSV files.
///
/// ## Usage
/// ```rust,ignore
/// let catalog = FileCatalog::new("data/products.csv", "data/discountCards.csv");
/// let snapshot = catalog.snapshot()?;
/// ```
#[derive(Debug, Clone)]
pub struct FileCatalog {
    products_path: PathBuf,
    discount_cards_path: PathBuf,
}

impl FileCatalog {
    /// Creates a file catalog over the given paths.
    pub fn new(products: impl Into<PathBuf>, discount_cards: impl Into<PathBuf>) -> Self {
        FileCatalog {
            products_path: products.into(),
            discount_cards_path: discount_cards.into(),
        }
    }

    /// Loads the product list, in file order.
    pub fn load_products(&self) -> DataResult<Vec<Product>> {
        debug!(path = %self.products_path.display(), "loading products");

        let mut reader = open_reader(&self.products_path)?;
        let mut products = Vec::new();

        for result in reader.records() {
            let record = result?;
            if record.len() != PRODUCT_FIELDS {
                debug!(fields = record.len(), "skipping malformed product row");
                continue;
            }
            products.push(parse_product(&record)?);
        }

        debug!(count = products.len(), "products loaded");
        Ok(products)
    }

    /// Loads the discount-card list, in file order.
    pub fn load_discount_cards(&self) -> DataResult<Vec<DiscountCard>> {
        debug!(path = %self.discount_cards_path.display(), "loading discount cards");

        let mut reader = open_reader(&self.discount_cards_path)?;
        let mut cards = Vec::new();

        for result in reader.records() {
            let record = result?;
            if record.len() != CARD_FIELDS {
                debug!(fields = record.len(), "skipping malformed card row");
                continue;
            }
            cards.push(parse_card(&record)?);
        }

        debug!(count = cards.len(), "discount cards loaded");
        Ok(cards)
    }

    /// Loads both files into one immutable snapshot.
    pub fn snapshot(&self) -> DataResult<CatalogSnapshot> {
        Ok(CatalogSnapshot {
            products: self.load_products()?,
            discount_cards: self.load_discount_cards()?,
        })
    }
}

// =============================================================================
// Row Parsing
// =============================================================================

fn open_reader(path: &Path) -> DataResult<csv::Reader<BufReader<File>>> {
    let file = File::open(path)
        .map_err(|e| DataError::Unreachable(format!("{}: {}", path.display(), e)))?;

    Ok(ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file)))
}

fn field<'r>(record: &'r StringRecord, index: usize, name: &str) -> DataResult<&'r str> {
    record
        .get(index)
        .map(str::trim)
        .ok_or_else(|| DataError::Malformed(format!("missing field {}", name)))
}

fn parse_product(record: &StringRecord) -> DataResult<Product> {
    let id = field(record, 0, "id")?;
    let id: u32 = id
        .parse()
        .map_err(|_| DataError::malformed_field("product id", id))?;

    let description = field(record, 1, "description")?.to_string();

    let price = field(record, 2, "price")?;
    let price: Money = price
        .parse()
        .map_err(|_| DataError::malformed_field("price", price))?;
    validate_price_cents(price.cents()).map_err(|e| DataError::Malformed(e.to_string()))?;

    let stock = field(record, 3, "quantity_in_stock")?;
    let quantity_in_stock: u32 = stock
        .parse()
        .map_err(|_| DataError::malformed_field("quantity_in_stock", stock))?;

    // Anything but "true" (case-insensitive) reads as non-wholesale.
    let wholesale = field(record, 4, "wholesale_product")?.eq_ignore_ascii_case("true");

    Ok(Product {
        id,
        description,
        price_cents: price.cents(),
        quantity_in_stock,
        wholesale,
    })
}

fn parse_card(record: &StringRecord) -> DataResult<DiscountCard> {
    let id = field(record, 0, "id")?;
    let id: u32 = id
        .parse()
        .map_err(|_| DataError::malformed_field("card id", id))?;

    let number = field(record, 1, "number")?;
    let number: u32 = number
        .parse()
        .map_err(|_| DataError::malformed_field("card number", number))?;
    validate_card_number(number).map_err(|e| DataError::Malformed(e.to_string()))?;

    let amount = field(record, 2, "discount_amount")?;
    let discount_pct: u8 = amount
        .parse()
        .map_err(|_| DataError::malformed_field("discount_amount", amount))?;

    Ok(DiscountCard {
        id,
        number,
        discount_pct,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
