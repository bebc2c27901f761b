//! # check-data: Catalog Sources for the Check Engine
//!
//! This crate provides the product and discount-card catalogs the evaluator
//! consumes, from either CSV files or a PostgreSQL database.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Check Data Flow                                 │
//! │                                                                         │
//! │  CLI (check binary)                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    check-data (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  FileCatalog  │    │   Database    │    │ Repositories │  │   │
//! │  │   │  (files.rs)   │    │   (pool.rs)   │    │              │  │   │
//! │  │   │               │    │               │    │ ProductRepo  │  │   │
//! │  │   │ products.csv  │    │ PgPool        │◄───│ CardRepo     │  │   │
//! │  │   │ cards.csv     │    │ availability  │    │              │  │   │
//! │  │   └───────┬───────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │           │                    │                               │   │
//! │  │           └────────┬───────────┘                               │   │
//! │  └────────────────────┼───────────────────────────────────────────┘   │
//! │                       ▼                                                 │
//! │               CatalogSnapshot  ──►  check-core evaluator               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`files`] - Semicolon-delimited CSV catalog files
//! - [`pool`] - PostgreSQL connection handling and availability probing
//! - [`error`] - Source error taxonomy (unreachable vs. query failed)
//! - [`repository`] - Table readers (product, discount card)
//!
//! ## Error Taxonomy
//!
//! [`DataError`] keeps "source unreachable" distinct from "source reachable
//! but the read failed". The caller surfaces both as BAD_REQUEST on the
//! receipt; the distinction exists for this layer's own diagnostics.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use check_data::{Database, DbConfig, FileCatalog};
//!
//! // CSV source
//! let catalog = FileCatalog::new("data/products.csv", "data/discountCards.csv");
//! let snapshot = catalog.snapshot()?;
//!
//! // Database source
//! let db = Database::connect(&DbConfig::new(url, user, password)).await?;
//! let snapshot = db.snapshot().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod files;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DataError, DataResult};
pub use files::FileCatalog;
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::discount_card::DiscountCardRepository;
pub use repository::product::ProductRepository;
