//! # Database Source
//!
//! PostgreSQL connection handling and availability probing.
//!
//! ## Availability Probing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Probe Before Use                                     │
//! │                                                                         │
//! │  Database::connect(config)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  probe() ── SELECT 1 fails? ──────────────► Unreachable                │
//! │       │                                                                 │
//! │       ├── product table missing? ─────────► Unreachable                │
//! │       ├── discount_card table missing? ───► Unreachable                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  snapshot() ── load products + cards ─────► CatalogSnapshot            │
//! │                                                                         │
//! │  The CLI turns any failure along this path into a BAD_REQUEST receipt  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tracing::{debug, info};

use crate::error::{DataError, DataResult};
use crate::repository::discount_card::DiscountCardRepository;
use crate::repository::product::ProductRepository;
use check_core::CatalogSnapshot;

// =============================================================================
// Configuration
// =============================================================================

/// Database source configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("postgres://localhost:5432/check", "check", "secret")
///     .max_connections(2);
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// PostgreSQL connection URL (host, port, database).
    pub url: String,

    /// Database user.
    pub username: String,

    /// Database password.
    pub password: String,

    /// Maximum number of connections in the pool.
    /// Default: 2 (one evaluation reads two tables)
    pub max_connections: u32,

    /// Connection timeout duration.
    /// Default: 5 seconds
    pub connect_timeout: Duration,
}

impl DbConfig {
    /// Creates a configuration with the given connection settings.
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        DbConfig {
            url: url.into(),
            username: username.into(),
            password: password.into(),
            max_connections: 2,
            connect_timeout: Duration::from_secs(5),
        }
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

// =============================================================================
// Database
// =============================================================================

/// Database catalog source.
#[derive(Debug, Clone)]
pub struct Database {
    /// The PostgreSQL connection pool.
    pool: PgPool,
}

impl Database {
    /// Connects to the database described by the configuration.
    ///
    /// Connection failures are [`DataError::Unreachable`]: an engine that
    /// cannot reach its catalog rejects the request rather than erroring
    /// out of band.
    pub async fn connect(config: &DbConfig) -> DataResult<Self> {
        info!(url = %config.url, "connecting to catalog database");

        let options = PgConnectOptions::from_str(&config.url)
            .map_err(|e| DataError::Unreachable(e.to_string()))?
            .username(&config.username)
            .password(&config.password);

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout)
            .connect_with(options)
            .await
            .map_err(|e| DataError::Unreachable(e.to_string()))?;

        debug!(max_connections = config.max_connections, "database pool created");

        Ok(Database { pool })
    }

    /// Verifies the source is usable: reachable, with both required tables.
    pub async fn probe(&self) -> DataResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DataError::Unreachable(e.to_string()))?;

        for table in ["product", "discount_card"] {
            if !self.table_exists(table).await? {
                return Err(DataError::Unreachable(format!(
                    "required table missing: {}",
                    table
                )));
            }
        }

        debug!("catalog database probe ok");
        Ok(())
    }

    async fn table_exists(&self, table: &str) -> DataResult<bool> {
        let qualified = format!("public.{}", table);
        let found: Option<String> = sqlx::query_scalar("SELECT to_regclass($1)::text")
            .bind(&qualified)
            .fetch_one(&self.pool)
            .await?;

        Ok(found.is_some())
    }

    /// Returns the product repository.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.pool.clone())
    }

    /// Returns the discount-card repository.
    pub fn discount_cards(&self) -> DiscountCardRepository {
        DiscountCardRepository::new(self.pool.clone())
    }

    /// Probes the source, then loads both tables into one snapshot.
    pub async fn snapshot(&self) -> DataResult<CatalogSnapshot> {
        self.probe().await?;

        Ok(CatalogSnapshot {
            products: self.products().all().await?,
            discount_cards: self.discount_cards().all().await?,
        })
    }

    /// Closes the connection pool.
    pub async fn close(&self) {
        info!("closing catalog database pool");
        self.pool.close().await;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = DbConfig::new("postgres://localhost:5432/check", "check", "secret")
            .max_connections(4)
            .connect_timeout(Duration::from_secs(1));

        assert_eq!(config.max_connections, 4);
        assert_eq!(config.connect_timeout, Duration::from_secs(1));
        assert_eq!(config.username, "check");
    }

    #[tokio::test]
    async fn test_connect_to_refused_port_is_unreachable() {
        // Nothing listens on the discard port; the refused connection must
        // surface as Unreachable, not as a query failure.
        let config = DbConfig::new("postgres://127.0.0.1:9/check", "check", "secret")
            .connect_timeout(Duration::from_secs(1));

        let err = Database::connect(&config).await.unwrap_err();
        assert!(matches!(err, DataError::Unreachable(_)));
    }
}
