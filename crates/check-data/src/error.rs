//! # Data Source Error Types
//!
//! Error types for catalog loading.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  io::Error / sqlx::Error / csv::Error                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DataError (this module) ← Unreachable vs. QueryFailed vs. Malformed   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CLI maps ANY DataError to a BAD_REQUEST receipt, after logging        │
//! │  the variant so operators can tell the cases apart                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Catalog source errors.
///
/// The three variants matter to diagnostics only; at the evaluation
/// boundary they all become BAD_REQUEST.
#[derive(Debug, Error)]
pub enum DataError {
    /// The source cannot be reached at all: missing file, refused
    /// connection, exhausted pool, missing required table.
    #[error("catalog source unreachable: {0}")]
    Unreachable(String),

    /// The source was reachable but the read itself failed.
    #[error("catalog query failed: {0}")]
    QueryFailed(String),

    /// The source answered with a record the domain model rejects.
    #[error("malformed catalog record: {0}")]
    Malformed(String),
}

impl DataError {
    /// Creates a Malformed error for a named field and offending value.
    pub fn malformed_field(field: &str, value: &str) -> Self {
        DataError::Malformed(format!("{} has invalid value '{}'", field, value))
    }
}

/// Convert sqlx errors to DataError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Io / Tls            → DataError::Unreachable
/// sqlx::Error::PoolTimedOut/Closed → DataError::Unreachable
/// sqlx::Error::Configuration       → DataError::Unreachable
/// Other                            → DataError::QueryFailed
/// ```
impl From<sqlx::Error> for DataError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Configuration(_) => DataError::Unreachable(err.to_string()),
            _ => DataError::QueryFailed(err.to_string()),
        }
    }
}

impl From<csv::Error> for DataError {
    fn from(err: csv::Error) -> Self {
        DataError::Malformed(err.to_string())
    }
}

/// Result type for catalog source operations.
pub type DataResult<T> = Result<T, DataError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_field_message() {
        let err = DataError::malformed_field("price", "abc");
        assert_eq!(
            err.to_string(),
            "malformed catalog record: price has invalid value 'abc'"
        );
    }

    #[test]
    fn test_pool_errors_map_to_unreachable() {
        let err: DataError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, DataError::Unreachable(_)));

        let err: DataError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, DataError::Unreachable(_)));
    }

    #[test]
    fn test_row_errors_map_to_query_failed() {
        let err: DataError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DataError::QueryFailed(_)));
    }
}
