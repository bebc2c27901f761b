//! # Argument Parsing
//!
//! Turns the raw command line into a [`CheckRequest`] plus source/output
//! settings.
//!
//! ## Token Shape
//! ```text
//! check 3-1 2-5 discountCard=1111 balanceDebitCard=100 saveToFile=out.csv \
//!       datasource.url=postgres://localhost:5432/check \
//!       datasource.username=check datasource.password=secret
//!
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Token               Meaning                                            │
//! │  ─────               ───────                                            │
//! │  id-qty              requested line; repeated ids accumulate            │
//! │  discountCard=N      card number (0/absent = no card)                   │
//! │  balanceDebitCard=B  customer balance, decimal                          │
//! │  saveToFile=PATH     result file path (default result.csv)              │
//! │  pathToFile=PATH     products CSV path (file source only)              │
//! │  datasource.*        url/username/password select the database source  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A bad token never aborts the program: it sets the request's `malformed`
//! flag, so the evaluator rejects with BAD_REQUEST and the error still
//! reaches the result file.

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Parser;
use tracing::warn;

use check_core::validation::{validate_balance_cents, validate_quantity};
use check_core::{CheckRequest, Money};

/// Default products CSV path when no database source is selected.
pub const DEFAULT_PRODUCTS_PATH: &str = "./data/products.csv";

/// Default discount-cards CSV path when no database source is selected.
pub const DEFAULT_CARDS_PATH: &str = "./data/discountCards.csv";

/// Default result file path.
pub const DEFAULT_OUTPUT_PATH: &str = "result.csv";

// =============================================================================
// Command Line
// =============================================================================

/// Computes a purchase receipt from requested product quantities.
#[derive(Debug, Parser)]
#[command(name = "check", version, about)]
pub struct Cli {
    /// `id-quantity` pairs and `key=value` settings (see module docs).
    pub tokens: Vec<String>,
}

// =============================================================================
// Parsed Arguments
// =============================================================================

/// Which catalog source the request should be evaluated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    /// CSV files on disk.
    Files {
        products: PathBuf,
        discount_cards: PathBuf,
    },

    /// PostgreSQL database.
    Database {
        url: String,
        username: String,
        password: String,
    },
}

/// The fully interpreted command line.
#[derive(Debug, Clone)]
pub struct ParsedArgs {
    /// The evaluation request (carries `malformed` on any bad token).
    pub request: CheckRequest,

    /// Catalog source to load the snapshot from.
    pub source: SourceSpec,

    /// Where the receipt is written.
    pub output_path: PathBuf,
}

/// Interprets the raw tokens.
///
/// Every token is inspected even after a failure, so `saveToFile=` still
/// takes effect on a request that ends up rejected.
pub fn parse_tokens(tokens: &[String]) -> ParsedArgs {
    let mut lines: BTreeMap<u32, u32> = BTreeMap::new();
    let mut discount_card: u32 = 0;
    let mut balance: Option<Money> = None;
    let mut save_path: Option<PathBuf> = None;
    let mut products_path: Option<PathBuf> = None;
    let mut ds_url: Option<String> = None;
    let mut ds_username: Option<String> = None;
    let mut ds_password: Option<String> = None;
    let mut malformed = false;

    let reject = |token: &str, reason: &str| {
        warn!(token, reason, "rejecting request");
    };

    for token in tokens {
        if let Some((key, value)) = token.split_once('=') {
            match key {
                "discountCard" => match value.parse::<u32>() {
                    Ok(number) => discount_card = number,
                    Err(_) => {
                        reject(token, "card number is not numeric");
                        malformed = true;
                    }
                },
                "balanceDebitCard" => {
                    match value.parse::<Money>() {
                        Ok(money) if validate_balance_cents(money.cents()).is_ok() => {
                            balance = Some(money)
                        }
                        _ => {
                            reject(token, "balance is not a non-negative decimal");
                            malformed = true;
                        }
                    }
                }
                "saveToFile" => save_path = Some(PathBuf::from(value)),
                "pathToFile" => products_path = Some(PathBuf::from(value)),
                "datasource.url" => ds_url = Some(value.to_string()),
                "datasource.username" => ds_username = Some(value.to_string()),
                "datasource.password" => ds_password = Some(value.to_string()),
                _ => {
                    reject(token, "unknown setting");
                    malformed = true;
                }
            }
            continue;
        }

        // Anything without '=' must be an id-quantity pair.
        match parse_line_pair(token) {
            Some((id, quantity)) => {
                *lines.entry(id).or_insert(0) += quantity;
            }
            None => {
                reject(token, "not an id-quantity pair");
                malformed = true;
            }
        }
    }

    if lines.is_empty() {
        warn!("no product lines requested; rejecting request");
        malformed = true;
    }
    if balance.is_none() {
        warn!("balanceDebitCard missing; rejecting request");
        malformed = true;
    }

    // Database source requires the full credential triple.
    let ds_given = [&ds_url, &ds_username, &ds_password]
        .iter()
        .filter(|v| v.is_some())
        .count();
    let source = match (ds_url, ds_username, ds_password) {
        (Some(url), Some(username), Some(password)) => SourceSpec::Database {
            url,
            username,
            password,
        },
        _ => {
            if ds_given > 0 {
                warn!("incomplete datasource settings; rejecting request");
                malformed = true;
            }
            SourceSpec::Files {
                products: products_path.unwrap_or_else(|| PathBuf::from(DEFAULT_PRODUCTS_PATH)),
                discount_cards: PathBuf::from(DEFAULT_CARDS_PATH),
            }
        }
    };

    let save_to_file = save_path.is_some();
    let request = if malformed {
        CheckRequest::rejected(save_to_file)
    } else {
        CheckRequest::new(
            lines,
            discount_card,
            balance.unwrap_or_else(Money::zero),
            save_to_file,
        )
    };

    ParsedArgs {
        request,
        source,
        output_path: save_path.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
    }
}

/// Parses one `id-quantity` token; quantities must be positive.
fn parse_line_pair(token: &str) -> Option<(u32, u32)> {
    let (id, quantity) = token.split_once('-')?;
    let id: u32 = id.parse().ok()?;
    let quantity: u32 = quantity.parse().ok()?;
    validate_quantity(quantity).ok()?;
    Some((id, quantity))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_basic_request() {
        let parsed = parse_tokens(&tokens(&[
            "3-1",
            "2-5",
            "discountCard=1111",
            "balanceDebitCard=100",
        ]));

        assert!(!parsed.request.malformed);
        assert_eq!(parsed.request.lines.get(&3), Some(&1));
        assert_eq!(parsed.request.lines.get(&2), Some(&5));
        assert_eq!(parsed.request.discount_card, 1111);
        assert_eq!(parsed.request.balance_cents, 100_00);
        assert!(!parsed.request.save_to_file);
        assert_eq!(parsed.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
    }

    #[test]
    fn test_repeated_ids_accumulate() {
        let parsed = parse_tokens(&tokens(&["2-5", "2-3", "balanceDebitCard=10"]));
        assert_eq!(parsed.request.lines.get(&2), Some(&8));
    }

    #[test]
    fn test_decimal_balance() {
        let parsed = parse_tokens(&tokens(&["1-1", "balanceDebitCard=85.50"]));
        assert_eq!(parsed.request.balance_cents, 85_50);
    }

    #[test]
    fn test_save_to_file_sets_flag_and_path() {
        let parsed = parse_tokens(&tokens(&["1-1", "balanceDebitCard=10", "saveToFile=out.csv"]));
        assert!(parsed.request.save_to_file);
        assert_eq!(parsed.output_path, PathBuf::from("out.csv"));
    }

    #[test]
    fn test_garbage_pair_marks_malformed_not_fatal() {
        let parsed = parse_tokens(&tokens(&["banana", "balanceDebitCard=10"]));
        assert!(parsed.request.malformed);

        let parsed = parse_tokens(&tokens(&["1-0", "balanceDebitCard=10"]));
        assert!(parsed.request.malformed);

        let parsed = parse_tokens(&tokens(&["1-x", "balanceDebitCard=10"]));
        assert!(parsed.request.malformed);
    }

    #[test]
    fn test_missing_balance_is_malformed() {
        let parsed = parse_tokens(&tokens(&["1-1"]));
        assert!(parsed.request.malformed);
    }

    #[test]
    fn test_missing_lines_is_malformed() {
        let parsed = parse_tokens(&tokens(&["balanceDebitCard=10"]));
        assert!(parsed.request.malformed);
    }

    #[test]
    fn test_unknown_setting_is_malformed() {
        let parsed = parse_tokens(&tokens(&["1-1", "balanceDebitCard=10", "frobnicate=1"]));
        assert!(parsed.request.malformed);
    }

    #[test]
    fn test_malformed_request_still_records_save_path() {
        let parsed = parse_tokens(&tokens(&["banana", "saveToFile=err.csv"]));
        assert!(parsed.request.malformed);
        assert!(parsed.request.save_to_file);
        assert_eq!(parsed.output_path, PathBuf::from("err.csv"));
    }

    #[test]
    fn test_full_datasource_selects_database() {
        let parsed = parse_tokens(&tokens(&[
            "1-1",
            "balanceDebitCard=10",
            "datasource.url=postgres://localhost:5432/check",
            "datasource.username=check",
            "datasource.password=secret",
        ]));

        assert!(!parsed.request.malformed);
        assert!(matches!(parsed.source, SourceSpec::Database { .. }));
    }

    #[test]
    fn test_partial_datasource_is_malformed() {
        let parsed = parse_tokens(&tokens(&[
            "1-1",
            "balanceDebitCard=10",
            "datasource.url=postgres://localhost:5432/check",
        ]));

        assert!(parsed.request.malformed);
        assert!(matches!(parsed.source, SourceSpec::Files { .. }));
    }

    #[test]
    fn test_path_to_file_overrides_products_path() {
        let parsed = parse_tokens(&tokens(&[
            "1-1",
            "balanceDebitCard=10",
            "pathToFile=/tmp/custom.csv",
        ]));

        match parsed.source {
            SourceSpec::Files { products, .. } => {
                assert_eq!(products, PathBuf::from("/tmp/custom.csv"));
            }
            _ => panic!("expected file source"),
        }
    }
}
