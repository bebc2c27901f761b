//! # Receipt Output
//!
//! Renders a [`CheckInfo`] to the semicolon-delimited result format, used
//! for both the result file and the console.
//!
//! ## Layout
//! ```text
//! Date;Time
//! 01.01.2024;12:00:00
//!
//! QTY;DESCRIPTION;PRICE;DISCOUNT;TOTAL
//! 3;Milk;1.07$;0.10$;3.21$
//!
//! DISCOUNT CARD;DISCOUNT PERCENTAGE
//! 1111;3%
//!
//! TOTAL PRICE;TOTAL DISCOUNT;TOTAL WITH DISCOUNT
//! 3.21$;0.10$;3.11$
//! ```
//!
//! Failure receipts render as:
//! ```text
//! ERROR
//! BAD REQUEST
//! ```
//!
//! The sectioned layout (blank separator lines, unquoted cells) is written
//! by hand rather than through a CSV writer, which would quote the empty
//! separator records. Output is stable byte-for-byte for a fixed CheckInfo;
//! downstream fixtures compare against it verbatim.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::AppError;
use check_core::{CheckInfo, Money};

/// Writes the receipt to any writer in the result-file format.
pub fn write_receipt<W: Write>(check: &CheckInfo, mut writer: W) -> Result<(), AppError> {
    if !check.is_success() {
        writeln!(writer, "ERROR")?;
        writeln!(writer, "{}", check.error)?;
        writer.flush()?;
        return Ok(());
    }

    writeln!(writer, "Date;Time")?;
    writeln!(
        writer,
        "{};{}",
        check.check_time.format("%d.%m.%Y"),
        check.check_time.format("%H:%M:%S")
    )?;
    writeln!(writer)?;

    writeln!(writer, "QTY;DESCRIPTION;PRICE;DISCOUNT;TOTAL")?;
    for record in &check.records {
        writeln!(
            writer,
            "{};{};{};{};{}",
            record.quantity,
            record.description,
            money_cell(record.price()),
            money_cell(record.discount()),
            money_cell(record.total())
        )?;
    }
    writeln!(writer)?;

    if let Some(card) = &check.discount_card {
        writeln!(writer, "DISCOUNT CARD;DISCOUNT PERCENTAGE")?;
        writeln!(writer, "{};{}%", card.number, card.discount_pct)?;
        writeln!(writer)?;
    }

    writeln!(writer, "TOTAL PRICE;TOTAL DISCOUNT;TOTAL WITH DISCOUNT")?;
    writeln!(
        writer,
        "{};{};{}",
        money_cell(check.total_price()),
        money_cell(check.total_discount()),
        money_cell(check.total_with_discount())
    )?;

    writer.flush()?;
    Ok(())
}

/// Writes the receipt to the result file.
pub fn save_to_file(check: &CheckInfo, path: &Path) -> Result<(), AppError> {
    let file = File::create(path)?;
    write_receipt(check, BufWriter::new(file))?;
    info!(path = %path.display(), "receipt saved");
    Ok(())
}

/// Mirrors the receipt on the console.
pub fn print_to_console(check: &CheckInfo) -> Result<(), AppError> {
    write_receipt(check, io::stdout().lock())
}

/// Renders a money value as a receipt cell: `1.07$`.
fn money_cell(amount: Money) -> String {
    format!("{}.{:02}$", amount.dollars(), amount.cents_part())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use check_core::{CheckError, DiscountCard, ProductCheckRecord};

    fn render(check: &CheckInfo) -> String {
        let mut buffer = Vec::new();
        write_receipt(check, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn success_receipt() -> CheckInfo {
        CheckInfo {
            check_time: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
            records: vec![ProductCheckRecord {
                description: "Milk".to_string(),
                price_cents: 107,
                quantity: 3,
                discount_cents: 10,
                total_cents: 321,
            }],
            total_price_cents: 321,
            discount_card: Some(DiscountCard {
                id: 1,
                number: 1111,
                discount_pct: 3,
            }),
            save_to_file: true,
            error: CheckError::None,
        }
    }

    #[test]
    fn test_success_layout() {
        let expected = "\
Date;Time
01.01.2024;12:00:00

QTY;DESCRIPTION;PRICE;DISCOUNT;TOTAL
3;Milk;1.07$;0.10$;3.21$

DISCOUNT CARD;DISCOUNT PERCENTAGE
1111;3%

TOTAL PRICE;TOTAL DISCOUNT;TOTAL WITH DISCOUNT
3.21$;0.10$;3.11$
";
        assert_eq!(render(&success_receipt()), expected);
    }

    #[test]
    fn test_no_card_omits_card_section() {
        let mut check = success_receipt();
        check.discount_card = None;
        check.records[0].discount_cents = 0;

        let rendered = render(&check);
        assert!(!rendered.contains("DISCOUNT CARD"));
        assert!(rendered.contains("TOTAL PRICE;TOTAL DISCOUNT;TOTAL WITH DISCOUNT"));
        assert!(rendered.contains("3.21$;0.00$;3.21$"));
    }

    #[test]
    fn test_multiple_lines_in_order() {
        let mut check = success_receipt();
        check.records.push(ProductCheckRecord {
            description: "Cream 400g".to_string(),
            price_cents: 271,
            quantity: 5,
            discount_cents: 136,
            total_cents: 1355,
        });
        check.total_price_cents = 321 + 1355;

        let rendered = render(&check);
        let milk = rendered.find("3;Milk").unwrap();
        let cream = rendered.find("5;Cream 400g;2.71$;1.36$;13.55$").unwrap();
        assert!(milk < cream);
    }

    #[test]
    fn test_bad_request_layout() {
        let check = CheckInfo::failure(CheckError::BadRequest, false);
        assert_eq!(render(&check), "ERROR\nBAD REQUEST\n");
    }

    #[test]
    fn test_not_enough_money_layout() {
        let check = CheckInfo::failure(CheckError::NotEnoughMoney, false);
        assert_eq!(render(&check), "ERROR\nNOT ENOUGH MONEY\n");
    }

    #[test]
    fn test_rendering_is_stable() {
        let check = success_receipt();
        assert_eq!(render(&check), render(&check));
    }
}
