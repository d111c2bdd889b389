//! Conversion of the sheet's CSV export into [`SalesRecord`] values.
//!
//! The sheet is edited by hand, so parsing never fails: rows that carry fewer than [`MIN_FIELDS`] columns are skipped, and
//! amounts that are not numbers become zero.

use crate::domain::sale::{PaymentStatus, SalesRecord};

/// Minimum number of columns a data row must have to be accepted.
pub const MIN_FIELDS: usize = 12;

/// Parses the CSV export, skipping the header row.
pub fn parse_sales_csv(text: &str) -> Vec<SalesRecord> {
    let text = text.trim_start_matches('\u{FEFF}');

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for line in text.split('\n').skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match record_from_fields(&split_fields(line)) {
            Some(record) => records.push(record),
            None => {
                log::debug!("Skipping short CSV row: {line:?}");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        log::debug!("Parsed {} sales rows, skipped {skipped}", records.len());
    }

    records
}

/// Splits one line on commas outside quotes.
///
/// Every `"` flips the quoted state and is dropped; fields are trimmed.
/// An unterminated quote swallows the rest of the line into one field.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

/// Maps fields positionally onto a record; `None` for short rows.
fn record_from_fields(fields: &[String]) -> Option<SalesRecord> {
    if fields.len() < MIN_FIELDS {
        return None;
    }

    let field = |index: usize| fields[index].clone();

    Some(SalesRecord {
        timestamp: field(0),
        sales_rep_name: field(1),
        customer_name: field(2),
        date_of_sale: field(3),
        address: field(4),
        customer_phone: field(5),
        plan: field(6),
        amount_paid: parse_amount(&fields[7]),
        payment_status: PaymentStatus::from_sheet(&fields[8]),
        final_notes: field(9),
        customer_email: field(10),
        customer_nin: field(11),
    })
}

/// Reads a paid amount; anything that is not a finite non-negative number is zero.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount >= 0.0)
        .unwrap_or(0.0)
}
