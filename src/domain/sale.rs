//! Sales transactions as captured in the shared sales sheet.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Timestamp layouts produced by the form-backed sheet and by manual edits.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d"];

/// Raised when a payment status filter value is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown payment status: {0}")]
pub struct UnknownPaymentStatus(pub String);

/// Settlement state of a sale.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PaymentStatus {
    Paid,
    #[default]
    Pending,
}

impl PaymentStatus {
    /// Derives the status from the free-form text typed into the sheet.
    ///
    /// Only `completed` and `paid` (any case) count as settled; everything
    /// else, including an empty cell, is treated as pending.
    pub fn from_sheet(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "completed" | "paid" => PaymentStatus::Paid,
            _ => PaymentStatus::Pending,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
        }
    }
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = UnknownPaymentStatus;

    /// Strict parser used for filter input, unlike [`PaymentStatus::from_sheet`].
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "paid" => Ok(PaymentStatus::Paid),
            "pending" => Ok(PaymentStatus::Pending),
            _ => Err(UnknownPaymentStatus(value.to_string())),
        }
    }
}

/// One transaction row of the sales sheet.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    pub timestamp: String,
    pub sales_rep_name: String,
    pub customer_name: String,
    pub date_of_sale: String,
    pub address: String,
    pub customer_phone: String,
    pub plan: String,
    /// Never negative; unreadable amounts are stored as zero.
    pub amount_paid: f64,
    pub payment_status: PaymentStatus,
    pub final_notes: String,
    pub customer_email: String,
    #[serde(rename = "customerNIN")]
    pub customer_nin: String,
}

impl SalesRecord {
    /// Plan name without its bracketed variant suffix.
    pub fn base_plan(&self) -> &str {
        base_plan(&self.plan)
    }

    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }

    /// Capture time parsed from [`SalesRecord::timestamp`], if readable.
    pub fn captured_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.timestamp)
    }
}

/// Truncates a plan name at the first `[`, e.g. `"Plan A [promo]"` -> `"Plan A"`.
pub fn base_plan(plan: &str) -> &str {
    plan.split_once('[').map_or(plan, |(head, _)| head).trim()
}

/// Parses a sheet timestamp in any of the layouts seen in practice.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_utc());
    }

    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_status_mapping_is_case_insensitive() {
        for raw in ["Completed", "paid", "PAID", " completed "] {
            assert_eq!(PaymentStatus::from_sheet(raw), PaymentStatus::Paid, "{raw}");
        }
        for raw in ["pending", "", "failed", "paid later"] {
            assert_eq!(PaymentStatus::from_sheet(raw), PaymentStatus::Pending, "{raw}");
        }
    }

    #[test]
    fn strict_status_parsing_rejects_unknown_values() {
        assert_eq!("paid".parse(), Ok(PaymentStatus::Paid));
        assert_eq!("Pending".parse(), Ok(PaymentStatus::Pending));
        assert_eq!(
            "completed".parse::<PaymentStatus>(),
            Err(UnknownPaymentStatus("completed".to_string()))
        );
    }

    #[test]
    fn base_plan_drops_variant_suffix() {
        assert_eq!(base_plan("Fiber10[promo]"), "Fiber10");
        assert_eq!(base_plan("Plan A [promo]"), "Plan A");
        assert_eq!(base_plan("Fiber20"), "Fiber20");
        assert_eq!(base_plan("[legacy]"), "");
    }

    #[test]
    fn parses_common_timestamp_layouts() {
        let expected = NaiveDate::from_ymd_opt(2025, 10, 19)
            .unwrap()
            .and_hms_opt(14, 32, 10)
            .unwrap();

        assert_eq!(parse_timestamp("10/19/2025 14:32:10"), Some(expected));
        assert_eq!(parse_timestamp("2025-10-19 14:32:10"), Some(expected));
        assert_eq!(parse_timestamp("2025-10-19T14:32:10Z"), Some(expected));
        assert_eq!(
            parse_timestamp("2025-10-19"),
            Some(expected.date().and_time(NaiveTime::MIN))
        );
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn serializes_with_sheet_field_names() {
        let record = SalesRecord {
            customer_nin: "123".to_string(),
            payment_status: PaymentStatus::Paid,
            ..SalesRecord::default()
        };

        let json = serde_json::to_value(&record).expect("serializable record");

        assert_eq!(json["customerNIN"], "123");
        assert_eq!(json["paymentStatus"], "Paid");
        assert!(json.get("salesRepName").is_some());
    }
}
