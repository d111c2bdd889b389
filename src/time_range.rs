//! Calendar windows used to narrow a snapshot before aggregation.

use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::Serialize;

use crate::domain::sale::SalesRecord;

/// Window of capture times relative to "now".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum TimeRange {
    Today,
    /// Current week, starting on Sunday.
    Week,
    Month,
    Year,
    #[default]
    Lifetime,
    /// Inclusive range of whole days.
    Custom { from: NaiveDate, to: NaiveDate },
}

impl TimeRange {
    /// Parses a named range; `custom` needs explicit bounds and is rejected here.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "today" => Some(TimeRange::Today),
            "week" => Some(TimeRange::Week),
            "month" => Some(TimeRange::Month),
            "year" => Some(TimeRange::Year),
            "lifetime" => Some(TimeRange::Lifetime),
            _ => None,
        }
    }

    /// Earliest capture time included by an open-ended range.
    fn start(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        let today = now.date();
        let start = match self {
            TimeRange::Today => today,
            TimeRange::Week => today.week(Weekday::Sun).first_day(),
            TimeRange::Month => today.with_day(1)?,
            TimeRange::Year => today.with_ordinal(1)?,
            TimeRange::Lifetime | TimeRange::Custom { .. } => return None,
        };
        Some(start.and_time(NaiveTime::MIN))
    }

    /// Whether a capture time falls inside the range.
    ///
    /// Unknown capture times only match [`TimeRange::Lifetime`].
    pub fn contains(&self, captured_at: Option<NaiveDateTime>, now: NaiveDateTime) -> bool {
        if *self == TimeRange::Lifetime {
            return true;
        }
        let Some(captured_at) = captured_at else {
            return false;
        };

        match self {
            TimeRange::Custom { from, to } => {
                let day = captured_at.date();
                *from <= day && day <= *to
            }
            _ => self.start(now).is_some_and(|start| captured_at >= start),
        }
    }
}

impl Display for TimeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeRange::Today => f.write_str("today"),
            TimeRange::Week => f.write_str("week"),
            TimeRange::Month => f.write_str("month"),
            TimeRange::Year => f.write_str("year"),
            TimeRange::Lifetime => f.write_str("lifetime"),
            TimeRange::Custom { from, to } => write!(f, "{from}..{to}"),
        }
    }
}

/// Records captured inside `range`, in input order.
pub fn select_range(
    records: &[SalesRecord],
    range: &TimeRange,
    now: NaiveDateTime,
) -> Vec<SalesRecord> {
    records
        .iter()
        .filter(|record| range.contains(record.captured_at(), now))
        .cloned()
        .collect()
}
