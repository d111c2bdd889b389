//! Query string accepted by the read-only sales views.
//!
//! `plan` and `status` may repeat (`?plan=Fiber10&plan=Fiber20`), which is why
//! the query is decoded with `serde_html_form` rather than `web::Query`.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::sale::PaymentStatus;
use crate::filter::SalesFilter;
use crate::forms::FormError;
use crate::time_range::TimeRange;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Default, Deserialize)]
pub struct SalesQueryForm {
    #[serde(default)]
    pub plan: Vec<String>,
    #[serde(default)]
    pub status: Vec<String>,
    pub range: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Decoded selection: what to keep and over which period.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SalesQuery {
    pub filter: SalesFilter,
    pub range: TimeRange,
}

impl SalesQueryForm {
    /// Decodes a raw query string.
    pub fn from_query(query: &str) -> Result<Self, FormError> {
        serde_html_form::from_str(query).map_err(|err| FormError::Query(err.to_string()))
    }
}

impl TryFrom<SalesQueryForm> for SalesQuery {
    type Error = FormError;

    fn try_from(form: SalesQueryForm) -> Result<Self, Self::Error> {
        let mut filter = SalesFilter::new();
        for plan in form.plan.iter().map(|plan| plan.trim()) {
            if !plan.is_empty() {
                filter = filter.plan(plan);
            }
        }
        for status in form.status.iter().filter(|status| !status.trim().is_empty()) {
            let status = status
                .parse::<PaymentStatus>()
                .map_err(|err| FormError::InvalidStatus(err.0))?;
            filter = filter.status(status);
        }

        let range = parse_range(
            non_empty(form.range.as_deref()),
            non_empty(form.from.as_deref()),
            non_empty(form.to.as_deref()),
        )?;

        Ok(Self { filter, range })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// Bounds without a range name imply a custom range.
fn parse_range(
    name: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<TimeRange, FormError> {
    let is_custom = match name {
        Some(name) if name.eq_ignore_ascii_case("custom") => true,
        Some(name) => {
            return TimeRange::from_name(name)
                .ok_or_else(|| FormError::InvalidRange(name.to_string()));
        }
        None => from.is_some() || to.is_some(),
    };

    if !is_custom {
        return Ok(TimeRange::Lifetime);
    }

    let (Some(from), Some(to)) = (from, to) else {
        return Err(FormError::IncompleteRange);
    };
    let from_date = parse_date(from)?;
    let to_date = parse_date(to)?;
    if from_date > to_date {
        return Err(FormError::InvertedRange {
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    Ok(TimeRange::Custom {
        from: from_date,
        to: to_date,
    })
}

fn parse_date(raw: &str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| FormError::InvalidDate(raw.to_string()))
}
