//! Pure folds over a record snapshot.
//!
//! Every function here takes the records by shared reference and returns a
//! fresh view model. Empty input and zero denominators always resolve to
//! zero, never to `NaN`.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::domain::rollup::{
    AnalyticsSummary, DashboardMetrics, NamedCount, PlanRollup, RepRanking, RepRevenue,
    TrendPoint,
};
use crate::domain::sale::{PaymentStatus, SalesRecord, parse_timestamp};

/// Bucket assigned to records whose timestamp cannot be read.
pub const INVALID_BUCKET: &str = "Invalid Date";

/// Groups records by a key, keeping groups in order of first appearance.
fn rollup<'a, A>(
    records: &'a [SalesRecord],
    key: impl Fn(&'a SalesRecord) -> String,
    seed: impl Fn(&str) -> A,
    mut fold: impl FnMut(&mut A, &'a SalesRecord),
) -> Vec<A> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<A> = Vec::new();

    for record in records {
        let group_key = key(record);
        let index = match positions.get(&group_key) {
            Some(index) => *index,
            None => {
                groups.push(seed(&group_key));
                positions.insert(group_key, groups.len() - 1);
                groups.len() - 1
            }
        };
        fold(&mut groups[index], record);
    }

    groups
}

/// Headline metrics; all zero for an empty slice.
pub fn compute_metrics(records: &[SalesRecord]) -> DashboardMetrics {
    let total_sales = records.len();
    let total_revenue = total_amount(records);
    let completed_payments = records.iter().filter(|record| record.is_paid()).count();
    let pending_payments = records
        .iter()
        .filter(|record| !record.is_paid())
        .map(|record| record.amount_paid)
        .sum();

    DashboardMetrics {
        total_sales,
        total_revenue,
        completed_payments,
        pending_payments,
        average_payment_per_sale: average_per_sale(total_revenue, total_sales),
    }
}

/// Revenue and count per base plan (text before the first `[`).
pub fn group_by_plan(records: &[SalesRecord]) -> Vec<PlanRollup> {
    rollup(
        records,
        |record| record.base_plan().to_string(),
        |name| PlanRollup {
            name: name.to_string(),
            revenue: 0.0,
            count: 0,
        },
        |group, record| {
            group.revenue += record.amount_paid;
            group.count += 1;
        },
    )
}

/// Total revenue per distinct rep name, in order of first appearance.
pub fn group_by_rep(records: &[SalesRecord]) -> Vec<RepRevenue> {
    rollup(
        records,
        |record| record.sales_rep_name.clone(),
        |name| RepRevenue {
            name: name.to_string(),
            total_revenue: 0.0,
        },
        |group, record| group.total_revenue += record.amount_paid,
    )
}

/// Rep leaderboard sorted by revenue, highest first.
///
/// The sort is stable, so reps with equal revenue keep the order in which
/// they first appear in `records`.
pub fn rank_reps(records: &[SalesRecord]) -> Vec<RepRanking> {
    let mut ranking = rollup(
        records,
        |record| record.sales_rep_name.clone(),
        RepRanking::empty,
        |rep, record| {
            rep.total_sales += 1;
            rep.total_revenue += record.amount_paid;
            match record.payment_status {
                PaymentStatus::Paid => rep.completed_sales += 1,
                PaymentStatus::Pending => rep.pending_sales += 1,
            }
        },
    );

    ranking.sort_by(|a, b| b.total_revenue.total_cmp(&a.total_revenue));
    ranking
}

/// Revenue and sale count per bucket, in order of first appearance.
///
/// Buckets are not sorted; callers that need chronological order should use
/// a sortable bucket such as [`iso_day`] and sort the result.
pub fn trend_by_date<F>(records: &[SalesRecord], bucket: F) -> Vec<TrendPoint>
where
    F: Fn(&SalesRecord) -> String,
{
    rollup(
        records,
        bucket,
        |key| TrendPoint {
            bucket: key.to_string(),
            revenue: 0.0,
            sales: 0,
        },
        |point, record| {
            point.revenue += record.amount_paid;
            point.sales += 1;
        },
    )
}

/// `"Oct 19"`-style label of the capture day.
///
/// Labels carry no year, so they collide and mis-sort across year
/// boundaries.
pub fn short_day_label(record: &SalesRecord) -> String {
    parse_timestamp(&record.timestamp)
        .map(|ts| ts.format("%b %-d").to_string())
        .unwrap_or_else(|| INVALID_BUCKET.to_string())
}

/// `"2025-10-19"`-style capture day; sorts chronologically as text.
pub fn iso_day(record: &SalesRecord) -> String {
    parse_timestamp(&record.timestamp)
        .map(|ts| ts.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| INVALID_BUCKET.to_string())
}

/// Number of sales per raw plan name.
pub fn plan_distribution(records: &[SalesRecord]) -> Vec<NamedCount> {
    count_by(records, |record| record.plan.clone())
}

/// Number of sales per base plan.
pub fn base_plan_distribution(records: &[SalesRecord]) -> Vec<NamedCount> {
    count_by(records, |record| record.base_plan().to_string())
}

fn count_by(records: &[SalesRecord], key: impl Fn(&SalesRecord) -> String) -> Vec<NamedCount> {
    rollup(
        records,
        key,
        |name| NamedCount {
            name: name.to_string(),
            value: 0,
        },
        |entry, _| entry.value += 1,
    )
}

/// Paid and pending counts, always in that order.
pub fn payment_status_breakdown(records: &[SalesRecord]) -> Vec<NamedCount> {
    let paid = records.iter().filter(|record| record.is_paid()).count();

    vec![
        NamedCount {
            name: PaymentStatus::Paid.to_string(),
            value: paid,
        },
        NamedCount {
            name: PaymentStatus::Pending.to_string(),
            value: records.len() - paid,
        },
    ]
}

/// Distinct raw plan names in order of first appearance.
pub fn available_plans(records: &[SalesRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|record| seen.insert(record.plan.as_str()))
        .map(|record| record.plan.clone())
        .collect()
}

/// Distinct rep names, sorted alphabetically.
pub fn rep_names(records: &[SalesRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.sales_rep_name.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub fn analytics_summary(records: &[SalesRecord]) -> AnalyticsSummary {
    let total_revenue = total_amount(records);
    let unique_reps = records
        .iter()
        .map(|record| record.sales_rep_name.as_str())
        .collect::<HashSet<_>>()
        .len();
    let unique_plans = records
        .iter()
        .map(|record| record.plan.as_str())
        .collect::<HashSet<_>>()
        .len();

    AnalyticsSummary {
        total_revenue,
        unique_reps,
        unique_plans,
        average_sale_value: average_per_sale(total_revenue, records.len()),
    }
}

/// `round(completed / total * 100)`, or 0 when `total` is 0.
pub fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (completed as f64 / total as f64 * 100.0).round() as u32
}

/// `revenue / count`, or 0 when `count` is 0.
pub fn average_per_sale(revenue: f64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    revenue / count as f64
}

fn total_amount(records: &[SalesRecord]) -> f64 {
    records.iter().map(|record| record.amount_paid).sum()
}
