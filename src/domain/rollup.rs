//! Typed accumulators produced by the aggregation engine.

use serde::Serialize;

/// Headline figures for a set of sales.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_sales: usize,
    pub total_revenue: f64,
    /// Number of settled sales.
    pub completed_payments: usize,
    /// Amount still outstanding, not a count.
    pub pending_payments: f64,
    pub average_payment_per_sale: f64,
}

/// Revenue and volume of one base plan.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanRollup {
    pub name: String,
    pub revenue: f64,
    pub count: usize,
}

/// Total revenue booked by one sales rep.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RepRevenue {
    pub name: String,
    pub total_revenue: f64,
}

/// Per-rep performance line used by the leaderboard.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RepRanking {
    pub name: String,
    pub total_sales: usize,
    pub total_revenue: f64,
    pub completed_sales: usize,
    pub pending_sales: usize,
}

impl RepRanking {
    pub(crate) fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            total_sales: 0,
            total_revenue: 0.0,
            completed_sales: 0,
            pending_sales: 0,
        }
    }
}

/// One bucket of a time series.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub bucket: String,
    pub revenue: f64,
    pub sales: usize,
}

/// Label/count pair used for distributions.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NamedCount {
    pub name: String,
    pub value: usize,
}

/// Dataset-wide figures shown on the analytics view.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_revenue: f64,
    pub unique_reps: usize,
    pub unique_plans: usize,
    pub average_sale_value: f64,
}
