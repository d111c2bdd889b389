//! Payloads of the dataset-wide views.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::rollup::{
    AnalyticsSummary, DashboardMetrics, NamedCount, PlanRollup, RepRevenue, TrendPoint,
};
use crate::domain::sale::SalesRecord;
use crate::time_range::TimeRange;

/// Health of the feed, attached to every view so clients can show staleness.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedStatus {
    pub is_loading: bool,
    pub error: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
    pub record_count: usize,
}

/// Result of `GET /api/v1/sales`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesListData {
    pub status: FeedStatus,
    pub range: TimeRange,
    pub total: usize,
    pub records: Vec<SalesRecord>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsData {
    pub status: FeedStatus,
    pub range: TimeRange,
    pub metrics: DashboardMetrics,
}

/// Landing page: headline metrics and the three charts next to them.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub status: FeedStatus,
    pub range: TimeRange,
    pub metrics: DashboardMetrics,
    /// Sales count per raw plan name.
    pub plan_distribution: Vec<NamedCount>,
    pub status_breakdown: Vec<NamedCount>,
    /// Chronological daily revenue.
    pub trend: Vec<TrendPoint>,
    /// Filter choices, taken from the unfiltered snapshot.
    pub available_plans: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub status: FeedStatus,
    pub range: TimeRange,
    pub summary: AnalyticsSummary,
    pub plan_revenue: Vec<PlanRollup>,
    pub rep_revenue: Vec<RepRevenue>,
    pub trend: Vec<TrendPoint>,
}
