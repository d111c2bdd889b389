//! Payloads of the rep leaderboard and rep detail views.

use serde::Serialize;

use crate::domain::rollup::{NamedCount, RepRanking, TrendPoint};
use crate::domain::sale::SalesRecord;
use crate::dto::sales::FeedStatus;
use crate::time_range::TimeRange;

/// Number of reps shown on the leaderboard chart.
pub const TOP_CHART_SIZE: usize = 10;

/// Leaderboard line with the derived percentages.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RepStanding {
    pub rank: usize,
    #[serde(flatten)]
    pub ranking: RepRanking,
    pub average_sale: f64,
    pub completion_rate: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepLeaderboardData {
    pub status: FeedStatus,
    pub range: TimeRange,
    pub top_performer: Option<RepStanding>,
    /// First [`TOP_CHART_SIZE`] standings.
    pub top_chart: Vec<RepStanding>,
    pub standings: Vec<RepStanding>,
    /// Every rep in the snapshot, sorted, for the merge picker.
    pub rep_names: Vec<String>,
}

/// Everything shown on one rep's page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepDetailData {
    pub status: FeedStatus,
    pub name: String,
    pub range: TimeRange,
    pub total_sales: usize,
    pub total_revenue: f64,
    pub completed_sales: usize,
    pub pending_sales: usize,
    pub average_sale: f64,
    pub completion_rate: u32,
    /// Sales count per base plan.
    pub plan_distribution: Vec<NamedCount>,
    pub trend: Vec<TrendPoint>,
    pub records: Vec<SalesRecord>,
}
