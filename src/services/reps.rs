//! Rep leaderboard and per-rep detail.

use chrono::NaiveDateTime;

use crate::aggregation::{
    average_per_sale, base_plan_distribution, completion_rate, rank_reps, rep_names,
};
use crate::domain::rollup::RepRanking;
use crate::domain::sale::SalesRecord;
use crate::dto::reps::{RepDetailData, RepLeaderboardData, RepStanding, TOP_CHART_SIZE};
use crate::feed::SalesFeed;
use crate::forms::sales_query::SalesQueryForm;
use crate::services::sales::{daily_trend, feed_status, parse_query, select};
use crate::services::{ServiceError, ServiceResult};

fn standing(rank: usize, ranking: RepRanking) -> RepStanding {
    RepStanding {
        rank,
        average_sale: average_per_sale(ranking.total_revenue, ranking.total_sales),
        completion_rate: completion_rate(ranking.completed_sales, ranking.total_sales),
        ranking,
    }
}

/// Reps ordered by revenue inside the selected range.
pub fn load_leaderboard(
    feed: &SalesFeed,
    form: SalesQueryForm,
    now: NaiveDateTime,
) -> ServiceResult<RepLeaderboardData> {
    let query = parse_query(form)?;
    let snapshot = feed.snapshot();
    let records = select(&snapshot.records, &query, now);

    let standings: Vec<RepStanding> = rank_reps(&records)
        .into_iter()
        .enumerate()
        .map(|(index, ranking)| standing(index + 1, ranking))
        .collect();

    Ok(RepLeaderboardData {
        status: feed_status(&snapshot),
        range: query.range,
        top_performer: standings.first().cloned(),
        top_chart: standings.iter().take(TOP_CHART_SIZE).cloned().collect(),
        standings,
        rep_names: rep_names(&snapshot.records),
    })
}

/// Summary of one rep's sales inside the selected range.
///
/// A rep that never appears in the snapshot is [`ServiceError::NotFound`];
/// a known rep with no sales in the range yields zeros.
pub fn load_rep_detail(
    feed: &SalesFeed,
    name: &str,
    form: SalesQueryForm,
    now: NaiveDateTime,
) -> ServiceResult<RepDetailData> {
    let query = parse_query(form)?;
    let snapshot = feed.snapshot();

    let rep_records: Vec<SalesRecord> = snapshot
        .records
        .iter()
        .filter(|record| record.sales_rep_name == name)
        .cloned()
        .collect();
    if rep_records.is_empty() {
        log::info!("No sales found for rep {name}");
        return Err(ServiceError::NotFound);
    }

    let records = select(&rep_records, &query, now);
    let total_sales = records.len();
    let total_revenue: f64 = records.iter().map(|record| record.amount_paid).sum();
    let completed_sales = records.iter().filter(|record| record.is_paid()).count();

    Ok(RepDetailData {
        status: feed_status(&snapshot),
        name: name.to_string(),
        range: query.range,
        total_sales,
        total_revenue,
        completed_sales,
        pending_sales: total_sales - completed_sales,
        average_sale: average_per_sale(total_revenue, total_sales),
        completion_rate: completion_rate(completed_sales, total_sales),
        plan_distribution: base_plan_distribution(&records),
        trend: daily_trend(&records),
        records,
    })
}
