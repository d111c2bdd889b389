//! Dataset-wide views computed on demand from the current snapshot.

use chrono::NaiveDateTime;

use crate::aggregation::{
    analytics_summary, available_plans, compute_metrics, group_by_plan, group_by_rep, iso_day,
    payment_status_breakdown, plan_distribution, trend_by_date,
};
use crate::domain::rollup::TrendPoint;
use crate::domain::sale::SalesRecord;
use crate::dto::sales::{AnalyticsData, DashboardData, FeedStatus, MetricsData, SalesListData};
use crate::dto::settings::RefreshData;
use crate::feed::{FeedSnapshot, SalesFeed};
use crate::filter::filter_records;
use crate::forms::sales_query::{SalesQuery, SalesQueryForm};
use crate::services::ServiceResult;
use crate::time_range::select_range;

pub fn feed_status(snapshot: &FeedSnapshot) -> FeedStatus {
    FeedStatus {
        is_loading: snapshot.is_loading,
        error: snapshot.error.clone(),
        last_updated: snapshot.last_updated,
        record_count: snapshot.records.len(),
    }
}

pub fn load_status(feed: &SalesFeed) -> FeedStatus {
    feed_status(&feed.snapshot())
}

/// Applies the plan/status filter, then the time range.
pub(crate) fn select(
    records: &[SalesRecord],
    query: &SalesQuery,
    now: NaiveDateTime,
) -> Vec<SalesRecord> {
    let filtered = filter_records(records, &query.filter);
    select_range(&filtered, &query.range, now)
}

/// Daily buckets in calendar order; unreadable timestamps come last.
pub(crate) fn daily_trend(records: &[SalesRecord]) -> Vec<TrendPoint> {
    let mut trend = trend_by_date(records, iso_day);
    trend.sort_by(|a, b| a.bucket.cmp(&b.bucket));
    trend
}

pub(crate) fn parse_query(form: SalesQueryForm) -> ServiceResult<SalesQuery> {
    SalesQuery::try_from(form).map_err(|err| {
        log::warn!("Rejected sales query: {err}");
        err.into()
    })
}

pub fn list_sales(
    feed: &SalesFeed,
    form: SalesQueryForm,
    now: NaiveDateTime,
) -> ServiceResult<SalesListData> {
    let query = parse_query(form)?;
    let snapshot = feed.snapshot();
    let records = select(&snapshot.records, &query, now);

    Ok(SalesListData {
        status: feed_status(&snapshot),
        range: query.range,
        total: records.len(),
        records,
    })
}

pub fn load_metrics(
    feed: &SalesFeed,
    form: SalesQueryForm,
    now: NaiveDateTime,
) -> ServiceResult<MetricsData> {
    let query = parse_query(form)?;
    let snapshot = feed.snapshot();
    let records = select(&snapshot.records, &query, now);

    Ok(MetricsData {
        status: feed_status(&snapshot),
        range: query.range,
        metrics: compute_metrics(&records),
    })
}

pub fn load_dashboard(
    feed: &SalesFeed,
    form: SalesQueryForm,
    now: NaiveDateTime,
) -> ServiceResult<DashboardData> {
    let query = parse_query(form)?;
    let snapshot = feed.snapshot();
    let records = select(&snapshot.records, &query, now);

    Ok(DashboardData {
        status: feed_status(&snapshot),
        range: query.range,
        metrics: compute_metrics(&records),
        plan_distribution: plan_distribution(&records),
        status_breakdown: payment_status_breakdown(&records),
        trend: daily_trend(&records),
        available_plans: available_plans(&snapshot.records),
    })
}

pub fn load_analytics(
    feed: &SalesFeed,
    form: SalesQueryForm,
    now: NaiveDateTime,
) -> ServiceResult<AnalyticsData> {
    let query = parse_query(form)?;
    let snapshot = feed.snapshot();
    let records = select(&snapshot.records, &query, now);

    Ok(AnalyticsData {
        status: feed_status(&snapshot),
        range: query.range,
        summary: analytics_summary(&records),
        plan_revenue: group_by_plan(&records),
        rep_revenue: group_by_rep(&records),
        trend: daily_trend(&records),
    })
}

/// Runs the same refresh as the timer and reports the loaded record count.
pub async fn refresh_feed(feed: &SalesFeed) -> ServiceResult<RefreshData> {
    let record_count = feed.refresh().await.map_err(|err| {
        log::error!("Manual refresh failed: {err}");
        err
    })?;

    Ok(RefreshData { record_count })
}
