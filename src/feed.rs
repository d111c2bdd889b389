//! Owner of the in-memory sales snapshot and of its refresh cycle.
//!
//! [`SalesFeed`] is the single writer of the record collection. Readers get
//! an [`Arc`] of a complete collection, which is swapped wholesale on every
//! successful fetch, so a reader never sees a half-applied refresh. A failed
//! fetch keeps the previous collection and only records the error.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::domain::sale::SalesRecord;
use crate::parser::parse_sales_csv;
use crate::source::{CsvSource, FetchResult};

/// Period between automatic refreshes.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

const MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// Point-in-time view of the feed.
#[derive(Clone, Debug)]
pub struct FeedSnapshot {
    pub records: Arc<[SalesRecord]>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Completion time of the last successful fetch.
    pub last_updated: Option<DateTime<Utc>>,
}

/// Sequence number of a refresh run. Higher tickets were started later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct RefreshTicket(u64);

#[derive(Debug)]
struct FeedState {
    records: Arc<[SalesRecord]>,
    error: Option<String>,
    last_updated: Option<DateTime<Utc>>,
    in_flight: usize,
    issued: u64,
    applied: u64,
}

pub struct SalesFeed {
    source: Arc<dyn CsvSource>,
    state: RwLock<FeedState>,
}

impl SalesFeed {
    pub fn new(source: Arc<dyn CsvSource>) -> Self {
        Self {
            source,
            state: RwLock::new(FeedState {
                records: Arc::from(Vec::new()),
                error: None,
                last_updated: None,
                in_flight: 0,
                issued: 0,
                applied: 0,
            }),
        }
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        let state = self.read_state();
        FeedSnapshot {
            records: Arc::clone(&state.records),
            is_loading: state.in_flight > 0,
            error: state.error.clone(),
            last_updated: state.last_updated,
        }
    }

    /// Current record collection.
    pub fn records(&self) -> Arc<[SalesRecord]> {
        Arc::clone(&self.read_state().records)
    }

    /// Fetches and parses the sheet, then publishes the result.
    ///
    /// Shared by the timer and manual callers. When runs overlap, the one
    /// started last decides the published state; results of older runs that
    /// complete afterwards are discarded. The returned value is the outcome
    /// of this particular run.
    pub async fn refresh(&self) -> FetchResult<usize> {
        let ticket = self.begin_refresh();
        let result = self
            .source
            .fetch_csv()
            .await
            .map(|csv| parse_sales_csv(&csv));
        self.finish_refresh(ticket, result)
    }

    pub(crate) fn begin_refresh(&self) -> RefreshTicket {
        let mut state = self.write_state();
        state.issued += 1;
        state.in_flight += 1;
        state.error = None;
        log::debug!("Starting sales refresh #{}", state.issued);
        RefreshTicket(state.issued)
    }

    pub(crate) fn finish_refresh(
        &self,
        ticket: RefreshTicket,
        result: FetchResult<Vec<SalesRecord>>,
    ) -> FetchResult<usize> {
        let mut state = self.write_state();
        state.in_flight = state.in_flight.saturating_sub(1);

        if ticket.0 < state.applied {
            log::info!(
                "Discarding sales refresh #{} superseded by #{}",
                ticket.0,
                state.applied
            );
            return result.map(|records| records.len());
        }
        state.applied = ticket.0;

        match result {
            Ok(records) => {
                let count = records.len();
                state.records = Arc::from(records);
                state.error = None;
                state.last_updated = Some(Utc::now());
                log::info!("Loaded {count} sales records");
                Ok(count)
            }
            Err(err) => {
                log::error!("Error refreshing sales data: {err}");
                state.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Starts the periodic refresh. The first run happens immediately.
    ///
    /// Must be called from within a Tokio runtime. The task lives until the
    /// returned handle is stopped or dropped.
    pub fn spawn_refresh(self: &Arc<Self>, period: Duration) -> RefreshHandle {
        let feed = Arc::clone(self);
        let period = period.max(MIN_REFRESH_INTERVAL);

        let task = tokio::spawn(async move {
            log::info!("Sales refresh scheduled every {} seconds", period.as_secs());
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                interval.tick().await;
                // The outcome is published through the feed state.
                let _ = feed.refresh().await;
            }
        });

        RefreshHandle { task }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, FeedState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, FeedState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Owned handle of the periodic refresh task. Dropping it cancels the timer.
#[derive(Debug)]
pub struct RefreshHandle {
    task: JoinHandle<()>,
}

impl RefreshHandle {
    pub fn stop(self) {
        self.task.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
