//! Services turning feed snapshots and forms into view payloads.

use thiserror::Error;

pub mod reps;
pub mod sales;
pub mod settings;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input rejected before anything was computed or sent.
    #[error("{0}")]
    Form(String),

    /// The sheet export or the settings function failed.
    #[error("{0}")]
    Remote(String),

    #[error("not found")]
    NotFound,

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(all(test, feature = "test-mocks"))]
pub(crate) mod fixtures {
    use std::sync::Arc;

    use chrono::{NaiveDate, NaiveDateTime};

    use crate::feed::SalesFeed;
    use crate::mock::MockCsvEndpoint;

    pub const SHEET: &str = "\
Timestamp,Sales Rep,Customer,Date of Sale,Address,Phone,Plan,Amount Paid,Payment Status,Notes,Email,NIN
10/20/2025 09:00:00,Ada,Acme,10/20/2025,1 Main St,555-0101,Fiber10,100,paid,,a@acme.io,N1
10/21/2025 10:00:00,Ben,Bolt,10/21/2025,2 Main St,555-0102,Fiber20 [promo],200,pending,,b@bolt.io,N2
10/22/2025 11:00:00,Ada,Core,10/22/2025,3 Main St,555-0103,Fiber20,300,Completed,,c@core.io,N3
09/15/2025 12:00:00,Cid,Dune,09/15/2025,4 Main St,555-0104,Fiber10,50,paid,,d@dune.io,N4
";

    /// Wednesday afternoon, the week starts on Sunday 2025-10-19.
    pub fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 22)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap()
    }

    /// Feed already loaded with [`SHEET`].
    pub async fn loaded_feed() -> SalesFeed {
        let mut source = MockCsvEndpoint::new();
        source
            .expect_fetch_csv()
            .times(1)
            .returning(|| Ok(SHEET.to_string()));
        let feed = SalesFeed::new(Arc::new(source));
        feed.refresh().await.expect("fixture sheet loads");
        feed
    }
}
