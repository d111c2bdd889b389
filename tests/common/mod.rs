#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;

use pushkind_sales::feed::SalesFeed;
use pushkind_sales::settings_client::{
    RemoteConfirmation, SettingsError, SettingsGateway, SettingsResult,
};
use pushkind_sales::source::{CsvSource, FetchError, FetchResult};

pub const SHEET: &str = "\
Timestamp,Sales Rep,Customer,Date of Sale,Address,Phone,Plan,Amount Paid,Payment Status,Notes,Email,NIN
10/20/2025 09:00:00,Ada,Acme,10/20/2025,1 Main St,555-0101,Fiber10,100,paid,,a@acme.io,N1
10/21/2025 10:00:00,Ben,Bolt,10/21/2025,2 Main St,555-0102,Fiber20 [promo],200,pending,,b@bolt.io,N2
10/22/2025 11:00:00,Ada,Core,10/22/2025,3 Main St,555-0103,Fiber20,300,Completed,,c@core.io,N3
09/15/2025 12:00:00,Cid,Dune,09/15/2025,4 Main St,555-0104,\"Fiber30, business\",50,paid,,d@dune.io,N4
";

/// Serves [`SHEET`] until told to fail.
#[derive(Default)]
pub struct SheetStub {
    pub failing: AtomicBool,
    pub calls: AtomicUsize,
}

#[async_trait]
impl CsvSource for SheetStub {
    async fn fetch_csv(&self) -> FetchResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(FetchError::Status(StatusCode::SERVICE_UNAVAILABLE));
        }
        Ok(SHEET.to_string())
    }
}

/// Accepts every action and remembers what was asked.
#[derive(Default)]
pub struct GatewayStub {
    pub calls: Mutex<Vec<String>>,
    pub reject_with: Option<String>,
}

impl GatewayStub {
    fn answer(&self, call: String) -> SettingsResult<RemoteConfirmation> {
        self.calls.lock().unwrap().push(call);
        match &self.reject_with {
            Some(message) => Err(SettingsError::Remote(message.clone())),
            None => Ok(RemoteConfirmation {
                success: true,
                message: Some("done".to_string()),
            }),
        }
    }
}

#[async_trait]
impl SettingsGateway for GatewayStub {
    async fn update_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> SettingsResult<RemoteConfirmation> {
        self.answer(format!("password:{current_password}->{new_password}"))
    }

    async fn merge_reps(&self, from_rep: &str, to_rep: &str) -> SettingsResult<RemoteConfirmation> {
        self.answer(format!("merge:{from_rep}->{to_rep}"))
    }
}

pub fn feed_with(source: Arc<SheetStub>) -> Arc<SalesFeed> {
    Arc::new(SalesFeed::new(source))
}
