//! Download of the sales sheet's CSV export.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to fetch sales data: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to fetch sales data: sheet export responded with {0}")]
    Status(StatusCode),
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Anything able to produce the raw CSV text of the sales sheet.
#[async_trait]
pub trait CsvSource: Send + Sync {
    async fn fetch_csv(&self) -> FetchResult<String>;
}

/// [`CsvSource`] backed by a plain HTTP GET against the export URL.
#[derive(Clone, Debug)]
pub struct HttpCsvSource {
    client: reqwest::Client,
    url: String,
}

impl HttpCsvSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> FetchResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CsvSource for HttpCsvSource {
    async fn fetch_csv(&self) -> FetchResult<String> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Sheet export {} responded with {status}", self.url);
            return Err(FetchError::Status(status));
        }

        Ok(response.text().await?)
    }
}
