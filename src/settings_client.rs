//! Client for the remote settings function that owns password and rep data.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const FUNCTION_PATH: &str = "functions/v1/google-sheets-update";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings service unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Remote(String),

    #[error("unexpected settings reply: {0}")]
    MalformedReply(#[from] serde_json::Error),

    #[error("invalid settings api key")]
    InvalidApiKey,
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Acknowledgement returned by the settings function.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct RemoteConfirmation {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Remote operations that modify the sheet or its access credentials.
#[async_trait]
pub trait SettingsGateway: Send + Sync {
    async fn update_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> SettingsResult<RemoteConfirmation>;

    /// Renames every sale of `from_rep` to `to_rep` in the sheet.
    async fn merge_reps(&self, from_rep: &str, to_rep: &str) -> SettingsResult<RemoteConfirmation>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdatePasswordBody<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MergeRepsBody<'a> {
    from_rep_name: &'a str,
    to_rep_name: &'a str,
}

#[derive(Deserialize)]
struct RemoteFailure {
    error: Option<String>,
}

/// HTTP implementation of [`SettingsGateway`].
#[derive(Clone, Debug)]
pub struct SettingsClient {
    client: reqwest::Client,
    endpoint: String,
}

impl SettingsClient {
    /// `base_url` is the project root, the function path is appended here.
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> SettingsResult<Self> {
        let bearer = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|_| SettingsError::InvalidApiKey)?;
        let apikey = HeaderValue::from_str(api_key).map_err(|_| SettingsError::InvalidApiKey)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, bearer);
        headers.insert("apikey", apikey);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/{FUNCTION_PATH}", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn call<B: Serialize + Sync>(
        &self,
        action: &str,
        body: &B,
        fallback: &str,
    ) -> SettingsResult<RemoteConfirmation> {
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("action", action)])
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<RemoteFailure>()
                .await
                .ok()
                .and_then(|failure| failure.error)
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string());
            log::warn!("Settings action {action} rejected with {status}: {message}");
            return Err(SettingsError::Remote(message));
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(RemoteConfirmation {
                success: true,
                message: None,
            });
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl SettingsGateway for SettingsClient {
    async fn update_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> SettingsResult<RemoteConfirmation> {
        let body = UpdatePasswordBody {
            current_password,
            new_password,
        };
        self.call("update-password", &body, "Failed to update password")
            .await
    }

    async fn merge_reps(&self, from_rep: &str, to_rep: &str) -> SettingsResult<RemoteConfirmation> {
        let body = MergeRepsBody {
            from_rep_name: from_rep,
            to_rep_name: to_rep,
        };
        self.call("merge-reps", &body, "Failed to merge reps").await
    }
}
