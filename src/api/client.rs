use reqwest::{header, Client};
use thiserror::Error;

use super::types::WeekInfo;

/// Feed failures the UI treats differently: connectivity problems get the
/// offline screen, everything else a plain error message.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("station feed unreachable: {0}")]
    Offline(String),
    #[error("station feed request failed: {0}")]
    Feed(String),
}

pub struct FeedClient {
    client: Client,
    url: String,
}

impl FeedClient {
    pub fn new(feed_url: &str) -> Result<Self, FeedError> {
        let client = Client::builder()
            .build()
            .map_err(|e| FeedError::Feed(e.to_string()))?;

        Ok(Self {
            client,
            url: feed_url.to_string(),
        })
    }

    /// One best-effort GET against the configured week-info endpoint.
    pub async fn fetch_week_info(&self) -> Result<WeekInfo, FeedError> {
        let response = self
            .client
            .get(&self.url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(classify_transport_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Feed(format!("{} - {}", status, body)));
        }

        response
            .json::<WeekInfo>()
            .await
            .map_err(|e| FeedError::Feed(e.to_string()))
    }
}

fn classify_transport_error(error: reqwest::Error) -> FeedError {
    if error.is_connect() || error.is_timeout() {
        FeedError::Offline(error.to_string())
    } else {
        FeedError::Feed(error.to_string())
    }
}
