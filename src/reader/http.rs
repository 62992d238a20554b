use super::FeedError;
use crate::models::feature::FeatureCollection;
use crate::traits::FeedReader;
use async_trait::async_trait;
use tracing::debug;

/// Fetches feeds over HTTP(S). No timeout and no retries: a failed request
/// is reported once and never repeated.
pub struct HttpFeedReader {
    client: reqwest::Client,
}

impl HttpFeedReader {
    pub fn new() -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("quakemap/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FeedReader for HttpFeedReader {
    async fn fetch(&self, url: &str) -> Result<FeatureCollection, FeedError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!(url, bytes = body.len(), "feed downloaded");
        Ok(serde_json::from_str(&body)?)
    }
}
