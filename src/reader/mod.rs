use thiserror::Error;

pub mod http;

#[derive(Error, Debug)]
pub enum FeedError {
    /// Transport failure or an unreadable body
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to decode GeoJSON: {0}")]
    Decode(#[from] serde_json::Error),
}
