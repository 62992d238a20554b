use crate::models::feature::FeatureCollection;
use crate::reader::FeedError;
use async_trait::async_trait;

/// Source of GeoJSON documents. Each feed is fetched exactly once.
#[async_trait]
pub trait FeedReader: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FeatureCollection, FeedError>;
}
