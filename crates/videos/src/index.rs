use reelscout_core::types::{HostedVideoCandidate, TrailerCandidate};

use crate::VideoError;

/// A video-search index queried for trailers.
#[async_trait::async_trait]
pub trait TrailerIndex: Send + Sync {
    fn name(&self) -> &str;

    /// Relevance-ordered results for a free-text query.
    async fn search(&self, query: &str) -> Result<Vec<TrailerCandidate>, VideoError>;
}

/// A video-hosting index queried for full-length uploads.
#[async_trait::async_trait]
pub trait HostedVideoIndex: Send + Sync {
    fn name(&self) -> &str;

    /// Relevance-ordered results, at most `limit`, with only `fields` requested.
    async fn search(
        &self,
        query: &str,
        limit: u32,
        fields: &[&str],
    ) -> Result<Vec<HostedVideoCandidate>, VideoError>;
}
