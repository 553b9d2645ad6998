use std::sync::Arc;

use reelscout_core::types::{HostedVideoCandidate, TrailerCandidate};
use tracing::info;

use crate::VideoError;
use crate::index::{HostedVideoIndex, TrailerIndex};

/// Upper bound on hosted-video results requested per movie.
pub const HOSTED_RESULT_LIMIT: u32 = 10;

/// Fields requested from the hosting index.
pub const HOSTED_FIELDS: [&str; 4] = ["id", "title", "duration", "description"];

/// Raw, relevance-ordered candidates for one movie.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Candidates {
    pub trailers: Vec<TrailerCandidate>,
    pub hosted: Vec<HostedVideoCandidate>,
}

/// Queries both video indexes for a movie title.
#[derive(Clone)]
pub struct CandidateFetcher {
    trailers: Arc<dyn TrailerIndex>,
    hosted: Arc<dyn HostedVideoIndex>,
}

impl CandidateFetcher {
    pub fn new(trailers: Arc<dyn TrailerIndex>, hosted: Arc<dyn HostedVideoIndex>) -> Self {
        Self { trailers, hosted }
    }

    /// Run both searches concurrently. Either one failing fails the fetch.
    pub async fn fetch(&self, title: &str) -> Result<Candidates, VideoError> {
        let trailer_query = trailer_query(title);
        let hosted_query = exact_phrase(title);

        let (trailers, hosted) = tokio::try_join!(
            self.trailers.search(&trailer_query),
            self.hosted
                .search(&hosted_query, HOSTED_RESULT_LIMIT, &HOSTED_FIELDS),
        )?;

        info!(
            title,
            trailer_index = self.trailers.name(),
            hosted_index = self.hosted.name(),
            trailer_candidates = trailers.len(),
            hosted_candidates = hosted.len(),
            "fetched video candidates"
        );

        Ok(Candidates { trailers, hosted })
    }
}

pub fn trailer_query(title: &str) -> String {
    format!("{title} trailer")
}

/// Quote the title so the index prefers exact-substring matches.
pub fn exact_phrase(title: &str) -> String {
    format!("\"{title}\"")
}
