use std::sync::Arc;

use reelscout_metadata::provider::MetadataProvider;
use reelscout_videos::fetcher::CandidateFetcher;
use reelscout_videos::resolver::Resolver;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn MetadataProvider>,
    pub videos: CandidateFetcher,
    pub resolver: Resolver,
    pub cors_origins: Vec<String>,
}
