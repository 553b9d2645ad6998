pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use reelscout_metadata::tmdb::TmdbClient;
use reelscout_videos::dailymotion::DailymotionClient;
use reelscout_videos::fetcher::CandidateFetcher;
use reelscout_videos::resolver::Resolver;
use reelscout_videos::youtube::YouTubeClient;

use crate::config::Config;
use crate::state::AppState;

/// Wire the real provider clients from configuration.
pub fn build_state(config: &Config) -> Result<AppState, reqwest::Error> {
    let client = reqwest::Client::builder()
        .timeout(config.upstream_timeout)
        .build()?;

    let catalog = TmdbClient::with_base_url(
        config.tmdb_api_key.clone(),
        client.clone(),
        &config.tmdb_base_url,
    );
    let trailers = YouTubeClient::with_base_url(
        config.youtube_api_key.clone(),
        client.clone(),
        &config.youtube_base_url,
    );
    let hosted = DailymotionClient::with_base_url(client, &config.dailymotion_base_url);

    Ok(AppState {
        catalog: Arc::new(catalog),
        videos: CandidateFetcher::new(Arc::new(trailers), Arc::new(hosted)),
        resolver: Resolver::new(config.duration_floor),
        cors_origins: config.cors_origins.clone(),
    })
}
