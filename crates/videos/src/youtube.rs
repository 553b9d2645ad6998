//! YouTube Data API v3 search client.
//!
//! https://developers.google.com/youtube/v3/docs/search/list

use reelscout_core::types::{TrailerCandidate, VideoSource};
use serde::Deserialize;
use tracing::debug;

use crate::VideoError;
use crate::index::TrailerIndex;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

pub struct YouTubeClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl YouTubeClient {
    pub fn new(api_key: String, client: reqwest::Client) -> Self {
        Self::with_base_url(api_key, client, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, client: reqwest::Client, base_url: &str) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: ItemId,
    #[serde(default)]
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemId {
    video_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    channel_title: String,
}

impl SearchResponse {
    /// Results that are not videos (channels, playlists) carry no video id
    /// and are dropped, keeping relevance order.
    fn into_candidates(self) -> Vec<TrailerCandidate> {
        self.items
            .into_iter()
            .filter_map(|item| {
                Some(TrailerCandidate {
                    id: item.id.video_id?,
                    title_snippet: item.snippet.title,
                    channel_or_source: item.snippet.channel_title,
                })
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl TrailerIndex for YouTubeClient {
    fn name(&self) -> &str {
        VideoSource::YouTube.as_str()
    }

    async fn search(&self, query: &str) -> Result<Vec<TrailerCandidate>, VideoError> {
        let url = format!("{}/search", self.base_url);
        debug!(url = %url, query, "YouTube search");

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("q", query),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| VideoError::from_transport(VideoSource::YouTube, e))?;

        if !resp.status().is_success() {
            return Err(VideoError::upstream(
                VideoSource::YouTube,
                format!("YouTube returned {}", resp.status()),
            ));
        }

        let body: SearchResponse = resp.json().await.map_err(|e| {
            VideoError::upstream(VideoSource::YouTube, format!("parse JSON: {e}"))
        })?;

        Ok(body.into_candidates())
    }
}
