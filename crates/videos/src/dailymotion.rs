//! Dailymotion public video search client.
//!
//! https://developers.dailymotion.com/api/platform-api/reference/#video

use reelscout_core::types::{HostedVideoCandidate, VideoSource};
use serde::Deserialize;
use tracing::debug;

use crate::VideoError;
use crate::index::HostedVideoIndex;

pub const DEFAULT_BASE_URL: &str = "https://api.dailymotion.com";

pub struct DailymotionClient {
    base_url: String,
    client: reqwest::Client,
}

impl DailymotionClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_base_url(client, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }
}

#[derive(Debug, Deserialize)]
struct VideoList {
    #[serde(default)]
    list: Vec<VideoEntry>,
}

#[derive(Debug, Deserialize)]
struct VideoEntry {
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    duration: Option<u32>,
    #[serde(default)]
    description: Option<String>,
}

impl From<VideoEntry> for HostedVideoCandidate {
    fn from(entry: VideoEntry) -> Self {
        Self {
            id: entry.id,
            title: entry.title.unwrap_or_default(),
            duration_seconds: entry.duration.unwrap_or(0),
            description: entry.description.unwrap_or_default(),
        }
    }
}

#[async_trait::async_trait]
impl HostedVideoIndex for DailymotionClient {
    fn name(&self) -> &str {
        VideoSource::Dailymotion.as_str()
    }

    async fn search(
        &self,
        query: &str,
        limit: u32,
        fields: &[&str],
    ) -> Result<Vec<HostedVideoCandidate>, VideoError> {
        let url = format!("{}/videos", self.base_url);
        let limit = limit.to_string();
        let fields = fields.join(",");
        debug!(url = %url, query, "Dailymotion search");

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("search", query),
                ("sort", "relevance"),
                ("limit", limit.as_str()),
                ("fields", fields.as_str()),
            ])
            .send()
            .await
            .map_err(|e| VideoError::from_transport(VideoSource::Dailymotion, e))?;

        if !resp.status().is_success() {
            return Err(VideoError::upstream(
                VideoSource::Dailymotion,
                format!("Dailymotion returned {}", resp.status()),
            ));
        }

        let body: VideoList = resp.json().await.map_err(|e| {
            VideoError::upstream(VideoSource::Dailymotion, format!("parse JSON: {e}"))
        })?;

        Ok(body.list.into_iter().map(HostedVideoCandidate::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_video_list_with_missing_fields() {
        let json = serde_json::json!({
            "page": 1,
            "limit": 10,
            "explicit": false,
            "has_more": false,
            "list": [
                { "id": "x8abc12", "title": "Inception Full Movie HD", "duration": 8800, "description": "" },
                { "id": "x8def34", "title": null, "duration": null }
            ]
        });

        let parsed: VideoList = serde_json::from_value(json).unwrap();
        let candidates: Vec<HostedVideoCandidate> =
            parsed.list.into_iter().map(HostedVideoCandidate::from).collect();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].duration_seconds, 8800);
        assert_eq!(candidates[1].title, "");
        assert_eq!(candidates[1].duration_seconds, 0);
    }

    #[test]
    fn entry_without_id_is_rejected() {
        let json = serde_json::json!({ "list": [{ "title": "no id" }] });
        assert!(serde_json::from_value::<VideoList>(json).is_err());
    }
}
