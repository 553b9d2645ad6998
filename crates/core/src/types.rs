use serde::{Deserialize, Serialize};

const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed";
const DAILYMOTION_EMBED_BASE: &str = "https://www.dailymotion.com/embed/video";

/// External video index a candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoSource {
    /// Video-search index used for trailers.
    YouTube,
    /// Video-hosting index used for full-length uploads.
    Dailymotion,
}

impl VideoSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::YouTube => "youtube",
            Self::Dailymotion => "dailymotion",
        }
    }
}

impl std::fmt::Display for VideoSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input to video resolution for one movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieQuery {
    pub title: String,
    /// Runtime reported by the metadata catalog, 0 when unknown.
    pub canonical_runtime_seconds: u32,
}

impl MovieQuery {
    pub fn new(title: impl Into<String>, runtime_minutes: Option<u32>) -> Self {
        Self {
            title: title.into(),
            canonical_runtime_seconds: runtime_minutes.unwrap_or(0).saturating_mul(60),
        }
    }
}

/// One result from the video-search index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailerCandidate {
    pub id: String,
    pub title_snippet: String,
    pub channel_or_source: String,
}

impl TrailerCandidate {
    pub fn embed_url(&self) -> String {
        format!("{YOUTUBE_EMBED_BASE}/{}", self.id)
    }
}

/// One result from the video-hosting index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostedVideoCandidate {
    pub id: String,
    pub title: String,
    pub duration_seconds: u32,
    pub description: String,
}

/// Outcome of resolution. `None` on either side is a normal result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub chosen_trailer: Option<TrailerCandidate>,
    pub chosen_hosted_video_id: Option<String>,
}

impl ResolutionResult {
    pub fn hosted_embed_url(&self) -> Option<String> {
        self.chosen_hosted_video_id.as_deref().map(hosted_embed_url)
    }
}

/// Embed URL for a video on the hosting provider.
pub fn hosted_embed_url(video_id: &str) -> String {
    format!("{DAILYMOTION_EMBED_BASE}/{video_id}")
}
