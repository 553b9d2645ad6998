//! Finding something playable for a movie: a trailer from the video-search
//! index and a full-length upload from the video-hosting index.

pub mod dailymotion;
pub mod fetcher;
pub mod index;
pub mod resolver;
pub mod youtube;

use reelscout_core::types::VideoSource;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VideoError {
    #[error("{index} unavailable: {reason}")]
    UpstreamUnavailable { index: VideoSource, reason: String },
}

impl VideoError {
    pub(crate) fn upstream(index: VideoSource, reason: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            index,
            reason: reason.into(),
        }
    }

    /// Classify a transport error from the HTTP client.
    pub(crate) fn from_transport(index: VideoSource, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::upstream(index, "request timed out")
        } else {
            Self::upstream(index, err.to_string())
        }
    }
}
