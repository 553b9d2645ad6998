//! Picks the trailer and the full-length video to show for a movie.
//!
//! Rules:
//! 1. Trailer: the trailer index's top result, untouched.
//! 2. Hosted video: the first candidate whose title contains the movie title
//!    (case-insensitive) and whose duration clears the floor.
//! 3. No such candidate: the first candidate regardless of title or length.
//! 4. No candidates at all: nothing.

use std::str::FromStr;

use reelscout_core::types::{
    HostedVideoCandidate, MovieQuery, ResolutionResult, TrailerCandidate,
};
use tracing::{info, warn};

/// Anything shorter than an hour is treated as a clip.
pub const FEATURE_LENGTH_SECONDS: u32 = 3600;

/// Minimum duration a hosted upload needs to count as the full movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationFloor {
    /// Fixed number of seconds, independent of the movie.
    Fixed(u32),
    /// Percentage of the movie's catalog runtime. Movies with an unknown
    /// runtime use [`FEATURE_LENGTH_SECONDS`].
    RuntimeRelative { percent: u32 },
}

impl Default for DurationFloor {
    fn default() -> Self {
        Self::Fixed(FEATURE_LENGTH_SECONDS)
    }
}

impl DurationFloor {
    pub fn min_seconds(&self, query: &MovieQuery) -> u32 {
        match *self {
            Self::Fixed(secs) => secs,
            Self::RuntimeRelative { percent } => {
                if query.canonical_runtime_seconds == 0 {
                    FEATURE_LENGTH_SECONDS
                } else {
                    let scaled =
                        u64::from(query.canonical_runtime_seconds) * u64::from(percent) / 100;
                    u32::try_from(scaled).unwrap_or(u32::MAX)
                }
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid duration floor {0:?}: expected fixed, fixed:<seconds> or runtime:<percent>")]
pub struct ParseDurationFloorError(String);

impl FromStr for DurationFloor {
    type Err = ParseDurationFloorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseDurationFloorError(s.to_string());
        let s = s.trim();
        if s.eq_ignore_ascii_case("fixed") {
            return Ok(Self::default());
        }
        match s.split_once(':') {
            Some(("fixed", secs)) => secs
                .trim()
                .parse::<u32>()
                .map(Self::Fixed)
                .map_err(|_| err()),
            Some(("runtime", percent)) => match percent.trim().parse::<u32>() {
                Ok(percent) if percent > 0 => Ok(Self::RuntimeRelative { percent }),
                _ => Err(err()),
            },
            _ => Err(err()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver {
    floor: DurationFloor,
}

impl Resolver {
    pub fn new(floor: DurationFloor) -> Self {
        Self { floor }
    }

    pub fn floor(&self) -> DurationFloor {
        self.floor
    }

    pub fn resolve(
        &self,
        query: &MovieQuery,
        trailers: &[TrailerCandidate],
        hosted: &[HostedVideoCandidate],
    ) -> ResolutionResult {
        let chosen_trailer = trailers.first().cloned();

        let min_duration = self.floor.min_seconds(query);
        let needle = query.title.to_lowercase();
        let is_full_movie = |video: &&HostedVideoCandidate| {
            video.title.to_lowercase().contains(&needle) && video.duration_seconds >= min_duration
        };

        let filter_hits = hosted.iter().filter(is_full_movie).count();
        let chosen = hosted.iter().find(is_full_movie);
        let fallback_taken = chosen.is_none() && !hosted.is_empty();
        let chosen = chosen.or_else(|| hosted.first());

        if fallback_taken {
            warn!(
                title = %query.title,
                min_duration,
                "no hosted video matched title and duration, falling back to top result"
            );
        }

        info!(
            title = %query.title,
            trailer_candidates = trailers.len(),
            hosted_candidates = hosted.len(),
            filter_hits,
            fallback_taken,
            trailer_found = chosen_trailer.is_some(),
            hosted_found = chosen.is_some(),
            "resolved videos"
        );

        ResolutionResult {
            chosen_trailer,
            chosen_hosted_video_id: chosen.map(|v| v.id.clone()),
        }
    }
}

/// Resolve with the default one-hour floor.
pub fn resolve(
    query: &MovieQuery,
    trailers: &[TrailerCandidate],
    hosted: &[HostedVideoCandidate],
) -> ResolutionResult {
    Resolver::default().resolve(query, trailers, hosted)
}
