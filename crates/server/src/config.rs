//! Server configuration, read from the environment.

use std::time::Duration;

use reelscout_videos::resolver::{DurationFloor, ParseDurationFloorError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
    #[error(transparent)]
    DurationFloor(#[from] ParseDurationFloorError),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub tmdb_api_key: String,
    pub youtube_api_key: String,
    pub tmdb_base_url: String,
    pub youtube_base_url: String,
    pub dailymotion_base_url: String,
    /// Per-call timeout for every outbound request.
    pub upstream_timeout: Duration,
    pub duration_floor: DurationFloor,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &'static str| var(name).ok_or(ConfigError::Missing(name));

        let bind_addr = match (var("REELSCOUT_BIND"), var("PORT")) {
            (Some(addr), _) => addr,
            (None, Some(port)) => {
                let port: u16 = port.trim().parse().map_err(|_| ConfigError::Invalid {
                    name: "PORT",
                    reason: format!("{port:?} is not a port number"),
                })?;
                format!("0.0.0.0:{port}")
            }
            (None, None) => "0.0.0.0:5000".to_string(),
        };

        let timeout_secs: u64 = match var("REELSCOUT_UPSTREAM_TIMEOUT_SECS") {
            Some(v) => match v.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "REELSCOUT_UPSTREAM_TIMEOUT_SECS",
                        reason: format!("{v:?} is not a positive number of seconds"),
                    });
                }
            },
            None => 10,
        };

        let duration_floor = match var("REELSCOUT_DURATION_FLOOR") {
            Some(v) => v.parse::<DurationFloor>()?,
            None => DurationFloor::default(),
        };

        Ok(Self {
            bind_addr,
            tmdb_api_key: required("TMDB_API_KEY")?,
            youtube_api_key: required("YOUTUBE_API_KEY")?,
            tmdb_base_url: var("TMDB_BASE_URL")
                .unwrap_or_else(|| reelscout_metadata::tmdb::DEFAULT_BASE_URL.to_string()),
            youtube_base_url: var("YOUTUBE_BASE_URL")
                .unwrap_or_else(|| reelscout_videos::youtube::DEFAULT_BASE_URL.to_string()),
            dailymotion_base_url: var("DAILYMOTION_BASE_URL")
                .unwrap_or_else(|| reelscout_videos::dailymotion::DEFAULT_BASE_URL.to_string()),
            upstream_timeout: Duration::from_secs(timeout_secs),
            duration_floor,
            cors_origins: var("REELSCOUT_CORS_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(|| vec!["*".to_string()]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    const KEYS: [(&str, &str); 2] = [("TMDB_API_KEY", "tmdb"), ("YOUTUBE_API_KEY", "yt")];

    #[test]
    fn defaults() {
        let config = Config::from_lookup(lookup(&KEYS)).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:5000");
        assert_eq!(config.upstream_timeout, Duration::from_secs(10));
        assert_eq!(config.duration_floor, DurationFloor::Fixed(3600));
        assert_eq!(config.cors_origins, vec!["*"]);
        assert_eq!(config.tmdb_base_url, "https://api.themoviedb.org/3");
    }

    #[test]
    fn port_overrides_default_bind() {
        let mut pairs = KEYS.to_vec();
        pairs.push(("PORT", "8080"));
        let config = Config::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");

        pairs.push(("REELSCOUT_BIND", "127.0.0.1:9000"));
        let config = Config::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let err = Config::from_lookup(lookup(&[("TMDB_API_KEY", "tmdb"), ("YOUTUBE_API_KEY", " ")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Missing("YOUTUBE_API_KEY")));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut pairs = KEYS.to_vec();
        pairs.push(("REELSCOUT_UPSTREAM_TIMEOUT_SECS", "0"));
        assert!(Config::from_lookup(lookup(&pairs)).is_err());

        let mut pairs = KEYS.to_vec();
        pairs.push(("REELSCOUT_DURATION_FLOOR", "runtime:abc"));
        assert!(matches!(
            Config::from_lookup(lookup(&pairs)),
            Err(ConfigError::DurationFloor(_))
        ));
    }

    #[test]
    fn runtime_relative_floor_can_be_enabled() {
        let mut pairs = KEYS.to_vec();
        pairs.push(("REELSCOUT_DURATION_FLOOR", "runtime:90"));
        let config = Config::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(
            config.duration_floor,
            DurationFloor::RuntimeRelative { percent: 90 }
        );
    }
}
