//! TMDB (The Movie Database) provider client.
//!
//! Uses TMDB API v3: https://developer.themoviedb.org/docs

use tracing::debug;

use crate::provider::MetadataProvider;
use crate::{CastMember, DiscoverFilter, Genre, MetadataError, MovieDetails, MovieSummary};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
const IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

pub struct TmdbClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl TmdbClient {
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

    async fn get_json(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<serde_json::Value, MetadataError> {
        let mut all_params = vec![("api_key", self.api_key.as_str())];
        all_params.extend_from_slice(params);

        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "TMDB request");

        let resp = self
            .client
            .get(&url)
            .query(&all_params)
            .send()
            .await
            .map_err(|e| MetadataError::Network(e.to_string()))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(MetadataError::NotFound);
        }

        if !resp.status().is_success() {
            return Err(MetadataError::Provider(format!(
                "TMDB returned {}",
                resp.status()
            )));
        }

        resp.json()
            .await
            .map_err(|e| MetadataError::Provider(format!("parse JSON: {e}")))
    }

    async fn get_results(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<MovieSummary>, MetadataError> {
        let data = self.get_json(path, params).await?;
        Ok(parse_results(&data))
    }
}

#[async_trait::async_trait]
impl MetadataProvider for TmdbClient {
    fn name(&self) -> &str {
        "tmdb"
    }

    async fn popular(&self, page: u32) -> Result<Vec<MovieSummary>, MetadataError> {
        let page = page.max(1).to_string();
        self.get_results("/movie/popular", &[("page", page.as_str())]).await
    }

    async fn search(&self, query: &str, page: u32) -> Result<Vec<MovieSummary>, MetadataError> {
        let page = page.max(1).to_string();
        self.get_results("/search/movie", &[("query", query), ("page", page.as_str())])
            .await
    }

    async fn get_movie(&self, provider_id: &str) -> Result<MovieDetails, MetadataError> {
        let data = self
            .get_json(
                &format!("/movie/{provider_id}"),
                &[("append_to_response", "credits")],
            )
            .await?;

        Ok(parse_movie_details(&data))
    }

    async fn similar(&self, provider_id: &str) -> Result<Vec<MovieSummary>, MetadataError> {
        self.get_results(&format!("/movie/{provider_id}/similar"), &[])
            .await
    }

    async fn genres(&self) -> Result<Vec<Genre>, MetadataError> {
        let data = self.get_json("/genre/movie/list", &[]).await?;
        Ok(parse_genres(&data["genres"]))
    }

    async fn discover(
        &self,
        filter: &DiscoverFilter,
        page: u32,
    ) -> Result<Vec<MovieSummary>, MetadataError> {
        let page = page.max(1).to_string();
        let genre = filter.genre_id.map(|g| g.to_string());
        let year = filter.year.map(|y| y.to_string());
        let rating = filter.min_rating.map(|r| r.to_string());

        let mut params = vec![("sort_by", "popularity.desc"), ("page", page.as_str())];
        if let Some(ref g) = genre {
            params.push(("with_genres", g));
        }
        if let Some(ref y) = year {
            params.push(("primary_release_year", y));
        }
        if let Some(ref r) = rating {
            params.push(("vote_average.gte", r));
        }

        self.get_results("/discover/movie", &params).await
    }
}

fn parse_results(data: &serde_json::Value) -> Vec<MovieSummary> {
    data["results"]
        .as_array()
        .map(|rs| rs.iter().filter_map(parse_movie_summary).collect())
        .unwrap_or_default()
}

/// Entries without a numeric id are not addressable and get dropped.
fn parse_movie_summary(data: &serde_json::Value) -> Option<MovieSummary> {
    let id = data["id"].as_u64()?;
    let poster_path = data["poster_path"].as_str().map(|s| s.to_string());

    Some(MovieSummary {
        id,
        title: data["title"].as_str().unwrap_or("Unknown").to_string(),
        overview: data["overview"].as_str().map(|s| s.to_string()),
        release_date: data["release_date"]
            .as_str()
            .filter(|d| !d.is_empty())
            .map(|s| s.to_string()),
        year: data["release_date"]
            .as_str()
            .and_then(|d| d.get(..4))
            .and_then(|y| y.parse().ok()),
        poster_url: poster_path
            .as_deref()
            .map(|p| format!("{IMAGE_BASE}/w500{p}")),
        poster_path,
        vote_average: data["vote_average"].as_f64(),
    })
}

fn parse_movie_details(data: &serde_json::Value) -> MovieDetails {
    let summary = parse_movie_summary(data).unwrap_or_default();
    let (cast, directors) = extract_credits(data.get("credits"));

    MovieDetails {
        summary,
        original_title: data["original_title"].as_str().map(|s| s.to_string()),
        tagline: data["tagline"]
            .as_str()
            .filter(|t| !t.is_empty())
            .map(|s| s.to_string()),
        runtime_minutes: data["runtime"]
            .as_u64()
            .filter(|r| *r > 0)
            .map(|r| r as u32),
        genres: parse_genres(&data["genres"]),
        cast,
        directors,
        backdrop_url: data["backdrop_path"]
            .as_str()
            .map(|p| format!("{IMAGE_BASE}/original{p}")),
    }
}

fn parse_genres(data: &serde_json::Value) -> Vec<Genre> {
    data.as_array()
        .map(|gs| {
            gs.iter()
                .filter_map(|g| {
                    Some(Genre {
                        id: g["id"].as_u64()?,
                        name: g["name"].as_str()?.to_string(),
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

fn extract_credits(credits: Option<&serde_json::Value>) -> (Vec<CastMember>, Vec<String>) {
    let mut cast = Vec::new();
    let mut directors = Vec::new();

    if let Some(credits) = credits {
        if let Some(members) = credits["cast"].as_array() {
            for person in members.iter().take(20) {
                cast.push(CastMember {
                    name: person["name"].as_str().unwrap_or("").to_string(),
                    character: person["character"].as_str().map(|s| s.to_string()),
                    profile_url: person["profile_path"]
                        .as_str()
                        .map(|p| format!("{IMAGE_BASE}/w185{p}")),
                });
            }
        }

        if let Some(crew) = credits["crew"].as_array() {
            for person in crew {
                if person["job"].as_str() == Some("Director") {
                    if let Some(name) = person["name"].as_str() {
                        directors.push(name.to_string());
                    }
                }
            }
        }
    }

    (cast, directors)
}
