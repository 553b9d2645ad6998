pub mod provider;
pub mod tmdb;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("provider error: {0}")]
    Provider(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("not found")]
    NotFound,
}

/// A movie as it appears in catalog listings.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub year: Option<i32>,
    pub poster_path: Option<String>,
    pub poster_url: Option<String>,
    pub vote_average: Option<f64>,
}

/// Full movie details, including credits.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MovieDetails {
    #[serde(flatten)]
    pub summary: MovieSummary,
    pub original_title: Option<String>,
    pub tagline: Option<String>,
    pub runtime_minutes: Option<u32>,
    pub genres: Vec<Genre>,
    pub cast: Vec<CastMember>,
    pub directors: Vec<String>,
    pub backdrop_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CastMember {
    pub name: String,
    pub character: Option<String>,
    pub profile_url: Option<String>,
}

/// Filters for catalog discovery. Unset fields do not constrain results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoverFilter {
    pub genre_id: Option<u64>,
    pub year: Option<i32>,
    pub min_rating: Option<f64>,
}
