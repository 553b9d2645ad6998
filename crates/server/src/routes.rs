use axum::extract::{Path, Query, State};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use reelscout_core::error::ApiError;
use reelscout_core::types::{MovieQuery, TrailerCandidate};
use reelscout_metadata::{DiscoverFilter, Genre, MovieDetails, MovieSummary};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

const SUGGESTION_LIMIT: usize = 5;

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_origins);
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

fn api_router() -> Router<AppState> {
    Router::new()
        .route("/movies/popular", get(popular_movies))
        .route("/movies/search", get(search_movies))
        .route("/movies/suggestions", get(movie_suggestions))
        .route("/movies/genres", get(list_genres))
        .route("/movies/genre/{genre_id}", get(movies_by_genre))
        .route("/movies/filter", get(filter_movies))
        .route("/movies/{id}", get(get_movie))
        .route("/movies/{id}/similar", get(similar_movies))
}

/// The frontend is served from its own origin and only reads.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        layer.allow_origin(origins)
    }
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

// ---------------------------------------------------------------------------
// Catalog listings
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct PageQuery {
    page: Option<u32>,
}

#[derive(Deserialize)]
struct SearchQuery {
    query: Option<String>,
    page: Option<u32>,
}

#[derive(Deserialize)]
struct FilterQuery {
    year: Option<i32>,
    rating: Option<f64>,
    genre: Option<u64>,
    page: Option<u32>,
}

#[derive(Serialize)]
struct Suggestion {
    id: u64,
    title: String,
}

async fn popular_movies(
    State(state): State<AppState>,
    Query(q): Query<PageQuery>,
) -> Result<Json<Vec<MovieSummary>>, AppError> {
    let movies = state.catalog.popular(q.page.unwrap_or(1)).await?;
    Ok(Json(movies))
}

async fn search_movies(
    State(state): State<AppState>,
    Query(q): Query<SearchQuery>,
) -> Result<Json<Vec<MovieSummary>>, AppError> {
    let query = q
        .query
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest("query parameter is required".into()))?;

    let movies = state.catalog.search(query, q.page.unwrap_or(1)).await?;
    Ok(Json(movies))
}

async fn movie_suggestions(
    State(state): State<AppState>,
    Query(q): Query<SearchQuery>,
) -> Result<Json<Vec<Suggestion>>, AppError> {
    let Some(query) = q.query.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(Json(Vec::new()));
    };

    let movies = state.catalog.search(query, 1).await?;
    Ok(Json(
        movies
            .into_iter()
            .take(SUGGESTION_LIMIT)
            .map(|m| Suggestion {
                id: m.id,
                title: m.title,
            })
            .collect(),
    ))
}

async fn list_genres(State(state): State<AppState>) -> Result<Json<Vec<Genre>>, AppError> {
    Ok(Json(state.catalog.genres().await?))
}

async fn movies_by_genre(
    State(state): State<AppState>,
    Path(genre_id): Path<String>,
    Query(q): Query<PageQuery>,
) -> Result<Json<Vec<MovieSummary>>, AppError> {
    let genre_id: u64 = genre_id
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid genre id: {genre_id}")))?;

    let filter = DiscoverFilter {
        genre_id: Some(genre_id),
        ..Default::default()
    };
    let movies = state.catalog.discover(&filter, q.page.unwrap_or(1)).await?;
    Ok(Json(movies))
}

async fn filter_movies(
    State(state): State<AppState>,
    Query(q): Query<FilterQuery>,
) -> Result<Json<Vec<MovieSummary>>, AppError> {
    if let Some(rating) = q.rating {
        if !(0.0..=10.0).contains(&rating) {
            return Err(ApiError::BadRequest("rating must be between 0 and 10".into()).into());
        }
    }

    let filter = DiscoverFilter {
        genre_id: q.genre,
        year: q.year,
        min_rating: q.rating,
    };
    let movies = state.catalog.discover(&filter, q.page.unwrap_or(1)).await?;
    Ok(Json(movies))
}

async fn similar_movies(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<MovieSummary>>, AppError> {
    let id = validate_movie_id(&id)?;
    Ok(Json(state.catalog.similar(id).await?))
}

// ---------------------------------------------------------------------------
// Movie details with playable videos
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct MovieDetailsResponse {
    movie: MovieDetails,
    trailer: Option<TrailerCandidate>,
    trailer_embed_url: Option<String>,
    hosted_video_id: Option<String>,
    hosted_embed_url: Option<String>,
}

async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MovieDetailsResponse>, AppError> {
    let id = validate_movie_id(&id)?;
    debug!(movie_id = id, catalog = state.catalog.name(), "fetching movie details");

    let movie = state.catalog.get_movie(id).await?;
    let query = MovieQuery::new(movie.summary.title.clone(), movie.runtime_minutes);

    let candidates = state.videos.fetch(&query.title).await?;
    let resolution = state
        .resolver
        .resolve(&query, &candidates.trailers, &candidates.hosted);

    let hosted_embed_url = resolution.hosted_embed_url();
    let trailer_embed_url = resolution.chosen_trailer.as_ref().map(|t| t.embed_url());

    Ok(Json(MovieDetailsResponse {
        movie,
        trailer: resolution.chosen_trailer,
        trailer_embed_url,
        hosted_video_id: resolution.chosen_hosted_video_id,
        hosted_embed_url,
    }))
}

/// Catalog ids are numeric; anything else never reaches the provider.
fn validate_movie_id(id: &str) -> Result<&str, ApiError> {
    if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
        Ok(id)
    } else {
        Err(ApiError::BadRequest(format!("invalid movie id: {id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_ids_must_be_numeric() {
        assert_eq!(validate_movie_id("27205").unwrap(), "27205");
        assert!(validate_movie_id("").is_err());
        assert!(validate_movie_id("27205abc").is_err());
        assert!(validate_movie_id("../popular").is_err());
    }
}
