use crate::{DiscoverFilter, Genre, MetadataError, MovieDetails, MovieSummary};

/// A movie catalog that can list, search and describe movies.
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Currently popular movies.
    async fn popular(&self, page: u32) -> Result<Vec<MovieSummary>, MetadataError>;

    /// Search for movies by free-text title.
    async fn search(&self, query: &str, page: u32) -> Result<Vec<MovieSummary>, MetadataError>;

    /// Get full details for a movie by provider ID.
    async fn get_movie(&self, provider_id: &str) -> Result<MovieDetails, MetadataError>;

    /// Movies the catalog considers similar to the given one.
    async fn similar(&self, provider_id: &str) -> Result<Vec<MovieSummary>, MetadataError>;

    /// All movie genres known to the catalog.
    async fn genres(&self) -> Result<Vec<Genre>, MetadataError>;

    /// Browse movies by genre, release year and minimum rating.
    async fn discover(
        &self,
        filter: &DiscoverFilter,
        page: u32,
    ) -> Result<Vec<MovieSummary>, MetadataError>;
}
