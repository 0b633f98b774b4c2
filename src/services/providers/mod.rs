/// Movie catalog provider abstraction
///
/// The recommendation pipeline only talks to a catalog through this trait,
/// so the HTTP-backed TMDB client can be swapped for a stub in tests. Each
/// provider implements listing fetches (discover, popular) plus per-movie
/// lookups (details, videos).
use crate::{
    error::AppResult,
    models::{DiscoverFilters, Movie, MovieDetails, Video},
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Trait for movie catalog backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch one page of the filtered discovery listing
    ///
    /// Pages are 1-based. An in-range page with no matches is an empty list,
    /// not an error.
    async fn discover(&self, filters: &DiscoverFilters, page: u32) -> AppResult<Vec<Movie>>;

    /// Fetch one page of the unfiltered popularity listing
    ///
    /// Used as the last-resort pool filler when filtered discovery runs thin.
    async fn popular(&self, page: u32) -> AppResult<Vec<Movie>>;

    /// Fetch full details for a single movie (the pipeline reads the runtime)
    async fn movie_details(&self, movie_id: u64) -> AppResult<MovieDetails>;

    /// Fetch the promotional videos attached to a movie
    async fn movie_videos(&self, movie_id: u64) -> AppResult<Vec<Video>>;
}
