use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{genres, DiscoverFilters, MoodInput};

/// Base URL for TMDB-hosted artwork
const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
/// Poster rendition served to clients (2:3 aspect)
const POSTER_SIZE: &str = "w342";
/// Backdrop rendition served to clients (16:9 aspect)
const BACKDROP_SIZE: &str = "w780";

/// A movie as returned by the catalog's discover and popular listings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    /// Artwork path fragment (leading slash included), e.g. "/qJ2tW6WMUDux911r6m7haRef0WH.jpg"
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// TMDB sends `""` for unknown dates; both empty and absent map to `None`
    #[serde(default, deserialize_with = "release_date_from_tmdb")]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub vote_average: f32,
    /// Genre ids in the catalog's order; the first is the primary genre
    #[serde(default)]
    pub genre_ids: Vec<u32>,
}

impl Movie {
    /// True when the movie has any artwork to display
    pub fn has_artwork(&self) -> bool {
        self.poster_path.is_some() || self.backdrop_path.is_some()
    }

    /// First listed genre id, the one the diversity selector keys on
    pub fn primary_genre(&self) -> Option<u32> {
        self.genre_ids.first().copied()
    }

    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|path| image_url(POSTER_SIZE, path))
    }

    pub fn backdrop_url(&self) -> Option<String> {
        self.backdrop_path
            .as_deref()
            .map(|path| image_url(BACKDROP_SIZE, path))
    }
}

fn image_url(size: &str, path: &str) -> String {
    format!("{}/{}{}", IMAGE_BASE_URL, size, path)
}

fn release_date_from_tmdb<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .filter(|value| !value.is_empty())
        .and_then(|value| NaiveDate::parse_from_str(&value, "%Y-%m-%d").ok()))
}

/// The slice of the catalog's movie-details payload the enricher reads
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetails {
    pub id: u64,
    /// Runtime in minutes; null upstream for unreleased or obscure titles
    #[serde(default)]
    pub runtime: Option<u32>,
}

/// A promotional video attached to a movie
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Video {
    pub id: String,
    /// Site-specific video key (for YouTube, the watch id)
    pub key: String,
    pub name: String,
    /// Hosting site, e.g. "YouTube" or "Vimeo"
    pub site: String,
    /// Catalog video kind, e.g. "Trailer", "Teaser", "Clip"
    #[serde(rename = "type")]
    pub video_type: String,
}

/// A selected movie enriched for display: runtime, resolved genre names,
/// and ready-to-use artwork URLs. Enrichment is best-effort, so `runtime`
/// may be absent even for well-known titles.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendedMovie {
    pub id: u64,
    pub title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub poster_url: Option<String>,
    pub backdrop_url: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub vote_average: f32,
    pub genre_ids: Vec<u32>,
    /// Display names for the ids the genre table knows about
    pub genres: Vec<&'static str>,
    /// Runtime in minutes, when the details lookup succeeded
    pub runtime: Option<u32>,
}

impl RecommendedMovie {
    pub fn new(movie: Movie, runtime: Option<u32>) -> Self {
        let genre_names = movie
            .genre_ids
            .iter()
            .copied()
            .filter_map(genres::name)
            .collect();
        let poster_url = movie.poster_url();
        let backdrop_url = movie.backdrop_url();

        Self {
            id: movie.id,
            title: movie.title,
            overview: movie.overview,
            poster_path: movie.poster_path,
            backdrop_path: movie.backdrop_path,
            poster_url,
            backdrop_url,
            release_date: movie.release_date,
            vote_average: movie.vote_average,
            genre_ids: movie.genre_ids,
            genres: genre_names,
            runtime,
        }
    }
}

/// Response for the recommendations endpoint: echoes the mood and the
/// filters that produced the results, so clients can show what was searched
#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub mood: MoodInput,
    pub filters: DiscoverFilters,
    pub results: Vec<RecommendedMovie>,
}

/// Response for the trailer endpoint
#[derive(Debug, Serialize)]
pub struct TrailerResponse {
    /// The best available trailer, or null when the movie has none
    pub trailer: Option<Video>,
}
