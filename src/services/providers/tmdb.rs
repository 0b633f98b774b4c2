/// TMDB (The Movie Database) catalog provider
///
/// Speaks TMDB's v3 REST API. The API key travels as the `api_key` query
/// parameter on every request.
///
/// Endpoints used:
/// 1. Discovery: /discover/movie with the translated filter grammar
/// 2. Fallback listing: /movie/popular
/// 3. Enrichment: /movie/{id} for the runtime
/// 4. Trailers: /movie/{id}/videos
use reqwest::Client as HttpClient;
use serde::{de::DeserializeOwned, Deserialize};
use std::collections::BTreeSet;

use crate::{
    error::{AppError, AppResult},
    models::{DiscoverFilters, Movie, MovieDetails, Video},
    services::providers::CatalogProvider,
};

/// Envelope TMDB wraps listing results in
#[derive(Debug, Deserialize)]
struct ResultsPage<T> {
    results: Vec<T>,
}

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    /// Authenticated GET returning the deserialized JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> AppResult<T> {
        let url = format!("{}{}", self.api_url, path);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }
}

/// Translates filters into TMDB's discover query grammar
///
/// Empty genre sets and unset bounds are omitted entirely rather than sent
/// as empty values, which TMDB would reject or misread.
fn discover_params(filters: &DiscoverFilters, page: u32) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("include_adult", "false".to_string()),
        ("include_video", "false".to_string()),
        ("sort_by", filters.sort_by.to_string()),
        ("page", page.to_string()),
        ("vote_count.gte", filters.vote_count_gte.to_string()),
    ];

    if !filters.with_genres.is_empty() {
        params.push(("with_genres", join_ids(&filters.with_genres)));
    }
    if !filters.without_genres.is_empty() {
        params.push(("without_genres", join_ids(&filters.without_genres)));
    }
    if let Some(vote_average) = filters.vote_average_gte {
        params.push(("vote_average.gte", vote_average.to_string()));
    }
    if let Some(runtime) = filters.runtime_gte {
        params.push(("with_runtime.gte", runtime.to_string()));
    }
    if let Some(runtime) = filters.runtime_lte {
        params.push(("with_runtime.lte", runtime.to_string()));
    }
    if let Some(country) = &filters.certification_country {
        params.push(("certification_country", country.clone()));
    }
    if let Some(certification) = &filters.certification_lte {
        params.push(("certification.lte", certification.clone()));
    }

    params
}

/// TMDB expects multi-valued id parameters comma-joined
fn join_ids(ids: &BTreeSet<u32>) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbProvider {
    async fn discover(&self, filters: &DiscoverFilters, page: u32) -> AppResult<Vec<Movie>> {
        let listing: ResultsPage<Movie> = self
            .get_json("/discover/movie", &discover_params(filters, page))
            .await?;

        tracing::debug!(
            page,
            results = listing.results.len(),
            provider = "tmdb",
            "Discover page fetched"
        );

        Ok(listing.results)
    }

    async fn popular(&self, page: u32) -> AppResult<Vec<Movie>> {
        let params = [("page", page.to_string())];
        let listing: ResultsPage<Movie> = self.get_json("/movie/popular", &params).await?;

        tracing::debug!(
            page,
            results = listing.results.len(),
            provider = "tmdb",
            "Popular page fetched"
        );

        Ok(listing.results)
    }

    async fn movie_details(&self, movie_id: u64) -> AppResult<MovieDetails> {
        self.get_json(&format!("/movie/{}", movie_id), &[]).await
    }

    async fn movie_videos(&self, movie_id: u64) -> AppResult<Vec<Video>> {
        let listing: ResultsPage<Video> = self
            .get_json(&format!("/movie/{}/videos", movie_id), &[])
            .await?;

        Ok(listing.results)
    }
}
