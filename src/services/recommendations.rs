//! Recommendation pipeline orchestration.
//!
//! Request flow: map the mood to filters, fetch three discovery pages, and
//! fall back in two stages when the catalog comes up short. An empty pool
//! triggers exactly one pass with relaxed filters; a pool still thinner than
//! the result target is topped up from the unfiltered popular listing. The
//! merged pool is deduplicated, diversity-selected, and enriched before the
//! response is assembled.

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{DiscoverFilters, MoodInput, Movie, RecommendationsResponse, RecommendedMovie},
    services::{mood, providers::CatalogProvider, selection},
};

/// Maximum number of movies in a response
pub const RESULT_TARGET: usize = 12;

/// Runs the full pipeline for one mood
pub async fn get_recommendations(
    provider: Arc<dyn CatalogProvider>,
    mood_input: MoodInput,
) -> AppResult<RecommendationsResponse> {
    let filters = mood::mood_to_filters(&mood_input);

    tracing::info!(
        chill_intense = mood_input.chill_intense,
        happy_dark = mood_input.happy_dark,
        short_epic = mood_input.short_epic,
        family_friendly = mood_input.family_friendly,
        "Building recommendations"
    );

    let mut pool = selection::dedupe_by_id(discover_pages(provider.as_ref(), &filters).await?);

    if pool.is_empty() {
        let relaxed = mood::relax_filters(&filters);
        tracing::info!(
            vote_count_gte = relaxed.vote_count_gte,
            "Strict filters matched nothing, refetching relaxed"
        );
        pool = selection::dedupe_by_id(discover_pages(provider.as_ref(), &relaxed).await?);
    }

    if pool.len() < RESULT_TARGET {
        tracing::info!(
            pool_size = pool.len(),
            "Pool is thin, topping up from the popular listing"
        );
        let popular = popular_pages(provider.as_ref()).await?;
        pool.extend(popular);
        pool = selection::dedupe_by_id(pool);
    }

    let picked = selection::pick_diverse(&pool, RESULT_TARGET);
    let results = enrich(&provider, picked).await;

    tracing::info!(results = results.len(), "Recommendations ready");

    Ok(RecommendationsResponse {
        mood: mood_input,
        filters,
        results,
    })
}

/// Fetches the three fixed discovery pages in parallel and concatenates them
/// in page order. Any failed page fails the whole fetch.
async fn discover_pages(
    provider: &dyn CatalogProvider,
    filters: &DiscoverFilters,
) -> AppResult<Vec<Movie>> {
    let (mut first, second, third) = tokio::try_join!(
        provider.discover(filters, 1),
        provider.discover(filters, 2),
        provider.discover(filters, 3),
    )?;

    first.extend(second);
    first.extend(third);
    Ok(first)
}

/// Fetches three pages of the unfiltered popular listing in parallel
async fn popular_pages(provider: &dyn CatalogProvider) -> AppResult<Vec<Movie>> {
    let (mut first, second, third) = tokio::try_join!(
        provider.popular(1),
        provider.popular(2),
        provider.popular(3),
    )?;

    first.extend(second);
    first.extend(third);
    Ok(first)
}

/// Enriches picked movies with runtimes, fanning the detail lookups out in
/// parallel. A failed lookup keeps its movie with no runtime; input order is
/// preserved in the output.
async fn enrich(provider: &Arc<dyn CatalogProvider>, movies: Vec<Movie>) -> Vec<RecommendedMovie> {
    let mut lookups = Vec::with_capacity(movies.len());
    for movie in &movies {
        let provider = Arc::clone(provider);
        let movie_id = movie.id;
        lookups.push(tokio::spawn(
            async move { provider.movie_details(movie_id).await },
        ));
    }

    let mut enriched = Vec::with_capacity(movies.len());
    let mut failures = 0;

    for (movie, lookup) in movies.into_iter().zip(lookups) {
        let runtime = match lookup.await {
            Ok(Ok(details)) => details.runtime,
            Ok(Err(e)) => {
                tracing::debug!(movie_id = movie.id, error = %e, "Runtime lookup failed");
                failures += 1;
                None
            }
            Err(e) => {
                tracing::error!(movie_id = movie.id, error = %e, "Runtime lookup task join error");
                failures += 1;
                None
            }
        };

        enriched.push(RecommendedMovie::new(movie, runtime));
    }

    if failures > 0 {
        tracing::warn!(
            success_count = enriched.len() - failures,
            error_count = failures,
            "Partial enrichment, some runtimes missing"
        );
    }

    enriched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::MovieDetails;
    use crate::services::providers::MockCatalogProvider;

    fn movie(id: u64, genre_ids: Vec<u32>) -> Movie {
        Movie {
            id,
            title: format!("Movie {}", id),
            overview: String::new(),
            poster_path: Some(format!("/poster-{}.jpg", id)),
            backdrop_path: None,
            release_date: None,
            vote_average: 7.0,
            genre_ids,
        }
    }

    /// A page of distinct movies with ids derived from the page number
    fn page_of(page: u32, count: u64) -> Vec<Movie> {
        (0..count)
            .map(|index| movie(u64::from(page) * 100 + index, vec![18]))
            .collect()
    }

    #[tokio::test]
    async fn test_happy_path_skips_both_fallbacks() {
        let mut provider = MockCatalogProvider::new();
        provider
            .expect_discover()
            .withf(|filters, _| filters.vote_count_gte == 200)
            .times(3)
            .returning(|_, page| Ok(page_of(page, 4)));
        provider.expect_popular().never();
        provider
            .expect_movie_details()
            .times(12)
            .returning(|id| Ok(MovieDetails { id, runtime: Some(120) }));

        let response = get_recommendations(Arc::new(provider), MoodInput::default())
            .await
            .unwrap();

        assert_eq!(response.results.len(), 12);
        assert!(response.results.iter().all(|m| m.runtime == Some(120)));
        assert_eq!(response.filters.vote_count_gte, 200);
    }

    #[tokio::test]
    async fn test_empty_pool_relaxes_exactly_once() {
        let mut provider = MockCatalogProvider::new();
        // Strict pass: the neutral mood asks for vote count 200, finds nothing
        provider
            .expect_discover()
            .withf(|filters, _| filters.vote_count_gte == 200)
            .times(3)
            .returning(|_, _| Ok(Vec::new()));
        // Relaxed pass: halved vote count, still nothing; no third pass
        provider
            .expect_discover()
            .withf(|filters, _| filters.vote_count_gte == 100)
            .times(3)
            .returning(|_, _| Ok(Vec::new()));
        provider
            .expect_popular()
            .times(3)
            .returning(|_| Ok(Vec::new()));
        provider.expect_movie_details().never();

        let response = get_recommendations(Arc::new(provider), MoodInput::default())
            .await
            .unwrap();

        assert!(response.results.is_empty());
        // The response echoes the filters the mood mapped to, not the relaxed copy
        assert_eq!(response.filters.vote_count_gte, 200);
        assert_eq!(response.mood, MoodInput::default());
    }

    #[tokio::test]
    async fn test_thin_pool_tops_up_from_popular() {
        let mut provider = MockCatalogProvider::new();
        provider
            .expect_discover()
            .times(3)
            .returning(|_, page| Ok(if page == 1 { page_of(1, 2) } else { Vec::new() }));
        provider.expect_popular().times(3).returning(|page| {
            let mut movies = page_of(page + 3, 5);
            // One movie the discover pass already returned
            movies.push(movie(100, vec![18]));
            Ok(movies)
        });
        provider
            .expect_movie_details()
            .returning(|id| Ok(MovieDetails { id, runtime: None }));

        let response = get_recommendations(Arc::new(provider), MoodInput::default())
            .await
            .unwrap();

        assert_eq!(response.results.len(), 12);

        // Discover results come first and the popular duplicate is dropped
        let ids: Vec<u64> = response.results.iter().map(|m| m.id).collect();
        assert_eq!(&ids[..2], &[100, 101]);
        assert_eq!(ids.iter().filter(|id| **id == 100).count(), 1);
    }

    #[tokio::test]
    async fn test_discover_page_failure_fails_the_request() {
        let mut provider = MockCatalogProvider::new();
        provider.expect_discover().returning(|_, page| {
            if page == 2 {
                Err(AppError::ExternalApi(
                    "TMDB API returned status 500: ".to_string(),
                ))
            } else {
                Ok(page_of(page, 4))
            }
        });
        provider.expect_popular().never();
        provider.expect_movie_details().never();

        let result = get_recommendations(Arc::new(provider), MoodInput::default()).await;
        assert!(matches!(result, Err(AppError::ExternalApi(_))));
    }

    #[tokio::test]
    async fn test_enrichment_failures_keep_their_movies() {
        let mut provider = MockCatalogProvider::new();
        provider.expect_discover().returning(|_, page| {
            Ok(if page == 1 {
                vec![movie(1, vec![18]), movie(2, vec![35]), movie(3, vec![28])]
            } else {
                Vec::new()
            })
        });
        provider
            .expect_popular()
            .times(3)
            .returning(|_| Ok(Vec::new()));
        provider.expect_movie_details().times(3).returning(|id| {
            if id == 2 {
                Err(AppError::ExternalApi("details unavailable".to_string()))
            } else {
                Ok(MovieDetails {
                    id,
                    runtime: Some(90 + id as u32),
                })
            }
        });

        let response = get_recommendations(Arc::new(provider), MoodInput::default())
            .await
            .unwrap();

        // All three movies survive, in order, with the failed lookup degraded
        let ids: Vec<u64> = response.results.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(response.results[0].runtime, Some(91));
        assert_eq!(response.results[1].runtime, None);
        assert_eq!(response.results[2].runtime, Some(93));

        // Genre names come from the local table, not the details lookup
        assert_eq!(response.results[0].genres, vec!["Drama"]);
        assert_eq!(response.results[1].genres, vec!["Comedy"]);
    }
}
