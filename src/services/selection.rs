//! Pool cleanup and diversity selection.
//!
//! The fetch stage hands over a concatenated pool that may contain the same
//! movie several times (cross-page overlap, fallback listings). This module
//! collapses duplicates and then picks a small, genre-diverse slice for the
//! final response.

use std::collections::HashSet;

use crate::models::Movie;

/// Drops repeated catalog ids, keeping the first occurrence in pool order
pub fn dedupe_by_id(movies: Vec<Movie>) -> Vec<Movie> {
    let mut seen = HashSet::new();
    movies
        .into_iter()
        .filter(|movie| seen.insert(movie.id))
        .collect()
}

/// Greedy two-pass diversity selection.
///
/// Ordering favors movies with artwork (posters or backdrops) while staying
/// stable within each group. The first pass admits at most one movie per
/// primary genre, skipping movies with no genres at all; the second pass
/// backfills remaining slots in the same order without the genre constraint.
/// Returns at most `target` movies, never a duplicate id.
pub fn pick_diverse(movies: &[Movie], target: usize) -> Vec<Movie> {
    let (with_artwork, without_artwork): (Vec<&Movie>, Vec<&Movie>) =
        movies.iter().partition(|movie| movie.has_artwork());
    let ordered: Vec<&Movie> = with_artwork.into_iter().chain(without_artwork).collect();

    let mut picked: Vec<Movie> = Vec::with_capacity(target.min(movies.len()));
    let mut picked_ids: HashSet<u64> = HashSet::new();
    let mut used_genres: HashSet<u32> = HashSet::new();

    for movie in &ordered {
        if picked.len() == target {
            return picked;
        }
        if let Some(primary) = movie.primary_genre() {
            if used_genres.insert(primary) {
                picked_ids.insert(movie.id);
                picked.push((*movie).clone());
            }
        }
    }

    for movie in ordered {
        if picked.len() == target {
            break;
        }
        if picked_ids.insert(movie.id) {
            picked.push(movie.clone());
        }
    }

    picked
}
