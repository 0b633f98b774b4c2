//! Deterministic mood-to-filter mapping.
//!
//! Turns the three mood axes into concrete discover filters, and widens
//! those filters when a search comes back empty. Same mood in, same
//! filters out; there is no randomness anywhere in the mapping.

use std::collections::BTreeSet;

use crate::models::{genres, DiscoverFilters, MoodInput, SortKey};

/// Certification system used for the family-friendly restriction
const CERTIFICATION_COUNTRY: &str = "US";
/// Most permissive certification allowed in family-friendly mode
const FAMILY_CERTIFICATION_CAP: &str = "PG";
/// Minimum average rating required in family-friendly mode
const FAMILY_MIN_RATING: f32 = 5.0;

/// Relaxation never drops the vote-count bar below this
const RELAXED_VOTE_COUNT_FLOOR: u32 = 20;
/// Relaxation never pushes the runtime lower bound below this (minutes)
const RELAXED_RUNTIME_FLOOR: u32 = 70;
/// How far each relaxation widens the runtime window (minutes)
const RUNTIME_WIDEN_STEP: u32 = 15;

/// Position of an axis value within its range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Low,
    Mid,
    High,
}

/// Thirds of the 0..=100 axis range, with the boundaries on the low side
fn bucket(value: u8) -> Bucket {
    if value <= 35 {
        Bucket::Low
    } else if value <= 65 {
        Bucket::Mid
    } else {
        Bucket::High
    }
}

/// Maps a mood to discover filters.
///
/// Each axis contributes independently: chill/intense and happy/dark pick
/// genres (their contributions are unioned), short/epic sets the runtime
/// window, and chill/intense additionally scales how well-established a
/// movie must be. The family-friendly flag layers certification and rating
/// constraints on top.
pub fn mood_to_filters(mood: &MoodInput) -> DiscoverFilters {
    let chill = bucket(mood.chill_intense);
    let happy = bucket(mood.happy_dark);
    let length = bucket(mood.short_epic);

    let mut with_genres = BTreeSet::new();
    let mut without_genres = BTreeSet::new();

    match chill {
        Bucket::Low => {
            with_genres.extend([
                genres::DRAMA,
                genres::ROMANCE,
                genres::ANIMATION,
                genres::FAMILY,
            ]);
            without_genres.insert(genres::WAR);
        }
        Bucket::Mid => {
            with_genres.extend([genres::DRAMA, genres::COMEDY, genres::ADVENTURE]);
        }
        Bucket::High => {
            with_genres.extend([genres::ACTION, genres::THRILLER, genres::CRIME, genres::WAR]);
        }
    }

    match happy {
        Bucket::Low => {
            with_genres.extend([
                genres::COMEDY,
                genres::ROMANCE,
                genres::FAMILY,
                genres::ANIMATION,
            ]);
        }
        Bucket::Mid => {
            with_genres.extend([genres::ADVENTURE, genres::DRAMA, genres::MYSTERY]);
        }
        Bucket::High => {
            with_genres.extend([
                genres::THRILLER,
                genres::HORROR,
                genres::CRIME,
                genres::MYSTERY,
            ]);
        }
    }

    let (runtime_gte, runtime_lte) = match length {
        Bucket::Low => (None, Some(100)),
        Bucket::Mid => (Some(95), Some(140)),
        Bucket::High => (Some(130), None),
    };

    // Intense moods demand better-established movies, surfaced by rating
    // rather than by current popularity.
    let (vote_count_gte, sort_by) = match chill {
        Bucket::Low => (50, SortKey::PopularityDesc),
        Bucket::Mid => (200, SortKey::PopularityDesc),
        Bucket::High => (500, SortKey::VoteAverageDesc),
    };

    let mut filters = DiscoverFilters {
        with_genres,
        without_genres,
        vote_count_gte,
        vote_average_gte: None,
        runtime_gte,
        runtime_lte,
        sort_by,
        certification_country: None,
        certification_lte: None,
    };

    if mood.family_friendly {
        filters.without_genres.insert(genres::HORROR);
        filters.vote_average_gte = Some(FAMILY_MIN_RATING);
        filters.certification_country = Some(CERTIFICATION_COUNTRY.to_string());
        filters.certification_lte = Some(FAMILY_CERTIFICATION_CAP.to_string());
    }

    filters
}

/// Widens filters that produced no results.
///
/// Monotonic: every relaxed constraint is at least as permissive as before.
/// Genre inclusions and family-friendly constraints survive untouched; only
/// the War exclusion is lifted, the vote-count bar halves (floored), and the
/// runtime window grows by a step on each side within its floor. Sorting
/// falls back to popularity so borderline matches surface first.
pub fn relax_filters(filters: &DiscoverFilters) -> DiscoverFilters {
    let mut relaxed = filters.clone();

    relaxed.without_genres.remove(&genres::WAR);
    relaxed.vote_count_gte = (filters.vote_count_gte / 2).max(RELAXED_VOTE_COUNT_FLOOR);
    relaxed.runtime_gte = filters
        .runtime_gte
        .map(|minutes| minutes.saturating_sub(RUNTIME_WIDEN_STEP).max(RELAXED_RUNTIME_FLOOR));
    relaxed.runtime_lte = filters.runtime_lte.map(|minutes| minutes + RUNTIME_WIDEN_STEP);
    relaxed.sort_by = SortKey::PopularityDesc;

    relaxed
}
