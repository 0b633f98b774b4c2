use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt::Display};

/// Sort order accepted by the catalog's discover endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortKey {
    #[serde(rename = "popularity.desc")]
    PopularityDesc,
    #[serde(rename = "vote_average.desc")]
    VoteAverageDesc,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::PopularityDesc => "popularity.desc",
            SortKey::VoteAverageDesc => "vote_average.desc",
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured discover-endpoint filters derived from a mood.
///
/// Genre sets are ordered so that equal filters always serialize the same
/// way. The pipeline never mutates filters in place; the relaxation step
/// returns a widened copy.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DiscoverFilters {
    /// Genres to include (catalog treats these as a union)
    pub with_genres: BTreeSet<u32>,
    /// Genres to exclude
    pub without_genres: BTreeSet<u32>,
    /// Minimum number of votes a movie needs to qualify
    pub vote_count_gte: u32,
    /// Minimum average rating, only set for family-friendly moods
    pub vote_average_gte: Option<f32>,
    /// Runtime lower bound in minutes
    pub runtime_gte: Option<u32>,
    /// Runtime upper bound in minutes
    pub runtime_lte: Option<u32>,
    pub sort_by: SortKey,
    /// Certification system to filter against (e.g. "US")
    pub certification_country: Option<String>,
    /// Most permissive certification allowed (e.g. "PG")
    pub certification_lte: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_wire_format() {
        assert_eq!(SortKey::PopularityDesc.as_str(), "popularity.desc");
        assert_eq!(SortKey::VoteAverageDesc.as_str(), "vote_average.desc");

        let json = serde_json::to_string(&SortKey::VoteAverageDesc).unwrap();
        assert_eq!(json, r#""vote_average.desc""#);
    }

    #[test]
    fn test_genre_sets_serialize_in_id_order() {
        let filters = DiscoverFilters {
            with_genres: BTreeSet::from([10749, 18, 16]),
            without_genres: BTreeSet::new(),
            vote_count_gte: 50,
            vote_average_gte: None,
            runtime_gte: None,
            runtime_lte: Some(100),
            sort_by: SortKey::PopularityDesc,
            certification_country: None,
            certification_lte: None,
        };

        let json = serde_json::to_value(&filters).unwrap();
        assert_eq!(json["with_genres"], serde_json::json!([16, 18, 10749]));
    }
}
