pub mod filters;
pub mod genres;
pub mod mood;
pub mod movie;

pub use filters::{DiscoverFilters, SortKey};
pub use mood::MoodInput;
pub use movie::{
    Movie, MovieDetails, RecommendationsResponse, RecommendedMovie, TrailerResponse, Video,
};
