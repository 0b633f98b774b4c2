//! TMDB genre ids used by the mood mapping.
//!
//! Ids come from TMDB's movie genre list, which has been stable for years;
//! only the genres the mapping actually emits are mirrored here.

pub const ACTION: u32 = 28;
pub const ADVENTURE: u32 = 12;
pub const ANIMATION: u32 = 16;
pub const COMEDY: u32 = 35;
pub const CRIME: u32 = 80;
pub const DRAMA: u32 = 18;
pub const FAMILY: u32 = 10751;
pub const HORROR: u32 = 27;
pub const MYSTERY: u32 = 9648;
pub const ROMANCE: u32 = 10749;
pub const THRILLER: u32 = 53;
pub const WAR: u32 = 10752;

/// Resolves a TMDB genre id to a display name. Ids outside the mirrored set
/// resolve to `None` and are dropped from enriched results.
pub fn name(id: u32) -> Option<&'static str> {
    match id {
        ACTION => Some("Action"),
        ADVENTURE => Some("Adventure"),
        ANIMATION => Some("Animation"),
        COMEDY => Some("Comedy"),
        CRIME => Some("Crime"),
        DRAMA => Some("Drama"),
        FAMILY => Some("Family"),
        HORROR => Some("Horror"),
        MYSTERY => Some("Mystery"),
        ROMANCE => Some("Romance"),
        THRILLER => Some("Thriller"),
        WAR => Some("War"),
        _ => None,
    }
}
