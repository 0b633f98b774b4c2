use serde::{Deserialize, Serialize};

/// A viewer's self-reported mood: three slider axes plus a family-friendly
/// toggle. Axis values are percentages in `[0, 100]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoodInput {
    /// Calm evening (0) through edge-of-seat tension (100)
    pub chill_intense: u8,
    /// Feel-good (0) through bleak and unsettling (100)
    pub happy_dark: u8,
    /// Something short (0) through a long epic (100)
    pub short_epic: u8,
    /// Restrict results to family-safe content
    pub family_friendly: bool,
}

impl Default for MoodInput {
    /// Neutral mood: every axis at the midpoint, no family restriction
    fn default() -> Self {
        Self {
            chill_intense: 50,
            happy_dark: 50,
            short_epic: 50,
            family_friendly: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mood_is_neutral() {
        let mood = MoodInput::default();
        assert_eq!(mood.chill_intense, 50);
        assert_eq!(mood.happy_dark, 50);
        assert_eq!(mood.short_epic, 50);
        assert!(!mood.family_friendly);
    }

    #[test]
    fn test_mood_serialization() {
        let mood = MoodInput {
            chill_intense: 80,
            happy_dark: 20,
            short_epic: 50,
            family_friendly: true,
        };

        let json = serde_json::to_string(&mood).unwrap();
        assert_eq!(
            json,
            r#"{"chill_intense":80,"happy_dark":20,"short_epic":50,"family_friendly":true}"#
        );
    }
}
