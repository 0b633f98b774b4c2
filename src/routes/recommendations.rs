use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{MoodInput, RecommendationsResponse},
    services::recommendations,
    state::AppState,
};

/// Axis value used when a parameter is absent or unreadable
const DEFAULT_AXIS: u8 = 50;

/// Raw query parameters for the recommendations endpoint.
///
/// Everything arrives as an optional string: mood axes are parsed leniently,
/// so `?ci=abc` falls back to the midpoint instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct MoodQuery {
    /// Chill/intense axis
    ci: Option<String>,
    /// Happy/dark axis
    hd: Option<String>,
    /// Short/epic axis
    se: Option<String>,
    /// Family-friendly flag, truthy as "true" or "1"
    family: Option<String>,
}

impl MoodQuery {
    fn into_mood(self) -> MoodInput {
        MoodInput {
            chill_intense: parse_axis(self.ci.as_deref()),
            happy_dark: parse_axis(self.hd.as_deref()),
            short_epic: parse_axis(self.se.as_deref()),
            family_friendly: parse_flag(self.family.as_deref()),
        }
    }
}

/// Parses an axis value, clamping into [0, 100] and rounding. Absent or
/// non-numeric values fall back to the midpoint.
fn parse_axis(value: Option<&str>) -> u8 {
    value
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|parsed| parsed.is_finite())
        .map(|parsed| parsed.clamp(0.0, 100.0).round() as u8)
        .unwrap_or(DEFAULT_AXIS)
}

fn parse_flag(value: Option<&str>) -> bool {
    matches!(value, Some("true") | Some("1"))
}

/// Handler for the recommendations endpoint
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<MoodQuery>,
) -> AppResult<Json<RecommendationsResponse>> {
    let mood = params.into_mood();

    let response = recommendations::get_recommendations(state.provider.clone(), mood).await?;

    tracing::info!(
        request_id = %request_id,
        results = response.results.len(),
        "Recommendations request completed"
    );

    Ok(Json(response))
}
