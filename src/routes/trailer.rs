use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::TrailerResponse,
    services::trailer::find_trailer,
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct TrailerQuery {
    id: Option<String>,
}

impl TrailerQuery {
    /// The requested movie id, when present and numeric
    fn movie_id(&self) -> Option<u64> {
        self.id.as_deref().and_then(|raw| raw.trim().parse().ok())
    }
}

/// Handler for the trailer endpoint
pub async fn trailer(
    State(state): State<AppState>,
    Query(params): Query<TrailerQuery>,
) -> AppResult<Json<TrailerResponse>> {
    let movie_id = params
        .movie_id()
        .ok_or_else(|| AppError::InvalidInput("Missing or invalid movie id".to_string()))?;

    let trailer = find_trailer(state.provider.clone(), movie_id).await?;

    Ok(Json(TrailerResponse { trailer }))
}
