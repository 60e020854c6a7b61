use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::itinerary::{ensure_text_within_limit, parse, ParsedItinerary};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ParseRequest {
    pub text: String,
}

/// POST /api/v1/itineraries/parse
pub async fn handle_parse(
    State(state): State<AppState>,
    Json(req): Json<ParseRequest>,
) -> Result<Json<ParsedItinerary>, AppError> {
    ensure_text_within_limit(&req.text, state.config.max_text_bytes)?;
    let parsed = parse(&req.text);
    info!(
        total_days = parsed.total_days,
        synthesized = parsed.is_synthesized(),
        "Parsed itinerary"
    );
    Ok(Json(parsed))
}
