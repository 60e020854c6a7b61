use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::itinerary::ensure_text_within_limit;
use crate::layout::{
    measurer_for, paginate, DocumentMetadata, ExportDocument, LayoutError, PaginationConfig,
    TripDetails,
};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ExportRequest {
    pub text: String,
    pub trip: TripDetails,
    /// Measurer/font name; the service default when absent.
    #[serde(default)]
    pub font: Option<String>,
    /// Page geometry overrides; the service default when absent.
    #[serde(default)]
    pub page: Option<PaginationConfig>,
}

/// POST /api/v1/itineraries/export
pub async fn handle_export(
    State(state): State<AppState>,
    Json(req): Json<ExportRequest>,
) -> Result<Json<ExportDocument>, AppError> {
    ensure_text_within_limit(&req.text, state.config.max_text_bytes)?;
    if req.trip.destination.trim().is_empty() {
        return Err(AppError::Validation(
            "trip.destination must not be empty".to_string(),
        ));
    }

    let mut config = req.page.unwrap_or_else(|| state.page_config.clone());
    config.product_label = state.config.product_label.clone();
    let font = req
        .font
        .unwrap_or_else(|| state.config.default_font.clone());
    let metadata = DocumentMetadata::from_trip(&req.trip);
    let text = req.text;

    // CPU-bound layout runs on the blocking pool.
    let (family, styles, pages) = tokio::task::spawn_blocking(move || {
        let measurer = measurer_for(&font, &config.styles)?;
        let pages = paginate(&text, &config, &metadata, &measurer)?;
        Ok::<_, LayoutError>((measurer.family(), config.styles, pages))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in export: {e}")))??;

    let document = ExportDocument::new(&req.trip.destination, family, styles, pages);
    info!(
        document_id = %document.document_id,
        pages = document.page_count,
        file = %document.file_name,
        "Exported itinerary document"
    );
    Ok(Json(document))
}
