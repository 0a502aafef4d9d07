//! Batch import API handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::{error, info};

use super::super::AppState;
use crate::application::ImportSummary;
use crate::interfaces::http::common::ApiResponse;

/// Import vehicles from a delimited text body.
///
/// The body is the raw file content; the first line is the header. The
/// importer itself never fails — bad rows are counted in the summary.
pub async fn import_csv(
    State(state): State<AppState>,
    body: String,
) -> Json<ApiResponse<ImportSummary>> {
    info!("import requested ({} bytes)", body.len());
    let summary = state.importer.import_csv(&body).await;
    Json(ApiResponse::success(summary))
}

/// Import the configured seed file from disk.
pub async fn seed(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ImportSummary>>, (StatusCode, Json<ApiResponse<()>>)> {
    let csv = match tokio::fs::read_to_string(&state.seed_path).await {
        Ok(csv) => csv,
        Err(e) => {
            error!("seed failed: cannot read {}: {}", state.seed_path.display(), e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!(
                    "Seed failed: cannot read {}: {}",
                    state.seed_path.display(),
                    e
                ))),
            ));
        }
    };

    let summary = state.importer.import_csv(&csv).await;
    Ok(Json(ApiResponse::success(summary)))
}
