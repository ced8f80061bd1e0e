//! Statement ingestion handlers

use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::{AppError, AppState, MAX_UPLOAD_SIZE};

/// Response for ingestion endpoints
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub message: String,
    pub total_transactions: usize,
}

/// POST /api/upload_csv - Replace the snapshot with an uploaded statement
///
/// Expects multipart form with:
/// - file: CSV file (required, max 10MB)
pub async fn upload_csv(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<IngestResponse>, AppError> {
    // Not a multipart form at all, so there is no file field to find
    let mut multipart = multipart.map_err(|_| AppError::bad_request("No file provided"))?;
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(&format!("Failed to read form field: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|_| AppError::bad_request("Failed to read file data"))?;

        if bytes.len() > MAX_UPLOAD_SIZE {
            return Err(AppError::bad_request(&format!(
                "File too large. Maximum size is {} MB",
                MAX_UPLOAD_SIZE / 1024 / 1024
            )));
        }

        file = Some((filename, bytes.to_vec()));
    }

    let (filename, data) = file.ok_or_else(|| AppError::bad_request("No file provided"))?;
    if filename.is_empty() {
        return Err(AppError::bad_request("No file selected"));
    }

    let total_transactions = state
        .store
        .ingest_csv(data.as_slice())
        .map_err(|e| AppError::internal(&format!("Error processing file: {}", e)))?;

    info!(filename = %filename, total_transactions, "Processed uploaded statement");

    Ok(Json(IngestResponse {
        message: "File processed successfully".to_string(),
        total_transactions,
    }))
}

/// GET /api/get_sample_data - Replace the snapshot with the bundled sample statement
pub async fn get_sample_data(
    State(state): State<Arc<AppState>>,
) -> Result<Json<IngestResponse>, AppError> {
    let path = &state.config.sample_data_path;

    let total_transactions = state.store.load_sample(path).map_err(|e| match e {
        tally_core::Error::SampleFileMissing(_) => AppError::not_found(&e.to_string()),
        other => AppError::internal(&format!("An internal server error occurred: {}", other)),
    })?;

    info!(path = %path.display(), total_transactions, "Loaded sample statement");

    Ok(Json(IngestResponse {
        message: "Sample data processed successfully".to_string(),
        total_transactions,
    }))
}
