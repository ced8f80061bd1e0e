//! Report handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{AppError, AppState};
use tally_core::{CategorySummary, PREDEFINED_CATEGORIES};

/// GET /api/get_expense_summary - Spending per display label, largest first
pub async fn get_expense_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CategorySummary>>, AppError> {
    let summary = state
        .store
        .expense_summary()
        .map_err(|e| AppError::from_core(e, "Error creating expense summary"))?;
    Ok(Json(summary))
}

/// GET /api/categories - Built-in category labels in classifier order
pub async fn list_categories() -> Json<Vec<&'static str>> {
    Json(PREDEFINED_CATEGORIES.to_vec())
}
