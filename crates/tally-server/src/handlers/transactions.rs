//! Transaction handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Deserializer};

use crate::{AppError, AppState, MessageResponse};
use tally_core::{Error as CoreError, Transaction};

/// Request body for POST /api/update_category
#[derive(Debug, Deserialize)]
pub struct UpdateCategoryRequest {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub category: String,
    /// Missing or null means no display override
    #[serde(default)]
    pub custom_name: Option<String>,
}

/// Request body for POST /api/add_custom_category
#[derive(Debug, Deserialize)]
pub struct AddCustomCategoryRequest {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub custom_category: String,
    #[serde(default)]
    pub description_keywords: Option<Vec<String>>,
}

/// Accept an id sent as a JSON number or as a numeric string ("3")
fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid transaction id: {:?}", text))),
    }
}

/// Fail with 400 before looking at the body when nothing has been uploaded yet
fn require_snapshot(state: &AppState) -> Result<(), AppError> {
    match state.store.is_loaded() {
        Ok(true) => Ok(()),
        Ok(false) => Err(AppError::bad_request(&CoreError::NoData.to_string())),
        Err(e) => Err(AppError::from_core(e, "Error reading transactions")),
    }
}

fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| AppError::bad_request(&format!("Invalid request body: {}", e.body_text())))
}

/// GET /api/get_transactions - List every transaction in the snapshot
pub async fn get_transactions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let transactions = state
        .store
        .list_all()
        .map_err(|e| AppError::from_core(e, "Error retrieving transactions"))?;
    Ok(Json(transactions))
}

/// GET /api/get_other_transactions - List transactions still categorized as "Other"
pub async fn get_other_transactions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let transactions = state
        .store
        .list_uncategorized()
        .map_err(|e| AppError::from_core(e, "Error retrieving other transactions"))?;
    Ok(Json(transactions))
}

/// POST /api/update_category - Override one transaction's category
pub async fn update_category(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UpdateCategoryRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    require_snapshot(&state)?;
    let req = parse_body(payload)?;

    state
        .store
        .update_category(req.id, &req.category, req.custom_name.as_deref().unwrap_or(""))
        .map_err(|e| AppError::from_core(e, "Error updating category"))?;

    Ok(MessageResponse::new("Category updated successfully"))
}

/// POST /api/add_custom_category - Apply a custom category, optionally to
/// every transaction matching the given description keywords
pub async fn add_custom_category(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AddCustomCategoryRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    require_snapshot(&state)?;
    let req = parse_body(payload)?;

    state
        .store
        .add_custom_category(
            req.id,
            &req.custom_category,
            req.description_keywords.as_deref().unwrap_or_default(),
        )
        .map_err(|e| AppError::from_core(e, "Error adding custom category"))?;

    Ok(MessageResponse::new(format!(
        "Custom category '{}' added successfully",
        req.custom_category
    )))
}
