//! Axum route handlers for the suggestion API.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::advisor::input::{is_truthy, render};
use crate::advisor::prompts::{bachelor_prompt, master_prompt};
use crate::advisor::{BACHELOR_MAX_TOKENS, MASTER_MAX_TOKENS};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SuggestMasterRequest {
    #[serde(default)]
    pub perfil: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestBachelorRequest {
    #[serde(default)]
    pub gustos: Option<Value>,
}

/// POST /api/suggest-master
///
/// `perfil` is not validated: a missing field or unreadable body is treated as
/// an empty profile and still sent to the model. Non-string values are rendered.
pub async fn handle_suggest_master(
    State(state): State<AppState>,
    payload: Option<Json<SuggestMasterRequest>>,
) -> Result<Json<String>, AppError> {
    let perfil = payload
        .and_then(|Json(req)| req.perfil)
        .map(|v| render(&v))
        .unwrap_or_default();

    let documents = state
        .documents
        .snapshot()
        .ok_or(AppError::DocumentsNotReady)?;

    let prompt = master_prompt(&documents, &perfil);
    info!(programs = documents.len(), "Requesting master suggestion");

    let suggestion = state
        .llm
        .complete(&prompt, MASTER_MAX_TOKENS)
        .await
        .map_err(AppError::MasterSuggestion)?;
    Ok(Json(suggestion))
}

/// POST /api/suggest-bachelor
pub async fn handle_suggest_bachelor(
    State(state): State<AppState>,
    payload: Option<Json<SuggestBachelorRequest>>,
) -> Result<Json<String>, AppError> {
    let gustos = payload
        .and_then(|Json(req)| req.gustos)
        .filter(is_truthy)
        .map(|v| render(&v))
        .ok_or(AppError::MissingPreferences)?;

    let prompt = bachelor_prompt(&gustos);
    info!("Requesting bachelor suggestion");

    let suggestion = state
        .llm
        .complete(&prompt, BACHELOR_MAX_TOKENS)
        .await
        .map_err(AppError::from_bachelor_failure)?;
    Ok(Json(suggestion))
}
