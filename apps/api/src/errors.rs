use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The two suggestion endpoints answer failures with different bodies, so each
/// 500 variant belongs to one endpoint.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing preferences")]
    MissingPreferences,

    #[error("Brochures are still loading")]
    DocumentsNotReady,

    #[error("Master suggestion failed: {0}")]
    MasterSuggestion(LlmError),

    #[error("Upstream API error: {0}")]
    Upstream(LlmError),

    #[error("Bachelor suggestion failed: {0}")]
    Server(LlmError),
}

impl AppError {
    /// Splits bachelor failures on whether the API itself answered with an error.
    pub fn from_bachelor_failure(err: LlmError) -> Self {
        if err.has_upstream_response() {
            AppError::Upstream(err)
        } else {
            AppError::Server(err)
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::MissingPreferences => (
                StatusCode::BAD_REQUEST,
                "Por favor, proporciona una lista de gustos.",
            )
                .into_response(),
            AppError::DocumentsNotReady => {
                tracing::warn!("Master suggestion requested before brochures finished loading");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({ "message": "Los programas aún se están cargando" })),
                )
                    .into_response()
            }
            AppError::MasterSuggestion(e) => {
                tracing::error!("Master suggestion error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Error al procesar la solicitud" })),
                )
                    .into_response()
            }
            AppError::Upstream(e) => {
                tracing::error!("Error communicating with OpenAI: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Error de la API de OpenAI." })),
                )
                    .into_response()
            }
            AppError::Server(e) => {
                tracing::error!("Bachelor suggestion error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Error en el servidor." })),
                )
                    .into_response()
            }
        }
    }
}
