//! Axum route handlers for the Resume API.

use axum::{
    extract::{Multipart, Path, State},
    http::header::CONTENT_TYPE,
    response::IntoResponse,
    Json,
};
use chrono::{Datelike, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::{extract_text, DocumentFormat};
use crate::scoring::Evaluation;
use crate::state::AppState;

/// Largest accepted document. Uploads past this are rejected outright.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Multipart field that carries the document.
const FILE_FIELD: &str = "File";

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub score: u32,
    pub experience_years: Option<i32>,
    pub passing_year: Option<i32>,
    pub feedback: Vec<String>,
    /// Storage id of the raw upload, fetchable via GET /resume/:file_id.
    pub file_id: Uuid,
}

impl ScoreResponse {
    fn new(file_id: Uuid, evaluation: Evaluation) -> Self {
        Self {
            score: evaluation.score,
            experience_years: evaluation.experience_years,
            passing_year: evaluation.passing_year,
            feedback: evaluation.feedback,
            file_id,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /resume
///
/// Accepts one document in the `File` multipart field, stores the raw bytes,
/// extracts plain text, and returns the evaluation with the storage id.
/// The upload is persisted before extraction, so even an unreadable document
/// stays available for inspection.
pub async fn handle_score_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScoreResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart request: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(AppError::Validation("No selected file".to_string()));
        }

        let extension = filename.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
        let Some(format) = DocumentFormat::from_extension(extension) else {
            return Err(AppError::Validation("Invalid file format".to_string()));
        };

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        if data.len() > MAX_UPLOAD_BYTES {
            return Err(AppError::Validation(
                "File too large. Maximum size is 10MB".to_string(),
            ));
        }

        let file_id = state
            .store
            .put(&filename, format.content_type(), data.clone())
            .await
            .map_err(AppError::Internal)?;

        let text = extract_text(&data, format)?;
        let evaluation = state.scorer.evaluate(&text, Utc::now().year());
        info!("Scored {filename} ({file_id}): {}", evaluation.score);

        return Ok(Json(ScoreResponse::new(file_id, evaluation)));
    }

    Err(AppError::Validation("No file part".to_string()))
}

/// GET /resume/:file_id
///
/// Streams back the originally uploaded bytes with their stored content type.
pub async fn handle_fetch_resume(
    State(state): State<AppState>,
    Path(file_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let document = state
        .store
        .get(file_id)
        .await
        .map_err(AppError::Internal)?
        .ok_or_else(|| AppError::NotFound(format!("Resume {file_id} not found")))?;

    Ok(([(CONTENT_TYPE, document.content_type)], document.bytes))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
