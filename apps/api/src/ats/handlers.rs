//! Axum route handlers for the ATS check API.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::ats::scorer::AtsReport;
use crate::document::model::ResumeDocument;
use crate::document::store;
use crate::errors::AppError;
use crate::render;
use crate::state::AppState;

/// POST /api/v1/ats/score
///
/// Multipart form: `resume` (a PDF file) and `job_description` (text).
/// Extracts the resume text and runs the configured scorer against the JD.
pub async fn handle_ats_check(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AtsReport>, AppError> {
    let mut resume_bytes: Option<bytes::Bytes> = None;
    let mut jd_text = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart request: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                resume_bytes = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?,
                );
            }
            "job_description" => {
                jd_text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
            }
            _ => {}
        }
    }

    let resume_bytes =
        resume_bytes.ok_or_else(|| AppError::Validation("A resume file is required".to_string()))?;
    if jd_text.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    if !resume_bytes.starts_with(b"%PDF") {
        return Err(AppError::Validation(
            "Only PDF resumes are supported".to_string(),
        ));
    }

    // pdf-extract is CPU-bound; keep it off the async worker threads.
    let extraction = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&resume_bytes)
    })
    .await
    .map_err(anyhow::Error::from)?;

    let resume_text = extraction.map_err(|e| {
        AppError::UnprocessableEntity(format!("Could not extract text from the PDF: {e}"))
    })?;

    let report = state.ats_scorer.score(&resume_text, &jd_text).await?;
    Ok(Json(report))
}

#[derive(Debug, Deserialize)]
pub struct ScoreStoredRequest {
    pub jd_text: String,
}

/// POST /api/v1/resumes/:id/ats
///
/// Scores a stored resume against a JD using its rendered text, and persists
/// the score so the dashboard can show it.
pub async fn handle_score_stored(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ScoreStoredRequest>,
) -> Result<Json<AtsReport>, AppError> {
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }

    let row = store::get_resume(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;

    let document: ResumeDocument = serde_json::from_value(row.document)
        .map_err(|e| AppError::UnprocessableEntity(format!("Stored document is corrupt: {e}")))?;

    let resume_text = render::render(&document).visible_text().join("\n");
    let report = state.ats_scorer.score(&resume_text, &request.jd_text).await?;

    store::update_ats_score(&state.db, id, report.score as f64).await?;

    Ok(Json(report))
}
