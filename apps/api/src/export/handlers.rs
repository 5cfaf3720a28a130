//! Axum route handler for PDF export.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::document::model::ResumeDocument;
use crate::document::store;
use crate::errors::AppError;
use crate::export::{pdf, storage};
use crate::render;
use crate::state::AppState;

/// POST /api/v1/resumes/:id/export
///
/// Renders the stored document, composes the PDF, stores it in S3, records the
/// object key, and streams the bytes back for immediate download. The document
/// itself is never mutated; a failed export leaves the resume untouched.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let row = store::get_resume(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;

    let document: ResumeDocument = serde_json::from_value(row.document)
        .map_err(|e| AppError::UnprocessableEntity(format!("Stored document is corrupt: {e}")))?;

    let tree = render::render(&document);
    let mut config = state.page_config.clone();
    config.font = tree.font;

    // Composition is CPU-bound; keep it off the async worker threads.
    let bytes = tokio::task::spawn_blocking(move || pdf::compose_pdf(&tree, &config))
        .await
        .map_err(anyhow::Error::from)??;

    let key = storage::pdf_object_key(row.user_id, row.id);
    storage::store_pdf(&state.s3, &state.config.s3_bucket, &key, bytes.clone()).await?;
    store::set_pdf_key(&state.db, id, &key).await?;

    let filename = format!("attachment; filename=\"{}.pdf\"", sanitize_filename(&row.title));
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, filename),
        ],
        bytes,
    ))
}

/// Keeps the download filename header-safe: alphanumerics, dash, underscore.
fn sanitize_filename(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    if cleaned.chars().all(|c| c == '_') {
        "resume".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename_replaces_specials() {
        assert_eq!(sanitize_filename("My Resume (v2)"), "My_Resume__v2_");
    }

    #[test]
    fn test_sanitize_filename_falls_back_when_empty() {
        assert_eq!(sanitize_filename(""), "resume");
        assert_eq!(sanitize_filename("!!!"), "resume");
    }
}
