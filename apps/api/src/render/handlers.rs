//! Axum route handler for live preview rendering.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::document::model::ResumeDocument;
use crate::document::store;
use crate::errors::AppError;
use crate::render::tree::VisualTree;
use crate::render::{render_with, RenderOptions};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    pub template: Option<String>,
    pub accent: Option<String>,
    pub monochrome: Option<bool>,
}

/// GET /api/v1/resumes/:id/preview
///
/// Renders the stored document to a VisualTree. Query parameters override the
/// document's template/accent/monochrome without persisting anything, so the
/// UI can preview alternatives cheaply.
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<PreviewQuery>,
) -> Result<Json<VisualTree>, AppError> {
    let row = store::get_resume(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;

    let document: ResumeDocument = serde_json::from_value(row.document)
        .map_err(|e| AppError::UnprocessableEntity(format!("Stored document is corrupt: {e}")))?;

    let options = RenderOptions {
        template: params.template,
        accent_color: params.accent,
        monochrome: params.monochrome,
    };
    Ok(Json(render_with(&document, &options)))
}
