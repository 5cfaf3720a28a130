//! Axum route handlers for the Resume API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::document::model::ResumeDocument;
use crate::document::ops::{self, EditOp};
use crate::document::store;
use crate::errors::AppError;
use crate::models::resume::{ResumeRow, ResumeSummary};
use crate::state::AppState;
use crate::templates;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<ResumeSummary>>, AppError> {
    let summaries = store::list_resumes(&state.db, params.user_id).await?;
    Ok(Json(summaries))
}

#[derive(Debug, Deserialize)]
pub struct CreateResumeRequest {
    pub user_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub template: Option<String>,
}

/// POST /api/v1/resumes
///
/// Creates an empty resume. Unknown template ids are normalized to the default
/// template rather than rejected, matching render-time fallback behavior.
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Json(request): Json<CreateResumeRequest>,
) -> Result<(StatusCode, Json<ResumeRow>), AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }

    let template = templates::resolve(request.template.as_deref().unwrap_or_default());
    let row = store::create_resume(&state.db, request.user_id, &request.title, template.id)
        .await
        .map_err(AppError::Internal)?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeRow>, AppError> {
    let row = store::get_resume(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Json(row))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if store::delete_resume(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Resume {id} not found")))
    }
}

#[derive(Debug, Serialize)]
pub struct ApplyOpResponse {
    pub document: ResumeDocument,
    pub created_id: Option<Uuid>,
    /// False when the op referenced an entity that no longer exists; the
    /// document is returned unchanged in that case.
    pub found: bool,
}

/// POST /api/v1/resumes/:id/ops
///
/// Applies one editor operation and persists the result. Operations arrive in
/// user dispatch order; a stale entity id is a no-op, never an error.
pub async fn handle_apply_op(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(op): Json<EditOp>,
) -> Result<Json<ApplyOpResponse>, AppError> {
    let row = store::get_resume(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;

    let mut document: ResumeDocument = serde_json::from_value(row.document)
        .map_err(|e| AppError::UnprocessableEntity(format!("Stored document is corrupt: {e}")))?;

    let outcome = ops::apply(&mut document, op);
    if outcome.found {
        store::save_document(&state.db, id, &document)
            .await
            .map_err(AppError::Internal)?;
    }

    Ok(Json(ApplyOpResponse {
        document,
        created_id: outcome.created_id,
        found: outcome.found,
    }))
}

/// PUT /api/v1/resumes/:id/document
///
/// Whole-document save. Last write wins across concurrent sessions.
pub async fn handle_save_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(document): Json<ResumeDocument>,
) -> Result<StatusCode, AppError> {
    let saved = store::save_document(&state.db, id, &document)
        .await
        .map_err(AppError::Internal)?;
    if saved {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Resume {id} not found")))
    }
}
