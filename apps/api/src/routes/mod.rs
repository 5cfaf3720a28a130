pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;
use crate::{ats, document, export, render, templates};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Template catalog
        .route(
            "/api/v1/templates",
            get(templates::handlers::handle_list_templates),
        )
        .route(
            "/api/v1/templates/:id",
            get(templates::handlers::handle_template_detail),
        )
        // Resume API
        .route(
            "/api/v1/resumes",
            get(document::handlers::handle_list_resumes)
                .post(document::handlers::handle_create_resume),
        )
        .route(
            "/api/v1/resumes/:id",
            get(document::handlers::handle_get_resume)
                .delete(document::handlers::handle_delete_resume),
        )
        .route(
            "/api/v1/resumes/:id/ops",
            post(document::handlers::handle_apply_op),
        )
        .route(
            "/api/v1/resumes/:id/document",
            put(document::handlers::handle_save_document),
        )
        .route(
            "/api/v1/resumes/:id/preview",
            get(render::handlers::handle_preview),
        )
        .route(
            "/api/v1/resumes/:id/export",
            post(export::handlers::handle_export),
        )
        // ATS check
        .route("/api/v1/ats/score", post(ats::handlers::handle_ats_check))
        .route(
            "/api/v1/resumes/:id/ats",
            post(ats::handlers::handle_score_stored),
        )
        .with_state(state)
}
