//! Axum route handlers for the template catalog API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::render::theme;
use crate::state::AppState;
use crate::templates::catalog::{self, listing_score};
use crate::templates::descriptor::{Category, TemplateDescriptor};

#[derive(Debug, Deserialize)]
pub struct TemplateListQuery {
    pub category: Option<String>,
    /// "popular" (default) or "rating".
    pub sort: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TemplateListItem {
    #[serde(flatten)]
    pub descriptor: &'static TemplateDescriptor,
    pub listing_score: u8,
}

#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    pub templates: Vec<TemplateListItem>,
    /// Selectable accent palette ids, for the chooser UI.
    pub accents: Vec<&'static str>,
    pub default_template: &'static str,
}

/// GET /api/v1/templates
pub async fn handle_list_templates(
    State(_state): State<AppState>,
    Query(params): Query<TemplateListQuery>,
) -> Result<Json<TemplateListResponse>, AppError> {
    let category = match params.category.as_deref() {
        None | Some("all") => None,
        Some(raw) => Some(
            Category::parse(raw)
                .ok_or_else(|| AppError::Validation(format!("Unknown category '{raw}'")))?,
        ),
    };

    let mut templates: Vec<TemplateListItem> = catalog::all_templates()
        .iter()
        .filter(|t| category.map_or(true, |c| t.has_category(c)))
        .map(|descriptor| TemplateListItem {
            descriptor,
            listing_score: listing_score(descriptor),
        })
        .collect();

    match params.sort.as_deref() {
        Some("rating") => templates.sort_by(|a, b| {
            b.descriptor
                .rating
                .partial_cmp(&a.descriptor.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        _ => templates.sort_by(|a, b| b.descriptor.downloads_k.cmp(&a.descriptor.downloads_k)),
    }

    Ok(Json(TemplateListResponse {
        templates,
        accents: theme::accent_ids(),
        default_template: catalog::DEFAULT_TEMPLATE_ID,
    }))
}

#[derive(Debug, Serialize)]
pub struct TemplateDetailResponse {
    #[serde(flatten)]
    pub descriptor: &'static TemplateDescriptor,
    pub listing_score: u8,
}

/// GET /api/v1/templates/:id
///
/// Unlike render-time resolution, the detail page is an exact lookup: asking
/// for a template that does not exist is a 404, not a silent fallback.
pub async fn handle_template_detail(
    State(_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TemplateDetailResponse>, AppError> {
    let descriptor = catalog::lookup(&id)
        .ok_or_else(|| AppError::NotFound(format!("Template '{id}' not found")))?;
    Ok(Json(TemplateDetailResponse {
        descriptor,
        listing_score: listing_score(descriptor),
    }))
}
