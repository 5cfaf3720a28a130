use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One stored resume. The whole [`crate::document::ResumeDocument`] lives in
/// the `document` JSONB column; the session in memory is authoritative while
/// editing and saves replace the column wholesale (last write wins).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub template: String,
    pub document: Value,
    pub ats_score: Option<f64>,
    pub s3_pdf_key: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Dashboard listing shape — everything but the document body.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeSummary {
    pub id: Uuid,
    pub title: String,
    pub template: String,
    pub ats_score: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
