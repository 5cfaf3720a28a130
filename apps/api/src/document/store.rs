//! Persistence adapter for resumes.
//!
//! Saves are full-document replacements: two sessions editing the same resume
//! id resolve last write wins, matching how the UI treats the in-memory
//! document as authoritative while an editing session is open.

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::document::model::ResumeDocument;
use crate::models::resume::{ResumeRow, ResumeSummary};

pub async fn list_resumes(pool: &PgPool, user_id: Uuid) -> Result<Vec<ResumeSummary>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, title, template, ats_score, created_at, updated_at
        FROM resumes
        WHERE user_id = $1
        ORDER BY updated_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn create_resume(
    pool: &PgPool,
    user_id: Uuid,
    title: &str,
    template: &str,
) -> Result<ResumeRow> {
    let document = ResumeDocument::new_with_template(template);
    let row: ResumeRow = sqlx::query_as(
        r#"
        INSERT INTO resumes (user_id, title, template, document)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(title)
    .bind(template)
    .bind(serde_json::to_value(&document)?)
    .fetch_one(pool)
    .await?;

    info!("Created resume {} ({title}) for user {user_id}", row.id);
    Ok(row)
}

pub async fn get_resume(pool: &PgPool, id: Uuid) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM resumes WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Replaces the stored document and the denormalized template column.
/// Returns false when the resume no longer exists.
pub async fn save_document(
    pool: &PgPool,
    id: Uuid,
    document: &ResumeDocument,
) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE resumes
        SET document = $1, template = $2, updated_at = now()
        WHERE id = $3
        "#,
    )
    .bind(serde_json::to_value(document)?)
    .bind(&document.template)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn update_ats_score(pool: &PgPool, id: Uuid, score: f64) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE resumes SET ats_score = $1, updated_at = now() WHERE id = $2")
        .bind(score)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn set_pdf_key(pool: &PgPool, id: Uuid, key: &str) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE resumes SET s3_pdf_key = $1, updated_at = now() WHERE id = $2")
        .bind(key)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn delete_resume(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
