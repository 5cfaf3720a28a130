//! Pluggable, trait-based ATS scorer.
//!
//! Default: `KeywordAtsScorer` (pure-Rust, fast, deterministic, fully testable).
//! Demo: `CannedAtsScorer` (fixed delay, fixed payload).
//!
//! `AppState` holds an `Arc<dyn AtsScorer>`, swapped at startup via `ATS_SCORER`.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::ats::keywords::{extract_keywords, tokenize};
use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Report type (shared across all scorer backends)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsReport {
    pub score: u8, // 0 – 100
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub suggestions: Vec<String>,
    pub format_issues: Vec<String>,
    pub scorer_backend: String, // "keyword" | "canned" — for transparency
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The scorer trait. Implement this to swap backends without touching the
/// endpoint, handler, or caller code.
#[async_trait]
pub trait AtsScorer: Send + Sync {
    async fn score(&self, resume_text: &str, jd_text: &str) -> Result<AtsReport, AppError>;
}

/// Picks the scorer backend named in config. Unknown names get the default.
pub fn scorer_from_config(name: &str) -> Arc<dyn AtsScorer> {
    match name {
        "canned" => Arc::new(CannedAtsScorer),
        _ => Arc::new(KeywordAtsScorer),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordAtsScorer — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Deterministic keyword-coverage scorer.
///
/// Algorithm:
/// 1. Build the JD keyword inventory (frequency × position weight).
/// 2. For each keyword: resume token exact match → strength 1.0,
///    resume substring match → 0.6, otherwise 0.0.
/// 3. score = Σ(strength × weighted_score) / Σ(weighted_score) × 100
pub struct KeywordAtsScorer;

#[async_trait]
impl AtsScorer for KeywordAtsScorer {
    async fn score(&self, resume_text: &str, jd_text: &str) -> Result<AtsReport, AppError> {
        Ok(compute_keyword_report(resume_text, jd_text))
    }
}

const FORMAT_ADVICE: &[&str] = &[
    "Consider using a single-column layout for better ATS parsing",
    "Avoid using headers/footers - some ATS systems skip them",
    "Use standard section headings (Experience, Education, Skills)",
];

fn compute_keyword_report(resume_text: &str, jd_text: &str) -> AtsReport {
    let inventory = extract_keywords(jd_text);

    if inventory.is_empty() {
        return AtsReport {
            score: 0,
            matched_keywords: vec![],
            missing_keywords: vec![],
            suggestions: vec![
                "No keywords found in the job description — paste a fuller posting.".to_string(),
            ],
            format_issues: vec![],
            scorer_backend: "keyword".to_string(),
        };
    }

    let resume_lower = resume_text.to_lowercase();
    let resume_tokens: HashSet<String> = tokenize(resume_text).into_iter().collect();

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    let mut total_weighted = 0.0_f32;
    let mut total_score = 0.0_f32;

    for entry in &inventory {
        total_weighted += entry.weighted_score;

        let strength = if resume_tokens.contains(&entry.keyword) {
            1.0
        } else if resume_lower.contains(&entry.keyword) {
            0.6
        } else {
            0.0
        };
        total_score += strength * entry.weighted_score;

        if strength > 0.0 {
            matched.push(entry.keyword.clone());
        } else {
            missing.push(entry.keyword.clone());
        }
    }

    let score = if total_weighted > 0.0 {
        ((total_score / total_weighted) * 100.0).round().min(100.0) as u8
    } else {
        0
    };

    AtsReport {
        suggestions: build_suggestions(score, &missing),
        format_issues: FORMAT_ADVICE.iter().map(|s| s.to_string()).collect(),
        score,
        matched_keywords: matched,
        missing_keywords: missing,
        scorer_backend: "keyword".to_string(),
    }
}

/// Human-readable advice derived from the score and the top gaps.
fn build_suggestions(score: u8, missing: &[String]) -> Vec<String> {
    let mut suggestions = Vec::new();
    let top_gaps: Vec<&str> = missing.iter().take(3).map(|s| s.as_str()).collect();

    if score >= 80 {
        suggestions.push(
            "Strong match. Your resume already covers the key requirements.".to_string(),
        );
    } else {
        if !top_gaps.is_empty() {
            suggestions.push(format!(
                "Work these missing keywords into your experience: {}.",
                top_gaps.join(", ")
            ));
        }
        suggestions.push(
            "Add quantifiable achievements (e.g., \"Increased performance by 40%\")".to_string(),
        );
        suggestions.push("Use action verbs to start bullet points".to_string());
    }
    if score < 60 {
        suggestions.push("Add a professional summary at the top of your resume".to_string());
    }
    suggestions
}

// ────────────────────────────────────────────────────────────────────────────
// CannedAtsScorer — demo implementation
// ────────────────────────────────────────────────────────────────────────────

/// Simulated analysis: waits a fixed delay, then returns the same payload
/// regardless of input. Exists so the UI can be demoed without content.
pub struct CannedAtsScorer;

const CANNED_DELAY: Duration = Duration::from_millis(2500);

#[async_trait]
impl AtsScorer for CannedAtsScorer {
    async fn score(&self, _resume_text: &str, _jd_text: &str) -> Result<AtsReport, AppError> {
        tokio::time::sleep(CANNED_DELAY).await;

        Ok(AtsReport {
            score: 78,
            matched_keywords: vec![
                "React", "JavaScript", "TypeScript", "Node.js", "REST API", "Git", "Agile",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            missing_keywords: vec!["Docker", "Kubernetes", "CI/CD", "AWS", "GraphQL"]
                .into_iter()
                .map(String::from)
                .collect(),
            suggestions: vec![
                "Add quantifiable achievements (e.g., \"Increased performance by 40%\")",
                "Include more industry-specific keywords from the job description",
                "Add a professional summary at the top of your resume",
                "Use action verbs to start bullet points",
                "Include relevant certifications if available",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            format_issues: FORMAT_ADVICE.iter().map(|s| s.to_string()).collect(),
            scorer_backend: "canned".to_string(),
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
