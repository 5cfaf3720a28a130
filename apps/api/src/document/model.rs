//! The `ResumeDocument` aggregate — everything a user enters in an editing
//! session plus their presentation choices.
//!
//! All mutation goes through [`crate::document::editor::DocumentEditor`]; the
//! renderer and exporter only ever borrow the document immutably.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::render::theme::DEFAULT_ACCENT_ID;
use crate::templates::catalog::DEFAULT_TEMPLATE_ID;

/// Sentinel end date for a position the user still holds.
pub const PRESENT: &str = "Present";

/// Singleton contact/header record. No id — there is exactly one per document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: Uuid,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub gpa: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: Uuid,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    /// Kept consistent with `current` by the editor: `current == true` implies
    /// the `"Present"` sentinel.
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: String,
    #[serde(default)]
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementEntry {
    pub id: Uuid,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
}

/// Default proficiency for a freshly added skill.
pub const DEFAULT_PROFICIENCY: u8 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    /// 0–100 self-assessed proficiency, rendered as a bar by some templates.
    #[serde(default = "default_proficiency")]
    pub proficiency: u8,
}

fn default_proficiency() -> u8 {
    DEFAULT_PROFICIENCY
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomItem {
    pub id: Uuid,
    #[serde(default)]
    pub text: String,
}

/// A user-defined freeform section: a title plus an ordered list of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomSection {
    pub id: Uuid,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub items: Vec<CustomItem>,
}

/// The root aggregate. Owned by one editing session at a time; persisted whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeDocument {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub achievements: Vec<AchievementEntry>,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
    #[serde(default)]
    pub custom_sections: Vec<CustomSection>,
    /// Template catalog id. Unknown values fall back to the default template at
    /// render time — never an error.
    #[serde(default = "default_template")]
    pub template: String,
    /// Accent palette id. Ignored entirely while `monochrome` is set.
    #[serde(default = "default_accent")]
    pub accent_color: String,
    #[serde(default)]
    pub monochrome: bool,
}

fn default_template() -> String {
    DEFAULT_TEMPLATE_ID.to_string()
}

fn default_accent() -> String {
    DEFAULT_ACCENT_ID.to_string()
}

impl Default for ResumeDocument {
    fn default() -> Self {
        ResumeDocument {
            personal_info: PersonalInfo::default(),
            education: Vec::new(),
            experience: Vec::new(),
            projects: Vec::new(),
            achievements: Vec::new(),
            skills: Vec::new(),
            custom_sections: Vec::new(),
            template: default_template(),
            accent_color: default_accent(),
            monochrome: false,
        }
    }
}

impl ResumeDocument {
    /// A fresh document for a new editing session, pinned to `template`.
    pub fn new_with_template(template: &str) -> Self {
        ResumeDocument {
            template: template.to_string(),
            ..ResumeDocument::default()
        }
    }

    /// True when every collection is empty and no personal info was entered.
    pub fn is_blank(&self) -> bool {
        self.personal_info == PersonalInfo::default()
            && self.education.is_empty()
            && self.experience.is_empty()
            && self.projects.is_empty()
            && self.achievements.is_empty()
            && self.skills.is_empty()
            && self.custom_sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_is_blank() {
        let doc = ResumeDocument::default();
        assert!(doc.is_blank());
        assert_eq!(doc.template, DEFAULT_TEMPLATE_ID);
        assert_eq!(doc.accent_color, DEFAULT_ACCENT_ID);
        assert!(!doc.monochrome);
    }

    #[test]
    fn test_new_with_template_pins_template_only() {
        let doc = ResumeDocument::new_with_template("aurora");
        assert_eq!(doc.template, "aurora");
        assert!(doc.is_blank());
    }

    #[test]
    fn test_document_round_trips_through_json() {
        let mut doc = ResumeDocument::default();
        doc.personal_info.full_name = "Jane Doe".to_string();
        doc.skills.push(SkillEntry {
            id: Uuid::new_v4(),
            name: "Rust".to_string(),
            proficiency: 80,
        });

        let json = serde_json::to_value(&doc).unwrap();
        let back: ResumeDocument = serde_json::from_value(json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        // Documents stored before a field existed must still hydrate.
        let doc: ResumeDocument = serde_json::from_str("{}").unwrap();
        assert_eq!(doc.template, DEFAULT_TEMPLATE_ID);
        assert!(doc.is_blank());

        let skill: SkillEntry = serde_json::from_str(
            r#"{"id": "7f2c1a90-9a3b-4a57-8f4e-2f0f2f6b9f11", "name": "SQL"}"#,
        )
        .unwrap();
        assert_eq!(skill.proficiency, DEFAULT_PROFICIENCY);
    }
}
