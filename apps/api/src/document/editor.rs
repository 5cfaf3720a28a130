//! `DocumentEditor` — the sole mutation surface over a [`ResumeDocument`].
//!
//! # Contract
//! - `add_*` appends an entity with field defaults and returns its generated id.
//! - `update_*` merges only the fields present in the patch; entities and fields
//!   it does not name are untouched. An unknown id is a silent no-op (`false`).
//! - `remove_*` deletes by id; unknown ids are a silent no-op. Survivors keep
//!   their relative order.
//! - Experience consistency: `current = true` forces `end_date = "Present"`;
//!   `current = false` clears `end_date` unless the same patch supplies one.
//!
//! Every operation is a synchronous total function. Nothing here returns
//! `Result` — a stale id arriving from a racing UI must degrade to a no-op,
//! never an error.

use serde::Deserialize;
use uuid::Uuid;

use crate::document::model::{
    AchievementEntry, CustomItem, CustomSection, EducationEntry, ExperienceEntry, PersonalInfo,
    ProjectEntry, ResumeDocument, SkillEntry, DEFAULT_PROFICIENCY, PRESENT,
};

// ────────────────────────────────────────────────────────────────────────────
// Patch types — the wire/application form of a partial update
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonalInfoPatch {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EducationPatch {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AchievementPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillPatch {
    pub name: Option<String>,
    pub proficiency: Option<u8>,
}

// ────────────────────────────────────────────────────────────────────────────
// Editor
// ────────────────────────────────────────────────────────────────────────────

/// Borrows a document mutably for the duration of an edit.
pub struct DocumentEditor<'a> {
    doc: &'a mut ResumeDocument,
}

impl<'a> DocumentEditor<'a> {
    pub fn new(doc: &'a mut ResumeDocument) -> Self {
        DocumentEditor { doc }
    }

    // ── personal info ───────────────────────────────────────────────────────

    pub fn update_personal_info(&mut self, patch: PersonalInfoPatch) {
        let info: &mut PersonalInfo = &mut self.doc.personal_info;
        merge(&mut info.full_name, patch.full_name);
        merge(&mut info.email, patch.email);
        merge(&mut info.phone, patch.phone);
        merge(&mut info.linkedin, patch.linkedin);
        merge(&mut info.location, patch.location);
        merge(&mut info.summary, patch.summary);
    }

    // ── education ───────────────────────────────────────────────────────────

    pub fn add_education(&mut self) -> Uuid {
        let id = Uuid::new_v4();
        self.doc.education.push(EducationEntry {
            id,
            school: String::new(),
            degree: String::new(),
            field: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            gpa: String::new(),
        });
        id
    }

    pub fn update_education(&mut self, id: Uuid, patch: EducationPatch) -> bool {
        let Some(entry) = find_mut(&mut self.doc.education, id, |e| e.id) else {
            return false;
        };
        merge(&mut entry.school, patch.school);
        merge(&mut entry.degree, patch.degree);
        merge(&mut entry.field, patch.field);
        merge(&mut entry.start_date, patch.start_date);
        merge(&mut entry.end_date, patch.end_date);
        merge(&mut entry.gpa, patch.gpa);
        true
    }

    pub fn remove_education(&mut self, id: Uuid) -> bool {
        remove_by_id(&mut self.doc.education, id, |e| e.id)
    }

    // ── experience ──────────────────────────────────────────────────────────

    pub fn add_experience(&mut self) -> Uuid {
        let id = Uuid::new_v4();
        self.doc.experience.push(ExperienceEntry {
            id,
            company: String::new(),
            position: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
            description: String::new(),
        });
        id
    }

    pub fn update_experience(&mut self, id: Uuid, patch: ExperiencePatch) -> bool {
        let Some(entry) = find_mut(&mut self.doc.experience, id, |e| e.id) else {
            return false;
        };
        merge(&mut entry.company, patch.company);
        merge(&mut entry.position, patch.position);
        merge(&mut entry.location, patch.location);
        merge(&mut entry.start_date, patch.start_date);
        let end_date_supplied = patch.end_date.is_some();
        merge(&mut entry.end_date, patch.end_date);

        // Keep `current` and `end_date` consistent here, not in the renderer.
        if let Some(current) = patch.current {
            entry.current = current;
            if current {
                entry.end_date = PRESENT.to_string();
            } else if !end_date_supplied {
                entry.end_date.clear();
            }
        }
        true
    }

    pub fn remove_experience(&mut self, id: Uuid) -> bool {
        remove_by_id(&mut self.doc.experience, id, |e| e.id)
    }

    // ── projects ────────────────────────────────────────────────────────────

    pub fn add_project(&mut self) -> Uuid {
        let id = Uuid::new_v4();
        self.doc.projects.push(ProjectEntry {
            id,
            name: String::new(),
            description: String::new(),
            technologies: String::new(),
            link: String::new(),
        });
        id
    }

    pub fn update_project(&mut self, id: Uuid, patch: ProjectPatch) -> bool {
        let Some(entry) = find_mut(&mut self.doc.projects, id, |e| e.id) else {
            return false;
        };
        merge(&mut entry.name, patch.name);
        merge(&mut entry.description, patch.description);
        merge(&mut entry.technologies, patch.technologies);
        merge(&mut entry.link, patch.link);
        true
    }

    pub fn remove_project(&mut self, id: Uuid) -> bool {
        remove_by_id(&mut self.doc.projects, id, |e| e.id)
    }

    // ── achievements ────────────────────────────────────────────────────────

    pub fn add_achievement(&mut self) -> Uuid {
        let id = Uuid::new_v4();
        self.doc.achievements.push(AchievementEntry {
            id,
            title: String::new(),
            description: String::new(),
            date: String::new(),
        });
        id
    }

    pub fn update_achievement(&mut self, id: Uuid, patch: AchievementPatch) -> bool {
        let Some(entry) = find_mut(&mut self.doc.achievements, id, |e| e.id) else {
            return false;
        };
        merge(&mut entry.title, patch.title);
        merge(&mut entry.description, patch.description);
        merge(&mut entry.date, patch.date);
        true
    }

    pub fn remove_achievement(&mut self, id: Uuid) -> bool {
        remove_by_id(&mut self.doc.achievements, id, |e| e.id)
    }

    // ── skills ──────────────────────────────────────────────────────────────

    pub fn add_skill(&mut self) -> Uuid {
        let id = Uuid::new_v4();
        self.doc.skills.push(SkillEntry {
            id,
            name: String::new(),
            proficiency: DEFAULT_PROFICIENCY,
        });
        id
    }

    pub fn update_skill(&mut self, id: Uuid, patch: SkillPatch) -> bool {
        let Some(entry) = find_mut(&mut self.doc.skills, id, |e| e.id) else {
            return false;
        };
        merge(&mut entry.name, patch.name);
        if let Some(p) = patch.proficiency {
            entry.proficiency = p.min(100);
        }
        true
    }

    pub fn remove_skill(&mut self, id: Uuid) -> bool {
        remove_by_id(&mut self.doc.skills, id, |e| e.id)
    }

    // ── custom sections ─────────────────────────────────────────────────────

    pub fn add_custom_section(&mut self) -> Uuid {
        let id = Uuid::new_v4();
        self.doc.custom_sections.push(CustomSection {
            id,
            title: String::new(),
            items: Vec::new(),
        });
        id
    }

    pub fn rename_custom_section(&mut self, id: Uuid, title: String) -> bool {
        let Some(section) = find_mut(&mut self.doc.custom_sections, id, |s| s.id) else {
            return false;
        };
        section.title = title;
        true
    }

    pub fn remove_custom_section(&mut self, id: Uuid) -> bool {
        remove_by_id(&mut self.doc.custom_sections, id, |s| s.id)
    }

    /// Appends an empty item to the named section. `None` if the section is gone.
    pub fn add_custom_item(&mut self, section_id: Uuid) -> Option<Uuid> {
        let section = find_mut(&mut self.doc.custom_sections, section_id, |s| s.id)?;
        let id = Uuid::new_v4();
        section.items.push(CustomItem {
            id,
            text: String::new(),
        });
        Some(id)
    }

    pub fn update_custom_item(&mut self, section_id: Uuid, item_id: Uuid, text: String) -> bool {
        let Some(section) = find_mut(&mut self.doc.custom_sections, section_id, |s| s.id) else {
            return false;
        };
        let Some(item) = find_mut(&mut section.items, item_id, |i| i.id) else {
            return false;
        };
        item.text = text;
        true
    }

    pub fn remove_custom_item(&mut self, section_id: Uuid, item_id: Uuid) -> bool {
        let Some(section) = find_mut(&mut self.doc.custom_sections, section_id, |s| s.id) else {
            return false;
        };
        remove_by_id(&mut section.items, item_id, |i| i.id)
    }

    // ── presentation options ────────────────────────────────────────────────

    pub fn set_template(&mut self, template: &str) {
        self.doc.template = template.to_string();
    }

    pub fn set_accent_color(&mut self, accent: &str) {
        self.doc.accent_color = accent.to_string();
    }

    pub fn set_monochrome(&mut self, monochrome: bool) {
        self.doc.monochrome = monochrome;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

fn merge(field: &mut String, patch: Option<String>) {
    if let Some(value) = patch {
        *field = value;
    }
}

fn find_mut<T>(items: &mut [T], id: Uuid, key: impl Fn(&T) -> Uuid) -> Option<&mut T> {
    items.iter_mut().find(|item| key(item) == id)
}

/// Removes at most one entry. `Vec::retain` would also work but scans the whole
/// vector; ids are unique within a collection, so stop at the first hit.
fn remove_by_id<T>(items: &mut Vec<T>, id: Uuid, key: impl Fn(&T) -> Uuid) -> bool {
    match items.iter().position(|item| key(item) == id) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn blank() -> ResumeDocument {
        ResumeDocument::default()
    }

    // ── add / remove symmetry ───────────────────────────────────────────────

    #[test]
    fn test_add_then_remove_restores_collection() {
        let mut doc = blank();
        let mut editor = DocumentEditor::new(&mut doc);
        let a = editor.add_skill();
        let b = editor.add_skill();
        editor.update_skill(a, SkillPatch {
            name: Some("Rust".to_string()),
            proficiency: None,
        });

        let before = doc.skills.clone();
        let mut editor = DocumentEditor::new(&mut doc);
        let c = editor.add_skill();
        assert_eq!(doc.skills.len(), 3);

        let mut editor = DocumentEditor::new(&mut doc);
        assert!(editor.remove_skill(c));
        assert_eq!(doc.skills, before);
        assert_eq!(doc.skills[0].id, a);
        assert_eq!(doc.skills[1].id, b);
    }

    #[test]
    fn test_add_generates_distinct_ids() {
        let mut doc = blank();
        let mut editor = DocumentEditor::new(&mut doc);
        let a = editor.add_education();
        let b = editor.add_education();
        let c = editor.add_education();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_add_skill_defaults() {
        let mut doc = blank();
        let id = DocumentEditor::new(&mut doc).add_skill();
        let skill = doc.skills.iter().find(|s| s.id == id).unwrap();
        assert_eq!(skill.name, "");
        assert_eq!(skill.proficiency, DEFAULT_PROFICIENCY);
    }

    // ── update non-interference ─────────────────────────────────────────────

    #[test]
    fn test_update_touches_only_named_fields() {
        let mut doc = blank();
        let mut editor = DocumentEditor::new(&mut doc);
        let id = editor.add_experience();
        editor.update_experience(id, ExperiencePatch {
            company: Some("Acme".to_string()),
            position: Some("Engineer".to_string()),
            ..ExperiencePatch::default()
        });
        editor.update_experience(id, ExperiencePatch {
            position: Some("Senior Engineer".to_string()),
            ..ExperiencePatch::default()
        });

        let exp = &doc.experience[0];
        assert_eq!(exp.company, "Acme");
        assert_eq!(exp.position, "Senior Engineer");
        assert_eq!(exp.location, "");
        assert!(!exp.current);
    }

    #[test]
    fn test_update_touches_only_named_entity() {
        let mut doc = blank();
        let mut editor = DocumentEditor::new(&mut doc);
        let a = editor.add_project();
        let b = editor.add_project();
        editor.update_project(a, ProjectPatch {
            name: Some("Orbit".to_string()),
            ..ProjectPatch::default()
        });

        assert_eq!(doc.projects[0].name, "Orbit");
        assert_eq!(doc.projects[1].name, "");
        assert_eq!(doc.projects[1].id, b);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut doc = blank();
        let mut editor = DocumentEditor::new(&mut doc);
        editor.add_achievement();
        let before = doc.clone();

        let mut editor = DocumentEditor::new(&mut doc);
        let found = editor.update_achievement(Uuid::new_v4(), AchievementPatch {
            title: Some("Ignored".to_string()),
            ..AchievementPatch::default()
        });
        assert!(!found);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut doc = blank();
        DocumentEditor::new(&mut doc).add_education();
        let before = doc.clone();

        assert!(!DocumentEditor::new(&mut doc).remove_education(Uuid::new_v4()));
        assert_eq!(doc, before);
    }

    // ── removal preserves order ─────────────────────────────────────────────

    #[test]
    fn test_remove_middle_skill_keeps_order_and_ids() {
        let mut doc = blank();
        let mut editor = DocumentEditor::new(&mut doc);
        let first = editor.add_skill();
        let second = editor.add_skill();
        let third = editor.add_skill();

        assert!(DocumentEditor::new(&mut doc).remove_skill(second));
        assert_eq!(doc.skills.len(), 2);
        assert_eq!(doc.skills[0].id, first);
        assert_eq!(doc.skills[1].id, third);
    }

    // ── experience current/end_date rule ────────────────────────────────────

    #[test]
    fn test_current_true_forces_present_sentinel() {
        let mut doc = blank();
        let mut editor = DocumentEditor::new(&mut doc);
        let id = editor.add_experience();
        editor.update_experience(id, ExperiencePatch {
            end_date: Some("Dec 2023".to_string()),
            current: Some(true),
            ..ExperiencePatch::default()
        });
        assert_eq!(doc.experience[0].end_date, PRESENT);
        assert!(doc.experience[0].current);
    }

    #[test]
    fn test_current_false_clears_end_date_when_none_supplied() {
        let mut doc = blank();
        let mut editor = DocumentEditor::new(&mut doc);
        let id = editor.add_experience();
        editor.update_experience(id, ExperiencePatch {
            current: Some(true),
            ..ExperiencePatch::default()
        });
        editor.update_experience(id, ExperiencePatch {
            current: Some(false),
            ..ExperiencePatch::default()
        });
        assert_eq!(doc.experience[0].end_date, "");
        assert!(!doc.experience[0].current);
    }

    #[test]
    fn test_current_false_accepts_explicit_end_date() {
        let mut doc = blank();
        let mut editor = DocumentEditor::new(&mut doc);
        let id = editor.add_experience();
        editor.update_experience(id, ExperiencePatch {
            current: Some(true),
            ..ExperiencePatch::default()
        });
        editor.update_experience(id, ExperiencePatch {
            current: Some(false),
            end_date: Some("Mar 2024".to_string()),
            ..ExperiencePatch::default()
        });
        assert_eq!(doc.experience[0].end_date, "Mar 2024");
    }

    // ── personal info ───────────────────────────────────────────────────────

    #[test]
    fn test_personal_info_merge_preserves_other_fields() {
        let mut doc = blank();
        let mut editor = DocumentEditor::new(&mut doc);
        editor.update_personal_info(PersonalInfoPatch {
            full_name: Some("Jane Doe".to_string()),
            email: Some("jane@example.com".to_string()),
            ..PersonalInfoPatch::default()
        });
        editor.update_personal_info(PersonalInfoPatch {
            location: Some("Berlin".to_string()),
            ..PersonalInfoPatch::default()
        });

        assert_eq!(doc.personal_info.full_name, "Jane Doe");
        assert_eq!(doc.personal_info.email, "jane@example.com");
        assert_eq!(doc.personal_info.location, "Berlin");
        assert_eq!(doc.personal_info.phone, "");
    }

    // ── custom sections ─────────────────────────────────────────────────────

    #[test]
    fn test_custom_section_item_lifecycle() {
        let mut doc = blank();
        let mut editor = DocumentEditor::new(&mut doc);
        let section = editor.add_custom_section();
        assert!(editor.rename_custom_section(section, "Languages".to_string()));

        let item = editor.add_custom_item(section).unwrap();
        assert!(editor.update_custom_item(section, item, "German (C1)".to_string()));
        assert_eq!(doc.custom_sections[0].title, "Languages");
        assert_eq!(doc.custom_sections[0].items[0].text, "German (C1)");

        let mut editor = DocumentEditor::new(&mut doc);
        assert!(editor.remove_custom_item(section, item));
        assert!(doc.custom_sections[0].items.is_empty());
    }

    #[test]
    fn test_custom_item_on_missing_section_is_noop() {
        let mut doc = blank();
        let mut editor = DocumentEditor::new(&mut doc);
        assert!(editor.add_custom_item(Uuid::new_v4()).is_none());
        assert!(!editor.update_custom_item(Uuid::new_v4(), Uuid::new_v4(), "x".to_string()));
        assert!(!editor.remove_custom_item(Uuid::new_v4(), Uuid::new_v4()));
        assert!(doc.is_blank());
    }

    // ── presentation setters ────────────────────────────────────────────────

    #[test]
    fn test_presentation_setters() {
        let mut doc = blank();
        let mut editor = DocumentEditor::new(&mut doc);
        editor.set_template("aurora");
        editor.set_accent_color("purple");
        editor.set_monochrome(true);

        assert_eq!(doc.template, "aurora");
        assert_eq!(doc.accent_color, "purple");
        assert!(doc.monochrome);
    }

    #[test]
    fn test_skill_proficiency_clamped_to_100() {
        let mut doc = blank();
        let mut editor = DocumentEditor::new(&mut doc);
        let id = editor.add_skill();
        editor.update_skill(id, SkillPatch {
            name: None,
            proficiency: Some(250),
        });
        assert_eq!(doc.skills[0].proficiency, 100);
    }
}
