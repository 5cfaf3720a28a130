//! Wire form of the editor operations.
//!
//! The UI dispatches one [`EditOp`] per user action; the handler applies them
//! in arrival order through [`DocumentEditor`]. Unknown-id operations report
//! `found = false` but never fail the request.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::document::editor::{
    AchievementPatch, DocumentEditor, EducationPatch, ExperiencePatch, PersonalInfoPatch,
    ProjectPatch, SkillPatch,
};
use crate::document::model::ResumeDocument;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOp {
    UpdatePersonalInfo { patch: PersonalInfoPatch },

    AddEducation,
    UpdateEducation { id: Uuid, patch: EducationPatch },
    RemoveEducation { id: Uuid },

    AddExperience,
    UpdateExperience { id: Uuid, patch: ExperiencePatch },
    RemoveExperience { id: Uuid },

    AddProject,
    UpdateProject { id: Uuid, patch: ProjectPatch },
    RemoveProject { id: Uuid },

    AddAchievement,
    UpdateAchievement { id: Uuid, patch: AchievementPatch },
    RemoveAchievement { id: Uuid },

    AddSkill,
    UpdateSkill { id: Uuid, patch: SkillPatch },
    RemoveSkill { id: Uuid },

    AddCustomSection,
    RenameCustomSection { id: Uuid, title: String },
    RemoveCustomSection { id: Uuid },
    AddCustomItem { section_id: Uuid },
    UpdateCustomItem { section_id: Uuid, item_id: Uuid, text: String },
    RemoveCustomItem { section_id: Uuid, item_id: Uuid },

    SetTemplate { template: String },
    SetAccentColor { accent: String },
    SetMonochrome { monochrome: bool },
}

/// What an applied operation did.
#[derive(Debug, Clone, Serialize)]
pub struct EditOutcome {
    /// Id of the entity created by an `Add*` op, if any.
    pub created_id: Option<Uuid>,
    /// False when the op referenced an id that no longer exists.
    pub found: bool,
}

impl EditOutcome {
    fn created(id: Uuid) -> Self {
        EditOutcome {
            created_id: Some(id),
            found: true,
        }
    }

    fn applied(found: bool) -> Self {
        EditOutcome {
            created_id: None,
            found,
        }
    }
}

/// Applies a single operation to the document.
pub fn apply(doc: &mut ResumeDocument, op: EditOp) -> EditOutcome {
    let mut editor = DocumentEditor::new(doc);
    match op {
        EditOp::UpdatePersonalInfo { patch } => {
            editor.update_personal_info(patch);
            EditOutcome::applied(true)
        }

        EditOp::AddEducation => EditOutcome::created(editor.add_education()),
        EditOp::UpdateEducation { id, patch } => {
            EditOutcome::applied(editor.update_education(id, patch))
        }
        EditOp::RemoveEducation { id } => EditOutcome::applied(editor.remove_education(id)),

        EditOp::AddExperience => EditOutcome::created(editor.add_experience()),
        EditOp::UpdateExperience { id, patch } => {
            EditOutcome::applied(editor.update_experience(id, patch))
        }
        EditOp::RemoveExperience { id } => EditOutcome::applied(editor.remove_experience(id)),

        EditOp::AddProject => EditOutcome::created(editor.add_project()),
        EditOp::UpdateProject { id, patch } => {
            EditOutcome::applied(editor.update_project(id, patch))
        }
        EditOp::RemoveProject { id } => EditOutcome::applied(editor.remove_project(id)),

        EditOp::AddAchievement => EditOutcome::created(editor.add_achievement()),
        EditOp::UpdateAchievement { id, patch } => {
            EditOutcome::applied(editor.update_achievement(id, patch))
        }
        EditOp::RemoveAchievement { id } => EditOutcome::applied(editor.remove_achievement(id)),

        EditOp::AddSkill => EditOutcome::created(editor.add_skill()),
        EditOp::UpdateSkill { id, patch } => EditOutcome::applied(editor.update_skill(id, patch)),
        EditOp::RemoveSkill { id } => EditOutcome::applied(editor.remove_skill(id)),

        EditOp::AddCustomSection => EditOutcome::created(editor.add_custom_section()),
        EditOp::RenameCustomSection { id, title } => {
            EditOutcome::applied(editor.rename_custom_section(id, title))
        }
        EditOp::RemoveCustomSection { id } => {
            EditOutcome::applied(editor.remove_custom_section(id))
        }
        EditOp::AddCustomItem { section_id } => match editor.add_custom_item(section_id) {
            Some(id) => EditOutcome::created(id),
            None => EditOutcome::applied(false),
        },
        EditOp::UpdateCustomItem {
            section_id,
            item_id,
            text,
        } => EditOutcome::applied(editor.update_custom_item(section_id, item_id, text)),
        EditOp::RemoveCustomItem {
            section_id,
            item_id,
        } => EditOutcome::applied(editor.remove_custom_item(section_id, item_id)),

        EditOp::SetTemplate { template } => {
            editor.set_template(&template);
            EditOutcome::applied(true)
        }
        EditOp::SetAccentColor { accent } => {
            editor.set_accent_color(&accent);
            EditOutcome::applied(true)
        }
        EditOp::SetMonochrome { monochrome } => {
            editor.set_monochrome(monochrome);
            EditOutcome::applied(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_op_returns_created_id() {
        let mut doc = ResumeDocument::default();
        let outcome = apply(&mut doc, EditOp::AddExperience);
        let id = outcome.created_id.expect("add must return an id");
        assert!(doc.experience.iter().any(|e| e.id == id));
    }

    #[test]
    fn test_update_op_with_stale_id_reports_not_found() {
        let mut doc = ResumeDocument::default();
        let before = doc.clone();
        let outcome = apply(
            &mut doc,
            EditOp::RemoveSkill { id: Uuid::new_v4() },
        );
        assert!(!outcome.found);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_ops_deserialize_from_tagged_json() {
        let op: EditOp = serde_json::from_str(r#"{"op": "add_skill"}"#).unwrap();
        assert!(matches!(op, EditOp::AddSkill));

        let op: EditOp = serde_json::from_str(
            r#"{"op": "set_template", "template": "pulsar"}"#,
        )
        .unwrap();
        let mut doc = ResumeDocument::default();
        apply(&mut doc, op);
        assert_eq!(doc.template, "pulsar");
    }

    #[test]
    fn test_update_op_merges_patch_fields() {
        let mut doc = ResumeDocument::default();
        let id = apply(&mut doc, EditOp::AddExperience).created_id.unwrap();

        let op: EditOp = serde_json::from_str(&format!(
            r#"{{"op": "update_experience", "id": "{id}",
                "patch": {{"company": "Acme", "current": true}}}}"#
        ))
        .unwrap();
        let outcome = apply(&mut doc, op);

        assert!(outcome.found);
        assert_eq!(doc.experience[0].company, "Acme");
        assert_eq!(doc.experience[0].end_date, "Present");
    }
}
