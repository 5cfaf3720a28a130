//! Shared section builders.
//!
//! Every template renders sections through these functions, so the
//! empty-collection rule lives in exactly one place: a section builder returns
//! `None` when its collection is empty, and the renderer emits nothing — no
//! orphaned headers. Missing optional fields (gpa, linkedin, dates) drop out
//! of the assembled strings rather than rendering as blanks.

use crate::document::model::{
    CustomSection, EducationEntry, ExperienceEntry, PersonalInfo, ResumeDocument, PRESENT,
};
use crate::render::theme::ColorRole;
use crate::render::tree::Block;
use crate::templates::descriptor::SkillStyle;

// ── header ──────────────────────────────────────────────────────────────────

/// Name plus a joined contact line. The header always renders; a blank name
/// still yields a Name block so the page has an anchor.
pub fn header_blocks(info: &PersonalInfo) -> Vec<Block> {
    let mut blocks = vec![Block::Name {
        text: info.full_name.clone(),
    }];

    let contact = join_present(
        &[&info.email, &info.phone, &info.location],
        "  |  ",
    );
    if !contact.is_empty() {
        blocks.push(Block::Contact { text: contact });
    }
    if !info.linkedin.is_empty() {
        blocks.push(Block::Contact {
            text: info.linkedin.clone(),
        });
    }
    blocks
}

pub fn summary_section(doc: &ResumeDocument) -> Option<Vec<Block>> {
    let summary = doc.personal_info.summary.trim();
    if summary.is_empty() {
        return None;
    }
    Some(vec![
        Block::SectionHeading {
            text: "Summary".to_string(),
        },
        Block::Paragraph {
            text: summary.to_string(),
            role: ColorRole::Body,
        },
    ])
}

// ── dated sections ──────────────────────────────────────────────────────────

pub fn experience_section(doc: &ResumeDocument) -> Option<Vec<Block>> {
    if doc.experience.is_empty() {
        return None;
    }
    let mut blocks = vec![Block::SectionHeading {
        text: "Experience".to_string(),
    }];
    for exp in &doc.experience {
        blocks.push(Block::Entry {
            title: exp.position.clone(),
            subtitle: Some(join_present(&[&exp.company, &exp.location], ", "))
                .filter(|s| !s.is_empty()),
            date: experience_dates(exp),
            body: non_empty(&exp.description),
        });
    }
    Some(blocks)
}

pub fn education_section(doc: &ResumeDocument) -> Option<Vec<Block>> {
    if doc.education.is_empty() {
        return None;
    }
    let mut blocks = vec![Block::SectionHeading {
        text: "Education".to_string(),
    }];
    for edu in &doc.education {
        blocks.push(Block::Entry {
            title: degree_line(edu),
            subtitle: non_empty(&edu.school),
            date: date_range(&edu.start_date, &edu.end_date),
            body: non_empty(&edu.gpa).map(|gpa| format!("GPA: {gpa}")),
        });
    }
    Some(blocks)
}

pub fn projects_section(doc: &ResumeDocument) -> Option<Vec<Block>> {
    if doc.projects.is_empty() {
        return None;
    }
    let mut blocks = vec![Block::SectionHeading {
        text: "Projects".to_string(),
    }];
    for proj in &doc.projects {
        let mut body = proj.description.clone();
        if !proj.link.is_empty() {
            if !body.is_empty() {
                body.push(' ');
            }
            body.push_str(&proj.link);
        }
        blocks.push(Block::Entry {
            title: proj.name.clone(),
            subtitle: non_empty(&proj.technologies),
            date: None,
            body: non_empty(&body),
        });
    }
    Some(blocks)
}

pub fn achievements_section(doc: &ResumeDocument) -> Option<Vec<Block>> {
    if doc.achievements.is_empty() {
        return None;
    }
    let mut blocks = vec![Block::SectionHeading {
        text: "Achievements".to_string(),
    }];
    for ach in &doc.achievements {
        blocks.push(Block::Entry {
            title: ach.title.clone(),
            subtitle: None,
            date: non_empty(&ach.date),
            body: non_empty(&ach.description),
        });
    }
    Some(blocks)
}

// ── skills ──────────────────────────────────────────────────────────────────

pub fn skills_section(doc: &ResumeDocument, style: SkillStyle) -> Option<Vec<Block>> {
    if doc.skills.is_empty() {
        return None;
    }
    let mut blocks = vec![Block::SectionHeading {
        text: "Skills".to_string(),
    }];
    match style {
        SkillStyle::Bars => {
            for skill in &doc.skills {
                blocks.push(Block::SkillBar {
                    name: skill.name.clone(),
                    proficiency: skill.proficiency,
                });
            }
        }
        SkillStyle::Tags => {
            blocks.push(Block::TagRow {
                tags: doc.skills.iter().map(|s| s.name.clone()).collect(),
            });
        }
        SkillStyle::Plain => {
            let joined = doc
                .skills
                .iter()
                .map(|s| s.name.as_str())
                .filter(|n| !n.is_empty())
                .collect::<Vec<_>>()
                .join(", ");
            blocks.push(Block::Paragraph {
                text: joined,
                role: ColorRole::Body,
            });
        }
    }
    Some(blocks)
}

// ── custom sections ─────────────────────────────────────────────────────────

/// One block list per custom section that has any items; titleless sections
/// fall back to a generic heading rather than an empty one.
pub fn custom_section_blocks(section: &CustomSection) -> Option<Vec<Block>> {
    if section.items.is_empty() {
        return None;
    }
    let title = if section.title.is_empty() {
        "Additional".to_string()
    } else {
        section.title.clone()
    };
    Some(vec![
        Block::SectionHeading { text: title },
        Block::BulletList {
            items: section.items.iter().map(|i| i.text.clone()).collect(),
        },
    ])
}

// ── formatting helpers ──────────────────────────────────────────────────────

/// `"{start} — {end}"`, with `"Present"` substituted for a missing end date.
/// `None` when the entry has no dates at all.
pub fn experience_dates(exp: &ExperienceEntry) -> Option<String> {
    if exp.start_date.is_empty() && exp.end_date.is_empty() && !exp.current {
        return None;
    }
    let end = if exp.end_date.is_empty() {
        PRESENT
    } else {
        exp.end_date.as_str()
    };
    Some(format!("{} — {}", exp.start_date, end))
}

fn date_range(start: &str, end: &str) -> Option<String> {
    match (start.is_empty(), end.is_empty()) {
        (true, true) => None,
        (false, true) => Some(start.to_string()),
        (true, false) => Some(end.to_string()),
        (false, false) => Some(format!("{start} — {end}")),
    }
}

fn degree_line(edu: &EducationEntry) -> String {
    match (edu.degree.is_empty(), edu.field.is_empty()) {
        (false, false) => format!("{} in {}", edu.degree, edu.field),
        (false, true) => edu.degree.clone(),
        (true, false) => edu.field.clone(),
        (true, true) => String::new(),
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

fn join_present(parts: &[&String], separator: &str) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::model::{CustomItem, SkillEntry};
    use uuid::Uuid;

    fn experience(start: &str, end: &str, current: bool) -> ExperienceEntry {
        ExperienceEntry {
            id: Uuid::new_v4(),
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            location: String::new(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            current,
            description: String::new(),
        }
    }

    #[test]
    fn test_experience_dates_substitute_present() {
        assert_eq!(
            experience_dates(&experience("Jan 2020", "", true)).unwrap(),
            "Jan 2020 — Present"
        );
        assert_eq!(
            experience_dates(&experience("Jan 2020", "Mar 2022", false)).unwrap(),
            "Jan 2020 — Mar 2022"
        );
        assert!(experience_dates(&experience("", "", false)).is_none());
    }

    #[test]
    fn test_empty_collections_yield_no_section() {
        let doc = ResumeDocument::default();
        assert!(experience_section(&doc).is_none());
        assert!(education_section(&doc).is_none());
        assert!(projects_section(&doc).is_none());
        assert!(achievements_section(&doc).is_none());
        assert!(skills_section(&doc, SkillStyle::Tags).is_none());
        assert!(summary_section(&doc).is_none());
    }

    #[test]
    fn test_education_optional_fields_render_conditionally() {
        let mut doc = ResumeDocument::default();
        doc.education.push(EducationEntry {
            id: Uuid::new_v4(),
            school: "MIT".to_string(),
            degree: "BSc".to_string(),
            field: "Physics".to_string(),
            start_date: String::new(),
            end_date: "2019".to_string(),
            gpa: String::new(),
        });

        let blocks = education_section(&doc).unwrap();
        let Block::Entry { title, date, body, .. } = &blocks[1] else {
            panic!("expected entry block");
        };
        assert_eq!(title, "BSc in Physics");
        assert_eq!(date.as_deref(), Some("2019"));
        assert!(body.is_none(), "absent GPA must not render");
    }

    #[test]
    fn test_skill_styles_share_names() {
        let mut doc = ResumeDocument::default();
        for name in ["Rust", "SQL"] {
            doc.skills.push(SkillEntry {
                id: Uuid::new_v4(),
                name: name.to_string(),
                proficiency: 70,
            });
        }

        let bars = skills_section(&doc, SkillStyle::Bars).unwrap();
        assert_eq!(bars.len(), 3); // heading + one bar per skill

        let plain = skills_section(&doc, SkillStyle::Plain).unwrap();
        let Block::Paragraph { text, .. } = &plain[1] else {
            panic!("expected paragraph");
        };
        assert_eq!(text, "Rust, SQL");
    }

    #[test]
    fn test_custom_section_without_items_is_omitted() {
        let empty = CustomSection {
            id: Uuid::new_v4(),
            title: "Languages".to_string(),
            items: Vec::new(),
        };
        assert!(custom_section_blocks(&empty).is_none());

        let with_items = CustomSection {
            id: Uuid::new_v4(),
            title: String::new(),
            items: vec![CustomItem {
                id: Uuid::new_v4(),
                text: "German".to_string(),
            }],
        };
        let blocks = custom_section_blocks(&with_items).unwrap();
        let Block::SectionHeading { text } = &blocks[0] else {
            panic!("expected heading");
        };
        assert_eq!(text, "Additional");
    }

    #[test]
    fn test_header_contact_joins_only_present_fields() {
        let info = PersonalInfo {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: String::new(),
            linkedin: String::new(),
            location: "Berlin".to_string(),
            summary: String::new(),
        };
        let blocks = header_blocks(&info);
        let Block::Contact { text } = &blocks[1] else {
            panic!("expected contact line");
        };
        assert_eq!(text, "jane@example.com  |  Berlin");
    }
}
