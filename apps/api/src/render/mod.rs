//! Renderer: interprets a template descriptor over a document.
//!
//! `render` is pure — no I/O, no hidden state. The same `(document, options)`
//! always produces the same `VisualTree`; callers own caching decisions.

pub mod handlers;
pub mod sections;
pub mod theme;
pub mod tree;

use crate::document::model::ResumeDocument;
use crate::render::sections as sec;
use crate::render::theme::resolve_theme;
use crate::render::tree::{Block, Region, RegionKind, VisualTree};
use crate::templates::catalog;
use crate::templates::descriptor::{
    ColumnLayout, HeaderStyle, SectionKind, Side, TemplateDescriptor,
};

/// Per-render overrides, used by the preview endpoint to try templates and
/// colors without mutating the document.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub template: Option<String>,
    pub accent_color: Option<String>,
    pub monochrome: Option<bool>,
}

/// Renders the document with its own stored presentation choices.
pub fn render(doc: &ResumeDocument) -> VisualTree {
    render_with(doc, &RenderOptions::default())
}

/// Renders with optional overrides. Unknown template or accent ids fail closed
/// to their defaults; this function cannot fail.
pub fn render_with(doc: &ResumeDocument, options: &RenderOptions) -> VisualTree {
    let template_id = options.template.as_deref().unwrap_or(&doc.template);
    let descriptor = catalog::resolve(template_id);

    let accent = options.accent_color.as_deref().unwrap_or(&doc.accent_color);
    let monochrome = options.monochrome.unwrap_or(doc.monochrome);
    let theme = resolve_theme(accent, monochrome, descriptor.default_accent);

    let mut regions = vec![header_region(doc, descriptor)];

    match descriptor.layout {
        ColumnLayout::Single => {
            regions.push(Region {
                kind: RegionKind::Main,
                width_pct: 100,
                filled: false,
                blocks: section_blocks(doc, descriptor, descriptor.main_order),
            });
        }
        ColumnLayout::Sidebar {
            side,
            width_pct,
            dark,
        } => {
            let sidebar = Region {
                kind: RegionKind::Sidebar,
                width_pct,
                filled: dark,
                blocks: section_blocks(doc, descriptor, descriptor.sidebar_order),
            };
            let main = Region {
                kind: RegionKind::Main,
                width_pct: 100 - width_pct,
                filled: false,
                blocks: section_blocks(doc, descriptor, descriptor.main_order),
            };
            match side {
                Side::Left => regions.extend([sidebar, main]),
                Side::Right => regions.extend([main, sidebar]),
            }
        }
    }

    VisualTree {
        template: descriptor.id.to_string(),
        font: descriptor.font,
        theme,
        regions,
    }
}

fn header_region(doc: &ResumeDocument, descriptor: &TemplateDescriptor) -> Region {
    let mut blocks = sec::header_blocks(&doc.personal_info);
    if descriptor.header == HeaderStyle::Centered {
        blocks.push(Block::Rule);
    }
    Region {
        kind: RegionKind::Header,
        width_pct: 100,
        filled: descriptor.header == HeaderStyle::Banner,
        blocks,
    }
}

fn section_blocks(
    doc: &ResumeDocument,
    descriptor: &TemplateDescriptor,
    order: &[SectionKind],
) -> Vec<Block> {
    let mut blocks = Vec::new();
    for kind in order {
        match kind {
            SectionKind::Summary => push_section(&mut blocks, sec::summary_section(doc)),
            SectionKind::Experience => push_section(&mut blocks, sec::experience_section(doc)),
            SectionKind::Education => push_section(&mut blocks, sec::education_section(doc)),
            SectionKind::Projects => push_section(&mut blocks, sec::projects_section(doc)),
            SectionKind::Achievements => {
                push_section(&mut blocks, sec::achievements_section(doc))
            }
            SectionKind::Skills => {
                push_section(&mut blocks, sec::skills_section(doc, descriptor.skill_style))
            }
            SectionKind::Custom => {
                for section in &doc.custom_sections {
                    push_section(&mut blocks, sec::custom_section_blocks(section));
                }
            }
        }
    }
    blocks
}

fn push_section(blocks: &mut Vec<Block>, section: Option<Vec<Block>>) {
    if let Some(section_blocks) = section {
        blocks.extend(section_blocks);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::editor::{DocumentEditor, ExperiencePatch, PersonalInfoPatch, SkillPatch};
    use crate::templates::catalog::DEFAULT_TEMPLATE_ID;

    fn jane_doe() -> ResumeDocument {
        let mut doc = ResumeDocument::default();
        let mut editor = DocumentEditor::new(&mut doc);
        editor.update_personal_info(PersonalInfoPatch {
            full_name: Some("Jane Doe".to_string()),
            ..PersonalInfoPatch::default()
        });
        let exp = editor.add_experience();
        editor.update_experience(exp, ExperiencePatch {
            company: Some("Acme".to_string()),
            position: Some("Engineer".to_string()),
            start_date: Some("Jan 2020".to_string()),
            current: Some(true),
            ..ExperiencePatch::default()
        });
        editor.set_template("cosmos");
        doc
    }

    /// Tokenized, sorted words of every visible string — layout-independent
    /// view of the text a render carries.
    fn word_set(tree: &VisualTree) -> Vec<String> {
        let mut words: Vec<String> = tree
            .visible_text()
            .iter()
            .flat_map(|s| s.split([' ', ',', '|']))
            .filter(|w| !w.is_empty())
            .map(|w| w.to_string())
            .collect();
        words.sort();
        words
    }

    #[test]
    fn test_render_is_pure() {
        let doc = jane_doe();
        assert_eq!(render(&doc), render(&doc));
    }

    #[test]
    fn test_empty_document_renders_header_only_on_every_template() {
        for descriptor in crate::templates::all_templates() {
            let doc = ResumeDocument::new_with_template(descriptor.id);
            let tree = render(&doc);
            assert!(
                tree.section_headings().is_empty(),
                "{} rendered section headers for an empty document",
                descriptor.id
            );
            assert_eq!(tree.regions[0].kind, RegionKind::Header);
        }
    }

    #[test]
    fn test_jane_doe_end_to_end_on_cosmos() {
        let tree = render(&jane_doe());
        let text = tree.visible_text().join("\n");

        assert!(text.contains("Jane Doe"));
        assert!(text.contains("Acme"));
        assert!(text.contains("Engineer"));
        assert!(text.contains("Jan 2020 — Present"));
        assert!(!tree.section_headings().contains(&"Education"));
    }

    #[test]
    fn test_unknown_template_falls_back_to_default() {
        let mut doc = jane_doe();
        doc.template = "vaporwave".to_string();
        let tree = render(&doc);
        assert_eq!(tree.template, DEFAULT_TEMPLATE_ID);
    }

    #[test]
    fn test_template_changes_layout_not_text() {
        let mut doc = jane_doe();
        let mut editor = DocumentEditor::new(&mut doc);
        for name in ["Rust", "SQL", "Kubernetes"] {
            let id = editor.add_skill();
            editor.update_skill(id, SkillPatch {
                name: Some(name.to_string()),
                proficiency: None,
            });
        }

        let single = render_with(&doc, &RenderOptions {
            template: Some("cosmos".to_string()),
            ..RenderOptions::default()
        });
        let sidebar = render_with(&doc, &RenderOptions {
            template: Some("galaxy".to_string()),
            ..RenderOptions::default()
        });

        assert_ne!(single.regions.len(), sidebar.regions.len());
        assert_eq!(word_set(&single), word_set(&sidebar));
    }

    #[test]
    fn test_monochrome_identical_across_accents() {
        let doc = jane_doe();
        let a = render_with(&doc, &RenderOptions {
            accent_color: Some("blue".to_string()),
            monochrome: Some(true),
            ..RenderOptions::default()
        });
        let b = render_with(&doc, &RenderOptions {
            accent_color: Some("crimson".to_string()),
            monochrome: Some(true),
            ..RenderOptions::default()
        });
        assert_eq!(a, b);
    }

    #[test]
    fn test_accents_differ_without_monochrome() {
        let doc = jane_doe();
        let a = render_with(&doc, &RenderOptions {
            accent_color: Some("blue".to_string()),
            ..RenderOptions::default()
        });
        let b = render_with(&doc, &RenderOptions {
            accent_color: Some("crimson".to_string()),
            ..RenderOptions::default()
        });
        assert_ne!(a.theme, b.theme);
        assert_eq!(word_set(&a), word_set(&b));
    }

    #[test]
    fn test_sidebar_template_splits_regions() {
        let doc = jane_doe();
        let tree = render_with(&doc, &RenderOptions {
            template: Some("galaxy".to_string()),
            ..RenderOptions::default()
        });

        let kinds: Vec<&RegionKind> = tree.regions.iter().map(|r| &r.kind).collect();
        assert_eq!(
            kinds,
            vec![&RegionKind::Header, &RegionKind::Sidebar, &RegionKind::Main]
        );
        let widths: u8 = tree.regions[1].width_pct + tree.regions[2].width_pct;
        assert_eq!(widths, 100);
    }

    #[test]
    fn test_preview_override_does_not_touch_document() {
        let doc = jane_doe();
        let before = doc.clone();
        let _ = render_with(&doc, &RenderOptions {
            template: Some("comet".to_string()),
            accent_color: Some("amber".to_string()),
            monochrome: Some(true),
        });
        assert_eq!(doc, before);
    }
}
