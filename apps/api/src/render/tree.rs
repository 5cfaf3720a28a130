//! The `VisualTree` — the renderer's output and the exporter's input.
//!
//! A tree is plain serializable data: regions in paint order, each a flat list
//! of blocks. It carries the resolved theme so consumers never re-derive
//! colors from the document.

use serde::Serialize;

use crate::layout::FontFamily;
use crate::render::theme::{ColorRole, Theme};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    /// Personal info. Always present, always first.
    Header,
    Sidebar,
    Main,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub kind: RegionKind,
    /// Share of the page width, 1–100. Regions on one row sum to 100.
    pub width_pct: u8,
    /// Accent-filled background; text inside uses the inverse role.
    pub filled: bool,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// The person's name, largest type on the page.
    Name { text: String },
    /// Joined contact details (email, phone, location, linkedin).
    Contact { text: String },
    SectionHeading { text: String },
    /// One dated entry: a job, a degree, a project, an award.
    Entry {
        title: String,
        subtitle: Option<String>,
        date: Option<String>,
        body: Option<String>,
    },
    Paragraph { text: String, role: ColorRole },
    SkillBar { name: String, proficiency: u8 },
    TagRow { tags: Vec<String> },
    BulletList { items: Vec<String> },
    Rule,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualTree {
    /// Resolved template id (after any unknown-id fallback).
    pub template: String,
    pub font: FontFamily,
    pub theme: Theme,
    pub regions: Vec<Region>,
}

impl VisualTree {
    /// All section headings in paint order. Empty collections never produce one.
    pub fn section_headings(&self) -> Vec<&str> {
        self.regions
            .iter()
            .flat_map(|r| r.blocks.iter())
            .filter_map(|b| match b {
                Block::SectionHeading { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every piece of user-visible text, in paint order. Used by tests and the
    /// plain-text extraction the ATS flow runs on rendered resumes.
    pub fn visible_text(&self) -> Vec<String> {
        let mut out = Vec::new();
        for region in &self.regions {
            for block in &region.blocks {
                match block {
                    Block::Name { text }
                    | Block::Contact { text }
                    | Block::SectionHeading { text }
                    | Block::Paragraph { text, .. } => out.push(text.clone()),
                    Block::Entry {
                        title,
                        subtitle,
                        date,
                        body,
                    } => {
                        out.push(title.clone());
                        out.extend(subtitle.clone());
                        out.extend(date.clone());
                        out.extend(body.clone());
                    }
                    Block::SkillBar { name, .. } => out.push(name.clone()),
                    Block::TagRow { tags } => out.extend(tags.iter().cloned()),
                    Block::BulletList { items } => out.extend(items.iter().cloned()),
                    Block::Rule => {}
                }
            }
        }
        out
    }
}
