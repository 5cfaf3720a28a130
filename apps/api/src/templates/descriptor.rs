//! Template descriptors — the small set of layout primitives every template
//! variant is assembled from.
//!
//! Rather than one bespoke renderer per named template, each template is
//! data: a column arrangement, a header style, a skill rendering style, a
//! section order, and listing metadata.

use serde::Serialize;

use crate::layout::FontFamily;

/// Catalog filter categories, matching the template chooser tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Professional,
    Modern,
    Creative,
    Simple,
    Ats,
    Photo,
}

impl Category {
    pub fn parse(s: &str) -> Option<Category> {
        match s {
            "professional" => Some(Category::Professional),
            "modern" => Some(Category::Modern),
            "creative" => Some(Category::Creative),
            "simple" => Some(Category::Simple),
            "ats" => Some(Category::Ats),
            "photo" => Some(Category::Photo),
            _ => None,
        }
    }
}

/// Which side a sidebar sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

/// Column arrangement of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ColumnLayout {
    /// One full-width column.
    Single,
    /// Narrow sidebar next to the main column. `dark` sidebars get the accent
    /// background with light text.
    Sidebar { side: Side, width_pct: u8, dark: bool },
}

/// How the personal-info header renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderStyle {
    /// Name and contact line centered over a rule.
    Centered,
    /// Full-width accent band with light text.
    Banner,
    /// Name left, contact details right.
    Split,
}

/// How the skills collection renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillStyle {
    /// Name plus a proficiency bar.
    Bars,
    /// Pill-shaped tags, proficiency ignored.
    Tags,
    /// Comma-joined plain text (the ATS-safest form).
    Plain,
}

/// The renderable sections, in the vocabulary of the section-order lists.
/// `Custom` is a placeholder for all user-defined sections in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Projects,
    Achievements,
    Skills,
    Custom,
}

/// One catalog entry. `'static` throughout — the catalog is compiled in.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub categories: &'static [Category],
    pub font: FontFamily,
    pub layout: ColumnLayout,
    pub header: HeaderStyle,
    pub skill_style: SkillStyle,
    /// Sections in the main column, in order.
    pub main_order: &'static [SectionKind],
    /// Sections in the sidebar; empty for single-column layouts.
    pub sidebar_order: &'static [SectionKind],
    /// Accent palette used when the document's accent id is unknown.
    pub default_accent: &'static str,
    pub ats_optimized: bool,
    pub rating: f32,
    /// Download count in thousands, for the listing score.
    pub downloads_k: u16,
}

impl TemplateDescriptor {
    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    pub fn has_sidebar(&self) -> bool {
        matches!(self.layout, ColumnLayout::Sidebar { .. })
    }
}
