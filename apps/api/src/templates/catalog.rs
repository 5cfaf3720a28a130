//! The compiled-in template catalog.
//!
//! Ids are stable and referenced by stored documents, so entries are never
//! renamed, only added. Unknown ids resolve to [`DEFAULT_TEMPLATE_ID`] —
//! a stored document must keep rendering even if its template is retired.

use crate::layout::FontFamily;
use crate::templates::descriptor::{
    Category, ColumnLayout, HeaderStyle, SectionKind, Side, SkillStyle, TemplateDescriptor,
};

/// Fallback for unknown template ids: the most conservative, ATS-safe entry.
pub const DEFAULT_TEMPLATE_ID: &str = "cosmos";

use Category::*;
use SectionKind::*;

const SINGLE_ORDER: &[SectionKind] = &[
    Summary,
    Experience,
    Education,
    Projects,
    Achievements,
    Skills,
    Custom,
];

const MAIN_ORDER: &[SectionKind] = &[Summary, Experience, Projects, Education, Custom];
const SIDEBAR_ORDER: &[SectionKind] = &[Skills, Achievements];

static CATALOG: &[TemplateDescriptor] = &[
    TemplateDescriptor {
        id: "galaxy",
        name: "Galaxy",
        categories: &[Photo, Professional, Modern],
        font: FontFamily::Helvetica,
        layout: ColumnLayout::Sidebar {
            side: Side::Left,
            width_pct: 33,
            dark: true,
        },
        header: HeaderStyle::Banner,
        skill_style: SkillStyle::Bars,
        main_order: MAIN_ORDER,
        sidebar_order: SIDEBAR_ORDER,
        default_accent: "blue",
        ats_optimized: false,
        rating: 4.9,
        downloads_k: 12,
    },
    TemplateDescriptor {
        id: "cosmos",
        name: "Cosmos",
        categories: &[Professional, Ats, Simple],
        font: FontFamily::Helvetica,
        layout: ColumnLayout::Single,
        header: HeaderStyle::Centered,
        skill_style: SkillStyle::Plain,
        main_order: SINGLE_ORDER,
        sidebar_order: &[],
        default_accent: "slate",
        ats_optimized: true,
        rating: 4.9,
        downloads_k: 20,
    },
    TemplateDescriptor {
        id: "pulsar",
        name: "Pulsar",
        categories: &[Simple, Ats, Professional],
        font: FontFamily::TimesRoman,
        layout: ColumnLayout::Single,
        header: HeaderStyle::Split,
        skill_style: SkillStyle::Plain,
        main_order: SINGLE_ORDER,
        sidebar_order: &[],
        default_accent: "slate",
        ats_optimized: true,
        rating: 4.8,
        downloads_k: 15,
    },
    TemplateDescriptor {
        id: "lunar",
        name: "Lunar",
        categories: &[Professional, Modern],
        font: FontFamily::Helvetica,
        layout: ColumnLayout::Sidebar {
            side: Side::Right,
            width_pct: 30,
            dark: false,
        },
        header: HeaderStyle::Split,
        skill_style: SkillStyle::Tags,
        main_order: MAIN_ORDER,
        sidebar_order: SIDEBAR_ORDER,
        default_accent: "blue",
        ats_optimized: true,
        rating: 4.7,
        downloads_k: 8,
    },
    TemplateDescriptor {
        id: "aurora",
        name: "Aurora",
        categories: &[Modern, Professional],
        font: FontFamily::Helvetica,
        layout: ColumnLayout::Single,
        header: HeaderStyle::Banner,
        skill_style: SkillStyle::Tags,
        main_order: SINGLE_ORDER,
        sidebar_order: &[],
        default_accent: "emerald",
        ats_optimized: true,
        rating: 4.8,
        downloads_k: 11,
    },
    TemplateDescriptor {
        id: "eclipse",
        name: "Eclipse",
        categories: &[Photo, Simple],
        font: FontFamily::TimesRoman,
        layout: ColumnLayout::Single,
        header: HeaderStyle::Centered,
        skill_style: SkillStyle::Tags,
        main_order: SINGLE_ORDER,
        sidebar_order: &[],
        default_accent: "purple",
        ats_optimized: false,
        rating: 4.5,
        downloads_k: 4,
    },
    TemplateDescriptor {
        id: "nebula",
        name: "Nebula",
        categories: &[Modern, Professional],
        font: FontFamily::Helvetica,
        layout: ColumnLayout::Sidebar {
            side: Side::Left,
            width_pct: 30,
            dark: false,
        },
        header: HeaderStyle::Split,
        skill_style: SkillStyle::Bars,
        main_order: MAIN_ORDER,
        sidebar_order: SIDEBAR_ORDER,
        default_accent: "purple",
        ats_optimized: true,
        rating: 4.7,
        downloads_k: 9,
    },
    TemplateDescriptor {
        id: "solstice",
        name: "Solstice",
        categories: &[Simple, Ats],
        font: FontFamily::TimesRoman,
        layout: ColumnLayout::Single,
        header: HeaderStyle::Centered,
        skill_style: SkillStyle::Plain,
        main_order: SINGLE_ORDER,
        sidebar_order: &[],
        default_accent: "slate",
        ats_optimized: true,
        rating: 4.6,
        downloads_k: 10,
    },
    TemplateDescriptor {
        id: "comet",
        name: "Comet",
        categories: &[Modern, Photo],
        font: FontFamily::Helvetica,
        layout: ColumnLayout::Sidebar {
            side: Side::Right,
            width_pct: 33,
            dark: true,
        },
        header: HeaderStyle::Banner,
        skill_style: SkillStyle::Bars,
        main_order: MAIN_ORDER,
        sidebar_order: SIDEBAR_ORDER,
        default_accent: "crimson",
        ats_optimized: false,
        rating: 4.5,
        downloads_k: 5,
    },
    TemplateDescriptor {
        id: "celestial",
        name: "Celestial",
        categories: &[Ats, Simple, Professional],
        font: FontFamily::Helvetica,
        layout: ColumnLayout::Single,
        header: HeaderStyle::Split,
        skill_style: SkillStyle::Plain,
        main_order: SINGLE_ORDER,
        sidebar_order: &[],
        default_accent: "blue",
        ats_optimized: true,
        rating: 4.7,
        downloads_k: 13,
    },
    TemplateDescriptor {
        id: "astral",
        name: "Astral",
        categories: &[Photo, Modern],
        font: FontFamily::Helvetica,
        layout: ColumnLayout::Sidebar {
            side: Side::Left,
            width_pct: 35,
            dark: false,
        },
        header: HeaderStyle::Banner,
        skill_style: SkillStyle::Tags,
        main_order: MAIN_ORDER,
        sidebar_order: SIDEBAR_ORDER,
        default_accent: "amber",
        ats_optimized: false,
        rating: 4.6,
        downloads_k: 6,
    },
    TemplateDescriptor {
        id: "astralis",
        name: "Astralis",
        categories: &[Modern, Photo],
        font: FontFamily::Helvetica,
        layout: ColumnLayout::Sidebar {
            side: Side::Left,
            width_pct: 35,
            dark: true,
        },
        header: HeaderStyle::Banner,
        skill_style: SkillStyle::Tags,
        main_order: MAIN_ORDER,
        sidebar_order: SIDEBAR_ORDER,
        default_accent: "amber",
        ats_optimized: false,
        rating: 4.4,
        downloads_k: 3,
    },
];

/// All catalog entries in listing order.
pub fn all_templates() -> &'static [TemplateDescriptor] {
    CATALOG
}

/// Exact lookup by id.
pub fn lookup(id: &str) -> Option<&'static TemplateDescriptor> {
    CATALOG.iter().find(|t| t.id == id)
}

/// Lookup that fails closed: unknown ids resolve to the default template.
pub fn resolve(id: &str) -> &'static TemplateDescriptor {
    lookup(id).unwrap_or_else(|| {
        lookup(DEFAULT_TEMPLATE_ID).expect("default template must exist in catalog")
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Listing score
// ────────────────────────────────────────────────────────────────────────────

/// Metadata-only ranking heuristic for the template listing page.
///
/// Base score plus tiered bonuses for download volume and rating, a flat bonus
/// for ATS-optimized templates, and a small boost per category keyword.
/// Capped at 100. Unrelated to scoring any actual resume content.
pub fn listing_score(descriptor: &TemplateDescriptor) -> u8 {
    let mut score: u32 = 60;

    score += match descriptor.downloads_k {
        15.. => 12,
        10..=14 => 9,
        5..=9 => 6,
        _ => 3,
    };

    score += if descriptor.rating >= 4.8 {
        12
    } else if descriptor.rating >= 4.6 {
        8
    } else {
        4
    };

    if descriptor.ats_optimized {
        score += 10;
    }

    score += descriptor.categories.len() as u32 * 2;

    score.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<&str> = CATALOG.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn test_lookup_known_id() {
        let t = lookup("galaxy").expect("galaxy exists");
        assert_eq!(t.name, "Galaxy");
    }

    #[test]
    fn test_resolve_unknown_id_falls_back_to_default() {
        let t = resolve("does-not-exist");
        assert_eq!(t.id, DEFAULT_TEMPLATE_ID);
    }

    #[test]
    fn test_resolve_known_id_is_not_default() {
        assert_eq!(resolve("aurora").id, "aurora");
    }

    #[test]
    fn test_default_template_is_ats_safe() {
        let t = resolve(DEFAULT_TEMPLATE_ID);
        assert!(t.ats_optimized);
        assert!(!t.has_sidebar());
    }

    #[test]
    fn test_sidebar_templates_declare_sidebar_sections() {
        for t in all_templates() {
            if t.has_sidebar() {
                assert!(
                    !t.sidebar_order.is_empty(),
                    "{} has a sidebar but no sidebar sections",
                    t.id
                );
            } else {
                assert!(t.sidebar_order.is_empty(), "{} declares unused sidebar sections", t.id);
            }
        }
    }

    #[test]
    fn test_listing_score_bounds() {
        for t in all_templates() {
            let score = listing_score(t);
            assert!((60..=100).contains(&score), "{}: {score}", t.id);
        }
    }

    #[test]
    fn test_ats_flag_raises_listing_score() {
        let cosmos = lookup("cosmos").unwrap();
        let astralis = lookup("astralis").unwrap();
        assert!(listing_score(cosmos) > listing_score(astralis));
    }
}
