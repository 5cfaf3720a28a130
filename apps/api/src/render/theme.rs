//! Accent palettes and the monochrome override.
//!
//! A theme is resolved once per render from the document's accent id and
//! monochrome flag; blocks reference color roles, so the exporter never sees a
//! raw accent id.

use serde::{Deserialize, Serialize};

/// Accent palette used when a document carries no (or an unknown) accent id
/// and the template descriptor declares no preference.
pub const DEFAULT_ACCENT_ID: &str = "blue";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// Resolved colors for one render. Identical `(accent, monochrome)` input
/// always yields an identical theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub accent_primary: Rgb,
    pub accent_secondary: Rgb,
    pub body: Rgb,
    pub muted: Rgb,
    /// Text color on accent-filled backgrounds (banners, dark sidebars).
    pub inverse: Rgb,
}

/// Roles blocks refer to instead of raw colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    Accent,
    AccentSecondary,
    Body,
    Muted,
    Inverse,
}

impl Theme {
    pub fn color(&self, role: ColorRole) -> Rgb {
        match role {
            ColorRole::Accent => self.accent_primary,
            ColorRole::AccentSecondary => self.accent_secondary,
            ColorRole::Body => self.body,
            ColorRole::Muted => self.muted,
            ColorRole::Inverse => self.inverse,
        }
    }
}

struct AccentPalette {
    id: &'static str,
    primary: Rgb,
    secondary: Rgb,
}

static PALETTES: &[AccentPalette] = &[
    AccentPalette {
        id: "blue",
        primary: Rgb::new(59, 130, 246),
        secondary: Rgb::new(30, 64, 175),
    },
    AccentPalette {
        id: "purple",
        primary: Rgb::new(139, 92, 246),
        secondary: Rgb::new(91, 33, 182),
    },
    AccentPalette {
        id: "emerald",
        primary: Rgb::new(16, 185, 129),
        secondary: Rgb::new(6, 95, 70),
    },
    AccentPalette {
        id: "crimson",
        primary: Rgb::new(220, 38, 38),
        secondary: Rgb::new(127, 29, 29),
    },
    AccentPalette {
        id: "amber",
        primary: Rgb::new(245, 158, 11),
        secondary: Rgb::new(146, 64, 14),
    },
    AccentPalette {
        id: "slate",
        primary: Rgb::new(71, 85, 105),
        secondary: Rgb::new(30, 41, 59),
    },
];

const BODY: Rgb = Rgb::new(31, 41, 55);
const MUTED: Rgb = Rgb::new(107, 114, 128);
const INVERSE: Rgb = Rgb::new(255, 255, 255);

/// Neutral palette applied whenever monochrome is on, regardless of accent id.
const MONO_PRIMARY: Rgb = Rgb::new(33, 33, 33);
const MONO_SECONDARY: Rgb = Rgb::new(97, 97, 97);

/// Resolves a theme. Unknown accent ids fall back to `fallback_accent` (the
/// template's default), then to [`DEFAULT_ACCENT_ID`].
pub fn resolve_theme(accent_id: &str, monochrome: bool, fallback_accent: &str) -> Theme {
    if monochrome {
        return Theme {
            accent_primary: MONO_PRIMARY,
            accent_secondary: MONO_SECONDARY,
            body: BODY,
            muted: MUTED,
            inverse: INVERSE,
        };
    }

    let palette = find_palette(accent_id)
        .or_else(|| find_palette(fallback_accent))
        .or_else(|| find_palette(DEFAULT_ACCENT_ID))
        .expect("default accent palette must exist");

    Theme {
        accent_primary: palette.primary,
        accent_secondary: palette.secondary,
        body: BODY,
        muted: MUTED,
        inverse: INVERSE,
    }
}

fn find_palette(id: &str) -> Option<&'static AccentPalette> {
    PALETTES.iter().find(|p| p.id == id)
}

/// All selectable accent ids, for the options endpoint/UI.
pub fn accent_ids() -> Vec<&'static str> {
    PALETTES.iter().map(|p| p.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_accent_resolves() {
        let theme = resolve_theme("purple", false, "blue");
        assert_eq!(theme.accent_primary, Rgb::new(139, 92, 246));
    }

    #[test]
    fn test_unknown_accent_falls_back_to_template_default() {
        let theme = resolve_theme("chartreuse", false, "emerald");
        assert_eq!(theme.accent_primary, Rgb::new(16, 185, 129));
    }

    #[test]
    fn test_unknown_fallback_lands_on_default_palette() {
        let theme = resolve_theme("nope", false, "also-nope");
        let default = resolve_theme(DEFAULT_ACCENT_ID, false, DEFAULT_ACCENT_ID);
        assert_eq!(theme, default);
    }

    #[test]
    fn test_monochrome_ignores_accent_entirely() {
        let a = resolve_theme("blue", true, "blue");
        let b = resolve_theme("crimson", true, "amber");
        assert_eq!(a, b);
        assert_eq!(a.accent_primary, MONO_PRIMARY);
    }

    #[test]
    fn test_accent_ids_nonempty_and_unique() {
        let ids = accent_ids();
        assert!(ids.contains(&DEFAULT_ACCENT_ID));
        let mut dedup = ids.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), ids.len());
    }
}
