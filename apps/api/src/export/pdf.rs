//! PDF composition: draws a [`VisualTree`] onto one A4 page.
//!
//! Text placement uses the static metric tables from `layout`, so wrapping
//! decisions match what the preview reported. Content that would run past the
//! bottom margin is dropped whole-block rather than clipped mid-line.

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, Point, Polygon};

use crate::errors::AppError;
use crate::layout::metrics::{get_metrics, FontMetricTable, PageConfig};
use crate::layout::wrap::{line_count, wrap_words};
use crate::layout::FontFamily;
use crate::render::theme::{ColorRole, Rgb, Theme};
use crate::render::tree::{Block, Region, RegionKind, VisualTree};

const PAGE_W_MM: f32 = 210.0;
const PAGE_H_MM: f32 = 297.0;
/// 1pt in millimetres.
const PT_MM: f32 = 0.3528;
const LINE_SPACING: f32 = 1.45;

const TRACK_GRAY: Rgb = Rgb { r: 229, g: 231, b: 235 };

/// Renders the tree into PDF bytes. Pure except for the allocation printpdf
/// does internally; never touches the filesystem.
pub fn compose_pdf(tree: &VisualTree, config: &PageConfig) -> Result<Vec<u8>, AppError> {
    let (doc, page_index, layer_index) =
        PdfDocument::new("Resume", Mm(PAGE_W_MM), Mm(PAGE_H_MM), "content");
    let layer = doc.get_page(page_index).get_layer(layer_index);

    let (regular_face, bold_face) = match tree.font {
        FontFamily::Helvetica => (BuiltinFont::Helvetica, BuiltinFont::HelveticaBold),
        FontFamily::TimesRoman => (BuiltinFont::TimesRoman, BuiltinFont::TimesBold),
    };
    let regular = doc
        .add_builtin_font(regular_face)
        .map_err(|e| AppError::Export(e.to_string()))?;
    let bold = doc
        .add_builtin_font(bold_face)
        .map_err(|e| AppError::Export(e.to_string()))?;

    let composer = Composer {
        layer,
        regular,
        bold,
        metrics: get_metrics(&tree.font),
        theme: tree.theme,
        margin: config.margin_mm,
    };
    composer.draw(tree);

    doc.save_to_bytes().map_err(|e| AppError::Export(e.to_string()))
}

struct Composer {
    layer: printpdf::PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    metrics: &'static FontMetricTable,
    theme: Theme,
    margin: f32,
}

/// One column being filled top-down.
struct Cursor {
    x: f32,
    width: f32,
    y: f32,
}

impl Composer {
    fn draw(&self, tree: &VisualTree) {
        let content_w = PAGE_W_MM - 2.0 * self.margin;
        let mut y_top = PAGE_H_MM - self.margin;

        // Header first, full width.
        if let Some(header) = tree.regions.iter().find(|r| r.kind == RegionKind::Header) {
            y_top = self.draw_header(header, y_top, content_w);
        }

        // Remaining regions split the content width left to right.
        let mut x = self.margin;
        for region in tree.regions.iter().filter(|r| r.kind != RegionKind::Header) {
            let width = content_w * region.width_pct as f32 / 100.0;
            if region.filled {
                self.fill_rect(x, self.margin, width, y_top - self.margin, self.theme.accent_primary);
            }
            let mut cursor = Cursor {
                x: x + if region.filled { 3.0 } else { 0.0 },
                width: width - if region.filled { 6.0 } else { 4.0 },
                y: y_top - 4.0,
            };
            for block in &region.blocks {
                self.draw_block(block, &mut cursor, region.filled);
            }
            x += width;
        }
    }

    fn draw_header(&self, header: &Region, y_top: f32, content_w: f32) -> f32 {
        let mut cursor = Cursor {
            x: self.margin,
            width: content_w,
            y: y_top,
        };
        if header.filled {
            // Accent band sized for name + two contact lines.
            let band_h = 30.0;
            self.fill_rect(
                self.margin - 4.0,
                y_top - band_h,
                content_w + 8.0,
                band_h + 4.0,
                self.theme.accent_primary,
            );
            cursor.x += 2.0;
            cursor.y -= 2.0;
        }
        for block in &header.blocks {
            self.draw_block(block, &mut cursor, header.filled);
        }
        cursor.y - 4.0
    }

    fn draw_block(&self, block: &Block, cursor: &mut Cursor, inverse: bool) {
        let text_color = |role: ColorRole| {
            if inverse {
                self.theme.inverse
            } else {
                self.theme.color(role)
            }
        };

        match block {
            Block::Name { text } => {
                self.draw_wrapped(cursor, text, 20.0, &self.bold, text_color(ColorRole::Body));
                cursor.y -= 1.5;
            }
            Block::Contact { text } => {
                self.draw_wrapped(cursor, text, 9.0, &self.regular, text_color(ColorRole::Muted));
            }
            Block::SectionHeading { text } => {
                cursor.y -= 2.5;
                self.draw_wrapped(cursor, text, 11.5, &self.bold, text_color(ColorRole::Accent));
                cursor.y -= 1.0;
            }
            Block::Entry {
                title,
                subtitle,
                date,
                body,
            } => {
                if let Some(date) = date {
                    // Date right-aligned on the title line.
                    let date_w = self.metrics.measure_mm(date, 9);
                    self.draw_text_at(
                        cursor.x + cursor.width - date_w,
                        cursor.y,
                        date,
                        9.0,
                        &self.regular,
                        text_color(ColorRole::Muted),
                    );
                }
                self.draw_wrapped(cursor, title, 10.5, &self.bold, text_color(ColorRole::Body));
                if let Some(subtitle) = subtitle {
                    self.draw_wrapped(
                        cursor,
                        subtitle,
                        9.5,
                        &self.regular,
                        text_color(ColorRole::AccentSecondary),
                    );
                }
                if let Some(body) = body {
                    // Drop a body that no longer fits instead of clipping it.
                    let width_em = cursor.width / (9.5 * PT_MM);
                    let needed =
                        line_count(body, self.metrics, width_em) as f32 * 9.5 * PT_MM * LINE_SPACING;
                    if cursor.y - needed > self.margin {
                        self.draw_wrapped(cursor, body, 9.5, &self.regular, text_color(ColorRole::Body));
                    }
                }
                cursor.y -= 1.5;
            }
            Block::Paragraph { text, role } => {
                self.draw_wrapped(cursor, text, 9.5, &self.regular, text_color(*role));
            }
            Block::SkillBar { name, proficiency } => {
                self.draw_wrapped(cursor, name, 9.0, &self.regular, text_color(ColorRole::Body));
                let bar_w = cursor.width * 0.85;
                let fill_w = bar_w * (*proficiency).min(100) as f32 / 100.0;
                self.fill_rect(cursor.x, cursor.y, bar_w, 1.2, TRACK_GRAY);
                let fill_color = if inverse {
                    self.theme.inverse
                } else {
                    self.theme.accent_primary
                };
                self.fill_rect(cursor.x, cursor.y, fill_w, 1.2, fill_color);
                cursor.y -= 3.0;
            }
            Block::TagRow { tags } => {
                let joined = tags.join("  ·  ");
                self.draw_wrapped(
                    cursor,
                    &joined,
                    9.0,
                    &self.regular,
                    text_color(ColorRole::AccentSecondary),
                );
            }
            Block::BulletList { items } => {
                for item in items {
                    let line = format!("• {item}");
                    self.draw_wrapped(cursor, &line, 9.5, &self.regular, text_color(ColorRole::Body));
                }
            }
            Block::Rule => {
                let color = if inverse {
                    self.theme.inverse
                } else {
                    self.theme.muted
                };
                self.fill_rect(cursor.x, cursor.y, cursor.width, 0.3, color);
                cursor.y -= 2.0;
            }
        }
    }

    /// Word-wraps and draws `text`, advancing the cursor one line at a time.
    /// Stops silently at the bottom margin.
    fn draw_wrapped(
        &self,
        cursor: &mut Cursor,
        text: &str,
        size_pt: f32,
        font: &IndirectFontRef,
        color: Rgb,
    ) {
        let line_height = size_pt * PT_MM * LINE_SPACING;
        let width_em = cursor.width / (size_pt * PT_MM);
        for line in wrap_words(text, self.metrics, width_em) {
            if cursor.y - line_height < self.margin {
                return;
            }
            cursor.y -= line_height;
            self.draw_text_at(cursor.x, cursor.y, &line, size_pt, font, color);
        }
    }

    fn draw_text_at(
        &self,
        x: f32,
        y: f32,
        text: &str,
        size_pt: f32,
        font: &IndirectFontRef,
        color: Rgb,
    ) {
        self.layer.set_fill_color(pdf_color(color));
        self.layer.use_text(text, size_pt, Mm(x), Mm(y), font);
    }

    /// Filled rectangle with `(x, y)` as its bottom-left corner.
    fn fill_rect(&self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        let points = vec![
            (Point::new(Mm(x), Mm(y)), false),
            (Point::new(Mm(x + w), Mm(y)), false),
            (Point::new(Mm(x + w), Mm(y + h)), false),
            (Point::new(Mm(x), Mm(y + h)), false),
        ];
        let rect = Polygon {
            rings: vec![points],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        };
        self.layer.set_fill_color(pdf_color(color));
        self.layer.add_polygon(rect);
    }
}

fn pdf_color(rgb: Rgb) -> Color {
    Color::Rgb(printpdf::Rgb::new(
        rgb.r as f32 / 255.0,
        rgb.g as f32 / 255.0,
        rgb.b as f32 / 255.0,
        None,
    ))
}
