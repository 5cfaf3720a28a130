// Page geometry and text measurement for the PDF exporter.
// Static metric tables trade exact glyph shaping for zero I/O; the exporter's
// margins absorb the residual error.

pub mod metrics;
pub mod wrap;

pub use metrics::{default_page_config, FontFamily, FontMetricTable, PageConfig};
pub use wrap::wrap_words;
