//! Greedy word-wrap over the static metric tables.
//!
//! A word wider than the whole line gets a line of its own rather than being
//! split mid-glyph; long URLs overflow into the margin instead of corrupting
//! the line grid.

use crate::layout::metrics::FontMetricTable;

/// Wraps `text` into lines of at most `max_width_em`, splitting on whitespace.
/// Runs of whitespace collapse to a single space. Empty input yields no lines.
pub fn wrap_words(text: &str, metrics: &FontMetricTable, max_width_em: f32) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in words {
        let word_width = metrics.measure_str(word);

        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        if current_width + metrics.space_width + word_width > max_width_em {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        } else {
            current.push(' ');
            current.push_str(word);
            current_width += metrics.space_width + word_width;
        }
    }
    lines.push(current);

    lines
}

/// Number of printed lines `text` occupies at `max_width_em`.
pub fn line_count(text: &str, metrics: &FontMetricTable, max_width_em: f32) -> usize {
    wrap_words(text, metrics, max_width_em).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::metrics::{get_metrics, FontFamily};

    fn helvetica() -> &'static FontMetricTable {
        get_metrics(&FontFamily::Helvetica)
    }

    #[test]
    fn test_empty_text_yields_no_lines() {
        assert!(wrap_words("", helvetica(), 40.0).is_empty());
        assert!(wrap_words("   ", helvetica(), 40.0).is_empty());
        assert_eq!(line_count("", helvetica(), 40.0), 0);
    }

    #[test]
    fn test_short_text_stays_on_one_line() {
        let lines = wrap_words("Senior Engineer", helvetica(), 40.0);
        assert_eq!(lines, vec!["Senior Engineer".to_string()]);
    }

    #[test]
    fn test_long_text_wraps_and_preserves_words() {
        let text = "Architected a distributed caching layer and reduced p99 latency \
                    across five production services by forty percent";
        let lines = wrap_words(text, helvetica(), 20.0);
        assert!(lines.len() > 1);

        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_no_line_exceeds_width_except_single_oversized_word() {
        let metrics = helvetica();
        let max = 12.0;
        let lines = wrap_words("plain words plus an extraordinarily-long-hyphenated-token here", metrics, max);
        for line in &lines {
            if line.contains(' ') {
                assert!(metrics.measure_str(line) <= max + 0.01, "line too wide: {line}");
            }
        }
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        let lines = wrap_words("a   b\t\tc", helvetica(), 40.0);
        assert_eq!(lines, vec!["a b c".to_string()]);
    }
}
