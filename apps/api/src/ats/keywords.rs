//! Keyword inventory extraction from job-description text.
//!
//! Pure string processing: lowercase tokenization, a stopword filter, term
//! frequency, and a position weight that favors terms introduced early (title
//! and requirements come before the about-us boilerplate in most postings).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single keyword, weighted by frequency and position of first mention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub frequency: u32,
    /// 1.0 for the first third of the text, 0.8 middle, 0.6 tail.
    pub position_weight: f32,
    /// frequency × position_weight
    pub weighted_score: f32,
}

/// Words that carry no signal in a job description.
const STOPWORDS: &[&str] = &[
    "a", "able", "about", "across", "after", "all", "an", "and", "any", "are", "as", "at", "be",
    "been", "before", "being", "best", "between", "both", "but", "by", "can", "candidate",
    "candidates", "company", "do", "each", "etc", "excellent", "experience", "for", "from", "good",
    "has", "have", "how", "if", "in", "into", "is", "it", "its", "join", "looking", "may", "more",
    "most", "must", "new", "nice", "no", "not", "of", "on", "only", "or", "other", "our", "over",
    "own", "plus", "preferred", "required", "requirements", "responsibilities", "role", "same",
    "should", "skills", "so", "some", "strong", "such", "team", "than", "that", "the", "their",
    "them", "then", "they", "this", "to", "too", "under", "us", "very", "we", "well", "what",
    "when", "where", "while", "who", "will", "with", "within", "without", "work", "working",
    "would", "year", "years", "you", "your",
];

/// Splits text into candidate keyword tokens. Keeps `+` and `#` so "c++" and
/// "c#" survive, drops everything shorter than two characters or purely numeric.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
        .filter(|t| t.len() >= 2)
        .filter(|t| !t.chars().all(|c| c.is_ascii_digit()))
        .map(|t| t.to_string())
        .collect()
}

fn is_stopword(token: &str) -> bool {
    STOPWORDS.binary_search(&token).is_ok()
}

/// Builds the keyword inventory for a job description, sorted by weighted
/// score descending. Empty or all-stopword input yields an empty inventory.
pub fn extract_keywords(jd_text: &str) -> Vec<KeywordEntry> {
    let tokens = tokenize(jd_text);
    if tokens.is_empty() {
        return Vec::new();
    }

    let total = tokens.len();
    let mut frequency: HashMap<&str, u32> = HashMap::new();
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    for (index, token) in tokens.iter().enumerate() {
        if is_stopword(token) {
            continue;
        }
        *frequency.entry(token.as_str()).or_insert(0) += 1;
        first_seen.entry(token.as_str()).or_insert(index);
    }

    let mut inventory: Vec<KeywordEntry> = frequency
        .into_iter()
        .map(|(keyword, freq)| {
            let position = first_seen[keyword] as f32 / total as f32;
            let position_weight = if position < 1.0 / 3.0 {
                1.0
            } else if position < 2.0 / 3.0 {
                0.8
            } else {
                0.6
            };
            KeywordEntry {
                keyword: keyword.to_string(),
                frequency: freq,
                position_weight,
                weighted_score: freq as f32 * position_weight,
            }
        })
        .collect();

    inventory.sort_by(|a, b| {
        b.weighted_score
            .partial_cmp(&a.weighted_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.keyword.cmp(&b.keyword))
    });
    inventory
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopwords_are_sorted_for_binary_search() {
        let mut sorted = STOPWORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, STOPWORDS);
    }

    #[test]
    fn test_tokenize_keeps_cpp_and_csharp() {
        let tokens = tokenize("We use C++, C# and Rust (1.75)");
        assert!(tokens.contains(&"c++".to_string()));
        assert!(tokens.contains(&"c#".to_string()));
        assert!(tokens.contains(&"rust".to_string()));
        assert!(!tokens.contains(&"75".to_string()), "pure numbers dropped");
    }

    #[test]
    fn test_extract_filters_stopwords_and_counts() {
        let inventory = extract_keywords("Rust and Rust and the Rust with kubernetes");
        let rust = inventory.iter().find(|k| k.keyword == "rust").unwrap();
        assert_eq!(rust.frequency, 3);
        assert!(inventory.iter().all(|k| k.keyword != "and"));
        assert!(inventory.iter().all(|k| k.keyword != "the"));
    }

    #[test]
    fn test_early_keywords_weigh_more() {
        let filler = "collaborative environment benefits ".repeat(20);
        let jd = format!("Rust engineer wanted. {filler} kubernetes");
        let inventory = extract_keywords(&jd);

        let rust = inventory.iter().find(|k| k.keyword == "rust").unwrap();
        let k8s = inventory.iter().find(|k| k.keyword == "kubernetes").unwrap();
        assert!(rust.position_weight > k8s.position_weight);
    }

    #[test]
    fn test_empty_input_yields_empty_inventory() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("the and of with").is_empty());
    }

    #[test]
    fn test_inventory_sorted_by_weighted_score() {
        let inventory = extract_keywords("postgres postgres postgres redis redis kafka");
        let scores: Vec<f32> = inventory.iter().map(|k| k.weighted_score).collect();
        let mut sorted = scores.clone();
        sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
        assert_eq!(scores, sorted);
    }
}
