// src/signals/comparison.rs
use std::sync::LazyLock;

use regex::Regex;

use crate::core::Document;

static COMPARE_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bvs\b|compare|comparison").expect("valid regex"));

/// A `<table>` somewhere on a page whose text talks about comparing.
pub fn has_comparison_table(doc: &Document) -> bool {
    doc.has("table") && COMPARE_WORDS.is_match(&doc.text().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_both_table_and_wording() {
        let both = "<h2>Acme vs the rest</h2><table><tr><td>Price</td></tr></table>";
        assert!(has_comparison_table(&Document::parse(both)));

        let words_only = "<p>Compare us with anyone.</p>";
        assert!(!has_comparison_table(&Document::parse(words_only)));

        let table_only = "<table><tr><td>Opening hours</td></tr></table>";
        assert!(!has_comparison_table(&Document::parse(table_only)));
    }

    #[test]
    fn vs_must_be_a_word() {
        let html = "<table><tr><td>Devs and ops</td></tr></table>";
        assert!(!has_comparison_table(&Document::parse(html)));

        let html = "<table><tr><th>Comparison</th></tr></table>";
        assert!(has_comparison_table(&Document::parse(html)));
    }
}
