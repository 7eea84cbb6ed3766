// src/signals/faq.rs
use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::FAQ_MIN_MARKERS;
use crate::core::Document;

static QUESTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bq:|\bquestion\b").expect("valid regex"));

/// `q:` / `question` tokens, disclosure widgets, and FAQPage markup.
pub fn faq_markers(doc: &Document) -> usize {
    let text = doc.text().to_lowercase();
    let tokens = QUESTION.find_iter(&text).count();
    let disclosures = doc.select("details summary").len();
    let microdata = doc.select("[itemtype*='FAQPage']").len();
    let json_ld = doc
        .select("script[type='application/ld+json']")
        .iter()
        .filter(|s| s.text().contains("FAQPage"))
        .count();
    tokens + disclosures + microdata + json_ld
}

pub fn has_faq(doc: &Document) -> bool {
    faq_markers(doc) >= FAQ_MIN_MARKERS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_marker_is_not_enough() {
        assert!(!has_faq(&Document::parse("<p>Q: Do you work weekends?</p>")));
        assert!(!has_faq(&Document::parse("<p>Any question? Call us.</p>")));
        assert!(!has_faq(&Document::parse("")));
    }

    #[test]
    fn two_markers_make_an_faq() {
        assert!(has_faq(&Document::parse("<p>Q: Weekends? A: Yes.</p><p>Q: Pricing?</p>")));
        assert!(has_faq(&Document::parse("<h2>Question</h2><p>q: how long?</p>")));
    }

    #[test]
    fn counts_disclosures_and_schema() {
        let html = r#"
            <div itemscope itemtype="https://schema.org/FAQPage">
              <details><summary>How much is a service?</summary>From $199</details>
            </div>"#;
        let doc = Document::parse(html);
        assert_eq!(faq_markers(&doc), 2);
        assert!(has_faq(&doc));

        let ld = r#"<script type="application/ld+json">{"@type":"FAQPage"}</script>
                    <details><summary>Warranty?</summary>12 months</details>"#;
        assert!(has_faq(&Document::parse(ld)));
    }

    #[test]
    fn questions_plural_is_not_a_token() {
        assert_eq!(faq_markers(&Document::parse("<p>Questions welcome</p>")), 0);
    }
}
