// src/signals/testimonials.rs
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::consts::{TESTIMONIALS_SOME, TESTIMONIALS_STRONG};

static MENTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(testimonial|what our customers|reviews?)\b").expect("valid regex")
});
static FIVE_STAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"5\s*-?\s*star").expect("valid regex"));
static QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""[^"]{10,}""#).expect("valid regex"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialProof {
    Strong,
    Some,
    Weak,
}

impl SocialProof {
    pub fn of(hits: usize) -> Self {
        if hits >= TESTIMONIALS_STRONG {
            SocialProof::Strong
        } else if hits >= TESTIMONIALS_SOME {
            SocialProof::Some
        } else {
            SocialProof::Weak
        }
    }
}

/// Proof mentions, star ratings and quoted spans of 10+ characters on one page.
pub fn testimonial_hits(text: &str) -> usize {
    let t = text.to_lowercase().replace(['\u{201C}', '\u{201D}'], "\"");
    MENTION.find_iter(&t).count() + FIVE_STAR.find_iter(&t).count() + QUOTED.find_iter(&t).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_kind() {
        assert_eq!(testimonial_hits("Read our reviews"), 1);
        assert_eq!(testimonial_hits("Rated 5-star and 5 star"), 2);
        assert_eq!(testimonial_hits(r#""They fixed it the same day" - Jo"#), 1);
        assert_eq!(testimonial_hits(r#""Too short""#), 0);
        assert_eq!(testimonial_hits("“Honest and quick, highly recommend”"), 1);
        assert_eq!(testimonial_hits(""), 0);
    }

    #[test]
    fn thresholds() {
        assert_eq!(SocialProof::of(0), SocialProof::Weak);
        assert_eq!(SocialProof::of(2), SocialProof::Weak);
        assert_eq!(SocialProof::of(3), SocialProof::Some);
        assert_eq!(SocialProof::of(7), SocialProof::Some);
        assert_eq!(SocialProof::of(8), SocialProof::Strong);
    }
}
