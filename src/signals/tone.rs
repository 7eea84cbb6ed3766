// src/signals/tone.rs
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static FIRST_PERSON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(we|our|us|i|my)\b").expect("valid regex"));
static THIRD_PERSON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(they|their|the company|the team)\b").expect("valid regex"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    First,
    Third,
    Mixed,
}

pub fn page_tone(text: &str) -> Tone {
    let t = text.to_lowercase();
    let first = FIRST_PERSON.find_iter(&t).count();
    let third = THIRD_PERSON.find_iter(&t).count();
    if third > first {
        Tone::Third
    } else if first > third {
        Tone::First
    } else {
        Tone::Mixed
    }
}

/// Strict majority of pages, otherwise mixed. No pages → mixed.
pub fn site_tone(tones: &[Tone]) -> Tone {
    let majority = |want: Tone| tones.iter().filter(|&&t| t == want).count() * 2 > tones.len();
    if majority(Tone::Third) {
        Tone::Third
    } else if majority(Tone::First) {
        Tone::First
    } else {
        Tone::Mixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_single_pages() {
        assert_eq!(page_tone("We love our customers and we call us first."), Tone::First);
        assert_eq!(page_tone("They answer fast. Their quotes are fair."), Tone::Third);
        assert_eq!(page_tone("We listen. They deliver."), Tone::Mixed);
        assert_eq!(page_tone(""), Tone::Mixed);
    }

    #[test]
    fn markers_are_whole_words() {
        // "user", "weather", "theyre" don't count
        assert_eq!(page_tone("Users check the weather; theyre fine."), Tone::Mixed);
        assert_eq!(page_tone("The Company and The Team answer."), Tone::Third);
    }

    #[test]
    fn site_needs_strict_majority() {
        use Tone::*;
        assert_eq!(site_tone(&[Third, Third, First]), Third);
        assert_eq!(site_tone(&[Third, First]), Mixed);
        assert_eq!(site_tone(&[First, First, Mixed]), First);
        assert_eq!(site_tone(&[Mixed, Third, First]), Mixed);
        assert_eq!(site_tone(&[]), Mixed);
    }
}
