// src/signals/readability.rs
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::consts::{GRADE_FAIR_MAX, GRADE_GOOD_MAX};

static NON_TEXT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9.?! ]+").expect("valid regex"));
static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.?!]+").expect("valid regex"));
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));
static VOWEL_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[aeiouyAEIOUY]+").expect("valid regex"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingBand {
    Clear,
    Moderate,
    Complex,
}

impl ReadingBand {
    pub fn of(grade: f64) -> Self {
        if grade <= GRADE_GOOD_MAX {
            ReadingBand::Clear
        } else if grade <= GRADE_FAIR_MAX {
            ReadingBand::Moderate
        } else {
            ReadingBand::Complex
        }
    }
}

/// Flesch–Kincaid style grade with vowel runs standing in for syllables.
/// `0.0` when there are no words.
pub fn reading_grade(text: &str) -> f64 {
    let cleaned = NON_TEXT.replace_all(text, " ");
    let words: Vec<&str> = WORD.find_iter(&cleaned).map(|m| m.as_str()).collect();
    if words.is_empty() {
        return 0.0;
    }
    let sentences = SENTENCE_END
        .split(&cleaned)
        .filter(|s| !s.trim().is_empty())
        .count()
        .max(1);
    let syllables: usize = words.iter().map(|w| VOWEL_RUN.find_iter(w).count()).sum();

    let words_n = words.len() as f64;
    let grade = 0.39 * (words_n / sentences as f64) + 11.8 * (syllables as f64 / words_n) - 15.59;
    round1(grade)
}

/// One decimal, rounding the exact binary value: `8.05` is stored a hair
/// above 8.05, so it becomes `8.1`.
pub fn round1(x: f64) -> f64 {
    format!("{x:.1}").parse().unwrap_or(0.0)
}

/// Index of the longest text in characters; the first one wins a tie.
pub fn longest<'a, I>(texts: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(usize, usize)> = None;
    for (i, t) in texts.into_iter().enumerate() {
        let chars = t.chars().count();
        if best.is_none_or(|(_, len)| chars > len) {
            best = Some((i, chars));
        }
    }
    best.map(|(i, _)| i)
}
