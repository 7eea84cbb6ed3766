// src/score.rs
use serde::Serialize;

use crate::audit::{CategoryMap, Verdict};

/// Readiness percent: points over the maximum, rounded half to even. Empty map scores 0.
pub fn score_percent(categories: &CategoryMap) -> u32 {
    if categories.is_empty() {
        return 0;
    }
    let total: u32 = categories.iter().map(|c| c.verdict.points()).sum();
    let max = 2 * categories.len() as u32;
    (f64::from(total) / f64::from(max) * 100.0).round_ties_even() as u32
}

/// Score plus per-verdict counts, for dashboards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Scorecard {
    pub score: u32,
    pub good: usize,
    pub needs_work: usize,
    pub poor: usize,
}

impl Scorecard {
    pub fn of(categories: &CategoryMap) -> Self {
        let mut card = Scorecard { score: score_percent(categories), ..Default::default() };
        for c in categories {
            match c.verdict {
                Verdict::Good => card.good += 1,
                Verdict::NeedsWork => card.needs_work += 1,
                Verdict::Poor => card.poor += 1,
            }
        }
        card
    }

    pub fn total(&self) -> usize {
        self.good + self.needs_work + self.poor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{catalogue, Category};

    fn all(verdict: Verdict) -> CategoryMap {
        CategoryMap::new(
            catalogue::baseline(true)
                .iter()
                .cloned()
                .map(|c| Category { verdict, ..c })
                .collect(),
        )
    }

    #[test]
    fn extremes() {
        assert_eq!(score_percent(&all(Verdict::Good)), 100);
        assert_eq!(score_percent(&all(Verdict::Poor)), 0);
        assert_eq!(score_percent(&all(Verdict::NeedsWork)), 50);
        assert_eq!(score_percent(&CategoryMap::default()), 0);
    }

    #[test]
    fn baseline_is_38() {
        // 9 of 24 points is 37.5, which rounds to even
        assert_eq!(score_percent(&catalogue::baseline(true)), 38);
    }

    #[test]
    fn scorecard_counts() {
        let card = Scorecard::of(&catalogue::baseline(false));
        assert_eq!((card.good, card.needs_work, card.poor), (1, 7, 4));
        assert_eq!(card.total(), 12);
        assert_eq!(card.score, 38);
    }
}
