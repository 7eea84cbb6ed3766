// src/signals/mod.rs
//! # Content signal extractors
//!
//! Each submodule reads **one kind of evidence** out of already-fetched pages
//! and reduces it to a small value the merger can turn into a verdict.
//!
//! ## What lives here
//! - **Pure functions** over `core::html::Document` or plain text. No network,
//!   no clock, no shared state; the same pages always give the same signals.
//! - **Lexical counts only**: word-boundary regexes, vowel runs, tag presence.
//!   Nothing here tries to understand the copy.
//! - **Site-level reduction** (`SiteSignals::from_documents`): how per-page
//!   values combine (longest page, majority, any, sum, union).
//!
//! ## What does **not** live here
//! - **Verdict prose** – the merger (`audit::merge`) owns the wording.
//! - **Fetching** – `fetch` hands over the pages once; extractors never ask for more.
//!
//! ## Conventions & invariants
//! - **Total**: empty or broken markup returns the neutral value (`0.0`, `Mixed`,
//!   `false`, `0`), never an error.
//! - Text is lowercased before token matching; markup queries go through
//!   `Document::select`.
//!
//! ## Current extractors
//! - `readability` – reading grade of the longest page.
//! - `tone` – first vs third person, majority across pages.
//! - `faq` – question tokens, disclosure widgets, FAQPage markup.
//! - `testimonials` – proof mentions, star ratings, quoted spans, summed.
//! - `comparison` – a table plus comparison wording.
//! - `markup` – structured data, pricing, mobile basics.
pub mod readability;
pub mod tone;
pub mod faq;
pub mod testimonials;
pub mod comparison;
pub mod markup;

use serde::Serialize;

use crate::core::Document;
use crate::fetch::FetchedPages;

pub use markup::{MobileSignal, PricingSignal, SchemaLevel, SchemaSignal, SchemaType};
pub use readability::ReadingBand;
pub use testimonials::SocialProof;
pub use tone::Tone;

/// Everything the merger needs, reduced to site level.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SiteSignals {
    pub pages: usize,
    pub grade: f64,
    pub tone: Tone,
    pub has_faq: bool,
    pub testimonial_hits: usize,
    pub has_comparison: bool,
    pub schema: SchemaSignal,
    pub pricing: PricingSignal,
    pub mobile: MobileSignal,
}

impl SiteSignals {
    /// `None` when there is nothing to read.
    pub fn from_pages(pages: &FetchedPages) -> Option<Self> {
        let docs: Vec<Document> = pages.iter().map(|(_, body)| Document::parse(body)).collect();
        Self::from_documents(&docs)
    }

    pub fn from_documents(docs: &[Document]) -> Option<Self> {
        let longest = readability::longest(docs.iter().map(|d| d.text()))?;
        let grade = readability::reading_grade(docs[longest].text());

        let tones: Vec<Tone> = docs.iter().map(|d| tone::page_tone(d.text())).collect();

        let schema = docs
            .iter()
            .map(SchemaSignal::of)
            .fold(SchemaSignal::default(), SchemaSignal::merge);
        let mobile = docs
            .iter()
            .map(MobileSignal::of)
            .fold(MobileSignal::default(), MobileSignal::merge);
        let pricing = docs
            .iter()
            .map(|d| PricingSignal::of(d.text()))
            .max()
            .unwrap_or(PricingSignal::Hidden);

        Some(Self {
            pages: docs.len(),
            grade,
            tone: tone::site_tone(&tones),
            has_faq: docs.iter().any(faq::has_faq),
            testimonial_hits: docs.iter().map(|d| testimonials::testimonial_hits(d.text())).sum(),
            has_comparison: docs.iter().any(comparison::has_comparison_table),
            schema,
            pricing,
            mobile,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_pages_no_signals() {
        assert!(SiteSignals::from_pages(&FetchedPages::default()).is_none());
    }

    #[test]
    fn site_reduction() {
        let pages: FetchedPages = vec![
            (s!("https://a.com/"), s!("<p>We are great. We are the best.</p>")),
            (
                s!("https://a.com/about"),
                s!("<p>They answer the phone. Their team is \"friendly and fast every time\". Read the reviews.</p>"),
            ),
            (s!("https://a.com/faq"), s!("<p>They cover Q: hours and Q: prices from $80.</p>")),
        ]
        .into_iter()
        .collect();

        let sig = SiteSignals::from_pages(&pages).expect("pages present");
        assert_eq!(sig.pages, 3);
        assert_eq!(sig.tone, Tone::Third);
        assert!(sig.has_faq);
        assert_eq!(sig.testimonial_hits, 2);
        assert!(!sig.has_comparison);
        assert_eq!(sig.pricing, PricingSignal::Published);
        assert_eq!(sig.schema.level(), SchemaLevel::Missing);
        // grade comes from the about page, the longest text
        let about = Document::parse(pages.get("https://a.com/about").unwrap_or_default());
        assert_eq!(sig.grade, readability::reading_grade(about.text()));
    }
}
