// src/signals/markup.rs
// Structured data, pricing and mobile heuristics. Cheap presence checks only.
use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::consts::SCHEMA_TYPES_GOOD;
use crate::core::Document;

static PRICE_AMOUNT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\s?\d").expect("valid regex"));
static PRICE_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(from \$|starting at|per hour|pricing|price list)").expect("valid regex")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum SchemaType {
    LocalBusiness,
    FaqPage,
    Review,
}

impl SchemaType {
    pub fn label(self) -> &'static str {
        match self {
            SchemaType::LocalBusiness => "LocalBusiness",
            SchemaType::FaqPage => "FAQPage",
            SchemaType::Review => "Review",
        }
    }

    fn scan(markup: &str, into: &mut BTreeSet<SchemaType>) {
        if markup.contains("LocalBusiness") {
            into.insert(SchemaType::LocalBusiness);
        }
        if markup.contains("FAQPage") {
            into.insert(SchemaType::FaqPage);
        }
        if markup.contains("Review") || markup.contains("AggregateRating") {
            into.insert(SchemaType::Review);
        }
    }
}

/// JSON-LD blocks and microdata scopes, with the schema types they name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SchemaSignal {
    pub blocks: usize,
    pub types: BTreeSet<SchemaType>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaLevel {
    Missing,
    Partial,
    Complete,
}

impl SchemaSignal {
    pub fn of(doc: &Document) -> Self {
        let mut sig = SchemaSignal::default();
        for script in doc.select("script[type='application/ld+json']") {
            let body = script.text();
            if body.is_empty() {
                continue;
            }
            sig.blocks += 1;
            SchemaType::scan(&body, &mut sig.types);
        }
        for scope in doc.select("[itemtype]") {
            sig.blocks += 1;
            if let Some(t) = scope.attr("itemtype") {
                SchemaType::scan(t, &mut sig.types);
            }
        }
        sig
    }

    pub fn merge(mut self, other: SchemaSignal) -> Self {
        self.blocks += other.blocks;
        self.types.extend(other.types);
        self
    }

    pub fn level(&self) -> SchemaLevel {
        if self.blocks == 0 {
            SchemaLevel::Missing
        } else if self.types.len() >= SCHEMA_TYPES_GOOD {
            SchemaLevel::Complete
        } else {
            SchemaLevel::Partial
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingSignal {
    Hidden,
    Mentioned,
    Published,
}

impl PricingSignal {
    /// Dollar amounts beat pricing words; best page wins across a site.
    pub fn of(text: &str) -> Self {
        let t = text.to_lowercase();
        if PRICE_AMOUNT.is_match(&t) {
            PricingSignal::Published
        } else if PRICE_WORDS.is_match(&t) {
            PricingSignal::Mentioned
        } else {
            PricingSignal::Hidden
        }
    }
}

/// Viewport meta and a click-to-call link, each seen on any page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MobileSignal {
    pub viewport: bool,
    pub click_to_call: bool,
}

impl MobileSignal {
    pub fn of(doc: &Document) -> Self {
        Self {
            viewport: doc.has("meta[name='viewport']"),
            click_to_call: doc.has("a[href^='tel:']"),
        }
    }

    pub fn merge(self, other: MobileSignal) -> Self {
        Self {
            viewport: self.viewport || other.viewport,
            click_to_call: self.click_to_call || other.click_to_call,
        }
    }

    pub fn checks_passed(&self) -> usize {
        usize::from(self.viewport) + usize::from(self.click_to_call)
    }
}
