// src/audit/model.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AuditError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Good,
    NeedsWork,
    Poor,
}

impl Verdict {
    pub fn points(self) -> u32 {
        match self {
            Verdict::Good => 2,
            Verdict::NeedsWork => 1,
            Verdict::Poor => 0,
        }
    }

    /// Stable machine code, same as the serialized form.
    pub fn code(self) -> &'static str {
        match self {
            Verdict::Good => "GOOD",
            Verdict::NeedsWork => "NEEDS_WORK",
            Verdict::Poor => "POOR",
        }
    }

    /// Human label for plain-text output.
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Good => "Good",
            Verdict::NeedsWork => "Needs work",
            Verdict::Poor => "Poor",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One audit dimension. Replaced whole, never patched field by field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub verdict: Verdict,
    pub result: String,
    pub recommendation: String,
    /// "Why it matters"
    pub rationale: String,
    /// "What to do"
    pub remediation: String,
    pub quick_win: Option<String>,
}

/// Ordered categories keyed by name. Order is the catalogue's and is kept
/// through replacement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryMap {
    entries: Vec<Category>,
}

impl CategoryMap {
    pub fn new(entries: Vec<Category>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.entries.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.entries.iter().find(|c| c.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|c| c.name.as_str())
    }

    /// Swap in `category` where its name already sits. Unknown names are
    /// ignored: the catalogue defines the key set. Returns whether it replaced.
    pub fn replace(&mut self, category: Category) -> bool {
        match self.entries.iter_mut().find(|c| c.name == category.name) {
            Some(slot) => {
                *slot = category;
                true
            }
            None => false,
        }
    }
}

impl<'a> IntoIterator for &'a CategoryMap {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// How the live phase ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LiveOutcome {
    /// Detector results replaced their baseline entries.
    Applied { pages: usize },
    /// Nothing live survived; the map is the pure baseline.
    Fallback(AuditError),
}

impl LiveOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, LiveOutcome::Applied { .. })
    }
}

/// One invocation: inputs, final categories, score. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditRun {
    pub base_url: String,
    pub local_mode: bool,
    pub categories: CategoryMap,
    pub score: u32,
    pub live: LiveOutcome,
}
