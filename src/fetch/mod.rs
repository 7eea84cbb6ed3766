// src/fetch/mod.rs
//! Candidate discovery and polite, sequential page retrieval.
//!
//! ```text
//! plan::plan(base, max) → Fetcher::fetch_all → FetchedPages (successes only, plan order)
//! ```
//! One request at a time with a fixed pause after each, whatever the outcome.
//! Failures are recorded per URL and never abort the batch.
pub mod plan;
pub mod fetcher;

pub use plan::{normalize_base, plan};
pub use fetcher::{FetchResult, FetchedPages, Fetcher, PageOutcome};
