// src/audit/mod.rs
//! Baseline catalogue, live merge, and the pipeline that ties them together.
pub mod catalogue;
pub mod merge;
pub mod model;
pub mod pipeline;

pub use model::{AuditRun, Category, CategoryMap, LiveOutcome, Verdict};
pub use pipeline::{run_audit, Auditor};
