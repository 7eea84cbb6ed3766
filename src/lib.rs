// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod progress;

pub mod fetch;
pub mod signals;
pub mod audit;

pub mod score;
pub mod roi;
pub mod summary;

pub mod csv;
pub mod file;
pub mod report;

#[cfg(feature = "cli")]
pub mod cli;

pub use audit::{run_audit, AuditRun, Auditor, Category, CategoryMap, LiveOutcome, Verdict};
pub use roi::{project_roi, BusinessInputs, ImpactRow, Priority};
