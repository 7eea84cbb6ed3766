// src/config/consts.rs

// Net config
pub const DEFAULT_SCHEME: &str = "https://";
pub const DEFAULT_USER_AGENT: &str = "ReviewMate-AEO/1.0 (+https://reviewmate.example)";
pub const FALLBACK_USER_AGENT: &str = "Mozilla/5.0 (compatible; ReviewMateAuditBot/1.0)";
pub const ACCEPT_LANGUAGE: &str = "en-AU,en;q=0.9";
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

// Crawl plan
pub const CANDIDATE_PATHS: &[&str] = &[
    "/", "/about", "/services", "/service", "/faq", "/faqs",
    "/testimonials", "/reviews", "/pricing", "/compare", "/contact",
];
pub const MAX_PAGES: usize = 8;

// Politeness: one request at a time, fixed pause after each
pub const REQUEST_PAUSE_MS: u64 = 500;

// Readability bands (grade level)
pub const GRADE_GOOD_MAX: f64 = 8.0;
pub const GRADE_FAIR_MAX: f64 = 10.0;

// Detector thresholds
pub const FAQ_MIN_MARKERS: usize = 2;
pub const TESTIMONIALS_STRONG: usize = 8;
pub const TESTIMONIALS_SOME: usize = 3;
pub const SCHEMA_TYPES_GOOD: usize = 2;

// ROI model
pub const UPLIFT_MULTIPLIER: f64 = 4.4;
pub const WEEKS_PER_MONTH: f64 = 4.345;
pub const DEFAULT_IMPACT: f64 = 0.05;
pub const SUMMARY_LIMIT: usize = 6;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "aeo_audit";
pub const DEFAULT_LOG_FILE: &str = "aeo_audit.log";
