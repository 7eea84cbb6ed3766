// src/fetch/plan.rs
use std::collections::HashSet;

use crate::config::consts::{CANDIDATE_PATHS, DEFAULT_SCHEME};

/// Trim, default to `https://` when no http(s) scheme is given, drop trailing slashes.
pub fn normalize_base(url: &str) -> String {
    let t = url.trim();
    let lc = t.to_ascii_lowercase();
    let with_scheme = if lc.starts_with("http://") || lc.starts_with("https://") {
        s!(t)
    } else {
        format!("{DEFAULT_SCHEME}{t}")
    };
    with_scheme.trim_end_matches('/').to_string()
}

/// Absolute candidate URLs for `base_url`: fixed paths, first-seen order,
/// no duplicates, at most `max_pages`. Pure; no network.
pub fn plan(base_url: &str, max_pages: usize) -> Vec<String> {
    let base = normalize_base(base_url);
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(CANDIDATE_PATHS.len());
    for path in CANDIDATE_PATHS {
        let url = format!("{base}{path}");
        if seen.insert(url.clone()) {
            out.push(url);
        }
    }
    out.truncate(max_pages);
    out
}
