// src/summary.rs
use std::collections::HashSet;

use reqwest::Url;
use serde::Serialize;

use crate::audit::{CategoryMap, Verdict};
use crate::config::consts::SUMMARY_LIMIT;
use crate::fetch::normalize_base;

const FALLBACK_BRAND: &str = "Your Business";

/// Strengths, weaknesses and quick wins, each capped for a one-page read.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExecutiveSummary {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub quick_wins: Vec<String>,
}

impl ExecutiveSummary {
    pub fn of(categories: &CategoryMap) -> Self {
        let mut out = Self::default();
        let mut seen = HashSet::new();

        for c in categories {
            if c.verdict == Verdict::Good {
                out.strengths.push(format!("{}: {}", c.name, c.result));
                continue;
            }
            out.weaknesses.push(format!("{}: {} - {}", c.name, c.result, c.recommendation));
            if let Some(q) = c.quick_win.as_deref().filter(|q| !q.is_empty()) {
                if seen.insert(q) {
                    out.quick_wins.push(s!(q));
                }
            }
        }

        out.strengths.truncate(SUMMARY_LIMIT);
        out.weaknesses.truncate(SUMMARY_LIMIT);
        out.quick_wins.truncate(SUMMARY_LIMIT);
        out
    }
}

/// Display name guessed from the site address: `www.acme-plumbing.com.au`
/// becomes `Acme Plumbing`.
pub fn brand_from_url(site_url: &str) -> String {
    let Some(host) = Url::parse(&normalize_base(site_url))
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
    else {
        return s!(FALLBACK_BRAND);
    };

    let host = host.strip_prefix("www.").unwrap_or(&host);
    let label = host.split('.').next().unwrap_or_default();
    if label.is_empty() {
        return s!(FALLBACK_BRAND);
    }
    title_case(&label.replace('-', " "))
}

fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => s!(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
