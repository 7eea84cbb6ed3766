// src/report.rs
use std::fmt;

use serde::Serialize;

use crate::audit::{AuditRun, CategoryMap, LiveOutcome};
use crate::config::options::ExportFormat;
use crate::csv::to_delimited;
use crate::roi::{impact_rows, BusinessInputs, ImpactRow, LostOpportunity};
use crate::score::Scorecard;
use crate::summary::{brand_from_url, ExecutiveSummary};

pub const FINDINGS_HEADERS: [&str; 7] = [
    "Audit Area",
    "Score",
    "Result",
    "Recommendation",
    "Why it matters",
    "What to do",
    "Quick win",
];

/// Everything a report consumer needs, computed once from an `AuditRun`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AuditReport {
    pub site: String,
    pub brand: String,
    pub local_mode: bool,
    /// Pages read live; `None` when the baseline was used.
    pub live_pages: Option<usize>,
    pub fallback_reason: Option<String>,
    pub scorecard: Scorecard,
    pub categories: CategoryMap,
    pub summary: ExecutiveSummary,
    pub inputs: BusinessInputs,
    pub impact: Vec<ImpactRow>,
    pub lost_opportunity: LostOpportunity,
}

impl AuditReport {
    pub fn new(run: &AuditRun, inputs: &BusinessInputs) -> Self {
        let inputs = inputs.clamped();
        let (live_pages, fallback_reason) = match &run.live {
            LiveOutcome::Applied { pages } => (Some(*pages), None),
            LiveOutcome::Fallback(reason) => (None, Some(reason.to_string())),
        };
        Self {
            site: run.base_url.clone(),
            brand: brand_from_url(&run.base_url),
            local_mode: run.local_mode,
            live_pages,
            fallback_reason,
            scorecard: Scorecard::of(&run.categories),
            categories: run.categories.clone(),
            summary: ExecutiveSummary::of(&run.categories),
            inputs,
            impact: impact_rows(&run.categories, &inputs),
            lost_opportunity: LostOpportunity::of(&inputs),
        }
    }

    pub fn score(&self) -> u32 {
        self.scorecard.score
    }

    /// One row per category, in the column order of `FINDINGS_HEADERS`.
    pub fn findings_rows(&self) -> Vec<Vec<String>> {
        self.categories
            .iter()
            .map(|c| {
                vec![
                    c.name.clone(),
                    s!(c.verdict.code()),
                    c.result.clone(),
                    c.recommendation.clone(),
                    c.rationale.clone(),
                    c.remediation.clone(),
                    c.quick_win.clone().unwrap_or_default(),
                ]
            })
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_findings(&self, sep: char, include_headers: bool) -> String {
        let headers: Vec<String> = FINDINGS_HEADERS.iter().map(|h| s!(*h)).collect();
        let headers = include_headers.then_some(headers.as_slice());
        to_delimited(headers, &self.findings_rows(), sep)
    }

    pub fn render(&self, format: ExportFormat, include_headers: bool) -> serde_json::Result<String> {
        match (format, format.delim()) {
            (ExportFormat::Json, _) => self.to_json(),
            (_, Some(sep)) => Ok(self.to_findings(sep, include_headers)),
            _ => Ok(self.to_string()),
        }
    }
}

/// Plain-text report for the terminal.
impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let card = &self.scorecard;
        writeln!(f, "AI Search (AEO) Audit: {} ({})", self.site, self.brand)?;
        writeln!(
            f,
            "Overall AEO Readiness Score: {}% ({} good, {} needs work, {} poor)",
            card.score, card.good, card.needs_work, card.poor
        )?;
        match (&self.live_pages, &self.fallback_reason) {
            (Some(n), _) => writeln!(f, "Live check: {n} page(s) read")?,
            (None, Some(reason)) => writeln!(f, "Live check unavailable ({reason}); showing baseline findings")?,
            (None, None) => {}
        }

        writeln!(f, "\nFindings")?;
        for c in &self.categories {
            writeln!(f, "  [{:<10}] {}: {}", c.verdict.label(), c.name, c.result)?;
            writeln!(f, "               {}", c.recommendation)?;
        }

        list(f, "Strengths", &self.summary.strengths)?;
        list(f, "Weaknesses", &self.summary.weaknesses)?;
        list(f, "Quick wins (next 7 days)", &self.summary.quick_wins)?;

        let i = &self.inputs;
        writeln!(
            f,
            "\nProjected ROI (avg sale ${}, conversion {}%, {} visitors/month)",
            i.avg_sale_value, i.baseline_conv_pct, i.monthly_visitors
        )?;
        for r in &self.impact {
            let priority = r.priority.map(|p| p.to_string()).unwrap_or_else(|| s!("-"));
            writeln!(
                f,
                "  {:<30} {:<7} {:>3}%  +{:.1} conv/month  ${}/month",
                r.area,
                priority,
                r.impact_percent(),
                r.added_conversions,
                r.projected_dollars.trunc()
            )?;
        }

        let lost = &self.lost_opportunity;
        writeln!(f, "\nWhat it is costing you (estimated)")?;
        writeln!(f, "  Current monthly revenue:  ${}", lost.current_monthly.trunc())?;
        writeln!(f, "  With AI optimisation:     ${}", lost.potential_monthly.trunc())?;
        writeln!(f, "  Missing per month:        ${}", lost.lost_monthly.trunc())?;
        writeln!(f, "  Per week:                 ${}", lost.lost_weekly.trunc())?;
        writeln!(f, "  Per year:                 ${}", lost.lost_yearly.trunc())
    }
}

fn list(f: &mut fmt::Formatter<'_>, title: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(f, "\n{title}")?;
    for item in items {
        writeln!(f, "  - {item}")?;
    }
    Ok(())
}
