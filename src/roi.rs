// src/roi.rs
//! Conservative revenue projection from audit gaps.
//!
//! Every non-GOOD category is priced as a share of current monthly
//! conversions, weighted by how much that fix tends to move AI
//! recommendations. The weights are fixed data, not a fitted model.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::audit::catalogue::{
    COMPARISON, DIRECTORIES, FAQ, MOBILE, PRESS, PRICING, READABILITY, REVIEWS, SCHEMA, SERVICE_CITY,
    TESTIMONIALS, TONE,
};
use crate::audit::{CategoryMap, Verdict};
use crate::config::consts::{DEFAULT_IMPACT, UPLIFT_MULTIPLIER, WEEKS_PER_MONTH};
use crate::score::score_percent;

/// Name of the single row emitted when nothing needs fixing.
pub const ALL_GOOD: &str = "All Good";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        })
    }
}

const IMPACT_WEIGHTS: [(&str, Priority, f64); 12] = [
    (SERVICE_CITY, Priority::High, 0.40),
    (TESTIMONIALS, Priority::Medium, 0.25),
    (FAQ, Priority::Medium, 0.20),
    (COMPARISON, Priority::Medium, 0.20),
    (TONE, Priority::Medium, 0.15),
    (READABILITY, Priority::Medium, 0.15),
    (PRICING, Priority::Low, 0.10),
    (DIRECTORIES, Priority::Low, 0.10),
    (REVIEWS, Priority::Low, 0.10),
    (PRESS, Priority::Low, 0.10),
    (SCHEMA, Priority::Low, 0.10),
    (MOBILE, Priority::Low, 0.10),
];

/// Priority and impact fraction for a category; unknown names get `(Low, 0.05)`.
pub fn impact_for(name: &str) -> (Priority, f64) {
    IMPACT_WEIGHTS
        .iter()
        .find(|(n, _, _)| *n == name)
        .map(|&(_, p, w)| (p, w))
        .unwrap_or((Priority::Low, DEFAULT_IMPACT))
}

/// The three scalars the projection runs on.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BusinessInputs {
    pub avg_sale_value: f64,
    pub baseline_conv_pct: f64,
    pub monthly_visitors: f64,
}

impl Default for BusinessInputs {
    fn default() -> Self {
        Self { avg_sale_value: 500.0, baseline_conv_pct: 3.0, monthly_visitors: 300.0 }
    }
}

impl BusinessInputs {
    pub fn new(avg_sale_value: f64, baseline_conv_pct: f64, monthly_visitors: f64) -> Self {
        Self { avg_sale_value, baseline_conv_pct, monthly_visitors }.clamped()
    }

    /// Negatives (and NaN) to zero; conversion percent capped at 100.
    pub fn clamped(self) -> Self {
        Self {
            avg_sale_value: self.avg_sale_value.max(0.0),
            baseline_conv_pct: self.baseline_conv_pct.max(0.0).min(100.0),
            monthly_visitors: self.monthly_visitors.max(0.0),
        }
    }

    /// Conversions per month today.
    pub fn base_conversions(&self) -> f64 {
        self.monthly_visitors * self.baseline_conv_pct / 100.0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactRow {
    pub area: String,
    /// `None` only on the "All Good" row.
    pub priority: Option<Priority>,
    pub impact: f64,
    pub added_conversions: f64,
    pub projected_dollars: f64,
}

impl ImpactRow {
    fn all_good() -> Self {
        Self {
            area: s!(ALL_GOOD),
            priority: None,
            impact: 0.0,
            added_conversions: 0.0,
            projected_dollars: 0.0,
        }
    }

    pub fn impact_percent(&self) -> u32 {
        (self.impact * 100.0).round() as u32
    }
}

/// One row per non-GOOD category in map order, or the single "All Good" row.
pub fn impact_rows(categories: &CategoryMap, inputs: &BusinessInputs) -> Vec<ImpactRow> {
    let inputs = inputs.clamped();
    let base = inputs.base_conversions();

    let rows: Vec<ImpactRow> = categories
        .iter()
        .filter(|c| c.verdict != Verdict::Good)
        .map(|c| {
            let (priority, impact) = impact_for(&c.name);
            let added = base * impact;
            ImpactRow {
                area: c.name.clone(),
                priority: Some(priority),
                impact,
                added_conversions: added,
                projected_dollars: added * inputs.avg_sale_value,
            }
        })
        .collect();

    if rows.is_empty() { vec![ImpactRow::all_good()] } else { rows }
}

/// Score and impact table in one call.
pub fn project_roi(
    categories: &CategoryMap,
    avg_sale_value: f64,
    baseline_conv_pct: f64,
    monthly_visitors: f64,
) -> (u32, Vec<ImpactRow>) {
    let inputs = BusinessInputs::new(avg_sale_value, baseline_conv_pct, monthly_visitors);
    (score_percent(categories), impact_rows(categories, &inputs))
}

/// Revenue left on the table if AI optimisation delivers the assumed uplift.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LostOpportunity {
    pub current_monthly: f64,
    pub potential_monthly: f64,
    pub lost_monthly: f64,
    pub lost_weekly: f64,
    pub lost_yearly: f64,
}

impl LostOpportunity {
    pub fn of(inputs: &BusinessInputs) -> Self {
        let inputs = inputs.clamped();
        let current = inputs.base_conversions() * inputs.avg_sale_value;
        let potential = current * UPLIFT_MULTIPLIER;
        let lost = (potential - current).max(0.0);
        Self {
            current_monthly: current,
            potential_monthly: potential,
            lost_monthly: lost,
            lost_weekly: lost / WEEKS_PER_MONTH,
            lost_yearly: lost * 12.0,
        }
    }
}
