// src/audit/merge.rs
//! Turns site signals into categories and lays them over the baseline.
use tracing::debug;

use super::catalogue::{COMPARISON, FAQ, MOBILE, PRICING, READABILITY, SCHEMA, TESTIMONIALS, TONE};
use super::model::{Category, CategoryMap};
use crate::signals::{
    MobileSignal, PricingSignal, ReadingBand, SchemaLevel, SchemaSignal, SiteSignals, SocialProof, Tone,
};

/// Baseline with every live-detected category swapped in. Pure: the same
/// inputs always give the same map.
pub fn merge(baseline: &CategoryMap, signals: &SiteSignals) -> CategoryMap {
    let mut out = baseline.clone();
    for category in live_categories(signals) {
        debug!(category = %category.name, verdict = %category.verdict, "live override");
        out.replace(category);
    }
    out
}

/// One category per live extractor, in catalogue order.
pub fn live_categories(sig: &SiteSignals) -> Vec<Category> {
    vec![
        readability(sig.grade),
        tone(sig.tone),
        faq(sig.has_faq),
        testimonials(sig.testimonial_hits),
        comparison(sig.has_comparison),
        pricing(sig.pricing),
        schema(&sig.schema),
        mobile(sig.mobile),
    ]
}

fn readability(grade: f64) -> Category {
    match ReadingBand::of(grade) {
        ReadingBand::Clear => category!(
            READABILITY, Good,
            format!("Clear (Grade ~{grade:.1})"),
            "Keep concise structure",
            "AI prefers succinct, scannable copy.",
            "Maintain short sentences, bullets, descriptive headings.",
            "Keep hero to 2 lines plus 3 bullets",
        ),
        ReadingBand::Moderate => category!(
            READABILITY, NeedsWork,
            format!("Moderate (Grade ~{grade:.1})"),
            "Tighten copy; shorten sentences",
            "Easier reading improves chance of being quoted.",
            "Trim long sentences; add bullets to key benefits.",
            "Rewrite hero and first section",
        ),
        ReadingBand::Complex => category!(
            READABILITY, Poor,
            format!("Complex (Grade ~{grade:.1})"),
            "Simplify to about 7th grade",
            "Complex text is less likely to be quoted by AI.",
            "Shorten sentences; swap jargon for plain language.",
            "Rewrite hero and top 2 sections",
        ),
    }
}

fn tone(tone: Tone) -> Category {
    match tone {
        Tone::Third => category!(
            TONE, Good,
            "Third-person",
            "Maintain expert voice",
            "Neutral, expert tone increases trust and citations.",
            "Keep independent expert voice; avoid hype.",
            "Review About and Services for consistency",
        ),
        Tone::Mixed => category!(
            TONE, NeedsWork,
            "Mixed",
            "Normalize to expert third-person",
            "Consistency improves trust and extractability.",
            "Edit pages to one consistent expert voice.",
            "Start with homepage",
        ),
        Tone::First => category!(
            TONE, Poor,
            "First-person heavy",
            "Rewrite to third-person expert",
            "Objective tone is preferred in AI answers.",
            "Rewrite key pages to expert third-person; reduce we/our.",
            "Rewrite About and Services first",
        ),
    }
}

fn faq(found: bool) -> Category {
    if found {
        category!(
            FAQ, Good,
            "Found usable FAQs",
            "Expand over time",
            "Q&A mirrors how users ask AI questions.",
            "Add pricing/turnaround/warranty FAQs; add FAQPage schema.",
            "Add 3 FAQs to top service page",
        )
    } else {
        category!(
            FAQ, Poor,
            "No proper FAQs",
            "Add 5-10 buyer FAQs",
            "Directly fuels answer engines and rich results.",
            "Write concise Q&As; implement FAQPage schema.",
            "Publish 5 FAQs this week",
        )
    }
}

fn testimonials(hits: usize) -> Category {
    match SocialProof::of(hits) {
        SocialProof::Strong => category!(
            TESTIMONIALS, Good,
            "Strong",
            "Keep fresh and detailed",
            "Social proof boosts AI recommendations and conversions.",
            "Rotate new quotes and add case studies.",
            "Collect 2 fresh quotes monthly",
        ),
        SocialProof::Some => category!(
            TESTIMONIALS, NeedsWork,
            "Some quotes",
            "Add more plus 1-2 case studies",
            "Proof of outcomes increases trust signals.",
            "Gather 6-10 quotes; add one before/after story.",
            "Request quotes from last 10 clients",
        ),
        SocialProof::Weak => category!(
            TESTIMONIALS, Poor,
            "Missing/weak",
            "Create testimonials page plus case study",
            "AI and users rely on proof points.",
            "Collect 6-10 quotes; publish one detailed case study.",
            "Email last 10 customers for a 2-line quote",
        ),
    }
}

fn comparison(found: bool) -> Category {
    if found {
        category!(
            COMPARISON, Good,
            "Present",
            "Ensure clarity and fairness",
            "Side-by-side tables are cited in AI X vs Y.",
            "Keep factual; add features, warranty, price range.",
            "Add a row for response time",
        )
    } else {
        category!(
            COMPARISON, Poor,
            "Not found",
            "Add You vs 3 competitors table",
            "Helps AI for 'Which is best' queries.",
            "Create a 4-column table with honest comparisons.",
            "Publish /compare with 5 key rows",
        )
    }
}

fn pricing(signal: PricingSignal) -> Category {
    const WHY: &str = "Price signals help AI route high-intent users and reduce friction.";
    match signal {
        PricingSignal::Published => category!(
            PRICING, Good,
            "Prices published",
            "Keep prices current",
            WHY,
            "Review price ranges quarterly; say what each price includes.",
            "Add inclusions to the pricing block",
        ),
        PricingSignal::Mentioned => category!(
            PRICING, NeedsWork,
            "Pricing mentioned, no figures",
            "Add from pricing or ranges",
            WHY,
            "Publish from pricing or typical ranges; link to a pricing explainer.",
            "Add a 3-tier pricing block",
        ),
        PricingSignal::Hidden => category!(
            PRICING, Poor,
            "Contact us only",
            "Publish from pricing or ranges",
            WHY,
            "Add a pricing page with typical jobs and price bands.",
            "Publish 3 typical job prices",
        ),
    }
}

fn schema(signal: &SchemaSignal) -> Category {
    const WHY: &str = "Structured data helps AI understand entities, services, and proof.";
    let found = signal.types.iter().map(|t| t.label()).collect::<Vec<_>>().join(", ");
    match signal.level() {
        SchemaLevel::Complete => category!(
            SCHEMA, Good,
            format!("Structured data found ({found})"),
            "Keep schema validated",
            WHY,
            "Re-test in Rich Results after site changes; add sameAs links to major profiles.",
            "Validate schema on top 3 pages",
        ),
        SchemaLevel::Partial => category!(
            SCHEMA, NeedsWork,
            "Partial schema present",
            "Add/validate LocalBusiness, FAQPage, Review schema",
            WHY,
            "Use JSON-LD; test in Rich Results and Schema validators; add sameAs links.",
            "Add FAQPage schema to top page",
        ),
        SchemaLevel::Missing => category!(
            SCHEMA, Poor,
            "No structured data found",
            "Add LocalBusiness, FAQPage and Review schema",
            WHY,
            "Add JSON-LD for the business, its FAQs and reviews; validate before publishing.",
            "Add LocalBusiness schema to the homepage",
        ),
    }
}

fn mobile(signal: MobileSignal) -> Category {
    const WHY: &str = "Most AI-driven searches happen on mobile; poor UX kills conversions.";
    match (signal.viewport, signal.click_to_call) {
        (true, true) => category!(
            MOBILE, Good,
            "Mobile basics in place",
            "Tidy tap targets; keep CLS/LCP in check",
            WHY,
            "Compress images; lazy-load below the fold.",
            "Compress hero images, verify LCP < 2.5s",
        ),
        (true, false) => category!(
            MOBILE, NeedsWork,
            "No click-to-call link",
            "Add a tap-to-call phone link",
            WHY,
            "Wrap the phone number in a tel: link in the header and footer.",
            "Make the header phone number tappable",
        ),
        (false, true) => category!(
            MOBILE, NeedsWork,
            "Missing viewport tag",
            "Add a responsive viewport meta tag",
            WHY,
            "Add meta viewport width=device-width and check layouts on a phone.",
            "Add the viewport tag to the site template",
        ),
        (false, false) => category!(
            MOBILE, Poor,
            "No viewport or click-to-call",
            "Make the site mobile-ready",
            WHY,
            "Add a responsive viewport, a tel: link, and compress images.",
            "Add the viewport tag and a tel: link",
        ),
    }
}
