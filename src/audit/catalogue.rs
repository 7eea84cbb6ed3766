// src/audit/catalogue.rs
//! Fixed default answers, one per category, in report order.
use std::sync::LazyLock;

use super::model::CategoryMap;

pub const READABILITY: &str = "Home Page Readability";
pub const TONE: &str = "AI Tone of Voice";
pub const SERVICE_CITY: &str = "Service-in-City Pages";
pub const FAQ: &str = "FAQ Depth";
pub const TESTIMONIALS: &str = "Testimonials & Case Studies";
pub const COMPARISON: &str = "Comparison Table";
pub const PRICING: &str = "Pricing Transparency";
pub const DIRECTORIES: &str = "Local & Directory Profiles";
pub const REVIEWS: &str = "Reviews Quantity & Rating";
pub const PRESS: &str = "Press / Best Of Mentions";
pub const SCHEMA: &str = "Technical Markup (Schema)";
pub const MOBILE: &str = "Mobile UX & Speed";

/// Category names in report order.
pub const ORDER: [&str; 12] = [
    READABILITY, TONE, SERVICE_CITY, FAQ, TESTIMONIALS, COMPARISON,
    PRICING, DIRECTORIES, REVIEWS, PRESS, SCHEMA, MOBILE,
];

/// Locality wording. Changes prose only, never a verdict.
struct Locale {
    geo_example: &'static str,
    directories: &'static str,
    review_focus: &'static str,
    press_note: &'static str,
}

const LOCAL: Locale = Locale {
    geo_example: "Mechanic in Upwey",
    directories: "Google Business Profile, Bing Places, Yellow Pages AU",
    review_focus: "Google and Yelp AU (and ProductReview.com.au)",
    press_note: "local Best Of lists, community news, and suburb blogs",
};

const GENERIC: Locale = Locale {
    geo_example: "Best [Service] in [City]",
    directories: "Google Business Profile, Bing Places, industry directories",
    review_focus: "Google, Yelp, niche review sites",
    press_note: "regional Best Of lists and industry roundups",
};

static LOCAL_BASELINE: LazyLock<CategoryMap> = LazyLock::new(|| build(&LOCAL));
static GENERIC_BASELINE: LazyLock<CategoryMap> = LazyLock::new(|| build(&GENERIC));

/// The default map for a site we could not (or did not) read.
pub fn baseline(local_mode: bool) -> CategoryMap {
    if local_mode { LOCAL_BASELINE.clone() } else { GENERIC_BASELINE.clone() }
}

fn build(loc: &Locale) -> CategoryMap {
    CategoryMap::new(vec![
        category!(
            READABILITY, NeedsWork,
            "Average clarity",
            "Tighten copy; shorter sentences",
            "AI answers prefer concise, plain-language summaries they can quote quickly.",
            "Target ~7th-grade reading, add bullets above the fold.",
            "Rewrite hero in bullets",
        ),
        category!(
            TONE, NeedsWork,
            "Mixed (first-person + promo)",
            "Rewrite in third-person expert voice",
            "Neutral expert tone increases trust and likelihood of citation by AI systems.",
            "Rewrite key pages as if an independent expert is recommending you; avoid hype.",
            "Rewrite About and Services",
        ),
        category!(
            SERVICE_CITY, Poor,
            "Missing dedicated pages",
            format!("Create location pages (e.g., {})", loc.geo_example),
            "Dedicated service+city pages feed AI with precise local answers and intent signals.",
            "For each suburb/city: 2 short paragraphs, 1 local testimonial, contact CTA, and LocalBusiness + FAQ schema.",
            "Draft 3 suburb pages and link in footer",
        ),
        category!(
            FAQ, NeedsWork,
            "A few basic FAQs",
            "Add 5-10 buyer FAQs with concise answers",
            "Q&A blocks map directly to how users ask AI and power rich answers.",
            "Add pricing/turnaround/warranty/service-area FAQs; add FAQPage schema.",
            "Add 5 FAQs to a top service page",
        ),
        category!(
            TESTIMONIALS, Poor,
            "Weak social proof",
            "Create testimonials page and 1-2 case studies",
            "Social proof is a strong recommendation signal for AI and a conversion driver for humans.",
            "Collect 6-10 quotes with names/suburbs; add a Results story with before/after.",
            "Email last 10 customers for quotes",
        ),
        category!(
            COMPARISON, Poor,
            "No competitor comparison",
            "Add a simple comparison table (You vs 3 competitors)",
            "Side-by-side comparisons are frequently quoted in AI X vs Y.",
            "4 columns: You vs 3 competitors; rows: features, warranty, response time, price band, reviews.",
            "Publish /compare with 5 key rows",
        ),
        category!(
            PRICING, NeedsWork,
            "Contact us only",
            "Add from pricing or ranges",
            "Price signals help AI route high-intent users and reduce friction.",
            "Publish from pricing or typical ranges; link to a pricing explainer.",
            "Add a 3-tier pricing block",
        ),
        category!(
            DIRECTORIES, NeedsWork,
            "Partially completed profiles",
            format!("Complete {} and keep NAP consistent", loc.directories),
            "Consistent profiles and citations strengthen local entity understanding for AI and maps.",
            "Ensure name-address-phone matches everywhere; add categories, services, photos, hours.",
            "Verify Google Business Profile and add 5 photos",
        ),
        category!(
            REVIEWS, NeedsWork,
            "Low review volume",
            format!("Increase {}; ask after completed jobs", loc.review_focus),
            "Review volume and recency heavily influence AI recommendations.",
            "Automate review requests by SMS/email post-job; add Review schema.",
            "Send review request to last 20 customers",
        ),
        category!(
            PRESS, Poor,
            "No third-party mentions",
            format!("Pitch inclusion in {}", loc.press_note),
            "Third-party mentions validate authority; AI tools lean on them to avoid bias.",
            "Pitch bloggers/journalists; publish Best of [Category] in [City] with clear criteria.",
            "Write a press release about a win",
        ),
        category!(
            SCHEMA, NeedsWork,
            "Partial schema present",
            "Add/validate LocalBusiness, FAQPage, Review schema",
            "Structured data helps AI understand entities, services, and proof.",
            "Use JSON-LD; test in Rich Results and Schema validators; add sameAs links.",
            "Add FAQPage schema to top page",
        ),
        category!(
            MOBILE, Good,
            "Passable mobile UX",
            "Tidy tap targets; keep CLS/LCP in check",
            "Most AI-driven searches happen on mobile; poor UX kills conversions.",
            "Ensure click-to-call is 1 tap; compress images; lazy-load below the fold.",
            "Compress hero images, verify LCP < 2.5s",
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Verdict::{self, *};

    #[test]
    fn twelve_in_order() {
        let map = baseline(true);
        assert_eq!(map.names().collect::<Vec<_>>(), ORDER.to_vec());
    }

    #[test]
    fn default_verdicts() {
        let got: Vec<Verdict> = baseline(true).iter().map(|c| c.verdict).collect();
        let want = [
            NeedsWork, NeedsWork, Poor, NeedsWork, Poor, Poor,
            NeedsWork, NeedsWork, NeedsWork, Poor, NeedsWork, Good,
        ];
        assert_eq!(got, want);
    }

    #[test]
    fn locality_changes_prose_not_verdicts() {
        let local = baseline(true);
        let generic = baseline(false);

        for (l, g) in local.iter().zip(generic.iter()) {
            assert_eq!(l.name, g.name);
            assert_eq!(l.verdict, g.verdict);
        }

        let rec = |m: &CategoryMap| m.get(SERVICE_CITY).map(|c| c.recommendation.clone()).unwrap_or_default();
        assert!(rec(&local).contains("Mechanic in Upwey"));
        assert!(rec(&generic).contains("Best [Service] in [City]"));
    }

    #[test]
    fn every_entry_has_a_quick_win() {
        assert!(baseline(false).iter().all(|c| c.quick_win.as_deref().is_some_and(|q| !q.is_empty())));
    }
}
