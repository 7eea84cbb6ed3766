// tests/pipeline_e2e.rs
mod common;

use aeo_audit::audit::catalogue::{self, COMPARISON, FAQ, PRESS, REVIEWS, TONE};
use aeo_audit::config::consts::{DEFAULT_USER_AGENT, FALLBACK_USER_AGENT};
use aeo_audit::error::AuditError;
use aeo_audit::progress::NullProgress;
use aeo_audit::{LiveOutcome, Verdict};

use common::{auditor, FakeSite, Recorder, ANSWER_READY_HOME};

#[test]
fn unreachable_site_in_local_mode_is_pure_baseline() {
    let site = FakeSite::new();
    let run = auditor().run("acme-autos.com.au", true, &site, &mut NullProgress);

    assert_eq!(run.categories, catalogue::baseline(true));
    assert_eq!(run.score, 38);
    assert_eq!(run.live, LiveOutcome::Fallback(AuditError::NoPages { attempted: 8 }));
    // every planned page was still tried
    assert_eq!(site.calls.borrow().len(), 8);
}

#[test]
fn single_answer_ready_page_flips_live_categories() {
    let site = FakeSite::new().page("https://acme-autos.com.au/", ANSWER_READY_HOME);
    let run = auditor().run("acme-autos.com.au/", true, &site, &mut NullProgress);

    assert_eq!(run.live, LiveOutcome::Applied { pages: 1 });
    let verdict = |name: &str| run.categories.get(name).map(|c| c.verdict);
    assert_eq!(verdict(FAQ), Some(Verdict::Good));
    assert_eq!(verdict(TONE), Some(Verdict::Good));
    assert_eq!(verdict(COMPARISON), Some(Verdict::Good));

    // no extractor for these
    assert_eq!(run.categories.get(REVIEWS), catalogue::baseline(true).get(REVIEWS));
    assert_eq!(run.categories.get(PRESS), catalogue::baseline(true).get(PRESS));
    assert_eq!(run.categories.len(), 12);
    assert!(run.score > 38);
}

#[test]
fn repeated_runs_give_identical_maps() {
    let site = FakeSite::new()
        .page("https://acme.com/", ANSWER_READY_HOME)
        .page("https://acme.com/faq", "<p>Q: Do we open Sundays? Q: Do we do fleets?</p>");

    let first = auditor().run("acme.com", false, &site, &mut NullProgress);
    let second = auditor().run("acme.com", false, &site, &mut NullProgress);
    assert_eq!(first.categories, second.categories);
    assert_eq!(first.score, second.score);
}

#[test]
fn forbidden_page_is_retried_with_fallback_agent() {
    let site = FakeSite::new().picky_page("https://acme.com/about", ANSWER_READY_HOME);
    let mut progress = Recorder::default();
    let run = auditor().run("https://acme.com", true, &site, &mut progress);

    assert!(run.live.is_applied());
    let agents: Vec<String> = site
        .calls
        .borrow()
        .iter()
        .filter(|(u, _)| u == "https://acme.com/about")
        .map(|(_, a)| a.clone())
        .collect();
    assert_eq!(agents, vec![DEFAULT_USER_AGENT.to_string(), FALLBACK_USER_AGENT.to_string()]);

    assert_eq!(progress.total, 8);
    assert_eq!(progress.done, vec!["https://acme.com/about".to_string()]);
    assert_eq!(progress.failed.len(), 7);
    assert!(progress.finished);
}

#[test]
fn invalid_url_never_touches_the_network() {
    let site = FakeSite::new();
    let run = auditor().run("https://", false, &site, &mut NullProgress);

    assert!(matches!(run.live, LiveOutcome::Fallback(AuditError::InvalidUrl { .. })));
    assert_eq!(run.categories, catalogue::baseline(false));
    assert_eq!(site.calls.borrow().len(), 0);
}

#[test]
fn max_pages_bounds_requests() {
    let site = FakeSite::new();
    let mut fetch = aeo_audit::config::options::FetchOptions::default();
    fetch.max_pages = 3;
    let run = aeo_audit::Auditor::new(fetch)
        .with_pause(std::time::Duration::ZERO)
        .run("acme.com", true, &site, &mut NullProgress);

    assert_eq!(site.calls.borrow().len(), 3);
    assert_eq!(site.calls_to("https://acme.com/services"), 1);
    assert_eq!(run.live, LiveOutcome::Fallback(AuditError::NoPages { attempted: 3 }));
}
