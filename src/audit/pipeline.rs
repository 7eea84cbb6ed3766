// src/audit/pipeline.rs
use std::time::Duration;

use reqwest::Url;
use tracing::{debug, info, warn};

use super::catalogue;
use super::merge::merge;
use super::model::{AuditRun, CategoryMap, LiveOutcome};
use crate::{
    config::consts::REQUEST_PAUSE_MS,
    config::options::FetchOptions,
    core::net::{HttpTransport, Transport},
    error::AuditError,
    fetch::{normalize_base, plan, FetchedPages, Fetcher},
    progress::{NullProgress, Progress},
    score::score_percent,
    signals::SiteSignals,
};

/// Always returns all twelve categories. Live evidence replaces what it can;
/// anything that goes wrong leaves the baseline in place.
pub fn run_audit(base_url: &str, local_mode: bool) -> CategoryMap {
    Auditor::default().run_http(base_url, local_mode, &mut NullProgress).categories
}

/// Audit driver: fetch settings plus the pause between requests.
#[derive(Clone, Debug)]
pub struct Auditor {
    fetch: FetchOptions,
    pause: Duration,
}

impl Default for Auditor {
    fn default() -> Self {
        Self::new(FetchOptions::default())
    }
}

impl Auditor {
    pub fn new(fetch: FetchOptions) -> Self {
        Self { fetch, pause: Duration::from_millis(REQUEST_PAUSE_MS) }
    }

    /// Override the pause between requests. Tests run with zero.
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Audit over the real network.
    pub fn run_http(&self, base_url: &str, local_mode: bool, progress: &mut dyn Progress) -> AuditRun {
        let live = HttpTransport::new().and_then(|t| self.live_signals(base_url, &t, progress));
        self.finish(base_url, local_mode, live)
    }

    /// Audit through any transport.
    pub fn run(
        &self,
        base_url: &str,
        local_mode: bool,
        transport: &dyn Transport,
        progress: &mut dyn Progress,
    ) -> AuditRun {
        let live = self.live_signals(base_url, transport, progress);
        self.finish(base_url, local_mode, live)
    }

    fn live_signals(
        &self,
        base_url: &str,
        transport: &dyn Transport,
        progress: &mut dyn Progress,
    ) -> Result<SiteSignals, AuditError> {
        let base = validate(base_url)?;
        let urls = plan(&base, self.fetch.max_pages);
        debug!(base = %base, candidates = urls.len(), "planned");

        let results = Fetcher::new(transport, &self.fetch)
            .with_pause(self.pause)
            .fetch_all(&urls, progress);
        let pages = FetchedPages::from_results(results);

        let signals = SiteSignals::from_pages(&pages).ok_or(AuditError::NoPages { attempted: urls.len() })?;
        debug!(?signals, "site signals");
        Ok(signals)
    }

    fn finish(&self, base_url: &str, local_mode: bool, live: Result<SiteSignals, AuditError>) -> AuditRun {
        let baseline = catalogue::baseline(local_mode);
        let (categories, live) = match live {
            Ok(signals) => (merge(&baseline, &signals), LiveOutcome::Applied { pages: signals.pages }),
            Err(reason) => {
                warn!(site = base_url, %reason, "live audit unavailable, using baseline");
                (baseline, LiveOutcome::Fallback(reason))
            }
        };

        let score = score_percent(&categories);
        info!(site = base_url, score, live = live.is_applied(), "audit complete");

        AuditRun { base_url: s!(base_url), local_mode, categories, score, live }
    }
}

/// Normalised base URL, or why it cannot be audited.
fn validate(base_url: &str) -> Result<String, AuditError> {
    let base = normalize_base(base_url);
    let invalid = |reason: String| AuditError::InvalidUrl { url: s!(base_url), reason };

    let parsed = Url::parse(&base).map_err(|e| invalid(e.to_string()))?;
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(invalid(s!("no host")));
    }
    Ok(base)
}
