// src/fetch/fetcher.rs
use std::{thread, time::Duration};

use tracing::debug;

use crate::{
    config::consts::{ACCEPT_LANGUAGE, DEFAULT_USER_AGENT, FALLBACK_USER_AGENT, REQUEST_PAUSE_MS},
    config::options::FetchOptions,
    core::net::{Response, Transport},
    error::FetchError,
    progress::Progress,
};

const FORBIDDEN: u16 = 403;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageOutcome {
    Body(String),
    Failed(FetchError),
}

/// Outcome of fetching one planned URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchResult {
    pub url: String,
    pub outcome: PageOutcome,
}

impl FetchResult {
    pub fn body(&self) -> Option<&str> {
        match &self.outcome {
            PageOutcome::Body(b) => Some(b),
            PageOutcome::Failed(_) => None,
        }
    }
}

/// Successful pages only, in plan order. A URL that is missing here failed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchedPages {
    pages: Vec<(String, String)>,
}

impl FetchedPages {
    pub fn from_results(results: Vec<FetchResult>) -> Self {
        let pages = results
            .into_iter()
            .filter_map(|r| match r.outcome {
                PageOutcome::Body(body) => Some((r.url, body)),
                PageOutcome::Failed(_) => None,
            })
            .collect();
        Self { pages }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn get(&self, url: &str) -> Option<&str> {
        self.pages.iter().find(|(u, _)| u == url).map(|(_, b)| b.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pages.iter().map(|(u, b)| (u.as_str(), b.as_str()))
    }
}

impl FromIterator<(String, String)> for FetchedPages {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self { pages: iter.into_iter().collect() }
    }
}

/// Sequential fetcher. Owns nothing but settings; the transport is borrowed.
pub struct Fetcher<'t> {
    transport: &'t dyn Transport,
    timeout: Duration,
    pause: Duration,
}

impl<'t> Fetcher<'t> {
    pub fn new(transport: &'t dyn Transport, opts: &FetchOptions) -> Self {
        Self {
            transport,
            timeout: opts.timeout,
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
        }
    }

    /// Override the politeness pause. Meant for offline tests against a fake transport.
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// GET with the default identity; on 403 retry once with the fallback identity.
    pub fn fetch_one(&self, url: &str) -> FetchResult {
        let mut headers = [("User-Agent", DEFAULT_USER_AGENT), ("Accept-Language", ACCEPT_LANGUAGE)];
        let mut resp = self.transport.get(url, &headers, self.timeout);

        if matches!(&resp, Ok(r) if r.status == FORBIDDEN) {
            debug!(url, "403 with default user agent, retrying with fallback");
            headers[0].1 = FALLBACK_USER_AGENT;
            resp = self.transport.get(url, &headers, self.timeout);
        }

        let outcome = match resp {
            Ok(Response { status: FORBIDDEN, .. }) => PageOutcome::Failed(FetchError::Rejected),
            Ok(r) if !r.is_success() => PageOutcome::Failed(FetchError::Status(r.status)),
            Ok(r) if r.body.trim().is_empty() => PageOutcome::Failed(FetchError::EmptyBody),
            Ok(r) => PageOutcome::Body(r.body),
            Err(e) => PageOutcome::Failed(e),
        };
        FetchResult { url: s!(url), outcome }
    }

    /// Fetch every URL in order, pausing after each one regardless of outcome.
    pub fn fetch_all(&self, urls: &[String], progress: &mut dyn Progress) -> Vec<FetchResult> {
        progress.begin(urls.len());

        let mut results = Vec::with_capacity(urls.len());
        for url in urls {
            let result = self.fetch_one(url);
            match &result.outcome {
                PageOutcome::Body(body) => {
                    debug!(url = %url, bytes = body.len(), "fetched");
                    progress.item_done(url);
                }
                PageOutcome::Failed(e) => {
                    debug!(url = %url, error = %e, "fetch failed");
                    progress.item_failed(url, &e.to_string());
                }
            }
            results.push(result);
            thread::sleep(self.pause); // be polite
        }

        progress.finish();
        results
    }
}
