// tests/common/mod.rs
#![allow(dead_code)]
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use aeo_audit::config::consts::DEFAULT_USER_AGENT;
use aeo_audit::core::net::{Response, Transport};
use aeo_audit::error::FetchError;
use aeo_audit::progress::Progress;
use aeo_audit::Auditor;

/// In-memory site. Unknown URLs answer 404.
#[derive(Default)]
pub struct FakeSite {
    pages: HashMap<String, String>,
    /// URLs that refuse the default user agent with a 403.
    picky: HashSet<String>,
    pub calls: RefCell<Vec<(String, String)>>,
}

impl FakeSite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }

    pub fn picky_page(mut self, url: &str, body: &str) -> Self {
        self.picky.insert(url.to_string());
        self.page(url, body)
    }

    pub fn calls_to(&self, url: &str) -> usize {
        self.calls.borrow().iter().filter(|(u, _)| u == url).count()
    }
}

impl Transport for FakeSite {
    fn get(&self, url: &str, headers: &[(&str, &str)], _timeout: Duration) -> Result<Response, FetchError> {
        let agent = headers
            .iter()
            .find(|(k, _)| *k == "User-Agent")
            .map(|(_, v)| v.to_string())
            .unwrap_or_default();
        self.calls.borrow_mut().push((url.to_string(), agent.clone()));

        if self.picky.contains(url) && agent == DEFAULT_USER_AGENT {
            return Ok(Response { status: 403, body: String::new() });
        }
        Ok(match self.pages.get(url) {
            Some(body) => Response { status: 200, body: body.clone() },
            None => Response { status: 404, body: String::new() },
        })
    }
}

/// Records what the fetcher reported.
#[derive(Default)]
pub struct Recorder {
    pub total: usize,
    pub done: Vec<String>,
    pub failed: Vec<String>,
    pub finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn item_done(&mut self, url: &str) {
        self.done.push(url.to_string());
    }
    fn item_failed(&mut self, url: &str, _reason: &str) {
        self.failed.push(url.to_string());
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

/// No politeness pause: the fake site does not mind.
pub fn auditor() -> Auditor {
    Auditor::default().with_pause(Duration::ZERO)
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("aeo_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// A homepage with two FAQ disclosures, third-person copy and a "vs" table.
pub const ANSWER_READY_HOME: &str = r#"<html><head>
<meta name="viewport" content="width=device-width">
<title>Acme Autos</title>
</head><body>
<h1>Frequently asked</h1>
<details><summary>How fast are they?</summary>They reply the same day.</details>
<details><summary>Do they warranty parts?</summary>Their parts carry a warranty.</details>
<table><tr><th>Acme vs Others</th></tr><tr><td>Warranty</td></tr></table>
<p>They are trusted by the team at the company.</p>
</body></html>"#;
