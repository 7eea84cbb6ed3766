// src/core/net.rs
// HTTP GET behind a small trait so the pipeline can run against canned pages.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{AuditError, FetchError};

/// Status and body of one GET. Non-2xx bodies are not read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait Transport {
    fn get(&self, url: &str, headers: &[(&str, &str)], timeout: Duration) -> Result<Response, FetchError>;
}

/// Blocking `reqwest` client. Redirects are followed (reqwest default policy).
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, AuditError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AuditError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, headers: &[(&str, &str)], timeout: Duration) -> Result<Response, FetchError> {
        let mut req = self.client.get(url).timeout(timeout);
        for (name, value) in headers {
            req = req.header(*name, *value);
        }
        let resp = req.send()?;
        let status = resp.status().as_u16();
        if !resp.status().is_success() {
            return Ok(Response { status, body: s!() });
        }
        let body = resp.text()?;
        Ok(Response { status, body })
    }
}
