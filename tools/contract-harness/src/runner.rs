//! Sends one fixture request and compares the response with its expectations.

use reqwest::Client;
use reqwest::header::HeaderMap;

use crate::fixture::{Expect, Fixture};

/// Outcome of a single fixture.
#[derive(Debug, Default)]
pub struct RunResult {
    pub expected_status: u16,
    pub actual_status: Option<u16>,
    pub mismatches: Vec<String>,
    /// Set when the request could not be sent (e.g. connection refused).
    pub error: Option<String>,
}

impl RunResult {
    pub fn passed(&self) -> bool {
        self.error.is_none()
            && self.actual_status == Some(self.expected_status)
            && self.mismatches.is_empty()
    }
}

pub struct Runner {
    client: Client,
    base_url: String,
}

impl Runner {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub async fn run(&self, fixture: &Fixture) -> RunResult {
        let mut result = RunResult {
            expected_status: fixture.expect.status,
            ..Default::default()
        };

        let url = format!("{}{}", self.base_url, fixture.request.path);
        let Ok(method) =
            reqwest::Method::from_bytes(fixture.request.method.to_uppercase().as_bytes())
        else {
            result.error = Some(format!("unknown HTTP method: {}", fixture.request.method));
            return result;
        };

        let mut req = self.client.request(method, &url);
        for (k, v) in &fixture.request.headers {
            req = req.header(k, v);
        }
        if let Some(body) = &fixture.request.body {
            req = req.json(body);
        }

        tracing::debug!(service = %fixture.service, id = %fixture.id, %url, "sending");
        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => {
                result.error = Some(e.to_string());
                return result;
            }
        };

        result.actual_status = Some(resp.status().as_u16());
        result.mismatches = header_mismatches(&fixture.expect, resp.headers());

        if let Some(expected_kind) = &fixture.expect.kind {
            let body: serde_json::Value = resp.json().await.unwrap_or(serde_json::Value::Null);
            if let Some(m) = kind_mismatch(expected_kind, &body) {
                result.mismatches.push(m);
            }
        }
        result
    }
}

fn header_mismatches(expect: &Expect, headers: &HeaderMap) -> Vec<String> {
    let mut out = Vec::new();
    for (name, expected_val) in &expect.headers {
        match headers.get(name.as_str()) {
            Some(actual) if actual.to_str().unwrap_or("") == expected_val => {}
            Some(actual) => out.push(format!(
                "header {name}: expected {expected_val:?}, got {:?}",
                actual.to_str().unwrap_or("<non-utf8>")
            )),
            None => out.push(format!("header {name}: missing (expected {expected_val:?})")),
        }
    }
    for name in &expect.headers_present {
        if !headers.contains_key(name.as_str()) {
            out.push(format!("header {name}: missing"));
        }
    }
    out
}

fn kind_mismatch(expected: &str, body: &serde_json::Value) -> Option<String> {
    match body.get("kind").and_then(|k| k.as_str()) {
        Some(actual) if actual == expected => None,
        Some(actual) => Some(format!("kind: expected {expected:?}, got {actual:?}")),
        None => Some(format!("kind: expected {expected:?}, body had none")),
    }
}
