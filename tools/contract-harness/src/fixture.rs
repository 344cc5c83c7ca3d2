//! Contract fixture format and loader.
//!
//! Each fixture file at `contracts/http/{service}/{id}.json` describes one HTTP
//! assertion: the request to send and what the response must look like.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// A single HTTP contract assertion loaded from a fixture file.
#[derive(Debug, Clone, Deserialize)]
pub struct Fixture {
    /// Service name (`auth` or `library`); must match the directory.
    pub service: String,
    /// Unique identifier within the service (matches the filename stem).
    pub id: String,
    pub description: String,
    pub request: Request,
    pub expect: Expect,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    pub method: String,
    pub path: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Expect {
    pub status: u16,
    /// Subset match; extra response headers are allowed.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Header names that only need to be present.
    #[serde(default)]
    pub headers_present: Vec<String>,
    /// `kind` field of a JSON error body.
    pub kind: Option<String>,
}

/// Load fixtures from `{root}/contracts/http/`, optionally limited to one
/// service subdirectory. Sorted by service, then id.
pub fn load_all(root: &Path, service: Option<&str>) -> Result<Vec<Fixture>> {
    let http_dir = root.join("contracts/http");

    let service_dirs: Vec<_> = match service {
        Some(svc) => vec![http_dir.join(svc)],
        None => fs::read_dir(&http_dir)
            .with_context(|| format!("cannot open {}", http_dir.display()))?
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
            .map(|e| e.path())
            .collect(),
    };

    let mut fixtures = Vec::new();
    for dir in service_dirs {
        if !dir.exists() {
            continue;
        }
        for entry in fs::read_dir(&dir)
            .with_context(|| format!("cannot read {}", dir.display()))?
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.extension().is_some_and(|e| e == "json") {
                fixtures.push(load_one(&path)?);
            }
        }
    }

    fixtures.sort_by(|a, b| a.service.cmp(&b.service).then(a.id.cmp(&b.id)));
    Ok(fixtures)
}

fn load_one(path: &Path) -> Result<Fixture> {
    let content =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    let fixture: Fixture = serde_json::from_str(&content)
        .with_context(|| format!("invalid fixture JSON in {}", path.display()))?;

    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    if fixture.id != stem {
        bail!("{}: id {:?} does not match file name", path.display(), fixture.id);
    }
    let dir = path
        .parent()
        .and_then(|p| p.file_name())
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    if fixture.service != dir {
        bail!(
            "{}: service {:?} does not match directory",
            path.display(),
            fixture.service
        );
    }
    Ok(fixture)
}
