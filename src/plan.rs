//! Release plan document
//!
//! A release plan is the durable record of one resolution: which apps ship,
//! under which release tag, generated from which catalog revision. Plans are
//! plain JSON so CI jobs and humans read the same artifact.

use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::models::{App, ReleaseVersion};

/// Current plan document format
pub const PLAN_FORMAT_VERSION: u32 = 1;

/// One app scheduled for release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanTarget {
    /// Full app id, `{domain}-{name}`
    pub app: String,
    pub domain: String,
    pub name: String,
    pub path: String,
}

impl From<&App> for PlanTarget {
    fn from(app: &App) -> Self {
        Self {
            app: app.full_id(),
            domain: app.domain.clone(),
            name: app.name.clone(),
            path: app.path.clone(),
        }
    }
}

/// A complete release plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleasePlan {
    pub version: u32,
    /// Release tag the plan ships under, `null` when none was given
    pub release: Option<String>,
    pub generated_at: DateTime<Utc>,
    /// `sha256:<hex>` digest of the catalog file the plan was built from
    pub catalog_digest: String,
    pub targets: Vec<PlanTarget>,
}

impl ReleasePlan {
    pub fn new(release: Option<&ReleaseVersion>, catalog_digest: &str, apps: &[&App]) -> Self {
        Self {
            version: PLAN_FORMAT_VERSION,
            release: release.map(ReleaseVersion::to_string),
            generated_at: Utc::now(),
            catalog_digest: catalog_digest.to_string(),
            targets: apps.iter().map(|app| PlanTarget::from(*app)).collect(),
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let mut body = serde_json::to_string_pretty(self)?;
        body.push('\n');
        Ok(body)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Write the plan to `path` atomically: the file is either the old
    /// content or the new plan, never a partial write.
    pub fn write(&self, path: &Path) -> io::Result<()> {
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let body = self.to_json_pretty()?;
        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(body.as_bytes())?;
        tmp.persist(path)?;
        Ok(())
    }
}
