//! Core data models for Shipmate
//!
//! Defines the fundamental data structures used throughout Shipmate:
//! - `App`: a deployable app described by the catalog
//! - `ReleaseVersion`: a parsed release tag (`v1.2.3` or `v1.2.3-rc.1`)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A deployable app in the monorepo.
///
/// Apps live in domains (top-level directories). The globally unique id of an
/// app is `{domain}-{name}`; the id is always derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    /// Domain the app belongs to (e.g. `manman`)
    pub domain: String,

    /// App name within the domain (e.g. `worker`, may contain hyphens)
    pub name: String,

    /// Repo-relative directory of the app (defaults to `{domain}/{name}`)
    pub path: String,
}

impl App {
    /// Create an app with the default `{domain}/{name}` path
    pub fn new(domain: impl Into<String>, name: impl Into<String>) -> Self {
        let domain = domain.into();
        let name = name.into();
        let path = format!("{}/{}", domain, name);
        Self { domain, name, path }
    }

    /// Create an app with an explicit repo-relative path
    pub fn with_path(
        domain: impl Into<String>,
        name: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            name: name.into(),
            path: path.into(),
        }
    }

    /// Globally unique id: `{domain}-{name}`
    pub fn full_id(&self) -> String {
        format!("{}-{}", self.domain, self.name)
    }

    /// Does `token` equal this app's full id? Compares without allocating.
    pub fn matches_full_id(&self, token: &str) -> bool {
        token
            .strip_prefix(self.domain.as_str())
            .and_then(|rest| rest.strip_prefix('-'))
            .is_some_and(|rest| rest == self.name)
    }

    /// Does `token` equal this app's `domain/name` path form?
    ///
    /// This compares against the domain and name fields, not against `path`,
    /// so it stays correct for apps with a customized directory layout.
    pub fn matches_path_form(&self, token: &str) -> bool {
        token
            .strip_prefix(self.domain.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
            .is_some_and(|rest| rest == self.name)
    }
}

/// Errors from parsing a release tag
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("release tag '{tag}' must start with 'v'")]
    MissingPrefix { tag: String },

    #[error("release tag '{tag}' must have numeric major.minor.patch components")]
    MalformedComponents { tag: String },

    #[error("release tag '{tag}' has an empty pre-release suffix")]
    EmptyPreRelease { tag: String },
}

/// A parsed release tag: `v<major>.<minor>.<patch>` with an optional
/// `-<pre-release>` suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: Option<String>,
}

impl ReleaseVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre: None,
        }
    }

    pub fn is_pre_release(&self) -> bool {
        self.pre.is_some()
    }
}

impl FromStr for ReleaseVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = || s.to_string();

        let Some(rest) = s.strip_prefix('v') else {
            return Err(VersionError::MissingPrefix { tag: tag() });
        };

        let (numbers, pre) = match rest.split_once('-') {
            Some((_, p)) if p.is_empty() => {
                return Err(VersionError::EmptyPreRelease { tag: tag() });
            }
            Some((n, p)) => (n, Some(p.to_string())),
            None => (rest, None),
        };

        let mut parts = numbers.split('.');
        let mut next_num = || -> Result<u64, VersionError> {
            parts
                .next()
                .and_then(|p| p.parse::<u64>().ok())
                .ok_or_else(|| VersionError::MalformedComponents { tag: tag() })
        };

        let major = next_num()?;
        let minor = next_num()?;
        let patch = next_num()?;

        if parts.next().is_some() {
            return Err(VersionError::MalformedComponents { tag: tag() });
        }

        Ok(Self {
            major,
            minor,
            patch,
            pre,
        })
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}
