//! App catalog
//!
//! The catalog is the single source of truth for which apps exist, which
//! domain each belongs to, and which domain (if any) is excluded from the
//! `all` wildcard by default. File order is preserved because expansion
//! output follows it.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::models::App;
use crate::resolver::ALL_TOKEN;

pub mod loader;

pub use loader::{load, locate, CatalogError, CatalogFile, CatalogWarning, LoadedCatalog};

/// Severity of a catalog validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// A single catalog validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogIssue {
    pub severity: IssueSeverity,
    pub message: String,
}

impl CatalogIssue {
    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Error,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Warning,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }
}

/// The app catalog: an ordered app list plus release settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    apps: Vec<App>,
    default_excluded: Option<String>,
}

impl Catalog {
    pub fn new(apps: Vec<App>, default_excluded: Option<String>) -> Self {
        Self {
            apps,
            default_excluded,
        }
    }

    /// Apps in catalog file order
    pub fn apps(&self) -> &[App] {
        &self.apps
    }

    /// Domain excluded from `all` unless explicitly requested
    pub fn default_excluded(&self) -> Option<&str> {
        self.default_excluded.as_deref()
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    pub fn has_domain(&self, domain: &str) -> bool {
        self.apps.iter().any(|app| app.domain == domain)
    }

    /// Sorted unique domain ids
    pub fn domains(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.apps.iter().map(|app| app.domain.as_str()).collect();
        set.into_iter().map(String::from).collect()
    }

    /// Sorted full ids of every app
    pub fn app_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.apps.iter().map(App::full_id).collect();
        ids.sort();
        ids
    }

    /// Validate catalog consistency.
    ///
    /// Errors make the catalog unusable for resolution (duplicate apps,
    /// malformed identifiers, reserved words, unsafe paths). Warnings flag
    /// setups that are legal but surprising to reference on the command line.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        for app in &self.apps {
            if !is_valid_domain_id(&app.domain) {
                issues.push(CatalogIssue::error(format!(
                    "invalid domain '{}' for app '{}': domains use [a-z0-9_] only",
                    app.domain,
                    app.full_id()
                )));
            }
            if !is_valid_app_name(&app.name) {
                issues.push(CatalogIssue::error(format!(
                    "invalid app name '{}' in domain '{}': names use [a-z0-9_-] and cannot start with '-'",
                    app.name, app.domain
                )));
            }
            if app.domain == ALL_TOKEN || app.name == ALL_TOKEN {
                issues.push(CatalogIssue::error(format!(
                    "'{}' is reserved for the wildcard and cannot be a domain or app name",
                    ALL_TOKEN
                )));
            }
            if !is_safe_path(&app.path) {
                issues.push(CatalogIssue::error(format!(
                    "unsafe path '{}' for app '{}': paths must be repo-relative without '..'",
                    app.path,
                    app.full_id()
                )));
            }
            if !seen.insert((app.domain.as_str(), app.name.as_str())) {
                issues.push(CatalogIssue::error(format!(
                    "duplicate app '{}'",
                    app.full_id()
                )));
            }
        }

        let domains: BTreeSet<&str> = self.apps.iter().map(|app| app.domain.as_str()).collect();

        let mut name_owners: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for app in &self.apps {
            name_owners
                .entry(app.name.as_str())
                .or_default()
                .insert(app.domain.as_str());
        }

        for (name, owners) in &name_owners {
            if domains.contains(name) {
                issues.push(CatalogIssue::warning(format!(
                    "app name '{}' shadows a domain id; the bare token '{}' selects the domain",
                    name, name
                )));
            }
            if owners.len() >= 2 {
                let list: Vec<&str> = owners.iter().copied().collect();
                issues.push(CatalogIssue::warning(format!(
                    "app name '{}' exists in multiple domains ({}); short-name selection will be rejected as ambiguous",
                    name,
                    list.join(", ")
                )));
            }
        }

        if let Some(excluded) = &self.default_excluded {
            if !domains.contains(excluded.as_str()) {
                issues.push(CatalogIssue::warning(format!(
                    "default excluded domain '{}' matches no app",
                    excluded
                )));
            }
        }

        issues
    }

    /// Count of validation errors (ignoring warnings)
    pub fn error_count(&self) -> usize {
        self.validate().iter().filter(|i| i.is_error()).count()
    }
}

fn is_valid_domain_id(s: &str) -> bool {
    // Hyphens are reserved as the domain/name separator in full ids.
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

fn is_valid_app_name(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_lowercase() || first.is_ascii_digit() || first == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}

fn is_safe_path(path: &str) -> bool {
    !path.is_empty()
        && !path.starts_with('/')
        && path.split('/').all(|part| !part.is_empty() && part != "..")
}
