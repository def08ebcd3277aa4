//! Catalog loading and discovery
//!
//! Loads `shipmate.toml` into a [`Catalog`], collecting non-fatal warnings
//! (unknown keys) alongside hard errors (missing file, syntax errors,
//! unsupported version, empty app list). The raw file bytes are digested so
//! release plans can record which catalog revision they were computed from.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

use super::Catalog;
use crate::models::App;

/// Catalog file name, discovered by walking up from the working directory
pub const CATALOG_FILE_NAME: &str = "shipmate.toml";

/// Environment override for the catalog path
pub const CATALOG_ENV: &str = "SHIPMATE_CATALOG";

/// Highest catalog format version this build understands
pub const CATALOG_VERSION: u32 = 1;

/// Errors from locating or loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog not found: {path}")]
    NotFound { path: PathBuf },

    #[error("no shipmate.toml found in {start} or any parent directory")]
    NotDiscovered { start: PathBuf },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog {file}: {message}")]
    Parse { file: PathBuf, message: String },

    #[error("unsupported catalog version {found} in {file} (this build supports version 1)")]
    UnsupportedVersion { file: PathBuf, found: u32 },

    #[error("catalog {file} defines no apps")]
    Empty { file: PathBuf },
}

/// Non-fatal catalog warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// A catalog loaded from disk, with provenance
#[derive(Debug)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub path: PathBuf,
    pub digest: String,
    pub warnings: Vec<CatalogWarning>,
}

/// On-disk catalog schema.
///
/// Kept deserializable on its own so the raw schema can be exercised
/// directly (fuzzing, external tooling).
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub settings: CatalogSettings,

    #[serde(default)]
    pub apps: Vec<AppEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CatalogSettings {
    #[serde(default)]
    pub default_excluded_domain: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AppEntry {
    pub domain: String,
    pub name: String,
    #[serde(default)]
    pub path: Option<String>,
}

fn default_version() -> u32 {
    CATALOG_VERSION
}

impl CatalogFile {
    fn into_catalog(self) -> Catalog {
        let apps = self
            .apps
            .into_iter()
            .map(|entry| match entry.path {
                Some(path) => App::with_path(entry.domain, entry.name, path),
                None => App::new(entry.domain, entry.name),
            })
            .collect();
        Catalog::new(apps, self.settings.default_excluded_domain)
    }
}

/// Locate the catalog: explicit path, `SHIPMATE_CATALOG`, or walk-up discovery.
pub fn locate(explicit: Option<&Path>) -> Result<PathBuf, CatalogError> {
    if let Some(path) = explicit {
        return if path.exists() {
            Ok(path.to_path_buf())
        } else {
            Err(CatalogError::NotFound {
                path: path.to_path_buf(),
            })
        };
    }

    if let Ok(path) = std::env::var(CATALOG_ENV) {
        let path = PathBuf::from(path);
        return if path.exists() {
            Ok(path)
        } else {
            Err(CatalogError::NotFound { path })
        };
    }

    let start = std::env::current_dir().map_err(|source| CatalogError::Read {
        path: PathBuf::from("."),
        source,
    })?;
    discover(&start).ok_or(CatalogError::NotDiscovered { start })
}

/// Walk up from `start` to the first directory containing `shipmate.toml`.
pub fn discover(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CATALOG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Load and parse the catalog at `path`.
pub fn load(path: &Path) -> Result<LoadedCatalog, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            CatalogError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            CatalogError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let (file, unknown_paths) = parse_with_ignored(&content, path)?;

    if file.version != CATALOG_VERSION {
        return Err(CatalogError::UnsupportedVersion {
            file: path.to_path_buf(),
            found: file.version,
        });
    }
    if file.apps.is_empty() {
        return Err(CatalogError::Empty {
            file: path.to_path_buf(),
        });
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            CatalogWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok(LoadedCatalog {
        catalog: file.into_catalog(),
        path: path.to_path_buf(),
        digest: content_digest(&content),
        warnings,
    })
}

fn parse_with_ignored(
    content: &str,
    path: &Path,
) -> Result<(CatalogFile, Vec<String>), CatalogError> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let file: CatalogFile = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CatalogError::Parse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok((file, unknown_paths))
}

/// SHA-256 digest of the raw catalog bytes, `sha256:<hex>`.
pub fn content_digest(content: &str) -> String {
    let hash = Sha256::digest(content.as_bytes());
    format!("sha256:{:x}", hash)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "version",
        "settings",
        "default_excluded_domain",
        "apps",
        "domain",
        "name",
        "path",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

pub(crate) fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
