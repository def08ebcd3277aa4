//! Release target resolution
//!
//! Maps user-supplied selection tokens onto catalog apps. Each token is tried
//! against a fixed priority ladder, first hit wins:
//!
//! 1. `all` - every app outside the default-excluded domain (the
//!    `include_excluded` option lifts the exclusion)
//! 2. full id - `{domain}-{name}`
//! 3. path form - `{domain}/{name}`
//! 4. domain - every app in the domain, exclusion never applies here
//! 5. short name - the app's bare name, only when unique across domains
//!
//! Matching is case-sensitive and pure: no I/O, no catalog mutation, and the
//! output order depends only on token order and catalog file order. Bad
//! tokens never abort the scan; they are collected so one failure reports
//! every problem at once.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::catalog::loader::levenshtein;
use crate::catalog::Catalog;
use crate::models::App;

/// Wildcard token expanding to the non-excluded catalog
pub const ALL_TOKEN: &str = "all";

/// Resolution options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Let `all` expand into the default-excluded domain too
    pub include_excluded: bool,
}

/// Split a raw comma-separated selection into tokens.
///
/// Whitespace around tokens is trimmed and empty segments are dropped, so
/// `"a, b,,c"` yields `["a", "b", "c"]`.
pub fn split_tokens(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Why a single token failed to resolve
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum UnresolvedReason {
    /// Token matched nothing at any priority level
    NotFound {
        #[serde(skip_serializing_if = "Option::is_none")]
        suggestion: Option<String>,
    },
    /// Token is a short name owned by several domains
    AmbiguousName { domains: Vec<String> },
}

/// A token that could not be resolved, with its reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedToken {
    pub token: String,
    #[serde(flatten)]
    pub reason: UnresolvedReason,
}

/// Resolution failure carrying everything needed for a complete diagnostic:
/// every bad token with its reason, plus the full sorted app-id and domain
/// lists so callers never have to consult the catalog again.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("unresolvable release targets: {}", .tokens.iter().map(|t| t.token.as_str()).collect::<Vec<_>>().join(", "))]
pub struct ResolveError {
    pub tokens: Vec<UnresolvedToken>,
    pub known_apps: Vec<String>,
    pub known_domains: Vec<String>,
}

enum TokenMatch<'a> {
    Apps(Vec<&'a App>),
    Ambiguous(Vec<String>),
    NotFound,
}

/// Resolve `tokens` against `catalog` into a deduplicated app list.
///
/// The result preserves first-seen order: tokens in input order, expansions
/// in catalog file order, repeats dropped. An empty token list resolves to
/// an empty app list.
pub fn resolve<'a>(
    tokens: &[String],
    catalog: &'a Catalog,
    options: ResolveOptions,
) -> Result<Vec<&'a App>, ResolveError> {
    let mut resolved: Vec<&'a App> = Vec::new();
    let mut seen: HashSet<(&'a str, &'a str)> = HashSet::new();
    let mut unresolved: Vec<UnresolvedToken> = Vec::new();

    for token in tokens {
        match match_token(token, catalog, options) {
            TokenMatch::Apps(apps) => {
                for app in apps {
                    if seen.insert((app.domain.as_str(), app.name.as_str())) {
                        resolved.push(app);
                    }
                }
            }
            TokenMatch::Ambiguous(domains) => unresolved.push(UnresolvedToken {
                token: token.clone(),
                reason: UnresolvedReason::AmbiguousName { domains },
            }),
            TokenMatch::NotFound => unresolved.push(UnresolvedToken {
                token: token.clone(),
                reason: UnresolvedReason::NotFound {
                    suggestion: suggest_target(token, catalog),
                },
            }),
        }
    }

    if unresolved.is_empty() {
        Ok(resolved)
    } else {
        Err(ResolveError {
            tokens: unresolved,
            known_apps: catalog.app_ids(),
            known_domains: catalog.domains(),
        })
    }
}

fn match_token<'a>(token: &str, catalog: &'a Catalog, options: ResolveOptions) -> TokenMatch<'a> {
    if token == ALL_TOKEN {
        let apps = catalog
            .apps()
            .iter()
            .filter(|app| {
                options.include_excluded
                    || catalog.default_excluded() != Some(app.domain.as_str())
            })
            .collect();
        return TokenMatch::Apps(apps);
    }

    if let Some(app) = catalog.apps().iter().find(|app| app.matches_full_id(token)) {
        return TokenMatch::Apps(vec![app]);
    }

    if let Some(app) = catalog
        .apps()
        .iter()
        .find(|app| app.matches_path_form(token))
    {
        return TokenMatch::Apps(vec![app]);
    }

    if catalog.has_domain(token) {
        // An explicitly named domain expands even when it is the excluded one.
        let apps = catalog
            .apps()
            .iter()
            .filter(|app| app.domain == token)
            .collect();
        return TokenMatch::Apps(apps);
    }

    let named: Vec<&App> = catalog
        .apps()
        .iter()
        .filter(|app| app.name == token)
        .collect();
    match named.len() {
        0 => TokenMatch::NotFound,
        1 => TokenMatch::Apps(named),
        _ => {
            let mut domains: Vec<String> =
                named.iter().map(|app| app.domain.clone()).collect();
            domains.sort();
            domains.dedup();
            TokenMatch::Ambiguous(domains)
        }
    }
}

fn suggest_target(token: &str, catalog: &Catalog) -> Option<String> {
    // Candidate order breaks distance ties: full ids, short names, domains,
    // then the wildcard itself.
    let mut candidates: Vec<String> = catalog.app_ids();
    let mut names: Vec<String> = catalog
        .apps()
        .iter()
        .map(|app| app.name.clone())
        .collect();
    names.sort();
    names.dedup();
    candidates.extend(names);
    candidates.extend(catalog.domains());
    candidates.push(ALL_TOKEN.to_string());

    let mut best: Option<(&str, usize)> = None;
    for candidate in &candidates {
        let dist = levenshtein(token, candidate);
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
