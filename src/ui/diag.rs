use std::fmt::Write;

use shipmate::catalog::CatalogWarning;
use shipmate::resolver::{ResolveError, UnresolvedReason};

use crate::ui::theme::Icon;

/// Multi-line diagnostic for a resolution failure: every bad token with its
/// reason, then the complete valid app and domain lists so the user can fix
/// the selection without another command.
pub fn render_resolve_failure(err: &ResolveError) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    render_resolve_failure_with(err, caps.supports_unicode)
}

fn render_resolve_failure_with(err: &ResolveError, supports_unicode: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} could not resolve {} release target(s):",
        Icon::Error.render(supports_unicode),
        err.tokens.len()
    );
    let _ = writeln!(out);

    for token in &err.tokens {
        match &token.reason {
            UnresolvedReason::NotFound { suggestion } => match suggestion {
                Some(candidate) => {
                    let _ = writeln!(
                        out,
                        "  - '{}': no matching app, domain, or name (did you mean '{}'?)",
                        token.token, candidate
                    );
                }
                None => {
                    let _ = writeln!(
                        out,
                        "  - '{}': no matching app, domain, or name",
                        token.token
                    );
                }
            },
            UnresolvedReason::AmbiguousName { domains } => {
                let _ = writeln!(
                    out,
                    "  - '{}': name is ambiguous across domains: {}",
                    token.token,
                    domains.join(", ")
                );
            }
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Valid apps:");
    for app in &err.known_apps {
        let _ = writeln!(out, "  {}", app);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Valid domains:");
    for domain in &err.known_domains {
        let _ = writeln!(out, "  {}", domain);
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Selectors: full id (demo-hello_go), path (demo/hello_go), domain (demo), a unique app name (hello_go), or 'all'."
    );
    out
}

/// One-line rendering of a loader warning (unknown key).
pub fn render_catalog_warning(warning: &CatalogWarning) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    render_catalog_warning_with(warning, caps.supports_unicode)
}

fn render_catalog_warning_with(warning: &CatalogWarning, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} unknown key '{}' in {}",
        Icon::Warning.render(supports_unicode),
        warning.key,
        warning.file.display()
    );
    if let Some(line) = warning.line {
        let _ = write!(out, ":{}", line);
    }
    if let Some(suggestion) = &warning.suggestion {
        let _ = write!(out, " (did you mean '{}'?)", suggestion);
    }
    out
}
