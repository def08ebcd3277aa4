use std::path::Path;

use anyhow::Result;

use shipmate::catalog::IssueSeverity;
use shipmate::ShipmateError;

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::theme::Icon;

pub fn cmd_check(
    catalog_path: Option<&Path>,
    strict_warnings: bool,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let loaded = super::load_catalog(catalog_path, json, verbose)?;
    let catalog = &loaded.catalog;

    let issues = catalog.validate();
    let errors = issues.iter().filter(|issue| issue.is_error()).count();
    // Loader warnings (unknown keys) were already printed; they still count
    // toward --strict-warnings.
    let warnings = issues.len() - errors + loaded.warnings.len();

    let under_github = std::env::var("GITHUB_ACTIONS").is_ok();

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "check",
            "file": loaded.path.display().to_string(),
            "catalog_digest": loaded.digest,
            "apps": catalog.len(),
            "errors": errors,
            "warnings": warnings,
            "issues": issues,
            "success": errors == 0 && (!strict_warnings || warnings == 0),
        }))?;
    } else {
        let caps = crate::ui::terminal::detect_capabilities();
        for issue in &issues {
            let icon = match issue.severity {
                IssueSeverity::Error => Icon::Error,
                IssueSeverity::Warning => Icon::Warning,
            };
            println!("{} {}", icon.render(caps.supports_unicode), issue.message);

            if under_github {
                let level = match issue.severity {
                    IssueSeverity::Error => AnnotationLevel::Error,
                    IssueSeverity::Warning => AnnotationLevel::Warning,
                };
                let file = loaded.path.display().to_string();
                println!(
                    "{}",
                    github_actions_annotation(
                        level,
                        &issue.message,
                        Some(&file),
                        None,
                        Some("shipmate check"),
                    )
                );
            }
        }

        if !issues.is_empty() {
            println!();
        }
        if errors == 0 && warnings == 0 {
            println!(
                "{} catalog OK: {} app(s) across {} domain(s)",
                Icon::Success.render(caps.supports_unicode),
                catalog.len(),
                catalog.domains().len()
            );
        } else {
            println!("Result: {} error(s), {} warning(s)", errors, warnings);
        }
    }

    if errors > 0 || (strict_warnings && warnings > 0) {
        return Err(ShipmateError::CheckFailed { errors, warnings }.into());
    }

    Ok(())
}
