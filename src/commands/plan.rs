use std::path::Path;

use anyhow::Result;
use is_terminal::IsTerminal;

use shipmate::models::ReleaseVersion;
use shipmate::plan::ReleasePlan;
use shipmate::resolver::{self, ResolveOptions};
use shipmate::ShipmateError;

use crate::ui::theme::Icon;

#[allow(clippy::too_many_arguments)]
pub fn cmd_plan(
    catalog_path: Option<&Path>,
    apps: Option<&str>,
    include_excluded: bool,
    release: Option<&str>,
    output: Option<&Path>,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let loaded = super::load_catalog(catalog_path, json, verbose)?;
    super::ensure_valid(&loaded)?;
    let catalog = &loaded.catalog;
    let caps = crate::ui::terminal::detect_capabilities();

    let release: Option<ReleaseVersion> = release.map(str::parse).transpose()?;

    let tokens = match apps {
        Some(raw) => resolver::split_tokens(raw),
        None => {
            // The picker needs a human on both ends of the terminal.
            if json || caps.is_ci || !caps.is_tty || !std::io::stdin().is_terminal() {
                return Err(ShipmateError::NoAppsSelected.into());
            }
            match crate::ui::menu::select_apps_interactive(catalog)? {
                Some(tokens) => tokens,
                None => return Err(ShipmateError::SelectionAborted.into()),
            }
        }
    };
    if tokens.is_empty() {
        return Err(ShipmateError::NoAppsSelected.into());
    }

    let options = ResolveOptions { include_excluded };
    let resolved = resolver::resolve(&tokens, catalog, options)?;

    let plan = ReleasePlan::new(release.as_ref(), &loaded.digest, &resolved);

    if let Some(path) = output {
        plan.write(path)?;
    }

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "plan",
            "release": plan.release,
            "catalog_digest": plan.catalog_digest,
            "count": plan.targets.len(),
            "targets": plan.targets,
            "output": output.map(|p| p.display().to_string()),
        }))?;
        return Ok(());
    }

    match &plan.release {
        Some(release) => println!(
            "Release plan for {}: {} app(s)",
            release,
            plan.targets.len()
        ),
        None => println!("Release plan: {} app(s)", plan.targets.len()),
    }
    println!();

    let rows: Vec<Vec<String>> = plan
        .targets
        .iter()
        .map(|target| {
            vec![
                target.app.clone(),
                target.domain.clone(),
                target.path.clone(),
            ]
        })
        .collect();
    print!("{}", crate::ui::table::render(&["APP", "DOMAIN", "PATH"], &rows));

    if let Some(path) = output {
        println!();
        println!(
            "{} Plan written to {}",
            Icon::Success.render(caps.supports_unicode),
            path.display()
        );
    }

    Ok(())
}
