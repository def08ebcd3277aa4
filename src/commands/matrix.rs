use std::path::Path;

use anyhow::Result;

use shipmate::matrix::BuildMatrix;
use shipmate::models::ReleaseVersion;
use shipmate::resolver::{self, ResolveOptions};
use shipmate::ShipmateError;

pub fn cmd_matrix(
    catalog_path: Option<&Path>,
    apps: Option<&str>,
    include_excluded: bool,
    release: Option<&str>,
    github_output: bool,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let loaded = super::load_catalog(catalog_path, json, verbose)?;
    super::ensure_valid(&loaded)?;
    let catalog = &loaded.catalog;

    let release: Option<ReleaseVersion> = release.map(str::parse).transpose()?;

    // No interactive fallback here: matrix is meant for CI scripts.
    let tokens = match apps {
        Some(raw) => resolver::split_tokens(raw),
        None => return Err(ShipmateError::NoAppsSelected.into()),
    };
    if tokens.is_empty() {
        return Err(ShipmateError::NoAppsSelected.into());
    }

    let options = ResolveOptions { include_excluded };
    let resolved = resolver::resolve(&tokens, catalog, options)?;

    let matrix = BuildMatrix::from_apps(&resolved, release.as_ref());
    let line = matrix.to_json();

    // The matrix line is the whole stdout contract, --json or not.
    println!("{}", line);

    if github_output {
        crate::ui::ci::append_step_output("matrix", &line)?;
        if verbose > 0 && !json {
            let caps = crate::ui::terminal::detect_capabilities();
            eprintln!(
                "{} matrix appended to $GITHUB_OUTPUT",
                crate::ui::theme::Icon::Success.render(caps.supports_unicode)
            );
        }
    }

    Ok(())
}
