use anyhow::Result;
use dialoguer::MultiSelect;

use shipmate::Catalog;

/// Interactive app selection over the catalog.
///
/// Apps outside the default-excluded domain start checked, matching what
/// `all` would resolve to. Returns the chosen full ids, or `None` when the
/// user aborts or confirms an empty selection.
pub fn select_apps_interactive(catalog: &Catalog) -> Result<Option<Vec<String>>> {
    let excluded = catalog.default_excluded();

    let items: Vec<String> = catalog
        .apps()
        .iter()
        .map(|app| {
            if excluded == Some(app.domain.as_str()) {
                format!("{} (excluded from 'all')", app.full_id())
            } else {
                app.full_id()
            }
        })
        .collect();

    let defaults: Vec<bool> = catalog
        .apps()
        .iter()
        .map(|app| excluded != Some(app.domain.as_str()))
        .collect();

    println!("Select apps to release (space to toggle, enter to confirm):");
    let selection = MultiSelect::new()
        .items(&items)
        .defaults(&defaults)
        .interact_opt()?;

    let Some(selection) = selection else {
        return Ok(None);
    };
    if selection.is_empty() {
        println!("No apps selected.");
        return Ok(None);
    }

    let apps = catalog.apps();
    Ok(Some(
        selection.iter().map(|&i| apps[i].full_id()).collect(),
    ))
}
