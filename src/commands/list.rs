use std::path::Path;

use anyhow::Result;

pub fn cmd_list(catalog_path: Option<&Path>, domains: bool, json: bool, verbose: u8) -> Result<()> {
    let loaded = super::load_catalog(catalog_path, json, verbose)?;
    let catalog = &loaded.catalog;

    if domains {
        if json {
            crate::ui::json::emit(serde_json::json!({
                "event": "list",
                "domains": catalog.domains(),
            }))?;
        } else {
            for domain in catalog.domains() {
                println!("{}", domain);
            }
        }
        return Ok(());
    }

    if json {
        let apps: Vec<serde_json::Value> = catalog
            .apps()
            .iter()
            .map(|app| {
                serde_json::json!({
                    "app": app.full_id(),
                    "domain": app.domain,
                    "name": app.name,
                    "path": app.path,
                })
            })
            .collect();
        crate::ui::json::emit(serde_json::json!({
            "event": "list",
            "count": apps.len(),
            "excluded_by_default": catalog.default_excluded(),
            "apps": apps,
        }))?;
        return Ok(());
    }

    let excluded = catalog.default_excluded();
    let rows: Vec<Vec<String>> = catalog
        .apps()
        .iter()
        .map(|app| {
            let marker = if excluded == Some(app.domain.as_str()) {
                "*"
            } else {
                ""
            };
            vec![
                format!("{}{}", app.full_id(), marker),
                app.domain.clone(),
                app.name.clone(),
                app.path.clone(),
            ]
        })
        .collect();

    print!(
        "{}",
        crate::ui::table::render(&["APP", "DOMAIN", "NAME", "PATH"], &rows)
    );

    if let Some(excluded) = excluded {
        println!();
        println!("* domain '{}' is excluded from 'all' by default", excluded);
    }

    Ok(())
}
