pub mod check;
pub mod list;
pub mod matrix;
pub mod plan;

use std::path::Path;

use anyhow::Result;
use shipmate::catalog::{self, LoadedCatalog};
use shipmate::ShipmateError;

/// Locate and load the catalog, surfacing loader warnings before the
/// command's own output starts.
pub fn load_catalog(explicit: Option<&Path>, json: bool, verbose: u8) -> Result<LoadedCatalog> {
    let path = catalog::locate(explicit)?;
    let loaded = catalog::load(&path)?;

    for warning in &loaded.warnings {
        if json {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "warning",
                "kind": "unknown_key",
                "key": warning.key,
                "file": warning.file.display().to_string(),
                "line": warning.line,
                "suggestion": warning.suggestion,
            }));
        } else {
            eprintln!("{}", crate::ui::diag::render_catalog_warning(warning));
        }
    }

    if verbose > 0 && !json {
        eprintln!("catalog: {} ({})", loaded.path.display(), loaded.digest);
    }

    Ok(loaded)
}

/// Commands that resolve targets refuse catalogs with validation errors,
/// otherwise a duplicate app id could resolve to two descriptors.
pub fn ensure_valid(loaded: &LoadedCatalog) -> Result<()> {
    let errors = loaded.catalog.error_count();
    if errors > 0 {
        return Err(ShipmateError::InvalidCatalog { count: errors }.into());
    }
    Ok(())
}
