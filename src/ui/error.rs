use shipmate::resolver::ResolveError;

pub fn format_error(err: &anyhow::Error) -> String {
    if let Some(resolve) = err.downcast_ref::<ResolveError>() {
        return crate::ui::diag::render_resolve_failure(resolve);
    }

    format!("[ERROR] {}\n", err)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = match err.downcast_ref::<ResolveError>() {
            Some(resolve) => serde_json::json!({
                "event": "error",
                "kind": "unresolvable_targets",
                "message": err.to_string(),
                "tokens": resolve.tokens,
                "known_apps": resolve.known_apps,
                "known_domains": resolve.known_domains,
            }),
            None => serde_json::json!({
                "event": "error",
                "message": err.to_string(),
            }),
        };
        let _ = crate::ui::json::emit(output);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    if caps.is_ci && std::env::var("GITHUB_ACTIONS").is_ok() {
        println!(
            "{}",
            crate::ui::ci::github_actions_annotation(
                crate::ui::ci::AnnotationLevel::Error,
                &err.to_string(),
                None,
                None,
                Some("shipmate"),
            )
        );
    }

    eprint!("{}", format_error(err));
}

#[cfg(test)]
mod tests {
    use super::*;

    use shipmate::models::App;
    use shipmate::resolver::{resolve, ResolveOptions};
    use shipmate::Catalog;

    fn resolve_failure() -> anyhow::Error {
        let catalog = Catalog::new(vec![App::new("demo", "web")], None);
        let tokens = vec!["bogus".to_string()];
        anyhow::Error::from(resolve(&tokens, &catalog, ResolveOptions::default()).unwrap_err())
    }

    #[test]
    fn test_format_error_with_anyhow() {
        let err = anyhow::anyhow!("Generic error message");
        let rendered = format_error(&err);
        assert!(rendered.contains("Generic error message"));
        assert!(rendered.contains("[ERROR]"));
    }

    #[test]
    fn test_format_error_with_resolve_failure_uses_diagnostic() {
        let rendered = format_error(&resolve_failure());
        assert!(rendered.contains("could not resolve"));
        assert!(rendered.contains("Valid apps:"));
        assert!(!rendered.contains("[ERROR]"));
    }

    #[test]
    fn test_format_error_with_shipmate_error() {
        let err = anyhow::Error::from(shipmate::ShipmateError::NoAppsSelected);
        let rendered = format_error(&err);
        assert!(rendered.contains("no apps selected"));
    }
}
