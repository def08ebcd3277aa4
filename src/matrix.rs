//! CI build matrix generation
//!
//! Turns a resolved app list into the `{"include": [...]}` shape GitHub
//! Actions expects for `strategy.matrix`. Entry order follows the resolved
//! order so matrix jobs line up with the release plan.

use serde::{Deserialize, Serialize};

use crate::models::{App, ReleaseVersion};

/// One matrix job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixEntry {
    /// Full app id, `{domain}-{name}`
    pub app: String,
    pub domain: String,
    pub name: String,
    /// Repo-relative app directory
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
}

/// A complete build matrix, one entry per resolved app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildMatrix {
    pub include: Vec<MatrixEntry>,
}

impl BuildMatrix {
    pub fn from_apps(apps: &[&App], release: Option<&ReleaseVersion>) -> Self {
        let include = apps
            .iter()
            .map(|app| MatrixEntry {
                app: app.full_id(),
                domain: app.domain.clone(),
                name: app.name.clone(),
                path: app.path.clone(),
                release: release.map(ReleaseVersion::to_string),
            })
            .collect();
        Self { include }
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty()
    }

    pub fn len(&self) -> usize {
        self.include.len()
    }

    /// Compact single-line JSON, suitable for a step output value.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apps() -> Vec<App> {
        vec![
            App::new("manman", "worker"),
            App::with_path("demo", "hello_go", "demo/go/hello"),
        ]
    }

    #[test]
    fn test_matrix_preserves_resolved_order() {
        let apps = apps();
        let refs: Vec<&App> = apps.iter().collect();
        let matrix = BuildMatrix::from_apps(&refs, None);

        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix.include[0].app, "manman-worker");
        assert_eq!(matrix.include[0].path, "manman/worker");
        assert_eq!(matrix.include[1].app, "demo-hello_go");
        assert_eq!(matrix.include[1].path, "demo/go/hello");
    }

    #[test]
    fn test_matrix_without_release_omits_field() {
        let apps = apps();
        let refs: Vec<&App> = apps.iter().collect();
        let json = BuildMatrix::from_apps(&refs, None).to_json();

        assert!(json.starts_with("{\"include\":["));
        assert!(!json.contains("release"));
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_matrix_with_release_tags_every_entry() {
        let apps = apps();
        let refs: Vec<&App> = apps.iter().collect();
        let release: ReleaseVersion = "v1.4.0".parse().unwrap();
        let matrix = BuildMatrix::from_apps(&refs, Some(&release));

        for entry in &matrix.include {
            assert_eq!(entry.release.as_deref(), Some("v1.4.0"));
        }
    }

    #[test]
    fn test_empty_matrix_serializes_to_empty_include() {
        let matrix = BuildMatrix::from_apps(&[], None);
        assert!(matrix.is_empty());
        insta::assert_snapshot!(matrix.to_json(), @r#"{"include":[]}"#);
    }

    #[test]
    fn test_matrix_round_trips_through_json() {
        let apps = apps();
        let refs: Vec<&App> = apps.iter().collect();
        let release: ReleaseVersion = "v2.0.1-rc.1".parse().unwrap();
        let matrix = BuildMatrix::from_apps(&refs, Some(&release));

        let parsed: BuildMatrix = serde_json::from_str(&matrix.to_json()).unwrap();
        assert_eq!(parsed, matrix);
    }
}
