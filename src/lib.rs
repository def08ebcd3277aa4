//! Shipmate - release planning and CI matrix tool
//!
//! Shipmate reads an app catalog (`shipmate.toml`) describing the deployable
//! apps of a multi-domain monorepo, resolves user-supplied target selections
//! (full ids, `domain/name` paths, bare domains, short names, or `all`) into
//! concrete app lists, and turns those into release plans and GitHub Actions
//! build matrices.

pub mod catalog;
pub mod error;
pub mod matrix;
pub mod models;
pub mod plan;
pub mod resolver;

// Re-exports for convenience
pub use catalog::{Catalog, CatalogFile, CatalogIssue, IssueSeverity, LoadedCatalog};
pub use error::{ShipmateError, ShipmateResult};
pub use matrix::{BuildMatrix, MatrixEntry};
pub use models::{App, ReleaseVersion};
pub use plan::{PlanTarget, ReleasePlan};
pub use resolver::{resolve, split_tokens, ResolveError, ResolveOptions};
