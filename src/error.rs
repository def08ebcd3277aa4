//! Error types for Shipmate
//!
//! Uses `thiserror` for library errors. Module-local errors (catalog loading,
//! target resolution, version parsing) convert into `ShipmateError` via
//! `#[from]` so callers can handle everything through one type.

use thiserror::Error;

/// Result type alias for Shipmate operations
pub type ShipmateResult<T> = Result<T, ShipmateError>;

/// Main error type for Shipmate operations
#[derive(Error, Debug)]
pub enum ShipmateError {
    /// Catalog could not be located, read, or parsed
    #[error(transparent)]
    Catalog(#[from] crate::catalog::CatalogError),

    /// One or more release target tokens did not resolve
    #[error(transparent)]
    Resolve(#[from] crate::resolver::ResolveError),

    /// Release tag could not be parsed
    #[error(transparent)]
    Version(#[from] crate::models::VersionError),

    /// Catalog has validation errors and cannot be used for resolution
    #[error("catalog has {count} validation error(s); run 'shipmate check' for details")]
    InvalidCatalog { count: usize },

    /// Catalog validation failed under `shipmate check`
    #[error("catalog check failed: {errors} error(s), {warnings} warning(s)")]
    CheckFailed { errors: usize, warnings: usize },

    /// No app selection was provided and none could be prompted for
    #[error("no apps selected - pass --apps (e.g. --apps all) or run on an interactive terminal")]
    NoAppsSelected,

    /// Interactive selection was cancelled by the user
    #[error("selection aborted by user")]
    SelectionAborted,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
