//! Catalog error types.
//!
//! Every file-level error carries the path it came from.

use std::path::PathBuf;

use thiserror::Error;

use cfx_core::FrameworkId;

/// Errors that can occur while loading or querying a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// YAML parsing failed.
    #[error("failed to parse YAML at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// JSON parsing failed.
    #[error("failed to parse JSON at {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A required file or directory was not found.
    #[error("not found: {path}")]
    NotFound { path: PathBuf },

    /// The file extension is not one the catalog reads.
    #[error("unsupported framework file {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: PathBuf },

    /// A framework document failed structural validation.
    #[error("invalid framework at {path}: {source}")]
    InvalidFramework {
        path: PathBuf,
        source: cfx_core::CfxError,
    },

    /// Two documents declare the same framework id.
    #[error("duplicate framework id {id} in {path}")]
    DuplicateFramework { id: FrameworkId, path: PathBuf },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias.
pub type CatalogResult<T> = Result<T, CatalogError>;
