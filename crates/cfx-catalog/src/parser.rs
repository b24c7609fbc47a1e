//! Framework document parsing.
//!
//! One file holds one framework. The format is chosen by extension:
//! `.yaml`/`.yml` through serde_yaml, `.json` through serde_json. Parsed
//! frameworks are validated with [`Framework::validate`] before they are
//! returned; duplicate control ids only produce a warning.

use std::path::Path;

use cfx_core::Framework;

use crate::error::{CatalogError, CatalogResult};

/// Document formats the catalog understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.yaml` or `.yml`.
    Yaml,
    /// `.json`.
    Json,
}

impl DocumentFormat {
    /// Pick the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Load and validate a single framework document.
pub fn load_framework(path: &Path) -> CatalogResult<Framework> {
    let format = DocumentFormat::from_path(path).ok_or_else(|| CatalogError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CatalogError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            CatalogError::Io(e)
        }
    })?;
    let framework = parse_framework(&content, format, path)?;

    framework
        .validate()
        .map_err(|source| CatalogError::InvalidFramework {
            path: path.to_path_buf(),
            source,
        })?;

    for id in framework.duplicate_control_ids() {
        tracing::warn!(
            framework = %framework.id,
            control = %id,
            path = %path.display(),
            "duplicate control id; toggles will affect the first occurrence"
        );
    }

    Ok(framework)
}

/// Parse framework document text. `path` is only used for error context.
pub fn parse_framework(
    content: &str,
    format: DocumentFormat,
    path: &Path,
) -> CatalogResult<Framework> {
    match format {
        DocumentFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|source| CatalogError::YamlParse {
                path: path.to_path_buf(),
                source,
            })
        }
        DocumentFormat::Json => {
            serde_json::from_str(content).map_err(|source| CatalogError::JsonParse {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
