//! # Catalog
//!
//! The loaded set of frameworks. Load order is preserved and is the
//! library's default display order. Framework ids are unique within a
//! catalog.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use cfx_core::{Framework, FrameworkId};

use crate::error::{CatalogError, CatalogResult};
use crate::library::LibraryQuery;
use crate::parser::{load_framework, DocumentFormat};

/// An ordered, read-only collection of frameworks.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    frameworks: Vec<Framework>,
}

impl Catalog {
    /// Build a catalog from in-memory frameworks.
    ///
    /// # Errors
    ///
    /// [`CatalogError::DuplicateFramework`] if two frameworks share an id.
    pub fn from_frameworks(frameworks: Vec<Framework>) -> CatalogResult<Self> {
        let mut seen = HashSet::new();
        for fw in &frameworks {
            if !seen.insert(&fw.id) {
                return Err(CatalogError::DuplicateFramework {
                    id: fw.id.clone(),
                    path: PathBuf::from("<memory>"),
                });
            }
        }
        Ok(Self { frameworks })
    }

    /// Load every framework document in `dir` (non-recursive).
    ///
    /// Files are read in file-name order. Files with other extensions and
    /// subdirectories are skipped.
    pub fn load_dir(dir: &Path) -> CatalogResult<Self> {
        if !dir.is_dir() {
            return Err(CatalogError::NotFound {
                path: dir.to_path_buf(),
            });
        }

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if DocumentFormat::from_path(&path).is_some() {
                paths.push(path);
            } else {
                tracing::debug!(path = %path.display(), "skipping non-framework file");
            }
        }
        paths.sort();

        let mut frameworks: Vec<Framework> = Vec::with_capacity(paths.len());
        for path in &paths {
            let framework = load_framework(path)?;
            if frameworks.iter().any(|f| f.id == framework.id) {
                return Err(CatalogError::DuplicateFramework {
                    id: framework.id,
                    path: path.clone(),
                });
            }
            frameworks.push(framework);
        }

        tracing::info!(
            dir = %dir.display(),
            frameworks = frameworks.len(),
            controls = frameworks.iter().map(|f| f.controls.len()).sum::<usize>(),
            "loaded framework catalog"
        );
        Ok(Self { frameworks })
    }

    /// Look up a framework by id.
    pub fn get(&self, id: &FrameworkId) -> Option<&Framework> {
        self.frameworks.iter().find(|f| &f.id == id)
    }

    /// Number of frameworks.
    pub fn len(&self) -> usize {
        self.frameworks.len()
    }

    /// Whether the catalog holds no frameworks.
    pub fn is_empty(&self) -> bool {
        self.frameworks.is_empty()
    }

    /// Frameworks in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Framework> {
        self.frameworks.iter()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for category in self.frameworks.iter().filter_map(|f| f.category.as_deref()) {
            if !out.contains(&category) {
                out.push(category);
            }
        }
        out
    }

    /// Frameworks matching `query`, in the query's sort order.
    pub fn search(&self, query: &LibraryQuery) -> Vec<&Framework> {
        query.apply(&self.frameworks)
    }
}
