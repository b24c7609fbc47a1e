//! # Library View
//!
//! Filtering and sorting of the framework list.
//!
//! - `text` matches case-insensitively as a substring of the framework id,
//!   name or description. Blank text matches everything.
//! - `category` matches the framework category case-insensitively.
//!   Frameworks without a category never match a category filter.
//! - `sort` orders the survivors. Every order is stable.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use cfx_core::{CfxError, Framework};

/// Display order for library results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Catalog load order.
    #[default]
    Catalog,
    /// Name, case-insensitive.
    Name,
    /// Control count, largest first; ties by name.
    Controls,
}

impl FromStr for SortOrder {
    type Err = CfxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "catalog" => Ok(Self::Catalog),
            "name" => Ok(Self::Name),
            "controls" => Ok(Self::Controls),
            other => Err(CfxError::Validation(format!("unknown sort order {other:?}"))),
        }
    }
}

/// A library search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryQuery {
    /// Free-text filter.
    pub text: Option<String>,
    /// Category filter.
    pub category: Option<String>,
    /// Result order.
    pub sort: SortOrder,
}

impl LibraryQuery {
    /// Whether `framework` passes the text and category filters.
    pub fn matches(&self, framework: &Framework) -> bool {
        self.matches_text(framework) && self.matches_category(framework)
    }

    /// Filter and sort `frameworks`.
    pub fn apply<'a>(&self, frameworks: &'a [Framework]) -> Vec<&'a Framework> {
        let mut hits: Vec<&Framework> = frameworks.iter().filter(|f| self.matches(f)).collect();
        match self.sort {
            SortOrder::Catalog => {}
            SortOrder::Name => hits.sort_by(|a, b| by_name(a, b)),
            SortOrder::Controls => hits.sort_by(|a, b| {
                b.controls
                    .len()
                    .cmp(&a.controls.len())
                    .then_with(|| by_name(a, b))
            }),
        }
        hits
    }

    fn matches_text(&self, framework: &Framework) -> bool {
        let needle = match self.text.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_lowercase(),
            _ => return true,
        };
        framework.id.as_str().to_lowercase().contains(&needle)
            || framework.name.to_lowercase().contains(&needle)
            || framework
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }

    fn matches_category(&self, framework: &Framework) -> bool {
        match self.category.as_deref().map(str::trim) {
            Some(wanted) if !wanted.is_empty() => framework
                .category
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(wanted)),
            _ => true,
        }
    }
}

fn by_name(a: &Framework, b: &Framework) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}
