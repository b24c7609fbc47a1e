//! # `cfx list`
//!
//! Library view over the catalog: free-text search, category filter and
//! sort order.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use cfx_catalog::{Catalog, LibraryQuery, SortOrder};

/// Arguments for the `list` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Case-insensitive text matched against id, name and description.
    #[arg(long, short)]
    pub search: Option<String>,

    /// Only frameworks in this category.
    #[arg(long, short)]
    pub category: Option<String>,

    /// Result order: catalog, name or controls.
    #[arg(long, default_value = "catalog")]
    pub sort: SortOrder,

    /// Print the distinct categories instead of frameworks.
    #[arg(long)]
    pub categories: bool,
}

impl ListArgs {
    fn query(&self) -> LibraryQuery {
        LibraryQuery {
            text: self.search.clone(),
            category: self.category.clone(),
            sort: self.sort,
        }
    }
}

/// Print matching frameworks, one per line.
pub fn run_list(args: &ListArgs, catalog: &Catalog, out: &mut impl Write) -> Result<u8> {
    if args.categories {
        for category in catalog.categories() {
            writeln!(out, "{category}")?;
        }
        return Ok(0);
    }

    let hits = catalog.search(&args.query());
    tracing::debug!(matches = hits.len(), of = catalog.len(), "library search");
    if hits.is_empty() {
        writeln!(out, "no frameworks match")?;
        return Ok(0);
    }

    let width = hits.iter().map(|f| f.id.as_str().len()).max().unwrap_or(0);
    for framework in hits {
        write!(
            out,
            "{:<width$}  {}  ({} controls)",
            framework.id.as_str(),
            framework.name,
            framework.controls.len()
        )?;
        if let Some(category) = &framework.category {
            write!(out, "  [{category}]")?;
        }
        writeln!(out)?;
    }
    Ok(0)
}
