//! # cfx-cli — Compliance Framework Command-Line Interface
//!
//! ## Subcommands
//!
//! - `list` — library view: search, category filter, sort
//! - `show` — framework metadata and its grouped control list
//! - `checklist` — replay toggles and custom controls against a fresh
//!   session and print the result
//!
//! ## Crate Policy
//!
//! - Argument parsing lives next to each handler; business logic lives in
//!   `cfx-checklist` and `cfx-catalog`.
//! - Handlers write to a caller-supplied `Write` so they can be tested
//!   without capturing stdout.
//! - Handlers return a process exit code: 0 success, 1 failure.

pub mod checklist;
pub mod config;
pub mod list;
pub mod render;
pub mod show;

use anyhow::{Context, Result};
use cfx_catalog::Catalog;
use cfx_core::{Framework, FrameworkId};

/// Look up a framework or fail with the list of known ids.
pub fn find_framework<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Framework> {
    catalog.get(&FrameworkId::new(id)).with_context(|| {
        let known: Vec<&str> = catalog.iter().map(|f| f.id.as_str()).collect();
        format!(
            "unknown framework {id:?}; known frameworks: {}",
            known.join(", ")
        )
    })
}
