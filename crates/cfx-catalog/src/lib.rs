//! # cfx-catalog — Framework Data Source
//!
//! Supplies the read-only [`Framework`](cfx_core::Framework) records the
//! checklist engine is seeded from.
//!
//! - **Parser** (`parser.rs`): reads one framework document from a YAML or
//!   JSON file with path-carrying errors.
//! - **Catalog** (`catalog.rs`): the loaded collection, in load order, with
//!   lookup by id.
//! - **Library** (`library.rs`): the library view: text search, category
//!   filter and sort order over a catalog.
//!
//! ## Crate Policy
//!
//! - Depends only on `cfx-core` internally.
//! - Loaded frameworks are never mutated.

pub mod catalog;
pub mod error;
pub mod library;
pub mod parser;

pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use library::{LibraryQuery, SortOrder};
