//! # `cfx show`
//!
//! Framework metadata followed by its controls, grouped and ordered the
//! way a fresh checklist shows them.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use cfx_catalog::Catalog;
use cfx_checklist::ChecklistSession;

use crate::find_framework;
use crate::render::{write_framework_header, write_groups, write_progress};

/// Arguments for the `show` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Framework id, e.g. `nist-csf`.
    pub framework: String,
}

/// Print one framework.
pub fn run_show(args: &ShowArgs, catalog: &Catalog, out: &mut impl Write) -> Result<u8> {
    let framework = find_framework(catalog, &args.framework)?;
    let session = ChecklistSession::new(framework);

    write_framework_header(framework, out)?;
    write_groups(&session.grouped_view(), out)?;
    write_progress(&session.progress(), out)?;
    Ok(0)
}
