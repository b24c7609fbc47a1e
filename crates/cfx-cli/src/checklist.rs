//! # `cfx checklist`
//!
//! Opens a fresh session over one framework, appends the `--add-control`
//! drafts, then replays the `--toggle` ids, and prints the result. Toggles
//! run last so they can reach custom controls added by the same command.
//!
//! A draft is a JSON object with the add-control form fields:
//!
//! ```text
//! {"id": "ACME-1", "name": "Vendor review", "group": "GOVERN", "priority": "high"}
//! ```
//!
//! Unknown toggle ids are skipped with a warning. A rejected draft is
//! reported and turns the exit code to 1, but the remaining input is still
//! applied and the checklist is still printed.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use cfx_catalog::Catalog;
use cfx_checklist::{ChecklistSession, ControlDraft, SessionOptions};
use cfx_core::ControlId;

use crate::find_framework;
use crate::render::{write_groups, write_progress};

/// Arguments for the `checklist` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ChecklistArgs {
    /// Framework id, e.g. `nist-csf`.
    pub framework: String,

    /// Control id to flip; may be repeated. Applied in order.
    #[arg(long = "toggle", value_name = "ID")]
    pub toggles: Vec<String>,

    /// Custom control as a JSON draft; may be repeated.
    #[arg(long = "add-control", value_name = "JSON")]
    pub add_controls: Vec<String>,

    /// Emit the checklist snapshot as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also print the session event log (text output only).
    #[arg(long)]
    pub events: bool,
}

/// Replay the requested changes and print the checklist.
pub fn run_checklist(
    args: &ChecklistArgs,
    catalog: &Catalog,
    options: SessionOptions,
    out: &mut impl Write,
) -> Result<u8> {
    let framework = find_framework(catalog, &args.framework)?;

    let drafts = args
        .add_controls
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            serde_json::from_str::<ControlDraft>(raw)
                .with_context(|| format!("--add-control #{}: invalid draft JSON", i + 1))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut session = ChecklistSession::with_options(framework, options);
    let mut code = 0;

    for draft in drafts {
        let id = draft.id.clone();
        if let Err(rejection) = session.add_custom_control(draft) {
            tracing::warn!(control = %id, "custom control rejected: {rejection}");
            code = 1;
        }
    }

    for raw in &args.toggles {
        let id = ControlId::new(raw.trim());
        if session.toggle_implemented(&id).is_none() {
            tracing::warn!(control = %id, "no control with this id; toggle ignored");
        }
    }

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &session.snapshot())
            .context("failed to serialize checklist snapshot")?;
        writeln!(out)?;
        return Ok(code);
    }

    writeln!(out, "{} ({})", session.framework_name(), session.framework_id())?;
    write_groups(&session.grouped_view(), out)?;
    write_progress(&session.progress(), out)?;

    if args.events {
        writeln!(out)?;
        writeln!(out, "events for {}", session.id())?;
        for event in session.events() {
            let kind = serde_json::to_string(&event.kind)
                .context("failed to serialize checklist event")?;
            writeln!(out, "  {} {kind}", event.at)?;
        }
    }
    Ok(code)
}
