//! # Text Rendering
//!
//! Plain-text output shared by `show` and `checklist`. Implicit groups
//! (controls that never named a group) are listed without a header.

use std::io::{self, Write};

use cfx_checklist::{ControlGroup, Progress};
use cfx_core::{Control, Framework};

/// Framework title line and any metadata present.
pub fn write_framework_header(framework: &Framework, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{} ({})", framework.name, framework.id)?;
    if let Some(category) = &framework.category {
        writeln!(out, "  category:  {category}")?;
    }
    if let Some(version) = &framework.version {
        writeln!(out, "  version:   {version}")?;
    }
    if let Some(url) = &framework.reference_url {
        writeln!(out, "  reference: {url}")?;
    }
    if let Some(description) = &framework.description {
        writeln!(out, "  {description}")?;
    }
    Ok(())
}

/// Every group in order, each followed by its controls.
pub fn write_groups(groups: &[ControlGroup<'_>], out: &mut impl Write) -> io::Result<()> {
    for group in groups {
        writeln!(out)?;
        let indent = if group.implicit {
            ""
        } else {
            let progress = group.progress();
            writeln!(
                out,
                "{} ({}/{})",
                group.key,
                progress.implemented(),
                progress.total()
            )?;
            "  "
        };
        for control in &group.controls {
            writeln!(out, "{indent}{}", control_row(control))?;
        }
    }
    Ok(())
}

/// Overall progress line.
pub fn write_progress(progress: &Progress, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{progress}")
}

/// One checklist row: `[x] ID  Name  (Priority)`.
pub fn control_row(control: &Control) -> String {
    let mark = if control.is_implemented { 'x' } else { ' ' };
    let mut row = format!("[{mark}] {}  {}", control.id, control.name);
    if let Some(priority) = control.priority {
        row.push_str(&format!("  ({})", priority.label()));
    }
    if control.is_custom {
        row.push_str("  [custom]");
    }
    row
}
