//! # cfx-checklist — Checklist Aggregation Engine
//!
//! Turns a read-only [`Framework`](cfx_core::Framework) into an interactive
//! checklist session and derives the display-ready views of it.
//!
//! - **Session** (`session.rs`): `ChecklistSession` owns a private copy of
//!   the framework's controls. Two transitions mutate it:
//!   `toggle_implemented` flips one control, `add_custom_control` appends a
//!   validated user control to the end of the list.
//!
//! - **Draft** (`draft.rs`): `ControlDraft` is the "add control" form
//!   payload. Blank ids and blank names are rejected with `DraftRejection`.
//!
//! - **Grouping** (`grouping.rs`): stable bucketing by group key, with
//!   buckets ordered by where their key first appears in the seed control
//!   list. Keys introduced only by custom controls follow, alphabetically.
//!
//! - **Progress** (`progress.rs`): implemented / total as a rounded
//!   percentage, `0` for an empty checklist.
//!
//! - **Snapshot** (`snapshot.rs`): a serializable rendering of the session.
//!
//! ## Failure Semantics
//!
//! Nothing in this crate panics or performs I/O. A toggle for an unknown id
//! is a no-op; an invalid draft is rejected and the session is unchanged.
//!
//! ## Example
//!
//! ```
//! use cfx_checklist::{ChecklistSession, ControlDraft};
//! use cfx_core::{Control, ControlId, Framework};
//!
//! let framework = Framework::new("demo", "Demo", vec![
//!     Control::new("A1", "First").with_group("G1"),
//!     Control::new("A2", "Second").with_group("G2").implemented(true),
//! ]);
//! let mut session = ChecklistSession::new(&framework);
//! assert_eq!(session.progress().percent(), 50);
//!
//! session.toggle_implemented(&ControlId::from("A1"));
//! assert_eq!(session.progress().percent(), 100);
//!
//! session
//!     .add_custom_control(ControlDraft::new("C1", "Custom Check").with_group("G1"))
//!     .unwrap();
//! let groups = session.grouped_view();
//! assert_eq!(groups[0].key, "G1");
//! assert_eq!(groups[0].controls.len(), 2);
//! ```

pub mod draft;
pub mod grouping;
pub mod progress;
pub mod session;
pub mod snapshot;

pub use draft::{ControlDraft, DraftRejection};
pub use grouping::{group_controls, ControlGroup};
pub use progress::Progress;
pub use session::{
    ChecklistEvent, ChecklistEventKind, ChecklistSession, DuplicateIdPolicy, SessionOptions,
};
pub use snapshot::{ChecklistSnapshot, GroupSnapshot};
