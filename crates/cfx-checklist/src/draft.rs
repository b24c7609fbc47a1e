//! # Control Drafts
//!
//! A `ControlDraft` is what a user submits through the "add control" form:
//! Control ID, Group, Name, Description and Priority. Validation is a form
//! gate, not an error path. A rejected draft leaves the session untouched
//! and the caller keeps the draft so the user can correct it.
//!
//! ## Normalization on acceptance
//!
//! - `id`, `name` and `group` are trimmed.
//! - A blank group becomes "no group", so the control lands in the
//!   general bucket.
//! - `priority` defaults to [`Priority::Low`].
//! - `is_custom` is always `true`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use cfx_core::{Control, ControlId, Priority};

/// Why a draft was not added to the session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftRejection {
    /// The control id is empty or whitespace.
    #[error("control id must not be blank")]
    BlankId,

    /// The control name is empty or whitespace.
    #[error("control name must not be blank")]
    BlankName,

    /// Another control in the session already uses this id. Only raised
    /// under [`DuplicateIdPolicy::Reject`](crate::DuplicateIdPolicy::Reject).
    #[error("control id {0} is already used in this checklist")]
    DuplicateId(ControlId),
}

/// User input for a new custom control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlDraft {
    /// Requested control id.
    pub id: String,
    /// Control name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Priority; `Low` when not chosen.
    pub priority: Option<Priority>,
    /// Group to file the control under.
    pub group: Option<String>,
    /// Initial implemented state.
    pub is_implemented: bool,
}

impl ControlDraft {
    /// Start a draft with an id and a name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the group.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the initial implemented state.
    pub fn implemented(mut self, is_implemented: bool) -> Self {
        self.is_implemented = is_implemented;
        self
    }

    /// The id this draft would be stored under.
    pub fn control_id(&self) -> ControlId {
        ControlId::new(self.id.trim())
    }

    /// Check the id and name. The id is checked first.
    pub fn validate(&self) -> Result<(), DraftRejection> {
        if self.id.trim().is_empty() {
            return Err(DraftRejection::BlankId);
        }
        if self.name.trim().is_empty() {
            return Err(DraftRejection::BlankName);
        }
        Ok(())
    }

    /// Build the custom control. Call [`validate`](Self::validate) first.
    pub fn into_control(self) -> Control {
        let group = self
            .group
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty());
        Control {
            id: ControlId::new(self.id.trim()),
            name: self.name.trim().to_string(),
            description: self.description,
            is_implemented: self.is_implemented,
            priority: Some(self.priority.unwrap_or_default()),
            group,
            is_custom: true,
        }
    }
}
