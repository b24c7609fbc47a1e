//! # Control — A Single Compliance Requirement
//!
//! A control is one individually trackable requirement of a framework
//! (e.g. NIST CSF `GV.OC-01` or ISO 27001 `A.5.1`). The only field a user
//! changes during a checklist session is `is_implemented`.
//!
//! ## Grouping Key
//!
//! Controls optionally name a `group` (`"GOVERN"`, `"Access Control"`).
//! A control without a group, or with a blank one, belongs to the
//! fallback group [`GENERAL_GROUP`].

use serde::{Deserialize, Serialize};

use crate::identity::ControlId;
use crate::priority::Priority;

/// Group key shared by every control that does not name a group.
pub const GENERAL_GROUP: &str = "General Controls";

/// A single compliance requirement within a framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    /// Identifier, unique within the owning framework's control list.
    pub id: ControlId,
    /// Human label.
    pub name: String,
    /// Longer explanation of the requirement.
    #[serde(default)]
    pub description: String,
    /// Whether the requirement has been marked implemented.
    #[serde(default)]
    pub is_implemented: bool,
    /// Optional priority level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Optional grouping key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// True for controls added by the user during a session.
    #[serde(default)]
    pub is_custom: bool,
}

impl Control {
    /// Create an unimplemented, ungrouped control with no priority.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ControlId::new(id),
            name: name.into(),
            description: String::new(),
            is_implemented: false,
            priority: None,
            group: None,
            is_custom: false,
        }
    }

    /// Set the grouping key.
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

    /// Set the implemented flag.
    pub fn implemented(mut self, is_implemented: bool) -> Self {
        self.is_implemented = is_implemented;
        self
    }

    /// Whether the control names a non-blank group of its own.
    pub fn has_explicit_group(&self) -> bool {
        self.group.as_deref().is_some_and(|g| !g.trim().is_empty())
    }

    /// The key this control is bucketed under.
    ///
    /// Returns the control's own group when present and non-blank, otherwise
    /// [`GENERAL_GROUP`].
    pub fn group_key(&self) -> &str {
        match self.group.as_deref() {
            Some(g) if !g.trim().is_empty() => g,
            _ => GENERAL_GROUP,
        }
    }
}
