//! # Checklist Snapshot
//!
//! An owned, serializable rendering of a session at one instant: overall
//! progress plus every bucket of the grouped view in display order. Built
//! by [`ChecklistSession::snapshot`](crate::ChecklistSession::snapshot).

use serde::{Deserialize, Serialize};

use cfx_core::{Control, FrameworkId, SessionId, Timestamp};

/// The state of a checklist session, ready for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistSnapshot {
    /// Session the snapshot was taken from.
    pub session_id: SessionId,
    /// Seed framework.
    pub framework_id: FrameworkId,
    /// Seed framework display name.
    pub framework_name: String,
    /// When the session was opened.
    pub opened_at: Timestamp,
    /// Implemented controls across all groups.
    pub implemented: usize,
    /// All controls across all groups.
    pub total: usize,
    /// Overall completion percentage.
    pub percent: u8,
    /// Buckets in display order.
    pub groups: Vec<GroupSnapshot>,
}

/// One bucket of a [`ChecklistSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSnapshot {
    /// Group key.
    pub key: String,
    /// Whether the group header is suppressed.
    pub implicit: bool,
    /// Implemented controls in this bucket.
    pub implemented: usize,
    /// Controls in this bucket.
    pub total: usize,
    /// Completion percentage of this bucket.
    pub percent: u8,
    /// The bucket's controls in list order.
    pub controls: Vec<Control>,
}
