//! # Checklist Session
//!
//! The working state of one checklist view over one framework.
//!
//! ```text
//! Framework ──copy──▶ ChecklistSession ──toggle_implemented──▶ (same session)
//!                            │          ──add_custom_control──▶ (same session, +1 control)
//!                            ├──▶ grouped_view()  (derived on every call)
//!                            ├──▶ progress()      (derived on every call)
//!                            └──▶ snapshot()
//! ```
//!
//! ## Ownership
//!
//! The session copies `framework.controls` at construction. Toggles and
//! additions never reach the framework, so reopening the same framework
//! starts a clean session. Nothing is persisted: dropping the session
//! discards every toggle and custom control.
//!
//! ## Control list layout
//!
//! `controls[..seed_len]` is the framework's list in its original order;
//! only `is_implemented` ever changes there. Custom controls are appended
//! after it. Group ordering reads the seed prefix to resolve origins.
//!
//! ## Duplicate ids
//!
//! By default a custom control may reuse an existing id
//! ([`DuplicateIdPolicy::Allow`]); toggling that id then affects the first
//! control carrying it. [`DuplicateIdPolicy::Reject`] refuses such drafts.

use serde::{Deserialize, Serialize};

use cfx_core::{CfxError, Control, ControlId, Framework, FrameworkId, SessionId, Timestamp};

use crate::draft::{ControlDraft, DraftRejection};
use crate::grouping::{group_controls, ControlGroup};
use crate::progress::Progress;
use crate::snapshot::{ChecklistSnapshot, GroupSnapshot};

// ─── Options ─────────────────────────────────────────────────────────

/// What to do with a custom control whose id is already in the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateIdPolicy {
    /// Append it anyway. Toggle-by-id then hits the first match.
    #[default]
    Allow,
    /// Reject the draft with [`DraftRejection::DuplicateId`].
    Reject,
}

impl DuplicateIdPolicy {
    /// Lowercase identifier, as used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Reject => "reject",
        }
    }
}

impl std::fmt::Display for DuplicateIdPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DuplicateIdPolicy {
    type Err = CfxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allow" => Ok(Self::Allow),
            "reject" => Ok(Self::Reject),
            other => Err(CfxError::Validation(format!(
                "unknown duplicate id policy {other:?} (expected \"allow\" or \"reject\")"
            ))),
        }
    }
}

/// Per-session behavior switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionOptions {
    /// Handling of custom controls that reuse an existing id.
    #[serde(default)]
    pub duplicate_ids: DuplicateIdPolicy,
}

// ─── Events ──────────────────────────────────────────────────────────

/// What happened in a session transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChecklistEventKind {
    /// A control's implemented flag was flipped.
    Toggled {
        /// The toggled control.
        control_id: ControlId,
        /// The flag after the flip.
        implemented: bool,
    },
    /// A custom control was appended.
    ControlAdded {
        /// The new control's id.
        control_id: ControlId,
    },
}

/// Record of one accepted session transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistEvent {
    /// When the transition happened.
    pub at: Timestamp,
    /// The transition.
    pub kind: ChecklistEventKind,
}

// ─── Session ─────────────────────────────────────────────────────────

/// Mutable, in-memory checklist over one framework's controls.
#[derive(Debug, Clone)]
pub struct ChecklistSession {
    id: SessionId,
    framework_id: FrameworkId,
    framework_name: String,
    options: SessionOptions,
    controls: Vec<Control>,
    seed_len: usize,
    opened_at: Timestamp,
    events: Vec<ChecklistEvent>,
}

impl ChecklistSession {
    /// Open a session with default options.
    pub fn new(framework: &Framework) -> Self {
        Self::with_options(framework, SessionOptions::default())
    }

    /// Open a session over a copy of `framework.controls`.
    pub fn with_options(framework: &Framework, options: SessionOptions) -> Self {
        let session = Self {
            id: SessionId::new(),
            framework_id: framework.id.clone(),
            framework_name: framework.name.clone(),
            options,
            controls: framework.controls.clone(),
            seed_len: framework.controls.len(),
            opened_at: Timestamp::now(),
            events: Vec::new(),
        };
        tracing::debug!(
            session = %session.id,
            framework = %session.framework_id,
            controls = session.seed_len,
            "opened checklist session"
        );
        session
    }

    /// Session identifier.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The framework this session was seeded from.
    pub fn framework_id(&self) -> &FrameworkId {
        &self.framework_id
    }

    /// Display name of the framework.
    pub fn framework_name(&self) -> &str {
        &self.framework_name
    }

    /// All controls: seed controls in framework order, then custom ones.
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// The seed portion of the control list.
    pub fn seed_controls(&self) -> &[Control] {
        &self.controls[..self.seed_len]
    }

    /// Controls added during this session, in the order they were added.
    pub fn custom_controls(&self) -> &[Control] {
        &self.controls[self.seed_len..]
    }

    /// First control with the given id.
    pub fn control(&self, id: &ControlId) -> Option<&Control> {
        self.controls.iter().find(|c| &c.id == id)
    }

    /// Number of controls in the session.
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Whether the session has no controls at all.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Accepted transitions, oldest first.
    pub fn events(&self) -> &[ChecklistEvent] {
        &self.events
    }

    /// Flip `is_implemented` on the first control with this id.
    ///
    /// Returns the new value, or `None` when no control matches. An unknown
    /// id leaves the session unchanged and records nothing.
    pub fn toggle_implemented(&mut self, id: &ControlId) -> Option<bool> {
        let control = self.controls.iter_mut().find(|c| &c.id == id)?;
        control.is_implemented = !control.is_implemented;
        let implemented = control.is_implemented;

        tracing::debug!(
            session = %self.id,
            control = %id,
            implemented,
            "toggled control"
        );
        self.record(ChecklistEventKind::Toggled {
            control_id: id.clone(),
            implemented,
        });
        Some(implemented)
    }

    /// Validate `draft` and append it as a custom control.
    ///
    /// On rejection the control list is unchanged and no event is recorded.
    pub fn add_custom_control(&mut self, draft: ControlDraft) -> Result<&Control, DraftRejection> {
        if let Err(rejection) = draft.validate() {
            tracing::debug!(session = %self.id, %rejection, "rejected custom control");
            return Err(rejection);
        }

        let control_id = draft.control_id();
        if self.control(&control_id).is_some() {
            match self.options.duplicate_ids {
                DuplicateIdPolicy::Reject => {
                    let rejection = DraftRejection::DuplicateId(control_id);
                    tracing::debug!(session = %self.id, %rejection, "rejected custom control");
                    return Err(rejection);
                }
                DuplicateIdPolicy::Allow => {
                    tracing::warn!(
                        session = %self.id,
                        control = %control_id,
                        "custom control reuses an existing id; toggles will hit the first match"
                    );
                }
            }
        }

        let control = draft.into_control();
        tracing::debug!(
            session = %self.id,
            control = %control.id,
            group = control.group_key(),
            "added custom control"
        );
        self.record(ChecklistEventKind::ControlAdded {
            control_id: control.id.clone(),
        });
        self.controls.push(control);
        let index = self.controls.len() - 1;
        Ok(&self.controls[index])
    }

    /// Controls bucketed by group, buckets in display order.
    pub fn grouped_view(&self) -> Vec<ControlGroup<'_>> {
        group_controls(&self.controls, self.seed_controls())
    }

    /// Completion over every control in the session.
    pub fn progress(&self) -> Progress {
        Progress::from_controls(&self.controls)
    }

    /// Serializable rendering of the current state.
    pub fn snapshot(&self) -> ChecklistSnapshot {
        let progress = self.progress();
        let groups = self
            .grouped_view()
            .into_iter()
            .map(|group| {
                let group_progress = group.progress();
                GroupSnapshot {
                    key: group.key.to_string(),
                    implicit: group.implicit,
                    implemented: group_progress.implemented(),
                    total: group_progress.total(),
                    percent: group_progress.percent(),
                    controls: group.controls.into_iter().cloned().collect(),
                }
            })
            .collect();
        ChecklistSnapshot {
            session_id: self.id,
            framework_id: self.framework_id.clone(),
            framework_name: self.framework_name.clone(),
            opened_at: self.opened_at,
            implemented: progress.implemented(),
            total: progress.total(),
            percent: progress.percent(),
            groups,
        }
    }

    fn record(&mut self, kind: ChecklistEventKind) {
        self.events.push(ChecklistEvent {
            at: Timestamp::now(),
            kind,
        });
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use cfx_core::Priority;

    fn framework() -> Framework {
        Framework::new(
            "nist-csf",
            "NIST Cybersecurity Framework 2.0",
            vec![
                Control::new("GV.OC-01", "Mission understood").with_group("GOVERN"),
                Control::new("ID.AM-01", "Hardware inventoried").with_group("IDENTIFY"),
                Control::new("GV.RM-01", "Risk objectives agreed")
                    .with_group("GOVERN")
                    .implemented(true),
            ],
        )
    }

    fn cid(s: &str) -> ControlId {
        ControlId::from(s)
    }

    // ── Initialization ───────────────────────────────────────────────

    #[test]
    fn test_new_copies_controls() {
        let fw = framework();
        let session = ChecklistSession::new(&fw);
        assert_eq!(session.controls(), fw.controls.as_slice());
        assert_eq!(session.framework_id(), &fw.id);
        assert_eq!(session.framework_name(), fw.name);
        assert!(session.custom_controls().is_empty());
        assert!(session.events().is_empty());
    }

    #[test]
    fn test_empty_framework() {
        let fw = Framework::new("empty", "Empty", Vec::new());
        let session = ChecklistSession::new(&fw);
        assert!(session.is_empty());
        assert_eq!(session.progress().percent(), 0);
        assert!(session.grouped_view().is_empty());
    }

    #[test]
    fn test_mutation_does_not_reach_framework() {
        let fw = framework();
        let mut session = ChecklistSession::new(&fw);
        session.toggle_implemented(&cid("GV.OC-01"));
        session
            .add_custom_control(ControlDraft::new("C1", "Custom"))
            .unwrap();
        assert!(!fw.controls[0].is_implemented);
        assert_eq!(fw.controls.len(), 3);

        let fresh = ChecklistSession::new(&fw);
        assert_eq!(fresh.controls(), fw.controls.as_slice());
        assert_ne!(fresh.id(), session.id());
    }

    // ── Toggle ───────────────────────────────────────────────────────

    #[test]
    fn test_toggle_flips_and_reports() {
        let mut session = ChecklistSession::new(&framework());
        assert_eq!(session.toggle_implemented(&cid("ID.AM-01")), Some(true));
        assert!(session.control(&cid("ID.AM-01")).unwrap().is_implemented);
        assert_eq!(session.toggle_implemented(&cid("ID.AM-01")), Some(false));
        assert_eq!(session.events().len(), 2);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut session = ChecklistSession::new(&framework());
        let before = session.controls().to_vec();
        assert_eq!(session.toggle_implemented(&cid("XX.00-00")), None);
        assert_eq!(session.controls(), before.as_slice());
        assert!(session.events().is_empty());
    }

    #[test]
    fn test_toggle_preserves_order() {
        let mut session = ChecklistSession::new(&framework());
        session.toggle_implemented(&cid("GV.RM-01"));
        let ids: Vec<&str> = session.controls().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["GV.OC-01", "ID.AM-01", "GV.RM-01"]);
    }

    #[test]
    fn test_toggle_event_recorded() {
        let mut session = ChecklistSession::new(&framework());
        session.toggle_implemented(&cid("GV.OC-01"));
        assert_eq!(
            session.events()[0].kind,
            ChecklistEventKind::Toggled {
                control_id: cid("GV.OC-01"),
                implemented: true,
            }
        );
    }

    // ── Custom controls ──────────────────────────────────────────────

    #[test]
    fn test_add_appends_to_end() {
        let mut session = ChecklistSession::new(&framework());
        let added = session
            .add_custom_control(ControlDraft::new("C1", "Custom Check").with_group("GOVERN"))
            .unwrap();
        assert!(added.is_custom);
        assert_eq!(added.priority, Some(Priority::Low));
        assert_eq!(session.len(), 4);
        assert_eq!(session.controls()[3].id, cid("C1"));
        assert_eq!(session.custom_controls().len(), 1);
        assert_eq!(session.seed_controls().len(), 3);
    }

    #[test]
    fn test_add_records_event() {
        let mut session = ChecklistSession::new(&framework());
        session
            .add_custom_control(ControlDraft::new("C1", "Custom Check"))
            .unwrap();
        assert_eq!(
            session.events()[0].kind,
            ChecklistEventKind::ControlAdded {
                control_id: cid("C1")
            }
        );
    }

    #[test]
    fn test_rejected_draft_leaves_session_untouched() {
        let mut session = ChecklistSession::new(&framework());
        let before = session.controls().to_vec();
        assert_eq!(
            session
                .add_custom_control(ControlDraft::new("", "X"))
                .unwrap_err(),
            DraftRejection::BlankId
        );
        assert_eq!(
            session
                .add_custom_control(ControlDraft::new("X1", " "))
                .unwrap_err(),
            DraftRejection::BlankName
        );
        assert_eq!(session.controls(), before.as_slice());
        assert!(session.events().is_empty());
    }

    #[test]
    fn test_duplicate_id_allowed_by_default() {
        let mut session = ChecklistSession::new(&framework());
        session
            .add_custom_control(ControlDraft::new("GV.OC-01", "Shadow"))
            .unwrap();
        assert_eq!(session.len(), 4);
        // Toggle hits the first match only.
        session.toggle_implemented(&cid("GV.OC-01"));
        assert!(session.controls()[0].is_implemented);
        assert!(!session.controls()[3].is_implemented);
    }

    #[test]
    fn test_duplicate_id_rejected_when_configured() {
        let options = SessionOptions {
            duplicate_ids: DuplicateIdPolicy::Reject,
        };
        let mut session = ChecklistSession::with_options(&framework(), options);
        let err = session
            .add_custom_control(ControlDraft::new(" GV.OC-01 ", "Shadow"))
            .unwrap_err();
        assert_eq!(err, DraftRejection::DuplicateId(cid("GV.OC-01")));
        assert_eq!(session.len(), 3);

        session
            .add_custom_control(ControlDraft::new("C1", "Fresh"))
            .unwrap();
        let err = session
            .add_custom_control(ControlDraft::new("C1", "Again"))
            .unwrap_err();
        assert_eq!(err, DraftRejection::DuplicateId(cid("C1")));
        assert_eq!(session.len(), 4);
    }

    // ── Derived views ────────────────────────────────────────────────

    #[test]
    fn test_progress_tracks_state() {
        let mut session = ChecklistSession::new(&framework());
        assert_eq!(session.progress().percent(), 33);
        session.toggle_implemented(&cid("GV.OC-01"));
        assert_eq!(session.progress().percent(), 67);
        session.toggle_implemented(&cid("ID.AM-01"));
        assert_eq!(session.progress().percent(), 100);
    }

    #[test]
    fn test_grouped_view_uses_seed_order() {
        let mut session = ChecklistSession::new(&framework());
        session
            .add_custom_control(ControlDraft::new("C1", "Custom").with_group("IDENTIFY"))
            .unwrap();
        let groups = session.grouped_view();
        let keys: Vec<&str> = groups.iter().map(|g| g.key).collect();
        assert_eq!(keys, vec!["GOVERN", "IDENTIFY"]);
        let identify: Vec<&str> = groups[1].controls.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(identify, vec!["ID.AM-01", "C1"]);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut session = ChecklistSession::new(&framework());
        session.toggle_implemented(&cid("GV.OC-01"));
        let snapshot = session.snapshot();
        assert_eq!(snapshot.total, 3);
        assert_eq!(snapshot.implemented, 2);
        assert_eq!(snapshot.percent, 67);
        assert_eq!(snapshot.groups.len(), 2);
        assert_eq!(snapshot.groups[0].key, "GOVERN");
        assert_eq!(snapshot.groups[0].implemented, 2);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["framework_id"], "nist-csf");
        assert_eq!(json["groups"][1]["key"], "IDENTIFY");
    }

    #[test]
    fn test_snapshot_carries_session_metadata() {
        let session = ChecklistSession::new(&framework());
        let snapshot = session.snapshot();
        assert_eq!(snapshot.session_id, session.id());
        assert_eq!(snapshot.framework_name, "NIST Cybersecurity Framework 2.0");

        let json = serde_json::to_value(&snapshot).unwrap();
        let opened_at = json["opened_at"].as_str().unwrap();
        assert!(opened_at.ends_with('Z'));
        assert_eq!(opened_at, snapshot.opened_at.to_string());
    }

    // ── Options ──────────────────────────────────────────────────────

    #[test]
    fn test_policy_parse() {
        assert_eq!("allow".parse::<DuplicateIdPolicy>().unwrap(), DuplicateIdPolicy::Allow);
        assert_eq!("Reject".parse::<DuplicateIdPolicy>().unwrap(), DuplicateIdPolicy::Reject);
        assert!("maybe".parse::<DuplicateIdPolicy>().is_err());
    }

    #[test]
    fn test_options_deserialize_default() {
        let options: SessionOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.duplicate_ids, DuplicateIdPolicy::Allow);
        let options: SessionOptions =
            serde_json::from_str(r#"{"duplicate_ids":"reject"}"#).unwrap();
        assert_eq!(options.duplicate_ids, DuplicateIdPolicy::Reject);
    }
}
