//! # Event Time
//!
//! `Timestamp` marks when a checklist session was opened and when each of
//! its transitions happened. Values are UTC at whole-second resolution and
//! render as `YYYY-MM-DDTHH:MM:SSZ`, so two events in the same second
//! compare equal and keep their log order.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A whole-second UTC instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current second.
    pub fn now() -> Self {
        Self::from_utc(Utc::now())
    }

    /// Drop the sub-second part of `instant`.
    pub fn from_utc(instant: DateTime<Utc>) -> Self {
        Self(instant.trunc_subsecs(0))
    }

    /// `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}
