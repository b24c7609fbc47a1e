//! # Control Priority
//!
//! The four priority levels a framework author (or a user adding a custom
//! control) can attach to a control. Priority is display metadata: it does
//! not influence grouping or progress.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CfxError;

/// Priority of a compliance control, most urgent first.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Must be addressed before anything else.
    #[serde(alias = "Critical")]
    Critical,
    /// Important, address early.
    #[serde(alias = "High")]
    High,
    /// Normal priority.
    #[serde(alias = "Medium")]
    Medium,
    /// Nice to have. The default for custom controls.
    #[default]
    #[serde(alias = "Low")]
    Low,
}

impl Priority {
    /// Returns the lowercase string identifier for this priority.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Human label as shown on a checklist row (`"Critical"`, `"High"`, ...).
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = CfxError;

    /// Parse a priority, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(CfxError::UnknownPriority(s.to_string())),
        }
    }
}
