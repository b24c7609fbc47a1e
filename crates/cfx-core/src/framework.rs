//! # Framework — A Compliance Standard
//!
//! A named compliance or security standard (NIST CSF, ISO/IEC 27001, GDPR,
//! HIPAA, ...) together with its ordered control list. Frameworks are
//! read-only seeds: checklist sessions copy `controls` and never write back.
//!
//! The identity and presentation fields (`color_theme`, `category`, ...)
//! are opaque to the checklist engine.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::control::Control;
use crate::error::CfxError;
use crate::identity::{ControlId, FrameworkId};

/// A compliance framework and its ordered control list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Framework {
    /// Catalog identifier (e.g. `"nist-csf"`).
    pub id: FrameworkId,
    /// Display name (e.g. `"NIST Cybersecurity Framework 2.0"`).
    pub name: String,
    /// Presentation theme name.
    #[serde(default)]
    pub color_theme: String,
    /// Library category (e.g. `"Privacy"`, `"Security"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Summary text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Published version of the standard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Link to the authoritative text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_url: Option<String>,
    /// Ordered control list.
    #[serde(default)]
    pub controls: Vec<Control>,
}

impl Framework {
    /// Create a framework with no metadata and the given controls.
    pub fn new(id: impl Into<String>, name: impl Into<String>, controls: Vec<Control>) -> Self {
        Self {
            id: FrameworkId::new(id),
            name: name.into(),
            color_theme: String::new(),
            category: None,
            description: None,
            version: None,
            reference_url: None,
            controls,
        }
    }

    /// Control ids that appear more than once, in order of their second
    /// occurrence. Each duplicate id is reported once.
    pub fn duplicate_control_ids(&self) -> Vec<&ControlId> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut dups = Vec::new();
        for c in &self.controls {
            if !seen.insert(&c.id) && reported.insert(&c.id) {
                dups.push(&c.id);
            }
        }
        dups
    }

    /// Structural validation: framework id and name, and every control's id
    /// and name, must be non-blank.
    ///
    /// Duplicate control ids are not a validation failure; see
    /// [`Framework::duplicate_control_ids`].
    pub fn validate(&self) -> Result<(), CfxError> {
        if self.id.as_str().trim().is_empty() {
            return Err(CfxError::Validation("framework id is blank".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(CfxError::Validation(format!(
                "framework {} has a blank name",
                self.id
            )));
        }
        for (index, control) in self.controls.iter().enumerate() {
            if control.id.is_blank() {
                return Err(CfxError::Validation(format!(
                    "framework {}: control #{index} has a blank id",
                    self.id
                )));
            }
            if control.name.trim().is_empty() {
                return Err(CfxError::Validation(format!(
                    "framework {}: control {} has a blank name",
                    self.id, control.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Framework {
        Framework::new(
            "nist-csf",
            "NIST Cybersecurity Framework 2.0",
            vec![
                Control::new("GV.OC-01", "Mission understood").with_group("GOVERN"),
                Control::new("ID.AM-01", "Hardware inventoried").with_group("IDENTIFY"),
            ],
        )
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_framework_id() {
        let mut fw = sample();
        fw.id = FrameworkId::new(" ");
        assert!(fw.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut fw = sample();
        fw.name = String::new();
        assert!(fw.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_control_id() {
        let mut fw = sample();
        fw.controls.push(Control::new("", "Nameless id"));
        let err = fw.validate().unwrap_err();
        assert!(err.to_string().contains("control #2"));
    }

    #[test]
    fn test_validate_rejects_blank_control_name() {
        let mut fw = sample();
        fw.controls.push(Control::new("X1", "   "));
        assert!(fw.validate().is_err());
    }

    #[test]
    fn test_empty_control_list_is_valid() {
        let fw = Framework::new("empty", "Empty", Vec::new());
        assert!(fw.validate().is_ok());
        assert!(fw.duplicate_control_ids().is_empty());
    }

    #[test]
    fn test_duplicate_control_ids_reported_once() {
        let mut fw = sample();
        fw.controls.push(Control::new("GV.OC-01", "Again"));
        fw.controls.push(Control::new("GV.OC-01", "And again"));
        let dups = fw.duplicate_control_ids();
        assert_eq!(dups, vec![&ControlId::from("GV.OC-01")]);
    }

    #[test]
    fn test_deserialize_yaml_document() {
        let yaml = r#"
id: gdpr
name: General Data Protection Regulation
color_theme: blue
category: Privacy
controls:
  - id: Art.5
    name: Principles relating to processing
  - id: Art.32
    name: Security of processing
    priority: critical
"#;
        let fw: Framework = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(fw.id.as_str(), "gdpr");
        assert_eq!(fw.category.as_deref(), Some("Privacy"));
        assert_eq!(fw.controls.len(), 2);
        assert!(fw.version.is_none());
    }
}
