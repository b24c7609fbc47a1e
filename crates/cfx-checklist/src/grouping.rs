//! # Grouping & Group Ordering
//!
//! Buckets a control list by group key and orders the buckets for display.
//!
//! ## Bucketing
//!
//! Each control goes into the bucket for [`Control::group_key`]. Controls
//! keep their list order inside a bucket. Every control without a group
//! shares the single [`GENERAL_GROUP`](cfx_core::GENERAL_GROUP) bucket.
//!
//! ## Bucket order
//!
//! A bucket's *origin* is the lowest index in the seed control list at
//! which a control with the same key appears. Buckets sort by origin
//! ascending, so NIST CSF keeps GOVERN → IDENTIFY → PROTECT → DETECT →
//! RESPOND → RECOVER no matter what is toggled or appended. Keys that never
//! occur in the seed (introduced by custom controls) have no origin and
//! follow every seeded bucket in lexicographic key order.
//!
//! Buckets are collected in a `Vec` in first-seen order and then sorted;
//! the hash map is only an index into that `Vec`.

use std::cmp::Ordering;
use std::collections::HashMap;

use cfx_core::Control;

use crate::progress::Progress;

/// One display bucket of controls sharing a group key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlGroup<'a> {
    /// The group key (the control's group, or the general fallback).
    pub key: &'a str,
    /// True when the bucket's first control has no group of its own. The
    /// header for such a bucket is not shown, but its controls still count.
    pub implicit: bool,
    /// Index of the key's first appearance in the seed list, if any.
    pub origin: Option<usize>,
    /// Controls in list order.
    pub controls: Vec<&'a Control>,
}

impl ControlGroup<'_> {
    /// Implemented/total counts for this bucket alone.
    pub fn progress(&self) -> Progress {
        Progress::from_controls(self.controls.iter().copied())
    }
}

/// Group `controls` into ordered buckets, using `seed` to resolve origins.
pub fn group_controls<'a>(controls: &'a [Control], seed: &[Control]) -> Vec<ControlGroup<'a>> {
    let mut groups: Vec<ControlGroup<'a>> = Vec::new();
    let mut slots: HashMap<&'a str, usize> = HashMap::new();

    for control in controls {
        let key = control.group_key();
        let slot = match slots.get(key) {
            Some(&slot) => slot,
            None => {
                groups.push(ControlGroup {
                    key,
                    implicit: !control.has_explicit_group(),
                    origin: origin_index(seed, key),
                    controls: Vec::new(),
                });
                slots.insert(key, groups.len() - 1);
                groups.len() - 1
            }
        };
        groups[slot].controls.push(control);
    }

    groups.sort_by(compare_groups);
    groups
}

/// Position of the first seed control bucketed under `key`.
fn origin_index(seed: &[Control], key: &str) -> Option<usize> {
    seed.iter().position(|c| c.group_key() == key)
}

fn compare_groups(a: &ControlGroup<'_>, b: &ControlGroup<'_>) -> Ordering {
    match (a.origin, b.origin) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.key.cmp(b.key),
    }
}
