//! # Progress
//!
//! Completion of a set of controls as `implemented / total`, rendered as a
//! whole-number percentage.
//!
//! ## Rounding
//!
//! Half-up to the nearest integer, computed in integer arithmetic. Two
//! boundary rules apply on top of plain rounding:
//!
//! - an empty set reports `0`, never NaN;
//! - an incomplete set never reports `100`, even when the ratio rounds up
//!   (199 of 200 is 99), so `100` always means every control is done.
//!
//! A `Progress` is only ever counted from controls, so `implemented` can
//! never exceed `total`.

use cfx_core::Control;

/// Implemented and total counts over a set of controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    implemented: usize,
    total: usize,
}

impl Progress {
    /// Count implemented controls.
    pub fn from_controls<'a, I>(controls: I) -> Self
    where
        I: IntoIterator<Item = &'a Control>,
    {
        controls.into_iter().fold(Self::default(), |acc, c| Self {
            implemented: acc.implemented + usize::from(c.is_implemented),
            total: acc.total + 1,
        })
    }

    /// Number of controls marked implemented.
    pub fn implemented(&self) -> usize {
        self.implemented
    }

    /// Number of controls counted.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Completion percentage in `0..=100`.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let rounded = (self.implemented * 200 + self.total) / (self.total * 2);
        let pct = if self.implemented < self.total {
            rounded.min(99)
        } else {
            rounded.min(100)
        };
        // pct <= 100 so the conversion cannot truncate.
        pct as u8
    }

    /// Whether every counted control is implemented. False for an empty set.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.implemented == self.total
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} of {} controls implemented ({}%)",
            self.implemented,
            self.total,
            self.percent()
        )
    }
}
