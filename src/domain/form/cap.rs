//! Selection capacity value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of effective selections, or no limit at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SelectionCap {
    Bounded(u32),
    #[default]
    Unbounded,
}

impl SelectionCap {
    /// Interprets a raw descriptor value.
    ///
    /// Missing, zero and negative values carry no limit.
    pub fn from_raw(raw: Option<i64>) -> Self {
        match raw {
            Some(n) if n > 0 => SelectionCap::Bounded(u32::try_from(n).unwrap_or(u32::MAX)),
            _ => SelectionCap::Unbounded,
        }
    }

    pub fn is_bounded(&self) -> bool {
        matches!(self, SelectionCap::Bounded(_))
    }

    /// Returns the limit, if any.
    pub fn limit(&self) -> Option<u32> {
        match self {
            SelectionCap::Bounded(n) => Some(*n),
            SelectionCap::Unbounded => None,
        }
    }

    /// True when `count` selections leave no headroom.
    pub fn reached_by(&self, count: u32) -> bool {
        self.limit().is_some_and(|max| count >= max)
    }

    /// True when `count` selections would break the cap.
    pub fn exceeded_by(&self, count: u32) -> bool {
        self.limit().is_some_and(|max| count > max)
    }
}

impl fmt::Display for SelectionCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionCap::Bounded(n) => write!(f, "{}", n),
            SelectionCap::Unbounded => write!(f, "unbounded"),
        }
    }
}
