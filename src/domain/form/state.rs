//! Mutable per-render selection state.

use std::collections::{BTreeMap, BTreeSet};

use super::{CapacityViolation, ConstraintDecision};
use crate::domain::foundation::OptionId;

/// What the user has checked and typed, plus the derived decisions.
///
/// `checked` and `free_text` are authoritative. `disabled` and `errored`
/// are only ever replaced by a fresh `ConstraintDecision`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    checked: BTreeSet<OptionId>,
    free_text: BTreeMap<OptionId, String>,
    disabled: BTreeSet<OptionId>,
    errored: BTreeMap<OptionId, CapacityViolation>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn checked(&self) -> &BTreeSet<OptionId> {
        &self.checked
    }

    pub fn is_checked(&self, id: OptionId) -> bool {
        self.checked.contains(&id)
    }

    pub fn disabled(&self) -> &BTreeSet<OptionId> {
        &self.disabled
    }

    pub fn is_disabled(&self, id: OptionId) -> bool {
        self.disabled.contains(&id)
    }

    pub fn errored(&self) -> &BTreeMap<OptionId, CapacityViolation> {
        &self.errored
    }

    /// Latest text typed into a free-text field, empty if none.
    pub fn free_text(&self, id: OptionId) -> &str {
        self.free_text.get(&id).map(String::as_str).unwrap_or("")
    }

    /// Flips membership and returns the new checked value.
    pub(crate) fn flip(&mut self, id: OptionId) -> bool {
        if self.checked.remove(&id) {
            false
        } else {
            self.checked.insert(id);
            true
        }
    }

    pub(crate) fn uncheck_all<I: IntoIterator<Item = OptionId>>(&mut self, ids: I) {
        for id in ids {
            self.checked.remove(&id);
        }
    }

    pub(crate) fn set_free_text(&mut self, id: OptionId, value: String) {
        self.free_text.insert(id, value);
    }

    /// Replaces the derived sets.
    pub(crate) fn apply(&mut self, decision: ConstraintDecision) {
        self.disabled = decision.disabled;
        self.errored = decision.errored;
    }
}
