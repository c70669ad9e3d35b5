//! Constraint Evaluator - derives disablement and capacity annotations.
//!
//! The evaluator is a pure function of the static layout and the set of
//! checked options. Its output replaces the previous derived state
//! wholesale; nothing is patched incrementally.
//!
//! # Algorithm
//!
//! 1. Global phase: when the global cap is bounded and the running total
//!    has reached it, every unchecked checkbox in the form is disabled and
//!    no section-level relaxation happens.
//! 2. Section phase (global cap not reached): a section whose effective
//!    count reached its own cap, or whose `all` option is checked, has its
//!    unchecked checkboxes disabled. Otherwise its options stay enabled,
//!    except unchecked `all` options whose projection does not fit.
//!
//! The `all` projection runs for every section in both phases, so an
//! option frozen by the global phase still tells the user why.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::{FormLayout, Section, SelectionCap};
use crate::domain::foundation::OptionId;

/// Why an unchecked `all` option cannot be checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CapacityViolation {
    /// Checking it would push the form total over the global cap.
    TotalCap { projected: u32, limit: u32 },
    /// The section holds more items than its own cap allows.
    SectionCap { section_size: u32, limit: u32 },
}

impl fmt::Display for CapacityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TotalCap { projected, limit } => {
                write!(f, "would raise the total to {} (limit {})", projected, limit)
            }
            Self::SectionCap {
                section_size,
                limit,
            } => write!(
                f,
                "section holds {} items but allows {}",
                section_size, limit
            ),
        }
    }
}

/// Derived state produced by one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintDecision {
    pub disabled: BTreeSet<OptionId>,
    pub errored: BTreeMap<OptionId, CapacityViolation>,
    pub total_count: u32,
    pub global_cap_reached: bool,
}

/// Selection-capacity rules.
pub struct ConstraintEvaluator;

impl ConstraintEvaluator {
    /// Sum of every section's effective count.
    pub fn total_count(layout: &FormLayout, checked: &BTreeSet<OptionId>) -> u32 {
        layout
            .sections()
            .iter()
            .map(|s| s.effective_count(checked))
            .sum()
    }

    /// Recomputes the disabled and errored sets from scratch.
    ///
    /// # Edge Cases
    /// - Section without options: nothing to disable, always satisfied
    /// - `user_input` options: never disabled, never annotated
    /// - Checked options: never disabled, so they can always be unchecked
    pub fn evaluate(layout: &FormLayout, checked: &BTreeSet<OptionId>) -> ConstraintDecision {
        let total_cap = layout.total_max_select();
        let total_count = Self::total_count(layout, checked);
        let mut decision = ConstraintDecision {
            total_count,
            global_cap_reached: total_cap.reached_by(total_count),
            ..ConstraintDecision::default()
        };

        for section in layout.sections() {
            let freeze = decision.global_cap_reached
                || section.all_checked(checked)
                || section.max_select().reached_by(section.effective_count(checked));

            if freeze {
                decision.disabled.extend(
                    section
                        .checkable_options()
                        .map(|o| o.id())
                        .filter(|id| !checked.contains(id)),
                );
            }

            for option in section.options().iter().filter(|o| o.is_all()) {
                if checked.contains(&option.id()) {
                    continue;
                }
                if let Some(violation) =
                    Self::project_all(section, checked, total_count, total_cap)
                {
                    decision.disabled.insert(option.id());
                    decision.errored.insert(option.id(), violation);
                }
            }
        }

        decision
    }

    /// Checks whether checking an unchecked `all` option would fit.
    fn project_all(
        section: &Section,
        checked: &BTreeSet<OptionId>,
        total_count: u32,
        total_cap: SelectionCap,
    ) -> Option<CapacityViolation> {
        let size = section.size();
        let projected = (total_count + size).saturating_sub(section.effective_count(checked));

        if let Some(limit) = total_cap.limit().filter(|_| total_cap.exceeded_by(projected)) {
            return Some(CapacityViolation::TotalCap { projected, limit });
        }
        if let Some(limit) = section.max_select().limit().filter(|limit| size > *limit) {
            return Some(CapacityViolation::SectionCap {
                section_size: size,
                limit,
            });
        }
        None
    }
}
