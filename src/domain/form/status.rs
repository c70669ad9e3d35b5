//! Form lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle of one rendered form.
///
/// `Submitted` is terminal: once the payload left, the form is a
/// read-only snapshot and every further interaction is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    /// Accepting toggles and text.
    #[default]
    Open,
    /// Payload sent (submit button or single-select choice).
    Submitted,
}

impl FormStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

impl StateMachine for FormStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!((self, target), (FormStatus::Open, FormStatus::Submitted))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            FormStatus::Open => vec![FormStatus::Submitted],
            FormStatus::Submitted => vec![],
        }
    }
}

impl fmt::Display for FormStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "Open"),
            Self::Submitted => write!(f, "Submitted"),
        }
    }
}
