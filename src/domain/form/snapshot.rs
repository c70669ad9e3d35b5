//! Read-only results handed to the conversation on submission.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{FormLayout, SelectionState};
use crate::domain::foundation::OptionId;

/// Separator between the button text and the JSON selections.
pub const SELECTIONS_SEPARATOR: &str = " - Sélections: ";

/// What one section reports: checked display names and its free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSelection {
    pub section: String,
    pub selections: Vec<String>,
    pub user_input: String,
}

impl SectionSelection {
    fn is_reportable(&self) -> bool {
        !self.selections.is_empty() || !self.user_input.is_empty()
    }
}

/// Ordered per-section results, restricted to sections with something to say.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSnapshot {
    sections: Vec<SectionSelection>,
}

impl SelectionSnapshot {
    /// Captures the current state.
    ///
    /// A section's free text joins its non-empty `user_input` values with
    /// newlines; a single field is reported verbatim.
    pub fn capture(layout: &FormLayout, state: &SelectionState) -> Self {
        let sections = layout
            .sections()
            .iter()
            .map(|section| SectionSelection {
                section: section.label().to_string(),
                selections: section
                    .checkable_options()
                    .filter(|o| state.is_checked(o.id()))
                    .map(|o| o.name().to_string())
                    .collect(),
                user_input: section
                    .user_input_options()
                    .map(|o| state.free_text(o.id()))
                    .filter(|text| !text.is_empty())
                    .collect::<Vec<_>>()
                    .join("\n"),
            })
            .filter(SectionSelection::is_reportable)
            .collect();

        Self { sections }
    }

    pub fn from_sections(sections: Vec<SectionSelection>) -> Self {
        Self {
            sections: sections
                .into_iter()
                .filter(SectionSelection::is_reportable)
                .collect(),
        }
    }

    pub fn sections(&self) -> &[SectionSelection] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The trimmed free text, when it is the only thing reported.
    ///
    /// Exactly one section, no checkbox selections, non-blank text.
    pub fn free_text_only(&self) -> Option<&str> {
        match self.sections.as_slice() {
            [only] if only.selections.is_empty() => {
                let trimmed = only.user_input.trim();
                (!trimmed.is_empty()).then_some(trimmed)
            }
            _ => None,
        }
    }

    /// Compact JSON array of the reported sections.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.sections)
    }

    /// Builds the text payload sent when `button_text` is clicked.
    pub fn payload(&self, button_text: &str) -> Result<OutboundPayload, serde_json::Error> {
        if let Some(text) = self.free_text_only() {
            return Ok(OutboundPayload::new(text));
        }
        Ok(OutboundPayload::new(format!(
            "{}{}{}",
            button_text,
            SELECTIONS_SEPARATOR,
            self.to_json()?
        )))
    }
}

/// A single-select choice, reported the instant it is made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleChoice {
    #[serde(skip)]
    pub option: Option<OptionId>,
    pub section: String,
    pub selections: Vec<String>,
}

impl SingleChoice {
    pub fn new(option: OptionId, section: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            option: Some(option),
            section: section.into(),
            selections: vec![name.into()],
        }
    }

    /// The display name of the chosen option.
    pub fn name(&self) -> &str {
        self.selections.first().map(String::as_str).unwrap_or("")
    }

    /// Single-select payload: the option's display name, nothing else.
    pub fn payload(&self) -> OutboundPayload {
        OutboundPayload::new(self.name())
    }
}

/// Text handed to the chat transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutboundPayload(String);

impl OutboundPayload {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for OutboundPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
