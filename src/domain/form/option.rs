//! Selectable options and their actions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::OptionId;

/// What checking an option means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OptionAction {
    /// A plain checkbox that counts as one selection.
    #[default]
    Normal,
    /// Stands for every normal option of its section.
    All,
    /// A free-text field; never counts toward a cap.
    UserInput,
}

impl OptionAction {
    /// Maps a descriptor action string; anything unrecognised is a plain option.
    pub fn from_descriptor(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("all") => OptionAction::All,
            Some("user_input") => OptionAction::UserInput,
            _ => OptionAction::Normal,
        }
    }

    /// True for options rendered as a checkbox (or radio in single-select mode).
    pub fn is_checkable(&self) -> bool {
        !matches!(self, OptionAction::UserInput)
    }
}

impl fmt::Display for OptionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::All => write!(f, "all"),
            Self::UserInput => write!(f, "user_input"),
        }
    }
}

/// An option of a section. Immutable once the layout is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormOption {
    id: OptionId,
    name: String,
    action: OptionAction,
    /// Heading shown above a free-text field.
    label: Option<String>,
    /// Hint shown inside an empty free-text field.
    placeholder: Option<String>,
}

impl FormOption {
    pub fn new(id: OptionId, name: impl Into<String>, action: OptionAction) -> Self {
        Self {
            id,
            name: name.into(),
            action,
            label: None,
            placeholder: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn id(&self) -> OptionId {
        self.id
    }

    /// Display name; this is what gets reported back to the conversation.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn action(&self) -> OptionAction {
        self.action
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn is_normal(&self) -> bool {
        self.action == OptionAction::Normal
    }

    pub fn is_all(&self) -> bool {
        self.action == OptionAction::All
    }

    pub fn is_user_input(&self) -> bool {
        self.action == OptionAction::UserInput
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SectionId;

    #[test]
    fn from_descriptor_recognises_known_actions() {
        assert_eq!(OptionAction::from_descriptor(Some("all")), OptionAction::All);
        assert_eq!(
            OptionAction::from_descriptor(Some("user_input")),
            OptionAction::UserInput
        );
        assert_eq!(OptionAction::from_descriptor(Some("normal")), OptionAction::Normal);
    }

    #[test]
    fn from_descriptor_falls_back_to_normal() {
        assert_eq!(OptionAction::from_descriptor(None), OptionAction::Normal);
        assert_eq!(OptionAction::from_descriptor(Some("select")), OptionAction::Normal);
        assert_eq!(OptionAction::from_descriptor(Some("")), OptionAction::Normal);
    }

    #[test]
    fn only_user_input_is_not_checkable() {
        assert!(OptionAction::Normal.is_checkable());
        assert!(OptionAction::All.is_checkable());
        assert!(!OptionAction::UserInput.is_checkable());
    }

    #[test]
    fn builder_sets_free_text_presentation() {
        let option = FormOption::new(
            OptionId::new(SectionId::new(0), 2),
            "Autre",
            OptionAction::UserInput,
        )
        .with_label("Votre marché")
        .with_placeholder("Tapez ici");

        assert!(option.is_user_input());
        assert_eq!(option.label(), Some("Votre marché"));
        assert_eq!(option.placeholder(), Some("Tapez ici"));
    }

    #[test]
    fn action_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&OptionAction::UserInput).unwrap(),
            "\"user_input\""
        );
    }
}
