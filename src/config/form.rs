//! Form rendering defaults

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::form::{LayoutDefaults, DEFAULT_TOTAL_MAX_SELECT};

/// Defaults applied to every form built from a trace
#[derive(Debug, Clone, Deserialize)]
pub struct FormConfig {
    /// Global cap used when the payload omits `totalMaxSelect`
    #[serde(default = "default_total_max_select")]
    pub default_total_max_select: u32,

    /// Label above free-text fields without their own label
    #[serde(default = "default_user_input_label")]
    pub user_input_label: String,

    /// Placeholder of free-text fields without their own placeholder
    #[serde(default = "default_user_input_placeholder")]
    pub user_input_placeholder: String,

    /// Inline message next to an option refused for capacity
    #[serde(default = "default_capacity_message")]
    pub capacity_message: String,
}

impl FormConfig {
    /// Defaults handed to the layout builder
    pub fn layout_defaults(&self) -> LayoutDefaults {
        LayoutDefaults {
            total_max_select: self.default_total_max_select,
            user_input_label: self.user_input_label.clone(),
            user_input_placeholder: self.user_input_placeholder.clone(),
            capacity_message: self.capacity_message.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_total_max_select == 0 {
            return Err(ValidationError::InvalidDefaultTotal);
        }
        if self.user_input_label.trim().is_empty() {
            return Err(ValidationError::EmptyText("user_input_label"));
        }
        if self.user_input_placeholder.trim().is_empty() {
            return Err(ValidationError::EmptyText("user_input_placeholder"));
        }
        if self.capacity_message.trim().is_empty() {
            return Err(ValidationError::EmptyText("capacity_message"));
        }
        Ok(())
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_total_max_select: default_total_max_select(),
            user_input_label: default_user_input_label(),
            user_input_placeholder: default_user_input_placeholder(),
            capacity_message: default_capacity_message(),
        }
    }
}

fn default_total_max_select() -> u32 {
    DEFAULT_TOTAL_MAX_SELECT
}

fn default_user_input_label() -> String {
    LayoutDefaults::default().user_input_label
}

fn default_user_input_placeholder() -> String {
    LayoutDefaults::default().user_input_placeholder
}

fn default_capacity_message() -> String {
    LayoutDefaults::default().capacity_message
}
