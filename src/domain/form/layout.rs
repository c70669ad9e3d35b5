//! Immutable structure of a rendered form.

use serde::{Deserialize, Serialize};

use super::{FormDescriptor, FormOption, OptionAction, Section, SelectionCap};
use crate::domain::foundation::{OptionId, SectionId};

/// Global cap used when the payload does not name one.
pub const DEFAULT_TOTAL_MAX_SELECT: u32 = 6;

/// Fallbacks applied while building a layout from a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutDefaults {
    pub total_max_select: u32,
    pub user_input_label: String,
    pub user_input_placeholder: String,
    pub capacity_message: String,
}

impl Default for LayoutDefaults {
    fn default() -> Self {
        Self {
            total_max_select: DEFAULT_TOTAL_MAX_SELECT,
            user_input_label: "Indiquez votre marché si aucun ne correspond".to_string(),
            user_input_placeholder: "Saisissez votre texte ici...".to_string(),
            capacity_message: "Trop de cases cochées pour cocher celle-ci".to_string(),
        }
    }
}

/// Presentation settings. No effect on constraint logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormStyle {
    pub button_color: String,
    pub text_color: String,
    pub background_opacity: f64,
    pub index: i64,
}

impl Default for FormStyle {
    fn default() -> Self {
        Self {
            button_color: "#4CAF50".to_string(),
            text_color: "#0000FF".to_string(),
            background_opacity: 0.3,
            index: 1,
        }
    }
}

/// A submit trigger; its text prefixes the outbound payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitButton {
    pub text: String,
}

/// The declarative structure of a form: sections, caps and mode.
#[derive(Debug, Clone, PartialEq)]
pub struct FormLayout {
    sections: Vec<Section>,
    total_max_select: SelectionCap,
    multiselect: bool,
    buttons: Vec<SubmitButton>,
    style: FormStyle,
    user_input_label: String,
    user_input_placeholder: String,
    capacity_message: String,
}

impl FormLayout {
    /// Builds the layout, degrading malformed metadata to permissive defaults.
    pub fn from_descriptor(descriptor: &FormDescriptor, defaults: &LayoutDefaults) -> Self {
        let sections = descriptor
            .sections
            .iter()
            .enumerate()
            .map(|(s_idx, raw)| {
                let section_id = SectionId::new(s_idx as u32);
                let options = raw
                    .options
                    .iter()
                    .enumerate()
                    .map(|(o_idx, opt)| {
                        let mut option = FormOption::new(
                            OptionId::new(section_id, o_idx as u32),
                            opt.name.clone(),
                            OptionAction::from_descriptor(opt.action.as_deref()),
                        );
                        if let Some(label) = &opt.label {
                            option = option.with_label(label.clone());
                        }
                        if let Some(placeholder) = &opt.placeholder {
                            option = option.with_placeholder(placeholder.clone());
                        }
                        option
                    })
                    .collect();

                let mut section = Section::new(section_id, raw.label.clone(), raw.cap(), options);
                if let Some(key) = &raw.id {
                    section = section.with_key(key.clone());
                }
                if let Some(color) = &raw.color {
                    section = section.with_color(color.clone());
                }
                section
            })
            .collect();

        Self {
            sections,
            total_max_select: descriptor.total_cap(defaults.total_max_select),
            multiselect: descriptor.multiselect,
            buttons: descriptor
                .buttons
                .iter()
                .map(|b| SubmitButton { text: b.text.clone() })
                .collect(),
            style: FormStyle {
                button_color: descriptor.button_color.clone(),
                text_color: descriptor.text_color.clone(),
                background_opacity: descriptor.background_opacity,
                index: descriptor.index,
            },
            user_input_label: defaults.user_input_label.clone(),
            user_input_placeholder: defaults.user_input_placeholder.clone(),
            capacity_message: defaults.capacity_message.clone(),
        }
    }

    pub fn builder() -> FormLayoutBuilder {
        FormLayoutBuilder::new()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.get(id.index())
    }

    pub fn option(&self, id: OptionId) -> Option<&FormOption> {
        self.section(id.section()).and_then(|s| s.option(id))
    }

    /// Looks an option up by section label and option name.
    pub fn find_option(&self, section_label: &str, option_name: &str) -> Option<OptionId> {
        self.sections
            .iter()
            .filter(|s| s.label() == section_label)
            .flat_map(|s| s.options())
            .find(|o| o.name() == option_name)
            .map(FormOption::id)
    }

    /// Every option id in render order.
    pub fn option_ids(&self) -> impl Iterator<Item = OptionId> + '_ {
        self.sections
            .iter()
            .flat_map(|s| s.options())
            .map(FormOption::id)
    }

    pub fn total_max_select(&self) -> SelectionCap {
        self.total_max_select
    }

    pub fn is_multiselect(&self) -> bool {
        self.multiselect
    }

    pub fn buttons(&self) -> &[SubmitButton] {
        &self.buttons
    }

    pub fn style(&self) -> &FormStyle {
        &self.style
    }

    pub fn has_user_input(&self) -> bool {
        self.sections.iter().any(Section::has_user_input)
    }

    /// Submit buttons are rendered for multi-select forms and for any form
    /// carrying a free-text field.
    pub fn shows_submit_buttons(&self) -> bool {
        !self.buttons.is_empty() && (self.multiselect || self.has_user_input())
    }

    /// Heading for a free-text field.
    pub fn user_input_label<'a>(&'a self, option: &'a FormOption) -> &'a str {
        option.label().unwrap_or(&self.user_input_label)
    }

    /// Hint for an empty free-text field.
    pub fn user_input_placeholder<'a>(&'a self, option: &'a FormOption) -> &'a str {
        option.placeholder().unwrap_or(&self.user_input_placeholder)
    }

    /// Inline text shown next to an option carrying a capacity annotation.
    pub fn capacity_message(&self) -> &str {
        &self.capacity_message
    }
}

/// Programmatic construction of a layout, mostly for hosts that do not
/// speak the JSON descriptor.
#[derive(Debug)]
pub struct FormLayoutBuilder {
    sections: Vec<Section>,
    total_max_select: SelectionCap,
    multiselect: bool,
    buttons: Vec<SubmitButton>,
    defaults: LayoutDefaults,
}

impl FormLayoutBuilder {
    pub fn new() -> Self {
        let defaults = LayoutDefaults::default();
        Self {
            sections: Vec::new(),
            total_max_select: SelectionCap::Bounded(defaults.total_max_select),
            multiselect: true,
            buttons: Vec::new(),
            defaults,
        }
    }

    pub fn total_max_select(mut self, cap: SelectionCap) -> Self {
        self.total_max_select = cap;
        self
    }

    pub fn multiselect(mut self, multiselect: bool) -> Self {
        self.multiselect = multiselect;
        self
    }

    /// Appends a section; option ids follow the given order.
    pub fn section<'a, I>(mut self, label: &str, max_select: SelectionCap, options: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, OptionAction)>,
    {
        let section_id = SectionId::new(self.sections.len() as u32);
        let options = options
            .into_iter()
            .enumerate()
            .map(|(idx, (name, action))| {
                FormOption::new(OptionId::new(section_id, idx as u32), name, action)
            })
            .collect();
        self.sections
            .push(Section::new(section_id, label, max_select, options));
        self
    }

    pub fn button(mut self, text: &str) -> Self {
        self.buttons.push(SubmitButton {
            text: text.to_string(),
        });
        self
    }

    pub fn build(self) -> FormLayout {
        FormLayout {
            sections: self.sections,
            total_max_select: self.total_max_select,
            multiselect: self.multiselect,
            buttons: self.buttons,
            style: FormStyle::default(),
            user_input_label: self.defaults.user_input_label,
            user_input_placeholder: self.defaults.user_input_placeholder,
            capacity_message: self.defaults.capacity_message,
        }
    }
}

impl Default for FormLayoutBuilder {
    fn default() -> Self {
        Self::new()
    }
}
