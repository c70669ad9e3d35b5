//! A labeled group of options with its own capacity cap.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{FormOption, SelectionCap};
use crate::domain::foundation::{OptionId, SectionId};

/// A section of the form.
///
/// # Invariants
///
/// - every option's id belongs to this section, positions match indices
/// - options never change after construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    id: SectionId,
    /// Identifier supplied by the host, if any.
    key: Option<String>,
    label: String,
    /// Background color, presentation only.
    color: Option<String>,
    max_select: SelectionCap,
    options: Vec<FormOption>,
}

impl Section {
    pub fn new(
        id: SectionId,
        label: impl Into<String>,
        max_select: SelectionCap,
        options: Vec<FormOption>,
    ) -> Self {
        Self {
            id,
            key: None,
            label: label.into(),
            color: None,
            max_select,
            options,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn id(&self) -> SectionId {
        self.id
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn max_select(&self) -> SelectionCap {
        self.max_select
    }

    pub fn options(&self) -> &[FormOption] {
        &self.options
    }

    pub fn option(&self, id: OptionId) -> Option<&FormOption> {
        if id.section() != self.id {
            return None;
        }
        self.options.get(id.position() as usize)
    }

    /// Options rendered as checkboxes, in render order.
    pub fn checkable_options(&self) -> impl Iterator<Item = &FormOption> {
        self.options.iter().filter(|o| o.action().is_checkable())
    }

    pub fn user_input_options(&self) -> impl Iterator<Item = &FormOption> {
        self.options.iter().filter(|o| o.is_user_input())
    }

    pub fn has_user_input(&self) -> bool {
        self.options.iter().any(FormOption::is_user_input)
    }

    /// Number of items an `all` option stands for.
    pub fn size(&self) -> u32 {
        self.options.iter().filter(|o| o.is_normal()).count() as u32
    }

    /// Checked normal options of this section.
    pub fn normal_checked_count(&self, checked: &BTreeSet<OptionId>) -> u32 {
        self.options
            .iter()
            .filter(|o| o.is_normal() && checked.contains(&o.id()))
            .count() as u32
    }

    /// True when one of this section's `all` options is checked.
    pub fn all_checked(&self, checked: &BTreeSet<OptionId>) -> bool {
        self.options
            .iter()
            .any(|o| o.is_all() && checked.contains(&o.id()))
    }

    /// Selections attributed to this section for cap purposes.
    pub fn effective_count(&self, checked: &BTreeSet<OptionId>) -> u32 {
        if self.all_checked(checked) {
            self.size()
        } else {
            self.normal_checked_count(checked)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::OptionAction;

    fn section() -> Section {
        let id = SectionId::new(0);
        Section::new(
            id,
            "Marchés",
            SelectionCap::Bounded(2),
            vec![
                FormOption::new(OptionId::new(id, 0), "Tous", OptionAction::All),
                FormOption::new(OptionId::new(id, 1), "Retail", OptionAction::Normal),
                FormOption::new(OptionId::new(id, 2), "Santé", OptionAction::Normal),
                FormOption::new(OptionId::new(id, 3), "Énergie", OptionAction::Normal),
                FormOption::new(OptionId::new(id, 4), "Autre", OptionAction::UserInput),
            ],
        )
    }

    fn ids(positions: &[u32]) -> BTreeSet<OptionId> {
        positions
            .iter()
            .map(|p| OptionId::new(SectionId::new(0), *p))
            .collect()
    }

    #[test]
    fn size_counts_only_normal_options() {
        assert_eq!(section().size(), 3);
    }

    #[test]
    fn effective_count_counts_checked_normals() {
        assert_eq!(section().effective_count(&ids(&[1, 3])), 2);
        assert_eq!(section().effective_count(&ids(&[])), 0);
    }

    #[test]
    fn effective_count_is_section_size_when_all_checked() {
        let s = section();
        assert!(s.all_checked(&ids(&[0])));
        assert_eq!(s.effective_count(&ids(&[0])), 3);
    }

    #[test]
    fn option_lookup_rejects_foreign_ids() {
        let s = section();
        assert_eq!(s.option(OptionId::new(SectionId::new(0), 2)).map(|o| o.name()), Some("Santé"));
        assert!(s.option(OptionId::new(SectionId::new(1), 2)).is_none());
        assert!(s.option(OptionId::new(SectionId::new(0), 9)).is_none());
    }

    #[test]
    fn checkable_options_skip_free_text() {
        let s = section();
        assert_eq!(s.checkable_options().count(), 4);
        assert_eq!(s.user_input_options().count(), 1);
        assert!(s.has_user_input());
    }

    #[test]
    fn empty_section_is_always_satisfied() {
        let s = Section::new(SectionId::new(3), "Vide", SelectionCap::Bounded(1), vec![]);
        assert_eq!(s.size(), 0);
        assert_eq!(s.effective_count(&BTreeSet::new()), 0);
    }
}
