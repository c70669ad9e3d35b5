//! Selection model aggregate - one per rendered form.
//!
//! Owns the static layout, the mutable selection state and the lifecycle
//! status. Every accepted toggle re-runs the `ConstraintEvaluator`; every
//! rejected one leaves the model untouched.

use super::{
    CapacityViolation, ConstraintEvaluator, FormDescriptor, FormError, FormLayout, FormStatus,
    LayoutDefaults, OutboundPayload, SelectionSnapshot, SelectionState, SingleChoice,
};
use std::collections::{BTreeMap, BTreeSet};

use crate::domain::foundation::{FormId, OptionId, SectionId, StateMachine};

/// Why a toggle did not change anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The control is disabled by a capacity rule.
    Disabled,
    /// The form was already submitted.
    Finalized,
    /// No option with this id exists in the form.
    UnknownOption,
    /// Free-text fields are not checkboxes.
    NotCheckable,
}

/// Result of a toggle request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Membership flipped; `checked` is the new value.
    Applied { checked: bool },
    /// Single-select mode: the choice is final and must be reported now.
    Chosen(SingleChoice),
    /// Rejected without any state change.
    Ignored(IgnoreReason),
}

impl ToggleOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ToggleOutcome::Applied { .. })
    }
}

/// Everything the transport needs once a submit button is clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub button_text: String,
    pub snapshot: SelectionSnapshot,
    pub payload: OutboundPayload,
}

/// The selection-constraint aggregate.
///
/// # Invariants
///
/// - at most one `all` option is checked per section
/// - every section's effective count stays within its cap
/// - the total stays within the global cap when it is bounded
/// - `Submitted` forms never change again
#[derive(Debug, Clone)]
pub struct SelectionModel {
    form_id: FormId,
    layout: FormLayout,
    state: SelectionState,
    status: FormStatus,
    total_count: u32,
}

impl SelectionModel {
    /// Creates a fresh model and evaluates constraints once.
    pub fn new(layout: FormLayout) -> Self {
        let mut model = Self {
            form_id: FormId::new(),
            layout,
            state: SelectionState::new(),
            status: FormStatus::Open,
            total_count: 0,
        };
        model.recompute();
        model
    }

    pub fn from_descriptor(descriptor: &FormDescriptor, defaults: &LayoutDefaults) -> Self {
        Self::new(FormLayout::from_descriptor(descriptor, defaults))
    }

    /// Builds a model straight from a trace payload.
    ///
    /// # Errors
    ///
    /// - `MalformedPayload` if the payload is not a form descriptor object
    pub fn from_payload(
        payload: serde_json::Value,
        defaults: &LayoutDefaults,
    ) -> Result<Self, FormError> {
        let descriptor =
            FormDescriptor::from_value(payload).map_err(|e| FormError::malformed(e.to_string()))?;
        Ok(Self::from_descriptor(&descriptor, defaults))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn form_id(&self) -> FormId {
        self.form_id
    }

    pub fn layout(&self) -> &FormLayout {
        &self.layout
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_checked(&self, id: OptionId) -> bool {
        self.state.is_checked(id)
    }

    pub fn is_disabled(&self, id: OptionId) -> bool {
        self.state.is_disabled(id)
    }

    /// Options currently refused by the constraint evaluator.
    pub fn disabled(&self) -> &BTreeSet<OptionId> {
        self.state.disabled()
    }

    pub fn errored(&self) -> &BTreeMap<OptionId, CapacityViolation> {
        self.state.errored()
    }

    /// Capacity annotation attached to an option, if any.
    pub fn annotation(&self, id: OptionId) -> Option<CapacityViolation> {
        self.state.errored().get(&id).copied()
    }

    /// Inline text to render next to an annotated option.
    pub fn annotation_message(&self, id: OptionId) -> Option<&str> {
        self.annotation(id).map(|_| self.layout.capacity_message())
    }

    pub fn free_text(&self, id: OptionId) -> &str {
        self.state.free_text(id)
    }

    /// Section size if its `all` option is checked, else its checked normals.
    pub fn effective_count(&self, section: SectionId) -> u32 {
        self.layout
            .section(section)
            .map(|s| s.effective_count(self.state.checked()))
            .unwrap_or(0)
    }

    /// Sum of every section's effective count.
    pub fn total_count(&self) -> u32 {
        self.total_count
    }

    /// Read-only result for submission.
    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot::capture(&self.layout, &self.state)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Interaction
    // ─────────────────────────────────────────────────────────────────────────

    /// Flips a checkbox, enforcing every capacity rule.
    ///
    /// Checking an `all` option unchecks its siblings. In single-select mode
    /// the first accepted choice finalizes the form.
    pub fn toggle(&mut self, id: OptionId) -> ToggleOutcome {
        if !self.status.is_open() {
            return ToggleOutcome::Ignored(IgnoreReason::Finalized);
        }
        let Some(option) = self.layout.option(id) else {
            return ToggleOutcome::Ignored(IgnoreReason::UnknownOption);
        };
        if !option.action().is_checkable() {
            return ToggleOutcome::Ignored(IgnoreReason::NotCheckable);
        }
        if self.state.is_disabled(id) {
            return ToggleOutcome::Ignored(IgnoreReason::Disabled);
        }

        if !self.layout.is_multiselect() {
            let section_label = self
                .layout
                .section(id.section())
                .map(|s| s.label().to_string())
                .unwrap_or_default();
            let choice = SingleChoice::new(id, section_label, option.name());
            if self.finalize().is_err() {
                return ToggleOutcome::Ignored(IgnoreReason::Finalized);
            }
            self.state.uncheck_all(self.layout.option_ids());
            self.state.flip(id);
            self.total_count = ConstraintEvaluator::total_count(&self.layout, self.state.checked());
            return ToggleOutcome::Chosen(choice);
        }

        let is_all = option.is_all();
        let checked = self.state.flip(id);
        if is_all && checked {
            if let Some(section) = self.layout.section(id.section()) {
                self.state.uncheck_all(
                    section
                        .checkable_options()
                        .map(|o| o.id())
                        .filter(|sibling| *sibling != id),
                );
            }
        }
        self.recompute();

        ToggleOutcome::Applied { checked }
    }

    /// Stores the latest text of a free-text field.
    ///
    /// Returns false when nothing was stored (finalized form, or not a
    /// `user_input` option).
    pub fn set_free_text(&mut self, id: OptionId, value: impl Into<String>) -> bool {
        if !self.status.is_open() {
            return false;
        }
        match self.layout.option(id) {
            Some(option) if option.is_user_input() => {
                self.state.set_free_text(id, value.into());
                true
            }
            _ => false,
        }
    }

    /// Finalizes the form through the button at `button_index`.
    ///
    /// # Errors
    ///
    /// - `AlreadySubmitted` if the form is finalized
    /// - `SubmitUnavailable` if the form renders no submit control
    /// - `UnknownButton` if the index is out of range
    pub fn submit(&mut self, button_index: usize) -> Result<Submission, FormError> {
        if !self.status.is_open() {
            return Err(FormError::AlreadySubmitted);
        }
        if !self.layout.shows_submit_buttons() {
            return Err(FormError::SubmitUnavailable);
        }
        let button_text = self
            .layout
            .buttons()
            .get(button_index)
            .map(|b| b.text.clone())
            .ok_or(FormError::UnknownButton(button_index))?;

        let snapshot = self.snapshot();
        let payload = snapshot.payload(&button_text)?;
        self.finalize()?;

        Ok(Submission {
            button_text,
            snapshot,
            payload,
        })
    }

    fn finalize(&mut self) -> Result<(), FormError> {
        self.status = self.status.transition_to(FormStatus::Submitted)?;
        Ok(())
    }

    fn recompute(&mut self) {
        if !self.layout.is_multiselect() {
            self.total_count = ConstraintEvaluator::total_count(&self.layout, self.state.checked());
            return;
        }
        let decision = ConstraintEvaluator::evaluate(&self.layout, self.state.checked());
        self.total_count = decision.total_count;
        self.state.apply(decision);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::OptionAction::{All, Normal, UserInput};
    use crate::domain::form::SelectionCap;

    fn id(section: u32, position: u32) -> OptionId {
        OptionId::new(SectionId::new(section), position)
    }

    fn markets() -> FormLayout {
        FormLayout::builder()
            .total_max_select(SelectionCap::Bounded(6))
            .section(
                "Marchés",
                SelectionCap::Unbounded,
                [("Tous", All), ("Retail", Normal), ("Santé", Normal), ("libre", UserInput)],
            )
            .section("Budget", SelectionCap::Bounded(1), [("10k", Normal), ("50k", Normal)])
            .button("Valider")
            .build()
    }

    #[test]
    fn new_model_is_open_and_empty() {
        let model = SelectionModel::new(markets());
        assert_eq!(model.status(), FormStatus::Open);
        assert_eq!(model.total_count(), 0);
        assert!(model.state().disabled().is_empty());
    }

    #[test]
    fn toggle_checks_and_unchecks() {
        let mut model = SelectionModel::new(markets());

        assert_eq!(model.toggle(id(0, 1)), ToggleOutcome::Applied { checked: true });
        assert!(model.is_checked(id(0, 1)));
        assert_eq!(model.total_count(), 1);

        assert_eq!(model.toggle(id(0, 1)), ToggleOutcome::Applied { checked: false });
        assert_eq!(model.total_count(), 0);
    }

    #[test]
    fn checking_all_clears_siblings() {
        let mut model = SelectionModel::new(markets());
        model.toggle(id(0, 1));

        model.toggle(id(0, 0));

        assert!(model.is_checked(id(0, 0)));
        assert!(!model.is_checked(id(0, 1)));
        assert!(model.is_disabled(id(0, 1)));
        assert!(model.is_disabled(id(0, 2)));
        assert_eq!(model.effective_count(SectionId::new(0)), 2);
    }

    #[test]
    fn unchecking_all_reenables_siblings() {
        let mut model = SelectionModel::new(markets());
        model.toggle(id(0, 0));
        model.toggle(id(0, 0));

        assert!(!model.is_disabled(id(0, 1)));
        assert!(!model.is_disabled(id(0, 2)));
        assert_eq!(model.effective_count(SectionId::new(0)), 0);
    }

    #[test]
    fn disabled_option_cannot_be_toggled() {
        let mut model = SelectionModel::new(markets());
        model.toggle(id(1, 0));
        let before = model.state().clone();

        assert_eq!(
            model.toggle(id(1, 1)),
            ToggleOutcome::Ignored(IgnoreReason::Disabled)
        );
        assert_eq!(model.state(), &before);
    }

    #[test]
    fn free_text_fields_are_not_checkable() {
        let mut model = SelectionModel::new(markets());
        assert_eq!(
            model.toggle(id(0, 3)),
            ToggleOutcome::Ignored(IgnoreReason::NotCheckable)
        );
        assert_eq!(
            model.toggle(id(7, 0)),
            ToggleOutcome::Ignored(IgnoreReason::UnknownOption)
        );
    }

    #[test]
    fn free_text_does_not_count() {
        let mut model = SelectionModel::new(markets());
        assert!(model.set_free_text(id(0, 3), "Agriculture"));
        assert!(!model.set_free_text(id(0, 1), "nope"));

        assert_eq!(model.free_text(id(0, 3)), "Agriculture");
        assert_eq!(model.total_count(), 0);
    }

    #[test]
    fn submit_builds_payload_and_finalizes() {
        let mut model = SelectionModel::new(markets());
        model.toggle(id(0, 2));
        model.toggle(id(1, 1));

        let submission = model.submit(0).unwrap();

        assert_eq!(submission.button_text, "Valider");
        assert_eq!(
            submission.payload.as_str(),
            r#"Valider - Sélections: [{"section":"Marchés","selections":["Santé"],"userInput":""},{"section":"Budget","selections":["50k"],"userInput":""}]"#
        );
        assert_eq!(model.status(), FormStatus::Submitted);
    }

    #[test]
    fn finalized_form_ignores_interaction() {
        let mut model = SelectionModel::new(markets());
        model.submit(0).unwrap();

        assert_eq!(
            model.toggle(id(0, 1)),
            ToggleOutcome::Ignored(IgnoreReason::Finalized)
        );
        assert!(!model.set_free_text(id(0, 3), "late"));
        assert!(matches!(model.submit(0), Err(FormError::AlreadySubmitted)));
    }

    #[test]
    fn submit_rejects_unknown_button() {
        let mut model = SelectionModel::new(markets());
        assert!(matches!(model.submit(4), Err(FormError::UnknownButton(4))));
        assert!(model.status().is_open());
    }

    #[test]
    fn single_select_reports_choice_immediately() {
        let layout = FormLayout::builder()
            .multiselect(false)
            .total_max_select(SelectionCap::Bounded(1))
            .section("Budget", SelectionCap::Bounded(1), [("10k", Normal), ("50k", Normal)])
            .build();
        let mut model = SelectionModel::new(layout);

        let outcome = model.toggle(id(0, 1));

        match outcome {
            ToggleOutcome::Chosen(choice) => {
                assert_eq!(choice.section, "Budget");
                assert_eq!(choice.selections, vec!["50k".to_string()]);
                assert_eq!(choice.payload().as_str(), "50k");
            }
            other => panic!("expected a choice, got {:?}", other),
        }
        assert_eq!(model.status(), FormStatus::Submitted);
        assert!(model.state().disabled().is_empty());
        assert!(matches!(model.submit(0), Err(FormError::AlreadySubmitted)));
    }

    #[test]
    fn single_select_without_free_text_has_no_submit() {
        let layout = FormLayout::builder()
            .multiselect(false)
            .section("Budget", SelectionCap::Unbounded, [("10k", Normal)])
            .button("OK")
            .build();
        let mut model = SelectionModel::new(layout);
        assert!(matches!(model.submit(0), Err(FormError::SubmitUnavailable)));
    }

    #[test]
    fn from_payload_rejects_non_objects() {
        let err = SelectionModel::from_payload(serde_json::json!([1, 2]), &LayoutDefaults::default())
            .unwrap_err();
        assert!(matches!(err, FormError::MalformedPayload(_)));
    }

    #[test]
    fn annotation_message_uses_layout_text() {
        let layout = FormLayout::builder()
            .total_max_select(SelectionCap::Bounded(1))
            .section("A", SelectionCap::Unbounded, [("Tous", All), ("X", Normal), ("Y", Normal)])
            .build();
        let model = SelectionModel::new(layout);

        assert!(model.annotation(id(0, 0)).is_some());
        assert_eq!(
            model.annotation_message(id(0, 0)),
            Some("Trop de cases cochées pour cocher celle-ci")
        );
        assert_eq!(model.annotation_message(id(0, 1)), None);
    }
}
