//! Form domain module - the selection-constraint engine.
//!
//! A form is a list of sections, each holding options with an action
//! (`normal`, `all` or `user_input`), a per-section cap and a global cap.
//! `SelectionModel` owns the state of one rendered form; the
//! `ConstraintEvaluator` derives which options are disabled or annotated
//! after every change.
//!
//! # Events
//!
//! - `FormRendered` - a form was built from a trace
//! - `OptionChosen` - a single-select form reported its choice
//! - `FormSubmitted` - a submit button sent the selections

mod cap;
mod descriptor;
mod errors;
mod evaluator;
mod events;
mod layout;
mod model;
mod option;
mod section;
mod snapshot;
mod state;
mod status;

pub use cap::SelectionCap;
pub use descriptor::{ButtonDescriptor, FormDescriptor, OptionDescriptor, SectionDescriptor};
pub use errors::FormError;
pub use evaluator::{CapacityViolation, ConstraintDecision, ConstraintEvaluator};
pub use events::{FormRendered, FormSubmitted, OptionChosen};
pub use layout::{
    FormLayout, FormLayoutBuilder, FormStyle, LayoutDefaults, SubmitButton,
    DEFAULT_TOTAL_MAX_SELECT,
};
pub use model::{IgnoreReason, SelectionModel, Submission, ToggleOutcome};
pub use option::{FormOption, OptionAction};
pub use section::Section;
pub use snapshot::{
    OutboundPayload, SectionSelection, SelectionSnapshot, SingleChoice, SELECTIONS_SEPARATOR,
};
pub use state::SelectionState;
pub use status::FormStatus;
