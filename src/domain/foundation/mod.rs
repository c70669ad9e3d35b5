//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, error types, the lifecycle state
//! machine trait and domain event infrastructure.

mod errors;
mod events;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent};
pub use ids::{FormId, OptionId, SectionId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
