//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ChatTransport` - Sends the user's answer back to the chat engine
//! - `EventPublisher` - Publishes form lifecycle events

mod chat_transport;
mod event_publisher;

pub use chat_transport::{ChatTransport, InteractRequest, InteractionKind};
pub use event_publisher::EventPublisher;
