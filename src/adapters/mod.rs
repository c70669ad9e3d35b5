//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the form engine to external systems:
//! - `chat` - Chat transports (HTTP runtime, stdout, recording)
//! - `events` - Event publishers (in-memory, tracing)

pub mod chat;
pub mod events;

pub use chat::{
    HttpChatTransport, HttpChatTransportConfig, RecordingChatTransport, StdoutChatTransport,
};
pub use events::{InMemoryEventBus, TracingEventPublisher};
