//! Chat transport adapters.
//!
//! - `HttpChatTransport` - Posts interactions to the dialog runtime
//! - `StdoutChatTransport` - Prints interactions for local replays
//! - `RecordingChatTransport` - Captures interactions for tests

mod http;
mod recording;
mod stdout;

pub use http::{HttpChatTransport, HttpChatTransportConfig, DEFAULT_RUNTIME_URL};
pub use recording::RecordingChatTransport;
pub use stdout::StdoutChatTransport;
