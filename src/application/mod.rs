//! Application layer - Drives a form between the chat engine and the user.
//!
//! Matches inbound traces, owns the selection model for one rendered form
//! and coordinates the chat transport and event publisher ports.

mod form_session;
mod trace;

pub use form_session::{FormSession, RenderFormCommand};
pub use trace::{Trace, MULTI_SELECT_TRACE_TYPE};
