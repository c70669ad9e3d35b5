//! Chat Multiselect - Multi-section selectable-option forms for chat UIs
//!
//! A conversational engine emits a `multi_select` trace; this crate turns
//! it into a form whose checkboxes obey three layers of selection caps
//! (per section, per "select all" option and global), then reports the
//! user's answer back as a single text interaction.
//!
//! - `domain` - Selection model, constraint evaluator and payload building
//! - `ports` - Chat transport and event publishing contracts
//! - `adapters` - HTTP, stdout and in-memory implementations of the ports
//! - `application` - Trace matching and the per-form session
//! - `config` - Environment-driven configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
