//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, events)
//! - `form` - Form layout, selection state and capacity constraints

pub mod form;
pub mod foundation;
