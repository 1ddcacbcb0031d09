//! Transient UI state machines.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module is plain data plus transitions, with no reactive or browser
//! types. Components wrap them in `RwSignal`s scoped to their own lifetime,
//! which keeps every transition unit-testable without a DOM.

pub mod contact_form;
pub mod filter;
pub mod nav;
pub mod typing;
pub mod visibility;
