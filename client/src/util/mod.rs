//! Browser helpers shared across the section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (intersection observers, scroll
//! requests, timers) from component logic. Each degrades to a no-op on the
//! server so SSR renders the pre-interaction state.

pub mod scroll;
pub mod task;
pub mod viewport;
