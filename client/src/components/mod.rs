//! Section components that make up the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each section owns its transient state as local signals and reads content
//! from the embedded portfolio. Nothing is shared between sections through
//! context; navigation between them is plain smooth scrolling.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod project_modal;
pub mod projects;
pub mod reveal;
pub mod section_header;
pub mod skills;
