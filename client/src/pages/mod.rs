//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is a single scrolling page; `home` stacks the sections and
//! delegates rendering details to `components`.

pub mod home;
