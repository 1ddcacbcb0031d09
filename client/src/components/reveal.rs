//! Class and timing helpers for scroll-reveal animations.
//!
//! Sections render every animated element with its hidden class on the server
//! and add `visible` once the section's one-shot flag flips.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// `"{base} {animation}"`, plus `visible` once revealed.
pub fn reveal_class(base: &str, animation: &str, visible: bool) -> String {
    if visible { format!("{base} {animation} visible") } else { format!("{base} {animation}") }
}

/// Fade-in with a stagger step, e.g. `"stat-item fade-in visible stagger-2"`.
pub fn staggered_class(base: &str, visible: bool, step: usize) -> String {
    if visible { format!("{base} fade-in visible stagger-{step}") } else { format!("{base} fade-in") }
}

/// Stagger step for short fixed lists: one step per item.
pub fn list_step(index: usize) -> usize {
    index + 1
}

/// Stagger step for grids, cycling through four steps.
pub fn grid_step(index: usize) -> usize {
    index % 4 + 1
}

/// CSS delay of a tenth of a second per item, e.g. `"0.3s"` for index 3.
pub fn step_delay(index: usize) -> String {
    format!("{}.{}s", index / 10, index % 10)
}
