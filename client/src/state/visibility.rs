//! One-shot scroll-reveal flag for page sections.
//!
//! A section starts hidden and flips to visible the first time enough of it
//! intersects the viewport. Scrolling back out never hides it again.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

/// Default share of a section that must be on screen before it reveals.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// The projects grid is tall, so it reveals earlier.
pub const PROJECTS_THRESHOLD: f64 = 0.2;

/// Browsers report crossing ratios a hair under the configured threshold.
const RATIO_EPSILON: f64 = 1e-3;

/// One intersection report for a region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    /// Share of the region inside the viewport, `0.0..=1.0`.
    pub ratio: f64,
    /// Any part of the region is inside the viewport.
    pub intersecting: bool,
    /// Largest ratio the region can reach: viewport height over region
    /// height, capped at `1.0`.
    pub reachable: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityTracker {
    threshold: f64,
    visible: bool,
}

impl VisibilityTracker {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() { DEFAULT_THRESHOLD } else { threshold.clamp(0.0, 1.0) };
        Self { threshold, visible: false }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Record an intersection report.
    ///
    /// A region taller than the viewport may never reach the threshold; it
    /// reveals as soon as any part of it intersects.
    ///
    /// Returns `true` only for the report that flips the flag.
    pub fn observe(&mut self, report: Intersection) -> bool {
        if self.visible || report.ratio.is_nan() {
            return false;
        }
        let crossed = report.ratio > 0.0 && report.ratio + RATIO_EPSILON >= self.threshold;
        let out_of_reach = report.intersecting && report.reachable + RATIO_EPSILON < self.threshold;
        if !crossed && !out_of_reach {
            return false;
        }
        self.visible = true;
        true
    }
}

impl Default for VisibilityTracker {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}
