//! Character-by-character reveal for the hero role line.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use std::time::Duration;

/// Delay between revealed characters.
pub const TICK: Duration = Duration::from_millis(100);

/// Reveals a fixed string one `char` per tick. Once complete it stays
/// complete; there is no restart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingAnimator {
    target: Vec<char>,
    shown: usize,
}

impl TypingAnimator {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { target: text.chars().collect(), shown: 0 }
    }

    /// Reveal one more character. Returns `false` once nothing is left.
    pub fn tick(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.shown += 1;
        true
    }

    #[must_use]
    pub fn visible_text(&self) -> String {
        self.target[..self.shown].iter().collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.shown >= self.target.len()
    }
}
