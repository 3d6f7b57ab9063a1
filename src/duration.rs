// src/duration.rs

//! The reference domain's duration formula: each task costs
//! `base + alphabetic index of its identifier` ticks (A=1 … Z=26).
//!
//! The simulation itself is formula-agnostic; this is just the glue the CLI
//! wires in.

use crate::dag::TaskId;

/// 1-based alphabetic index of the identifier's first ASCII letter,
/// case-insensitive. 0 when the identifier has no ASCII letter.
pub fn letter_index(task: &str) -> u64 {
    task.chars()
        .find(|c| c.is_ascii_alphabetic())
        .map(|c| u64::from(c.to_ascii_uppercase() as u8 - b'A') + 1)
        .unwrap_or(0)
}

/// Duration formula parameterised by the configured base.
#[derive(Debug, Clone, Copy)]
pub struct StepDurations {
    pub base: u64,
}

impl StepDurations {
    pub fn new(base: u64) -> Self {
        Self { base }
    }

    /// Ticks needed to complete `task`.
    pub fn of(&self, task: &TaskId) -> u64 {
        self.base + letter_index(task)
    }
}
