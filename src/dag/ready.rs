// src/dag/ready.rs

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::dag::TaskId;

/// The set of tasks whose prerequisites are all complete, awaiting emission
/// (sequencer) or dispatch to a worker (simulation).
///
/// Extraction always yields the lexically smallest identifier, which is what
/// makes both consumers deterministic.
#[derive(Debug, Default)]
pub struct ReadySet {
    tasks: BTreeSet<TaskId>,
}

impl ReadySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a ready set with every zero-indegree task of a snapshot.
    pub fn from_indegrees(indegrees: &BTreeMap<TaskId, usize>) -> Self {
        let tasks = indegrees
            .iter()
            .filter(|(_, deg)| **deg == 0)
            .map(|(task, _)| task.clone())
            .collect();
        Self { tasks }
    }

    pub fn insert(&mut self, task: TaskId) {
        self.tasks.insert(task);
    }

    /// Remove and return the lexically smallest ready task.
    pub fn pop_min(&mut self) -> Option<TaskId> {
        self.tasks.pop_first()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }
}
