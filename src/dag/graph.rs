// src/dag/graph.rs

use std::collections::BTreeMap;

use crate::dag::TaskId;

/// Simple in-memory dependency graph keyed by task identifier.
///
/// Adjacency (task → dependents) and indegrees are fixed once construction
/// finishes. Consumers that need to count down prerequisites take their own
/// copy via [`DepGraph::snapshot_indegrees`], so two runs over the same graph
/// can never corrupt each other's progress.
///
/// Acyclicity is a precondition, not checked here; [`crate::dag::sequence`]
/// and [`crate::dag::simulate`] detect a violated precondition and report it
/// instead of looping.
#[derive(Debug, Clone)]
pub struct DepGraph {
    /// task → tasks that depend on it.
    dependents: BTreeMap<TaskId, Vec<TaskId>>,
    /// task → number of prerequisite edges.
    indegrees: BTreeMap<TaskId, usize>,
}

impl DepGraph {
    /// Build a graph from `(prerequisite, dependent)` pairs.
    ///
    /// Both identifiers of every pair become nodes (with an empty dependents
    /// list if not seen before). Duplicate edges are not rejected; they
    /// double-count the dependent's indegree, so callers must supply
    /// well-formed input.
    pub fn from_edges<I, P, D>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, D)>,
        P: Into<TaskId>,
        D: Into<TaskId>,
    {
        let mut dependents: BTreeMap<TaskId, Vec<TaskId>> = BTreeMap::new();
        let mut indegrees: BTreeMap<TaskId, usize> = BTreeMap::new();

        for (pre, dep) in pairs {
            let pre = pre.into();
            let dep = dep.into();

            dependents.entry(dep.clone()).or_default();
            indegrees.entry(pre.clone()).or_insert(0);

            dependents.entry(pre).or_default().push(dep.clone());
            *indegrees.entry(dep).or_insert(0) += 1;
        }

        Self {
            dependents,
            indegrees,
        }
    }

    /// Return all task identifiers, in identifier order.
    pub fn tasks(&self) -> impl Iterator<Item = &TaskId> {
        self.dependents.keys()
    }

    /// Total number of tasks.
    pub fn task_count(&self) -> usize {
        self.dependents.len()
    }

    /// `true` when the graph holds no tasks at all.
    pub fn is_empty(&self) -> bool {
        self.dependents.is_empty()
    }

    /// Immediate dependents of a task (tasks that list this one as a
    /// prerequisite). Empty for unknown identifiers.
    pub fn dependents_of(&self, task: &str) -> &[TaskId] {
        self.dependents
            .get(task)
            .map(|d| d.as_slice())
            .unwrap_or(&[])
    }

    /// Number of prerequisite edges into a task. `None` for unknown
    /// identifiers.
    pub fn indegree_of(&self, task: &str) -> Option<usize> {
        self.indegrees.get(task).copied()
    }

    /// Independent copy of the indegree map for one consumer run.
    ///
    /// Each of [`crate::dag::sequence`] and [`crate::dag::simulate`]
    /// decrements its own snapshot; the graph itself stays untouched.
    pub fn snapshot_indegrees(&self) -> BTreeMap<TaskId, usize> {
        self.indegrees.clone()
    }
}
