// src/dag/order.rs

use tracing::debug;

use crate::dag::graph::DepGraph;
use crate::dag::ready::ReadySet;
use crate::dag::TaskId;
use crate::errors::{PlandagError, Result};

/// Compute the deterministic serial ordering of all tasks.
///
/// Kahn's algorithm over a private indegree snapshot, with a lexical-minimum
/// tie-break: among all currently ready tasks, the smallest identifier is
/// always emitted first. For every edge (p, d) the output places p strictly
/// before d, and the result is the unique valid ordering that is
/// lexicographically smallest at every choice point.
///
/// Returns [`PlandagError::DagCycle`] when the ready set drains before every
/// task has been emitted, naming the tasks still blocked.
pub fn sequence(graph: &DepGraph) -> Result<Vec<TaskId>> {
    let mut indegrees = graph.snapshot_indegrees();
    let mut ready = ReadySet::from_indegrees(&indegrees);
    let mut output = Vec::with_capacity(graph.task_count());

    while let Some(task) = ready.pop_min() {
        debug!(task = %task, "emitting task");

        for dep in graph.dependents_of(&task) {
            // Every referenced dependent exists as a node, so the lookup
            // cannot miss on a graph built via `from_edges`.
            if let Some(deg) = indegrees.get_mut(dep) {
                *deg -= 1;
                if *deg == 0 {
                    ready.insert(dep.clone());
                }
            }
        }

        output.push(task);
    }

    if output.len() < graph.task_count() {
        return Err(PlandagError::DagCycle(stuck_tasks(&indegrees)));
    }

    Ok(output)
}

/// Tasks whose indegree never reached zero, for the cycle report.
pub(crate) fn stuck_tasks(indegrees: &std::collections::BTreeMap<TaskId, usize>) -> String {
    let stuck: Vec<&str> = indegrees
        .iter()
        .filter(|(_, deg)| **deg > 0)
        .map(|(task, _)| task.as_str())
        .collect();
    stuck.join(", ")
}
