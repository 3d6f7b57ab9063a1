// src/dag/sim.rs

use tracing::{debug, info};

use crate::dag::graph::DepGraph;
use crate::dag::order::stuck_tasks;
use crate::dag::ready::ReadySet;
use crate::dag::TaskId;
use crate::errors::{PlandagError, Result};

/// One simulated capacity unit.
///
/// `current` is `None` while idle; `remaining` is meaningless then.
#[derive(Debug, Default)]
struct Worker {
    current: Option<TaskId>,
    remaining: u64,
}

impl Worker {
    fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    fn assign(&mut self, task: TaskId, duration: u64) {
        self.current = Some(task);
        self.remaining = duration;
    }
}

/// Simulate completing all tasks with a pool of `workers` parallel workers,
/// returning the total number of ticks until the last task finishes.
///
/// `duration` maps a task to its (positive) tick cost; the simulation is
/// agnostic to the formula. Every loop iteration is one indivisible tick:
/// busy workers advance, finished tasks release their dependents, idle
/// workers pick up ready work (lexically smallest first, lowest-index worker
/// first), then the clock moves. A task completing in a tick is dispatchable
/// within that same tick; moving dispatch after the clock step would shift
/// every downstream completion by up to one tick.
///
/// Fails up front on `workers == 0` or any zero duration, and with
/// [`PlandagError::DagCycle`] when the pool and ready set drain while tasks
/// remain blocked.
pub fn simulate<F>(graph: &DepGraph, workers: usize, duration: F) -> Result<u64>
where
    F: Fn(&TaskId) -> u64,
{
    if workers == 0 {
        return Err(PlandagError::InvalidWorkerCount(workers));
    }
    for task in graph.tasks() {
        if duration(task) == 0 {
            return Err(PlandagError::ZeroDuration(task.clone()));
        }
    }

    let total = graph.task_count();
    let mut indegrees = graph.snapshot_indegrees();
    let mut ready = ReadySet::from_indegrees(&indegrees);
    let mut pool: Vec<Worker> = (0..workers).map(|_| Worker::default()).collect();
    let mut completed = 0usize;
    let mut clock = 0u64;

    // The first tick begins with work already assigned.
    dispatch(&mut pool, &mut ready, &duration);

    while completed < total {
        if ready.is_empty() && pool.iter().all(Worker::is_idle) {
            return Err(PlandagError::DagCycle(stuck_tasks(&indegrees)));
        }

        // Advance + complete.
        for worker in pool.iter_mut() {
            if worker.current.is_none() {
                continue;
            }
            worker.remaining -= 1;
            if worker.remaining > 0 {
                continue;
            }

            let Some(task) = worker.current.take() else {
                continue;
            };
            completed += 1;
            debug!(task = %task, clock, "task complete");

            for dep in graph.dependents_of(&task) {
                if let Some(deg) = indegrees.get_mut(dep) {
                    *deg -= 1;
                    if *deg == 0 {
                        ready.insert(dep.clone());
                    }
                }
            }
        }

        dispatch(&mut pool, &mut ready, &duration);

        clock += 1;
    }

    info!(ticks = clock, workers, "simulation complete");
    Ok(clock)
}

/// Hand ready tasks to idle workers, smallest identifier to the lowest-index
/// idle slot, until either runs out.
fn dispatch<F>(pool: &mut [Worker], ready: &mut ReadySet, duration: &F)
where
    F: Fn(&TaskId) -> u64,
{
    for worker in pool.iter_mut() {
        if !worker.is_idle() {
            continue;
        }
        let Some(task) = ready.pop_min() else {
            break;
        };
        let cost = duration(&task);
        debug!(task = %task, cost, "dispatching task");
        worker.assign(task, cost);
    }
}
