mod common;
use crate::common::builders::{worked_example, GraphBuilder};
use crate::common::init_tracing;

use plandag::dag::{simulate, DepGraph, TaskId};
use plandag::duration::{letter_index, StepDurations};
use plandag::errors::PlandagError;

fn letter_durations(task: &TaskId) -> u64 {
    letter_index(task)
}

#[test]
fn worked_example_takes_15_ticks_with_two_workers() {
    init_tracing();

    let graph = worked_example().build();
    let ticks = simulate(&graph, 2, letter_durations).unwrap();

    assert_eq!(ticks, 15);
}

#[test]
fn single_worker_total_is_sum_of_durations() {
    init_tracing();

    let graph = worked_example().build();
    let expected: u64 = graph.tasks().map(|t| letter_index(t)).sum();

    assert_eq!(simulate(&graph, 1, letter_durations).unwrap(), expected);
}

#[test]
fn more_workers_never_take_longer() {
    init_tracing();

    let graph = worked_example().build();

    let mut previous = u64::MAX;
    for workers in 1..=6 {
        let ticks = simulate(&graph, workers, letter_durations).unwrap();
        assert!(
            ticks <= previous,
            "ticks went up from {previous} to {ticks} at {workers} workers"
        );
        previous = ticks;
    }
}

#[test]
fn freed_dependent_is_dispatched_within_the_same_tick() {
    init_tracing();

    // A finishes at tick 1 and B starts inside that same tick, so the chain
    // takes 2 ticks total. Deferring dispatch to the next tick would give 3.
    let graph = GraphBuilder::new().edge("A", "B").build();
    let ticks = simulate(&graph, 2, |_| 1).unwrap();

    assert_eq!(ticks, 2);
}

#[test]
fn spare_workers_sit_idle_without_effect() {
    init_tracing();

    let graph = worked_example().build();
    let at_six = simulate(&graph, 6, letter_durations).unwrap();
    let at_sixty = simulate(&graph, 60, letter_durations).unwrap();

    assert_eq!(at_six, at_sixty);
}

#[test]
fn base_duration_shifts_every_task_cost() {
    init_tracing();

    // One chain, one worker: total is just the sum, so the base shows up
    // once per task.
    let graph = GraphBuilder::new().edge("A", "B").build();
    let durations = StepDurations::new(60);
    let ticks = simulate(&graph, 1, |t| durations.of(t)).unwrap();

    assert_eq!(ticks, (60 + 1) + (60 + 2));
}

#[test]
fn zero_workers_is_rejected_up_front() {
    init_tracing();

    let graph = worked_example().build();
    assert!(matches!(
        simulate(&graph, 0, letter_durations),
        Err(PlandagError::InvalidWorkerCount(0))
    ));
}

#[test]
fn zero_duration_is_rejected_up_front() {
    init_tracing();

    let graph = GraphBuilder::new().edge("A", "B").build();
    match simulate(&graph, 1, |_| 0) {
        Err(PlandagError::ZeroDuration(task)) => assert_eq!(task, "A"),
        other => panic!("expected ZeroDuration, got {other:?}"),
    }
}

#[test]
fn cycle_is_reported_not_hung() {
    init_tracing();

    let graph = GraphBuilder::new().edge("A", "B").edge("B", "A").build();
    assert!(matches!(
        simulate(&graph, 2, letter_durations),
        Err(PlandagError::DagCycle(_))
    ));
}

#[test]
fn cycle_reached_mid_simulation_is_reported() {
    init_tracing();

    // A completes normally, then B and C wait on each other forever.
    let graph = GraphBuilder::new()
        .edge("A", "B")
        .edge("B", "C")
        .edge("C", "B")
        .build();

    assert!(matches!(
        simulate(&graph, 2, letter_durations),
        Err(PlandagError::DagCycle(_))
    ));
}

#[test]
fn empty_graph_completes_in_zero_ticks() {
    init_tracing();

    let graph = DepGraph::from_edges(Vec::<(String, String)>::new());
    assert_eq!(simulate(&graph, 3, letter_durations).unwrap(), 0);
}
