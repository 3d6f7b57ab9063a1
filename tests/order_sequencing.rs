mod common;
use crate::common::builders::{worked_example, GraphBuilder};
use crate::common::init_tracing;

use plandag::dag::{sequence, DepGraph};
use plandag::errors::PlandagError;

#[test]
fn worked_example_order_is_cabdfe() {
    init_tracing();

    let graph = worked_example().build();
    let order = sequence(&graph).unwrap();

    assert_eq!(order.concat(), "CABDFE");
}

#[test]
fn every_prerequisite_precedes_its_dependent() {
    init_tracing();

    let builder = worked_example();
    let edges: Vec<(String, String)> = builder.edges().to_vec();
    let order = sequence(&builder.build()).unwrap();

    let position = |task: &str| {
        order
            .iter()
            .position(|t| t == task)
            .unwrap_or_else(|| panic!("task {task} missing from order"))
    };

    for (pre, dep) in &edges {
        assert!(
            position(pre) < position(dep),
            "{pre} must come before {dep}"
        );
    }
}

#[test]
fn output_is_identical_across_runs_and_edge_permutations() {
    init_tracing();

    let builder = worked_example();
    let mut edges: Vec<(String, String)> = builder.edges().to_vec();
    let first = sequence(&builder.build()).unwrap();

    // Same graph, second run.
    let graph = DepGraph::from_edges(edges.clone());
    assert_eq!(sequence(&graph).unwrap(), first);

    // Same edge set, reversed supply order.
    edges.reverse();
    let graph = DepGraph::from_edges(edges);
    assert_eq!(sequence(&graph).unwrap(), first);
}

#[test]
fn simultaneously_ready_tasks_emit_smallest_first() {
    init_tracing();

    // After X, all of A/B/C are ready at once.
    let graph = GraphBuilder::new()
        .edge("X", "C")
        .edge("X", "A")
        .edge("X", "B")
        .build();

    let order = sequence(&graph).unwrap();
    assert_eq!(order.concat(), "XABC");
}

#[test]
fn cycle_is_reported_not_hung() {
    init_tracing();

    let graph = GraphBuilder::new().edge("A", "B").edge("B", "A").build();

    match sequence(&graph) {
        Err(PlandagError::DagCycle(stuck)) => {
            assert!(stuck.contains('A'));
            assert!(stuck.contains('B'));
        }
        other => panic!("expected DagCycle, got {other:?}"),
    }
}

#[test]
fn cycle_behind_a_valid_prefix_is_still_reported() {
    init_tracing();

    // A is emitted fine, then B/C deadlock.
    let graph = GraphBuilder::new()
        .edge("A", "B")
        .edge("B", "C")
        .edge("C", "B")
        .build();

    assert!(matches!(
        sequence(&graph),
        Err(PlandagError::DagCycle(_))
    ));
}

#[test]
fn empty_graph_yields_empty_order() {
    init_tracing();

    let graph = DepGraph::from_edges(Vec::<(String, String)>::new());
    assert!(sequence(&graph).unwrap().is_empty());
}

#[test]
fn duplicate_edges_double_count_but_still_sequence() {
    init_tracing();

    // Documented behaviour: the duplicate edge bumps B's indegree to 2, and
    // A's single emission decrements it twice via the repeated adjacency
    // entry, so the order still comes out.
    let graph = GraphBuilder::new().edge("A", "B").edge("A", "B").build();
    assert_eq!(sequence(&graph).unwrap().concat(), "AB");
}
