// src/dag/mod.rs

//! DAG representation, ordering and worker simulation.
//!
//! - [`graph`] holds a simple directed acyclic graph of tasks.
//! - [`ready`] is the priority-ordered set of dispatchable tasks, shared by
//!   the sequencer and the simulation.
//! - [`order`] produces the deterministic serial ordering (Kahn's algorithm
//!   with a lexical-minimum tie-break).
//! - [`sim`] runs the discrete-time worker-pool simulation.

pub mod graph;
pub mod order;
pub mod ready;
pub mod sim;

pub use graph::DepGraph;
pub use order::sequence;
pub use ready::ReadySet;
pub use sim::simulate;

/// Task identifier.
///
/// Single letters in the classic instruction-list domain, but any
/// non-whitespace token works; only the `Ord` impl matters for tie-breaks.
pub type TaskId = String;
