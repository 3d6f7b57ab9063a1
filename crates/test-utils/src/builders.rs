#![allow(dead_code)]

use plandag::dag::DepGraph;

/// Builder for `DepGraph` to simplify test setup.
pub struct GraphBuilder {
    edges: Vec<(String, String)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Add one `prerequisite -> dependent` edge.
    pub fn edge(mut self, pre: &str, dep: &str) -> Self {
        self.edges.push((pre.to_string(), dep.to_string()));
        self
    }

    /// The raw edge list, for tests that want to permute it.
    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }

    pub fn build(self) -> DepGraph {
        DepGraph::from_edges(self.edges)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The worked example from the classic instruction list:
/// C→A, C→F, A→B, A→D, B→E, D→E, F→E.
pub fn worked_example() -> GraphBuilder {
    GraphBuilder::new()
        .edge("C", "A")
        .edge("C", "F")
        .edge("A", "B")
        .edge("A", "D")
        .edge("B", "E")
        .edge("D", "E")
        .edge("F", "E")
}

/// Render an edge list as the sentence template the parser accepts.
pub fn instructions_text(edges: &[(String, String)]) -> String {
    edges
        .iter()
        .map(|(pre, dep)| {
            format!("Step {pre} must be finished before step {dep} can begin.\n")
        })
        .collect()
}
