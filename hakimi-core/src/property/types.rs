//! Fixture types for the realization property suite.

use test_strategy::Arbitrary;

use crate::graph::Edge;

/// Topology family a generated graph is drawn from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum GraphShape {
    /// Roughly one edge per vertex.
    Sparse,
    /// Most vertex pairs joined.
    Dense,
    /// Every vertex pair joined.
    Complete,
    /// Acyclic, possibly with several trees.
    Forest,
    /// Random edges among a subset, leaving some vertices isolated.
    WithIsolated,
}

/// A generated simple graph and the shape it was drawn from.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    pub vertex_count: usize,
    pub edges: Vec<Edge>,
    pub shape: GraphShape,
}

impl GraphFixture {
    /// Degree of every vertex, in vertex order.
    pub(super) fn degrees(&self) -> Vec<i64> {
        let mut degrees = vec![0_i64; self.vertex_count];
        for edge in &self.edges {
            degrees[edge.source()] += 1;
            degrees[edge.target()] += 1;
        }
        degrees
    }
}
