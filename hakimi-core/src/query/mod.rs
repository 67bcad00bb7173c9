//! Graph queries over a realized, weighted graph.
//!
//! [`GraphQueries`] is the capability the session depends on. Any graph
//! library that can answer these questions may implement it;
//! [`NativeQueries`] is the implementation shipped with the crate.

mod native;
mod types;

pub use self::{
    native::NativeQueries,
    types::{Connectivity, Cutset, EulerKind, EulerWalk, ShortestPaths, SpanningTree},
};

use crate::{
    error::Result,
    graph::VertexId,
    weights::WeightedGraph,
};

/// Read-only graph queries consumed by [`crate::Session`].
///
/// Implementations must not assume anything about the graph beyond the
/// invariants of [`crate::Graph`]: simple, undirected, vertices `0..n`, and
/// possibly disconnected.
pub trait GraphQueries {
    /// Finds an Euler circuit, or failing that an Euler path.
    ///
    /// Returns `None` when the graph has no edges or admits neither walk.
    fn euler(&self, graph: &WeightedGraph) -> Option<EulerWalk>;

    /// Computes shortest paths from `start` to every reachable vertex.
    ///
    /// # Errors
    /// Returns [`crate::HakimiError::InvalidStartVertex`] when `start` is not
    /// a vertex of `graph`.
    fn shortest_paths(&self, graph: &WeightedGraph, start: VertexId) -> Result<ShortestPaths>;

    /// Computes a minimum spanning tree (a forest for disconnected graphs).
    fn minimum_spanning_tree(&self, graph: &WeightedGraph) -> SpanningTree;

    /// Computes the edge and vertex connectivity numbers.
    fn connectivity(&self, graph: &WeightedGraph) -> Connectivity;

    /// Computes one fundamental cutset per edge of `tree`, evaluated against
    /// the edges of `graph`.
    fn fundamental_cutsets(&self, graph: &WeightedGraph, tree: &SpanningTree) -> Vec<Cutset>;

    /// Lists the articulation points of `tree` in ascending order.
    fn articulation_points(&self, tree: &SpanningTree) -> Vec<VertexId>;
}
