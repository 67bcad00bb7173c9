//! Result types returned by [`super::GraphQueries`] implementations.

use std::collections::BTreeMap;

use crate::{
    graph::{Edge, Graph, VertexId},
    weights::{EdgeWeightMap, Weight},
};

/// Whether an Euler walk returns to its starting vertex.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EulerKind {
    /// Closed walk; the last edge ends where the first began.
    Circuit,
    /// Open walk between the two odd-degree vertices.
    Path,
}

/// A walk using every edge exactly once, as directed edge tuples in
/// traversal order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EulerWalk {
    /// Circuit or open path.
    pub kind: EulerKind,
    /// `(from, to)` pairs; each `to` is the next pair's `from`.
    pub edges: Vec<(VertexId, VertexId)>,
}

impl EulerWalk {
    /// Returns `true` for a closed walk.
    #[must_use]
    pub fn is_circuit(&self) -> bool {
        self.kind == EulerKind::Circuit
    }
}

/// Single-source shortest paths under the edge weights.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShortestPaths {
    /// Vertex the search started from.
    pub source: VertexId,
    /// Total weight of the shortest path to every reachable vertex.
    pub distances: BTreeMap<VertexId, u64>,
    /// Vertex sequence of the chosen shortest path to every reachable vertex,
    /// starting at `source` and ending at the key.
    pub paths: BTreeMap<VertexId, Vec<VertexId>>,
}

impl ShortestPaths {
    /// Returns the distance to `vertex`, or `None` when it is unreachable.
    #[must_use]
    pub fn distance(&self, vertex: VertexId) -> Option<u64> {
        self.distances.get(&vertex).copied()
    }

    /// Returns the path to `vertex`, or `None` when it is unreachable.
    #[must_use]
    pub fn path(&self, vertex: VertexId) -> Option<&[VertexId]> {
        self.paths.get(&vertex).map(Vec::as_slice)
    }
}

/// A minimum spanning tree, or a spanning forest when the graph it was
/// computed from is disconnected.
///
/// The tree shares the original graph's vertex set but owns an independent
/// edge set.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningTree {
    tree: Graph,
    weights: EdgeWeightMap,
    component_count: usize,
}

impl SpanningTree {
    /// Builds a spanning tree from its parts.
    #[must_use]
    pub const fn new(tree: Graph, weights: EdgeWeightMap, component_count: usize) -> Self {
        Self {
            tree,
            weights,
            component_count,
        }
    }

    /// Returns the tree as a graph on the original vertex set.
    #[must_use]
    #[rustfmt::skip]
    pub const fn graph(&self) -> &Graph { &self.tree }

    /// Returns the weights of the tree edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weights(&self) -> &EdgeWeightMap { &self.weights }

    /// Returns the number of components the forest spans.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest is a single tree.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Iterates over `(edge, weight)` pairs in canonical edge order.
    pub fn weighted_edges(&self) -> impl Iterator<Item = (Edge, Weight)> + '_ {
        self.weights.iter().map(|(edge, weight)| (*edge, *weight))
    }

    /// Returns the sum of the tree edge weights.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.weights.values().map(|weight| u64::from(weight.get())).sum()
    }
}

/// Edge and vertex connectivity numbers.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Connectivity {
    /// Fewest edges whose removal disconnects the graph.
    pub edge: usize,
    /// Fewest vertices whose removal disconnects the graph (or leaves one
    /// vertex).
    pub vertex: usize,
}

/// The fundamental cutset of one spanning-tree edge.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cutset {
    /// The tree edge whose removal splits the tree.
    pub tree_edge: Edge,
    /// Original-graph edges crossing between the two sides, in canonical
    /// order. Always contains `tree_edge`.
    pub edges: Vec<Edge>,
}
