//! Simple undirected graph produced by realization.
//!
//! A [`Graph`] has no public mutators: once built it is read by every
//! downstream query without synchronisation.

use std::collections::BTreeSet;

/// Vertex identifier. Vertices are numbered `0..vertex_count`.
pub type VertexId = usize;

/// An undirected edge in canonical form (`source < target`).
///
/// # Examples
/// ```
/// use hakimi_core::Edge;
///
/// let edge = Edge::new(4, 1).expect("distinct endpoints form an edge");
/// assert_eq!((edge.source(), edge.target()), (1, 4));
/// assert!(Edge::new(2, 2).is_none());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Edge {
    source: VertexId,
    target: VertexId,
}

impl Edge {
    /// Builds the canonical edge between `left` and `right`.
    ///
    /// Returns `None` for a self-loop.
    #[must_use]
    pub const fn new(left: VertexId, right: VertexId) -> Option<Self> {
        if left == right {
            return None;
        }
        let (source, target) = if left < right {
            (left, right)
        } else {
            (right, left)
        };
        Some(Self { source, target })
    }

    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> VertexId { self.source }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> VertexId { self.target }

    /// Returns the endpoint opposite `vertex`, or `None` when `vertex` is not
    /// an endpoint.
    #[must_use]
    pub const fn other(&self, vertex: VertexId) -> Option<VertexId> {
        if vertex == self.source {
            Some(self.target)
        } else if vertex == self.target {
            Some(self.source)
        } else {
            None
        }
    }

    /// Returns `true` when `vertex` is one of the endpoints.
    #[must_use]
    pub const fn touches(&self, vertex: VertexId) -> bool {
        vertex == self.source || vertex == self.target
    }
}

/// A simple undirected graph on vertices `0..vertex_count`.
///
/// Graphs are built through [`crate::realize`] or as spanning trees by a
/// [`crate::GraphQueries`] implementation; both go through [`Graph::from_edges`].
///
/// # Examples
/// ```
/// use hakimi_core::{Edge, Graph};
///
/// let edges = [Edge::new(0, 1), Edge::new(1, 2)].into_iter().flatten();
/// let graph = Graph::from_edges(4, edges).expect("edges are in range");
/// assert_eq!(graph.degrees(), vec![1, 2, 1, 0]);
/// assert!(graph.contains_edge(2, 1));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    vertex_count: usize,
    edges: BTreeSet<Edge>,
}

impl Graph {
    /// Builds a graph from canonical edges.
    ///
    /// Duplicate edges collapse into one. Returns `None` when an edge names a
    /// vertex outside `0..vertex_count`.
    #[must_use]
    pub fn from_edges(vertex_count: usize, edges: impl IntoIterator<Item = Edge>) -> Option<Self> {
        let mut set = BTreeSet::new();
        for edge in edges {
            if edge.target >= vertex_count {
                return None;
            }
            set.insert(edge);
        }
        Some(Self {
            vertex_count,
            edges: set,
        })
    }

    /// Returns the graph on the same vertices keeping only the edges for which
    /// `keep` holds.
    pub(crate) fn edge_subgraph(&self, mut keep: impl FnMut(&Edge) -> bool) -> Self {
        Self {
            vertex_count: self.vertex_count,
            edges: self.edges.iter().copied().filter(|edge| keep(edge)).collect(),
        }
    }

    /// Builds a graph with no edges.
    #[must_use]
    pub const fn empty(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: BTreeSet::new(),
        }
    }

    /// Returns the number of vertices, including isolated ones.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Iterates over the vertex ids in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        0..self.vertex_count
    }

    /// Returns `true` when `vertex` belongs to the graph.
    #[must_use]
    pub const fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex < self.vertex_count
    }

    /// Iterates over the edges in ascending canonical order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when `left` and `right` are adjacent.
    #[must_use]
    pub fn contains_edge(&self, left: VertexId, right: VertexId) -> bool {
        Edge::new(left, right).is_some_and(|edge| self.edges.contains(&edge))
    }

    /// Returns the degree of every vertex in vertex order.
    #[must_use]
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.vertex_count];
        for edge in &self.edges {
            degrees[edge.source] += 1;
            degrees[edge.target] += 1;
        }
        degrees
    }

    /// Returns the degree of `vertex`, or zero when it is not in the graph.
    #[must_use]
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.edges.iter().filter(|edge| edge.touches(vertex)).count()
    }

    /// Returns the neighbours of `vertex` in ascending order.
    #[must_use]
    pub fn neighbours(&self, vertex: VertexId) -> Vec<VertexId> {
        let mut neighbours: Vec<VertexId> = self
            .edges
            .iter()
            .filter_map(|edge| edge.other(vertex))
            .collect();
        neighbours.sort_unstable();
        neighbours
    }

    /// Returns sorted adjacency lists indexed by vertex.
    #[must_use]
    pub fn adjacency(&self) -> Vec<Vec<VertexId>> {
        let mut adjacency = vec![Vec::new(); self.vertex_count];
        for edge in &self.edges {
            adjacency[edge.source].push(edge.target);
            adjacency[edge.target].push(edge.source);
        }
        for list in &mut adjacency {
            list.sort_unstable();
        }
        adjacency
    }

    /// Returns `true` when every pair of distinct vertices is adjacent.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let n = self.vertex_count;
        self.edges.len() == n * n.saturating_sub(1) / 2
    }

    /// Labels every vertex with the smallest vertex id of its component.
    #[must_use]
    pub fn component_labels(&self) -> Vec<VertexId> {
        let adjacency = self.adjacency();
        let mut labels: Vec<Option<VertexId>> = vec![None; self.vertex_count];
        for root in 0..self.vertex_count {
            if labels[root].is_some() {
                continue;
            }
            labels[root] = Some(root);
            let mut stack = vec![root];
            while let Some(vertex) = stack.pop() {
                for &next in &adjacency[vertex] {
                    if labels[next].is_none() {
                        labels[next] = Some(root);
                        stack.push(next);
                    }
                }
            }
        }
        labels
            .into_iter()
            .enumerate()
            .map(|(vertex, label)| label.unwrap_or(vertex))
            .collect()
    }

    /// Returns `true` when the graph has at most one component.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.component_labels().iter().all(|&label| label == 0)
    }
}
