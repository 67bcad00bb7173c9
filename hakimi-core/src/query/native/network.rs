//! Conversions from [`Graph`] into `petgraph` graphs.
//!
//! Vertex `v` always becomes `NodeIndex::new(v)`, so results map back by
//! calling [`NodeIndex::index`].

use petgraph::graph::{DiGraph, NodeIndex, UnGraph};

use crate::graph::{Edge, Graph, VertexId};

/// Builds an undirected graph on `vertex_count` nodes with one edge per
/// `(edge, weight)` pair.
pub(super) fn undirected<E>(
    vertex_count: usize,
    edges: impl IntoIterator<Item = (Edge, E)>,
) -> UnGraph<(), E> {
    let edges = edges.into_iter();
    let mut network = UnGraph::with_capacity(vertex_count, edges.size_hint().0);
    for _ in 0..vertex_count {
        network.add_node(());
    }
    for (edge, weight) in edges {
        network.add_edge(node(edge.source()), node(edge.target()), weight);
    }
    network
}

/// Flow network in which every undirected edge becomes a pair of opposite
/// arcs of capacity one.
pub(super) fn edge_flow_network(graph: &Graph) -> DiGraph<(), u32> {
    let mut network = DiGraph::with_capacity(graph.vertex_count(), 2 * graph.edge_count());
    for _ in graph.vertices() {
        network.add_node(());
    }
    for edge in graph.edges() {
        let (source, target) = (node(edge.source()), node(edge.target()));
        network.add_edge(source, target, 1);
        network.add_edge(target, source, 1);
    }
    network
}

/// Flow network in which every vertex `v` is split into [`split_in`]`(v)` and
/// [`split_out`]`(v)` joined by a unit arc, so that a maximum flow from
/// `split_out(s)` to `split_in(t)` counts vertex-disjoint paths.
pub(super) fn vertex_flow_network(graph: &Graph) -> DiGraph<(), u32> {
    let vertex_count = graph.vertex_count();
    // No path can carry more than one unit per intermediate vertex.
    let unbounded = u32::try_from(vertex_count).unwrap_or(u32::MAX);
    let mut network =
        DiGraph::with_capacity(2 * vertex_count, vertex_count + 2 * graph.edge_count());
    for _ in 0..2 * vertex_count {
        network.add_node(());
    }
    for vertex in graph.vertices() {
        network.add_edge(split_in(vertex), split_out(vertex), 1);
    }
    for edge in graph.edges() {
        let (left, right) = (edge.source(), edge.target());
        network.add_edge(split_out(left), split_in(right), unbounded);
        network.add_edge(split_out(right), split_in(left), unbounded);
    }
    network
}

pub(super) fn node(vertex: VertexId) -> NodeIndex {
    NodeIndex::new(vertex)
}

pub(super) fn split_in(vertex: VertexId) -> NodeIndex {
    NodeIndex::new(2 * vertex)
}

pub(super) fn split_out(vertex: VertexId) -> NodeIndex {
    NodeIndex::new(2 * vertex + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    use petgraph::visit::EdgeRef;

    use crate::query::native::test_graphs::plain;

    #[test]
    fn undirected_keeps_isolated_vertices_and_ids() {
        let graph = plain(4, &[(0, 2), (1, 2)]);
        let network = undirected(graph.vertex_count(), graph.edges().map(|edge| (edge, ())));
        assert_eq!(network.node_count(), 4);
        assert_eq!(network.edge_count(), 2);
        assert!(network.find_edge(node(2), node(0)).is_some());
        assert_eq!(network.neighbors(node(3)).count(), 0);
    }

    #[test]
    fn edge_flow_network_doubles_every_edge() {
        let network = edge_flow_network(&plain(3, &[(0, 1), (1, 2)]));
        assert_eq!(network.node_count(), 3);
        assert_eq!(network.edge_count(), 4);
        assert!(network.edge_references().all(|arc| *arc.weight() == 1));
    }

    #[test]
    fn vertex_flow_network_splits_each_vertex() {
        let network = vertex_flow_network(&plain(3, &[(0, 1), (1, 2)]));
        assert_eq!(network.node_count(), 6);
        assert_eq!(network.edge_count(), 3 + 4);
        let internal = network
            .find_edge(split_in(1), split_out(1))
            .and_then(|arc| network.edge_weight(arc));
        assert_eq!(internal, Some(&1));
        let crossing = network
            .find_edge(split_out(0), split_in(1))
            .and_then(|arc| network.edge_weight(arc));
        assert_eq!(crossing, Some(&3));
    }
}
