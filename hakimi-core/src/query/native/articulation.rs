//! Cut vertices through `petgraph`'s articulation-point search.

use petgraph::algo::articulation_points::articulation_points as cut_vertices;

use crate::graph::{Graph, VertexId};

use super::network::undirected;

/// Returns the cut vertices of `graph` in ascending order.
pub(super) fn articulation_points(graph: &Graph) -> Vec<VertexId> {
    let network = undirected(graph.vertex_count(), graph.edges().map(|edge| (edge, ())));
    let mut points: Vec<VertexId> = cut_vertices(&network)
        .into_iter()
        .map(|node| node.index())
        .collect();
    points.sort_unstable();
    points
}
