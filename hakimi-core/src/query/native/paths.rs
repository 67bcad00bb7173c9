//! Dijkstra single-source shortest paths on top of `petgraph`.

use std::collections::BTreeMap;

use petgraph::{algo, graph::UnGraph, visit::EdgeRef};

use crate::{
    graph::VertexId,
    query::ShortestPaths,
    weights::WeightedGraph,
};

use super::network::{node, undirected};

/// Computes shortest paths from `start`, which must be a vertex of `graph`.
///
/// Among equally short paths the one whose last hop comes from the smaller
/// predecessor id wins.
pub(super) fn dijkstra(graph: &WeightedGraph, start: VertexId) -> ShortestPaths {
    let network = undirected(
        graph.graph().vertex_count(),
        graph
            .weighted_edges()
            .map(|(edge, weight)| (edge, u64::from(weight.get()))),
    );
    let distances: BTreeMap<VertexId, u64> =
        algo::dijkstra(&network, node(start), None, |edge| *edge.weight())
            .into_iter()
            .map(|(reached, cost)| (reached.index(), cost))
            .collect();

    let predecessors: BTreeMap<VertexId, VertexId> = distances
        .iter()
        .filter(|&(&vertex, _)| vertex != start)
        .filter_map(|(&vertex, &cost)| {
            predecessor(&network, &distances, vertex, cost).map(|previous| (vertex, previous))
        })
        .collect();
    let paths = distances
        .keys()
        .map(|&vertex| (vertex, trace_path(&predecessors, vertex)))
        .collect();

    ShortestPaths {
        source: start,
        distances,
        paths,
    }
}

/// Smallest neighbour of `vertex` that lies on a shortest path to it.
fn predecessor(
    network: &UnGraph<(), u64>,
    distances: &BTreeMap<VertexId, u64>,
    vertex: VertexId,
    cost: u64,
) -> Option<VertexId> {
    network
        .edges(node(vertex))
        .filter_map(|edge| {
            let (source, target) = (edge.source().index(), edge.target().index());
            let other = if source == vertex { target } else { source };
            let reached = distances.get(&other)?;
            (reached.checked_add(*edge.weight()) == Some(cost)).then_some(other)
        })
        .min()
}

fn trace_path(predecessors: &BTreeMap<VertexId, VertexId>, target: VertexId) -> Vec<VertexId> {
    let mut path = vec![target];
    let mut current = target;
    while let Some(&previous) = predecessors.get(&current) {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}
