//! Edge and vertex connectivity via maximum flow.
//!
//! Both numbers are bounded by the minimum degree, so every search is anchored
//! at a minimum-degree vertex `v`. Edge connectivity is the smallest flow from
//! `v` to any other vertex with one unit of capacity per edge direction.
//! Vertex connectivity uses Even's reduction: flows on the split-vertex
//! network from `v` to each non-neighbour, then between each non-adjacent pair
//! of `v`'s neighbours. A complete graph on `n` vertices has vertex
//! connectivity `n - 1`.

use petgraph::{
    algo::ford_fulkerson,
    graph::{DiGraph, NodeIndex},
};

use crate::{
    graph::{Graph, VertexId},
    query::Connectivity,
};

use super::network::{edge_flow_network, node, split_in, split_out, vertex_flow_network};

pub(super) fn connectivity(graph: &Graph) -> Connectivity {
    if graph.vertex_count() < 2 || !graph.is_connected() {
        return Connectivity::default();
    }
    let degrees = graph.degrees();
    let Some((anchor, &min_degree)) = degrees
        .iter()
        .enumerate()
        .min_by_key(|&(vertex, degree)| (*degree, vertex))
    else {
        return Connectivity::default();
    };
    Connectivity {
        edge: edge_connectivity(graph, anchor, min_degree),
        vertex: vertex_connectivity(graph, anchor, min_degree),
    }
}

fn edge_connectivity(graph: &Graph, anchor: VertexId, min_degree: usize) -> usize {
    let network = edge_flow_network(graph);
    graph
        .vertices()
        .filter(|&other| other != anchor)
        .fold(min_degree, |best, other| {
            if best == 0 {
                return best;
            }
            best.min(max_flow(&network, node(anchor), node(other)))
        })
}

fn vertex_connectivity(graph: &Graph, anchor: VertexId, min_degree: usize) -> usize {
    if graph.is_complete() {
        return graph.vertex_count() - 1;
    }
    let network = vertex_flow_network(graph);
    let local = |source: VertexId, sink: VertexId| {
        max_flow(&network, split_out(source), split_in(sink))
    };

    let neighbours = graph.neighbours(anchor);
    let from_anchor = graph
        .vertices()
        .filter(|&other| other != anchor && !graph.contains_edge(anchor, other))
        .map(|other| local(anchor, other));
    let between_neighbours = neighbours.iter().enumerate().flat_map(|(index, &left)| {
        neighbours
            .iter()
            .skip(index + 1)
            .filter(move |&&right| !graph.contains_edge(left, right))
            .map(move |&right| (left, right))
    });
    let among_neighbours = between_neighbours.map(|(left, right)| local(left, right));

    from_anchor.chain(among_neighbours).fold(min_degree, usize::min)
}

fn max_flow(network: &DiGraph<(), u32>, source: NodeIndex, sink: NodeIndex) -> usize {
    let (flow, _) = ford_fulkerson(network, source, sink);
    usize::try_from(flow).unwrap_or(usize::MAX)
}
