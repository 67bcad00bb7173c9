//! Kruskal minimum spanning forest.

use petgraph::unionfind::UnionFind;

use crate::{
    query::SpanningTree,
    weights::{EdgeWeightMap, WeightedGraph},
};

/// Computes a minimum spanning forest of `graph`.
///
/// Edges are considered in `(weight, source, target)` order, so the forest is
/// unique for a given weighted graph even when weights repeat.
pub(super) fn kruskal(graph: &WeightedGraph) -> SpanningTree {
    let vertex_count = graph.graph().vertex_count();
    let mut candidates: Vec<_> = graph.weighted_edges().collect();
    candidates.sort_unstable_by_key(|&(edge, weight)| (weight, edge));

    let mut sets = UnionFind::<usize>::new(vertex_count);
    let mut components = vertex_count;
    let mut accepted = EdgeWeightMap::new();
    for (edge, weight) in candidates {
        if components <= 1 {
            break;
        }
        if sets.union(edge.source(), edge.target()) {
            components -= 1;
            accepted.insert(edge, weight);
        }
    }

    let tree = graph
        .graph()
        .edge_subgraph(|edge| accepted.contains_key(edge));
    SpanningTree::new(tree, accepted, components)
}
