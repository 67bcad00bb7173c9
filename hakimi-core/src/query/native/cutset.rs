//! Fundamental cutsets of a spanning tree.

use crate::{
    graph::{Edge, Graph, VertexId},
    query::Cutset,
};

/// Computes one cutset per tree edge, in canonical tree-edge order.
///
/// Removing a tree edge splits its tree component in two. The cutset is every
/// edge of `graph` with one end on each side, the tree edge included.
pub(super) fn fundamental_cutsets(graph: &Graph, tree: &Graph) -> Vec<Cutset> {
    let adjacency = tree.adjacency();
    tree.edges()
        .map(|tree_edge| {
            let near = side_of(&adjacency, tree_edge, tree_edge.source());
            let far = side_of(&adjacency, tree_edge, tree_edge.target());
            let edges = graph
                .edges()
                .filter(|edge| {
                    let (u, v) = (edge.source(), edge.target());
                    (near[u] && far[v]) || (far[u] && near[v])
                })
                .collect();
            Cutset { tree_edge, edges }
        })
        .collect()
}

/// Marks the vertices reachable from `root` in the tree without crossing
/// `removed`.
fn side_of(adjacency: &[Vec<VertexId>], removed: Edge, root: VertexId) -> Vec<bool> {
    let mut reached = vec![false; adjacency.len()];
    reached[root] = true;
    let mut stack = vec![root];
    while let Some(vertex) = stack.pop() {
        for &next in &adjacency[vertex] {
            if reached[next] || Edge::new(vertex, next) == Some(removed) {
                continue;
            }
            reached[next] = true;
            stack.push(next);
        }
    }
    reached
}
