//! Hierholzer's algorithm for Euler circuits and paths.

use std::collections::BTreeSet;

use crate::{
    graph::{Graph, VertexId},
    query::{EulerKind, EulerWalk},
};

/// Finds an Euler circuit or path of `graph`.
///
/// Isolated vertices are ignored when checking connectivity. A circuit starts
/// at the smallest vertex with an edge; a path starts at the smaller of the
/// two odd-degree vertices. At each step the smallest unused neighbour is
/// taken.
pub(super) fn euler_walk(graph: &Graph) -> Option<EulerWalk> {
    let degrees = graph.degrees();
    let first = degrees.iter().position(|&degree| degree > 0)?;

    let labels = graph.component_labels();
    let spans_one_component = degrees
        .iter()
        .zip(&labels)
        .all(|(&degree, &label)| degree == 0 || label == labels[first]);
    if !spans_one_component {
        return None;
    }

    let odd: Vec<VertexId> = degrees
        .iter()
        .enumerate()
        .filter(|(_, degree)| *degree % 2 == 1)
        .map(|(vertex, _)| vertex)
        .collect();
    let (kind, start) = match odd.as_slice() {
        [] => (EulerKind::Circuit, first),
        [from, _] => (EulerKind::Path, *from),
        _ => return None,
    };

    let mut unused: Vec<BTreeSet<VertexId>> = graph
        .adjacency()
        .into_iter()
        .map(BTreeSet::from_iter)
        .collect();
    let mut stack = vec![start];
    let mut order = Vec::with_capacity(graph.edge_count() + 1);
    while let Some(&vertex) = stack.last() {
        match unused[vertex].pop_first() {
            Some(next) => {
                unused[next].remove(&vertex);
                stack.push(next);
            }
            None => {
                order.push(vertex);
                stack.pop();
            }
        }
    }
    order.reverse();

    let edges = order.windows(2).map(|pair| (pair[0], pair[1])).collect();
    Some(EulerWalk { kind, edges })
}
