//! Havel–Hakimi construction of a graph with a prescribed degree sequence.
//!
//! Vertices are kept as `(vertex, remaining)` pairs ordered by remaining
//! degree descending with ties broken by ascending vertex id. The head pair is
//! removed and joined to the next `remaining` pairs, which each lose one unit
//! of remaining degree; the list is re-sorted and the step repeats. A removed
//! vertex never re-enters the list, so no pair of vertices is joined twice.

use tracing::{debug, instrument};

use crate::{
    error::{HakimiError, NotGraphicReason, Result},
    graph::{Edge, Graph, VertexId},
    sequence::DegreeSequence,
};

/// Builds one simple graph whose degrees equal `sequence` exactly.
///
/// The sequence is re-validated before construction, so a graph is never
/// produced for a non-graphic sequence. Vertices with degree zero are still
/// part of the returned graph.
///
/// # Errors
/// Returns [`HakimiError::NotGraphicSequence`] when the sequence is not
/// graphic or construction runs out of eligible neighbours.
///
/// # Examples
/// ```
/// use hakimi_core::{DegreeSequence, realize};
///
/// let sequence: DegreeSequence = "3,3,2,2,1,1".parse()?;
/// let graph = realize(&sequence)?;
/// assert_eq!(graph.vertex_count(), 6);
/// assert_eq!(graph.degrees(), vec![3, 3, 2, 2, 1, 1]);
/// # Ok::<(), hakimi_core::HakimiError>(())
/// ```
#[instrument(
    name = "core.realize",
    err,
    skip(sequence),
    fields(vertices = sequence.len()),
)]
pub fn realize(sequence: &DegreeSequence) -> Result<Graph> {
    let degrees = sequence.graphic_degrees()?;
    let vertex_count = degrees.len();
    let edges = havel_hakimi(degrees)?;
    let graph = Graph::from_edges(vertex_count, edges).ok_or_else(reduction_failed)?;
    debug!(edges = graph.edge_count(), "realization completed");
    Ok(graph)
}

fn havel_hakimi(degrees: Vec<usize>) -> Result<Vec<Edge>> {
    let mut pending: Vec<(VertexId, usize)> = degrees.into_iter().enumerate().collect();
    sort_pending(&mut pending);

    let mut edges = Vec::new();
    while let Some(&(vertex, wanted)) = pending.first() {
        if wanted == 0 {
            // Sorted descending, so every remaining entry is zero as well.
            break;
        }
        pending.remove(0);
        if wanted > pending.len() {
            return Err(reduction_failed());
        }
        for (neighbour, remaining) in pending.iter_mut().take(wanted) {
            if *remaining == 0 {
                return Err(reduction_failed());
            }
            *remaining -= 1;
            edges.push(Edge::new(vertex, *neighbour).ok_or_else(reduction_failed)?);
        }
        sort_pending(&mut pending);
    }
    Ok(edges)
}

fn sort_pending(pending: &mut [(VertexId, usize)]) {
    pending.sort_unstable_by(|left, right| right.1.cmp(&left.1).then(left.0.cmp(&right.0)));
}

const fn reduction_failed() -> HakimiError {
    HakimiError::NotGraphicSequence {
        reason: NotGraphicReason::ReductionFailed,
    }
}
