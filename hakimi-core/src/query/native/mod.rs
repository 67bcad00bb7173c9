//! [`GraphQueries`] backed by `petgraph`.
//!
//! Every algorithm here is deterministic: ties are always broken toward the
//! smaller vertex id or the smaller canonical edge, so repeated queries on the
//! same graph give identical answers. Vertex ids map one-to-one onto
//! `petgraph` node indices (see `network`).

mod articulation;
mod connectivity;
mod cutset;
mod euler;
mod network;
mod paths;
mod spanning;

use tracing::{debug, instrument};

use crate::{
    error::{HakimiError, Result},
    graph::VertexId,
    weights::WeightedGraph,
};

use super::{Connectivity, Cutset, EulerWalk, GraphQueries, ShortestPaths, SpanningTree};

/// Graph queries over [`crate::Graph`], using `petgraph` for the classic
/// algorithms and hand-rolled Euler walks and cutsets.
///
/// # Examples
/// ```
/// use hakimi_core::{DegreeSequence, GraphQueries, NativeQueries, WeightedGraph, realize};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let graph = realize(&"2,2,2".parse::<DegreeSequence>()?)?;
/// let weighted = WeightedGraph::assign(graph, &mut SmallRng::seed_from_u64(1));
/// let walk = NativeQueries.euler(&weighted).expect("a triangle has an Euler circuit");
/// assert!(walk.is_circuit());
/// assert_eq!(walk.edges.len(), 3);
/// # Ok::<(), hakimi_core::HakimiError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NativeQueries;

impl GraphQueries for NativeQueries {
    #[instrument(name = "query.euler", skip_all, fields(edges = graph.graph().edge_count()))]
    fn euler(&self, graph: &WeightedGraph) -> Option<EulerWalk> {
        let walk = euler::euler_walk(graph.graph());
        debug!(found = walk.is_some(), "euler search completed");
        walk
    }

    #[instrument(name = "query.shortest_paths", err, skip(self, graph))]
    fn shortest_paths(&self, graph: &WeightedGraph, start: VertexId) -> Result<ShortestPaths> {
        if !graph.graph().contains_vertex(start) {
            return Err(HakimiError::InvalidStartVertex {
                vertex: start,
                vertex_count: graph.graph().vertex_count(),
            });
        }
        Ok(paths::dijkstra(graph, start))
    }

    #[instrument(name = "query.minimum_spanning_tree", skip_all)]
    fn minimum_spanning_tree(&self, graph: &WeightedGraph) -> SpanningTree {
        let tree = spanning::kruskal(graph);
        debug!(
            edges = tree.graph().edge_count(),
            components = tree.component_count(),
            "spanning forest computed"
        );
        tree
    }

    #[instrument(name = "query.connectivity", skip_all)]
    fn connectivity(&self, graph: &WeightedGraph) -> Connectivity {
        connectivity::connectivity(graph.graph())
    }

    #[instrument(name = "query.fundamental_cutsets", skip_all)]
    fn fundamental_cutsets(&self, graph: &WeightedGraph, tree: &SpanningTree) -> Vec<Cutset> {
        cutset::fundamental_cutsets(graph.graph(), tree.graph())
    }

    #[instrument(name = "query.articulation_points", skip_all)]
    fn articulation_points(&self, tree: &SpanningTree) -> Vec<VertexId> {
        articulation::articulation_points(tree.graph())
    }
}
