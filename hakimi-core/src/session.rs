//! Session lifecycle sequencing realization and queries.
//!
//! A [`Session`] owns at most one realized, weighted graph and at most one
//! spanning tree of it. Operations check the current [`SessionState`] and fail
//! with [`HakimiError::NoGraphAvailable`] or
//! [`HakimiError::NoSpanningTreeAvailable`] when their input does not exist
//! yet.

use std::num::NonZeroUsize;

use rand::Rng;
use tracing::{error, info, instrument, warn};

use crate::{
    Result,
    builder::DEFAULT_MAX_VERTICES,
    error::HakimiError,
    graph::VertexId,
    query::{
        Connectivity, Cutset, EulerWalk, GraphQueries, NativeQueries, ShortestPaths,
        SpanningTree,
    },
    realize::realize,
    sequence::DegreeSequence,
    weights::WeightedGraph,
};

/// Which artefacts a [`Session`] currently holds.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SessionState {
    /// Nothing has been realized yet, or the session was reset.
    Empty,
    /// A weighted graph is available.
    GraphReady,
    /// A weighted graph and its minimum spanning tree are available.
    SpanningTreeReady,
}

#[derive(Clone, Debug)]
struct Realized {
    graph: WeightedGraph,
    tree: Option<SpanningTree>,
}

/// Owned state machine that realizes degree sequences and answers queries on
/// the result.
///
/// # Examples
/// ```
/// use hakimi_core::{Session, SessionState};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut session = Session::default();
/// let mut rng = SmallRng::seed_from_u64(7);
/// session.realize_str("2,2,2", &mut rng)?;
/// assert_eq!(session.state(), SessionState::GraphReady);
///
/// let tree = session.compute_spanning_tree()?;
/// assert!(tree.is_tree());
/// assert_eq!(session.articulation_points()?.len(), 1);
/// # Ok::<(), hakimi_core::HakimiError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Session<Q = NativeQueries> {
    queries: Q,
    max_vertices: NonZeroUsize,
    realized: Option<Realized>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(
            NativeQueries,
            NonZeroUsize::new(DEFAULT_MAX_VERTICES).unwrap_or(NonZeroUsize::MIN),
        )
    }
}

impl<Q: GraphQueries> Session<Q> {
    pub(crate) const fn new(queries: Q, max_vertices: NonZeroUsize) -> Self {
        Self {
            queries,
            max_vertices,
            realized: None,
        }
    }

    /// Returns the largest sequence length this session will realize.
    #[must_use]
    #[rustfmt::skip]
    pub const fn max_vertices(&self) -> NonZeroUsize { self.max_vertices }

    /// Returns the query backend.
    #[must_use]
    #[rustfmt::skip]
    pub const fn queries(&self) -> &Q { &self.queries }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        match &self.realized {
            None => SessionState::Empty,
            Some(Realized { tree: None, .. }) => SessionState::GraphReady,
            Some(Realized { tree: Some(_), .. }) => SessionState::SpanningTreeReady,
        }
    }

    /// Returns the current weighted graph, if any.
    #[must_use]
    pub fn graph(&self) -> Option<&WeightedGraph> {
        self.realized.as_ref().map(|realized| &realized.graph)
    }

    /// Returns the current spanning tree, if one has been computed.
    #[must_use]
    pub fn spanning_tree(&self) -> Option<&SpanningTree> {
        self.realized
            .as_ref()
            .and_then(|realized| realized.tree.as_ref())
    }

    /// Realizes `sequence`, weights the result with `rng`, and replaces any
    /// previous graph and spanning tree.
    ///
    /// On failure the session keeps whatever it held before.
    ///
    /// # Errors
    /// Returns [`HakimiError::SequenceTooLong`] when the sequence exceeds the
    /// vertex limit and [`HakimiError::NotGraphicSequence`] when it cannot be
    /// realized.
    pub fn realize<R: Rng + ?Sized>(
        &mut self,
        sequence: &DegreeSequence,
        rng: &mut R,
    ) -> Result<&WeightedGraph> {
        let graph = self.realize_weighted(sequence, rng)?;
        let realized = self.realized.insert(Realized { graph, tree: None });
        Ok(&realized.graph)
    }

    /// Parses comma-separated degrees and realizes them.
    ///
    /// # Errors
    /// Returns [`HakimiError::InvalidInputFormat`] for unparsable text, and
    /// otherwise the errors of [`Session::realize`].
    pub fn realize_str<R: Rng + ?Sized>(
        &mut self,
        text: &str,
        rng: &mut R,
    ) -> Result<&WeightedGraph> {
        let sequence = text.parse::<DegreeSequence>().inspect_err(|error| {
            warn!(code = %error.code(), "rejected degree sequence text");
        })?;
        self.realize(&sequence, rng)
    }

    #[instrument(
        name = "session.realize",
        err,
        skip(self, sequence, rng),
        fields(vertices = sequence.len(), max_vertices = self.max_vertices.get()),
    )]
    fn realize_weighted<R: Rng + ?Sized>(
        &self,
        sequence: &DegreeSequence,
        rng: &mut R,
    ) -> Result<WeightedGraph> {
        let outcome = self
            .check_length(sequence)
            .and_then(|()| realize(sequence))
            .map(|graph| WeightedGraph::assign(graph, rng));
        record_realization(outcome.is_ok());
        let graph = outcome?;
        info!(
            vertices = graph.graph().vertex_count(),
            edges = graph.graph().edge_count(),
            "graph realized"
        );
        Ok(graph)
    }

    fn check_length(&self, sequence: &DegreeSequence) -> Result<()> {
        let max = self.max_vertices.get();
        let len = sequence.len();
        if len > max {
            return Err(HakimiError::SequenceTooLong { len, max });
        }
        Ok(())
    }

    /// Computes the minimum spanning tree of the current graph.
    ///
    /// A tree computed earlier for the same graph is returned as-is.
    ///
    /// # Errors
    /// Returns [`HakimiError::NoGraphAvailable`] when no graph is held.
    #[instrument(name = "session.compute_spanning_tree", skip(self))]
    pub fn compute_spanning_tree(&mut self) -> Result<&SpanningTree> {
        let Some(Realized { graph, tree }) = self.realized.as_mut() else {
            let err = HakimiError::NoGraphAvailable;
            error!(error = %err, "spanning tree requested without a graph");
            return Err(err);
        };
        let queries = &self.queries;
        Ok(tree.get_or_insert_with(|| minimum_tree(queries, graph)))
    }

    /// Finds an Euler circuit or path on the current graph.
    ///
    /// # Errors
    /// Returns [`HakimiError::NoGraphAvailable`] when no graph is held.
    #[instrument(name = "session.euler", err, skip(self))]
    pub fn euler(&self) -> Result<Option<EulerWalk>> {
        let graph = self.require_graph()?;
        record_query("euler");
        Ok(self.queries.euler(graph))
    }

    /// Computes shortest paths from `start` on the current graph.
    ///
    /// # Errors
    /// Returns [`HakimiError::NoGraphAvailable`] when no graph is held and
    /// [`HakimiError::InvalidStartVertex`] when `start` is out of range.
    #[instrument(name = "session.shortest_paths", err, skip(self))]
    pub fn shortest_paths(&self, start: VertexId) -> Result<ShortestPaths> {
        let graph = self.require_graph()?;
        record_query("shortest_paths");
        self.queries.shortest_paths(graph, start)
    }

    /// Computes the connectivity numbers of the current graph.
    ///
    /// # Errors
    /// Returns [`HakimiError::NoGraphAvailable`] when no graph is held.
    #[instrument(name = "session.connectivity", err, skip(self))]
    pub fn connectivity(&self) -> Result<Connectivity> {
        let graph = self.require_graph()?;
        record_query("connectivity");
        Ok(self.queries.connectivity(graph))
    }

    /// Computes the fundamental cutsets of the current spanning tree.
    ///
    /// # Errors
    /// Returns [`HakimiError::NoGraphAvailable`] when no graph is held and
    /// [`HakimiError::NoSpanningTreeAvailable`] when no tree has been
    /// computed.
    #[instrument(name = "session.fundamental_cutsets", err, skip(self))]
    pub fn fundamental_cutsets(&self) -> Result<Vec<Cutset>> {
        let (graph, tree) = self.require_tree()?;
        record_query("fundamental_cutsets");
        Ok(self.queries.fundamental_cutsets(graph, tree))
    }

    /// Lists the articulation points of the current spanning tree.
    ///
    /// # Errors
    /// Same as [`Session::fundamental_cutsets`].
    #[instrument(name = "session.articulation_points", err, skip(self))]
    pub fn articulation_points(&self) -> Result<Vec<VertexId>> {
        let (_, tree) = self.require_tree()?;
        record_query("articulation_points");
        Ok(self.queries.articulation_points(tree))
    }

    /// Drops the graph and spanning tree.
    pub fn reset(&mut self) {
        self.realized = None;
    }

    fn require_graph(&self) -> Result<&WeightedGraph> {
        self.graph().ok_or(HakimiError::NoGraphAvailable)
    }

    fn require_tree(&self) -> Result<(&WeightedGraph, &SpanningTree)> {
        match &self.realized {
            None => Err(HakimiError::NoGraphAvailable),
            Some(Realized { tree: None, .. }) => Err(HakimiError::NoSpanningTreeAvailable),
            Some(Realized {
                graph,
                tree: Some(tree),
            }) => Ok((graph, tree)),
        }
    }
}

fn minimum_tree<Q: GraphQueries>(queries: &Q, graph: &WeightedGraph) -> SpanningTree {
    record_query("minimum_spanning_tree");
    let tree = queries.minimum_spanning_tree(graph);
    info!(
        edges = tree.graph().edge_count(),
        total_weight = tree.total_weight(),
        "spanning tree computed"
    );
    tree
}

#[cfg(feature = "metrics")]
fn record_realization(succeeded: bool) {
    if succeeded {
        metrics::counter!("hakimi_realizations_total").increment(1);
    } else {
        metrics::counter!("hakimi_realization_failures_total").increment(1);
    }
}

#[cfg(not(feature = "metrics"))]
fn record_realization(_succeeded: bool) {}

#[cfg(feature = "metrics")]
fn record_query(query: &'static str) {
    metrics::counter!("hakimi_queries_total", "query" => query).increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_query(_query: &'static str) {}
