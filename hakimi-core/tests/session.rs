mod common;

use std::cell::Cell;

use hakimi_core::{
    Connectivity, Cutset, EulerKind, EulerWalk, GraphQueries, HakimiError, HakimiErrorCode,
    NativeQueries, Result, Session, SessionBuilder, SessionState, ShortestPaths, SpanningTree,
    VertexId, WeightedGraph,
};
use rstest::{fixture, rstest};

use common::{edge_pairs, ready_session, seeded_rng};

#[fixture]
fn empty() -> Session {
    Session::default()
}

#[rstest]
fn mixed_sequence_realizes_in_vertex_order() {
    let session = ready_session("3,3,2,2,1,1");
    let graph = session.graph().expect("graph realized");
    assert_eq!(graph.graph().degrees(), vec![3, 3, 2, 2, 1, 1]);
    assert_eq!(
        edge_pairs(graph),
        vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (4, 5)]
    );
    assert_eq!(graph.weights().len(), 6);
}

#[rstest]
fn uniform_three_realizes_k4() {
    let session = ready_session("3,3,3,3");
    let graph = session.graph().expect("graph realized");
    assert!(graph.graph().is_complete());
    assert_eq!(graph.graph().edge_count(), 6);
}

#[rstest]
#[case::degree_equals_vertex_count("4,4,4,4")]
#[case::star_too_wide("5,1,1,1,1")]
#[case::full_reduction_needed("3,3,3,1")]
fn non_graphic_sequences_leave_the_session_empty(mut empty: Session, #[case] text: &str) {
    let err = empty
        .realize_str(text, &mut seeded_rng())
        .expect_err("sequence is not graphic");
    assert_eq!(err.code(), HakimiErrorCode::NotGraphicSequence);
    assert_eq!(empty.state(), SessionState::Empty);
    assert!(empty.graph().is_none());
}

#[rstest]
fn malformed_text_is_rejected_before_realization(mut empty: Session) {
    let err = empty
        .realize_str("2,two,2", &mut seeded_rng())
        .expect_err("text is malformed");
    assert_eq!(
        err,
        HakimiError::InvalidInputFormat {
            token: "two".to_owned(),
            position: 1,
        }
    );
}

#[rstest]
fn queries_on_an_empty_session_need_a_graph(mut empty: Session) {
    assert_eq!(empty.euler(), Err(HakimiError::NoGraphAvailable));
    assert_eq!(empty.shortest_paths(0), Err(HakimiError::NoGraphAvailable));
    assert_eq!(empty.connectivity(), Err(HakimiError::NoGraphAvailable));
    assert_eq!(empty.fundamental_cutsets(), Err(HakimiError::NoGraphAvailable));
    assert_eq!(empty.articulation_points(), Err(HakimiError::NoGraphAvailable));
    assert_eq!(
        empty.compute_spanning_tree().map(SpanningTree::total_weight),
        Err(HakimiError::NoGraphAvailable)
    );
}

#[rstest]
fn tree_queries_need_a_spanning_tree() {
    let session = ready_session("2,2,2");
    assert_eq!(session.state(), SessionState::GraphReady);
    assert_eq!(
        session.fundamental_cutsets(),
        Err(HakimiError::NoSpanningTreeAvailable)
    );
    assert_eq!(
        session.articulation_points(),
        Err(HakimiError::NoSpanningTreeAvailable)
    );
}

#[rstest]
fn realizing_again_drops_the_spanning_tree() {
    let mut session = ready_session("2,2,2");
    session.compute_spanning_tree().expect("graph present");
    assert_eq!(session.state(), SessionState::SpanningTreeReady);

    session
        .realize_str("1,1", &mut seeded_rng())
        .expect("single edge realizes");
    assert_eq!(session.state(), SessionState::GraphReady);
    assert!(session.spanning_tree().is_none());
}

#[rstest]
fn failed_realization_keeps_the_previous_state() {
    let mut session = ready_session("3,3,3,3");
    session.compute_spanning_tree().expect("graph present");
    let before = session.spanning_tree().cloned();

    session
        .realize_str("4,4,4,4", &mut seeded_rng())
        .expect_err("sequence is not graphic");
    assert_eq!(session.state(), SessionState::SpanningTreeReady);
    assert_eq!(session.spanning_tree().cloned(), before);
    assert!(session.graph().is_some_and(|g| g.graph().is_complete()));
}

#[rstest]
fn cycle_has_an_euler_circuit() {
    let session = ready_session("2,2,2,2");
    let walk = session.euler().expect("graph present").expect("cycle is Eulerian");
    assert_eq!(walk.kind, EulerKind::Circuit);
    assert_eq!(walk.edges, vec![(0, 1), (1, 3), (3, 2), (2, 0)]);
}

#[rstest]
fn k4_has_no_euler_walk() {
    let session = ready_session("3,3,3,3");
    assert_eq!(session.euler(), Ok(None));
}

#[rstest]
fn shortest_paths_reject_out_of_range_start() {
    let session = ready_session("1,1");
    assert_eq!(
        session.shortest_paths(2),
        Err(HakimiError::InvalidStartVertex {
            vertex: 2,
            vertex_count: 2,
        })
    );
    let paths = session.shortest_paths(1).expect("start in range");
    assert_eq!(paths.path(0), Some([1, 0].as_slice()));
}

#[rstest]
#[case::k4("3,3,3,3", Connectivity { edge: 3, vertex: 3 })]
#[case::cycle("2,2,2,2", Connectivity { edge: 2, vertex: 2 })]
#[case::disconnected("3,3,2,2,1,1", Connectivity { edge: 0, vertex: 0 })]
#[case::isolated_vertex("1,1,0", Connectivity { edge: 0, vertex: 0 })]
fn connectivity_of_realized_graphs(#[case] text: &str, #[case] expected: Connectivity) {
    let session = ready_session(text);
    assert_eq!(session.connectivity(), Ok(expected));
}

#[rstest]
fn spanning_tree_pipeline_on_a_connected_graph() {
    let mut session = ready_session("3,3,2,2,2");
    let tree = session.compute_spanning_tree().expect("graph present").clone();
    assert!(tree.is_tree());
    assert_eq!(tree.graph().edge_count(), 4);

    let cutsets = session.fundamental_cutsets().expect("tree present");
    assert_eq!(cutsets.len(), 4);
    for cutset in &cutsets {
        assert!(cutset.edges.contains(&cutset.tree_edge));
    }

    let points = session.articulation_points().expect("tree present");
    assert!(points.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(
        points
            .iter()
            .all(|&vertex| tree.graph().degree(vertex) >= 2)
    );
}

#[rstest]
fn reset_returns_to_empty() {
    let mut session = ready_session("1,1");
    session.reset();
    assert_eq!(session.state(), SessionState::Empty);
}

/// Counts how often each capability is used while delegating to the native
/// backend.
#[derive(Default)]
struct CountingQueries {
    calls: Cell<usize>,
}

impl CountingQueries {
    fn tick(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl GraphQueries for CountingQueries {
    fn euler(&self, graph: &WeightedGraph) -> Option<EulerWalk> {
        self.tick();
        NativeQueries.euler(graph)
    }

    fn shortest_paths(&self, graph: &WeightedGraph, start: VertexId) -> Result<ShortestPaths> {
        self.tick();
        NativeQueries.shortest_paths(graph, start)
    }

    fn minimum_spanning_tree(&self, graph: &WeightedGraph) -> SpanningTree {
        self.tick();
        NativeQueries.minimum_spanning_tree(graph)
    }

    fn connectivity(&self, graph: &WeightedGraph) -> Connectivity {
        self.tick();
        NativeQueries.connectivity(graph)
    }

    fn fundamental_cutsets(&self, graph: &WeightedGraph, tree: &SpanningTree) -> Vec<Cutset> {
        self.tick();
        NativeQueries.fundamental_cutsets(graph, tree)
    }

    fn articulation_points(&self, tree: &SpanningTree) -> Vec<VertexId> {
        self.tick();
        NativeQueries.articulation_points(tree)
    }
}

#[rstest]
fn sessions_delegate_to_the_configured_backend() {
    let mut session = SessionBuilder::new()
        .with_queries(CountingQueries::default())
        .build()
        .expect("configuration is valid");
    assert!(session.euler().is_err());
    assert_eq!(session.queries().calls.get(), 0);

    session
        .realize_str("2,2,2", &mut seeded_rng())
        .expect("triangle realizes");
    session.euler().expect("graph present");
    session.compute_spanning_tree().expect("graph present");
    session.compute_spanning_tree().expect("tree is reused");
    session.articulation_points().expect("tree present");
    assert_eq!(session.queries().calls.get(), 3);
}
