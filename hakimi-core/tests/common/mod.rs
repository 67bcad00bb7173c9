use hakimi_core::{Session, WeightedGraph};
use rand::{SeedableRng, rngs::SmallRng};

/// Seed used wherever a test only needs some fixed weights.
pub const SEED: u64 = 2024;

#[must_use]
pub fn seeded_rng() -> SmallRng {
    SmallRng::seed_from_u64(SEED)
}

/// Builds a default session holding the realization of `sequence`.
///
/// # Panics
/// Panics when `sequence` cannot be realized.
#[must_use]
pub fn ready_session(sequence: &str) -> Session {
    let mut session = Session::default();
    session
        .realize_str(sequence, &mut seeded_rng())
        .expect("fixture sequence must realize");
    session
}

/// Sorted `(source, target)` pairs of a weighted graph's edges.
#[must_use]
pub fn edge_pairs(graph: &WeightedGraph) -> Vec<(usize, usize)> {
    graph
        .graph()
        .edges()
        .map(|edge| (edge.source(), edge.target()))
        .collect()
}
