//! Strategy builders for the realization property suite.
//!
//! Graphs are generated from a seed so a failing case can be replayed with
//! [`generate_fixture`] alone.

use proptest::{collection::vec, prelude::*};
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

use crate::graph::Edge;

use super::types::{GraphFixture, GraphShape};

/// Largest vertex count for generated graphs.
const MAX_VERTICES: usize = 24;
/// Largest vertex count for complete graphs, which grow quadratically.
const COMPLETE_MAX_VERTICES: usize = 12;

/// Short integer sequences, mostly small non-negative values with the odd
/// negative or oversized entry.
pub(super) fn degree_sequence_strategy() -> impl Strategy<Value = Vec<i64>> {
    vec(prop_oneof![8 => 0_i64..6, 1 => -2_i64..0, 1 => 6_i64..12], 0..=9)
}

/// Random simple graphs across every [`GraphShape`].
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<GraphShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        generate_fixture(shape, &mut SmallRng::seed_from_u64(seed))
    })
}

/// Generates a fixture of the given shape.
pub(super) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> GraphFixture {
    let (vertex_count, edges) = match shape {
        GraphShape::Sparse => {
            let n = rng.gen_range(0..=MAX_VERTICES);
            (n, random_edges(rng, 0..n, 1.5 / n.max(1) as f64))
        }
        GraphShape::Dense => {
            let n = rng.gen_range(2..=MAX_VERTICES);
            let p = rng.gen_range(0.6..0.95);
            (n, random_edges(rng, 0..n, p))
        }
        GraphShape::Complete => {
            let n = rng.gen_range(1..=COMPLETE_MAX_VERTICES);
            (n, random_edges(rng, 0..n, 1.0))
        }
        GraphShape::Forest => {
            let n = rng.gen_range(1..=MAX_VERTICES);
            (n, random_forest(rng, n))
        }
        GraphShape::WithIsolated => {
            let n = rng.gen_range(3..=MAX_VERTICES);
            let active = rng.gen_range(2..n);
            (n, random_edges(rng, 0..active, 0.5))
        }
    };
    GraphFixture {
        vertex_count,
        edges,
        shape,
    }
}

/// Joins each pair of `vertices` independently with probability `p`.
fn random_edges(rng: &mut SmallRng, vertices: std::ops::Range<usize>, p: f64) -> Vec<Edge> {
    let p = p.clamp(0.0, 1.0);
    let mut edges = Vec::new();
    for u in vertices.clone() {
        for v in u + 1..vertices.end {
            if rng.gen_bool(p) {
                edges.extend(Edge::new(u, v));
            }
        }
    }
    edges
}

/// Attaches each vertex after the first to an earlier one, skipping some
/// attachments to split the forest into several trees.
fn random_forest(rng: &mut SmallRng, n: usize) -> Vec<Edge> {
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);
    let mut edges = Vec::new();
    for index in 1..n {
        if rng.gen_bool(0.85) {
            let parent = order[rng.gen_range(0..index)];
            edges.extend(Edge::new(parent, order[index]));
        }
    }
    edges
}
