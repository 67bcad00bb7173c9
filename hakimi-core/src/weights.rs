//! Random edge weights for realized graphs.

use std::{collections::BTreeMap, fmt};

use rand::Rng;

use crate::graph::{Edge, Graph};

/// Smallest weight that can be assigned to an edge.
pub const MIN_WEIGHT: u8 = 1;
/// Largest weight that can be assigned to an edge.
pub const MAX_WEIGHT: u8 = 10;

/// An edge weight in `MIN_WEIGHT..=MAX_WEIGHT`.
///
/// # Examples
/// ```
/// use hakimi_core::Weight;
///
/// assert_eq!(Weight::new(7).map(Weight::get), Some(7));
/// assert!(Weight::new(0).is_none());
/// assert!(Weight::new(11).is_none());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Weight(u8);

impl Weight {
    /// Wraps `value` when it lies within the permitted range.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= MIN_WEIGHT && value <= MAX_WEIGHT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the raw weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> u8 { self.0 }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Weight of every edge of one graph.
pub type EdgeWeightMap = BTreeMap<Edge, Weight>;

/// Draws one uniform weight per edge of `graph`.
///
/// Edges are visited in ascending canonical order, so the same seeded `rng`
/// always yields the same map.
///
/// # Examples
/// ```
/// use hakimi_core::{DegreeSequence, assign_weights, realize};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let graph = realize(&"2,2,2".parse::<DegreeSequence>()?)?;
/// let weights = assign_weights(&graph, &mut SmallRng::seed_from_u64(7));
/// assert_eq!(weights.len(), graph.edge_count());
/// assert!(weights.values().all(|w| (1..=10).contains(&w.get())));
/// # Ok::<(), hakimi_core::HakimiError>(())
/// ```
pub fn assign_weights<R: Rng + ?Sized>(graph: &Graph, rng: &mut R) -> EdgeWeightMap {
    graph
        .edges()
        .map(|edge| (edge, Weight(rng.gen_range(MIN_WEIGHT..=MAX_WEIGHT))))
        .collect()
}

/// A realized graph together with the weights drawn for it.
///
/// This is the render view handed to presentation layers and the input of
/// every [`crate::GraphQueries`] operation. The weight map always covers the
/// edge set exactly.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WeightedGraph {
    graph: Graph,
    weights: EdgeWeightMap,
}

impl WeightedGraph {
    /// Draws weights for `graph` from `rng`.
    ///
    /// # Examples
    /// ```
    /// use hakimi_core::{Graph, WeightedGraph};
    /// use rand::{SeedableRng, rngs::SmallRng};
    ///
    /// let weighted = WeightedGraph::assign(Graph::empty(3), &mut SmallRng::seed_from_u64(0));
    /// assert!(weighted.weights().is_empty());
    /// ```
    pub fn assign<R: Rng + ?Sized>(graph: Graph, rng: &mut R) -> Self {
        let weights = assign_weights(&graph, rng);
        Self { graph, weights }
    }

    /// Pairs `graph` with explicit weights.
    ///
    /// Returns `None` unless `weights` has exactly one entry per edge.
    #[must_use]
    pub fn from_parts(graph: Graph, weights: EdgeWeightMap) -> Option<Self> {
        (weights.len() == graph.edge_count() && weights.keys().copied().eq(graph.edges()))
            .then_some(Self { graph, weights })
    }

    /// Returns the underlying graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn graph(&self) -> &Graph { &self.graph }

    /// Returns the weight map.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weights(&self) -> &EdgeWeightMap { &self.weights }

    /// Returns the weight of `edge`, or `None` when it is not an edge.
    #[must_use]
    pub fn weight(&self, edge: Edge) -> Option<Weight> {
        self.weights.get(&edge).copied()
    }

    /// Iterates over `(edge, weight)` pairs in canonical edge order.
    pub fn weighted_edges(&self) -> impl Iterator<Item = (Edge, Weight)> + '_ {
        self.weights.iter().map(|(edge, weight)| (*edge, *weight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    use crate::{realize, sequence::DegreeSequence};

    fn graph(raw: &str) -> Graph {
        let sequence: DegreeSequence = raw.parse().expect("sequence parses");
        realize(&sequence).expect("sequence realizes")
    }

    #[rstest]
    #[case("3,3,2,2,1,1")]
    #[case("3,3,3,3")]
    #[case("0,0")]
    fn every_edge_gets_exactly_one_weight(#[case] raw: &str) {
        let graph = graph(raw);
        let weights = assign_weights(&graph, &mut SmallRng::seed_from_u64(1));
        assert_eq!(weights.len(), graph.edge_count());
        assert!(weights.keys().copied().eq(graph.edges()));
        assert!(
            weights
                .values()
                .all(|weight| (MIN_WEIGHT..=MAX_WEIGHT).contains(&weight.get()))
        );
    }

    #[test]
    fn same_seed_yields_same_weights() {
        let graph = graph("4,4,4,4,4");
        let first = assign_weights(&graph, &mut SmallRng::seed_from_u64(42));
        let second = assign_weights(&graph, &mut SmallRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn from_parts_requires_exact_cover() {
        let graph = graph("1,1,1,1");
        let mut weights = assign_weights(&graph, &mut SmallRng::seed_from_u64(9));
        assert!(WeightedGraph::from_parts(graph.clone(), weights.clone()).is_some());

        let extra = Edge::new(0, 3).expect("distinct");
        weights.insert(extra, Weight(5));
        assert!(WeightedGraph::from_parts(graph.clone(), weights.clone()).is_none());

        weights.clear();
        assert!(WeightedGraph::from_parts(graph, weights).is_none());
    }

    #[test]
    fn weights_cover_the_full_range() {
        let graph = graph(&vec!["19"; 20].join(","));
        let weights = assign_weights(&graph, &mut SmallRng::seed_from_u64(3));
        let seen: std::collections::BTreeSet<u8> = weights.values().map(|w| w.get()).collect();
        assert_eq!(seen.len(), usize::from(MAX_WEIGHT));
    }
}
