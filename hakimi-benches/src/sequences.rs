//! Deterministic degree-sequence generators.
//!
//! Every generator yields a graphic sequence so benchmarks measure the full
//! realization path rather than an early rejection.

use std::fmt;

use hakimi_core::DegreeSequence;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// How a benchmark sequence is generated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SequenceShape {
    /// Every vertex has the same degree.
    Regular {
        /// Degree shared by all vertices.
        degree: usize,
    },
    /// Degrees of a random graph where each vertex pair is joined
    /// independently.
    Random {
        /// Chance, in percent, that a pair is joined.
        edge_percent: u32,
    },
    /// Degrees of a simple path.
    Path,
}

impl fmt::Display for SequenceShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regular { degree } => write!(f, "regular-{degree}"),
            Self::Random { edge_percent } => write!(f, "random-{edge_percent}%"),
            Self::Path => f.write_str("path"),
        }
    }
}

/// Generates a graphic sequence of `vertex_count` entries with the given
/// shape. `seed` only affects [`SequenceShape::Random`].
///
/// # Errors
/// Returns [`BenchSetupError`] when the shape cannot be realized on
/// `vertex_count` vertices or a degree overflows a sequence entry.
///
/// # Examples
/// ```
/// use hakimi_benches::sequences::{SequenceShape, generate};
///
/// let sequence = generate(6, SequenceShape::Regular { degree: 3 }, 0)?;
/// assert_eq!(sequence.as_slice(), &[3, 3, 3, 3, 3, 3]);
/// assert!(sequence.is_graphic());
/// # Ok::<(), hakimi_benches::error::BenchSetupError>(())
/// ```
pub fn generate(
    vertex_count: usize,
    shape: SequenceShape,
    seed: u64,
) -> Result<DegreeSequence, BenchSetupError> {
    match shape {
        SequenceShape::Regular { degree } => regular(vertex_count, degree),
        SequenceShape::Random { edge_percent } => random(vertex_count, edge_percent, seed),
        SequenceShape::Path => path(vertex_count),
    }
}

fn regular(vertex_count: usize, degree: usize) -> Result<DegreeSequence, BenchSetupError> {
    let odd_sum = vertex_count.checked_mul(degree).is_none_or(|sum| !sum.is_multiple_of(2));
    if degree >= vertex_count.max(1) || odd_sum {
        return Err(BenchSetupError::NotRegular {
            vertex_count,
            degree,
        });
    }
    let entry = i64::try_from(degree)?;
    Ok(DegreeSequence::new(vec![entry; vertex_count]))
}

fn random(
    vertex_count: usize,
    edge_percent: u32,
    seed: u64,
) -> Result<DegreeSequence, BenchSetupError> {
    if edge_percent > 100 {
        return Err(BenchSetupError::InvalidPercent {
            percent: edge_percent,
        });
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut degrees = vec![0_i64; vertex_count];
    for left in 0..vertex_count {
        for right in (left + 1)..vertex_count {
            if !rng.gen_ratio(edge_percent, 100) {
                continue;
            }
            for vertex in [left, right] {
                if let Some(degree) = degrees.get_mut(vertex) {
                    *degree += 1;
                }
            }
        }
    }
    Ok(DegreeSequence::new(degrees))
}

fn path(vertex_count: usize) -> Result<DegreeSequence, BenchSetupError> {
    if vertex_count < 2 {
        return Ok(DegreeSequence::new(vec![0; vertex_count]));
    }
    let last = vertex_count - 1;
    let degrees = (0..vertex_count)
        .map(|vertex| if vertex == 0 || vertex == last { 1 } else { 2 })
        .collect();
    Ok(DegreeSequence::new(degrees))
}
