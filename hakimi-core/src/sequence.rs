//! Degree sequences and the graphic-sequence test.
//!
//! The test is the iterative Havel–Hakimi reduction: sort descending, remove
//! the largest entry `d`, subtract one from the next `d` entries and repeat
//! until everything is zero (graphic) or the largest entry cannot be served
//! (not graphic). Each round removes one entry, so at most `n` rounds run.

use std::{fmt, str::FromStr};

use crate::error::{HakimiError, NotGraphicReason, Result};

/// An ordered list of target vertex degrees.
///
/// Entry `i` is the degree vertex `i` must have. Entries are kept as parsed,
/// including negative values, so that infeasibility is decided by the
/// reduction rather than by the parser.
///
/// # Examples
/// ```
/// use hakimi_core::DegreeSequence;
///
/// let sequence: DegreeSequence = "3, 3, 2, 2, 1, 1".parse()?;
/// assert_eq!(sequence.len(), 6);
/// assert!(sequence.is_graphic());
/// # Ok::<(), hakimi_core::HakimiError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct DegreeSequence {
    degrees: Vec<i64>,
}

impl DegreeSequence {
    /// Wraps explicit degree entries.
    #[must_use]
    pub const fn new(degrees: Vec<i64>) -> Self {
        Self { degrees }
    }

    /// Returns the entries in vertex order.
    #[must_use]
    #[rustfmt::skip]
    pub fn as_slice(&self) -> &[i64] { &self.degrees }

    /// Returns the number of entries, which is the vertex count.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.degrees.len() }

    /// Returns `true` for the empty sequence.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.degrees.is_empty() }

    /// Returns `true` when some simple graph has exactly these degrees.
    #[must_use]
    pub fn is_graphic(&self) -> bool {
        is_graphic(&self.degrees)
    }

    /// Runs the graphic test and reports why a sequence was rejected.
    ///
    /// # Errors
    /// Returns [`HakimiError::NotGraphicSequence`] when the reduction rejects
    /// the sequence.
    ///
    /// # Examples
    /// ```
    /// use hakimi_core::{DegreeSequence, HakimiError, NotGraphicReason};
    ///
    /// let err = DegreeSequence::new(vec![5, 1, 1, 1, 1])
    ///     .check_graphic()
    ///     .expect_err("vertex 0 cannot reach five neighbours");
    /// assert!(matches!(
    ///     err.not_graphic_reason(),
    ///     Some(NotGraphicReason::DegreeTooLarge { vertex: 0, .. })
    /// ));
    /// ```
    pub fn check_graphic(&self) -> Result<()> {
        if self.is_graphic() {
            return Ok(());
        }
        Err(HakimiError::NotGraphicSequence {
            reason: classify_rejection(&self.degrees),
        })
    }

    /// Returns the entries as vertex degrees once the sequence is known to be
    /// graphic.
    ///
    /// # Errors
    /// Returns [`HakimiError::NotGraphicSequence`] when the sequence is not
    /// graphic.
    pub(crate) fn graphic_degrees(&self) -> Result<Vec<usize>> {
        self.check_graphic()?;
        self.degrees
            .iter()
            .map(|&degree| usize::try_from(degree))
            .collect::<core::result::Result<Vec<_>, _>>()
            .map_err(|_| HakimiError::NotGraphicSequence {
                reason: classify_rejection(&self.degrees),
            })
    }
}

impl From<Vec<i64>> for DegreeSequence {
    fn from(degrees: Vec<i64>) -> Self {
        Self::new(degrees)
    }
}

impl FromStr for DegreeSequence {
    type Err = HakimiError;

    /// Parses a comma-separated list of integers.
    ///
    /// Whitespace around tokens is ignored and blank input is the empty
    /// sequence. Empty tokens such as the middle of `"1,,1"` are rejected.
    fn from_str(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        raw.split(',')
            .enumerate()
            .map(|(position, token)| {
                let token = token.trim();
                token
                    .parse::<i64>()
                    .map_err(|_| HakimiError::InvalidInputFormat {
                        token: token.to_owned(),
                        position,
                    })
            })
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }
}

impl fmt::Display for DegreeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for degree in &self.degrees {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{degree}")?;
            first = false;
        }
        Ok(())
    }
}

/// Decides whether `sequence` is the degree sequence of a simple graph.
///
/// Always runs the full reduction; parity or range shortcuts are never used
/// to reach a verdict.
///
/// # Examples
/// ```
/// use hakimi_core::is_graphic;
///
/// assert!(is_graphic(&[3, 3, 3, 3]));
/// assert!(!is_graphic(&[3, 3, 3, 1]));
/// assert!(is_graphic(&[]));
/// assert!(is_graphic(&[0, 0, 0]));
/// ```
#[must_use]
pub fn is_graphic(sequence: &[i64]) -> bool {
    let mut working = sequence.to_vec();
    loop {
        working.sort_unstable_by(|left, right| right.cmp(left));
        if working.iter().all(|&degree| degree == 0) {
            return true;
        }
        let largest = working.remove(0);
        let Ok(wanted) = usize::try_from(largest) else {
            return false;
        };
        // `largest >= n` before removal is `wanted > remaining` after it.
        if wanted > working.len() {
            return false;
        }
        for degree in working.iter_mut().take(wanted) {
            *degree = degree.saturating_sub(1);
        }
    }
}

fn classify_rejection(sequence: &[i64]) -> NotGraphicReason {
    if let Some((vertex, &degree)) = sequence.iter().enumerate().find(|(_, d)| **d < 0) {
        return NotGraphicReason::NegativeDegree { vertex, degree };
    }
    let vertex_count = sequence.len();
    let too_large = sequence.iter().enumerate().find(|(_, d)| {
        usize::try_from(**d).map_or(true, |degree| degree >= vertex_count)
    });
    if let Some((vertex, &degree)) = too_large {
        return NotGraphicReason::DegreeTooLarge {
            vertex,
            degree,
            vertex_count,
        };
    }
    let sum: i128 = sequence.iter().map(|&degree| i128::from(degree)).sum();
    if sum % 2 != 0 {
        return NotGraphicReason::OddDegreeSum { sum };
    }
    NotGraphicReason::ReductionFailed
}
