//! Benchmark parameter types.

use std::fmt;

use crate::sequences::SequenceShape;

/// Parameters for one realization or query benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct SequenceBenchParams {
    /// Number of entries in the degree sequence.
    pub vertex_count: usize,
    /// How the degrees were generated.
    pub shape: SequenceShape,
}

impl fmt::Display for SequenceBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},{}", self.vertex_count, self.shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(SequenceShape::Regular { degree: 4 }, "n=64,regular-4")]
    #[case(SequenceShape::Random { edge_percent: 10 }, "n=64,random-10%")]
    #[case(SequenceShape::Path, "n=64,path")]
    fn labels_include_size_and_shape(#[case] shape: SequenceShape, #[case] expected: &str) {
        let params = SequenceBenchParams {
            vertex_count: 64,
            shape,
        };
        assert_eq!(params.to_string(), expected);
    }
}
