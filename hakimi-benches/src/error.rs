//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of `.expect()`.

use std::num::TryFromIntError;

use hakimi_core::HakimiError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Realization, session construction, or a query failed.
    #[error("core operation failed: {0}")]
    Core(#[from] HakimiError),
    /// No simple graph on `vertex_count` vertices is `degree`-regular.
    #[error("no {degree}-regular simple graph has {vertex_count} vertices")]
    NotRegular {
        /// Number of vertices requested.
        vertex_count: usize,
        /// Degree requested for every vertex.
        degree: usize,
    },
    /// An edge probability above 100 percent was requested.
    #[error("edge probability {percent}% exceeds 100%")]
    InvalidPercent {
        /// The requested probability.
        percent: u32,
    },
    /// The realized graph was expected to be connected.
    #[error("realized graph on {vertex_count} vertices is disconnected")]
    Disconnected {
        /// Number of vertices in the realized graph.
        vertex_count: usize,
    },
    /// A degree did not fit in a sequence entry.
    #[error("degree does not fit in a sequence entry: {0}")]
    Conversion(#[from] TryFromIntError),
}
