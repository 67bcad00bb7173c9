//! Benchmark support crate for hakimi.
//!
//! Provides deterministic degree-sequence generators and parameter types used
//! by the Criterion benchmarks for realization and graph queries.

pub mod error;
pub mod params;
pub mod sequences;
