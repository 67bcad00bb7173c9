//! Property-based tests for graphicality and realization.
//!
//! Checks the Havel–Hakimi verdict against an Erdős–Gallai oracle, checks
//! that realizing the degree sequence of a random simple graph reproduces it
//! exactly, and checks weight assignment and Euler walks on realized graphs.

mod oracle;
mod strategies;
mod types;
