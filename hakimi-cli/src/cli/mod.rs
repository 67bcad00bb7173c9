//! Command-line interface for realizing degree sequences.
//!
//! The single `realize` command builds a graph from a comma-separated degree
//! sequence, weights it, runs the requested queries through a
//! [`hakimi_core::Session`], and renders a plain-text report.

mod commands;
mod render;

pub use commands::{
    Cli, CliError, Command, Query, QueryKind, QueryOutcome, RealizeCommand, Report, run_cli,
};
pub use render::render_report;
