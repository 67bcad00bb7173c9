//! Hakimi core library.
//!
//! Decides whether a degree sequence is graphic, realizes it as a simple
//! undirected graph with the Havel–Hakimi construction, weights the edges,
//! and answers standard graph queries through a [`Session`].
//!
//! # Examples
//! ```
//! use hakimi_core::{DegreeSequence, realize};
//!
//! let sequence: DegreeSequence = "3,3,3,3".parse()?;
//! let graph = realize(&sequence)?;
//! assert!(graph.is_complete());
//! assert_eq!(graph.edge_count(), 6);
//! # Ok::<(), hakimi_core::HakimiError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod error;
mod graph;
mod query;
mod realize;
mod sequence;
mod session;
mod weights;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{DEFAULT_MAX_VERTICES, SessionBuilder},
    error::{HakimiError, HakimiErrorCode, NotGraphicReason, Result},
    graph::{Edge, Graph, VertexId},
    query::{
        Connectivity, Cutset, EulerKind, EulerWalk, GraphQueries, NativeQueries, ShortestPaths,
        SpanningTree,
    },
    realize::realize,
    sequence::{DegreeSequence, is_graphic},
    session::{Session, SessionState},
    weights::{EdgeWeightMap, MAX_WEIGHT, MIN_WEIGHT, Weight, WeightedGraph, assign_weights},
};
