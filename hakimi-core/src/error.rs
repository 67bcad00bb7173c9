//! Error types for the hakimi core library.
//!
//! Every failure the core can report is an expected, recoverable condition.
//! Each variant carries a stable machine-readable code so presentation layers
//! can map failures to messages without matching on display strings.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Why a degree sequence was rejected as non-graphic.
///
/// The reason is diagnostic only. The verdict itself always comes from the
/// full Havel–Hakimi reduction; the reason is classified afterwards.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum NotGraphicReason {
    /// An entry was negative.
    NegativeDegree {
        /// Vertex carrying the negative entry.
        vertex: usize,
        /// The offending entry.
        degree: i64,
    },
    /// An entry asked for more neighbours than there are other vertices.
    DegreeTooLarge {
        /// Vertex carrying the oversized entry.
        vertex: usize,
        /// The offending entry.
        degree: i64,
        /// Number of vertices in the sequence.
        vertex_count: usize,
    },
    /// The entries sum to an odd number, so no edge set can realize them.
    OddDegreeSum {
        /// Sum of all entries.
        sum: i128,
    },
    /// Every simple check passed but the reduction ran out of neighbours.
    ReductionFailed,
}

impl fmt::Display for NotGraphicReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeDegree { vertex, degree } => {
                write!(f, "vertex {vertex} has negative degree {degree}")
            }
            Self::DegreeTooLarge {
                vertex,
                degree,
                vertex_count,
            } => write!(
                f,
                "vertex {vertex} wants degree {degree} but only {} other vertices exist",
                vertex_count.saturating_sub(1)
            ),
            Self::OddDegreeSum { sum } => write!(f, "degree sum {sum} is odd"),
            Self::ReductionFailed => f.write_str("Havel-Hakimi reduction ran out of neighbours"),
        }
    }
}

/// Error type produced by the hakimi core API.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum HakimiError {
    /// The input text could not be parsed into a sequence of integers.
    #[error("token `{token}` at position {position} is not an integer")]
    InvalidInputFormat {
        /// The offending token after trimming.
        token: String,
        /// Zero-based position of the token in the comma-separated list.
        position: usize,
    },
    /// The sequence is not the degree sequence of any simple graph.
    #[error("degree sequence is not graphic: {reason}")]
    NotGraphicSequence {
        /// Diagnostic classification of the failure.
        reason: NotGraphicReason,
    },
    /// A query was requested before any graph was realized.
    #[error("no graph has been realized yet")]
    NoGraphAvailable,
    /// A shortest-path start vertex is not part of the current graph.
    #[error("start vertex {vertex} is not in a graph with {vertex_count} vertices")]
    InvalidStartVertex {
        /// The requested start vertex.
        vertex: usize,
        /// Number of vertices in the current graph.
        vertex_count: usize,
    },
    /// A spanning-tree query was requested before a spanning tree was computed.
    #[error("no spanning tree has been computed yet")]
    NoSpanningTreeAvailable,
    /// The sequence exceeds the configured vertex limit.
    #[error("degree sequence has {len} entries but at most {max} are allowed")]
    SequenceTooLong {
        /// Number of entries supplied.
        len: usize,
        /// Configured maximum.
        max: usize,
    },
    /// The session builder was given a zero vertex limit.
    #[error("max_vertices must be at least 1 (got {got})")]
    InvalidMaxVertices {
        /// The rejected limit.
        got: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`HakimiError`] variants.
    enum HakimiErrorCode for HakimiError {
        /// The input text could not be parsed into integers.
        InvalidInputFormat => InvalidInputFormat { .. } => "HAKIMI_INVALID_INPUT_FORMAT",
        /// The sequence is not graphic.
        NotGraphicSequence => NotGraphicSequence { .. } => "HAKIMI_NOT_GRAPHIC_SEQUENCE",
        /// No graph has been realized yet.
        NoGraphAvailable => NoGraphAvailable => "HAKIMI_NO_GRAPH_AVAILABLE",
        /// The start vertex is not part of the graph.
        InvalidStartVertex => InvalidStartVertex { .. } => "HAKIMI_INVALID_START_VERTEX",
        /// No spanning tree has been computed yet.
        NoSpanningTreeAvailable => NoSpanningTreeAvailable => "HAKIMI_NO_SPANNING_TREE_AVAILABLE",
        /// The sequence exceeds the configured vertex limit.
        SequenceTooLong => SequenceTooLong { .. } => "HAKIMI_SEQUENCE_TOO_LONG",
        /// The builder was given a zero vertex limit.
        InvalidMaxVertices => InvalidMaxVertices { .. } => "HAKIMI_INVALID_MAX_VERTICES",
    }
}

impl HakimiError {
    /// Retrieve the rejection reason when the error is [`Self::NotGraphicSequence`].
    #[must_use]
    pub const fn not_graphic_reason(&self) -> Option<NotGraphicReason> {
        match self {
            Self::NotGraphicSequence { reason } => Some(*reason),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, HakimiError>;
