//! Builder utilities for configuring a [`Session`].
//!
//! Exposes the vertex limit and the query backend, validated before a session
//! is constructed.

use std::num::NonZeroUsize;

use crate::{
    Result,
    error::HakimiError,
    query::{GraphQueries, NativeQueries},
    session::Session,
};

/// Largest sequence a session accepts unless configured otherwise.
pub const DEFAULT_MAX_VERTICES: usize = 1024;

/// Configures and constructs [`Session`] instances.
///
/// # Examples
/// ```
/// use hakimi_core::{SessionBuilder, SessionState};
///
/// let session = SessionBuilder::new()
///     .with_max_vertices(16)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(session.max_vertices().get(), 16);
/// assert_eq!(session.state(), SessionState::Empty);
/// ```
#[derive(Debug, Clone)]
pub struct SessionBuilder<Q = NativeQueries> {
    max_vertices: usize,
    queries: Q,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_VERTICES,
            queries: NativeQueries,
        }
    }
}

impl SessionBuilder {
    /// Creates a builder with the default vertex limit and the native query
    /// backend.
    ///
    /// # Examples
    /// ```
    /// use hakimi_core::{DEFAULT_MAX_VERTICES, SessionBuilder};
    ///
    /// assert_eq!(SessionBuilder::new().max_vertices(), DEFAULT_MAX_VERTICES);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<Q> SessionBuilder<Q> {
    /// Overrides the largest sequence length the session will realize.
    #[must_use]
    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    /// Returns the configured vertex limit.
    #[must_use]
    #[rustfmt::skip]
    pub fn max_vertices(&self) -> usize { self.max_vertices }

    /// Swaps the query backend.
    ///
    /// # Examples
    /// ```
    /// use hakimi_core::{NativeQueries, SessionBuilder};
    ///
    /// let builder = SessionBuilder::new().with_queries(NativeQueries);
    /// assert!(builder.build().is_ok());
    /// ```
    #[must_use]
    pub fn with_queries<R: GraphQueries>(self, queries: R) -> SessionBuilder<R> {
        SessionBuilder {
            max_vertices: self.max_vertices,
            queries,
        }
    }
}

impl<Q: GraphQueries> SessionBuilder<Q> {
    /// Validates the configuration and constructs a [`Session`].
    ///
    /// # Errors
    /// Returns [`HakimiError::InvalidMaxVertices`] when the vertex limit is
    /// zero.
    ///
    /// # Examples
    /// ```
    /// use hakimi_core::{HakimiErrorCode, SessionBuilder};
    ///
    /// let err = SessionBuilder::new().with_max_vertices(0).build().unwrap_err();
    /// assert_eq!(err.code(), HakimiErrorCode::InvalidMaxVertices);
    /// ```
    pub fn build(self) -> Result<Session<Q>> {
        let max_vertices =
            NonZeroUsize::new(self.max_vertices).ok_or(HakimiError::InvalidMaxVertices {
                got: self.max_vertices,
            })?;
        Ok(Session::new(self.queries, max_vertices))
    }
}
