//! Command definitions and execution for the hakimi CLI.

use clap::{Args, Parser, Subcommand, ValueEnum};
use hakimi_core::{
    Connectivity, Cutset, DEFAULT_MAX_VERTICES, DegreeSequence, EulerWalk, GraphQueries,
    HakimiError, Session, SessionBuilder, ShortestPaths, SpanningTree, VertexId, WeightedGraph,
};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "hakimi",
    about = "Realize degree sequences as simple graphs and query them."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Realize a degree sequence and optionally run graph queries on it.
    Realize(RealizeCommand),
}

/// Options accepted by the `realize` command.
#[derive(Debug, Args, Clone)]
pub struct RealizeCommand {
    /// Comma-separated vertex degrees, for example `3,3,2,2,1,1`.
    #[arg(allow_hyphen_values = true)]
    pub sequence: String,

    /// Seed for the edge-weight generator; omitted means OS entropy.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Longest sequence accepted.
    #[arg(long = "max-vertices", default_value_t = DEFAULT_MAX_VERTICES)]
    pub max_vertices: usize,

    /// Start vertex for shortest-path queries.
    #[arg(long, default_value_t = 0)]
    pub start: VertexId,

    /// Queries to run, in order. May be repeated.
    #[arg(long = "query", value_enum)]
    pub queries: Vec<QueryKind>,
}

/// Graph queries selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QueryKind {
    /// Euler circuit or path.
    Euler,
    /// Shortest paths from `--start`.
    Paths,
    /// Minimum spanning tree.
    Mst,
    /// Edge and vertex connectivity.
    Connectivity,
    /// Fundamental cutsets of the spanning tree.
    Cutsets,
    /// Articulation points of the spanning tree.
    Articulation,
    /// Every query above, in the order listed.
    All,
}

impl QueryKind {
    /// Resolves the requested kinds into concrete queries, expanding
    /// [`QueryKind::All`] in place and keeping the order given.
    ///
    /// # Examples
    /// ```
    /// use hakimi_cli::cli::{Query, QueryKind};
    ///
    /// let queries = QueryKind::expand(&[QueryKind::Mst, QueryKind::All]);
    /// assert_eq!(queries.len(), 7);
    /// assert_eq!(queries[0], Query::Mst);
    /// assert_eq!(queries[1], Query::Euler);
    /// ```
    #[must_use]
    pub fn expand(kinds: &[Self]) -> Vec<Query> {
        kinds
            .iter()
            .flat_map(|kind| match kind {
                Self::Euler => vec![Query::Euler],
                Self::Paths => vec![Query::Paths],
                Self::Mst => vec![Query::Mst],
                Self::Connectivity => vec![Query::Connectivity],
                Self::Cutsets => vec![Query::Cutsets],
                Self::Articulation => vec![Query::Articulation],
                Self::All => Query::EVERY.to_vec(),
            })
            .collect()
    }
}

/// A single query the command runs against the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// Euler circuit or path.
    Euler,
    /// Shortest paths from the start vertex.
    Paths,
    /// Minimum spanning tree.
    Mst,
    /// Edge and vertex connectivity.
    Connectivity,
    /// Fundamental cutsets of the spanning tree.
    Cutsets,
    /// Articulation points of the spanning tree.
    Articulation,
}

impl Query {
    const EVERY: [Self; 6] = [
        Self::Euler,
        Self::Paths,
        Self::Mst,
        Self::Connectivity,
        Self::Cutsets,
        Self::Articulation,
    ];

    const fn label(self) -> &'static str {
        match self {
            Self::Euler => "euler",
            Self::Paths => "paths",
            Self::Mst => "mst",
            Self::Connectivity => "connectivity",
            Self::Cutsets => "cutsets",
            Self::Articulation => "articulation",
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The core library rejected the input or a query.
    #[error(transparent)]
    Core(#[from] HakimiError),
}

/// Result of one requested query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Euler walk, or `None` when the graph has neither circuit nor path.
    Euler(Option<EulerWalk>),
    /// Shortest paths from the configured start vertex.
    Paths(ShortestPaths),
    /// Minimum spanning tree or forest.
    Mst(SpanningTree),
    /// Connectivity numbers.
    Connectivity(Connectivity),
    /// Fundamental cutsets of the spanning tree.
    Cutsets(Vec<Cutset>),
    /// Articulation points of the spanning tree.
    Articulation(Vec<VertexId>),
}

/// Everything the `realize` command produced.
#[derive(Debug, Clone)]
pub struct Report {
    /// The sequence as parsed.
    pub sequence: DegreeSequence,
    /// The realized, weighted graph.
    pub graph: WeightedGraph,
    /// Query results in the order they were requested.
    pub outcomes: Vec<QueryOutcome>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the sequence is malformed or not graphic, or a
/// query rejects its input.
///
/// # Examples
/// ```
/// use hakimi_cli::cli::{Cli, Command, QueryKind, RealizeCommand, run_cli};
///
/// let cli = Cli {
///     command: Command::Realize(RealizeCommand {
///         sequence: "2,2,2".into(),
///         seed: Some(1),
///         max_vertices: 16,
///         start: 0,
///         queries: vec![QueryKind::Connectivity],
///     }),
/// };
/// let report = run_cli(cli)?;
/// assert_eq!(report.graph.graph().edge_count(), 3);
/// assert_eq!(report.outcomes.len(), 1);
/// # Ok::<(), hakimi_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<Report, CliError> {
    match cli.command {
        Command::Realize(command) => {
            Span::current().record("command", field::display("realize"));
            let mut rng = command
                .seed
                .map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);
            run_realize(&command, &mut rng)
        }
    }
}

#[instrument(
    name = "cli.realize",
    err,
    skip(command, rng),
    fields(
        seeded = command.seed.is_some(),
        max_vertices = command.max_vertices,
        queries = command.queries.len(),
    ),
)]
pub(super) fn run_realize<R: Rng + ?Sized>(
    command: &RealizeCommand,
    rng: &mut R,
) -> Result<Report, CliError> {
    let sequence: DegreeSequence = command.sequence.parse()?;
    let mut session = SessionBuilder::new()
        .with_max_vertices(command.max_vertices)
        .build()?;
    let graph = session.realize(&sequence, rng)?.clone();

    let outcomes = QueryKind::expand(&command.queries)
        .into_iter()
        .map(|query| run_query(&mut session, query, command.start))
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        vertices = graph.graph().vertex_count(),
        edges = graph.graph().edge_count(),
        queries = outcomes.len(),
        "command completed"
    );
    Ok(Report {
        sequence,
        graph,
        outcomes,
    })
}

#[instrument(name = "cli.query", err, skip(session, query), fields(query = query.label()))]
pub(super) fn run_query<Q: GraphQueries>(
    session: &mut Session<Q>,
    query: Query,
    start: VertexId,
) -> Result<QueryOutcome, CliError> {
    let outcome = match query {
        Query::Euler => QueryOutcome::Euler(session.euler()?),
        Query::Paths => QueryOutcome::Paths(session.shortest_paths(start)?),
        Query::Mst => QueryOutcome::Mst(session.compute_spanning_tree()?.clone()),
        Query::Connectivity => QueryOutcome::Connectivity(session.connectivity()?),
        Query::Cutsets => {
            session.compute_spanning_tree()?;
            QueryOutcome::Cutsets(session.fundamental_cutsets()?)
        }
        Query::Articulation => {
            session.compute_spanning_tree()?;
            QueryOutcome::Articulation(session.articulation_points()?)
        }
    };
    Ok(outcome)
}
