//! Plain-text rendering of a [`Report`].

use std::io::{self, Write};

use hakimi_core::{Cutset, Edge, EulerWalk, ShortestPaths, SpanningTree, VertexId, WeightedGraph};

use super::commands::{QueryOutcome, Report};

/// Renders `report` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// use hakimi_cli::cli::{Cli, Command, RealizeCommand, render_report, run_cli};
///
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let report = run_cli(Cli {
///     command: Command::Realize(RealizeCommand {
///         sequence: "1,1".into(),
///         seed: Some(3),
///         max_vertices: 8,
///         start: 0,
///         queries: Vec::new(),
///     }),
/// })?;
/// let mut buffer = Vec::new();
/// render_report(&report, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.starts_with("sequence: 1,1\nvertices: 2\nedges: 1\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_report(report: &Report, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "sequence: {}", report.sequence)?;
    render_graph(&report.graph, &mut writer)?;
    for outcome in &report.outcomes {
        match outcome {
            QueryOutcome::Euler(walk) => render_euler(walk.as_ref(), &mut writer)?,
            QueryOutcome::Paths(paths) => render_paths(paths, &report.graph, &mut writer)?,
            QueryOutcome::Mst(tree) => render_tree(tree, &mut writer)?,
            QueryOutcome::Connectivity(connectivity) => writeln!(
                writer,
                "connectivity: edge {}, vertex {}",
                connectivity.edge, connectivity.vertex
            )?,
            QueryOutcome::Cutsets(cutsets) => render_cutsets(cutsets, &mut writer)?,
            QueryOutcome::Articulation(points) => {
                writeln!(writer, "articulation points: {}", join_or_none(points))?;
            }
        }
    }
    Ok(())
}

fn render_graph(graph: &WeightedGraph, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "vertices: {}", graph.graph().vertex_count())?;
    writeln!(writer, "edges: {}", graph.graph().edge_count())?;
    for (edge, weight) in graph.weighted_edges() {
        writeln!(writer, "  {} [w={weight}]", edge_label(edge))?;
    }
    Ok(())
}

fn render_euler(walk: Option<&EulerWalk>, writer: &mut impl Write) -> io::Result<()> {
    let Some(walk) = walk else {
        return writeln!(writer, "euler: none");
    };
    let kind = if walk.is_circuit() { "circuit" } else { "path" };
    let mut stops: Vec<VertexId> = walk.edges.first().map(|&(from, _)| from).into_iter().collect();
    stops.extend(walk.edges.iter().map(|&(_, to)| to));
    writeln!(writer, "euler: {kind} {}", join_path(&stops))
}

fn render_paths(
    paths: &ShortestPaths,
    graph: &WeightedGraph,
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(writer, "shortest paths from {}:", paths.source)?;
    for vertex in graph.graph().vertices() {
        match (paths.distance(vertex), paths.path(vertex)) {
            (Some(distance), Some(path)) => {
                writeln!(writer, "  {vertex}: {distance} via {}", join_path(path))?;
            }
            _ => writeln!(writer, "  {vertex}: unreachable")?,
        }
    }
    Ok(())
}

fn render_tree(tree: &SpanningTree, writer: &mut impl Write) -> io::Result<()> {
    let label = if tree.is_tree() { "tree" } else { "forest" };
    writeln!(
        writer,
        "minimum spanning {label}: weight {}, components {}",
        tree.total_weight(),
        tree.component_count()
    )?;
    for (edge, weight) in tree.weighted_edges() {
        writeln!(writer, "  {} [w={weight}]", edge_label(edge))?;
    }
    Ok(())
}

fn render_cutsets(cutsets: &[Cutset], writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "fundamental cutsets:")?;
    for cutset in cutsets {
        let members: Vec<String> = cutset.edges.iter().copied().map(edge_label).collect();
        writeln!(
            writer,
            "  {}: {{{}}}",
            edge_label(cutset.tree_edge),
            members.join(", ")
        )?;
    }
    Ok(())
}

fn edge_label(edge: Edge) -> String {
    format!("{} -- {}", edge.source(), edge.target())
}

fn join_path(vertices: &[VertexId]) -> String {
    vertices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn join_or_none(vertices: &[VertexId]) -> String {
    if vertices.is_empty() {
        return "none".to_owned();
    }
    vertices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
