//! Command-line front end.
//!
//! The binary reads a graph from its arguments: each token is either an
//! edge `a->b` between named vertices or a lone vertex name `a`. Names map
//! to vertices in first-seen order and are stored as vertex payloads.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indexmap::IndexMap;
use std::io::Write;
use tracing::info;

use crate::graph::{AcyclicGraph, BaseGraph, Edge, Vertex};

#[derive(Parser)]
#[command(name = "acyclic")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version)]
#[command(about = "Check directed graphs for cycles and print a topological order", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v warn, -vv info, -vvv debug, -vvvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Default log filter for the `-v` count.
    ///
    /// Warnings are opt-in; a rejected graph is reported once, through the
    /// `error:` line.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "error",
            1 => "warn",
            2 => "info",
            3 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify that the graph is acyclic
    Check {
        /// Edges (`a->b`) and isolated vertices (`a`)
        #[arg(required = true)]
        tokens: Vec<Token>,
    },
    /// Print vertices in topological order, one per line
    Order {
        /// Edges (`a->b`) and isolated vertices (`a`)
        #[arg(required = true)]
        tokens: Vec<Token>,
    },
    /// Print a diagnostic listing of the graph
    Dump {
        /// Edges (`a->b`) and isolated vertices (`a`)
        #[arg(required = true)]
        tokens: Vec<Token>,
    },
    /// Show version information
    Version,
}

/// One command-line graph token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A vertex with no edges of its own
    Vertex(String),
    /// An edge between two named vertices
    Edge(String, String),
}

impl std::str::FromStr for Token {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = |part: &str| -> Result<String, String> {
            let part = part.trim();
            if part.is_empty() || part.contains("->") || part.contains(char::is_whitespace) {
                Err(format!(
                    "Invalid token: '{}'. Expected 'name' or 'source->target'",
                    s
                ))
            } else {
                Ok(part.to_string())
            }
        };

        match s.split_once("->") {
            Some((source, target)) => Ok(Token::Edge(name(source)?, name(target)?)),
            None => Ok(Token::Vertex(name(s)?)),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Vertex(name) => write!(f, "{}", name),
            Token::Edge(source, target) => write!(f, "{}->{}", source, target),
        }
    }
}

/// Builds an acyclic graph from tokens, with vertex names as payloads.
///
/// # Errors
///
/// Fails with the offending cycle, rendered by name, if the tokens
/// describe a cyclic graph.
pub fn build(tokens: &[Token]) -> Result<AcyclicGraph<String, ()>> {
    let mut names: IndexMap<String, Vertex> = IndexMap::new();
    let mut base = BaseGraph::new();

    for token in tokens {
        match token {
            Token::Vertex(name) => {
                intern(&mut base, &mut names, name);
            }
            Token::Edge(source, target) => {
                let source = intern(&mut base, &mut names, source);
                let target = intern(&mut base, &mut names, target);
                base.edges_insert(Edge::new(source, target));
            }
        }
    }

    AcyclicGraph::from_base(base).map_err(|err| {
        let named = err.cycle().clone().map(|vertex| label(&names, vertex));
        anyhow::Error::new(err).context(format!("input is cyclic: {named}"))
    })
}

/// Runs `check`: reports the graph size when the input is acyclic.
pub fn check<W: Write>(tokens: &[Token], writer: &mut W) -> Result<()> {
    let dag = build(tokens)?;
    info!(vertices = dag.vertex_count(), edges = dag.edge_count(), "input accepted");
    writeln!(
        writer,
        "acyclic: {} vertices, {} edges",
        dag.vertex_count(),
        dag.edge_count()
    )
    .context("failed to write report")?;
    Ok(())
}

/// Runs `order`: prints vertex names in topological order.
pub fn order<W: Write>(tokens: &[Token], writer: &mut W) -> Result<()> {
    let dag = build(tokens)?;
    for vertex in dag.topological_order() {
        let name = dag
            .vertex_value(vertex)
            .cloned()
            .unwrap_or_else(|| vertex.to_string());
        writeln!(writer, "{}", name).context("failed to write order")?;
    }
    Ok(())
}

/// Runs `dump`: prints the diagnostic listing.
pub fn dump<W: Write>(tokens: &[Token], writer: &mut W) -> Result<()> {
    let dag = build(tokens)?;
    writeln!(writer, "{}", dag).context("failed to write listing")?;
    Ok(())
}

fn intern(
    base: &mut BaseGraph<String, ()>,
    names: &mut IndexMap<String, Vertex>,
    name: &str,
) -> Vertex {
    if let Some(&vertex) = names.get(name) {
        return vertex;
    }

    let vertex = Vertex::new();
    base.vertices_insert(vertex);
    base.set_vertex_value(vertex, name.to_string());
    names.insert(name.to_string(), vertex);
    vertex
}

fn label(names: &IndexMap<String, Vertex>, vertex: Vertex) -> String {
    names
        .iter()
        .find(|&(_, &candidate)| candidate == vertex)
        .map(|(name, _)| name.clone())
        .unwrap_or_else(|| vertex.to_string())
}
