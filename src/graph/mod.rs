//! Graph module for acyclic graph construction and ordering.
//!
//! This module provides [`BaseGraph`], an insertion-ordered adjacency-list
//! multigraph, [`DepthFirstSearch`] for cycle detection and topological
//! ordering, and [`AcyclicGraph`], which only adopts state that passed
//! cycle detection.
//!
//! # Example
//!
//! ```rust
//! use acyclic::graph::{AcyclicGraph, Edge, Vertex};
//!
//! let build = Vertex::new();
//! let test = Vertex::new();
//! let deploy = Vertex::new();
//!
//! let mut dag: AcyclicGraph<&str, ()> =
//!     AcyclicGraph::from_edges(vec![Edge::new(build, test), Edge::new(test, deploy)]).unwrap();
//! dag.set_vertex_value(build, "build");
//!
//! assert_eq!(dag.topological_order(), vec![build, test, deploy]);
//! assert!(dag.add_edge(deploy, build).is_err());
//! ```

mod acyclic_graph;
mod base_graph;
mod dfs;
mod error;
mod handle;

pub use acyclic_graph::{AcyclicGraph, Validation};
pub use base_graph::{BaseGraph, Successors};
pub use dfs::{Cycle, DepthFirstSearch};
pub use error::{GraphError, GraphResult};
pub use handle::{Edge, Vertex};
