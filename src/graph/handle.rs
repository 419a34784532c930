//! Opaque vertex and edge handles.
//!
//! Handles are minted from process-wide counters, so an identity is never
//! handed out twice. Payloads live in the owning graph's value maps, keyed
//! by handle, which keeps structural identity separate from attached data.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_VERTEX: AtomicU64 = AtomicU64::new(1);
static NEXT_EDGE: AtomicU64 = AtomicU64::new(1);

/// Identity of a vertex.
///
/// Two vertices are equal only if they are the same handle; any value
/// attached to a vertex plays no part in equality.
///
/// # Example
///
/// ```rust
/// use acyclic::graph::Vertex;
///
/// let a = Vertex::new();
/// let b = Vertex::new();
/// assert_ne!(a, b);
/// assert_eq!(a, a);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex(u64);

impl Vertex {
    /// Mints a fresh vertex handle.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(NEXT_VERTEX.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw handle number.
    pub fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Identity of a directed edge together with its endpoints.
///
/// The endpoints are fixed when the edge is minted. Parallel edges between
/// the same pair of vertices are distinct edges.
///
/// # Example
///
/// ```rust
/// use acyclic::graph::{Edge, Vertex};
///
/// let a = Vertex::new();
/// let b = Vertex::new();
/// let e = Edge::new(a, b);
///
/// assert_eq!(e.source(), a);
/// assert_eq!(e.target(), b);
/// assert_ne!(e, Edge::new(a, b));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    id: u64,
    source: Vertex,
    target: Vertex,
}

impl Edge {
    /// Mints a fresh edge from `source` to `target`.
    pub fn new(source: Vertex, target: Vertex) -> Self {
        Self {
            id: NEXT_EDGE.fetch_add(1, Ordering::Relaxed),
            source,
            target,
        }
    }

    /// Returns the raw handle number.
    pub fn id(self) -> u64 {
        self.id
    }

    /// The vertex this edge leaves.
    pub fn source(self) -> Vertex {
        self.source
    }

    /// The vertex this edge enters.
    pub fn target(self) -> Vertex {
        self.target
    }

    /// Returns true if the edge starts and ends at the same vertex.
    pub fn is_self_loop(self) -> bool {
        self.source == self.target
    }

    /// Renders the edge with its endpoints, e.g. `e4: v1 -> v2`.
    pub fn describe(self) -> String {
        format!("{}: {} -> {}", self, self.source, self.target)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.id)
    }
}
