//! Depth-first traversal: cycle detection and topological ordering.
//!
//! Every operation is driven by one iterative three-colour walk that keeps
//! an explicit stack of `(vertex, successors)` frames, so depth is bounded
//! by heap memory rather than the thread stack. The walk is generic over
//! petgraph's visit traits and works on [`BaseGraph`](super::BaseGraph) as
//! well as on any petgraph graph. Start vertices are taken in
//! `node_identifiers` order and neighbours in `neighbors` order, which
//! makes every result deterministic for a fixed graph representation.

use petgraph::visit::{Control, IntoNeighbors, IntoNodeIdentifiers, VisitMap, Visitable};
use std::fmt;
use tracing::trace;

use super::handle::Vertex;

/// Stateless depth-first traversal engine.
///
/// # Example
///
/// ```rust
/// use acyclic::graph::{BaseGraph, DepthFirstSearch, Edge, Vertex};
///
/// let a = Vertex::new();
/// let b = Vertex::new();
/// let c = Vertex::new();
/// let graph: BaseGraph<(), ()> =
///     BaseGraph::from_edges(vec![Edge::new(a, b), Edge::new(b, c)]);
///
/// let dfs = DepthFirstSearch;
/// assert!(!dfs.is_cyclic(&graph));
/// assert_eq!(dfs.topological_order(&graph), vec![a, b, c]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstSearch;

impl DepthFirstSearch {
    /// Checks if the graph contains a cycle.
    ///
    /// A cycle exists exactly when the traversal meets a back edge, i.e. an
    /// edge into a vertex that is discovered but not yet finished.
    /// Self-loops are back edges. Stops at the first one found.
    pub fn is_cyclic<G>(&self, graph: G) -> bool
    where
        G: IntoNeighbors + IntoNodeIdentifiers + Visitable,
    {
        traverse(graph, graph.node_identifiers(), |step| match step {
            Step::BackEdge(_) => Control::Break(()),
            _ => Control::Continue,
        })
        .is_some()
    }

    /// Returns the vertices on the first cycle the traversal meets.
    ///
    /// The cycle is listed in path order; its last vertex has an edge back
    /// to the first. Returns `None` for an acyclic graph.
    pub fn find_cycle<G>(&self, graph: G) -> Option<Cycle<G::NodeId>>
    where
        G: IntoNeighbors + IntoNodeIdentifiers + Visitable,
    {
        let mut path = Vec::new();
        let closing = traverse(graph, graph.node_identifiers(), |step| {
            match step {
                Step::Discover(vertex) => path.push(vertex),
                Step::Finish(_) => {
                    path.pop();
                }
                Step::BackEdge(target) => return Control::Break(target),
            }
            Control::Continue
        })?;

        let start = path.iter().position(|&vertex| vertex == closing)?;
        Some(Cycle::new(path.split_off(start)))
    }

    /// Returns a path from `from` to `to` following edge direction.
    ///
    /// The path starts with `from` and ends with `to`; when they are the
    /// same vertex the path is that single vertex.
    pub fn find_path<G>(&self, graph: G, from: G::NodeId, to: G::NodeId) -> Option<Vec<G::NodeId>>
    where
        G: IntoNeighbors + Visitable,
    {
        let mut path = Vec::new();
        traverse(graph, Some(from), |step| {
            match step {
                Step::Discover(vertex) => {
                    path.push(vertex);
                    if vertex == to {
                        return Control::Break(());
                    }
                }
                Step::Finish(_) => {
                    path.pop();
                }
                Step::BackEdge(_) => {}
            }
            Control::Continue
        })
        .map(|()| path)
    }

    /// Returns the vertices in topological order.
    ///
    /// Vertices are collected as they finish (all descendants explored) and
    /// the finish order is reversed, so every edge `(u, v)` has `u` before
    /// `v`. The graph must be acyclic; on a cyclic graph the result is
    /// still a permutation of the vertices but carries no ordering
    /// guarantee.
    pub fn topological_order<G>(&self, graph: G) -> Vec<G::NodeId>
    where
        G: IntoNeighbors + IntoNodeIdentifiers + Visitable,
    {
        let mut finished = Vec::new();
        traverse(graph, graph.node_identifiers(), |step| {
            if let Step::Finish(vertex) = step {
                finished.push(vertex);
            }
            Control::<()>::Continue
        });
        finished.reverse();
        trace!(vertices = finished.len(), "computed topological order");
        finished
    }
}

/// Events reported by [`traverse`].
#[derive(Debug, Clone, Copy)]
enum Step<N> {
    /// First visit of a vertex (it turns grey).
    Discover(N),
    /// Edge into a grey vertex, i.e. one still on the stack; carries that
    /// vertex.
    BackEdge(N),
    /// All successors of a vertex are explored (it turns black).
    Finish(N),
}

/// Walks the graph depth-first from each start vertex in turn.
///
/// Edges into finished vertices are skipped silently. Returns the value of
/// the first `Control::Break`; `Prune` is treated like `Continue`.
fn traverse<G, I, B, F>(graph: G, starts: I, mut visit: F) -> Option<B>
where
    G: IntoNeighbors + Visitable,
    I: IntoIterator<Item = G::NodeId>,
    F: FnMut(Step<G::NodeId>) -> Control<B>,
{
    let mut discovered = graph.visit_map();
    let mut finished = graph.visit_map();
    let mut stack: Vec<(G::NodeId, G::Neighbors)> = Vec::new();

    for start in starts {
        if !discovered.visit(start) {
            continue;
        }
        if let Control::Break(value) = visit(Step::Discover(start)) {
            return Some(value);
        }
        stack.push((start, graph.neighbors(start)));

        while let Some((vertex, successors)) = stack.last_mut() {
            let vertex = *vertex;
            match successors.next() {
                Some(next) if discovered.visit(next) => {
                    if let Control::Break(value) = visit(Step::Discover(next)) {
                        return Some(value);
                    }
                    stack.push((next, graph.neighbors(next)));
                }
                Some(next) => {
                    if !finished.is_visited(&next) {
                        if let Control::Break(value) = visit(Step::BackEdge(next)) {
                            return Some(value);
                        }
                    }
                }
                None => {
                    stack.pop();
                    finished.visit(vertex);
                    if let Control::Break(value) = visit(Step::Finish(vertex)) {
                        return Some(value);
                    }
                }
            }
        }
    }
    None
}

/// A cycle found by [`DepthFirstSearch::find_cycle`].
///
/// The last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle<N = Vertex> {
    /// The vertices on the cycle, in path order
    pub vertices: Vec<N>,
}

impl<N> Cycle<N> {
    /// Wraps vertices given in path order.
    pub fn new(vertices: Vec<N>) -> Self {
        Self { vertices }
    }

    /// Returns the number of vertices on the cycle.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the cycle is empty (should not happen in practice).
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns true if the vertex lies on the cycle.
    pub fn contains(&self, vertex: &N) -> bool
    where
        N: PartialEq,
    {
        self.vertices.contains(vertex)
    }

    /// Maps every vertex, e.g. to render names instead of handles.
    pub fn map<M>(self, f: impl FnMut(N) -> M) -> Cycle<M> {
        Cycle::new(self.vertices.into_iter().map(f).collect())
    }
}

/// Formats as `a -> b -> c -> a`.
impl<N: fmt::Display> fmt::Display for Cycle<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(first) = self.vertices.first() else {
            return Ok(());
        };
        for vertex in &self.vertices {
            write!(f, "{vertex} -> ")?;
        }
        write!(f, "{first}")
    }
}
