//! Directed acyclic graph with cycle-gated construction.
//!
//! [`AcyclicGraph`] owns a [`BaseGraph`] and only adopts state that has
//! passed cycle detection. Vertex insertion and every kind of erasure are
//! forwarded without a check, since neither can create a cycle. Edges go
//! through one of three paths:
//!
//! - [`AcyclicGraph::add_edge`] / [`AcyclicGraph::insert_edge`] check each
//!   edge against the current state before committing it.
//! - [`AcyclicGraph::extend_edges`] commits a batch after a single check.
//! - [`AcyclicGraph::edges_from_insert`] / [`AcyclicGraph::edges_to_insert`]
//!   write straight into one adjacency index and check nothing. Callers
//!   using them are responsible for keeping the graph acyclic.

use indexmap::IndexSet;
use std::fmt;
use tracing::{debug, warn};

use super::base_graph::BaseGraph;
use super::dfs::{Cycle, DepthFirstSearch};
use super::error::{GraphError, GraphResult};
use super::handle::{Edge, Vertex};

/// Whether [`AcyclicGraph::replace_state`] runs cycle detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Run cycle detection and reject cyclic candidates
    #[default]
    Checked,
    /// Skip detection; the caller guarantees the candidate is acyclic
    Trusted,
}

/// A directed graph that is kept free of cycles.
///
/// Construction from edges validates the input and returns
/// [`GraphError::CyclicInput`] when it contains a cycle, after logging a
/// warning. Use `unwrap_or_default()` to fall back to an empty graph.
///
/// # Example
///
/// ```rust
/// use acyclic::graph::{AcyclicGraph, Edge, Vertex};
///
/// let a = Vertex::new();
/// let b = Vertex::new();
/// let c = Vertex::new();
///
/// let dag: AcyclicGraph<(), ()> =
///     AcyclicGraph::from_edges(vec![Edge::new(a, b), Edge::new(b, c)]).unwrap();
/// assert_eq!(dag.topological_order(), vec![a, b, c]);
///
/// let cyclic: AcyclicGraph<(), ()> =
///     AcyclicGraph::from_edges(vec![Edge::new(a, b), Edge::new(b, a)]).unwrap_or_default();
/// assert!(cyclic.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct AcyclicGraph<V, E> {
    base: BaseGraph<V, E>,
}

impl<V, E> Default for AcyclicGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> AcyclicGraph<V, E> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            base: BaseGraph::new(),
        }
    }

    /// Creates a graph holding the given vertices and no edges.
    ///
    /// Without edges there is nothing to validate.
    pub fn from_vertices<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = Vertex>,
    {
        Self {
            base: BaseGraph::from_vertices(vertices),
        }
    }

    /// Creates a graph from edges, rejecting cyclic input.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CyclicInput`] if the edges form a cycle.
    pub fn from_edges<I>(edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = Edge>,
    {
        Self::from_base(BaseGraph::from_edges(edges))
    }

    /// Creates a graph from vertices and edges, rejecting cyclic input.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CyclicInput`] if the edges form a cycle.
    pub fn from_parts<VI, EI>(vertices: VI, edges: EI) -> GraphResult<Self>
    where
        VI: IntoIterator<Item = Vertex>,
        EI: IntoIterator<Item = Edge>,
    {
        Self::from_base(BaseGraph::from_parts(vertices, edges))
    }

    /// Adopts an existing graph if it is acyclic.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CyclicInput`] if `base` contains a cycle.
    pub fn from_base(base: BaseGraph<V, E>) -> GraphResult<Self> {
        if let Some(cycle) = DepthFirstSearch.find_cycle(&base) {
            warn!(%cycle, "DAG not constructed due to cyclic input");
            return Err(GraphError::CyclicInput(cycle));
        }

        let mut graph = Self::new();
        graph.replace_state(base, Validation::Trusted)?;
        Ok(graph)
    }

    /// Replaces the live state with `candidate`.
    ///
    /// With [`Validation::Checked`] a cyclic candidate is rejected and the
    /// current state is kept. [`Validation::Trusted`] skips detection and
    /// must only be used for candidates already known to be acyclic.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CyclicInput`] if a checked candidate contains a
    /// cycle.
    pub fn replace_state(
        &mut self,
        candidate: BaseGraph<V, E>,
        validation: Validation,
    ) -> GraphResult<()> {
        if validation == Validation::Checked {
            if let Some(cycle) = DepthFirstSearch.find_cycle(&candidate) {
                warn!(%cycle, "DAG not updated due to cyclic input");
                return Err(GraphError::CyclicInput(cycle));
            }
        }

        debug!(
            vertices = candidate.vertex_count(),
            edges = candidate.edge_count(),
            ?validation,
            "adopted graph state"
        );
        self.base = candidate;
        Ok(())
    }

    /// Mints an edge `source -> target` and inserts it if it keeps the
    /// graph acyclic. Missing endpoints are added.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CyclicInput`] with the cycle the edge would
    /// close; the graph is left unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use acyclic::graph::{AcyclicGraph, Vertex};
    ///
    /// let a = Vertex::new();
    /// let b = Vertex::new();
    /// let mut dag: AcyclicGraph<(), ()> = AcyclicGraph::new();
    ///
    /// assert!(dag.add_edge(a, b).is_ok());
    /// assert!(dag.add_edge(b, a).is_err());
    /// assert_eq!(dag.edge_count(), 1);
    /// ```
    pub fn add_edge(&mut self, source: Vertex, target: Vertex) -> GraphResult<Edge> {
        let edge = Edge::new(source, target);
        self.insert_edge(edge)?;
        Ok(edge)
    }

    /// Inserts `edge` into both indices if it keeps the graph acyclic.
    ///
    /// The edge closes a cycle exactly when its target already reaches its
    /// source, so only that reachability is checked.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CyclicInput`] with the cycle the edge would
    /// close; the graph is left unchanged.
    pub fn insert_edge(&mut self, edge: Edge) -> GraphResult<()> {
        if let Some(path) = DepthFirstSearch.find_path(&self.base, edge.target(), edge.source()) {
            let cycle = Cycle::new(path);
            warn!(edge = %edge.describe(), %cycle, "edge rejected, it would close a cycle");
            return Err(GraphError::CyclicInput(cycle));
        }

        self.base.edges_insert(edge);
        Ok(())
    }

    /// Inserts a batch of edges, validating once for the whole batch.
    ///
    /// Either every edge is committed or none is.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CyclicInput`] if the batch would introduce a
    /// cycle.
    pub fn extend_edges<I>(&mut self, edges: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = Edge>,
        V: Clone,
        E: Clone,
    {
        let mut candidate = self.base.clone();
        candidate.edges_extend(edges);
        self.replace_state(candidate, Validation::Checked)
    }

    /// Re-runs cycle detection on the live state.
    ///
    /// Always `false` unless the raw index inserts were misused.
    pub fn is_cyclic(&self) -> bool {
        DepthFirstSearch.is_cyclic(&self.base)
    }

    /// Returns the first cycle in the live state, if any.
    pub fn find_cycle(&self) -> Option<Cycle> {
        DepthFirstSearch.find_cycle(&self.base)
    }

    /// Returns the vertices in topological order: for every edge `(u, v)`,
    /// `u` comes before `v`. Repeated calls on an unchanged graph return
    /// the same sequence.
    pub fn topological_order(&self) -> Vec<Vertex> {
        DepthFirstSearch.topological_order(&self.base)
    }

    /// The underlying graph.
    pub fn base(&self) -> &BaseGraph<V, E> {
        &self.base
    }

    /// Consumes the wrapper, returning the underlying graph.
    pub fn into_base(self) -> BaseGraph<V, E> {
        self.base
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.base.vertex_count()
    }

    /// Returns the number of registered edges.
    pub fn edge_count(&self) -> usize {
        self.base.edge_count()
    }

    /// Returns true if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Iterates over the vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.base.vertices()
    }

    /// Iterates over the registered edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.base.edges()
    }

    /// Checks whether the vertex is in the graph.
    pub fn has_vertex(&self, vertex: Vertex) -> bool {
        self.base.vertex_in_graph(vertex)
    }

    /// Checks whether the edge is in either index.
    pub fn has_edge(&self, edge: Edge) -> bool {
        self.base.edge_in_graph(edge)
    }

    /// Returns the payload stored for a vertex.
    pub fn vertex_value(&self, vertex: Vertex) -> Option<&V> {
        self.base.vertex_value(vertex)
    }

    /// Returns the payload stored for an edge.
    pub fn edge_value(&self, edge: Edge) -> Option<&E> {
        self.base.edge_value(edge)
    }

    /// Stores a vertex payload, returning the previous one. Ignored for absent vertices.
    pub fn set_vertex_value(&mut self, vertex: Vertex, value: V) -> Option<V> {
        self.base.set_vertex_value(vertex, value)
    }

    /// Stores an edge payload, returning the previous one. Ignored for absent edges.
    pub fn set_edge_value(&mut self, edge: Edge, value: E) -> Option<E> {
        self.base.set_edge_value(edge, value)
    }

    /// Adds an isolated vertex; returns `false` if it was already present.
    pub fn vertices_insert(&mut self, vertex: Vertex) -> bool {
        self.base.vertices_insert(vertex)
    }

    /// Removes a vertex and its incident edges.
    pub fn vertices_erase(&mut self, vertex: Vertex) -> bool {
        self.base.vertices_erase(vertex)
    }

    /// Files `edge` in the outgoing index **without** cycle detection.
    ///
    /// Prefer [`AcyclicGraph::insert_edge`]. After a raw insert the caller
    /// must ensure the graph is still acyclic.
    pub fn edges_from_insert(&mut self, edge: Edge) -> bool {
        self.base.edges_from_insert(edge)
    }

    /// Files `edge` in the incoming index **without** cycle detection.
    pub fn edges_to_insert(&mut self, edge: Edge) -> bool {
        self.base.edges_to_insert(edge)
    }

    /// Finds the first edge `from -> to` in the outgoing index.
    pub fn edges_from_find(&self, from: Vertex, to: Vertex) -> Option<Edge> {
        self.base.edges_from_find(from, to)
    }

    /// Finds the first edge `from -> to` in the incoming index.
    pub fn edges_to_find(&self, from: Vertex, to: Vertex) -> Option<Edge> {
        self.base.edges_to_find(from, to)
    }

    /// Finds the first edge `from -> to`.
    pub fn edges_find(&self, from: Vertex, to: Vertex) -> Option<Edge> {
        self.base.edges_from_find(from, to)
    }

    /// Returns the targets of the outgoing edges of `vertex`.
    pub fn edges_from_neighbors(&self, vertex: Vertex) -> IndexSet<Vertex> {
        self.base.edges_from_neighbors(vertex)
    }

    /// Returns the sources of the incoming edges of `vertex`.
    pub fn edges_to_neighbors(&self, vertex: Vertex) -> IndexSet<Vertex> {
        self.base.edges_to_neighbors(vertex)
    }

    /// Removes `edge` from the outgoing index only.
    pub fn edges_from_erase(&mut self, edge: Edge) -> bool {
        self.base.edges_from_erase(edge)
    }

    /// Removes `edge` from the incoming index only.
    pub fn edges_to_erase(&mut self, edge: Edge) -> bool {
        self.base.edges_to_erase(edge)
    }

    /// Removes `edge` from both indices.
    pub fn edges_erase(&mut self, edge: Edge) -> bool {
        self.base.edges_erase(edge)
    }

    /// Removes the first edge `from -> to` from both indices.
    pub fn edges_from_to_erase(&mut self, from: Vertex, to: Vertex) -> Option<Edge> {
        self.base.edges_from_to_erase(from, to)
    }
}

impl<V, E> TryFrom<BaseGraph<V, E>> for AcyclicGraph<V, E> {
    type Error = GraphError;

    fn try_from(base: BaseGraph<V, E>) -> GraphResult<Self> {
        Self::from_base(base)
    }
}

impl<V: fmt::Debug, E: fmt::Debug> fmt::Display for AcyclicGraph<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.base.write_listing(f, "Directed Acyclic Graph")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertices<const N: usize>() -> [Vertex; N] {
        std::array::from_fn(|_| Vertex::new())
    }

    fn edges(pairs: &[(Vertex, Vertex)]) -> Vec<Edge> {
        pairs.iter().map(|&(s, t)| Edge::new(s, t)).collect()
    }

    #[test]
    fn test_create_empty_graph() {
        let dag: AcyclicGraph<(), ()> = AcyclicGraph::new();
        assert!(dag.is_empty());
        assert_eq!(dag.edge_count(), 0);
        assert!(!dag.is_cyclic());
        assert!(dag.topological_order().is_empty());
    }

    #[test]
    fn test_from_vertices_is_accepted() {
        let [a, b, c] = vertices();
        let dag: AcyclicGraph<(), ()> = AcyclicGraph::from_vertices(vec![a, b, c]);

        assert_eq!(dag.vertex_count(), 3);
        assert_eq!(dag.edge_count(), 0);
        assert_eq!(dag.topological_order().len(), 3);
    }

    #[test]
    fn test_chain_is_accepted() {
        let [a, b, c] = vertices();
        let dag: AcyclicGraph<(), ()> =
            AcyclicGraph::from_parts(vec![a, b, c], edges(&[(a, b), (b, c)])).unwrap();

        assert_eq!(dag.vertex_count(), 3);
        assert_eq!(dag.edge_count(), 2);
        assert!(!dag.is_cyclic());
        assert_eq!(dag.topological_order(), vec![a, b, c]);
    }

    #[test]
    fn test_triangle_is_rejected() {
        let [a, b, c] = vertices();
        let result: GraphResult<AcyclicGraph<(), ()>> =
            AcyclicGraph::from_parts(vec![a, b, c], edges(&[(a, b), (b, c), (c, a)]));

        let err = result.unwrap_err();
        assert_eq!(err.cycle().vertices, vec![a, b, c]);
        assert!(err.to_string().starts_with("cyclic input rejected: "));
    }

    #[test]
    fn test_rejected_construction_falls_back_to_empty() {
        let [a, b, c] = vertices();
        let dag: AcyclicGraph<(), ()> =
            AcyclicGraph::from_edges(edges(&[(a, b), (b, c), (c, a)])).unwrap_or_default();

        assert_eq!(dag.vertex_count(), 0);
        assert_eq!(dag.edge_count(), 0);
    }

    #[test]
    fn test_self_loop_is_rejected() {
        let [a] = vertices();
        let result: GraphResult<AcyclicGraph<(), ()>> = AcyclicGraph::from_edges(edges(&[(a, a)]));

        let err = result.unwrap_err();
        assert_eq!(err.cycle().vertices, vec![a]);
    }

    #[test]
    fn test_from_base_and_try_from() {
        let [a, b] = vertices();
        let acyclic: BaseGraph<(), ()> = BaseGraph::from_edges(edges(&[(a, b)]));
        let cyclic: BaseGraph<(), ()> = BaseGraph::from_edges(edges(&[(a, b), (b, a)]));

        assert!(AcyclicGraph::from_base(acyclic.clone()).is_ok());
        assert!(AcyclicGraph::try_from(cyclic).is_err());

        let dag = AcyclicGraph::try_from(acyclic).unwrap();
        assert_eq!(dag.edges_find(a, b).map(|e| e.target()), Some(b));
    }

    #[test]
    fn test_raw_insert_gap() {
        let [a, b] = vertices();
        let mut dag: AcyclicGraph<(), ()> = AcyclicGraph::new();
        dag.vertices_insert(a);
        dag.vertices_insert(b);

        dag.edges_from_insert(Edge::new(a, b));
        assert!(!dag.is_cyclic());

        dag.edges_from_insert(Edge::new(b, a));
        assert!(dag.is_cyclic());
        assert_eq!(dag.find_cycle().map(|c| c.len()), Some(2));
    }

    #[test]
    fn test_add_edge_rejects_cycle() {
        let [a, b, c] = vertices();
        let mut dag: AcyclicGraph<(), ()> = AcyclicGraph::new();
        dag.add_edge(a, b).unwrap();
        dag.add_edge(b, c).unwrap();

        let err = dag.add_edge(c, a).unwrap_err();
        assert_eq!(err.cycle().vertices, vec![a, b, c]);
        assert_eq!(dag.edge_count(), 2);
        assert_eq!(dag.edges_find(c, a), None);
        assert!(!dag.is_cyclic());
    }

    #[test]
    fn test_add_edge_rejects_self_loop() {
        let [a] = vertices();
        let mut dag: AcyclicGraph<(), ()> = AcyclicGraph::new();

        assert!(dag.add_edge(a, a).is_err());
        assert!(dag.is_empty());
    }

    #[test]
    fn test_add_edge_adds_endpoints() {
        let [a, b] = vertices();
        let mut dag: AcyclicGraph<(), ()> = AcyclicGraph::new();
        let edge = dag.add_edge(a, b).unwrap();

        assert!(dag.has_vertex(a));
        assert!(dag.has_vertex(b));
        assert!(dag.has_edge(edge));
    }

    #[test]
    fn test_accepted_mutations_stay_acyclic() {
        let v: [Vertex; 6] = vertices();
        let mut dag: AcyclicGraph<(), ()> = AcyclicGraph::from_vertices(v);
        let mut accepted = 0;

        for &source in &v {
            for &target in &v {
                if dag.add_edge(source, target).is_ok() {
                    accepted += 1;
                }
                assert!(!dag.is_cyclic());
            }
        }

        // Only the forward edges of the transitive tournament survive
        assert_eq!(accepted, v.len() * (v.len() - 1) / 2);
        assert_eq!(dag.topological_order(), v.to_vec());
    }

    #[test]
    fn test_deep_chain_is_accepted() {
        let chain: Vec<Vertex> = (0..200_000).map(|_| Vertex::new()).collect();
        let pairs: Vec<_> = chain.windows(2).map(|w| (w[0], w[1])).collect();
        let mut dag: AcyclicGraph<(), ()> = AcyclicGraph::from_edges(edges(&pairs)).unwrap();

        assert_eq!(dag.vertex_count(), chain.len());
        assert_eq!(dag.topological_order(), chain);

        // Closing the chain walks its full length before rejecting
        let err = dag.add_edge(chain[chain.len() - 1], chain[0]).unwrap_err();
        assert_eq!(err.cycle().len(), chain.len());
        assert_eq!(dag.edge_count(), chain.len() - 1);
    }

    #[test]
    fn test_erase_after_raw_insert_leaves_no_dangling_edge() {
        let [a, b] = vertices();
        let mut dag: AcyclicGraph<(), ()> = AcyclicGraph::new();
        let edge = Edge::new(a, b);
        dag.edges_from_insert(edge);

        assert!(dag.vertices_erase(b));
        assert!(!dag.has_vertex(b));
        assert!(!dag.has_edge(edge));
        assert!(dag.edges_from_neighbors(a).is_empty());
        assert_eq!(dag.topological_order(), vec![a]);
    }

    #[test]
    fn test_extend_edges_is_all_or_nothing() {
        let [a, b, c, d] = vertices();
        let mut dag: AcyclicGraph<(), ()> = AcyclicGraph::from_edges(edges(&[(a, b)])).unwrap();

        assert!(dag.extend_edges(edges(&[(b, c), (c, d)])).is_ok());
        assert_eq!(dag.edge_count(), 3);

        assert!(dag.extend_edges(edges(&[(a, d), (d, a)])).is_err());
        assert_eq!(dag.edge_count(), 3);
        assert_eq!(dag.edges_find(a, d), None);
        assert!(!dag.is_cyclic());
    }

    #[test]
    fn test_replace_state() {
        let [a, b, c] = vertices();
        let mut dag: AcyclicGraph<(), ()> = AcyclicGraph::from_edges(edges(&[(a, b)])).unwrap();

        let cyclic = BaseGraph::from_edges(edges(&[(b, c), (c, b)]));
        assert!(dag.replace_state(cyclic, Validation::Checked).is_err());
        assert_eq!(dag.vertices().collect::<Vec<_>>(), vec![a, b]);

        let chain = BaseGraph::from_edges(edges(&[(c, b), (b, a)]));
        dag.replace_state(chain, Validation::Checked).unwrap();
        assert_eq!(dag.topological_order(), vec![c, b, a]);
    }

    #[test]
    fn test_replace_state_trusted_skips_detection() {
        let [a, b] = vertices();
        let mut dag: AcyclicGraph<(), ()> = AcyclicGraph::new();

        let cyclic = BaseGraph::from_edges(edges(&[(a, b), (b, a)]));
        assert!(dag.replace_state(cyclic, Validation::Trusted).is_ok());
        assert!(dag.is_cyclic());
    }

    #[test]
    fn test_erasure_keeps_graph_acyclic() {
        let [a, b, c, d] = vertices();
        let mut dag: AcyclicGraph<(), ()> =
            AcyclicGraph::from_edges(edges(&[(a, b), (b, c), (a, c), (c, d)])).unwrap();

        assert!(dag.vertices_erase(c));
        assert!(!dag.is_cyclic());
        assert_eq!(dag.edge_count(), 1);

        assert_eq!(dag.edges_from_to_erase(a, b).map(|e| e.source()), Some(a));
        assert!(!dag.is_cyclic());
        assert_eq!(dag.edge_count(), 0);
        assert_eq!(dag.vertex_count(), 3);
    }

    #[test]
    fn test_single_index_erase_forwarding() {
        let [a, b] = vertices();
        let mut dag: AcyclicGraph<(), ()> = AcyclicGraph::new();
        let edge = dag.add_edge(a, b).unwrap();

        assert!(dag.edges_to_erase(edge));
        assert_eq!(dag.edges_to_find(a, b), None);
        assert_eq!(dag.edges_from_find(a, b), Some(edge));
        assert!(dag.edges_from_erase(edge));
        assert!(!dag.has_edge(edge));
        assert!(!dag.edges_erase(edge));
    }

    #[test]
    fn test_neighbors_and_values() {
        let [a, b, c] = vertices();
        let mut dag: AcyclicGraph<&str, f64> = AcyclicGraph::new();
        let ab = dag.add_edge(a, b).unwrap();
        dag.add_edge(a, c).unwrap();

        dag.set_vertex_value(a, "root");
        dag.set_edge_value(ab, 0.5);
        assert_eq!(dag.vertex_value(a), Some(&"root"));
        assert_eq!(dag.edge_value(ab), Some(&0.5));

        let successors: Vec<Vertex> = dag.edges_from_neighbors(a).into_iter().collect();
        assert_eq!(successors, vec![b, c]);
        assert!(dag.edges_to_neighbors(c).contains(&a));
    }

    #[test]
    fn test_topological_order_is_deterministic() {
        let [a, b, c, d, e] = vertices();
        let dag: AcyclicGraph<(), ()> =
            AcyclicGraph::from_edges(edges(&[(d, b), (a, b), (b, c), (e, c)])).unwrap();

        let order = dag.topological_order();
        assert_eq!(order, dag.topological_order());
        for edge in dag.edges() {
            let pos = |v: Vertex| order.iter().position(|&x| x == v).unwrap();
            assert!(pos(edge.source()) < pos(edge.target()));
        }
    }

    #[test]
    fn test_display() {
        let [a, b] = vertices();
        let mut dag: AcyclicGraph<&str, ()> = AcyclicGraph::from_edges(edges(&[(a, b)])).unwrap();
        dag.set_vertex_value(b, "b");

        let text = dag.to_string();
        assert!(text.starts_with("TYPE: Directed Acyclic Graph\nVERTICES:\n"));
        assert!(text.contains(&format!("  {b} = \"b\"")));
        assert!(text.contains("EDGES:\n  e"));
    }

    #[test]
    fn test_into_base() {
        let [a, b] = vertices();
        let dag: AcyclicGraph<(), ()> = AcyclicGraph::from_edges(edges(&[(a, b)])).unwrap();
        let base = dag.into_base();
        assert_eq!(base.edge_count(), 1);
    }
}
