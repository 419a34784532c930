//! Adjacency-list directed multigraph storage.
//!
//! Provides the vertex set, the edge registry, the outgoing and incoming
//! edge indices, and identity-keyed payload maps. Every collection keeps
//! insertion order so traversals over the same graph always visit vertices
//! and edges in the same sequence.

use indexmap::{IndexMap, IndexSet};
use petgraph::visit::{GraphBase, IntoNeighbors, IntoNodeIdentifiers, NodeCount, Visitable};
use std::collections::{HashMap, HashSet};
use std::fmt;

use super::handle::{Edge, Vertex};

/// Edge index keyed by one endpoint.
type EdgeIndex = IndexMap<Vertex, IndexSet<Edge>>;

/// A directed multigraph with optional vertex and edge payloads.
///
/// Edges are filed in two indices: the outgoing index keyed by source and
/// the incoming index keyed by target. An edge stays in the registry (and
/// keeps its payload) as long as at least one index holds it. Every
/// endpoint of a registered edge is a member of the vertex set.
///
/// # Example
///
/// ```rust
/// use acyclic::graph::{BaseGraph, Edge, Vertex};
///
/// let a = Vertex::new();
/// let b = Vertex::new();
/// let mut graph: BaseGraph<&str, u32> = BaseGraph::from_edges(vec![Edge::new(a, b)]);
///
/// graph.set_vertex_value(a, "a");
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.vertex_value(a), Some(&"a"));
/// assert!(graph.edges_from_neighbors(a).contains(&b));
/// ```
#[derive(Debug, Clone)]
pub struct BaseGraph<V, E> {
    vertices: IndexSet<Vertex>,
    edges: IndexSet<Edge>,
    edges_from: EdgeIndex,
    edges_to: EdgeIndex,
    vertex_values: HashMap<Vertex, V>,
    edge_values: HashMap<Edge, E>,
}

impl<V, E> Default for BaseGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> BaseGraph<V, E> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: IndexSet::new(),
            edges: IndexSet::new(),
            edges_from: IndexMap::new(),
            edges_to: IndexMap::new(),
            vertex_values: HashMap::new(),
            edge_values: HashMap::new(),
        }
    }

    /// Creates a graph holding the given vertices and no edges.
    pub fn from_vertices<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = Vertex>,
    {
        let mut graph = Self::new();
        for vertex in vertices {
            graph.vertices_insert(vertex);
        }
        graph
    }

    /// Creates a graph from edges. Endpoints join the vertex set in the
    /// order they are first seen, source before target.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::new();
        graph.edges_extend(edges);
        graph
    }

    /// Creates a graph from vertices followed by edges.
    pub fn from_parts<VI, EI>(vertices: VI, edges: EI) -> Self
    where
        VI: IntoIterator<Item = Vertex>,
        EI: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::from_vertices(vertices);
        graph.edges_extend(edges);
        graph
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of registered edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Checks if the graph has no vertices (and therefore no edges).
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.vertices.iter().copied()
    }

    /// Iterates registered edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    /// Checks whether the vertex is in the vertex set.
    pub fn vertex_in_graph(&self, vertex: Vertex) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Checks whether the edge is filed in at least one index.
    pub fn edge_in_graph(&self, edge: Edge) -> bool {
        self.edges.contains(&edge)
    }

    /// Returns the payload attached to `vertex`, if any.
    pub fn vertex_value(&self, vertex: Vertex) -> Option<&V> {
        self.vertex_values.get(&vertex)
    }

    /// Returns the payload attached to `edge`, if any.
    pub fn edge_value(&self, edge: Edge) -> Option<&E> {
        self.edge_values.get(&edge)
    }

    /// Attaches a payload to `vertex`, returning the previous one.
    ///
    /// The vertex must be in the graph; otherwise the value is dropped and
    /// nothing is stored.
    pub fn set_vertex_value(&mut self, vertex: Vertex, value: V) -> Option<V> {
        if !self.vertex_in_graph(vertex) {
            return None;
        }
        self.vertex_values.insert(vertex, value)
    }

    /// Attaches a payload to `edge`, returning the previous one.
    ///
    /// The edge must be registered; otherwise the value is dropped.
    pub fn set_edge_value(&mut self, edge: Edge, value: E) -> Option<E> {
        if !self.edge_in_graph(edge) {
            return None;
        }
        self.edge_values.insert(edge, value)
    }

    /// Adds a vertex. Returns `false` if it was already present.
    pub fn vertices_insert(&mut self, vertex: Vertex) -> bool {
        self.vertices.insert(vertex)
    }

    /// Removes a vertex together with every edge incident to it.
    ///
    /// Incident edges leave both indices, the registry and the edge payload
    /// map, so no adjacency entry refers to the erased vertex afterwards.
    /// Returns `false` if the vertex was not present.
    pub fn vertices_erase(&mut self, vertex: Vertex) -> bool {
        if !self.vertices.shift_remove(&vertex) {
            return false;
        }

        // An edge may be filed in only one index, possibly under the other
        // endpoint, so the registry is the authority on incidence.
        let incident: Vec<Edge> = self
            .edges
            .iter()
            .copied()
            .filter(|edge| edge.source() == vertex || edge.target() == vertex)
            .collect();

        for edge in incident {
            detach(&mut self.edges_from, edge.source(), edge);
            detach(&mut self.edges_to, edge.target(), edge);
            self.release(edge);
        }
        self.edges_from.shift_remove(&vertex);
        self.edges_to.shift_remove(&vertex);

        self.vertex_values.remove(&vertex);
        true
    }

    /// Files `edge` in the outgoing index under its source.
    ///
    /// Both endpoints join the vertex set. Returns `false` if the edge was
    /// already in the outgoing index.
    pub fn edges_from_insert(&mut self, edge: Edge) -> bool {
        self.register(edge);
        self.edges_from
            .entry(edge.source())
            .or_default()
            .insert(edge)
    }

    /// Files `edge` in the incoming index under its target.
    pub fn edges_to_insert(&mut self, edge: Edge) -> bool {
        self.register(edge);
        self.edges_to.entry(edge.target()).or_default().insert(edge)
    }

    /// Files `edge` in both indices.
    pub fn edges_insert(&mut self, edge: Edge) -> bool {
        let from = self.edges_from_insert(edge);
        let to = self.edges_to_insert(edge);
        from || to
    }

    /// Files every edge in both indices.
    pub fn edges_extend<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = Edge>,
    {
        for edge in edges {
            self.edges_insert(edge);
        }
    }

    /// Finds the first edge `from -> to` in the outgoing index.
    pub fn edges_from_find(&self, from: Vertex, to: Vertex) -> Option<Edge> {
        self.edges_from
            .get(&from)?
            .iter()
            .copied()
            .find(|edge| edge.target() == to)
    }

    /// Finds the first edge `from -> to` in the incoming index.
    pub fn edges_to_find(&self, from: Vertex, to: Vertex) -> Option<Edge> {
        self.edges_to
            .get(&to)?
            .iter()
            .copied()
            .find(|edge| edge.source() == from)
    }

    /// Returns the successors of `vertex`.
    pub fn edges_from_neighbors(&self, vertex: Vertex) -> IndexSet<Vertex> {
        self.edges_from
            .get(&vertex)
            .map(|bucket| bucket.iter().map(|edge| edge.target()).collect())
            .unwrap_or_default()
    }

    /// Returns the predecessors of `vertex`.
    pub fn edges_to_neighbors(&self, vertex: Vertex) -> IndexSet<Vertex> {
        self.edges_to
            .get(&vertex)
            .map(|bucket| bucket.iter().map(|edge| edge.source()).collect())
            .unwrap_or_default()
    }

    /// Iterates successors of `vertex` along the outgoing index, one item
    /// per edge (parallel edges repeat the target).
    pub fn successors(&self, vertex: Vertex) -> Successors<'_> {
        Successors {
            edges: self.edges_from.get(&vertex).map(|bucket| bucket.iter()),
        }
    }

    /// Removes `edge` from the outgoing index.
    pub fn edges_from_erase(&mut self, edge: Edge) -> bool {
        let removed = detach(&mut self.edges_from, edge.source(), edge);
        if removed {
            self.release_if_unindexed(edge);
        }
        removed
    }

    /// Removes `edge` from the incoming index.
    pub fn edges_to_erase(&mut self, edge: Edge) -> bool {
        let removed = detach(&mut self.edges_to, edge.target(), edge);
        if removed {
            self.release_if_unindexed(edge);
        }
        removed
    }

    /// Removes `edge` from both indices.
    pub fn edges_erase(&mut self, edge: Edge) -> bool {
        let from = detach(&mut self.edges_from, edge.source(), edge);
        let to = detach(&mut self.edges_to, edge.target(), edge);
        if from || to {
            self.release(edge);
        }
        from || to
    }

    /// Removes the first edge `from -> to` from both indices and returns it.
    pub fn edges_from_to_erase(&mut self, from: Vertex, to: Vertex) -> Option<Edge> {
        let edge = self
            .edges_from_find(from, to)
            .or_else(|| self.edges_to_find(from, to))?;
        self.edges_erase(edge);
        Some(edge)
    }

    fn register(&mut self, edge: Edge) {
        self.vertices.insert(edge.source());
        self.vertices.insert(edge.target());
        self.edges.insert(edge);
    }

    fn release(&mut self, edge: Edge) {
        self.edges.shift_remove(&edge);
        self.edge_values.remove(&edge);
    }

    fn release_if_unindexed(&mut self, edge: Edge) {
        let indexed = indexed(&self.edges_from, edge.source(), edge)
            || indexed(&self.edges_to, edge.target(), edge);
        if !indexed {
            self.release(edge);
        }
    }
}

impl<V: fmt::Debug, E: fmt::Debug> BaseGraph<V, E> {
    /// Writes the diagnostic listing under the given type tag.
    pub(crate) fn write_listing(&self, f: &mut fmt::Formatter<'_>, tag: &str) -> fmt::Result {
        writeln!(f, "TYPE: {tag}")?;
        writeln!(f, "VERTICES:")?;
        for vertex in &self.vertices {
            match self.vertex_values.get(vertex) {
                Some(value) => writeln!(f, "  {vertex} = {value:?}")?,
                None => writeln!(f, "  {vertex}")?,
            }
        }
        write!(f, "EDGES:")?;
        for edge in &self.edges {
            match self.edge_values.get(edge) {
                Some(value) => write!(f, "\n  {} = {value:?}", edge.describe())?,
                None => write!(f, "\n  {}", edge.describe())?,
            }
        }
        Ok(())
    }
}

impl<V: fmt::Debug, E: fmt::Debug> fmt::Display for BaseGraph<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_listing(f, "Directed Graph")
    }
}

fn detach(index: &mut EdgeIndex, key: Vertex, edge: Edge) -> bool {
    index
        .get_mut(&key)
        .is_some_and(|bucket| bucket.shift_remove(&edge))
}

fn indexed(index: &EdgeIndex, key: Vertex, edge: Edge) -> bool {
    index.get(&key).is_some_and(|bucket| bucket.contains(&edge))
}

/// Iterator over the successors of a vertex, see [`BaseGraph::successors`].
#[derive(Debug, Clone)]
pub struct Successors<'a> {
    edges: Option<indexmap::set::Iter<'a, Edge>>,
}

impl Iterator for Successors<'_> {
    type Item = Vertex;

    fn next(&mut self) -> Option<Vertex> {
        self.edges.as_mut()?.next().map(|edge| edge.target())
    }
}

impl<V, E> GraphBase for BaseGraph<V, E> {
    type NodeId = Vertex;
    type EdgeId = Edge;
}

impl<V, E> NodeCount for BaseGraph<V, E> {
    fn node_count(&self) -> usize {
        self.vertices.len()
    }
}

impl<V, E> Visitable for BaseGraph<V, E> {
    type Map = HashSet<Vertex>;

    fn visit_map(&self) -> Self::Map {
        HashSet::with_capacity(self.vertices.len())
    }

    fn reset_map(&self, map: &mut Self::Map) {
        map.clear();
    }
}

impl<'a, V, E> IntoNeighbors for &'a BaseGraph<V, E> {
    type Neighbors = Successors<'a>;

    fn neighbors(self, vertex: Vertex) -> Self::Neighbors {
        self.successors(vertex)
    }
}

impl<'a, V, E> IntoNodeIdentifiers for &'a BaseGraph<V, E> {
    type NodeIdentifiers = std::iter::Copied<indexmap::set::Iter<'a, Vertex>>;

    fn node_identifiers(self) -> Self::NodeIdentifiers {
        self.vertices.iter().copied()
    }
}
