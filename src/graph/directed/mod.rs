//! An append-only directed graph backed by ordered adjacency sets.
//!
//! Vertical split:
//! - `descriptor`: vertex ids and edge descriptors
//! - `iter`: vertex, edge and adjacency iterators
//! - `snapshot`: serde representation with re-validation
//! - `strategy`: proptest strategies (`proptest` feature)
//! - `tests`: module tests
//!
//! Storage is a `Vec` of per-vertex `BTreeSet`s plus a global `BTreeSet` of
//! edges. The global set answers duplicate and membership queries and fixes the
//! canonical edge order; the per-vertex sets fix the adjacency order.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

mod descriptor;
mod iter;
mod snapshot;
#[cfg(feature = "proptest")]
pub mod strategy;

pub use descriptor::{Edge, VertexId, NULL_VERTEX};
pub use iter::{AdjacentVertices, Edges, Vertices};
pub use snapshot::GraphSnapshot;

/// Largest vertex count whose ids are all representable as [`VertexId`].
const MAX_VERTICES: usize = VertexId::MAX.unsigned_abs();

/// Converts a storage index into a vertex id.
///
/// Indices past `isize::MAX` cannot name a vertex and map to [`NULL_VERTEX`].
#[inline]
fn id_of(index: usize) -> VertexId {
    VertexId::try_from(index).unwrap_or(NULL_VERTEX)
}

/// Converts a vertex id into a storage index, or `None` if it is negative.
#[inline]
fn index_of(vertex: VertexId) -> Option<usize> {
    usize::try_from(vertex).ok()
}

/// A directed graph with dense vertex ids and at most one edge per ordered pair.
///
/// Vertices and edges can only be added. An edge whose endpoint lies past the
/// last vertex grows the vertex set to cover it.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | Appends an empty adjacency set |
/// | `add_edge` | \(O(\log m + \log d)\) | Plus \(O(k)\) when growing by `k` vertices |
/// | `edge` | \(O(\log m)\) | Lookup in the edge set |
/// | `source` / `target` | \(O(\log m)\) | Re-validated against the edge set |
/// | `adjacent_vertices` | \(O(1)\) | Lazily walks the adjacency set |
/// | `num_vertices` / `num_edges` | \(O(1)\) | |
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "GraphSnapshot", try_from = "GraphSnapshot")]
pub struct DirectedGraph {
    adjacency: Vec<BTreeSet<VertexId>>,
    edges: BTreeSet<Edge>,
}

impl DirectedGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            adjacency: Vec::with_capacity(vertices),
            edges: BTreeSet::new(),
        }
    }

    /// Appends a vertex with no outgoing edges.
    ///
    /// Returns its id, which is the vertex count before the call.
    pub fn add_vertex(&mut self) -> VertexId {
        let id = id_of(self.adjacency.len());
        self.adjacency.push(BTreeSet::new());
        trace_event!(vertex = id, "vertex added");
        invariant!(self.is_valid(), "graph inconsistent after adding vertex {id}");
        id
    }

    /// Inserts the edge `u -> v`.
    ///
    /// Returns the edge descriptor and whether it was newly inserted. A repeated
    /// pair returns `false` and leaves the graph unchanged. A new edge grows the
    /// vertex set until both `u` and `v` are valid ids.
    ///
    /// # Panics
    /// Panics if `u` or `v` is negative, or if the vertex set cannot grow to
    /// cover them. The graph is left unchanged. Use
    /// [`try_add_edge`](Self::try_add_edge) to get an error instead.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> (Edge, bool) {
        match self.try_add_edge(u, v) {
            Ok(result) => result,
            Err(err) => panic!("add_edge({u}, {v}): {err}"),
        }
    }

    /// Checked form of [`add_edge`](Self::add_edge).
    ///
    /// # Errors
    /// Returns [`GraphError::NegativeVertex`] if either endpoint is negative, and
    /// [`GraphError::CapacityExceeded`] if the vertex set cannot grow to cover
    /// the larger endpoint. The graph is not modified in either case.
    pub fn try_add_edge(&mut self, u: VertexId, v: VertexId) -> Result<(Edge, bool), GraphError> {
        let src = index_of(u).ok_or(GraphError::NegativeVertex(u))?;
        if v < 0 {
            return Err(GraphError::NegativeVertex(v));
        }

        let edge = Edge::new(u, v);
        if self.edges.contains(&edge) {
            trace_event!(source = u, target = v, "duplicate edge rejected");
            return Ok((edge, false));
        }

        // Storage must cover both endpoints before the edge is recorded.
        let needed = index_of(edge.max_endpoint()).map_or(0, |top| top + 1);
        self.try_grow_to(needed)?;

        self.edges.insert(edge);
        let fresh = self.adjacency[src].insert(v);

        invariant!(fresh, "adjacency of {u} already held {v} while the edge set did not");
        invariant!(self.is_valid(), "graph inconsistent after inserting edge ({u}, {v})");
        Ok((edge, true))
    }

    /// Grows the vertex set to exactly `len` vertices if it is smaller.
    ///
    /// Fails without modifying the graph if `len` exceeds [`MAX_VERTICES`] or
    /// the storage cannot be reserved.
    fn try_grow_to(&mut self, len: usize) -> Result<(), GraphError> {
        let before = self.adjacency.len();
        if len <= before {
            return Ok(());
        }
        if len > MAX_VERTICES {
            trace_event!(requested = len, "growth rejected: count exceeds the largest id");
            return Err(GraphError::CapacityExceeded { requested: len });
        }
        self.adjacency.try_reserve_exact(len - before).map_err(|_| {
            trace_event!(requested = len, "growth rejected: reservation failed");
            GraphError::CapacityExceeded { requested: len }
        })?;
        self.adjacency.resize_with(len, BTreeSet::new);
        trace_event!(from = before, to = len, "vertex set grown");
        Ok(())
    }

    /// Looks up the edge `u -> v`.
    ///
    /// Returns the descriptor and whether the edge exists. Any ids are accepted;
    /// ids that name no vertex are simply not found.
    pub fn edge(&self, u: VertexId, v: VertexId) -> (Edge, bool) {
        let edge = Edge::new(u, v);
        (edge, self.edges.contains(&edge))
    }

    /// All vertex ids, ascending.
    pub fn vertices(&self) -> Vertices {
        Vertices::new(id_of(self.adjacency.len()))
    }

    /// All edges in lexicographic `(source, target)` order.
    pub fn edges(&self) -> Edges<'_> {
        Edges::new(self.edges.iter())
    }

    /// Out-neighbours of `u` in ascending order.
    ///
    /// # Panics
    /// Panics if `u` is not a vertex of this graph.
    pub fn adjacent_vertices(&self, u: VertexId) -> AdjacentVertices<'_> {
        match self.try_adjacent_vertices(u) {
            Ok(iter) => iter,
            Err(err) => panic!("{err}"),
        }
    }

    /// Checked form of [`adjacent_vertices`](Self::adjacent_vertices).
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `u` is not a vertex.
    pub fn try_adjacent_vertices(&self, u: VertexId) -> Result<AdjacentVertices<'_>, GraphError> {
        self.entry(u).map(|targets| AdjacentVertices::new(targets.iter()))
    }

    /// Number of out-neighbours of `u`.
    ///
    /// # Panics
    /// Panics if `u` is not a vertex of this graph.
    pub fn out_degree(&self, u: VertexId) -> usize {
        match self.entry(u) {
            Ok(targets) => targets.len(),
            Err(err) => panic!("{err}"),
        }
    }

    fn entry(&self, u: VertexId) -> Result<&BTreeSet<VertexId>, GraphError> {
        index_of(u)
            .and_then(|i| self.adjacency.get(i))
            .ok_or(GraphError::VertexOutOfRange {
                vertex: u,
                num_vertices: self.adjacency.len(),
            })
    }

    /// Source of `e`, or [`NULL_VERTEX`] if `e` is not an edge of this graph.
    pub fn source(&self, e: Edge) -> VertexId {
        if self.contains_edge(e) {
            e.source
        } else {
            NULL_VERTEX
        }
    }

    /// Target of `e`, or [`NULL_VERTEX`] if `e` is not an edge of this graph.
    pub fn target(&self, e: Edge) -> VertexId {
        if self.contains_edge(e) {
            e.target
        } else {
            NULL_VERTEX
        }
    }

    /// The `i`-th vertex descriptor, which is `i` itself.
    ///
    /// No bounds check: `vertex(0)` on an empty graph is `0`. Indices that do not
    /// fit a [`VertexId`] yield [`NULL_VERTEX`].
    pub fn vertex(&self, i: usize) -> VertexId {
        id_of(i)
    }

    /// Bounds-checked form of [`vertex`](Self::vertex).
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `i >= num_vertices()`.
    pub fn checked_vertex(&self, i: usize) -> Result<VertexId, GraphError> {
        if i < self.adjacency.len() {
            Ok(id_of(i))
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: id_of(i),
                num_vertices: self.adjacency.len(),
            })
        }
    }

    /// Number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns true if `u` names a vertex of this graph.
    pub fn contains_vertex(&self, u: VertexId) -> bool {
        index_of(u).is_some_and(|i| i < self.adjacency.len())
    }

    /// Returns true if `e` is an edge of this graph.
    pub fn contains_edge(&self, e: Edge) -> bool {
        self.edges.contains(&e)
    }

    /// Checks the structural invariants.
    ///
    /// Every edge has both endpoints in range and appears in its source's
    /// adjacency set, and the adjacency sets hold nothing else.
    pub fn is_valid(&self) -> bool {
        let n = self.adjacency.len();
        let adjacency_total: usize = self.adjacency.iter().map(BTreeSet::len).sum();

        adjacency_total == self.edges.len()
            && self.edges.iter().all(|e| {
                match (index_of(e.source), index_of(e.target)) {
                    (Some(s), Some(t)) if s < n && t < n => self.adjacency[s].contains(&e.target),
                    _ => false,
                }
            })
    }
}

impl<T: Into<Edge>> Extend<T> for DirectedGraph {
    /// Adds every edge with [`add_edge`](DirectedGraph::add_edge); duplicates are skipped.
    ///
    /// # Panics
    /// Panics on a negative endpoint.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            let e = item.into();
            self.add_edge(e.source, e.target);
        }
    }
}

impl<T: Into<Edge>> FromIterator<T> for DirectedGraph {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}
