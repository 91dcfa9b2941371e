use serde::{Deserialize, Serialize};

/// Dense, zero-based vertex identifier.
///
/// Signed so that [`NULL_VERTEX`] can stand for "no such vertex".
pub type VertexId = isize;

/// Sentinel returned by [`source`](super::DirectedGraph::source) and
/// [`target`](super::DirectedGraph::target) for edges not in the graph.
pub const NULL_VERTEX: VertexId = -1;

/// An ordered `(source, target)` pair.
///
/// The derived ordering is lexicographic on `(source, target)`, which is the
/// canonical edge order of [`DirectedGraph`](super::DirectedGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Tail of the edge.
    pub source: VertexId,
    /// Head of the edge.
    pub target: VertexId,
}

impl Edge {
    /// Creates the descriptor for `source -> target`.
    #[inline]
    pub const fn new(source: VertexId, target: VertexId) -> Self {
        Self { source, target }
    }

    /// Returns true for `v -> v`.
    #[inline]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Larger of the two endpoints.
    #[inline]
    pub(crate) fn max_endpoint(&self) -> VertexId {
        self.source.max(self.target)
    }
}

impl From<(VertexId, VertexId)> for Edge {
    #[inline]
    fn from((source, target): (VertexId, VertexId)) -> Self {
        Self::new(source, target)
    }
}

impl From<Edge> for (VertexId, VertexId) {
    #[inline]
    fn from(e: Edge) -> Self {
        (e.source, e.target)
    }
}
