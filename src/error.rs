//! Error types for checked graph access.
//!
//! Only the checked entry points (`try_*`, `checked_*`) and snapshot
//! deserialization produce a [`GraphError`]. Duplicate insertions and unknown
//! edges are reported through return values instead.

use thiserror::Error;

use crate::graph::{Edge, VertexId};

/// Failure of a checked graph operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex id below zero was supplied where a real vertex is required.
    #[error("vertex id {0} is negative")]
    NegativeVertex(VertexId),

    /// A vertex id at or past the current vertex count.
    #[error("vertex {vertex} out of range for a graph with {num_vertices} vertices")]
    VertexOutOfRange {
        /// The offending id.
        vertex: VertexId,
        /// Vertex count at the time of the call.
        num_vertices: usize,
    },

    /// The same ordered pair appeared twice in a snapshot.
    #[error("edge ({}, {}) appears more than once", .0.source, .0.target)]
    DuplicateEdge(Edge),

    /// Growing the vertex set to the requested count is impossible: the count
    /// exceeds the largest id or the storage cannot be reserved.
    #[error("cannot hold {requested} vertices")]
    CapacityExceeded {
        /// Vertex count that growth would have required.
        requested: usize,
    },
}
