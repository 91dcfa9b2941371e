//! Graph representations.
//!
//! - `directed`: the adjacency-set directed graph and its descriptors

pub mod directed;

pub use directed::{
    AdjacentVertices, DirectedGraph, Edge, Edges, GraphSnapshot, VertexId, Vertices, NULL_VERTEX,
};
