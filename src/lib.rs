//! # `digraph` - Adjacency-Set Directed Graph
//!
//! A small, append-only directed graph whose observable behaviour matches a
//! Boost `adjacency_list<setS, vecS, directedS>`: vertices are numbered densely
//! from zero, duplicate edges are rejected, and iteration follows the ordered
//! sets that back the graph rather than insertion order.
//!
//! ## Guarantees
//!
//! - **Dense vertex ids**: the i-th call to [`DirectedGraph::add_vertex`] returns `i`.
//!   Vertices are never removed or renumbered.
//! - **Set semantics for edges**: at most one edge per ordered pair. Inserting a
//!   duplicate reports `false` and leaves the graph untouched.
//! - **Implicit growth**: inserting an edge whose endpoint is beyond the current
//!   vertex count grows the vertex set up to and including that endpoint.
//! - **Canonical order**: [`DirectedGraph::edges`] is lexicographic on
//!   `(source, target)`; [`DirectedGraph::adjacent_vertices`] is ascending.
//!
//! ## Cargo features
//!
//! - `tracing`: emit `trace`-level events for vertex growth and rejected edges.
//! - `proptest`: export `digraph::strategy` with proptest strategies for random graphs.
//!
//! ## Example
//!
//! ```rust
//! use digraph::{DirectedGraph, Edge, NULL_VERTEX};
//!
//! let mut g = DirectedGraph::new();
//! let a = g.add_vertex();
//! let b = g.add_vertex();
//!
//! let (ab, inserted) = g.add_edge(a, b);
//! assert!(inserted);
//! assert_eq!(g.add_edge(a, b), (ab, false));
//!
//! // Endpoints past the end grow the vertex set.
//! g.add_edge(5, 6);
//! assert_eq!(g.num_vertices(), 7);
//!
//! assert_eq!(g.source(ab), a);
//! assert_eq!(g.target(Edge::new(b, a)), NULL_VERTEX);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod error;
pub mod graph;

#[cfg(feature = "proptest")]
pub use graph::directed::strategy;

pub use error::GraphError;
pub use graph::{AdjacentVertices, DirectedGraph, Edge, Edges, GraphSnapshot, VertexId, Vertices, NULL_VERTEX};

// Compile-time layout checks.
const _: () = {
    use core::mem;

    // An edge descriptor is exactly two vertex ids.
    assert!(mem::size_of::<Edge>() == 2 * mem::size_of::<VertexId>());
    assert!(NULL_VERTEX < 0);
};
