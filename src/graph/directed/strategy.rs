//! Proptest strategies for random directed graphs.
//!
//! Available with the `proptest` feature.

use std::ops::Range;

use proptest::prelude::*;

use super::{DirectedGraph, VertexId};

/// Lists of `(source, target)` pairs with endpoints in `0..=max_vertex`.
///
/// Pairs may repeat, which exercises duplicate rejection when replayed.
///
/// # Panics
/// The returned strategy panics when sampled if `max_vertex` is negative.
pub fn edge_pairs(
    max_vertex: VertexId,
    len: Range<usize>,
) -> impl Strategy<Value = Vec<(VertexId, VertexId)>> {
    proptest::collection::vec((0..=max_vertex, 0..=max_vertex), len)
}

/// Graphs built by inserting [`edge_pairs`] in order.
pub fn directed_graph(max_vertex: VertexId, len: Range<usize>) -> impl Strategy<Value = DirectedGraph> {
    edge_pairs(max_vertex, len).prop_map(|pairs| pairs.into_iter().collect())
}
