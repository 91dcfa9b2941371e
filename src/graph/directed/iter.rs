use std::collections::btree_set;
use std::iter::FusedIterator;
use std::ops::Range;

use super::{Edge, VertexId};

/// Iterator over every vertex id in ascending order.
///
/// Holds only the id range captured when it was created, so it does not
/// borrow the graph. Clone it to restart.
#[derive(Debug, Clone)]
pub struct Vertices {
    ids: Range<VertexId>,
}

impl Vertices {
    #[inline]
    pub(super) fn new(count: VertexId) -> Self {
        Self { ids: 0..count }
    }
}

impl Iterator for Vertices {
    type Item = VertexId;

    #[inline]
    fn next(&mut self) -> Option<VertexId> {
        self.ids.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl DoubleEndedIterator for Vertices {
    #[inline]
    fn next_back(&mut self) -> Option<VertexId> {
        self.ids.next_back()
    }
}

impl ExactSizeIterator for Vertices {}
impl FusedIterator for Vertices {}

/// Iterator over all edges in lexicographic `(source, target)` order.
#[derive(Debug, Clone)]
pub struct Edges<'a> {
    inner: btree_set::Iter<'a, Edge>,
}

impl<'a> Edges<'a> {
    #[inline]
    pub(super) fn new(inner: btree_set::Iter<'a, Edge>) -> Self {
        Self { inner }
    }
}

impl Iterator for Edges<'_> {
    type Item = Edge;

    #[inline]
    fn next(&mut self) -> Option<Edge> {
        self.inner.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Edges<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Edge> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for Edges<'_> {}
impl FusedIterator for Edges<'_> {}

/// Iterator over the out-neighbours of one vertex, ascending and without repeats.
#[derive(Debug, Clone)]
pub struct AdjacentVertices<'a> {
    inner: btree_set::Iter<'a, VertexId>,
}

impl<'a> AdjacentVertices<'a> {
    #[inline]
    pub(super) fn new(inner: btree_set::Iter<'a, VertexId>) -> Self {
        Self { inner }
    }
}

impl Iterator for AdjacentVertices<'_> {
    type Item = VertexId;

    #[inline]
    fn next(&mut self) -> Option<VertexId> {
        self.inner.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for AdjacentVertices<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<VertexId> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for AdjacentVertices<'_> {}
impl FusedIterator for AdjacentVertices<'_> {}
