//! Shared harness: one operation set, implemented for `DirectedGraph` and for a
//! petgraph-backed reference with Boost `setS`/`vecS` semantics.

#![allow(dead_code)]

use digraph::{DirectedGraph, Edge, VertexId, NULL_VERTEX};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

/// The graph operations exercised by the conformance suite.
pub trait GraphUnderTest: Default {
    fn add_vertex(&mut self) -> VertexId;
    fn add_edge(&mut self, u: VertexId, v: VertexId) -> (Edge, bool);
    fn edge(&self, u: VertexId, v: VertexId) -> (Edge, bool);
    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn edges(&self) -> Box<dyn Iterator<Item = Edge> + '_>;
    fn adjacent_vertices(&self, u: VertexId) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn source(&self, e: Edge) -> VertexId;
    fn target(&self, e: Edge) -> VertexId;
    fn vertex(&self, i: usize) -> VertexId;
    fn num_vertices(&self) -> usize;
    fn num_edges(&self) -> usize;
}

impl GraphUnderTest for DirectedGraph {
    fn add_vertex(&mut self) -> VertexId {
        DirectedGraph::add_vertex(self)
    }

    fn add_edge(&mut self, u: VertexId, v: VertexId) -> (Edge, bool) {
        DirectedGraph::add_edge(self, u, v)
    }

    fn edge(&self, u: VertexId, v: VertexId) -> (Edge, bool) {
        DirectedGraph::edge(self, u, v)
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(DirectedGraph::vertices(self))
    }

    fn edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        Box::new(DirectedGraph::edges(self))
    }

    fn adjacent_vertices(&self, u: VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(DirectedGraph::adjacent_vertices(self, u))
    }

    fn source(&self, e: Edge) -> VertexId {
        DirectedGraph::source(self, e)
    }

    fn target(&self, e: Edge) -> VertexId {
        DirectedGraph::target(self, e)
    }

    fn vertex(&self, i: usize) -> VertexId {
        DirectedGraph::vertex(self, i)
    }

    fn num_vertices(&self) -> usize {
        DirectedGraph::num_vertices(self)
    }

    fn num_edges(&self) -> usize {
        DirectedGraph::num_edges(self)
    }
}

/// `petgraph::DiGraph` driven the way Boost drives `adjacency_list<setS, vecS, directedS>`:
/// duplicate pairs are refused, endpoints past the end grow the vertex set, and
/// edges and neighbours come back sorted.
#[derive(Default)]
pub struct PetgraphReference {
    graph: DiGraph<(), ()>,
}

fn node(v: VertexId) -> NodeIndex {
    NodeIndex::new(usize::try_from(v).expect("reference graph takes non-negative ids"))
}

fn id(n: NodeIndex) -> VertexId {
    VertexId::try_from(n.index()).expect("node index fits a vertex id")
}

impl PetgraphReference {
    fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        let n = self.graph.node_count();
        let in_range = |x: VertexId| usize::try_from(x).is_ok_and(|i| i < n);
        in_range(u) && in_range(v) && self.graph.find_edge(node(u), node(v)).is_some()
    }
}

impl GraphUnderTest for PetgraphReference {
    fn add_vertex(&mut self) -> VertexId {
        id(self.graph.add_node(()))
    }

    fn add_edge(&mut self, u: VertexId, v: VertexId) -> (Edge, bool) {
        let e = Edge::new(u, v);
        if self.has_edge(u, v) {
            return (e, false);
        }
        while self.graph.node_count() <= node(u.max(v)).index() {
            self.graph.add_node(());
        }
        self.graph.add_edge(node(u), node(v), ());
        (e, true)
    }

    fn edge(&self, u: VertexId, v: VertexId) -> (Edge, bool) {
        (Edge::new(u, v), self.has_edge(u, v))
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.graph.node_indices().map(id))
    }

    fn edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        let mut all: Vec<Edge> = self
            .graph
            .edge_references()
            .map(|r| Edge::new(id(r.source()), id(r.target())))
            .collect();
        all.sort_unstable();
        Box::new(all.into_iter())
    }

    fn adjacent_vertices(&self, u: VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        let mut targets: Vec<VertexId> = self.graph.neighbors(node(u)).map(id).collect();
        targets.sort_unstable();
        Box::new(targets.into_iter())
    }

    fn source(&self, e: Edge) -> VertexId {
        if self.has_edge(e.source, e.target) {
            e.source
        } else {
            NULL_VERTEX
        }
    }

    fn target(&self, e: Edge) -> VertexId {
        if self.has_edge(e.source, e.target) {
            e.target
        } else {
            NULL_VERTEX
        }
    }

    fn vertex(&self, i: usize) -> VertexId {
        VertexId::try_from(i).unwrap_or(NULL_VERTEX)
    }

    fn num_vertices(&self) -> usize {
        self.graph.node_count()
    }

    fn num_edges(&self) -> usize {
        self.graph.edge_count()
    }
}

/// Adds `n` vertices and returns their ids in order.
pub fn add_vertices<G: GraphUnderTest>(g: &mut G, n: usize) -> Vec<VertexId> {
    (0..n).map(|_| g.add_vertex()).collect()
}
