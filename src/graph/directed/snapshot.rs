use serde::{Deserialize, Serialize};

use super::{DirectedGraph, Edge};
use crate::error::GraphError;

/// Serialized form of a [`DirectedGraph`]: the vertex count and the edges in
/// canonical order.
///
/// Converting back into a graph re-validates every edge, so a snapshot can never
/// produce a graph that breaks the invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Number of vertices; ids are `0..num_vertices`.
    pub num_vertices: usize,
    /// Edges, each endpoint in range and no pair repeated.
    pub edges: Vec<Edge>,
}

impl From<&DirectedGraph> for GraphSnapshot {
    fn from(graph: &DirectedGraph) -> Self {
        Self {
            num_vertices: graph.num_vertices(),
            edges: graph.edges().collect(),
        }
    }
}

impl From<DirectedGraph> for GraphSnapshot {
    fn from(graph: DirectedGraph) -> Self {
        Self::from(&graph)
    }
}

impl TryFrom<GraphSnapshot> for DirectedGraph {
    type Error = GraphError;

    fn try_from(snapshot: GraphSnapshot) -> Result<Self, GraphError> {
        let mut graph = DirectedGraph::new();
        graph.try_grow_to(snapshot.num_vertices)?;

        for edge in snapshot.edges {
            for vertex in [edge.source, edge.target] {
                if vertex < 0 {
                    trace_event!(vertex, "snapshot rejected: negative vertex");
                    return Err(GraphError::NegativeVertex(vertex));
                }
                if !graph.contains_vertex(vertex) {
                    trace_event!(vertex, num_vertices = snapshot.num_vertices, "snapshot rejected: vertex out of range");
                    return Err(GraphError::VertexOutOfRange {
                        vertex,
                        num_vertices: snapshot.num_vertices,
                    });
                }
            }
            let (_, inserted) = graph.try_add_edge(edge.source, edge.target)?;
            if !inserted {
                trace_event!(source = edge.source, target = edge.target, "snapshot rejected: duplicate edge");
                return Err(GraphError::DuplicateEdge(edge));
            }
        }

        invariant!(graph.is_valid(), "graph rebuilt from snapshot is inconsistent");
        Ok(graph)
    }
}
