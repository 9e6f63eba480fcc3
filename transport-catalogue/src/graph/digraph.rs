//! Directed weighted graph with per-vertex incidence lists.

use serde::{Deserialize, Serialize};

use super::GraphError;

pub type VertexId = usize;
pub type EdgeId = usize;

/// A directed edge with a non-negative weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
}

/// Directed graph storing edges in insertion order.
///
/// Edge ids are positions in the edge list, so they are stable and dense.
/// Each vertex keeps the ids of its outgoing edges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectedWeightedGraph {
    edges: Vec<Edge>,
    incidence_lists: Vec<Vec<EdgeId>>,
}

impl DirectedWeightedGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence_lists: vec![Vec::new(); vertex_count],
        }
    }

    /// Rebuild a graph from a stored edge list and incidence lists.
    ///
    /// The parts are checked for consistency but otherwise taken as-is.
    pub fn from_parts(
        vertex_count: usize,
        edges: Vec<Edge>,
        incidence_lists: Vec<Vec<EdgeId>>,
    ) -> Result<Self, GraphError> {
        if incidence_lists.len() != vertex_count {
            return Err(GraphError::IncidenceCount {
                expected: vertex_count,
                found: incidence_lists.len(),
            });
        }
        for (id, edge) in edges.iter().enumerate() {
            for vertex in [edge.from, edge.to] {
                if vertex >= vertex_count {
                    return Err(GraphError::VertexOutOfRange {
                        edge: id,
                        vertex,
                        vertex_count,
                    });
                }
            }
        }
        for (vertex, list) in incidence_lists.iter().enumerate() {
            for &edge in list {
                match edges.get(edge) {
                    None => return Err(GraphError::EdgeOutOfRange { vertex, edge }),
                    Some(e) if e.from != vertex => {
                        return Err(GraphError::MisplacedEdge { vertex, edge });
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(Self {
            edges,
            incidence_lists,
        })
    }

    /// Add an edge and return its id.
    ///
    /// Both endpoints must be vertices of this graph.
    pub fn add_edge(&mut self, edge: Edge) -> EdgeId {
        let id = self.edges.len();
        self.incidence_lists[edge.from].push(id);
        self.edges.push(edge);
        id
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence_lists.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id]
    }

    /// All edges in id order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Ids of the edges leaving `vertex`.
    pub fn incident_edges(&self, vertex: VertexId) -> &[EdgeId] {
        &self.incidence_lists[vertex]
    }

    /// Incidence lists for every vertex, in vertex order.
    pub fn incidence_lists(&self) -> &[Vec<EdgeId>] {
        &self.incidence_lists
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(from: VertexId, to: VertexId, weight: f64) -> Edge {
        Edge { from, to, weight }
    }

    #[test]
    fn add_edges() {
        let mut g = DirectedWeightedGraph::new(3);
        let e0 = g.add_edge(edge(0, 1, 1.0));
        let e1 = g.add_edge(edge(0, 2, 2.0));
        let e2 = g.add_edge(edge(2, 1, 0.5));

        assert_eq!((e0, e1, e2), (0, 1, 2));
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.incident_edges(0), &[0, 1]);
        assert_eq!(g.incident_edges(1), &[] as &[EdgeId]);
        assert_eq!(g.edge(2).to, 1);
    }

    #[test]
    fn from_parts_roundtrip() {
        let mut g = DirectedWeightedGraph::new(2);
        g.add_edge(edge(0, 1, 3.0));
        g.add_edge(edge(1, 0, 4.0));

        let rebuilt = DirectedWeightedGraph::from_parts(
            g.vertex_count(),
            g.edges().to_vec(),
            g.incidence_lists().to_vec(),
        )
        .unwrap();
        assert_eq!(rebuilt, g);
    }

    #[test]
    fn from_parts_rejects_bad_vertex() {
        let err =
            DirectedWeightedGraph::from_parts(2, vec![edge(0, 5, 1.0)], vec![vec![0], vec![]])
                .unwrap_err();
        assert_eq!(
            err,
            GraphError::VertexOutOfRange {
                edge: 0,
                vertex: 5,
                vertex_count: 2
            }
        );
    }

    #[test]
    fn from_parts_rejects_bad_incidence() {
        let err = DirectedWeightedGraph::from_parts(2, vec![edge(0, 1, 1.0)], vec![vec![3], vec![]])
            .unwrap_err();
        assert_eq!(err, GraphError::EdgeOutOfRange { vertex: 0, edge: 3 });

        let err = DirectedWeightedGraph::from_parts(2, vec![edge(0, 1, 1.0)], vec![vec![], vec![0]])
            .unwrap_err();
        assert_eq!(err, GraphError::MisplacedEdge { vertex: 1, edge: 0 });

        let err = DirectedWeightedGraph::from_parts(2, vec![], vec![vec![]]).unwrap_err();
        assert_eq!(
            err,
            GraphError::IncidenceCount {
                expected: 2,
                found: 1
            }
        );
    }
}
