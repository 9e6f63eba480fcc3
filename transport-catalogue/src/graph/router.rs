//! All-pairs shortest paths over a [`DirectedWeightedGraph`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{DirectedWeightedGraph, EdgeId, GraphError, VertexId};

/// Best known path into a vertex: its total weight and the last edge taken.
///
/// `prev_edge` is `None` only for the trivial path from a vertex to itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteInternalData {
    pub weight: f64,
    pub prev_edge: Option<EdgeId>,
}

/// `table[from][to]` is the best path from `from` to `to`, if any.
pub type RoutesInternalData = Vec<Vec<Option<RouteInternalData>>>;

/// A cheapest path: total weight and edge ids in traversal order.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo {
    pub weight: f64,
    pub edges: Vec<EdgeId>,
}

/// Shortest-path oracle holding a precomputed all-pairs table.
///
/// The router does not own the graph; callers pass the same graph the
/// table was built from to every query.
#[derive(Debug, Clone, PartialEq)]
pub struct Router {
    routes_internal_data: RoutesInternalData,
}

impl Router {
    /// Compute the all-pairs table for `graph`.
    ///
    /// Runs in O(V³) time and O(V²) memory.
    pub fn build(graph: &DirectedWeightedGraph) -> Self {
        let vertex_count = graph.vertex_count();
        let mut data: RoutesInternalData = vec![vec![None; vertex_count]; vertex_count];

        for (vertex, row) in data.iter_mut().enumerate() {
            row[vertex] = Some(RouteInternalData {
                weight: 0.0,
                prev_edge: None,
            });
            for &edge_id in graph.incident_edges(vertex) {
                let edge = graph.edge(edge_id);
                let better = match &row[edge.to] {
                    Some(existing) => edge.weight < existing.weight,
                    None => true,
                };
                if better {
                    row[edge.to] = Some(RouteInternalData {
                        weight: edge.weight,
                        prev_edge: Some(edge_id),
                    });
                }
            }
        }

        for through in 0..vertex_count {
            for from in 0..vertex_count {
                let Some(to_through) = data[from][through] else {
                    continue;
                };
                for to in 0..vertex_count {
                    let Some(through_to) = data[through][to] else {
                        continue;
                    };
                    let candidate = to_through.weight + through_to.weight;
                    let improves = match &data[from][to] {
                        Some(current) => candidate < current.weight,
                        None => true,
                    };
                    if improves {
                        data[from][to] = Some(RouteInternalData {
                            weight: candidate,
                            prev_edge: through_to.prev_edge.or(to_through.prev_edge),
                        });
                    }
                }
            }
        }

        debug!(vertices = vertex_count, edges = graph.edge_count(), "router table built");
        Self {
            routes_internal_data: data,
        }
    }

    /// Reattach a previously exported table without recomputing it.
    pub fn from_internal(
        graph: &DirectedWeightedGraph,
        data: RoutesInternalData,
    ) -> Result<Self, GraphError> {
        let vertex_count = graph.vertex_count();
        if data.len() != vertex_count {
            return Err(GraphError::TableShape {
                rows: data.len(),
                columns: data.first().map_or(0, Vec::len),
                vertex_count,
            });
        }
        for row in &data {
            if row.len() != vertex_count {
                return Err(GraphError::TableShape {
                    rows: data.len(),
                    columns: row.len(),
                    vertex_count,
                });
            }
            for cell in row.iter().flatten() {
                if let Some(edge) = cell.prev_edge
                    && edge >= graph.edge_count()
                {
                    return Err(GraphError::TableEdge(edge));
                }
            }
        }
        Ok(Self {
            routes_internal_data: data,
        })
    }

    /// Cheapest path from `from` to `to`, or `None` if `to` is unreachable.
    pub fn build_route(
        &self,
        graph: &DirectedWeightedGraph,
        from: VertexId,
        to: VertexId,
    ) -> Option<RouteInfo> {
        let row = self.routes_internal_data.get(from)?;
        let target = (*row.get(to)?)?;

        let mut edges = Vec::new();
        let mut prev_edge = target.prev_edge;
        while let Some(edge_id) = prev_edge {
            // A simple path never has more edges than vertices; a longer
            // walk means the table was tampered with.
            if edges.len() >= graph.vertex_count() {
                return None;
            }
            edges.push(edge_id);
            prev_edge = row[graph.edge(edge_id).from].and_then(|data| data.prev_edge);
        }
        edges.reverse();

        Some(RouteInfo {
            weight: target.weight,
            edges,
        })
    }

    /// The precomputed table, for persisting.
    pub fn internal_data(&self) -> &RoutesInternalData {
        &self.routes_internal_data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    fn graph(vertex_count: usize, edges: &[(VertexId, VertexId, f64)]) -> DirectedWeightedGraph {
        let mut g = DirectedWeightedGraph::new(vertex_count);
        for &(from, to, weight) in edges {
            g.add_edge(Edge { from, to, weight });
        }
        g
    }

    #[test]
    fn trivial_route() {
        let g = graph(2, &[(0, 1, 1.0)]);
        let router = Router::build(&g);
        let route = router.build_route(&g, 0, 0).unwrap();
        assert_eq!(route.weight, 0.0);
        assert!(route.edges.is_empty());
    }

    #[test]
    fn picks_cheaper_indirect_path() {
        // 0 -> 2 directly costs 10, via 1 costs 3.
        let g = graph(3, &[(0, 2, 10.0), (0, 1, 1.0), (1, 2, 2.0)]);
        let router = Router::build(&g);

        let route = router.build_route(&g, 0, 2).unwrap();
        assert_eq!(route.weight, 3.0);
        assert_eq!(route.edges, vec![1, 2]);
    }

    #[test]
    fn parallel_edges_keep_cheapest() {
        let g = graph(2, &[(0, 1, 5.0), (0, 1, 2.0)]);
        let router = Router::build(&g);

        let route = router.build_route(&g, 0, 1).unwrap();
        assert_eq!(route.weight, 2.0);
        assert_eq!(route.edges, vec![1]);
    }

    #[test]
    fn unreachable_is_none() {
        let g = graph(3, &[(0, 1, 1.0)]);
        let router = Router::build(&g);
        assert!(router.build_route(&g, 1, 0).is_none());
        assert!(router.build_route(&g, 0, 2).is_none());
    }

    #[test]
    fn out_of_range_vertex_is_none() {
        let g = graph(2, &[(0, 1, 1.0)]);
        let router = Router::build(&g);
        assert!(router.build_route(&g, 0, 7).is_none());
        assert!(router.build_route(&g, 7, 0).is_none());
    }

    #[test]
    fn long_chain_reconstructs_in_order() {
        let g = graph(5, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0)]);
        let router = Router::build(&g);
        let route = router.build_route(&g, 0, 4).unwrap();
        assert_eq!(route.edges, vec![0, 1, 2, 3]);
        assert_eq!(route.weight, 4.0);
    }

    #[test]
    fn reattached_table_answers_identically() {
        let g = graph(4, &[(0, 1, 1.0), (1, 2, 1.5), (0, 2, 3.0), (2, 3, 0.5)]);
        let built = Router::build(&g);
        let restored = Router::from_internal(&g, built.internal_data().clone()).unwrap();

        assert_eq!(restored, built);
        for from in 0..4 {
            for to in 0..4 {
                assert_eq!(
                    built.build_route(&g, from, to),
                    restored.build_route(&g, from, to)
                );
            }
        }
    }

    #[test]
    fn reattach_rejects_wrong_shape() {
        let g = graph(2, &[(0, 1, 1.0)]);
        let err = Router::from_internal(&g, vec![vec![None; 2]]).unwrap_err();
        assert_eq!(
            err,
            GraphError::TableShape {
                rows: 1,
                columns: 2,
                vertex_count: 2
            }
        );

        let bad_edge = vec![
            vec![
                None,
                Some(RouteInternalData {
                    weight: 1.0,
                    prev_edge: Some(9),
                }),
            ],
            vec![None, None],
        ];
        assert_eq!(
            Router::from_internal(&g, bad_edge).unwrap_err(),
            GraphError::TableEdge(9)
        );
    }
}
