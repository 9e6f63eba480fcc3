//! Graph construction and fastest-route queries.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{Itinerary, ItineraryStep, RoutingSettings};
use crate::catalogue::{CatalogueError, TransportCatalogue};
use crate::domain::{Route, RouteId, StopId};
use crate::graph::{
    DirectedWeightedGraph, Edge, GraphError, Router, RoutesInternalData, VertexId,
};

/// Error from building or restoring a router.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouterError {
    /// Bus velocity is zero, negative or not a number
    #[error("invalid bus velocity: {0}")]
    InvalidVelocity(f64),

    /// A hop on a route has no road distance
    #[error("route {route}: {source}")]
    MissingDistance {
        route: String,
        #[source]
        source: CatalogueError,
    },

    /// Restored graph or table is malformed
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Restored parts disagree with each other
    #[error("inconsistent router data: {0}")]
    Inconsistent(&'static str),
}

/// The two graph vertices standing for one stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopVertices {
    /// Reached after getting off a bus; waiting has not started.
    pub arrival: VertexId,

    /// Reached after the wait; the rider is on board.
    pub boarding: VertexId,
}

/// Fastest-itinerary router built once from a finished catalogue.
///
/// The router holds only ids; use the catalogue it was built from to turn
/// them back into names.
#[derive(Debug, Clone)]
pub struct TransportRouter {
    settings: RoutingSettings,
    graph: DirectedWeightedGraph,
    router: Router,

    /// Vertex pair per stop, indexed by stop id.
    stop_vertices: Vec<StopVertices>,

    /// Itinerary step for every graph edge, indexed by edge id.
    edge_steps: Vec<ItineraryStep>,
}

impl TransportRouter {
    /// Build the graph for `catalogue` and precompute all fastest paths.
    pub fn build(
        catalogue: &TransportCatalogue,
        settings: RoutingSettings,
    ) -> Result<Self, RouterError> {
        if !settings.is_valid() {
            return Err(RouterError::InvalidVelocity(settings.bus_velocity));
        }

        let mut graph = DirectedWeightedGraph::new(2 * catalogue.stop_count());
        let mut edge_steps = Vec::new();

        let stop_vertices: Vec<StopVertices> = catalogue
            .stops()
            .map(|(id, _)| StopVertices {
                arrival: 2 * id.index(),
                boarding: 2 * id.index() + 1,
            })
            .collect();

        for (index, vertices) in stop_vertices.iter().enumerate() {
            graph.add_edge(Edge {
                from: vertices.arrival,
                to: vertices.boarding,
                weight: settings.wait_time(),
            });
            edge_steps.push(ItineraryStep::Wait {
                stop: StopId(index),
                time: settings.wait_time(),
            });
        }

        let mut builder = EdgeBuilder {
            catalogue,
            settings: &settings,
            stop_vertices: &stop_vertices,
            graph: &mut graph,
            edge_steps: &mut edge_steps,
        };
        for (id, route) in catalogue.routes() {
            builder
                .add_route(id, route)
                .map_err(|source| RouterError::MissingDistance {
                    route: route.name.clone(),
                    source,
                })?;
        }

        info!(
            stops = catalogue.stop_count(),
            routes = catalogue.route_count(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "routing graph built"
        );

        let router = Router::build(&graph);
        Ok(Self {
            settings,
            graph,
            router,
            stop_vertices,
            edge_steps,
        })
    }

    /// Reassemble a router from stored parts without recomputing paths.
    pub fn from_parts(
        settings: RoutingSettings,
        graph: DirectedWeightedGraph,
        stop_vertices: Vec<StopVertices>,
        edge_steps: Vec<ItineraryStep>,
        table: RoutesInternalData,
    ) -> Result<Self, RouterError> {
        if !settings.is_valid() {
            return Err(RouterError::InvalidVelocity(settings.bus_velocity));
        }
        if graph.vertex_count() != 2 * stop_vertices.len() {
            return Err(RouterError::Inconsistent(
                "vertex count is not twice the stop count",
            ));
        }
        if edge_steps.len() != graph.edge_count() {
            return Err(RouterError::Inconsistent(
                "itinerary steps do not match the edge count",
            ));
        }
        let in_range = |v: VertexId| v < graph.vertex_count();
        if !stop_vertices
            .iter()
            .all(|sv| in_range(sv.arrival) && in_range(sv.boarding))
        {
            return Err(RouterError::Inconsistent("stop vertex out of range"));
        }

        let router = Router::from_internal(&graph, table)?;
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "router restored from stored table"
        );
        Ok(Self {
            settings,
            graph,
            router,
            stop_vertices,
            edge_steps,
        })
    }

    /// Fastest itinerary from `from` to `to`.
    ///
    /// Returns `None` if either stop is unknown to the router or the finish
    /// cannot be reached. A stop to itself is an empty itinerary.
    pub fn build_fastest_route(&self, from: StopId, to: StopId) -> Option<Itinerary> {
        let start = self.stop_vertices.get(from.index())?;
        let finish = self.stop_vertices.get(to.index())?;

        if from == to {
            return Some(Itinerary::empty());
        }

        let route = self
            .router
            .build_route(&self.graph, start.arrival, finish.arrival)?;
        let steps = route
            .edges
            .iter()
            .map(|&edge| self.edge_steps[edge])
            .collect();

        Some(Itinerary {
            steps,
            total_time: route.weight,
        })
    }

    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    pub fn graph(&self) -> &DirectedWeightedGraph {
        &self.graph
    }

    /// Vertex pair for every stop, indexed by stop id.
    pub fn stop_vertices(&self) -> &[StopVertices] {
        &self.stop_vertices
    }

    /// Itinerary step for every edge, indexed by edge id.
    pub fn edge_steps(&self) -> &[ItineraryStep] {
        &self.edge_steps
    }

    /// The precomputed all-pairs table.
    pub fn internal_data(&self) -> &RoutesInternalData {
        self.router.internal_data()
    }
}

/// Adds travel edges for one route at a time.
struct EdgeBuilder<'a> {
    catalogue: &'a TransportCatalogue,
    settings: &'a RoutingSettings,
    stop_vertices: &'a [StopVertices],
    graph: &'a mut DirectedWeightedGraph,
    edge_steps: &'a mut Vec<ItineraryStep>,
}

impl EdgeBuilder<'_> {
    /// Add an edge for every ordered pair of stops on the route.
    ///
    /// Linear routes also get the mirrored edges, priced with the distances
    /// of the return direction.
    fn add_route(&mut self, id: RouteId, route: &Route) -> Result<(), CatalogueError> {
        let stops = &route.stops;
        for i in 0..stops.len() {
            let mut forward: u64 = 0;
            let mut backward: u64 = 0;
            for j in (i + 1)..stops.len() {
                forward += u64::from(self.catalogue.require_distance(stops[j - 1], stops[j])?);
                self.add_ride(id, stops[i], stops[j], j - i, forward);

                if !route.circular {
                    backward +=
                        u64::from(self.catalogue.require_distance(stops[j], stops[j - 1])?);
                    self.add_ride(id, stops[j], stops[i], j - i, backward);
                }
            }
        }
        Ok(())
    }

    fn add_ride(
        &mut self,
        route: RouteId,
        from: StopId,
        to: StopId,
        span_count: usize,
        meters: u64,
    ) {
        let time = self.settings.travel_time(meters);
        self.graph.add_edge(Edge {
            from: self.stop_vertices[from.index()].boarding,
            to: self.stop_vertices[to.index()].arrival,
            weight: time,
        });
        self.edge_steps.push(ItineraryStep::Ride {
            route,
            span_count,
            time,
        });
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::catalogue::fixtures::reference_catalogue;
    use proptest::prelude::*;

    proptest! {
        /// Every stop, served or not, reaches itself in no time.
        #[test]
        fn any_stop_to_itself_is_empty(index in 0usize..10) {
            let cat = reference_catalogue();
            let router = TransportRouter::build(&cat, RoutingSettings::default()).unwrap();

            let itinerary = router.build_fastest_route(StopId(index), StopId(index)).unwrap();
            prop_assert!(itinerary.steps.is_empty());
            prop_assert_eq!(itinerary.total_time, 0.0);
        }
    }
}
