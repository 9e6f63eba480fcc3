//! Catalogue ingest and stat request answers.

use std::collections::BTreeSet;

use tracing::{info, warn};

use super::dto::{BaseRequest, ItemDto, Query, ResponseBody, StatRequest, StatResponse};
use crate::catalogue::{CatalogueError, RouteStatistics, StopBuses, TransportCatalogue};
use crate::domain::Coordinates;
use crate::render::MapRenderer;
use crate::router::{Itinerary, ItineraryStep};
use crate::state::TransportState;

const NOT_FOUND: &str = "not found";
const ROUTING_UNAVAILABLE: &str = "routing is not available";

/// Build a catalogue from base requests.
///
/// Stops go in first, then road distances, then buses, so a bus or a
/// distance may name a stop declared later in the list.
pub fn build_catalogue(requests: &[BaseRequest]) -> Result<TransportCatalogue, CatalogueError> {
    let mut catalogue = TransportCatalogue::new();

    for request in requests {
        if let BaseRequest::Stop {
            name,
            latitude,
            longitude,
            ..
        } = request
        {
            catalogue.add_stop(name.clone(), Coordinates::new(*latitude, *longitude));
        }
    }

    for request in requests {
        if let BaseRequest::Stop {
            name,
            road_distances,
            ..
        } = request
            && !road_distances.is_empty()
        {
            let distances: Vec<(&str, u32)> = road_distances
                .iter()
                .map(|(to, meters)| (to.as_str(), *meters))
                .collect();
            catalogue.add_distances(name, &distances)?;
        }
    }

    for request in requests {
        if let BaseRequest::Bus {
            name,
            stops,
            is_roundtrip,
        } = request
        {
            catalogue.add_route(name.clone(), *is_roundtrip, stops)?;
        }
    }

    if catalogue.is_empty() {
        warn!("base requests declare no stops");
    }
    info!(
        stops = catalogue.stop_count(),
        routes = catalogue.route_count(),
        "catalogue built"
    );
    Ok(catalogue)
}

/// Result of a single query.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Bus(RouteStatistics),
    Stop(BTreeSet<String>),
    Route(Itinerary),
    /// SVG document of the route map.
    Map(String),
    /// The named bus or stop does not exist, or no itinerary connects the stops.
    NotFound,
    /// The query could not be answered from this state.
    Failed(String),
}

/// Answers stat requests against a loaded state.
#[derive(Debug, Clone, Copy)]
pub struct RequestHandler<'a> {
    state: &'a TransportState,
}

impl<'a> RequestHandler<'a> {
    pub fn new(state: &'a TransportState) -> Self {
        Self { state }
    }

    /// Answer a query.
    pub fn answer(&self, query: &Query) -> Answer {
        let catalogue = &self.state.catalogue;
        match query {
            Query::Bus { name } => match catalogue.route_statistics(name) {
                Ok(Some(stats)) => Answer::Bus(stats),
                Ok(None) => Answer::NotFound,
                Err(err) => {
                    warn!(bus = %name, error = %err, "route statistics unavailable");
                    Answer::Failed(err.to_string())
                }
            },
            Query::Stop { name } => match catalogue.stop_buses(name) {
                StopBuses::Buses(buses) => Answer::Stop(buses),
                StopBuses::UnknownStop => Answer::NotFound,
            },
            Query::Route { from, to } => self.route(from, to),
            Query::Map => self.map(),
        }
    }

    fn route(&self, from: &str, to: &str) -> Answer {
        let Some(router) = &self.state.router else {
            return Answer::Failed(ROUTING_UNAVAILABLE.to_string());
        };
        let catalogue = &self.state.catalogue;
        let (Some(from), Some(to)) = (catalogue.find_stop(from), catalogue.find_stop(to)) else {
            return Answer::NotFound;
        };
        router
            .build_fastest_route(from, to)
            .map_or(Answer::NotFound, Answer::Route)
    }

    fn map(&self) -> Answer {
        let renderer = MapRenderer::new(&self.state.render_settings);
        match renderer.render(&self.state.catalogue) {
            Ok(svg) => Answer::Map(svg),
            Err(err) => {
                warn!(error = %err, "map rendering failed");
                Answer::Failed(err.to_string())
            }
        }
    }

    /// Answer a request and shape the result for output.
    pub fn respond(&self, request: &StatRequest) -> StatResponse {
        StatResponse {
            request_id: request.id,
            body: self.to_body(self.answer(&request.query)),
        }
    }

    fn to_body(&self, answer: Answer) -> ResponseBody {
        match answer {
            Answer::Bus(stats) => ResponseBody::Bus {
                curvature: stats.curvature,
                route_length: stats.route_length,
                stop_count: stats.stop_count,
                unique_stop_count: stats.unique_stop_count,
            },
            Answer::Stop(buses) => ResponseBody::Stop {
                buses: buses.into_iter().collect(),
            },
            Answer::Route(itinerary) => ResponseBody::Route {
                total_time: itinerary.total_time,
                items: itinerary.steps.iter().map(|s| self.to_item(s)).collect(),
            },
            Answer::Map(map) => ResponseBody::Map { map },
            Answer::NotFound => error_body(NOT_FOUND),
            Answer::Failed(message) => error_body(message),
        }
    }

    fn to_item(&self, step: &ItineraryStep) -> ItemDto {
        let catalogue = &self.state.catalogue;
        match *step {
            ItineraryStep::Wait { stop, time } => ItemDto::Wait {
                stop_name: catalogue.stop(stop).name.clone(),
                time,
            },
            ItineraryStep::Ride {
                route,
                span_count,
                time,
            } => ItemDto::Bus {
                bus: catalogue.route(route).name.clone(),
                span_count,
                time,
            },
        }
    }
}

fn error_body(message: impl Into<String>) -> ResponseBody {
    ResponseBody::Error {
        error_message: message.into(),
    }
}
