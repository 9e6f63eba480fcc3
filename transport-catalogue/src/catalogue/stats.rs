//! Route and stop statistics.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use super::{CatalogueError, TransportCatalogue};
use crate::domain::{Route, compute_distance};

/// Summary of a single route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStatistics {
    /// Stops passed through on one full trip, repeats included.
    pub stop_count: usize,

    /// Distinct stop names on the route.
    pub unique_stop_count: usize,

    /// Road length of one full trip, in meters.
    pub route_length: u64,

    /// Road length divided by great-circle length.
    pub curvature: f64,
}

/// Routes serving a stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopBuses {
    /// No stop with that name was ever added.
    UnknownStop,

    /// The stop exists; the set is empty when no route serves it.
    Buses(BTreeSet<String>),
}

impl StopBuses {
    /// Returns the route names, or `None` for an unknown stop.
    pub fn buses(&self) -> Option<&BTreeSet<String>> {
        match self {
            StopBuses::UnknownStop => None,
            StopBuses::Buses(buses) => Some(buses),
        }
    }
}

impl TransportCatalogue {
    /// Statistics for the named route.
    ///
    /// Returns `Ok(None)` if no route has that name. A consecutive stop pair
    /// without a road distance in either direction is an error rather than
    /// a zero-length hop.
    pub fn route_statistics(&self, name: &str) -> Result<Option<RouteStatistics>, CatalogueError> {
        let Some(id) = self.find_route(name) else {
            return Ok(None);
        };
        self.compute_statistics(self.route(id)).map(Some)
    }

    fn compute_statistics(&self, route: &Route) -> Result<RouteStatistics, CatalogueError> {
        let mut road_length: u64 = 0;
        let mut geo_length = 0.0;

        for (from, to) in route.hops() {
            road_length += u64::from(self.require_distance(from, to)?);
            if !route.circular {
                // The bus comes back the other way, which may be longer or shorter.
                road_length += u64::from(self.require_distance(to, from)?);
            }
            geo_length += compute_distance(self.stop(from).coordinates, self.stop(to).coordinates);
        }
        if !route.circular {
            geo_length *= 2.0;
        }

        let unique: HashSet<&str> = route
            .stops
            .iter()
            .map(|&id| self.stop(id).name.as_str())
            .collect();

        let curvature = if geo_length > 0.0 {
            road_length as f64 / geo_length
        } else {
            1.0
        };

        Ok(RouteStatistics {
            stop_count: route.stops_on_route(),
            unique_stop_count: unique.len(),
            route_length: road_length,
            curvature,
        })
    }

    /// Routes serving the named stop, sorted by name.
    pub fn stop_buses(&self, name: &str) -> StopBuses {
        match self.find_stop(name) {
            Some(id) => StopBuses::Buses(self.buses_at(id).clone()),
            None => StopBuses::UnknownStop,
        }
    }
}
