//! Arena-backed storage for stops, routes and distances.

use std::collections::{BTreeSet, HashMap};

use tracing::trace;

use super::CatalogueError;
use crate::domain::{Coordinates, Route, RouteId, Stop, StopId};

/// In-memory catalogue of stops, routes and road distances.
///
/// Stops and routes live in append-only arenas; every cross reference is a
/// [`StopId`] or [`RouteId`]. Names are resolved through separate indices.
///
/// Re-adding a stop or route under an existing name appends a second entity
/// and repoints the name index at it. The older entity stays in the arena
/// (and in any route that already references it). Callers should not rely on
/// this; it only exists so that duplicate input degrades predictably.
#[derive(Debug, Clone, Default)]
pub struct TransportCatalogue {
    stops: Vec<Stop>,
    stop_index: HashMap<String, StopId>,

    routes: Vec<Route>,
    route_index: HashMap<String, RouteId>,

    /// Names of the routes serving each stop, indexed by stop id.
    buses_by_stop: Vec<BTreeSet<String>>,

    /// Directed road distances in meters.
    distances: HashMap<(StopId, StopId), u32>,
}

impl TransportCatalogue {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop and return its id.
    ///
    /// If the name already exists, lookups by name resolve to the new stop
    /// from now on.
    pub fn add_stop(&mut self, name: impl Into<String>, coordinates: Coordinates) -> StopId {
        let id = StopId(self.stops.len());
        let stop = Stop::new(name, coordinates);
        trace!(stop = %stop.name, %id, "adding stop");
        self.stop_index.insert(stop.name.clone(), id);
        self.stops.push(stop);
        self.buses_by_stop.push(BTreeSet::new());
        id
    }

    /// Add a route over the named stops.
    ///
    /// Every stop name must already be present.
    pub fn add_route<S: AsRef<str>>(
        &mut self,
        name: impl Into<String>,
        circular: bool,
        stop_names: &[S],
    ) -> Result<RouteId, CatalogueError> {
        let stops = stop_names
            .iter()
            .map(|s| {
                self.find_stop(s.as_ref())
                    .ok_or_else(|| CatalogueError::UnknownStop(s.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.add_route_by_ids(name, circular, stops)
    }

    /// Add a route over already-resolved stop ids.
    pub fn add_route_by_ids(
        &mut self,
        name: impl Into<String>,
        circular: bool,
        stops: Vec<StopId>,
    ) -> Result<RouteId, CatalogueError> {
        let name = name.into();
        if stops.is_empty() {
            return Err(CatalogueError::EmptyRoute(name));
        }
        if let Some(bad) = stops.iter().find(|id| id.0 >= self.stops.len()) {
            return Err(CatalogueError::InvalidStopId(*bad));
        }

        let id = RouteId(self.routes.len());
        trace!(route = %name, %id, stops = stops.len(), circular, "adding route");
        for stop in &stops {
            self.buses_by_stop[stop.0].insert(name.clone());
        }
        self.route_index.insert(name.clone(), id);
        self.routes.push(Route {
            name,
            circular,
            stops,
        });
        Ok(id)
    }

    /// Record road distances from one stop to its neighbours, in meters.
    pub fn add_distances<S: AsRef<str>>(
        &mut self,
        from: &str,
        distances: &[(S, u32)],
    ) -> Result<(), CatalogueError> {
        let from_id = self
            .find_stop(from)
            .ok_or_else(|| CatalogueError::UnknownStop(from.to_string()))?;
        for (to, meters) in distances {
            let to_id = self
                .find_stop(to.as_ref())
                .ok_or_else(|| CatalogueError::UnknownStop(to.as_ref().to_string()))?;
            self.distances.insert((from_id, to_id), *meters);
        }
        Ok(())
    }

    /// Record a single directed distance between two stop ids.
    pub fn set_distance(
        &mut self,
        from: StopId,
        to: StopId,
        meters: u32,
    ) -> Result<(), CatalogueError> {
        for id in [from, to] {
            if id.0 >= self.stops.len() {
                return Err(CatalogueError::InvalidStopId(id));
            }
        }
        self.distances.insert((from, to), meters);
        Ok(())
    }

    /// Look up a stop by name.
    pub fn find_stop(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    /// Look up a route by name.
    pub fn find_route(&self, name: &str) -> Option<RouteId> {
        self.route_index.get(name).copied()
    }

    /// The stop with the given id.
    ///
    /// Ids are only meaningful for the catalogue that issued them; a foreign
    /// id panics.
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.0]
    }

    /// The route with the given id. Foreign ids panic.
    pub fn route(&self, id: RouteId) -> &Route {
        &self.routes[id.0]
    }

    /// Road distance from `from` to `to`, falling back to the reverse
    /// direction when only that one is known.
    pub fn get_distance(&self, from: StopId, to: StopId) -> Option<u32> {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
    }

    /// Like [`get_distance`](Self::get_distance) but reports a missing pair
    /// as an error naming both stops.
    pub fn require_distance(&self, from: StopId, to: StopId) -> Result<u32, CatalogueError> {
        self.get_distance(from, to)
            .ok_or_else(|| CatalogueError::UnknownDistance {
                from: self.stop(from).name.clone(),
                to: self.stop(to).name.clone(),
            })
    }

    /// Names of the routes serving a stop id, in lexicographic order.
    pub(super) fn buses_at(&self, id: StopId) -> &BTreeSet<String> {
        &self.buses_by_stop[id.0]
    }

    /// All stops in arena order.
    pub fn stops(&self) -> impl ExactSizeIterator<Item = (StopId, &Stop)> {
        self.stops.iter().enumerate().map(|(i, s)| (StopId(i), s))
    }

    /// All routes in arena order.
    pub fn routes(&self) -> impl ExactSizeIterator<Item = (RouteId, &Route)> {
        self.routes.iter().enumerate().map(|(i, r)| (RouteId(i), r))
    }

    /// All stored directed distances, sorted by stop ids.
    pub fn distances(&self) -> Vec<(StopId, StopId, u32)> {
        let mut all: Vec<_> = self
            .distances
            .iter()
            .map(|(&(from, to), &meters)| (from, to, meters))
            .collect();
        all.sort_unstable();
        all
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if no stops have been added.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}
