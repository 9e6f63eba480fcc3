//! Conversion between [`TransportState`] and snapshot bytes.

use tracing::debug;

use super::SnapshotError;
use super::format::{
    CatalogueSection, DistanceRecord, EdgeRecord, FORMAT_VERSION, GraphRecord, HEADER_LEN, MAGIC,
    PathRecord, RouteRecord, RouterSection, SnapshotDocument, StepRecord, StopRecord,
    StopVerticesRecord,
};
use crate::catalogue::TransportCatalogue;
use crate::domain::{Coordinates, RouteId, StopId};
use crate::graph::{DirectedWeightedGraph, Edge, RouteInternalData};
use crate::router::{ItineraryStep, RouterError, StopVertices, TransportRouter};
use crate::state::TransportState;

fn bincode_config() -> bincode::config::Configuration {
    bincode::config::standard()
}

/// Serialize the full state to snapshot bytes.
pub fn encode(state: &TransportState) -> Result<Vec<u8>, SnapshotError> {
    let document = SnapshotDocument {
        catalogue: catalogue_section(&state.catalogue)?,
        render_settings: state.render_settings.clone(),
        router: state.router.as_ref().map(router_section).transpose()?,
    };

    let mut bytes = Vec::with_capacity(HEADER_LEN);
    bytes.extend_from_slice(&MAGIC);
    bytes.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    bytes.extend(bincode::serde::encode_to_vec(&document, bincode_config())?);
    Ok(bytes)
}

/// Rebuild the full state from snapshot bytes.
///
/// The router, if present, is restored from its stored graph and table;
/// no path search runs.
pub fn decode(bytes: &[u8]) -> Result<TransportState, SnapshotError> {
    if bytes.len() < HEADER_LEN || bytes[..MAGIC.len()] != MAGIC {
        return Err(SnapshotError::Corrupt("missing snapshot header".into()));
    }
    let mut version = [0u8; 4];
    version.copy_from_slice(&bytes[MAGIC.len()..HEADER_LEN]);
    let version = u32::from_le_bytes(version);
    if version != FORMAT_VERSION {
        return Err(SnapshotError::Corrupt(format!(
            "unsupported format version {version}"
        )));
    }

    let payload = &bytes[HEADER_LEN..];
    let (document, read): (SnapshotDocument, usize) =
        bincode::serde::decode_from_slice(payload, bincode_config())?;
    if read != payload.len() {
        return Err(SnapshotError::Corrupt(format!(
            "{} trailing bytes",
            payload.len() - read
        )));
    }

    let (catalogue, stop_ids, route_ids) = restore_catalogue(document.catalogue)?;
    let router = document
        .router
        .map(|section| restore_router(section, &stop_ids, &route_ids))
        .transpose()?;

    debug!(
        stops = catalogue.stop_count(),
        routes = catalogue.route_count(),
        has_router = router.is_some(),
        "snapshot decoded"
    );

    Ok(TransportState {
        catalogue,
        render_settings: document.render_settings,
        router,
    })
}

fn to_u32(value: usize, what: &'static str) -> Result<u32, SnapshotError> {
    u32::try_from(value).map_err(|_| SnapshotError::TooLarge(what))
}

fn catalogue_section(catalogue: &TransportCatalogue) -> Result<CatalogueSection, SnapshotError> {
    // Arena order is the iteration order, so a stop's dense id is its index.
    let stops: Vec<StopRecord> = catalogue
        .stops()
        .map(|(_, stop)| StopRecord {
            name: stop.name.clone(),
            lat: stop.coordinates.lat,
            lng: stop.coordinates.lng,
        })
        .collect();

    let routes: Vec<RouteRecord> = catalogue
        .routes()
        .map(|(_, route)| {
            Ok::<_, SnapshotError>(RouteRecord {
                name: route.name.clone(),
                circular: route.circular,
                stops: route
                    .stops
                    .iter()
                    .map(|id| to_u32(id.index(), "stop id"))
                    .collect::<Result<_, _>>()?,
            })
        })
        .collect::<Result<_, SnapshotError>>()?;

    let distances: Vec<DistanceRecord> = catalogue
        .distances()
        .into_iter()
        .map(|(from, to, meters)| {
            Ok::<_, SnapshotError>(DistanceRecord {
                from: to_u32(from.index(), "stop id")?,
                to: to_u32(to.index(), "stop id")?,
                meters,
            })
        })
        .collect::<Result<_, SnapshotError>>()?;

    Ok(CatalogueSection {
        stops,
        routes,
        distances,
    })
}

fn router_section(router: &TransportRouter) -> Result<RouterSection, SnapshotError> {
    let graph = router.graph();

    let edges: Vec<EdgeRecord> = graph
        .edges()
        .iter()
        .map(|edge| {
            Ok::<_, SnapshotError>(EdgeRecord {
                from: to_u32(edge.from, "vertex id")?,
                to: to_u32(edge.to, "vertex id")?,
                weight: edge.weight,
            })
        })
        .collect::<Result<_, SnapshotError>>()?;

    let incidence_lists: Vec<Vec<u32>> = graph
        .incidence_lists()
        .iter()
        .map(|list| {
            list.iter()
                .map(|&edge| to_u32(edge, "edge id"))
                .collect::<Result<Vec<_>, SnapshotError>>()
        })
        .collect::<Result<_, SnapshotError>>()?;

    let stop_vertices: Vec<StopVerticesRecord> = router
        .stop_vertices()
        .iter()
        .enumerate()
        .map(|(stop, vertices)| {
            Ok::<_, SnapshotError>(StopVerticesRecord {
                stop: to_u32(stop, "stop id")?,
                arrival: to_u32(vertices.arrival, "vertex id")?,
                boarding: to_u32(vertices.boarding, "vertex id")?,
            })
        })
        .collect::<Result<_, SnapshotError>>()?;

    let internal_data: Vec<Vec<Option<PathRecord>>> = router
        .internal_data()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.as_ref().map(path_record).transpose())
                .collect::<Result<Vec<_>, SnapshotError>>()
        })
        .collect::<Result<_, SnapshotError>>()?;

    let edge_steps: Vec<StepRecord> = router
        .edge_steps()
        .iter()
        .map(|step| {
            Ok::<_, SnapshotError>(match *step {
                ItineraryStep::Wait { stop, time } => StepRecord::Wait {
                    stop: to_u32(stop.index(), "stop id")?,
                    time,
                },
                ItineraryStep::Ride {
                    route,
                    span_count,
                    time,
                } => StepRecord::Ride {
                    route: to_u32(route.index(), "route id")?,
                    span_count: to_u32(span_count, "span count")?,
                    time,
                },
            })
        })
        .collect::<Result<_, SnapshotError>>()?;

    Ok(RouterSection {
        settings: *router.settings(),
        graph: GraphRecord {
            vertex_count: to_u32(graph.vertex_count(), "vertex count")?,
            edges,
            incidence_lists,
        },
        stop_vertices,
        internal_data,
        edge_steps,
    })
}

fn path_record(data: &RouteInternalData) -> Result<PathRecord, SnapshotError> {
    Ok(PathRecord {
        weight: data.weight,
        prev_edge: data
            .prev_edge
            .map(|edge| to_u32(edge, "edge id"))
            .transpose()?,
    })
}

/// Rebuild the catalogue, returning it with the stored-id to live-id maps.
fn restore_catalogue(
    section: CatalogueSection,
) -> Result<(TransportCatalogue, Vec<StopId>, Vec<RouteId>), SnapshotError> {
    let mut catalogue = TransportCatalogue::new();

    let stop_ids: Vec<StopId> = section
        .stops
        .into_iter()
        .map(|stop| catalogue.add_stop(stop.name, Coordinates::new(stop.lat, stop.lng)))
        .collect();

    let mut route_ids = Vec::with_capacity(section.routes.len());
    for route in section.routes {
        let stops = route
            .stops
            .iter()
            .map(|&raw| resolve(&stop_ids, raw, "stop"))
            .collect::<Result<Vec<_>, _>>()?;
        route_ids.push(catalogue.add_route_by_ids(route.name, route.circular, stops)?);
    }

    for distance in section.distances {
        let from = resolve(&stop_ids, distance.from, "stop")?;
        let to = resolve(&stop_ids, distance.to, "stop")?;
        catalogue.set_distance(from, to, distance.meters)?;
    }

    Ok((catalogue, stop_ids, route_ids))
}

fn restore_router(
    section: RouterSection,
    stop_ids: &[StopId],
    route_ids: &[RouteId],
) -> Result<TransportRouter, SnapshotError> {
    let edges = section
        .graph
        .edges
        .iter()
        .map(|edge| Edge {
            from: edge.from as usize,
            to: edge.to as usize,
            weight: edge.weight,
        })
        .collect();
    let incidence_lists = section
        .graph
        .incidence_lists
        .into_iter()
        .map(|list| list.into_iter().map(|edge| edge as usize).collect())
        .collect();
    let graph = DirectedWeightedGraph::from_parts(
        section.graph.vertex_count as usize,
        edges,
        incidence_lists,
    )
    .map_err(RouterError::from)?;

    let mut slots: Vec<Option<StopVertices>> = vec![None; stop_ids.len()];
    for record in &section.stop_vertices {
        let stop = resolve(stop_ids, record.stop, "stop")?;
        let slot = &mut slots[stop.index()];
        if slot.is_some() {
            return Err(SnapshotError::Corrupt(format!(
                "stop {} mapped to vertices twice",
                record.stop
            )));
        }
        *slot = Some(StopVertices {
            arrival: record.arrival as usize,
            boarding: record.boarding as usize,
        });
    }
    let stop_vertices = slots
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| SnapshotError::Corrupt("stop without graph vertices".into()))?;

    let edge_steps: Vec<ItineraryStep> = section
        .edge_steps
        .iter()
        .map(|step| {
            Ok::<_, SnapshotError>(match *step {
                StepRecord::Wait { stop, time } => ItineraryStep::Wait {
                    stop: resolve(stop_ids, stop, "stop")?,
                    time,
                },
                StepRecord::Ride {
                    route,
                    span_count,
                    time,
                } => ItineraryStep::Ride {
                    route: resolve(route_ids, route, "route")?,
                    span_count: span_count as usize,
                    time,
                },
            })
        })
        .collect::<Result<_, SnapshotError>>()?;

    let table = section
        .internal_data
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| {
                    cell.map(|record| RouteInternalData {
                        weight: record.weight,
                        prev_edge: record.prev_edge.map(|edge| edge as usize),
                    })
                })
                .collect()
        })
        .collect();

    Ok(TransportRouter::from_parts(
        section.settings,
        graph,
        stop_vertices,
        edge_steps,
        table,
    )?)
}

/// Map a stored dense id to the live id it was assigned on load.
fn resolve<T: Copy>(ids: &[T], raw: u32, what: &str) -> Result<T, SnapshotError> {
    ids.get(raw as usize)
        .copied()
        .ok_or_else(|| SnapshotError::Corrupt(format!("unknown {what} id {raw}")))
}
