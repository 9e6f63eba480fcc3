//! On-disk layout of a snapshot.
//!
//! The file starts with a fixed header (`MAGIC` then the little-endian
//! format version) followed by a bincode-encoded [`SnapshotDocument`].
//! All cross references inside the document are dense `u32` ids.

use serde::{Deserialize, Serialize};

use crate::render::RenderSettings;
use crate::router::RoutingSettings;

pub(super) const MAGIC: [u8; 4] = *b"TCSN";
pub(super) const FORMAT_VERSION: u32 = 1;
pub(super) const HEADER_LEN: usize = MAGIC.len() + 4;

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct SnapshotDocument {
    pub catalogue: CatalogueSection,
    pub render_settings: RenderSettings,
    pub router: Option<RouterSection>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct CatalogueSection {
    pub stops: Vec<StopRecord>,
    pub routes: Vec<RouteRecord>,
    pub distances: Vec<DistanceRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct StopRecord {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct RouteRecord {
    pub name: String,
    pub circular: bool,
    pub stops: Vec<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct DistanceRecord {
    pub from: u32,
    pub to: u32,
    pub meters: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct RouterSection {
    pub settings: RoutingSettings,
    pub graph: GraphRecord,
    pub stop_vertices: Vec<StopVerticesRecord>,
    /// Row per source vertex, cell per target vertex.
    pub internal_data: Vec<Vec<Option<PathRecord>>>,
    /// Step per graph edge, in edge id order.
    pub edge_steps: Vec<StepRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct GraphRecord {
    pub vertex_count: u32,
    pub edges: Vec<EdgeRecord>,
    pub incidence_lists: Vec<Vec<u32>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct EdgeRecord {
    pub from: u32,
    pub to: u32,
    pub weight: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct StopVerticesRecord {
    pub stop: u32,
    pub arrival: u32,
    pub boarding: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub(super) struct PathRecord {
    pub weight: f64,
    pub prev_edge: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) enum StepRecord {
    Wait {
        stop: u32,
        time: f64,
    },
    Ride {
        route: u32,
        span_count: u32,
        time: f64,
    },
}
