//! Directed weighted graph and an all-pairs shortest-path router.
//!
//! The router precomputes a vertex-by-vertex table of best weights and
//! predecessor edges. The table is exported verbatim for snapshots and can
//! be reattached later without re-running the search.

mod digraph;
mod error;
mod router;

pub use digraph::{DirectedWeightedGraph, Edge, EdgeId, VertexId};
pub use error::GraphError;
pub use router::{RouteInfo, RouteInternalData, Router, RoutesInternalData};
