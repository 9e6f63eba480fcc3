//! Domain types for the transport catalogue.
//!
//! Stops and routes are stored in append-only arenas and refer to each
//! other by dense integer ids. Nothing in this module knows about the
//! catalogue's lookup tables or the router's graph.

mod geo;
mod ids;
mod route;
mod stop;

pub use geo::{Coordinates, compute_distance};
pub use ids::{RouteId, StopId};
pub use route::Route;
pub use stop::Stop;
