//! Fastest-itinerary router over the catalogue's bus network.
//!
//! Each stop becomes two graph vertices: an arrival vertex (just got off,
//! or just walked in) and a boarding vertex (on a bus). A wait edge joins
//! them, so the boarding wait is paid once per boarding. Travel edges run
//! from the boarding vertex of one stop to the arrival vertex of any later
//! stop on the same route, which lets a multi-stop ride avoid repeated
//! waits.

mod config;
mod itinerary;
mod transport;

pub use config::RoutingSettings;
pub use itinerary::{Itinerary, ItineraryStep};
pub use transport::{RouterError, StopVertices, TransportRouter};
