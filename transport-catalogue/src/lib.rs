//! Transport catalogue.
//!
//! Stores bus stops, routes and road distances, answers route statistics
//! and fastest-itinerary queries, draws the route map as SVG, and persists
//! everything to a binary snapshot so that building and serving can run as
//! separate processes.

pub mod catalogue;
pub mod domain;
pub mod graph;
pub mod render;
pub mod requests;
pub mod router;
pub mod snapshot;
pub mod state;
