//! Binary snapshots of the full runtime state.
//!
//! A snapshot holds the catalogue, the render settings and, optionally,
//! the router's graph together with its precomputed path table, so a serve
//! process can answer queries without rebuilding anything. Live entities
//! are keyed by arena ids; on disk they become dense `u32` ids that are
//! resolved back in dependency order (stops, then routes and distances,
//! then the router).

mod codec;
mod error;
mod format;
mod store;

pub use codec::{decode, encode};
pub use error::SnapshotError;
pub use store::{SnapshotConfig, SnapshotStore};
