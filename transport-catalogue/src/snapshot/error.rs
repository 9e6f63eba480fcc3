//! Snapshot error types.

use std::path::PathBuf;

use crate::catalogue::CatalogueError;
use crate::router::RouterError;

/// Errors from writing or reading a snapshot.
///
/// Any error while loading means nothing was installed.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The snapshot file could not be read
    #[error("cannot read snapshot {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file could not be written
    #[error("cannot write snapshot {path}: {source}")]
    Unwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Binary encoding failed
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    /// Binary decoding failed
    #[error("corrupt snapshot: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    /// Decoded data is inconsistent
    #[error("corrupt snapshot: {0}")]
    Corrupt(String),

    /// Stored catalogue data was rejected
    #[error("corrupt snapshot catalogue: {0}")]
    Catalogue(#[from] CatalogueError),

    /// Stored router data was rejected
    #[error("corrupt snapshot router: {0}")]
    Router(#[from] RouterError),

    /// A count or id does not fit the on-disk integer width
    #[error("{0} too large for the snapshot format")]
    TooLarge(&'static str),
}
