//! Request layer error types.

use crate::catalogue::CatalogueError;
use crate::router::RouterError;
use crate::snapshot::SnapshotError;

/// Failure of a whole build or serve run.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The input document is not valid JSON or has the wrong shape
    #[error("malformed request document: {0}")]
    Json(#[from] serde_json::Error),

    /// Base requests contradict each other
    #[error("invalid base requests: {0}")]
    Catalogue(#[from] CatalogueError),

    /// The router could not be built
    #[error("failed to build router: {0}")]
    Router(#[from] RouterError),

    /// Snapshot could not be written or read
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}
