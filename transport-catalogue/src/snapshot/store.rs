//! Snapshot files on disk.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use super::{SnapshotError, decode, encode};
use crate::state::TransportState;

/// Where the snapshot lives.
///
/// Deserialises from the `serialization_settings` object of a request
/// document: `{"file": "transport.db"}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SnapshotConfig {
    /// Path to the snapshot file.
    #[serde(rename = "file")]
    pub path: PathBuf,
}

impl SnapshotConfig {
    /// Create a config for the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self::new("transport_catalogue.db")
    }
}

/// Reads and writes snapshot files.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    config: SnapshotConfig,
}

impl SnapshotStore {
    /// Create a store for the configured path.
    pub fn new(config: SnapshotConfig) -> Self {
        Self { config }
    }

    /// Write the state to the snapshot file.
    ///
    /// Creates parent directories if needed. The file is written next to
    /// its final location and renamed into place. A failed save leaves
    /// neither a half-written snapshot nor the temporary file behind.
    pub fn save(&self, state: &TransportState) -> Result<(), SnapshotError> {
        let bytes = encode(state)?;
        let path = self.path();
        let unwritable = |source| SnapshotError::Unwritable {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(unwritable)?;
        }

        let temp_path = path.with_extension("tmp");
        if let Err(err) =
            std::fs::write(&temp_path, &bytes).and_then(|()| std::fs::rename(&temp_path, path))
        {
            if let Err(cleanup) = std::fs::remove_file(&temp_path) {
                debug!(
                    path = %temp_path.display(),
                    error = %cleanup,
                    "temporary snapshot not removed"
                );
            }
            return Err(unwritable(err));
        }

        info!(path = %path.display(), bytes = bytes.len(), "snapshot written");
        Ok(())
    }

    /// Read the snapshot file and rebuild the state.
    ///
    /// Either the whole state is returned or an error; there is no partial
    /// result.
    pub fn load(&self) -> Result<TransportState, SnapshotError> {
        let path = self.path();
        let bytes = std::fs::read(path).map_err(|source| SnapshotError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "snapshot read");

        let state = decode(&bytes)?;
        info!(
            path = %path.display(),
            stops = state.catalogue.stop_count(),
            routes = state.catalogue.route_count(),
            "snapshot loaded"
        );
        Ok(state)
    }

    /// Get the snapshot file path.
    pub fn path(&self) -> &Path {
        &self.config.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::fixtures::reference_catalogue;
    use crate::render::RenderSettings;
    use crate::router::{RoutingSettings, TransportRouter};
    use tempfile::tempdir;

    fn state() -> TransportState {
        let catalogue = reference_catalogue();
        let router = TransportRouter::build(&catalogue, RoutingSettings::default()).unwrap();
        TransportState::new(catalogue, RenderSettings::default(), Some(router))
    }

    #[test]
    fn save_and_load() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(SnapshotConfig::new(dir.path().join("base.db")));

        let before = state();
        store.save(&before).unwrap();
        let after = store.load().unwrap();

        assert_eq!(after.catalogue.stop_count(), before.catalogue.stop_count());
        assert_eq!(
            after.catalogue.route_statistics("256"),
            before.catalogue.route_statistics("256")
        );
        assert!(after.router.is_some());
        assert!(!dir.path().join("base.tmp").exists());
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("dir").join("base.db");
        let store = SnapshotStore::new(SnapshotConfig::new(&path));

        store.save(&state()).unwrap();
        assert!(path.exists());
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn failed_rename_removes_temporary_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("base.db");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("occupant"), b"x").unwrap();
        let store = SnapshotStore::new(SnapshotConfig::new(&path));

        let err = store.save(&state()).unwrap_err();
        assert!(matches!(err, SnapshotError::Unwritable { .. }));
        assert!(!dir.path().join("base.tmp").exists());
        assert!(path.is_dir());
    }

    #[test]
    fn missing_file_is_unreadable() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(SnapshotConfig::new(dir.path().join("absent.db")));

        let err = store.load().unwrap_err();
        assert!(matches!(err, SnapshotError::Unreadable { .. }));
    }

    #[test]
    fn garbage_file_is_corrupt() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("base.db");
        std::fs::write(&path, b"definitely not a snapshot").unwrap();

        let err = SnapshotStore::new(SnapshotConfig::new(&path))
            .load()
            .unwrap_err();
        assert!(matches!(err, SnapshotError::Corrupt(_)));
    }

    #[test]
    fn config_from_json() {
        let config: SnapshotConfig =
            serde_json::from_str(r#"{"file": "transport_catalogue.db"}"#).unwrap();
        assert_eq!(config, SnapshotConfig::new("transport_catalogue.db"));
        assert_eq!(config, SnapshotConfig::default());
    }
}
