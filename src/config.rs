//! Process-wide snapshot constants, injected as a value so tests can vary them.
use std::path::{Path, PathBuf};

/// Default name of the rolling snapshot document.
pub const SNAPSHOT_FILE_NAME: &str = "project_for_ai.txt";

/// Default name of the include/exclude filter file.
pub const FILTERS_FILE_NAME: &str = "filters.txt";

/// Token that, alone on a line, delimits the managed code region.
pub const MARKER: &str = "***";

/// Names and tokens that shape a snapshot run.
///
/// Both core components receive this by reference instead of reading free
/// globals, so the marker token and reserved file names can be swapped in
/// tests without touching process state.
#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    pub marker: String,
    pub snapshot_file_name: String,
    pub filters_file_name: String,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            marker: MARKER.to_string(),
            snapshot_file_name: SNAPSHOT_FILE_NAME.to_string(),
            filters_file_name: FILTERS_FILE_NAME.to_string(),
        }
    }
}

impl SnapshotConfig {
    /// File names that are never treated as snapshot candidates.
    pub fn is_reserved(&self, file_name: &str) -> bool {
        file_name == self.snapshot_file_name || file_name == self.filters_file_name
    }

    pub fn snapshot_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.snapshot_file_name)
    }

    pub fn filters_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.filters_file_name)
    }
}
