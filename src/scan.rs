//! Candidate discovery: recursive walk plus filter and reserved-name checks.
use crate::config::SnapshotConfig;
use crate::filters::{should_include, FilterSet};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One project file that survived filtering, before version grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub rel_path: PathBuf,
    pub file_name: String,
}

/// Enumerate filter-passing files under the project root.
///
/// Entries come back sorted by file name at each directory level, which
/// makes the scan order (and therefore the version tie-break) deterministic
/// across platforms. Unreadable directory entries are reported and skipped,
/// never fatal. The snapshot document and the filter file themselves are
/// never candidates.
pub fn collect_candidates(
    project_root: &Path,
    filters: &FilterSet,
    config: &SnapshotConfig,
) -> Vec<CandidateFile> {
    let mut candidates = Vec::new();

    for entry in WalkDir::new(project_root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("warning: skipping unreadable entry: {err}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        if config.is_reserved(&file_name) {
            continue;
        }

        let rel_path = match entry.path().strip_prefix(project_root) {
            Ok(rel) => rel.to_path_buf(),
            // Walk roots always prefix their entries; keep the full path if not.
            Err(_) => entry.path().to_path_buf(),
        };
        if !should_include(&rel_path, &file_name, filters) {
            continue;
        }

        candidates.push(CandidateFile {
            path: entry.path().to_path_buf(),
            rel_path,
            file_name,
        });
    }

    tracing::debug!(count = candidates.len(), "collected candidates");
    candidates
}
