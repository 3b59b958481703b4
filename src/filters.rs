//! Include/exclude filter file loading and matching.
//!
//! The filter file is two labeled glob lists. A `# INCLUDE` header line opens
//! the include section, `# EXCLUDE` the exclude section; any other `#` line
//! is a comment. A missing or unreadable file falls back to the built-in
//! defaults, never to an error.
use crate::config::SnapshotConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const INCLUDE_HEADER: &str = "# INCLUDE";
const EXCLUDE_HEADER: &str = "# EXCLUDE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl FilterSet {
    /// Filters used when the project has no filter file at all.
    pub fn defaults() -> Self {
        Self {
            include: ["*.py", "*.js", "*.html", "*.css", "*.json", "*.md"]
                .map(String::from)
                .to_vec(),
            exclude: [".git", "node_modules", "__pycache__", "*.log"]
                .map(String::from)
                .to_vec(),
        }
    }
}

/// Load the filter set for a project, defaulting when the file is absent.
///
/// Read failures degrade to an empty file: the section parser then yields an
/// empty set, which behaves as "include everything". Content that is not
/// valid UTF-8 is decoded lossily so a legacy-encoded filter file still
/// contributes its ASCII patterns.
pub fn load_filters(project_root: &Path, config: &SnapshotConfig) -> FilterSet {
    let path = config.filters_path(project_root);
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "no filter file, using defaults");
        return FilterSet::defaults();
    }

    let content = match fs::read(&path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(err) => {
            eprintln!("warning: cannot read {}: {err}", path.display());
            String::new()
        }
    };
    parse_filters(&content)
}

/// Parse filter file content into its two pattern lists.
pub fn parse_filters(content: &str) -> FilterSet {
    enum Section {
        None,
        Include,
        Exclude,
    }

    let mut filters = FilterSet {
        include: Vec::new(),
        exclude: Vec::new(),
    };
    let mut section = Section::None;

    for line in content.lines() {
        let line = line.trim();
        if line.starts_with(INCLUDE_HEADER) {
            section = Section::Include;
        } else if line.starts_with(EXCLUDE_HEADER) {
            section = Section::Exclude;
        } else if line.is_empty() || line.starts_with('#') {
            continue;
        } else {
            match section {
                Section::Include => filters.include.push(line.to_string()),
                Section::Exclude => filters.exclude.push(line.to_string()),
                Section::None => {}
            }
        }
    }

    filters
}

/// Decide whether a candidate file passes the filter set.
///
/// Exclude patterns match either a literal segment of the relative path
/// (so `.git` prunes anything under a `.git` directory) or the file name as
/// a glob. Both checks are case-sensitive; that mirrors the literal rule the
/// tool has always applied, case-folding filesystems notwithstanding. With a
/// non-empty include list the file name must glob-match at least one entry.
pub fn should_include(rel_path: &Path, file_name: &str, filters: &FilterSet) -> bool {
    for pattern in &filters.exclude {
        let is_segment = rel_path
            .components()
            .any(|component| component.as_os_str() == pattern.as_str());
        if is_segment || glob_matches(pattern, file_name) {
            return false;
        }
    }

    if filters.include.is_empty() {
        return true;
    }
    filters
        .include
        .iter()
        .any(|pattern| glob_matches(pattern, file_name))
}

fn glob_matches(pattern: &str, file_name: &str) -> bool {
    match glob::Pattern::new(pattern) {
        Ok(pattern) => pattern.matches(file_name),
        Err(err) => {
            tracing::warn!(pattern, %err, "ignoring malformed glob pattern");
            false
        }
    }
}

/// Write the starter filter file for a new project.
pub fn write_default_filters(path: &Path) -> Result<()> {
    fs::write(path, crate::templates::DEFAULT_FILTERS_FILE)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parses_both_sections() {
        let content = "# INCLUDE\n*.py\n*.rs\n\n# EXCLUDE\n.git\ntarget\n";
        let filters = parse_filters(content);
        assert_eq!(filters.include, vec!["*.py", "*.rs"]);
        assert_eq!(filters.exclude, vec![".git", "target"]);
    }

    #[test]
    fn skips_comments_and_lines_outside_sections() {
        let content = "*.orphan\n# INCLUDE\n# just a comment\n*.py\n";
        let filters = parse_filters(content);
        assert_eq!(filters.include, vec!["*.py"]);
        assert!(filters.exclude.is_empty());
    }

    #[test]
    fn empty_content_yields_empty_set() {
        let filters = parse_filters("");
        assert!(filters.include.is_empty());
        assert!(filters.exclude.is_empty());
    }

    #[test]
    fn exclude_matches_literal_path_segments() {
        let filters = FilterSet {
            include: vec!["*.py".to_string()],
            exclude: vec![".git".to_string()],
        };
        let rel = PathBuf::from(".git/hooks/pre-commit-01.py");
        assert!(!should_include(&rel, "pre-commit-01.py", &filters));
    }

    #[test]
    fn exclude_matches_file_name_globs() {
        let filters = FilterSet {
            include: vec![],
            exclude: vec!["*.log".to_string()],
        };
        assert!(!should_include(Path::new("run-01.log"), "run-01.log", &filters));
        assert!(should_include(Path::new("run-01.py"), "run-01.py", &filters));
    }

    #[test]
    fn include_list_gates_by_file_name() {
        let filters = FilterSet {
            include: vec!["*.py".to_string()],
            exclude: vec![],
        };
        assert!(should_include(Path::new("app-01.py"), "app-01.py", &filters));
        assert!(!should_include(Path::new("app-01.rb"), "app-01.rb", &filters));
    }

    #[test]
    fn empty_include_list_admits_everything() {
        let filters = parse_filters("# EXCLUDE\n.git\n");
        assert!(should_include(Path::new("anything.xyz"), "anything.xyz", &filters));
    }

    #[test]
    fn malformed_glob_never_matches() {
        let filters = FilterSet {
            include: vec!["[".to_string()],
            exclude: vec![],
        };
        assert!(!should_include(Path::new("a.py"), "a.py", &filters));
    }

    #[test]
    fn defaults_cover_common_source_types() {
        let filters = FilterSet::defaults();
        assert!(should_include(Path::new("app-01.py"), "app-01.py", &filters));
        assert!(!should_include(Path::new("debug.log"), "debug.log", &filters));
    }
}
