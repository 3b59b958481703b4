//! Starter file contents written by project initialization.
use crate::document::{footer_rule, StatsFooter};

/// Contents of the starter `filters.txt`.
pub const DEFAULT_FILTERS_FILE: &str = "\
# INCLUDE
*.py
*.js
*.html
*.css
*.json
*.md
*.txt
*.sh
*.yml
*.yaml
*.toml
*.ini
*.cfg
*.xml
*.sql
*.java
*.cpp
*.c
*.h
*.hpp
*.go
*.rs
*.php
*.rb
*.pl
*.lua
*.swift
*.kt
*.dart

# EXCLUDE
.git
node_modules
__pycache__
*.log
*.tmp
*.bak
venv
.venv
dist
build
target
.vscode
.idea
*.egg-info
*.pyc
*.pyo
.env
*.env
";

/// Placeholder shown between the markers until the first real update.
pub const EMPTY_REGION_PLACEHOLDER: &str =
    "\n# Project code will appear here after the first run\n";

/// Build a complete fresh snapshot document.
///
/// Used both by `init` (with the placeholder region and a zeroed footer) and
/// by an update that finds no existing document (with real code and counts).
/// The preamble above the markers is a scaffold for the user's own notes;
/// every later run leaves it alone.
pub fn starter_document(
    project_name: &str,
    created: &str,
    marker: &str,
    code_region: &str,
    footer: &StatsFooter,
) -> String {
    let rule = footer_rule();
    let mut lines: Vec<String> = vec![
        rule.clone(),
        format!("PROJECT: {project_name}"),
        format!("CREATED: {created}"),
        rule.clone(),
        String::new(),
        "# HISTORY AND RULES".to_string(),
        String::new(),
        "## Idea".to_string(),
        "Describe the project idea...".to_string(),
        String::new(),
        "## RULES FOR THE AI:".to_string(),
        "-- only files with a numeric index in the name are included (e.g. script-01.py)"
            .to_string(),
        "-- all other files are ignored".to_string(),
        "-- the latest version of each base name is kept".to_string(),
        "-- groups are separated by a ==================== line".to_string(),
        String::new(),
        "DEVELOPMENT HISTORY".to_string(),
        "ITERATIONS AND NOTES:".to_string(),
        String::new(),
        rule.clone(),
        "FIRST SNAPSHOT".to_string(),
        rule.clone(),
        String::new(),
        marker.to_string(),
        code_region.to_string(),
        marker.to_string(),
        String::new(),
        rule.clone(),
    ];
    lines.extend(footer.lines());
    lines.push(rule);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MARKER;
    use crate::document::{refresh_footer, splice_code};
    use crate::filters::parse_filters;

    fn zero_footer() -> StatsFooter {
        StatsFooter {
            included: 0,
            skipped: 0,
            timestamp: "2026-01-01 00:00".to_string(),
        }
    }

    #[test]
    fn starter_document_is_well_formed() {
        let doc = starter_document(
            "demo",
            "2026-01-01 00:00",
            MARKER,
            EMPTY_REGION_PLACEHOLDER,
            &zero_footer(),
        );
        let marker_lines = doc.lines().filter(|line| line.trim() == MARKER).count();
        assert_eq!(marker_lines, 2);
        assert!(doc.contains("PROJECT: demo"));
        assert!(doc.contains("FILES INCLUDED: 0"));
        assert!(doc.ends_with(&footer_rule()));
    }

    #[test]
    fn starter_document_survives_a_splice_and_refresh() {
        let doc = starter_document(
            "demo",
            "2026-01-01 00:00",
            MARKER,
            EMPTY_REGION_PLACEHOLDER,
            &zero_footer(),
        );
        let spliced = splice_code(&doc, "--- app-01.py ---\nprint('hi')\n", MARKER);
        let refreshed = refresh_footer(
            &spliced,
            &StatsFooter {
                included: 1,
                skipped: 0,
                timestamp: "2026-08-29 12:00".to_string(),
            },
        );

        assert!(refreshed.contains("print('hi')"));
        assert!(refreshed.contains("# HISTORY AND RULES"));
        assert!(refreshed.contains("FILES INCLUDED: 1"));
        assert!(!refreshed.contains("FILES INCLUDED: 0"));
        assert!(!refreshed.contains("Project code will appear here"));
    }

    #[test]
    fn default_filters_file_parses_into_both_sections() {
        let filters = parse_filters(DEFAULT_FILTERS_FILE);
        assert!(filters.include.contains(&"*.py".to_string()));
        assert!(filters.include.contains(&"*.rs".to_string()));
        assert!(filters.exclude.contains(&".git".to_string()));
        assert!(filters.exclude.contains(&"target".to_string()));
    }
}
