//! Marker-delimited document splicing and footer bookkeeping.
//!
//! The snapshot document is free-form text owned by the user except for two
//! managed regions: the code region between the two marker lines, and the
//! trailing statistics footer bounded by 60-character `=` rules. Each run
//! rewrites exactly those two regions and nothing else, so notes kept
//! anywhere outside them survive every update. Both transforms here are
//! pure string functions.

/// Width of the `=` rule bounding the statistics footer.
pub const FOOTER_RULE_WIDTH: usize = 60;

/// The footer-bounding separator line.
pub fn footer_rule() -> String {
    "=".repeat(FOOTER_RULE_WIDTH)
}

/// The three-line statistics block closing every snapshot document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsFooter {
    pub included: usize,
    pub skipped: usize,
    pub timestamp: String,
}

impl StatsFooter {
    pub fn lines(&self) -> [String; 3] {
        [
            format!("FILES INCLUDED: {}", self.included),
            format!("SKIPPED (old versions or unindexed): {}", self.skipped),
            format!("SNAPSHOT AT: {}", self.timestamp),
        ]
    }
}

/// Replace the content between the two marker lines with `new_code`.
///
/// A marker line is any line whose trimmed content equals the marker token.
/// With fewer than two markers the document is fresh or hand-mangled; a
/// complete marker pair wrapping the new code is appended instead, leaving
/// the existing content untouched. With two or more markers, everything
/// through the first and everything from the second onward is preserved
/// verbatim and the interior is replaced wholesale. Surplus markers past
/// the second end up inside the preserved tail and are ignored.
pub fn splice_code(old_document: &str, new_code: &str, marker: &str) -> String {
    let lines: Vec<&str> = old_document.split('\n').collect();
    let marker_lines: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.trim() == marker)
        .map(|(index, _)| index)
        .collect();

    if marker_lines.len() < 2 {
        tracing::debug!(
            found = marker_lines.len(),
            "marker pair missing, appending fresh region"
        );
        return format!("{old_document}\n\n{marker}\n{new_code}\n{marker}\n");
    }

    let before = lines[..=marker_lines[0]].join("\n");
    let after = lines[marker_lines[1]..].join("\n");
    format!("{before}\n{new_code}\n{after}")
}

/// Rewrite the trailing statistics footer of an already-spliced document.
///
/// The footer is found from the end of the document. When the last
/// non-blank line is itself a separator rule, it closes an existing footer
/// and the cut lands on the matching opening rule above it, which makes
/// repeated refreshes idempotent apart from the timestamp. Otherwise the
/// cut lands on the last rule found anywhere. A document with no rule at
/// all keeps its text as-is; a missing footer is not worth failing over.
pub fn refresh_footer(document: &str, footer: &StatsFooter) -> String {
    let rule = footer_rule();
    let lines: Vec<&str> = document.split('\n').collect();

    let Some(last_content) = lines.iter().rposition(|line| !line.trim().is_empty()) else {
        return document.to_string();
    };

    let cut = if lines[last_content] == rule {
        lines[..last_content]
            .iter()
            .rposition(|line| **line == rule)
            .unwrap_or(last_content)
    } else {
        match lines.iter().rposition(|line| **line == rule) {
            Some(index) => index,
            None => {
                tracing::debug!("no footer separator found, leaving document unchanged");
                return document.to_string();
            }
        }
    };

    let mut rebuilt: Vec<String> = lines[..cut].iter().map(|line| line.to_string()).collect();
    rebuilt.push(rule.clone());
    rebuilt.extend(footer.lines());
    rebuilt.push(rule);
    rebuilt.join("\n")
}
