//! Filename version parsing and latest-version selection.
//!
//! Only files whose name ends in a numeric index (`app-02.py`, `core_3.js`,
//! `script07.sh`) participate in a snapshot. Files in the same family (same
//! stripped base name and extension) collapse to the single highest-numbered
//! member; everything else is reported as skipped.
use crate::scan::CandidateFile;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static SUFFIX_WITH_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_](\d+)$").unwrap());
static SUFFIX_BARE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)$").unwrap());

/// Parsed version index of a filename.
///
/// `family_key` is the stripped base name with the extension re-appended, so
/// `x-01.py` and `x-01.js` never land in the same family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionStamp {
    pub family_key: String,
    pub version: u64,
}

/// Latest retained file per family, keyed for lexicographic iteration.
pub type LatestMap<'a> = BTreeMap<String, &'a CandidateFile>;

/// Older family members displaced by a newer version, for operator display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupersededReport {
    pub latest_name: String,
    pub replaced_names: Vec<String>,
}

/// Parse the numeric version index out of a filename.
///
/// The name part (before the last `.`) is matched against two anchored
/// patterns in order: `-NN`/`_NN` at the end, then a bare trailing digit run.
/// Names without a trailing digit run, and names that are nothing but the
/// digit run (`01.py`), carry no stamp. Returning `Option` instead of an
/// error keeps "no index" what it is: the normal outcome for most files.
pub fn extract_version_stamp(filename: &str) -> Option<VersionStamp> {
    let (name_part, extension) = match filename.rsplit_once('.') {
        Some((name, ext)) => (name, format!(".{ext}")),
        None => (filename, String::new()),
    };

    let (base, digits) = if let Some(caps) = SUFFIX_WITH_SEPARATOR.captures(name_part) {
        let digits = caps.get(1).map(|m| m.as_str())?;
        (&name_part[..name_part.len() - digits.len() - 1], digits)
    } else if let Some(caps) = SUFFIX_BARE.captures(name_part) {
        let digits = caps.get(1).map(|m| m.as_str())?;
        (&name_part[..name_part.len() - digits.len()], digits)
    } else {
        return None;
    };

    // A digit run wider than u64 is treated as unindexed rather than panicking.
    let version: u64 = digits.parse().ok()?;

    let base = base.trim_end_matches(['-', '_']);
    if base.is_empty() {
        // Purely numeric names like "01.py" are not versions of anything.
        return None;
    }

    Some(VersionStamp {
        family_key: format!("{base}{extension}"),
        version,
    })
}

/// Group candidates by family and keep the highest version per family.
///
/// Candidates without a version stamp are dropped silently. Within a family
/// the numerically largest version wins; when two members carry the same
/// number, the one supplied last (directory-scan order) wins. Displaced
/// members come back in the superseded reports so the caller can log them.
pub fn group_latest_versions(files: &[CandidateFile]) -> (LatestMap<'_>, Vec<SupersededReport>) {
    let mut families: BTreeMap<String, Vec<(u64, &CandidateFile)>> = BTreeMap::new();

    for file in files {
        let Some(stamp) = extract_version_stamp(&file.file_name) else {
            tracing::debug!(file = %file.file_name, "no version index, skipping");
            continue;
        };
        families
            .entry(stamp.family_key)
            .or_default()
            .push((stamp.version, file));
    }

    let mut latest = LatestMap::new();
    let mut superseded = Vec::new();

    for (family_key, members) in families {
        let mut winner = members[0];
        for member in &members[1..] {
            // `>=` keeps the last-supplied member on version ties.
            if member.0 >= winner.0 {
                winner = *member;
            }
        }

        if members.len() > 1 {
            let replaced_names = members
                .iter()
                .filter(|(_, file)| !std::ptr::eq(*file, winner.1))
                .map(|(_, file)| file.file_name.clone())
                .collect();
            superseded.push(SupersededReport {
                latest_name: winner.1.file_name.clone(),
                replaced_names,
            });
        }

        latest.insert(family_key, winner.1);
    }

    (latest, superseded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn candidate(name: &str) -> CandidateFile {
        CandidateFile {
            path: PathBuf::from(format!("/project/{name}")),
            rel_path: PathBuf::from(name),
            file_name: name.to_string(),
        }
    }

    fn stamp(base: &str, version: u64) -> Option<VersionStamp> {
        Some(VersionStamp {
            family_key: base.to_string(),
            version,
        })
    }

    #[test]
    fn parses_separator_suffixes() {
        assert_eq!(extract_version_stamp("core-02.py"), stamp("core.py", 2));
        assert_eq!(extract_version_stamp("core_11.js"), stamp("core.js", 11));
        assert_eq!(extract_version_stamp("a-01.py"), stamp("a.py", 1));
    }

    #[test]
    fn parses_bare_digit_suffixes() {
        assert_eq!(extract_version_stamp("script02.sh"), stamp("script.sh", 2));
        assert_eq!(extract_version_stamp("v2plan3.md"), stamp("v2plan.md", 3));
    }

    #[test]
    fn handles_missing_extension() {
        assert_eq!(extract_version_stamp("Makefile-03"), stamp("Makefile", 3));
        assert_eq!(extract_version_stamp("README"), None);
    }

    #[test]
    fn strips_stacked_separators_from_base() {
        assert_eq!(extract_version_stamp("core-_-04.py"), stamp("core.py", 4));
    }

    #[test]
    fn unindexed_names_have_no_stamp() {
        assert_eq!(extract_version_stamp("util.py"), None);
        assert_eq!(extract_version_stamp("notes.txt"), None);
        assert_eq!(extract_version_stamp("v2-notes.md"), None);
    }

    #[test]
    fn purely_numeric_names_have_no_stamp() {
        assert_eq!(extract_version_stamp("01.py"), None);
        assert_eq!(extract_version_stamp("_01.py"), None);
        assert_eq!(extract_version_stamp("2024"), None);
    }

    #[test]
    fn absurdly_wide_digit_runs_have_no_stamp() {
        assert_eq!(extract_version_stamp("big-99999999999999999999999.py"), None);
    }

    #[test]
    fn picks_highest_version_regardless_of_input_order() {
        let files = [candidate("a-03.py"), candidate("a-01.py"), candidate("a-02.py")];
        let (latest, superseded) = group_latest_versions(&files);

        assert_eq!(latest.len(), 1);
        assert_eq!(latest["a.py"].file_name, "a-03.py");

        assert_eq!(superseded.len(), 1);
        assert_eq!(superseded[0].latest_name, "a-03.py");
        assert_eq!(
            superseded[0].replaced_names,
            vec!["a-01.py".to_string(), "a-02.py".to_string()]
        );
    }

    #[test]
    fn extensions_split_families() {
        let files = [candidate("x-01.py"), candidate("x-01.js")];
        let (latest, superseded) = group_latest_versions(&files);

        assert_eq!(latest.len(), 2);
        assert_eq!(latest["x.py"].file_name, "x-01.py");
        assert_eq!(latest["x.js"].file_name, "x-01.js");
        assert!(superseded.is_empty());
    }

    #[test]
    fn equal_versions_resolve_to_last_supplied() {
        // Same family key from "-1" and "_01"; the later candidate wins.
        let files = [candidate("b-1.py"), candidate("b_01.py")];
        let (latest, superseded) = group_latest_versions(&files);

        assert_eq!(latest["b.py"].file_name, "b_01.py");
        assert_eq!(superseded[0].replaced_names, vec!["b-1.py".to_string()]);
    }

    #[test]
    fn unindexed_files_are_excluded_from_grouping() {
        let files = [candidate("app-01.py"), candidate("util.py")];
        let (latest, _) = group_latest_versions(&files);

        assert_eq!(latest.len(), 1);
        assert!(latest.contains_key("app.py"));
    }

    #[test]
    fn latest_map_iterates_in_key_order() {
        let files = [candidate("zeta-01.py"), candidate("alpha-01.py")];
        let (latest, _) = group_latest_versions(&files);
        let keys: Vec<&str> = latest.keys().map(String::as_str).collect();
        assert_eq!(keys, ["alpha.py", "zeta.py"]);
    }
}
