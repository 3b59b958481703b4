//! Rendering retained files into the labeled block format.
use crate::versioning::LatestMap;
use std::fs;

/// Line separating rendered family blocks inside the code region.
pub const BLOCK_SEPARATOR: &str = "====================";

/// Render the latest-version files as concatenated labeled blocks.
///
/// Families arrive in lexicographic key order from the `BTreeMap`, so output
/// is deterministic for identical inputs. A file that cannot be read gets a
/// placeholder block instead of aborting the run and still counts as
/// included. Non-UTF-8 content is decoded lossily rather than rejected.
pub fn render_code_blocks(latest: &LatestMap<'_>) -> (String, usize) {
    let mut blocks = Vec::with_capacity(latest.len());

    for file in latest.values() {
        let body = match fs::read(&file.path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(err) => {
                eprintln!("warning: cannot read {}: {err}", file.path.display());
                format!("[read error: {err}]")
            }
        };
        blocks.push(format!("--- {} ---\n{body}", file.rel_path.display()));
    }

    let joined = blocks.join(&format!("\n\n{BLOCK_SEPARATOR}\n\n"));
    (joined, latest.len())
}
