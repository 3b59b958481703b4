//! Snapshot workflow: wiring between the filesystem glue and the pure cores.
use crate::cli::InitArgs;
use crate::config::SnapshotConfig;
use crate::document::{refresh_footer, splice_code, StatsFooter};
use crate::filters::{load_filters, write_default_filters};
use crate::render::render_code_blocks;
use crate::scan::collect_candidates;
use crate::templates::{starter_document, EMPTY_REGION_PLACEHOLDER};
use crate::versioning::group_latest_versions;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Document size above which the operator gets a warning, in bytes.
const SIZE_WARNING_BYTES: u64 = 500 * 1024;

/// Bootstrap a project: directory, filter file, starter document.
pub fn run_init(args: InitArgs, config: &SnapshotConfig) -> Result<()> {
    fs::create_dir_all(&args.dir)
        .with_context(|| format!("create project directory {}", args.dir.display()))?;
    let project_root = args
        .dir
        .canonicalize()
        .with_context(|| format!("resolve project directory {}", args.dir.display()))?;

    let filters_path = config.filters_path(&project_root);
    if filters_path.is_file() && !args.force {
        return Err(anyhow!(
            "filters already exist at {} (use --force to overwrite)",
            filters_path.display()
        ));
    }
    write_default_filters(&filters_path)?;

    let snapshot_path = config.snapshot_path(&project_root);
    if !snapshot_path.is_file() || args.force {
        let now = timestamp();
        let document = starter_document(
            &project_name(&project_root),
            &now,
            &config.marker,
            EMPTY_REGION_PLACEHOLDER,
            &StatsFooter {
                included: 0,
                skipped: 0,
                timestamp: now.clone(),
            },
        );
        fs::write(&snapshot_path, document)
            .with_context(|| format!("write {}", snapshot_path.display()))?;
    }

    println!("project created: {}", project_root.display());
    println!("  filters:  {}", config.filters_file_name);
    println!("  snapshot: {}", config.snapshot_file_name);
    Ok(())
}

/// Update (or create) the snapshot document for a project directory.
pub fn run_update(dir: &Path, config: &SnapshotConfig) -> Result<()> {
    let project_root = dir
        .canonicalize()
        .with_context(|| format!("resolve project directory {}", dir.display()))?;
    println!("updating snapshot: {}", project_name(&project_root));

    let filters = load_filters(&project_root, config);
    let candidates = collect_candidates(&project_root, &filters, config);
    if candidates.is_empty() {
        println!("no files matched the filters");
    }

    let (latest, superseded) = group_latest_versions(&candidates);
    for report in &superseded {
        println!(
            "  {} replaces: {}",
            report.latest_name,
            report.replaced_names.join(", ")
        );
    }
    if latest.is_empty() && !candidates.is_empty() {
        println!("no files carry a numeric version index (like -01 or _02)");
    }

    let (code_content, included) = render_code_blocks(&latest);
    let skipped = candidates.len() - included;
    let now = timestamp();
    let footer = StatsFooter {
        included,
        skipped,
        timestamp: now.clone(),
    };

    let snapshot_path = config.snapshot_path(&project_root);
    let old_content = read_existing_document(&snapshot_path);

    let new_content = match old_content {
        Some(old) => {
            let spliced = splice_code(&old, &code_content, &config.marker);
            refresh_footer(&spliced, &footer)
        }
        None => starter_document(
            &project_name(&project_root),
            &now,
            &config.marker,
            &code_content,
            &footer,
        ),
    };

    fs::write(&snapshot_path, &new_content)
        .with_context(|| format!("write {}", snapshot_path.display()))?;

    println!("snapshot written: {}", snapshot_path.display());
    println!("  files included: {included}");
    if skipped > 0 {
        println!("  skipped (old versions or unindexed): {skipped}");
    }
    warn_if_oversized(&snapshot_path);
    Ok(())
}

/// Read the previous document, treating unreadable content as absent.
///
/// A snapshot that exists but cannot be decoded is rebuilt from the starter
/// template rather than failing the run; the on-disk bytes are about to be
/// replaced either way.
fn read_existing_document(snapshot_path: &Path) -> Option<String> {
    if !snapshot_path.is_file() {
        return None;
    }
    match fs::read(snapshot_path) {
        // A zero-byte document is as good as absent.
        Ok(bytes) if bytes.is_empty() => None,
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(err) => {
            eprintln!(
                "warning: cannot read previous snapshot {}: {err}",
                snapshot_path.display()
            );
            None
        }
    }
}

fn warn_if_oversized(snapshot_path: &Path) {
    if let Ok(metadata) = fs::metadata(snapshot_path) {
        if metadata.len() > SIZE_WARNING_BYTES {
            println!(
                "warning: snapshot is {:.1} KB",
                metadata.len() as f64 / 1024.0
            );
        }
    }
}

fn project_name(project_root: &Path) -> String {
    project_root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| project_root.display().to_string())
}

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M").to_string()
}

/// Resolve the update target from the optional positional argument.
pub fn update_dir(dir: Option<PathBuf>) -> PathBuf {
    dir.unwrap_or_else(|| PathBuf::from("."))
}
