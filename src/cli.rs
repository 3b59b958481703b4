//! CLI argument parsing for the snapshot workflow.
//!
//! The CLI is intentionally thin: it resolves a project directory and a
//! command, then hands off to the workflow layer. All snapshot policy lives
//! behind pure functions so the same core logic can be reused elsewhere.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
///
/// Running with no subcommand updates the snapshot of the given directory
/// (default: the current one); `init` bootstraps a fresh project.
#[derive(Parser, Debug)]
#[command(
    name = "snapdoc",
    version,
    about = "Maintain a rolling project snapshot for AI chat context",
    after_help = "Examples:\n  snapdoc                 Update the snapshot of the current directory\n  snapdoc path/to/proj    Update the snapshot of another directory\n  snapdoc init            Create filters.txt and a starter document here\n  snapdoc init new-proj   Bootstrap a new project directory\n\nOnly files with a numeric version index in the name are included\n(app-01.py, core_02.js, script03.sh); the highest index per base name\nwins. Everything outside the *** markers in the document is yours and\nis never touched."
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Project directory to snapshot
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project (filters.txt and a starter snapshot document)
    Init(InitArgs),
}

/// Init command inputs for bootstrapping a project.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Project directory to create (made on demand)
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Overwrite existing project files
    #[arg(long)]
    pub force: bool,
}
