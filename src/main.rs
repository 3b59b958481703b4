use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod document;
mod filters;
mod render;
mod scan;
mod templates;
mod versioning;
mod workflow;

use cli::{Command, RootArgs};
use config::SnapshotConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = RootArgs::parse();
    let config = SnapshotConfig::default();

    match args.command {
        Some(Command::Init(init)) => workflow::run_init(init, &config),
        None => workflow::run_update(&workflow::update_dir(args.dir), &config),
    }
}
