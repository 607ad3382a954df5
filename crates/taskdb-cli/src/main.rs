//! TaskDB CLI Application
//!
//! Command-line front end for the TaskDB personal task database. Each run
//! loads the task file, applies one command and saves.

mod args;
mod cli;
mod renderer;
mod store;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use store::TaskFile;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        file,
        no_color,
        command,
    } = Args::parse();

    let file = TaskFile::resolve(file).context("Failed to locate the task file")?;
    let renderer = TerminalRenderer::new(!no_color);

    info!("TaskDB started with {}", file.path().display());

    Cli::new(file, renderer).run(command)
}
