//! Launch CLI - interactive generator for the `launch.json` configuration
//! file.
//!
//! Run from a project root; the tool loads any existing configuration,
//! collects redirects, rewrites, and cache priming URLs one prompt at a
//! time, and writes the merged document back out.

mod output;
mod prompt;
mod session;

use anyhow::{Context as _, Result};
use clap::Parser;

use output::Output;
use prompt::TermPrompt;

/// Build or update launch.json for the current project, interactively.
#[derive(Parser)]
#[command(name = "launch")]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    let output = Output::new();
    if let Err(e) = run(&output) {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(output: &Output) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    session::run(&cwd, &mut TermPrompt::new(), output)
}
