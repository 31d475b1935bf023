//! cslines - count code and comment/blank lines across the .cs files of a tree
//!
//! cslines provides:
//! - Recursive discovery of .cs files with build/tooling directories pruned
//! - Per-line classification into code vs excluded (blank or //-comment-only)
//! - A per-file table sorted by code line count, plus aggregate totals

use anyhow::Result;
use clap::Parser;

mod cli;
mod error;
mod report;
mod scan;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
