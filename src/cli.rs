//! CLI module - Command-line interface definition and entry point

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::report;
use crate::scan;

/// cslines - count code and comment/blank lines across the .cs files of a tree.
#[derive(Parser, Debug)]
#[command(name = "cslines")]
#[command(
    author,
    version,
    about,
    long_about = r#"cslines walks a directory tree, tallies every .cs file into code lines and
excluded lines (blank or //-comment-only), and prints one table row per file
sorted by code line count descending, followed by aggregate totals.

Directories named Migrations, obj, Properties, bin or .godot are pruned from
the walk, together with everything beneath them.

Examples:
    cslines
    cslines path/to/project
"#
)]
pub struct Cli {
    /// Root directory to scan.
    #[arg(
        default_value = ".",
        value_name = "ROOT",
        long_help = "Root directory to start the scan from (defaults to the current directory).\n\n\
Every subdirectory is visited except those pruned by the exclusion set."
    )]
    pub root: PathBuf,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let (reports, totals) = scan::scan(&cli.root)?;

    if reports.is_empty() {
        println!("No .cs files found under {}", cli.root.display());
        return Ok(());
    }

    print!("{}", report::render(&reports, &totals));
    Ok(())
}
