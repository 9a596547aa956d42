//! scriptreg — answer-script register generator CLI.
//!
//! # Usage
//!
//! ```text
//! scriptreg generate [--courses <csv>] [--students <csv>] [--out-dir <dir>]
//!                    [--default-program <label>] [--institution <name>] [--dry-run]
//! scriptreg courses [--courses <csv>] [--students <csv>]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{courses::CoursesArgs, generate::GenerateArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "scriptreg",
    version,
    about = "Generate printable attendance and answer-script registers from course and roster CSVs",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render and write one register per course, plus compile helpers.
    Generate(GenerateArgs),

    /// List the course catalog with enrollment counts.
    Courses(CoursesArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate(args) => args.run(),
        Commands::Courses(args) => args.run(),
    }
}
