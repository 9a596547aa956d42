//! `scriptreg generate` — render and write one register per course.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use scriptreg_emit::{pipeline, GenerateOptions, GenerateReport};
use scriptreg_renderer::RenderConfig;

/// Arguments for `scriptreg generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Course table CSV.
    #[arg(long, default_value = "courses-db.csv")]
    pub courses: PathBuf,

    /// Student roster CSV.
    #[arg(long, default_value = "student-db.csv")]
    pub students: PathBuf,

    /// Output directory for registers, compile scripts, and the manifest.
    #[arg(long, default_value = "generated_registers")]
    pub out_dir: PathBuf,

    /// Programme label used when a course has no enrolled students.
    #[arg(long)]
    pub default_program: Option<String>,

    /// Institution heading printed on every register.
    #[arg(long)]
    pub institution: Option<String>,

    /// Show what would be written without actually writing any files.
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    pub fn run(self) -> Result<()> {
        let mut config = RenderConfig::default();
        if let Some(program) = self.default_program {
            config.default_program = program;
        }
        if let Some(institution) = self.institution {
            config.institution = institution;
        }

        let options = GenerateOptions {
            courses: self.courses,
            students: self.students,
            out_dir: self.out_dir.clone(),
            config,
            dry_run: self.dry_run,
        };
        let report = pipeline::run(&options).context("register generation failed")?;
        print_report(&report, &self.out_dir);
        Ok(())
    }
}

fn print_report(report: &GenerateReport, out_dir: &Path) {
    let prefix = if report.dry_run { "[dry-run] " } else { "" };
    println!(
        "{prefix}Found {} courses, {} students",
        report.course_count, report.student_count
    );

    for file in &report.registers {
        println!(
            "  {}  {} — {} enrolled",
            "✎".green(),
            file.filename,
            file.enrolled
        );
    }
    for extra in &report.extras {
        if let Some(name) = extra.path().file_name() {
            println!("  {}  {}", "·".bright_black(), name.to_string_lossy());
        }
    }

    println!(
        "{prefix}{} {} registers in {}",
        "✓".green(),
        report.registers.len(),
        out_dir.display()
    );
}
