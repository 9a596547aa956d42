//! Batch generation pipeline.
//!
//! One strictly sequential pass over the course table: filter the roster,
//! render, write. Both source tables load up front — a missing source aborts
//! before any output exists, and any write failure aborts the remaining
//! batch. Reruns against unchanged inputs regenerate byte-identical
//! registers, so the recovery mechanism is simply running again.

use std::path::PathBuf;

use chrono::Utc;

use scriptreg_core::{catalog, enrolled, CourseCode};
use scriptreg_renderer::{register_filename, RenderConfig, Renderer};

use crate::error::EmitError;
use crate::manifest;
use crate::scripts;
use crate::writer::{self, WriteOutcome};

/// Inputs for a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Course table CSV.
    pub courses: PathBuf,
    /// Student roster CSV.
    pub students: PathBuf,
    /// Output directory, created if absent.
    pub out_dir: PathBuf,
    pub config: RenderConfig,
    /// Report what would be written without touching the filesystem.
    pub dry_run: bool,
}

/// One generated register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub course_code: CourseCode,
    /// File name relative to the output directory.
    pub filename: String,
    /// Size of the enrollment view that produced this register.
    pub enrolled: usize,
}

/// Summary of a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    pub registers: Vec<GeneratedFile>,
    /// Helper scripts and the manifest, in write order.
    pub extras: Vec<WriteOutcome>,
    pub course_count: usize,
    pub student_count: usize,
    pub dry_run: bool,
}

/// Run the full pipeline: load, render per course, emit scripts + manifest.
pub fn run(options: &GenerateOptions) -> Result<GenerateReport, EmitError> {
    let courses = catalog::load_courses(&options.courses)?;
    let students = catalog::load_students(&options.students)?;
    let renderer = Renderer::new()?;

    let mut registers = Vec::with_capacity(courses.len());
    for course in &courses {
        let view = enrolled(&course.code, &students);
        let content = renderer.render(course, &view, &options.config)?;
        let filename = register_filename(&course.code);
        writer::write_file(&options.out_dir.join(&filename), &content, options.dry_run)?;
        log::debug!("{}: {} students enrolled", course.code, view.len());
        registers.push(GeneratedFile {
            course_code: course.code.clone(),
            filename,
            enrolled: view.len(),
        });
    }

    let mut extras = Vec::new();
    if let Some(first) = registers.first() {
        extras.push(write_script(
            options,
            "test_compile.sh",
            &scripts::test_compile_sh(first),
            true,
        )?);
        extras.push(write_script(
            options,
            "test_compile.bat",
            &scripts::test_compile_bat(first),
            false,
        )?);
        extras.push(write_script(
            options,
            "compile_all.sh",
            &scripts::compile_all_sh(&registers),
            true,
        )?);
        extras.push(write_script(
            options,
            "compile_all.bat",
            &scripts::compile_all_bat(&registers),
            false,
        )?);
    }
    extras.push(write_script(
        options,
        "README.txt",
        &manifest::manifest(&registers, Utc::now()),
        false,
    )?);

    Ok(GenerateReport {
        registers,
        extras,
        course_count: courses.len(),
        student_count: students.len(),
        dry_run: options.dry_run,
    })
}

fn write_script(
    options: &GenerateOptions,
    name: &str,
    content: &str,
    executable: bool,
) -> Result<WriteOutcome, EmitError> {
    let path = options.out_dir.join(name);
    let outcome = writer::write_file(&path, content, options.dry_run)?;
    if executable && matches!(outcome, WriteOutcome::Written { .. }) {
        writer::make_executable(&path)?;
    }
    Ok(outcome)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
