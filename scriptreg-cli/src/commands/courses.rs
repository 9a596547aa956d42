//! `scriptreg courses` — catalog listing with enrollment counts.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tabled::{settings::Style, Table, Tabled};

use scriptreg_core::{catalog, enrolled};

/// Arguments for `scriptreg courses`.
#[derive(Args, Debug)]
pub struct CoursesArgs {
    /// Course table CSV.
    #[arg(long, default_value = "courses-db.csv")]
    pub courses: PathBuf,

    /// Student roster CSV.
    #[arg(long, default_value = "student-db.csv")]
    pub students: PathBuf,
}

#[derive(Tabled)]
struct CourseTableRow {
    #[tabled(rename = "code")]
    code: String,
    #[tabled(rename = "course")]
    name: String,
    #[tabled(rename = "instructor")]
    instructor: String,
    #[tabled(rename = "semester")]
    semester: String,
    #[tabled(rename = "enrolled")]
    enrolled: usize,
}

impl CoursesArgs {
    pub fn run(self) -> Result<()> {
        let courses = catalog::load_courses(&self.courses)
            .with_context(|| format!("failed to load course table {}", self.courses.display()))?;
        let students = catalog::load_students(&self.students)
            .with_context(|| format!("failed to load roster {}", self.students.display()))?;

        if courses.is_empty() {
            println!("No courses in {}.", self.courses.display());
            return Ok(());
        }

        let rows: Vec<CourseTableRow> = courses
            .iter()
            .map(|course| CourseTableRow {
                code: course.code.to_string(),
                name: course.name.clone(),
                instructor: course.instructor.clone(),
                semester: course.semester.clone().unwrap_or_default(),
                enrolled: enrolled(&course.code, &students).len(),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        println!("{} courses, {} students on the roster", courses.len(), students.len());
        Ok(())
    }
}
