//! Template context — serializable rendering payload built from a course and
//! its enrollment view.
//!
//! Every text field is escaped *here*, before the payload reaches tera; the
//! template itself only substitutes.

use serde::{Deserialize, Serialize};

use scriptreg_core::{Course, Student};

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::escape::latex_escape;

/// Rendering payload for one register document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterContext {
    /// Institution heading (escaped).
    pub institution: String,
    /// Programme label: first enrolled student's `Program`, else the
    /// configured default (escaped).
    pub program: String,
    pub course_code: String,
    pub course_name: String,
    pub instructor: String,
    /// Exam type, or the configured blank when absent.
    pub exam_field: String,
    /// Semester label, or the configured blank when absent.
    pub semester_field: String,
    /// Session label, or the configured blank when absent.
    pub session_field: String,
    /// Exam date, or the configured blank when absent.
    pub date_field: String,
    /// One entry per enrolled student, in enrollment-view order.
    pub rows: Vec<RegisterRow>,
}

/// One body row of the register table.
///
/// The two annotation columns (booklet no, loose sheet no) and the signature
/// column are intentionally blank in the template; only these three fields
/// are data-driven.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRow {
    /// 1-based sequence number, regenerated per course — independent of the
    /// student's roster ordinal and global ID.
    pub seq: usize,
    pub name: String,
    pub id: String,
}

impl RegisterContext {
    /// Build a [`RegisterContext`] from a course and its enrollment view.
    pub fn build(course: &Course, view: &[&Student], config: &RenderConfig) -> Self {
        let program = view
            .first()
            .map(|s| s.program.as_str())
            .filter(|p| !p.trim().is_empty())
            .unwrap_or(&config.default_program);

        let rows = view
            .iter()
            .enumerate()
            .map(|(i, student)| RegisterRow {
                seq: i + 1,
                name: latex_escape(&student.name),
                id: latex_escape(&student.id),
            })
            .collect();

        RegisterContext {
            institution: latex_escape(&config.institution),
            program: latex_escape(program),
            course_code: latex_escape(&course.code.0),
            course_name: latex_escape(&course.name),
            instructor: latex_escape(&course.instructor),
            exam_field: present_or(&course.exam_type, &config.blank_exam),
            semester_field: present_or(&course.semester, &config.blank_semester),
            session_field: present_or(&course.session, &config.blank_session),
            date_field: present_or(&course.exam_date, &config.blank_date),
            rows,
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

fn present_or(field: &Option<String>, blank: &str) -> String {
    match field {
        Some(value) => latex_escape(value),
        None => blank.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
