//! Render configuration — institution heading, fallback program label, and
//! the fixed-width blanks substituted for absent course fields.

use serde::{Deserialize, Serialize};

/// Knobs for register rendering.
///
/// Absent optional course fields render as a fixed-width `\hspace` blank of a
/// field-specific width rather than an empty string, so the handwritten
/// fill-in area keeps its visual alignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Institution name printed at the top of every register.
    pub institution: String,
    /// Programme label used when a course has no enrolled students to take
    /// one from.
    pub default_program: String,
    /// Blank substituted for an absent exam type.
    pub blank_exam: String,
    /// Blank substituted for an absent semester label.
    pub blank_semester: String,
    /// Blank substituted for an absent session label.
    pub blank_session: String,
    /// Blank substituted for an absent exam date.
    pub blank_date: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            institution: "Ramakrishna Mission Vivekananda Educational and Research Institute"
                .to_string(),
            default_program: "MSc Program".to_string(),
            blank_exam: r"\hspace{2cm}".to_string(),
            blank_semester: r"\hspace{1cm}".to_string(),
            blank_session: r"\hspace{4cm}".to_string(),
            blank_date: r"\hspace{2cm}".to_string(),
        }
    }
}
