//! Per-course enrollment view.
//!
//! Two-stage filter over the student roster:
//!
//! 1. *Presence* — keep rows whose marker for the course is present and
//!    non-empty after trimming.
//! 2. *Numeric* — parse surviving markers as numbers and drop rows with a
//!    value below 1. If **no** marker in the column parses at all, this stage
//!    is skipped and every presence-stage row is kept — rosters that flag
//!    enrollment with tokens like `"Y"` stay intact.
//!
//! A row whose marker fails to parse while *other* rows parse is kept too;
//! only a successfully coerced value below 1 excludes a student. Survivors
//! are ordered ascending by the `Sl` ordinal.

use crate::types::{CourseCode, Student};

/// The enrollment view for `code`: filtered, ordered borrows into `students`.
///
/// Returns empty when no student row carries a marker column for `code`.
/// Recomputed fresh per course; never cached.
pub fn enrolled<'a>(code: &CourseCode, students: &'a [Student]) -> Vec<&'a Student> {
    let mut view: Vec<&Student> = students
        .iter()
        .filter(|s| s.marker(code).is_some_and(|m| !m.trim().is_empty()))
        .collect();

    let parsed: Vec<Option<f64>> = view
        .iter()
        .map(|s| s.marker(code).and_then(|m| m.trim().parse::<f64>().ok()))
        .collect();

    if parsed.iter().any(Option::is_some) {
        view = view
            .into_iter()
            .zip(parsed)
            .filter(|(_, value)| value.is_none_or(|v| v >= 1.0))
            .map(|(s, _)| s)
            .collect();
    } else if !view.is_empty() {
        log::warn!(
            "enrollment markers for {code} are all non-numeric; keeping every non-empty row"
        );
    }

    view.sort_by(|a, b| a.cmp_by_sl(b));
    view
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
