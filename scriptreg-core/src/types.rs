//! Domain types for the scriptreg catalog.
//!
//! A course's enrollment is encoded on the *student* table: one marker column
//! per course code. [`Student::markers`] carries those columns as a map keyed
//! by header name, which keeps lookup by course code explicit instead of
//! re-scanning raw CSV headers at render time.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed course identifier (the `Course_Code` column).
///
/// Unique across the course table; doubles as the enrollment-marker column
/// name on the student table and as the output file's base name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseCode(pub String);

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for CourseCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CourseCode {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// One row of the course catalog.
///
/// Optional fields are `None` when the source cell is absent or blank; the
/// renderer substitutes fixed-width placeholders for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub code: CourseCode,
    pub name: String,
    pub instructor: String,
    pub exam_type: Option<String>,
    pub exam_date: Option<String>,
    pub semester: Option<String>,
    pub session: Option<String>,
}

/// One row of the student roster.
///
/// `markers` holds every column that is not `Sl`/`Name`/`ID`/`Program`,
/// keyed by column header. A non-empty marker under a course-code key signals
/// enrollment in that course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Ordinal sort key (`Sl` column) — kept as raw text, compared
    /// numerically when possible.
    pub sl: String,
    pub name: String,
    pub id: String,
    pub program: String,
    #[serde(default)]
    pub markers: BTreeMap<String, String>,
}

impl Student {
    /// Raw enrollment marker for `code`, if the column exists for this row.
    pub fn marker(&self, code: &CourseCode) -> Option<&str> {
        self.markers.get(&code.0).map(String::as_str)
    }

    /// Compare two students by their `Sl` ordinal.
    ///
    /// Numeric comparison when both values parse; lexicographic fallback so
    /// rosters with textual ordinals still get a stable order.
    pub fn cmp_by_sl(&self, other: &Student) -> Ordering {
        match (self.sl.trim().parse::<f64>(), other.sl.trim().parse::<f64>()) {
            (Ok(a), Ok(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            _ => self.sl.cmp(&other.sl),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn student(sl: &str) -> Student {
        Student {
            sl: sl.to_string(),
            name: "X".to_string(),
            id: "1".to_string(),
            program: "MSc".to_string(),
            markers: BTreeMap::new(),
        }
    }

    #[test]
    fn course_code_display() {
        assert_eq!(CourseCode::from("COMP101").to_string(), "COMP101");
    }

    #[test]
    fn course_code_equality() {
        let a = CourseCode::from("x");
        let b = CourseCode::from(String::from("x"));
        assert_eq!(a, b);
    }

    #[test]
    fn sl_numeric_ordering_beats_lexicographic() {
        // "10" < "9" lexicographically but not numerically.
        assert_eq!(student("9").cmp_by_sl(&student("10")), Ordering::Less);
    }

    #[test]
    fn sl_textual_ordering_falls_back_to_string() {
        assert_eq!(student("a").cmp_by_sl(&student("b")), Ordering::Less);
    }

    #[test]
    fn marker_lookup_by_course_code() {
        let mut s = student("1");
        s.markers.insert("COMP101".to_string(), "1".to_string());
        assert_eq!(s.marker(&CourseCode::from("COMP101")), Some("1"));
        assert_eq!(s.marker(&CourseCode::from("COMP102")), None);
    }
}
