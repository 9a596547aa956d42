//! CSV catalog loading.
//!
//! Two flat sources: the course table and the student roster. Loading is
//! deliberately permissive — a missing *file* is fatal
//! ([`CatalogError::SourceNotFound`]), but a missing *column* is not: absent
//! fields load as empty/`None` and surface as placeholders at render time.
//! Row order is preserved as read.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::CatalogError;
use crate::types::{Course, CourseCode, Student};

/// Student-roster columns with fixed meaning; everything else is an
/// enrollment-marker column keyed by course code.
const ROSTER_COLUMNS: &[&str] = &["Sl", "Name", "ID", "Program"];

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

/// Load the course table from `path`.
pub fn load_courses(path: &Path) -> Result<Vec<Course>, CatalogError> {
    let mut reader = open(path)?;
    let headers = reader.headers()?.clone();

    let mut courses = Vec::new();
    for record in reader.records() {
        let record = record?;
        courses.push(Course {
            code: CourseCode::from(field(&headers, &record, "Course_Code").unwrap_or_default()),
            name: field(&headers, &record, "Course_Name").unwrap_or_default(),
            instructor: field(&headers, &record, "Instructor").unwrap_or_default(),
            exam_type: optional(field(&headers, &record, "Exam_type")),
            exam_date: optional(field(&headers, &record, "Exam_Date")),
            semester: optional(field(&headers, &record, "Semester")),
            session: optional(field(&headers, &record, "Session")),
        });
    }
    log::info!("loaded {} courses from {}", courses.len(), path.display());
    Ok(courses)
}

/// Load the student roster from `path`.
pub fn load_students(path: &Path) -> Result<Vec<Student>, CatalogError> {
    let mut reader = open(path)?;
    let headers = reader.headers()?.clone();

    let mut students = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut markers = BTreeMap::new();
        for (header, value) in headers.iter().zip(record.iter()) {
            if !ROSTER_COLUMNS.contains(&header) {
                markers.insert(header.to_string(), value.to_string());
            }
        }
        students.push(Student {
            sl: field(&headers, &record, "Sl").unwrap_or_default(),
            name: field(&headers, &record, "Name").unwrap_or_default(),
            id: field(&headers, &record, "ID").unwrap_or_default(),
            program: field(&headers, &record, "Program").unwrap_or_default(),
            markers,
        });
    }
    log::info!("loaded {} students from {}", students.len(), path.display());
    Ok(students)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn open(path: &Path) -> Result<csv::Reader<File>, CatalogError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => CatalogError::SourceNotFound {
            path: path.to_path_buf(),
        },
        _ => CatalogError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    Ok(ReaderBuilder::new().flexible(true).from_reader(file))
}

/// Value of the named column for this record, or `None` if the column is
/// absent from the header row.
fn field(headers: &StringRecord, record: &StringRecord, name: &str) -> Option<String> {
    let idx = headers.iter().position(|h| h == name)?;
    Some(record.get(idx).unwrap_or_default().to_string())
}

/// Collapse blank cells to `None`.
fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = File::create(&path).expect("create csv");
        f.write_all(content.as_bytes()).expect("write csv");
        path
    }

    #[test]
    fn missing_file_is_source_not_found() {
        let dir = TempDir::new().unwrap();
        let err = load_courses(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, CatalogError::SourceNotFound { .. }));
    }

    #[test]
    fn courses_load_with_optional_fields() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "courses.csv",
            "Course_Code,Course_Name,Instructor,Exam_type,Exam_Date,Semester,Session\n\
             COMP101,Intro to Computing,Dr. A,Final,2024-05-01,Spring,Morning\n\
             COMP102,Data Structures,Dr. B,,,,\n",
        );
        let courses = load_courses(&path).expect("load");
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].code, CourseCode::from("COMP101"));
        assert_eq!(courses[0].exam_type.as_deref(), Some("Final"));
        assert_eq!(courses[1].exam_type, None, "blank cell must load as None");
        assert_eq!(courses[1].session, None);
    }

    #[test]
    fn missing_columns_load_as_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "courses.csv", "Course_Code\nCOMP101\n");
        let courses = load_courses(&path).expect("load");
        assert_eq!(courses[0].name, "");
        assert_eq!(courses[0].instructor, "");
        assert_eq!(courses[0].exam_date, None);
    }

    #[test]
    fn students_split_fixed_columns_from_markers() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "students.csv",
            "Sl,Name,ID,Program,COMP101,COMP102\n\
             1,Alice,S-01,MSc CS,1,\n\
             2,Bob,S-02,MSc CS,,1\n",
        );
        let students = load_students(&path).expect("load");
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].name, "Alice");
        assert_eq!(students[0].marker(&CourseCode::from("COMP101")), Some("1"));
        assert_eq!(students[0].marker(&CourseCode::from("COMP102")), Some(""));
        assert!(!students[0].markers.contains_key("Program"));
    }

    #[test]
    fn row_order_is_preserved() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "students.csv",
            "Sl,Name,ID,Program\n3,C,S-3,MSc\n1,A,S-1,MSc\n2,B,S-2,MSc\n",
        );
        let students = load_students(&path).expect("load");
        let names: Vec<_> = students.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["C", "A", "B"]);
    }
}
