//! `README.txt` manifest for the output directory.
//!
//! The generation timestamp lives here and only here — register bodies stay
//! timestamp-free so reruns are byte-identical.

use chrono::{DateTime, Utc};

use crate::pipeline::GeneratedFile;

/// LaTeX packages the generated registers require at compile time.
pub const REQUIRED_PACKAGES: &[&str] = &["longtable", "array", "booktabs", "tabularray"];

/// Render the `README.txt` body.
pub fn manifest(files: &[GeneratedFile], generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push_str("# Generated Answer Script Registers\n");
    out.push_str(&format!(
        "# Generated on: {}\n\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str("This folder contains LaTeX files for answer script issue registers.\n\n");

    out.push_str("## Files Generated:\n");
    for file in files {
        out.push_str(&format!(
            "- {}: {} ({} enrolled)\n",
            file.course_code, file.filename, file.enrolled
        ));
    }

    out.push_str("\n## Required LaTeX Packages:\n");
    for package in REQUIRED_PACKAGES {
        out.push_str(&format!("- {package}\n"));
    }

    out.push_str("\n## To Compile:\nRun the test_compile script first, then compile_all.\n");
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
