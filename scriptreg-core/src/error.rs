//! Error types for scriptreg-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from catalog loading.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// An input table is missing or unreadable — fatal, the whole run aborts.
    #[error("source table not found at {path}")]
    SourceNotFound { path: PathBuf },

    /// CSV parse error (malformed row, inconsistent field count, etc.).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying I/O failure, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
