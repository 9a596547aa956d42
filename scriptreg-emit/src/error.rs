//! Error types for scriptreg-emit.

use std::path::PathBuf;

use thiserror::Error;

use scriptreg_core::CatalogError;
use scriptreg_renderer::RenderError;

/// All errors that can arise from the generation pipeline.
#[derive(Debug, Error)]
pub enum EmitError {
    /// An error from catalog loading — includes the fatal missing-source case.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An I/O error, with annotated path for context. Write failures abort
    /// the remaining batch.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`EmitError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> EmitError {
    EmitError::Io {
        path: path.into(),
        source,
    }
}
