//! Error types for scriptreg-renderer.

use thiserror::Error;

/// All errors that can arise from register rendering.
///
/// Context serialization failures surface through [`RenderError::Tera`] as
/// well — `tera::Context::from_serialize` wraps them in a `tera::Error`.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),
}
