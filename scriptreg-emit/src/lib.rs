//! # scriptreg-emit
//!
//! Atomic file writer, compile-helper scripts, manifest, and the batch
//! generation pipeline.
//!
//! Call [`pipeline::run`] to load both catalog tables, render one register
//! per course, and write registers plus the compile scripts and `README.txt`
//! manifest into the output directory.

pub mod error;
pub mod manifest;
pub mod pipeline;
pub mod scripts;
pub mod writer;

pub use error::EmitError;
pub use pipeline::{GenerateOptions, GenerateReport, GeneratedFile};
pub use writer::WriteOutcome;
