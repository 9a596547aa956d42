//! Scriptreg core library — domain types, CSV catalog loading, enrollment
//! filtering, errors.
//!
//! Public API surface:
//! - [`types`] — newtypes and domain structs
//! - [`error`] — [`CatalogError`]
//! - [`catalog`] — course / student table loading
//! - [`enrollment`] — per-course enrollment view

pub mod catalog;
pub mod enrollment;
pub mod error;
pub mod types;

pub use catalog::{load_courses, load_students};
pub use enrollment::enrolled;
pub use error::CatalogError;
pub use types::{Course, CourseCode, Student};
