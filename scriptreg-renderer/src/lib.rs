//! # scriptreg-renderer
//!
//! Tera-based template engine that renders one printable LaTeX register per
//! course from catalog data.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use scriptreg_core::{enrolled, Course, Student};
//! use scriptreg_renderer::{register_filename, RenderConfig, Renderer};
//!
//! fn render_one(course: &Course, students: &[Student]) {
//!     let config = RenderConfig::default();
//!     if let Ok(renderer) = Renderer::new() {
//!         let view = enrolled(&course.code, students);
//!         if let Ok(document) = renderer.render(course, &view, &config) {
//!             println!("{}: {} bytes", register_filename(&course.code), document.len());
//!         }
//!     }
//! }
//! ```

pub mod config;
pub mod context;
pub mod engine;
pub mod escape;
pub mod error;

pub use config::RenderConfig;
pub use context::{RegisterContext, RegisterRow};
pub use engine::{register_filename, Renderer};
pub use error::RenderError;
pub use escape::{latex_escape, latex_escape_opt};
