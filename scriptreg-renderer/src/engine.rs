//! Tera rendering engine — [`Renderer`] and output naming.
//!
//! The register template is baked into the binary at compile time via
//! `include_str!`; there is exactly one template and one output file per
//! course, named `<Course_Code>_register.tex`.

use tera::Tera;

use scriptreg_core::{Course, CourseCode, Student};

use crate::config::RenderConfig;
use crate::context::RegisterContext;
use crate::error::RenderError;

const REGISTER_TEMPLATE_NAME: &str = "register.tex.tera";
const REGISTER_TEMPLATE: &str = include_str!("templates/register.tex.tera");

/// Output file name for a course's register, relative to the output directory.
pub fn register_filename(code: &CourseCode) -> String {
    format!("{code}_register.tex")
}

/// Tera-based renderer for register documents.
///
/// Uses the embedded template only. Create once with [`Renderer::new`] and
/// reuse across courses.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Construct a new [`Renderer`] with the embedded register template.
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(REGISTER_TEMPLATE_NAME, REGISTER_TEMPLATE)?;
        Ok(Renderer { tera })
    }

    /// Render the register document for `course` and its enrollment `view`.
    ///
    /// Output is deterministic for identical inputs: no timestamps, no
    /// randomness, LF line endings throughout.
    pub fn render(
        &self,
        course: &Course,
        view: &[&Student],
        config: &RenderConfig,
    ) -> Result<String, RenderError> {
        let ctx = RegisterContext::build(course, view, config);
        self.render_with_context(&ctx)
    }

    /// Render using a caller-provided [`RegisterContext`].
    pub fn render_with_context(&self, ctx: &RegisterContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        let content = self.tera.render(REGISTER_TEMPLATE_NAME, &tera_ctx)?;
        Ok(content.replace("\r\n", "\n"))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
