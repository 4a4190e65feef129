//! Tera rendering engine — [`Renderer`].
//!
//! The README skeleton is a single template baked into the binary with
//! `include_str!`; nothing is discovered on disk at runtime.

use tera::Tera;

use readme_core::{Configuration, ProjectIdentity};

use crate::context::TemplateContext;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded template
// ---------------------------------------------------------------------------

const TEMPLATE_NAME: &str = "readme.md.tera";
const TEMPLATE: &str = include_str!("templates/readme.md.tera");

fn build_tera() -> Result<Tera, RenderError> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Tera-based README renderer.
///
/// Create once with [`Renderer::new`] and reuse.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Construct a new [`Renderer`] with the embedded template.
    pub fn new() -> Result<Self, RenderError> {
        Ok(Renderer {
            tera: build_tera()?,
        })
    }

    /// Render the README for `identity` using the versions in `config`.
    pub fn render_readme(
        &self,
        config: &Configuration,
        identity: &ProjectIdentity,
    ) -> Result<String, RenderError> {
        let ctx = TemplateContext::from_parts(config, identity);
        self.render(&ctx)
    }

    /// Render using a caller-provided [`TemplateContext`].
    ///
    /// Line endings in the output are always LF.
    pub fn render(&self, ctx: &TemplateContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        let content = self.tera.render(TEMPLATE_NAME, &tera_ctx)?;
        tracing::debug!(
            repo = %ctx.identity.repo_name,
            versions = ctx.versions.len(),
            bytes = content.len(),
            "rendered README"
        );
        Ok(content.replace("\r\n", "\n"))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
