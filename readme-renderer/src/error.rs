//! Error types for readme-renderer.

use thiserror::Error;

/// All errors that can arise from rendering the README template.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error (parse, context conversion, or render).
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),
}
