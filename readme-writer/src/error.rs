//! Error types for readme-writer.

use std::path::PathBuf;

use thiserror::Error;

use readme_core::CoreError;
use readme_renderer::RenderError;

/// All errors that can arise from the render-and-write pipeline.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Configuration or project identity error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`WriteError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> WriteError {
    WriteError::Io {
        path: path.into(),
        source,
    }
}
