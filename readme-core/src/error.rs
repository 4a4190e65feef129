//! Error types for readme-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while building a configuration or resolving a
/// project identity.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Underlying I/O failure while reading the project directory.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `pyproject.toml` exists but is not valid TOML.
    #[error("failed to parse {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The directory is the platform engine itself rather than a Feature.
    #[error("'{name}' is the engine repository; README generation only works for its Features")]
    EngineProject { name: String },

    /// No repository name could be derived from the project directory.
    #[error("cannot determine a project name for '{path}'")]
    UnnamedProject { path: PathBuf },

    /// `--versions` was given no usable tokens.
    #[error("at least one version is required")]
    NoVersions,

    /// A version token was empty or whitespace only.
    #[error("version tokens must not be blank")]
    BlankVersion,
}

/// Convenience constructor for [`CoreError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> CoreError {
    CoreError::Io {
        path: path.into(),
        source,
    }
}
