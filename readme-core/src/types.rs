//! Domain types for a single `generate-readme` invocation.
//!
//! A [`Configuration`] is built once from the command line and never mutated
//! afterwards; everything downstream derives from it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;

/// File name written into the invocation directory when no output is given.
pub const DEFAULT_OUTPUT: &str = "README.md";

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// An interpreter release identifier such as `3.11`, embedded verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VersionToken(String);

impl VersionToken {
    /// Validate and wrap a raw token. Blank tokens are rejected; anything
    /// else is kept exactly as supplied.
    pub fn new(raw: impl Into<String>) -> Result<Self, CoreError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(CoreError::BlankVersion);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for VersionToken {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Log verbosity selected on the command line.
///
/// Variants are ordered from least to most verbose so that combining flags
/// is a plain `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    #[default]
    Quiet,
    Info,
    Debug,
}

impl Verbosity {
    /// Resolve the verbosity from the `-v` occurrence count and the
    /// `--very-verbose` switch. The more verbose setting wins.
    pub fn from_flags(verbose_count: u8, very_verbose: bool) -> Self {
        let counted = match verbose_count {
            0 => Verbosity::Quiet,
            1 => Verbosity::Info,
            _ => Verbosity::Debug,
        };
        let switched = if very_verbose {
            Verbosity::Debug
        } else {
            Verbosity::Quiet
        };
        counted.max(switched)
    }

    /// `tracing` filter directive for this level.
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "warn",
            Verbosity::Info => "info",
            Verbosity::Debug => "debug",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verbosity::Quiet => write!(f, "quiet"),
            Verbosity::Info => write!(f, "info"),
            Verbosity::Debug => write!(f, "debug"),
        }
    }
}

/// What to do with the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Truncate and replace the output file.
    #[default]
    Write,
    /// Render, report the target, write nothing.
    DryRun,
    /// Render and show a unified diff against the file on disk.
    Diff,
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Validated, immutable configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    versions: Vec<VersionToken>,
    verbosity: Verbosity,
    output: PathBuf,
    mode: OutputMode,
}

impl Configuration {
    /// Build a configuration writing to [`DEFAULT_OUTPUT`].
    ///
    /// Fails with [`CoreError::NoVersions`] if `versions` is empty.
    pub fn new(versions: Vec<VersionToken>, verbosity: Verbosity) -> Result<Self, CoreError> {
        if versions.is_empty() {
            return Err(CoreError::NoVersions);
        }
        Ok(Self {
            versions,
            verbosity,
            output: PathBuf::from(DEFAULT_OUTPUT),
            mode: OutputMode::Write,
        })
    }

    /// Replace the output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Replace the output mode.
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn versions(&self) -> &[VersionToken] {
        &self.versions
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }
}
