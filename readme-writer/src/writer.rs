//! README writer.
//!
//! `write_document` truncates and replaces the target file. There is no
//! temp-file-and-rename step: an interrupted write may leave a partial
//! file, which the next run overwrites.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{io_err, WriteError};

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of writing the rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// No file existed at the path; it was created.
    Created { path: PathBuf },
    /// An existing file was truncated and replaced.
    Replaced { path: PathBuf },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Created { path }
            | WriteResult::Replaced { path }
            | WriteResult::WouldWrite { path } => path,
        }
    }
}

// ---------------------------------------------------------------------------
// write_document
// ---------------------------------------------------------------------------

/// Write `content` to `path`, replacing whatever was there.
///
/// Line endings are normalised to LF. Missing parent directories are
/// created. With `dry_run` nothing touches the filesystem.
pub fn write_document(path: &Path, content: &str, dry_run: bool) -> Result<WriteResult, WriteError> {
    let normalized = content.replace("\r\n", "\n");
    let existed = path.exists();

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    fs::write(path, normalized.as_bytes()).map_err(|e| io_err(path, e))?;

    tracing::info!(bytes = normalized.len(), "wrote: {}", path.display());
    let path = path.to_path_buf();
    Ok(if existed {
        WriteResult::Replaced { path }
    } else {
        WriteResult::Created { path }
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
