//! Unified diff preview for `generate-readme --diff`.

use std::io::ErrorKind;
use std::path::Path;

use similar::TextDiff;

use crate::error::{io_err, WriteError};

/// Compare `rendered` with the current content at `path`.
///
/// A missing file counts as empty. Returns `None` when nothing would change.
/// No files are written.
pub fn diff_output(path: &Path, rendered: &str) -> Result<Option<String>, WriteError> {
    let rendered = normalize_line_endings(rendered);
    let existing = read_existing_or_empty(path)?;
    if existing == rendered {
        return Ok(None);
    }

    let old_header = format!("a/{}", path.display());
    let new_header = format!("b/{}", path.display());
    let unified = TextDiff::from_lines(&existing, &rendered)
        .unified_diff()
        .header(&old_header, &new_header)
        .context_radius(3)
        .to_string();
    Ok(Some(unified))
}

fn read_existing_or_empty(path: &Path) -> Result<String, WriteError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(normalize_line_endings(&content)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(io_err(path, err)),
    }
}

fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n")
}
