//! Render-and-write pipeline used by the `generate-readme` binary.
//!
//! ```text
//! Configuration ─┐
//!                ├─ TemplateContext ─ render ─ write | dry-run | diff
//! project dir ───┘ (identity)
//! ```

use std::path::{Path, PathBuf};

use readme_core::{project, Configuration, OutputMode, ProjectIdentity};
use readme_renderer::Renderer;

use crate::{diff_output, write_document, WriteError, WriteResult};

/// What the pipeline did with the rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The document was written, or would have been in dry-run mode.
    Wrote(WriteResult),
    /// Diff mode: `unified` is `None` when the file is already current.
    Diff {
        path: PathBuf,
        unified: Option<String>,
    },
}

/// Result of a single pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutcome {
    pub identity: ProjectIdentity,
    pub action: Action,
}

/// Resolve the output path. Relative paths are taken from `project_dir`.
pub fn target_path(config: &Configuration, project_dir: &Path) -> PathBuf {
    project_dir.join(config.output())
}

/// Discover the Feature in `project_dir`, render its README and act on it
/// according to the configured [`OutputMode`].
pub fn run(config: &Configuration, project_dir: &Path) -> Result<PipelineOutcome, WriteError> {
    let identity = project::discover(project_dir)?;
    let renderer = Renderer::new()?;
    let content = renderer.render_readme(config, &identity)?;
    let target = target_path(config, project_dir);

    tracing::debug!(
        path = %target.display(),
        mode = ?config.mode(),
        "rendered README for {}",
        identity.repo_name
    );

    let action = match config.mode() {
        OutputMode::Write => Action::Wrote(write_document(&target, &content, false)?),
        OutputMode::DryRun => Action::Wrote(write_document(&target, &content, true)?),
        OutputMode::Diff => Action::Diff {
            unified: diff_output(&target, &content)?,
            path: target,
        },
    };

    Ok(PipelineOutcome { identity, action })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use readme_core::{Verbosity, VersionToken};
    use tempfile::TempDir;

    use super::*;

    fn config(versions: &[&str]) -> Configuration {
        let tokens = versions
            .iter()
            .map(|v| VersionToken::new(*v).unwrap())
            .collect();
        Configuration::new(tokens, Verbosity::Quiet).unwrap()
    }

    #[test]
    fn relative_output_is_joined_to_project_dir() {
        let cfg = config(&["3.11"]).with_output("docs/README.md");
        assert_eq!(
            target_path(&cfg, Path::new("/work/feature")),
            PathBuf::from("/work/feature/docs/README.md")
        );
    }

    #[test]
    fn absolute_output_is_kept() {
        let cfg = config(&["3.11"]).with_output("/tmp/out/README.md");
        assert_eq!(
            target_path(&cfg, Path::new("/work/feature")),
            PathBuf::from("/tmp/out/README.md")
        );
    }

    #[test]
    fn engine_project_writes_nothing() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("engine");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("pyproject.toml"), "[project]\nname = \"OpenStudioLandscapes\"\n").unwrap();

        let err = run(&config(&["3.11"]), &dir).expect_err("engine refused");
        assert!(matches!(err, WriteError::Core(_)));
        assert!(!dir.join("README.md").exists());
    }
}
