//! Feature repository identity discovery.
//!
//! `discover(dir)` looks at the Feature's `pyproject.toml` first and falls
//! back to the directory name. The engine repository itself is refused.
//!
//! ```text
//! <dir>/pyproject.toml
//!   [project]
//!   name = "OpenStudioLandscapes-Ayon"        -> repo_name
//!   [tool.setuptools]
//!   packages = ["OpenStudioLandscapes.Ayon"]  -> package
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{io_err, CoreError};

/// Name of the engine repository, which is not a Feature.
pub const ENGINE_NAME: &str = "OpenStudioLandscapes";

/// Account every Feature repository lives under.
pub const GITHUB_PREFIX: &str = "https://github.com/michimussato/";

const MANIFEST: &str = "pyproject.toml";

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Identity of the Feature repository a README is rendered for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectIdentity {
    /// Repository name, e.g. `OpenStudioLandscapes-Ayon`.
    pub repo_name: String,
    /// Python package, e.g. `OpenStudioLandscapes.Ayon`, when declared.
    pub package: Option<String>,
}

impl ProjectIdentity {
    /// Identity with no package, used when the name is already known.
    pub fn named(repo_name: impl Into<String>) -> Self {
        Self {
            repo_name: repo_name.into(),
            package: None,
        }
    }

    /// `https://github.com/<account>/<repo>`
    pub fn repo_url(&self) -> String {
        format!("{GITHUB_PREFIX}{}", self.repo_name)
    }

    /// Clone URL, `https://github.com/<account>/<repo>.git`.
    pub fn clone_url(&self) -> String {
        format!("{}.git", self.repo_url())
    }

    /// Repository-relative link to the Feature's config models, e.g.
    /// `OpenStudioLandscapes-Ayon/tree/main/src/OpenStudioLandscapes/Ayon/config/models.py`.
    /// `None` without a declared package.
    pub fn models_path(&self) -> Option<String> {
        let package = self.package.as_deref()?.trim();
        if package.is_empty() {
            return None;
        }
        Some(format!(
            "{}/tree/main/src/{}/config/models.py",
            self.repo_name,
            package.replace('.', "/")
        ))
    }
}

// ---------------------------------------------------------------------------
// Manifest shape (only the fields we read)
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
struct PyProject {
    #[serde(default)]
    project: Option<ProjectTable>,
    #[serde(default)]
    tool: Option<ToolTable>,
}

#[derive(Debug, Default, Deserialize)]
struct ProjectTable {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ToolTable {
    #[serde(default)]
    setuptools: Option<SetuptoolsTable>,
}

#[derive(Debug, Default, Deserialize)]
struct SetuptoolsTable {
    // Either a list of package names or a `{ find = { ... } }` table.
    #[serde(default)]
    packages: Option<toml::Value>,
}

impl PyProject {
    fn name(&self) -> Option<&str> {
        self.project
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }

    fn first_package(&self) -> Option<String> {
        self.tool
            .as_ref()?
            .setuptools
            .as_ref()?
            .packages
            .as_ref()?
            .as_array()?
            .first()?
            .as_str()
            .map(str::to_string)
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Resolve the identity of the Feature repository rooted at `dir`.
pub fn discover(dir: &Path) -> Result<ProjectIdentity, CoreError> {
    let manifest = dir.join(MANIFEST);
    let parsed = if manifest.is_file() {
        Some(read_manifest(&manifest)?)
    } else {
        tracing::debug!("no {MANIFEST} in {}", dir.display());
        None
    };

    let repo_name = match parsed.as_ref().and_then(PyProject::name) {
        Some(name) => name.to_string(),
        None => dir_name(dir)?,
    };
    let identity = ProjectIdentity {
        repo_name,
        package: parsed.as_ref().and_then(PyProject::first_package),
    };

    if identity.repo_name == ENGINE_NAME {
        return Err(CoreError::EngineProject {
            name: identity.repo_name,
        });
    }

    tracing::debug!(
        repo = %identity.repo_name,
        package = identity.package.as_deref().unwrap_or("-"),
        "resolved project identity"
    );
    Ok(identity)
}

fn read_manifest(path: &Path) -> Result<PyProject, CoreError> {
    let content = fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    toml::from_str(&content).map_err(|source| CoreError::Manifest {
        path: path.to_path_buf(),
        source,
    })
}

fn dir_name(dir: &Path) -> Result<String, CoreError> {
    let resolved: PathBuf = dir.canonicalize().map_err(|e| io_err(dir, e))?;
    resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| CoreError::UnnamedProject {
            path: resolved.clone(),
        })
}
