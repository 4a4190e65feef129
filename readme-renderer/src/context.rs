//! Template context — serializable rendering payload built from a
//! [`Configuration`] and a [`ProjectIdentity`].

use serde::Serialize;

use readme_core::project::GITHUB_PREFIX;
use readme_core::{community, CommunityChannel, Configuration, ProjectIdentity};

use crate::error::RenderError;

/// Everything the README template can see.
///
/// Built deterministically: the same configuration and identity always
/// produce an equal context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateContext {
    pub identity: IdentityCtx,
    /// Version tokens in the order they were supplied.
    pub versions: Vec<String>,
    /// Enabled, public community rows sorted by feature.
    pub community: Vec<ChannelCtx>,
    pub meta: MetaCtx,
}

/// Feature repository identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityCtx {
    pub repo_name: String,
    pub package: Option<String>,
    pub clone_url: String,
    /// Config models file path inside the repository, when a package is known.
    pub models_path: Option<String>,
    pub models_url: Option<String>,
    /// GitHub heading anchor for `# Feature: <repo_name>`.
    pub anchor: String,
}

/// One community table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelCtx {
    pub feature: String,
    pub github_url: String,
    pub discord_name: String,
    pub discord_url: String,
}

/// Generator info for the "created with" note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaCtx {
    pub generator: String,
    pub generator_url: String,
}

impl From<&CommunityChannel> for ChannelCtx {
    fn from(c: &CommunityChannel) -> Self {
        ChannelCtx {
            feature: c.feature.to_string(),
            github_url: c.github_url(),
            discord_name: c.discord_channel_name.to_string(),
            discord_url: c.discord_url(),
        }
    }
}

impl TemplateContext {
    /// Build a [`TemplateContext`] using the built-in community table.
    pub fn from_parts(config: &Configuration, identity: &ProjectIdentity) -> Self {
        Self::with_channels(config, identity, &community::listed())
    }

    /// Build a [`TemplateContext`] with caller-supplied community rows.
    /// Rows are rendered in the given order.
    pub fn with_channels(
        config: &Configuration,
        identity: &ProjectIdentity,
        channels: &[CommunityChannel],
    ) -> Self {
        TemplateContext {
            identity: IdentityCtx {
                repo_name: identity.repo_name.clone(),
                package: identity.package.clone(),
                clone_url: identity.clone_url(),
                models_path: identity.models_path(),
                models_url: identity
                    .models_path()
                    .map(|path| format!("{GITHUB_PREFIX}{path}")),
                anchor: heading_anchor(&format!("Feature: {}", identity.repo_name)),
            },
            versions: config
                .versions()
                .iter()
                .map(|v| v.as_str().to_string())
                .collect(),
            community: channels.iter().map(ChannelCtx::from).collect(),
            meta: MetaCtx {
                generator: "OpenStudioLandscapesUtil-ReadmeGenerator".to_string(),
                generator_url:
                    "https://github.com/michimussato/OpenStudioLandscapesUtil-ReadmeGenerator"
                        .to_string(),
            },
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

/// GitHub-style heading slug: lowercase, spaces to `-`, punctuation other
/// than `-` and `_` dropped.
fn heading_anchor(heading: &str) -> String {
    heading
        .trim()
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            c if c.is_alphanumeric() || c == '-' || c == '_' => Some(c),
            _ => None,
        })
        .collect()
}
