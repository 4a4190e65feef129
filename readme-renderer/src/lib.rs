//! # readme-renderer
//!
//! Tera-based engine that renders a Feature `README.md` from a
//! [`Configuration`](readme_core::Configuration) and a
//! [`ProjectIdentity`](readme_core::ProjectIdentity).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use readme_core::{Configuration, ProjectIdentity, Verbosity, VersionToken};
//! use readme_renderer::{Renderer, TemplateContext};
//!
//! fn render() -> Result<String, Box<dyn std::error::Error>> {
//!     let config = Configuration::new(vec![VersionToken::new("3.11")?], Verbosity::Quiet)?;
//!     let identity = ProjectIdentity::named("OpenStudioLandscapes-Ayon");
//!     let ctx = TemplateContext::from_parts(&config, &identity);
//!     Ok(Renderer::new()?.render(&ctx)?)
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::TemplateContext;
pub use engine::Renderer;
pub use error::RenderError;
