//! # readme-writer
//!
//! README file writer and the render-then-write pipeline.
//!
//! Call [`pipeline::run`] with a [`Configuration`](readme_core::Configuration)
//! and a project directory to discover the Feature, render its README and
//! write, preview, or diff it.

pub mod diff;
pub mod error;
pub mod pipeline;
pub mod writer;

pub use diff::diff_output;
pub use error::WriteError;
pub use pipeline::{run, Action, PipelineOutcome};
pub use writer::{write_document, WriteResult};
