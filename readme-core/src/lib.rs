//! Readme core library — configuration, identity discovery, errors.
//!
//! Public API surface:
//! - [`types`] — version tokens, verbosity, [`Configuration`]
//! - [`project`] — [`ProjectIdentity`] discovery from a Feature directory
//! - [`community`] — the static community channel table
//! - [`error`] — [`CoreError`]

pub mod community;
pub mod error;
pub mod project;
pub mod types;

pub use community::{CommunityChannel, COMMUNITY_CHANNELS};
pub use error::CoreError;
pub use project::ProjectIdentity;
pub use types::{Configuration, OutputMode, Verbosity, VersionToken, DEFAULT_OUTPUT};
