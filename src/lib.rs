//! Garden: publish status for digital garden vaults
//!
//! Decides, for every note marked for publishing, whether the remote site has
//! it unpublished, unchanged or changed, and which remote notes no longer have
//! a local counterpart. Notes are compared by git blob hash at their resolved
//! remote path.

pub mod cli;
pub mod config;
pub mod encoding;
pub mod error;
pub mod frontmatter;
pub mod hash;
pub mod logging;
pub mod path;
pub mod status;
pub mod types;
pub mod url;
pub mod vault;

pub use error::GardenError;
pub use status::{NoteState, PublishStatus, PublishStatusManager};
pub use types::{LocalFile, RemoteHashMap};
