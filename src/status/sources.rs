//! Collaborator interfaces consumed by the status comparator.
//!
//! Implementations own all I/O. The comparator only reads through them and
//! passes their errors straight back to its caller.

use crate::error::GardenError;
use crate::frontmatter::Frontmatter;
use crate::types::{LocalFile, RemoteHashMap};
use async_trait::async_trait;

/// Source of the remote site's note hashes.
#[async_trait]
pub trait RemoteNoteHashes: Send + Sync {
    /// Snapshot of remote path -> git blob hash.
    async fn fetch_remote_hashes(&self) -> Result<RemoteHashMap, GardenError>;
}

/// Local side of publishing: which notes are marked, and what they publish as.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Notes currently marked for publishing.
    async fn fetch_marked_files(&self) -> Result<Vec<LocalFile>, GardenError>;

    /// Text the note would be published as.
    async fn render_content(&self, file: &LocalFile) -> Result<String, GardenError>;
}

/// Read-only frontmatter lookup.
pub trait MetadataCache: Send + Sync {
    /// Frontmatter of `file`; an empty map when the note has none.
    fn read_frontmatter(&self, file: &LocalFile) -> Result<Frontmatter, GardenError>;
}
