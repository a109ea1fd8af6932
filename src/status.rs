//! Publish status: compare marked local notes against the remote snapshot.
//!
//! Every marked note lands in exactly one of unpublished, published or changed,
//! decided by comparing its git blob hash with the hash stored at its resolved
//! remote path. Remote paths no marked note resolves to are reported as deleted,
//! except generated `.js` assets. All lists are sorted, so identical inputs
//! always give identical output.

use crate::error::GardenError;
use crate::hash::blob_hash;
use crate::path::{resolve_path, PathRewriteRules};
use crate::types::{LocalFile, RemoteHashMap, RESERVED_ASSET_SUFFIX};
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

mod presentation;
mod sources;

pub use presentation::{format_deleted_paths_text, format_publish_status_text};
pub use sources::{MetadataCache, Publisher, RemoteNoteHashes};

/// Publish state of one marked note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteState {
    Unpublished,
    Published,
    Changed,
}

impl NoteState {
    /// Classify a note from its local hash and the remote hash at its path.
    /// An empty remote hash counts as absent.
    pub fn classify(local_hash: &str, remote_hash: Option<&str>) -> Self {
        match remote_hash {
            None | Some("") => NoteState::Unpublished,
            Some(remote) if remote == local_hash => NoteState::Published,
            Some(_) => NoteState::Changed,
        }
    }
}

/// Result of one status computation. Each list is sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishStatus {
    pub unpublished_notes: Vec<LocalFile>,
    pub published_notes: Vec<LocalFile>,
    pub changed_notes: Vec<LocalFile>,
    pub deleted_note_paths: Vec<String>,
}

impl PublishStatus {
    /// Number of marked notes covered by the three note lists.
    pub fn marked_count(&self) -> usize {
        self.unpublished_notes.len() + self.published_notes.len() + self.changed_notes.len()
    }

    /// True when the remote already matches every marked note and has nothing extra.
    pub fn is_in_sync(&self) -> bool {
        self.unpublished_notes.is_empty()
            && self.changed_notes.is_empty()
            && self.deleted_note_paths.is_empty()
    }

    fn push(&mut self, file: LocalFile, state: NoteState) {
        match state {
            NoteState::Unpublished => self.unpublished_notes.push(file),
            NoteState::Published => self.published_notes.push(file),
            NoteState::Changed => self.changed_notes.push(file),
        }
    }

    fn sort(&mut self) {
        self.unpublished_notes.sort();
        self.published_notes.sort();
        self.changed_notes.sort();
        self.deleted_note_paths.sort();
    }
}

/// Computes publish status from injected collaborators.
///
/// Holds no mutable state; concurrent calls are independent.
pub struct PublishStatusManager {
    remote: Arc<dyn RemoteNoteHashes>,
    publisher: Arc<dyn Publisher>,
    metadata: Arc<dyn MetadataCache>,
    rules: PathRewriteRules,
}

impl PublishStatusManager {
    pub fn new(
        remote: Arc<dyn RemoteNoteHashes>,
        publisher: Arc<dyn Publisher>,
        metadata: Arc<dyn MetadataCache>,
        rules: PathRewriteRules,
    ) -> Self {
        Self {
            remote,
            publisher,
            metadata,
            rules,
        }
    }

    pub fn rules(&self) -> &PathRewriteRules {
        &self.rules
    }

    /// Classify every marked note and collect deleted remote paths.
    ///
    /// Notes are rendered and hashed concurrently. The first collaborator error
    /// aborts the whole computation.
    pub async fn get_publish_status(&self) -> Result<PublishStatus, GardenError> {
        let (remote_hashes, marked) = self.fetch_snapshot().await?;

        let classified = try_join_all(
            marked
                .iter()
                .map(|file| self.classify_file(file, &remote_hashes)),
        )
        .await?;

        let mut status = PublishStatus::default();
        let mut resolved = HashSet::with_capacity(classified.len());
        for (file, (remote_path, state)) in marked.into_iter().zip(classified) {
            resolved.insert(remote_path);
            status.push(file, state);
        }
        status.deleted_note_paths = deleted_paths(&remote_hashes, &resolved);
        status.sort();

        info!(
            unpublished = status.unpublished_notes.len(),
            published = status.published_notes.len(),
            changed = status.changed_notes.len(),
            deleted = status.deleted_note_paths.len(),
            "Computed publish status"
        );
        Ok(status)
    }

    /// Deleted remote paths only; skips rendering and hashing notes.
    pub async fn get_deleted_note_paths(&self) -> Result<Vec<String>, GardenError> {
        let (remote_hashes, marked) = self.fetch_snapshot().await?;
        let resolved: HashSet<String> =
            try_join_all(marked.iter().map(|file| self.resolve_remote_path(file)))
                .await?
                .into_iter()
                .collect();
        let mut deleted = deleted_paths(&remote_hashes, &resolved);
        deleted.sort();
        debug!(deleted = deleted.len(), "Computed deleted note paths");
        Ok(deleted)
    }

    /// Remote path the note at `file` publishes to.
    pub fn remote_path(&self, file: &LocalFile) -> Result<String, GardenError> {
        let frontmatter = self.metadata.read_frontmatter(file)?;
        Ok(resolve_path(&frontmatter, file.path(), &self.rules))
    }

    /// `remote_path` with the metadata read moved onto the blocking pool.
    async fn resolve_remote_path(&self, file: &LocalFile) -> Result<String, GardenError> {
        let metadata = Arc::clone(&self.metadata);
        let owned = file.clone();
        let frontmatter = tokio::task::spawn_blocking(move || metadata.read_frontmatter(&owned))
            .await
            .map_err(|e| GardenError::Frontmatter {
                path: file.path().to_string(),
                message: format!("metadata read task failed: {}", e),
            })??;
        Ok(resolve_path(&frontmatter, file.path(), &self.rules))
    }

    async fn fetch_snapshot(&self) -> Result<(RemoteHashMap, Vec<LocalFile>), GardenError> {
        let (remote_hashes, marked) = futures::try_join!(
            self.remote.fetch_remote_hashes(),
            self.publisher.fetch_marked_files()
        )?;
        debug!(
            remote = remote_hashes.len(),
            marked = marked.len(),
            "Fetched publish snapshot"
        );
        Ok((remote_hashes, marked))
    }

    async fn classify_file(
        &self,
        file: &LocalFile,
        remote_hashes: &RemoteHashMap,
    ) -> Result<(String, NoteState), GardenError> {
        let content = self.publisher.render_content(file).await?;
        let local_hash = blob_hash(&content);
        let remote_path = self.resolve_remote_path(file).await?;
        let state = NoteState::classify(
            &local_hash,
            remote_hashes.get(&remote_path).map(String::as_str),
        );
        debug!(path = %file, remote_path = %remote_path, ?state, "Classified note");
        Ok((remote_path, state))
    }
}

/// Remote keys no marked note resolves to, minus generated `.js` assets. Unsorted.
fn deleted_paths(remote_hashes: &RemoteHashMap, resolved: &HashSet<String>) -> Vec<String> {
    remote_hashes
        .keys()
        .filter(|key| !resolved.contains(*key) && !key.ends_with(RESERVED_ASSET_SUFFIX))
        .cloned()
        .collect()
}
