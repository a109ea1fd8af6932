//! In-memory collaborators for status tests.

use async_trait::async_trait;
use garden::frontmatter::Frontmatter;
use garden::path::PathRewriteRules;
use garden::status::{MetadataCache, Publisher, RemoteNoteHashes};
use garden::{GardenError, LocalFile, PublishStatusManager, RemoteHashMap};
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A vault and remote site held in memory.
#[derive(Default)]
pub struct MemoryGarden {
    pub remote: RemoteHashMap,
    pub notes: HashMap<String, String>,
    pub frontmatter: HashMap<String, Frontmatter>,
    pub fail_remote: bool,
    pub fail_render_for: Option<String>,
    pub render_calls: AtomicUsize,
}

impl MemoryGarden {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn note(mut self, path: &str, content: &str) -> Self {
        self.notes.insert(path.to_string(), content.to_string());
        self
    }

    pub fn remote(mut self, path: &str, hash: &str) -> Self {
        self.remote.insert(path.to_string(), hash.to_string());
        self
    }

    pub fn dg_path(mut self, note: &str, dg_path: &str) -> Self {
        let fm = [("dg-path".to_string(), json!(dg_path))].into_iter().collect();
        self.frontmatter.insert(note.to_string(), fm);
        self
    }

    pub fn render_count(&self) -> usize {
        self.render_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteNoteHashes for MemoryGarden {
    async fn fetch_remote_hashes(&self) -> Result<RemoteHashMap, GardenError> {
        if self.fail_remote {
            return Err(GardenError::RemoteHashes("site unreachable".to_string()));
        }
        Ok(self.remote.clone())
    }
}

#[async_trait]
impl Publisher for MemoryGarden {
    async fn fetch_marked_files(&self) -> Result<Vec<LocalFile>, GardenError> {
        // Reverse path order.
        let mut files: Vec<LocalFile> = self.notes.keys().map(LocalFile::new).collect();
        files.sort();
        files.reverse();
        Ok(files)
    }

    async fn render_content(&self, file: &LocalFile) -> Result<String, GardenError> {
        self.render_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_render_for.as_deref() == Some(file.path()) {
            return Err(GardenError::Render {
                path: file.path().to_string(),
                message: "template error".to_string(),
            });
        }
        Ok(self.notes[file.path()].clone())
    }
}

impl MetadataCache for MemoryGarden {
    fn read_frontmatter(&self, file: &LocalFile) -> Result<Frontmatter, GardenError> {
        Ok(self.frontmatter.get(file.path()).cloned().unwrap_or_default())
    }
}

pub fn manager_for(garden: Arc<MemoryGarden>, rules: &str) -> PublishStatusManager {
    PublishStatusManager::new(
        garden.clone(),
        garden.clone(),
        garden,
        PathRewriteRules::parse(rules),
    )
}
