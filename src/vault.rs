//! Filesystem-backed collaborators: a vault directory of markdown notes and a
//! JSON snapshot of the remote site's note hashes.

use crate::error::GardenError;
use crate::frontmatter::Frontmatter;
use crate::status::{MetadataCache, Publisher, RemoteNoteHashes};
use crate::types::{LocalFile, RemoteHashMap};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

const NOTE_EXTENSION: &str = "md";

/// A vault rooted at a directory. Notes are `.md` files; a note is marked for
/// publishing when its frontmatter sets `publish_key` to `true`.
#[derive(Debug, Clone)]
pub struct Vault {
    root: PathBuf,
    publish_key: String,
}

impl Vault {
    /// Open the vault at `root`, which must be an existing directory.
    pub fn open(root: &Path, publish_key: impl Into<String>) -> Result<Self, GardenError> {
        let root = dunce::canonicalize(root)
            .map_err(|_| GardenError::PathNotInVault(root.to_path_buf()))?;
        if !root.is_dir() {
            return Err(GardenError::PathNotInVault(root));
        }
        Ok(Self {
            root,
            publish_key: publish_key.into(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn publish_key(&self) -> &str {
        &self.publish_key
    }

    /// Absolute path of a vault-relative note.
    pub fn absolute_path(&self, file: &LocalFile) -> PathBuf {
        file.path().split('/').fold(self.root.clone(), |acc, part| acc.join(part))
    }

    /// Vault-relative note for a path given on the command line.
    ///
    /// Relative paths are taken relative to the vault root.
    pub fn local_file(&self, path: &Path) -> Result<LocalFile, GardenError> {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        };
        let canonical =
            dunce::canonicalize(&joined).map_err(|_| GardenError::PathNotInVault(joined.clone()))?;
        relative_note_path(&self.root, &canonical)
            .map(LocalFile::new)
            .ok_or(GardenError::PathNotInVault(canonical))
    }

    /// Walk the vault and return marked notes sorted by path.
    pub fn scan_marked(&self) -> Result<Vec<LocalFile>, GardenError> {
        let mut marked = Vec::new();
        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));
        for entry in walker {
            let entry = entry.map_err(|e| GardenError::MarkedFiles(e.to_string()))?;
            if !entry.file_type().is_file() || !is_note(entry.path()) {
                continue;
            }
            let Some(relative) = relative_note_path(&self.root, entry.path()) else {
                continue;
            };
            let text = match std::fs::read_to_string(entry.path()) {
                Ok(text) => text,
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    warn!(path = %relative, "Skipping note that is not valid UTF-8");
                    continue;
                }
                Err(e) => return Err(GardenError::Io(e)),
            };
            match Frontmatter::parse_for(&relative, &text) {
                Ok(frontmatter) if frontmatter.is_marked_for_publishing(&self.publish_key) => {
                    marked.push(LocalFile::new(relative));
                }
                Ok(_) => {}
                Err(e) => warn!("Skipping note with unreadable frontmatter: {}", e),
            }
        }
        marked.sort();
        debug!(root = %self.root.display(), marked = marked.len(), "Scanned vault");
        Ok(marked)
    }
}

#[async_trait]
impl Publisher for Vault {
    async fn fetch_marked_files(&self) -> Result<Vec<LocalFile>, GardenError> {
        let vault = self.clone();
        tokio::task::spawn_blocking(move || vault.scan_marked())
            .await
            .map_err(|e| GardenError::MarkedFiles(format!("vault scan task failed: {}", e)))?
    }

    async fn render_content(&self, file: &LocalFile) -> Result<String, GardenError> {
        tokio::fs::read_to_string(self.absolute_path(file))
            .await
            .map_err(|e| GardenError::Render {
                path: file.path().to_string(),
                message: e.to_string(),
            })
    }
}

impl MetadataCache for Vault {
    fn read_frontmatter(&self, file: &LocalFile) -> Result<Frontmatter, GardenError> {
        match std::fs::read_to_string(self.absolute_path(file)) {
            Ok(text) => Frontmatter::parse_for(file.path(), &text),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Frontmatter::default()),
            Err(e) => Err(GardenError::Io(e)),
        }
    }
}

/// Remote hashes read from a JSON object of `{ "remote/path.md": "<sha1>" }`.
#[derive(Debug, Clone)]
pub struct JsonRemoteHashes {
    path: PathBuf,
}

impl JsonRemoteHashes {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<RemoteHashMap, GardenError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| self.error(e))?;
        self.parse(&text)
    }

    fn parse(&self, text: &str) -> Result<RemoteHashMap, GardenError> {
        serde_json::from_str(text).map_err(|e| self.error(e))
    }

    fn error(&self, e: impl std::fmt::Display) -> GardenError {
        GardenError::RemoteHashes(format!("{}: {}", self.path.display(), e))
    }
}

#[async_trait]
impl RemoteNoteHashes for JsonRemoteHashes {
    async fn fetch_remote_hashes(&self) -> Result<RemoteHashMap, GardenError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.error(e))?;
        self.parse(&text)
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn is_note(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(NOTE_EXTENSION)
}

/// `/`-joined path of `path` under `root`, or `None` when outside the vault.
fn relative_note_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().to_string()),
            _ => return None,
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}
