//! Shared types for publish status computation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Remote snapshot: canonical remote path -> hex git blob hash.
pub type RemoteHashMap = HashMap<String, String>;

/// Remote paths with this suffix are generated site assets, never notes.
pub const RESERVED_ASSET_SUFFIX: &str = ".js";

/// A local note, identified by its vault-relative `/`-separated path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalFile {
    path: String,
}

impl LocalFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Final path segment, including the extension.
    pub fn base_name(&self) -> &str {
        base_name(&self.path)
    }
}

impl fmt::Display for LocalFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Final `/`-separated segment of a path.
pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
