//! Git blob hashing for note content.
//!
//! A note's identity on the remote side is the SHA1 of its git blob framing:
//! `"blob " || utf8_len || NUL || content`. Computing the same value locally
//! lets us compare against the remote tree without downloading note bodies.

use sha1::{Digest, Sha1};

/// Hex SHA1 of `content` framed as a git blob.
///
/// The length in the header is the UTF-8 byte length, not the char count.
pub fn blob_hash(content: &str) -> String {
    blob_hash_bytes(content.as_bytes())
}

/// Hex SHA1 of raw bytes framed as a git blob.
pub fn blob_hash_bytes(content: &[u8]) -> String {
    let mut hasher = GitBlobHasher::new(content.len() as u64);
    hasher.update(content);
    hasher.finalize()
}

/// Incremental git blob hasher for content whose total length is known upfront.
pub struct GitBlobHasher {
    inner: Sha1,
}

impl GitBlobHasher {
    /// Start a blob of `len` bytes; the header is written immediately.
    pub fn new(len: u64) -> Self {
        let mut inner = Sha1::new();
        inner.update(format!("blob {}\0", len).as_bytes());
        Self { inner }
    }

    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Finalize and return the lowercase hex digest.
    pub fn finalize(self) -> String {
        hex::encode(self.inner.finalize())
    }
}
