//! Blob hash verification against the git blob scheme.

use garden::hash::{blob_hash, blob_hash_bytes};
use sha1::{Digest, Sha1};

fn reference(content: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(format!("blob {}\0", content.len()).as_bytes());
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

#[test]
fn test_empty_content_is_sha1_of_bare_header() {
    let mut hasher = Sha1::new();
    hasher.update(b"blob 0\0");
    assert_eq!(blob_hash(""), hex::encode(hasher.finalize()));
}

#[test]
fn test_matches_reference_scheme() {
    for content in [
        "# Title\n",
        "---\ndg-publish: true\n---\nBody with [[links]]\n",
        "\u{1f331} garden \u{4e2d}\u{6587}",
        "line\r\nendings\r\n",
    ] {
        assert_eq!(blob_hash(content), reference(content), "content: {:?}", content);
    }
}

#[test]
fn test_str_and_bytes_agree() {
    let content = "na\u{ef}ve caf\u{e9}";
    assert_eq!(blob_hash(content), blob_hash_bytes(content.as_bytes()));
}
