//! Property-based tests for hashing, path resolution and classification

use garden::frontmatter::Frontmatter;
use garden::hash::{blob_hash, blob_hash_bytes};
use garden::path::{resolve_path, PathRewriteRules};
use garden::url::{slugify, url_path};
use garden::NoteState;
use proptest::prelude::*;
use sha1::{Digest, Sha1};

proptest! {
    #[test]
    fn blob_hash_matches_reference(content in any::<String>()) {
        let mut hasher = Sha1::new();
        hasher.update(format!("blob {}\0", content.len()).as_bytes());
        hasher.update(content.as_bytes());
        prop_assert_eq!(blob_hash(&content), hex::encode(hasher.finalize()));
    }

    #[test]
    fn blob_hash_is_deterministic(content in any::<Vec<u8>>()) {
        prop_assert_eq!(blob_hash_bytes(&content), blob_hash_bytes(&content));
    }

    #[test]
    fn blob_hash_sensitive_to_appended_byte(content in any::<String>(), extra in any::<char>()) {
        let mut longer = content.clone();
        longer.push(extra);
        prop_assert_ne!(blob_hash(&content), blob_hash(&longer));
    }

    #[test]
    fn unmatched_path_resolves_to_itself(path in "[a-z]{1,8}(/[a-z]{1,8}){0,3}\\.md") {
        let rules = PathRewriteRules::parse("ZZZ:public\nYYY/:");
        prop_assert_eq!(resolve_path(&Frontmatter::default(), &path, &rules), path);
    }

    #[test]
    fn rule_replaces_only_the_prefix(rest in "[a-z]{1,8}(/[a-z]{1,8}){0,2}\\.md") {
        let rules = PathRewriteRules::parse("notes:public");
        let path = format!("notes/{}", rest);
        prop_assert_eq!(
            resolve_path(&Frontmatter::default(), &path, &rules),
            format!("public/{}", rest)
        );
    }

    #[test]
    fn url_path_ends_with_slash(path in "[A-Za-z ]{1,10}(/[A-Za-z ]{1,10}){0,2}\\.md", slug in any::<bool>()) {
        prop_assert!(url_path(&path, slug).ends_with('/'));
    }

    #[test]
    fn slug_is_ascii_lowercase_dash_separated(segment in "[A-Za-z0-9\u{c0}-\u{ff} &'_.,-]{0,24}") {
        let slug = slugify(&segment);
        prop_assert!(!slug.starts_with('-') && !slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
        prop_assert!(slug.chars().all(|c| c == '-' || c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn classification_is_total(local in "[0-9a-f]{40}", remote in proptest::option::of("[0-9a-f]{0,40}")) {
        let state = NoteState::classify(&local, remote.as_deref());
        let expected = match remote.as_deref() {
            None | Some("") => NoteState::Unpublished,
            Some(r) if r == local => NoteState::Published,
            Some(_) => NoteState::Changed,
        };
        prop_assert_eq!(state, expected);
    }
}
