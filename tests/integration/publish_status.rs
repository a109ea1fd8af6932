//! Publish status classification against in-memory collaborators.

use super::test_utils::{manager_for, MemoryGarden};
use garden::hash::blob_hash;
use garden::{GardenError, LocalFile};
use std::sync::Arc;

fn paths(files: &[LocalFile]) -> Vec<&str> {
    files.iter().map(|f| f.path()).collect()
}

#[tokio::test]
async fn test_every_marked_note_in_exactly_one_list() {
    let garden = MemoryGarden::new()
        .note("a.md", "alpha")
        .note("b.md", "beta")
        .note("c.md", "gamma")
        .note("d.md", "delta")
        .remote("a.md", &blob_hash("alpha"))
        .remote("b.md", &blob_hash("beta v1"))
        .remote("z.md", &blob_hash("zeta"));
    let status = manager_for(Arc::new(garden), "")
        .get_publish_status()
        .await
        .unwrap();

    let mut all: Vec<&str> = paths(&status.unpublished_notes);
    all.extend(paths(&status.published_notes));
    all.extend(paths(&status.changed_notes));
    all.sort();
    assert_eq!(all, vec!["a.md", "b.md", "c.md", "d.md"]);

    assert_eq!(paths(&status.published_notes), vec!["a.md"]);
    assert_eq!(paths(&status.changed_notes), vec!["b.md"]);
    assert_eq!(paths(&status.unpublished_notes), vec!["c.md", "d.md"]);
    assert_eq!(status.deleted_note_paths, vec!["z.md".to_string()]);
}

#[tokio::test]
async fn test_js_assets_never_deleted() {
    let garden = MemoryGarden::new()
        .remote("src/site/scripts/search.js", "h1")
        .remote("notes/old.md", "h2")
        .remote("notes/old.md.js", "h3");
    let manager = manager_for(Arc::new(garden), "");

    let status = manager.get_publish_status().await.unwrap();
    assert_eq!(status.deleted_note_paths, vec!["notes/old.md".to_string()]);
    assert_eq!(
        manager.get_deleted_note_paths().await.unwrap(),
        vec!["notes/old.md".to_string()]
    );
}

#[tokio::test]
async fn test_rewrite_rules_apply_before_lookup() {
    let garden = MemoryGarden::new()
        .note("vault/notes/a.md", "alpha")
        .remote("a.md", &blob_hash("alpha"))
        .remote("vault/notes/a.md", &blob_hash("stale"));
    let status = manager_for(Arc::new(garden), "vault/notes/:")
        .get_publish_status()
        .await
        .unwrap();

    assert_eq!(paths(&status.published_notes), vec!["vault/notes/a.md"]);
    assert_eq!(status.deleted_note_paths, vec!["vault/notes/a.md".to_string()]);
}

#[tokio::test]
async fn test_dg_path_override_resolves_remote_path() {
    let garden = MemoryGarden::new()
        .note("inbox/idea.md", "idea")
        .dg_path("inbox/idea.md", "garden/ideas/")
        .remote("garden/ideas/idea.md", &blob_hash("idea"));
    let status = manager_for(Arc::new(garden), "inbox:public")
        .get_publish_status()
        .await
        .unwrap();

    assert_eq!(paths(&status.published_notes), vec!["inbox/idea.md"]);
    assert!(status.deleted_note_paths.is_empty());
    assert!(status.is_in_sync());
}

#[tokio::test]
async fn test_output_sorted_and_repeatable() {
    let garden = Arc::new(
        MemoryGarden::new()
            .note("b/2.md", "x")
            .note("a/1.md", "x")
            .note("B/3.md", "x")
            .note("c.md", "x")
            .remote("y.md", "1")
            .remote("x.md", "2")
            .remote("Y.md", "3"),
    );
    let manager = manager_for(garden, "");

    let first = manager.get_publish_status().await.unwrap();
    let second = manager.get_publish_status().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(
        paths(&first.unpublished_notes),
        vec!["B/3.md", "a/1.md", "b/2.md", "c.md"]
    );
    assert_eq!(
        first.deleted_note_paths,
        vec!["Y.md".to_string(), "x.md".to_string(), "y.md".to_string()]
    );
}

#[tokio::test]
async fn test_deleted_only_skips_rendering() {
    let garden = Arc::new(
        MemoryGarden::new()
            .note("a.md", "alpha")
            .note("b.md", "beta")
            .remote("gone.md", "h"),
    );
    let manager = manager_for(garden.clone(), "");

    let deleted = manager.get_deleted_note_paths().await.unwrap();
    assert_eq!(deleted, vec!["gone.md".to_string()]);
    assert_eq!(garden.render_count(), 0);

    manager.get_publish_status().await.unwrap();
    assert_eq!(garden.render_count(), 2);
}

#[tokio::test]
async fn test_remote_failure_propagates() {
    let garden = MemoryGarden {
        fail_remote: true,
        ..MemoryGarden::new().note("a.md", "alpha")
    };
    let manager = manager_for(Arc::new(garden), "");

    let err = manager.get_publish_status().await.unwrap_err();
    assert!(matches!(err, GardenError::RemoteHashes(_)));
    let err = manager.get_deleted_note_paths().await.unwrap_err();
    assert!(matches!(err, GardenError::RemoteHashes(_)));
}

#[tokio::test]
async fn test_render_failure_aborts_whole_computation() {
    let garden = MemoryGarden {
        fail_render_for: Some("b.md".to_string()),
        ..MemoryGarden::new().note("a.md", "alpha").note("b.md", "beta")
    };
    let err = manager_for(Arc::new(garden), "")
        .get_publish_status()
        .await
        .unwrap_err();
    match err {
        GardenError::Render { path, .. } => assert_eq!(path, "b.md"),
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_empty_inputs() {
    let status = manager_for(Arc::new(MemoryGarden::new()), "notes:public")
        .get_publish_status()
        .await
        .unwrap();
    assert_eq!(status, garden::PublishStatus::default());
    assert!(status.is_in_sync());
}
