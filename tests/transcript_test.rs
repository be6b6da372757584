//! Integration tests for transcript persistence.

use replymark::{Message, Role, TranscriptStore};

#[test]
fn file_backed_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    {
        let mut store = TranscriptStore::open(&path).unwrap();
        assert!(store.is_empty());

        store.append(Message::user("Who has the most experience?")).unwrap();
        store
            .append(Message::assistant("**Alice**, with 8 years."))
            .unwrap();
    }

    let store = TranscriptStore::open(&path).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.messages()[0].role, Role::User);
    assert_eq!(store.messages()[1].content, "**Alice**, with 8 years.");
}

#[test]
fn clear_persists_empty_transcript() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    let mut store = TranscriptStore::open(&path).unwrap();
    store.append(Message::user("hello")).unwrap();
    store.clear().unwrap();
    drop(store);

    let store = TranscriptStore::open(&path).unwrap();
    assert!(store.is_empty());
}

#[test]
fn missing_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = TranscriptStore::open(dir.path().join("absent.json")).unwrap();

    assert!(store.is_empty());
    assert!(store.path().is_some());
}

#[test]
fn corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "not json at all").unwrap();

    let result = TranscriptStore::open(&path);
    assert!(matches!(result, Err(replymark::Error::Transcript(_))));
}

#[test]
fn stored_replies_render_independently() {
    // The renderer takes text purely as a parameter; rendering a stored
    // message never touches the store.
    let mut store = TranscriptStore::in_memory();
    store
        .append(Message::assistant("| N |\n|---|\n| 1 |"))
        .unwrap();

    let html = replymark::to_html(&store.messages()[0].content);
    assert!(html.contains("<table class=\"markdown-table\">"));
}
