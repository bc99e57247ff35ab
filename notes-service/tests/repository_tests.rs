//! Adapter tests against a real Postgres.
//!
//! Run with `cargo test -- --ignored` once a server is reachable at
//! `DATABASE_URL` (defaults to localhost:5433).

mod common;

use chrono::Utc;
use common::TestDb;
use notes_service::domain::identity::errors::StoreError;
use notes_service::domain::identity::models::Identity;
use notes_service::domain::identity::models::NewIdentity;
use notes_service::domain::identity::ports::CredentialStore;
use notes_service::domain::note::models::NoteText;
use notes_service::domain::note::ports::NoteStore;
use notes_service::outbound::repositories::PostgresCredentialStore;
use notes_service::outbound::repositories::PostgresNoteStore;

fn new_identity(username: &str, email: &str) -> NewIdentity {
    NewIdentity {
        username: username.to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
    }
}

async fn create(store: &PostgresCredentialStore, username: &str, email: &str) -> Identity {
    match store.create(new_identity(username, email)).await {
        Ok(identity) => identity,
        Err(e) => panic!("Failed to create identity: {}", e),
    }
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_create_and_find_identity() {
    let db = TestDb::new().await;
    let store = PostgresCredentialStore::new(db.pool.clone());

    let created = create(&store, "alice", "alice@example.com").await;
    assert!(created.refresh_token.is_none());

    let by_email = store.find_by_email("alice@example.com").await.unwrap().unwrap();
    assert_eq!(by_email.id, created.id);

    let by_id = store.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(by_id.username, "alice");

    let by_either = store
        .find_by_username_or_email("alice", "other@example.com")
        .await
        .unwrap();
    assert!(by_either.is_some());
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_duplicate_identity_is_conflict() {
    let db = TestDb::new().await;
    let store = PostgresCredentialStore::new(db.pool.clone());

    create(&store, "alice", "alice@example.com").await;

    let same_email = store
        .create(new_identity("bob", "alice@example.com"))
        .await;
    assert!(matches!(same_email, Err(StoreError::Conflict)));

    let same_username = store.create(new_identity("alice", "bob@example.com")).await;
    assert!(matches!(same_username, Err(StoreError::Conflict)));
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_replace_refresh_token_is_compare_and_swap() {
    let db = TestDb::new().await;
    let store = PostgresCredentialStore::new(db.pool.clone());
    let identity = create(&store, "alice", "alice@example.com").await;

    // Nothing on file yet
    assert!(!store
        .replace_refresh_token(identity.id, "first", "second")
        .await
        .unwrap());

    store.update_refresh_token(identity.id, "first").await.unwrap();

    assert!(store
        .replace_refresh_token(identity.id, "first", "second")
        .await
        .unwrap());

    // Stale expected value loses
    assert!(!store
        .replace_refresh_token(identity.id, "first", "third")
        .await
        .unwrap());

    let stored = store.find_by_id(identity.id).await.unwrap().unwrap();
    assert_eq!(stored.refresh_token.as_deref(), Some("second"));
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_concurrent_replace_has_single_winner() {
    let db = TestDb::new().await;
    let store = PostgresCredentialStore::new(db.pool.clone());
    let identity = create(&store, "alice", "alice@example.com").await;
    store.update_refresh_token(identity.id, "current").await.unwrap();

    let (left, right) = tokio::join!(
        store.replace_refresh_token(identity.id, "current", "left"),
        store.replace_refresh_token(identity.id, "current", "right"),
    );

    let winners = [left.unwrap(), right.unwrap()]
        .iter()
        .filter(|swapped| **swapped)
        .count();
    assert_eq!(winners, 1);
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_note_writes_are_scoped_to_owner() {
    let db = TestDb::new().await;
    let credentials = PostgresCredentialStore::new(db.pool.clone());
    let notes = PostgresNoteStore::new(db.pool.clone());

    let alice = create(&credentials, "alice", "alice@example.com").await.id;
    let mallory = create(&credentials, "mallory", "mallory@example.com").await.id;

    let text = NoteText::new("buy milk").unwrap();
    let note = notes.insert(alice, &text, Utc::now()).await.unwrap();
    assert_eq!(note.user_id, alice);
    assert!(!note.completed);

    let other = NoteText::new("overwritten").unwrap();
    assert!(!notes.update_text(mallory, note.id, &other).await.unwrap());
    assert!(!notes.set_completed(mallory, note.id, true).await.unwrap());
    assert!(!notes.delete(mallory, note.id).await.unwrap());
    assert_eq!(notes.delete_all(mallory).await.unwrap(), 0);
    assert!(notes.list(mallory).await.unwrap().is_empty());

    let listed = notes.list(alice).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].note, "buy milk");
    assert!(!listed[0].completed);
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_note_lifecycle() {
    let db = TestDb::new().await;
    let credentials = PostgresCredentialStore::new(db.pool.clone());
    let notes = PostgresNoteStore::new(db.pool.clone());
    let owner = create(&credentials, "alice", "alice@example.com").await.id;

    let first = notes
        .insert(owner, &NoteText::new("buy milk").unwrap(), Utc::now())
        .await
        .unwrap();
    let second = notes
        .insert(owner, &NoteText::new("walk the dog").unwrap(), Utc::now())
        .await
        .unwrap();

    assert!(notes
        .update_text(owner, first.id, &NoteText::new("buy oat milk").unwrap())
        .await
        .unwrap());
    assert!(notes.set_completed(owner, first.id, true).await.unwrap());

    let listed = notes.list(owner).await.unwrap();
    assert_eq!(listed[0].id, first.id);
    assert_eq!(listed[0].note, "buy oat milk");
    assert!(listed[0].completed);

    assert_eq!(notes.delete_completed(owner).await.unwrap(), 1);
    assert_eq!(notes.delete_completed(owner).await.unwrap(), 0);

    assert!(notes.delete(owner, second.id).await.unwrap());
    assert!(!notes.delete(owner, second.id).await.unwrap());
    assert_eq!(notes.delete_all(owner).await.unwrap(), 0);
}
