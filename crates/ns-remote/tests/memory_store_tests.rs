use googletest::prelude::*;
use ns_remote::{DocumentStore, Fields, MemoryBackend};
use serde_json::Value;

fn note_fields(owner_id: &str, title: &str, created_at: i64) -> Fields {
    let mut fields = Fields::new();
    fields.insert("ownerId".to_string(), Value::from(owner_id));
    fields.insert("title".to_string(), Value::from(title));
    fields.insert("content".to_string(), Value::from("body"));
    fields.insert("createdAt".to_string(), Value::from(created_at));
    fields
}

#[tokio::test]
async fn given_created_document_when_read_by_id_then_fields_round_trip() {
    // Given
    let store = MemoryBackend::new();
    let fields = note_fields("u-1", "Groceries", 100);

    // When
    let id = store.create("notes", fields.clone()).await.unwrap();
    let read = store.read_by_id("notes", &id).await.unwrap();

    // Then
    assert_that!(read, some(eq(&fields)));
}

#[tokio::test]
async fn given_put_at_chosen_id_when_put_again_then_document_is_replaced() {
    let store = MemoryBackend::new();
    let mut first = Fields::new();
    first.insert("name".to_string(), Value::from("Rohan"));
    store.put_by_id("users", "u-1", first).await.unwrap();

    let mut second = Fields::new();
    second.insert("name".to_string(), Value::from("Sahoo"));
    store.put_by_id("users", "u-1", second.clone()).await.unwrap();

    let read = store.read_by_id("users", "u-1").await.unwrap();
    assert_that!(read, some(eq(&second)));
}

#[tokio::test]
async fn given_existing_document_when_updated_then_fields_merge() {
    // Given
    let store = MemoryBackend::new();
    let id = store
        .create("notes", note_fields("u-1", "Groceries", 100))
        .await
        .unwrap();

    // When: updating only the title
    let mut patch = Fields::new();
    patch.insert("title".to_string(), Value::from("Errands"));
    store.update_by_id("notes", &id, patch).await.unwrap();

    // Then: other fields are untouched
    let read = store.read_by_id("notes", &id).await.unwrap().unwrap();
    assert_that!(read.get("title").and_then(Value::as_str), some(eq("Errands")));
    assert_that!(read.get("content").and_then(Value::as_str), some(eq("body")));
    assert_that!(read.get("ownerId").and_then(Value::as_str), some(eq("u-1")));
}

#[tokio::test]
async fn given_missing_document_when_updated_then_not_found() {
    let store = MemoryBackend::new();

    let result = store
        .update_by_id("notes", "missing", Fields::new())
        .await;

    assert_that!(result.unwrap_err().is_not_found(), eq(true));
}

#[tokio::test]
async fn given_deleted_document_when_deleted_again_then_both_calls_succeed() {
    let store = MemoryBackend::new();
    let id = store
        .create("notes", note_fields("u-1", "Groceries", 100))
        .await
        .unwrap();

    store.delete_by_id("notes", &id).await.unwrap();
    store.delete_by_id("notes", &id).await.unwrap();

    let read = store.read_by_id("notes", &id).await.unwrap();
    assert_that!(read, none());
}

#[tokio::test]
async fn given_mixed_owners_when_querying_then_only_owner_documents_sorted_descending() {
    // Given: three documents for u-1 and one for u-2, out of order
    let store = MemoryBackend::new();
    store.create("notes", note_fields("u-1", "second", 200)).await.unwrap();
    store.create("notes", note_fields("u-2", "other", 999)).await.unwrap();
    store.create("notes", note_fields("u-1", "third", 300)).await.unwrap();
    store.create("notes", note_fields("u-1", "first", 100)).await.unwrap();

    // When
    let documents = store
        .query_by_owner_ordered("notes", "ownerId", "u-1", "createdAt", true)
        .await
        .unwrap();

    // Then
    let titles: Vec<&str> = documents
        .iter()
        .filter_map(|d| d.fields.get("title").and_then(Value::as_str))
        .collect();
    assert_that!(titles, eq(&vec!["third", "second", "first"]));
}

#[tokio::test]
async fn given_offline_backend_when_operating_then_backend_error_until_back_online() {
    // Given
    let store = MemoryBackend::new();
    store.set_offline(true);

    // When / Then: every operation fails
    let result = store.create("notes", note_fields("u-1", "Groceries", 100)).await;
    assert_that!(result, err(anything()));
    let result = store.read_by_id("notes", "any").await;
    assert_that!(result, err(anything()));

    // When: back online
    store.set_offline(false);

    // Then
    let id = store
        .create("notes", note_fields("u-1", "Groceries", 100))
        .await
        .unwrap();
    assert_that!(store.read_by_id("notes", &id).await.unwrap(), some(anything()));
}
