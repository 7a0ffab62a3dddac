#![allow(dead_code)]

use std::sync::Arc;

use ns_core::{Identity, UserId};
use ns_notes::NOTES_COLLECTION;
use ns_remote::{DocumentStore, Fields, MemoryBackend};
use serde_json::Value;
use uuid::Uuid;

pub fn create_test_store() -> Arc<MemoryBackend> {
    Arc::new(MemoryBackend::new())
}

/// Creates a test Identity with a fresh opaque id.
pub fn create_test_identity(email: &str) -> Identity {
    Identity {
        id: UserId::new(Uuid::new_v4().to_string()),
        email: email.to_string(),
        display_name: None,
    }
}

/// Seeds a raw note document with an explicit creation timestamp
/// (Unix microseconds), bypassing the service layer.
pub async fn seed_note(
    store: &Arc<MemoryBackend>,
    owner: &Identity,
    title: &str,
    created_at_micros: i64,
) -> String {
    let mut fields = Fields::new();
    fields.insert("ownerId".to_string(), Value::from(owner.id.as_str()));
    fields.insert("title".to_string(), Value::from(title));
    fields.insert("content".to_string(), Value::from("seeded content"));
    fields.insert("createdAt".to_string(), Value::from(created_at_micros));
    store
        .create(NOTES_COLLECTION, fields)
        .await
        .expect("failed to seed note")
}
