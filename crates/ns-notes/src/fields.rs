//! Persisted field shapes: `users/{id} -> {name, email, createdAt}` and
//! `notes/{id} -> {ownerId, title, content, createdAt, editedAt?}`.
//! Timestamps are stored as i64 Unix microseconds.

use crate::{NotesError, Result as NotesErrorResult};

use chrono::{DateTime, Utc};
use ns_core::{Note, NoteId, UserId, UserProfile};
use ns_remote::{Document, Fields};
use serde_json::Value;

pub const NOTES_COLLECTION: &str = "notes";
pub const USERS_COLLECTION: &str = "users";

pub(crate) const FIELD_OWNER_ID: &str = "ownerId";
pub(crate) const FIELD_TITLE: &str = "title";
pub(crate) const FIELD_CONTENT: &str = "content";
pub(crate) const FIELD_CREATED_AT: &str = "createdAt";
pub(crate) const FIELD_EDITED_AT: &str = "editedAt";
pub(crate) const FIELD_NAME: &str = "name";
pub(crate) const FIELD_EMAIL: &str = "email";

pub(crate) fn timestamp_value(timestamp: DateTime<Utc>) -> Value {
    Value::from(timestamp.timestamp_micros())
}

fn timestamp_from(value: &Value) -> Option<DateTime<Utc>> {
    value.as_i64().and_then(DateTime::from_timestamp_micros)
}

fn string_field(fields: &Fields, collection: &str, key: &str) -> NotesErrorResult<String> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            NotesError::malformed(collection, format!("missing or non-string field `{key}`"))
        })
}

fn timestamp_field(
    fields: &Fields,
    collection: &str,
    key: &str,
) -> NotesErrorResult<DateTime<Utc>> {
    fields.get(key).and_then(timestamp_from).ok_or_else(|| {
        NotesError::malformed(collection, format!("missing or non-timestamp field `{key}`"))
    })
}

pub(crate) fn note_from_document(document: &Document) -> NotesErrorResult<Note> {
    Ok(Note {
        id: NoteId::new(document.id.clone()),
        owner_id: UserId::new(string_field(
            &document.fields,
            NOTES_COLLECTION,
            FIELD_OWNER_ID,
        )?),
        title: string_field(&document.fields, NOTES_COLLECTION, FIELD_TITLE)?,
        content: string_field(&document.fields, NOTES_COLLECTION, FIELD_CONTENT)?,
        created_at: timestamp_field(&document.fields, NOTES_COLLECTION, FIELD_CREATED_AT)?,
        edited_at: document.fields.get(FIELD_EDITED_AT).and_then(timestamp_from),
    })
}

pub(crate) fn profile_from_fields(fields: &Fields) -> NotesErrorResult<UserProfile> {
    Ok(UserProfile {
        name: string_field(fields, USERS_COLLECTION, FIELD_NAME)?,
        email: string_field(fields, USERS_COLLECTION, FIELD_EMAIL)?,
        created_at: timestamp_field(fields, USERS_COLLECTION, FIELD_CREATED_AT)?,
    })
}
