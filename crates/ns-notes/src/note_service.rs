use crate::Result as NotesErrorResult;
use crate::fields::{
    FIELD_CONTENT, FIELD_CREATED_AT, FIELD_EDITED_AT, FIELD_OWNER_ID, FIELD_TITLE,
    NOTES_COLLECTION, note_from_document, timestamp_value,
};

use std::sync::Arc;

use chrono::Utc;
use log::debug;
use ns_core::{Identity, Note, NoteDraft, NoteId};
use ns_remote::{DocumentStore, Fields};
use serde_json::Value;

/// Note access layer: translates note operations into document store calls
/// and enforces the ownership filter and newest-first ordering.
///
/// The current identity is passed explicitly; operations on behalf of a
/// signed-out caller are no-ops (`add`) or empty (`list`).
pub struct NoteService {
    store: Arc<dyn DocumentStore>,
}

impl NoteService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Creates a note owned by `user`, stamping `ownerId` and `createdAt`
    /// at call time. Returns `Ok(None)` without a signed-in identity.
    pub async fn add(
        &self,
        user: Option<&Identity>,
        draft: &NoteDraft,
    ) -> NotesErrorResult<Option<NoteId>> {
        let Some(user) = user else {
            debug!("add skipped: no signed-in identity");
            return Ok(None);
        };

        let mut fields = Fields::new();
        fields.insert(FIELD_OWNER_ID.to_string(), Value::from(user.id.as_str()));
        fields.insert(FIELD_TITLE.to_string(), Value::from(draft.title()));
        fields.insert(FIELD_CONTENT.to_string(), Value::from(draft.content()));
        fields.insert(FIELD_CREATED_AT.to_string(), timestamp_value(Utc::now()));

        let id = self.store.create(NOTES_COLLECTION, fields).await?;
        Ok(Some(NoteId::new(id)))
    }

    /// Notes owned by `user`, newest first. Empty without a signed-in
    /// identity; never contains another owner's notes.
    pub async fn list(&self, user: Option<&Identity>) -> NotesErrorResult<Vec<Note>> {
        let Some(user) = user else {
            return Ok(Vec::new());
        };

        let documents = self
            .store
            .query_by_owner_ordered(
                NOTES_COLLECTION,
                FIELD_OWNER_ID,
                user.id.as_str(),
                FIELD_CREATED_AT,
                true,
            )
            .await?;

        documents.iter().map(note_from_document).collect()
    }

    /// Applies `draft` to an existing note and stamps `editedAt`.
    ///
    /// Ownership is not re-checked here; callers only ever obtain ids from
    /// `list`, which already filters by owner.
    pub async fn update(&self, id: &NoteId, draft: &NoteDraft) -> NotesErrorResult<()> {
        let mut fields = Fields::new();
        fields.insert(FIELD_TITLE.to_string(), Value::from(draft.title()));
        fields.insert(FIELD_CONTENT.to_string(), Value::from(draft.content()));
        fields.insert(FIELD_EDITED_AT.to_string(), timestamp_value(Utc::now()));

        self.store
            .update_by_id(NOTES_COLLECTION, id.as_str(), fields)
            .await?;
        Ok(())
    }

    /// Deletes a note. Deleting an id that is already gone is not an error.
    pub async fn delete(&self, id: &NoteId) -> NotesErrorResult<()> {
        match self.store.delete_by_id(NOTES_COLLECTION, id.as_str()).await {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => {
                debug!("delete of missing note {id} ignored");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
