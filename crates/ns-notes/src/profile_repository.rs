use crate::Result as NotesErrorResult;
use crate::fields::{
    FIELD_CREATED_AT, FIELD_EMAIL, FIELD_NAME, USERS_COLLECTION, profile_from_fields,
    timestamp_value,
};

use std::sync::Arc;

use chrono::Utc;
use ns_core::{Identity, UserId, UserProfile};
use ns_remote::{DocumentStore, Fields};
use serde_json::Value;

/// User profile records at `users/{identityId}`.
pub struct ProfileRepository {
    store: Arc<dyn DocumentStore>,
}

impl ProfileRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Writes the profile record, created once at registration time.
    pub async fn create(&self, identity: &Identity, name: &str) -> NotesErrorResult<()> {
        let mut fields = Fields::new();
        fields.insert(FIELD_NAME.to_string(), Value::from(name));
        fields.insert(FIELD_EMAIL.to_string(), Value::from(identity.email.as_str()));
        fields.insert(FIELD_CREATED_AT.to_string(), timestamp_value(Utc::now()));

        self.store
            .put_by_id(USERS_COLLECTION, identity.id.as_str(), fields)
            .await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: &UserId) -> NotesErrorResult<Option<UserProfile>> {
        let Some(fields) = self.store.read_by_id(USERS_COLLECTION, id.as_str()).await? else {
            return Ok(None);
        };
        Ok(Some(profile_from_fields(&fields)?))
    }
}
