use crate::{
    AuthError, AuthGateway, AuthResult, AuthState, Document, DocumentStore, Fields, StoreError,
    StoreResult,
};

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use log::debug;
use ns_core::{Identity, UserId};
use serde_json::Value;
use tokio::sync::{Mutex, watch};
use uuid::Uuid;

const MIN_PASSWORD_LEN: usize = 6;

struct Account {
    identity: Identity,
    password: String,
}

/// In-memory auth gateway and document store.
///
/// Backs tests and embedders that run without a live managed backend. The
/// store half can be flipped offline to exercise failure paths.
pub struct MemoryBackend {
    accounts: Mutex<HashMap<String, Account>>,
    collections: Mutex<HashMap<String, HashMap<String, Fields>>>,
    auth_tx: watch::Sender<AuthState>,
    offline: AtomicBool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        let (auth_tx, _) = watch::channel(AuthState::SignedOut);
        Self {
            accounts: Mutex::new(HashMap::new()),
            collections: Mutex::new(HashMap::new()),
            auth_tx,
            offline: AtomicBool::new(false),
        }
    }

    /// Makes every store operation fail until switched back on.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> StoreResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::backend("memory backend is offline"));
        }
        Ok(())
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthGateway for MemoryBackend {
    async fn register(&self, email: &str, password: &str) -> AuthResult<Identity> {
        if !email.contains('@') {
            return Err(AuthError::InvalidEmail);
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakSecret);
        }

        let mut accounts = self.accounts.lock().await;
        if accounts.contains_key(email) {
            return Err(AuthError::EmailInUse);
        }

        let identity = Identity {
            id: UserId::new(Uuid::new_v4().to_string()),
            email: email.to_string(),
            display_name: None,
        };
        accounts.insert(
            email.to_string(),
            Account {
                identity: identity.clone(),
                password: password.to_string(),
            },
        );
        drop(accounts);

        debug!("registered account for {email}");
        // Registration signs the new account in, like the managed gateway.
        self.auth_tx.send_replace(AuthState::SignedIn(identity.clone()));
        Ok(identity)
    }

    async fn login(&self, email: &str, password: &str) -> AuthResult<Identity> {
        let accounts = self.accounts.lock().await;
        // Unknown email and wrong password are indistinguishable to callers.
        let account = accounts.get(email).ok_or(AuthError::BadCredential)?;
        if account.password != password {
            return Err(AuthError::BadCredential);
        }
        let identity = account.identity.clone();
        drop(accounts);

        debug!("signed in {email}");
        self.auth_tx.send_replace(AuthState::SignedIn(identity.clone()));
        Ok(identity)
    }

    async fn logout(&self) {
        debug!("signed out");
        self.auth_tx.send_replace(AuthState::SignedOut);
    }

    fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.auth_tx.subscribe()
    }
}

#[async_trait]
impl DocumentStore for MemoryBackend {
    async fn create(&self, collection: &str, fields: Fields) -> StoreResult<String> {
        self.check_online()?;
        let id = Uuid::new_v4().to_string();
        let mut collections = self.collections.lock().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), fields);
        Ok(id)
    }

    async fn put_by_id(&self, collection: &str, id: &str, fields: Fields) -> StoreResult<()> {
        self.check_online()?;
        let mut collections = self.collections.lock().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), fields);
        Ok(())
    }

    async fn read_by_id(&self, collection: &str, id: &str) -> StoreResult<Option<Fields>> {
        self.check_online()?;
        let collections = self.collections.lock().await;
        Ok(collections
            .get(collection)
            .and_then(|documents| documents.get(id))
            .cloned())
    }

    async fn query_by_owner_ordered(
        &self,
        collection: &str,
        owner_field: &str,
        owner_id: &str,
        order_field: &str,
        descending: bool,
    ) -> StoreResult<Vec<Document>> {
        self.check_online()?;
        let collections = self.collections.lock().await;
        let mut documents: Vec<Document> = collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|(_, fields)| {
                        fields.get(owner_field).and_then(Value::as_str) == Some(owner_id)
                    })
                    .map(|(id, fields)| Document {
                        id: id.clone(),
                        fields: fields.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        documents.sort_by_key(|document| {
            document
                .fields
                .get(order_field)
                .and_then(Value::as_i64)
                .unwrap_or(i64::MIN)
        });
        if descending {
            documents.reverse();
        }
        Ok(documents)
    }

    async fn update_by_id(&self, collection: &str, id: &str, fields: Fields) -> StoreResult<()> {
        self.check_online()?;
        let mut collections = self.collections.lock().await;
        let document = collections
            .get_mut(collection)
            .and_then(|documents| documents.get_mut(id))
            .ok_or_else(|| StoreError::not_found(collection, id))?;
        for (key, value) in fields {
            document.insert(key, value);
        }
        Ok(())
    }

    async fn delete_by_id(&self, collection: &str, id: &str) -> StoreResult<()> {
        self.check_online()?;
        let mut collections = self.collections.lock().await;
        if let Some(documents) = collections.get_mut(collection) {
            documents.remove(id);
        }
        Ok(())
    }
}
