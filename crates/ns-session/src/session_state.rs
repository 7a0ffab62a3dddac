use crate::NoteCache;

use ns_core::{Identity, Note};

/// The one per-client session value, replaced wholesale on every auth
/// transition.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    identity: Option<Identity>,
    display_name: String,
    cache: NoteCache,
}

impl SessionState {
    pub fn current_identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.identity.is_some()
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn cache(&self) -> &NoteCache {
        &self.cache
    }

    /// What the presentation layer shows: the canonical sequence or its
    /// filtered subsequence.
    pub fn active_view(&self) -> Vec<Note> {
        self.cache.active_view()
    }

    pub(crate) fn sign_in(&mut self, identity: Identity, display_name: String, notes: Vec<Note>) {
        self.identity = Some(identity);
        self.display_name = display_name;
        self.cache = NoteCache::new();
        self.cache.replace(notes);
    }

    pub(crate) fn sign_out(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn cache_mut(&mut self) -> &mut NoteCache {
        &mut self.cache
    }
}
