use crate::{Notification, SessionEvent, SessionState};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, error, warn};
use ns_core::{Identity, NoteDraft, NoteId};
use ns_notes::{NoteService, ProfileRepository};
use ns_remote::{AuthGateway, AuthState, DocumentStore};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::{Mutex, Semaphore};

const EMPTY_NOTE_MESSAGE: &str = "Please enter a title and content!";
const EMPTY_CREDENTIALS_MESSAGE: &str = "Please enter both email and password.";

/// Reacts to auth transitions and drives note operations for the signed-in
/// user, holding the one `SessionState` value.
///
/// Failures from the auth gateway or the document store never escape: they
/// are logged and surfaced as `Notify` events, and the prior in-memory
/// state is kept unchanged.
pub struct SessionController {
    gateway: Arc<dyn AuthGateway>,
    notes: NoteService,
    profiles: ProfileRepository,
    state: Mutex<SessionState>,
    events: UnboundedSender<SessionEvent>,
    live: AtomicBool,
    mutation_gate: Semaphore,
}

impl SessionController {
    pub(crate) fn new(
        gateway: Arc<dyn AuthGateway>,
        store: Arc<dyn DocumentStore>,
    ) -> (Self, UnboundedReceiver<SessionEvent>) {
        let (events, events_rx) = mpsc::unbounded_channel();
        let controller = Self {
            gateway,
            notes: NoteService::new(store.clone()),
            profiles: ProfileRepository::new(store),
            state: Mutex::new(SessionState::default()),
            events,
            live: AtomicBool::new(true),
            // One in-flight mutation at a time; extra triggers are ignored.
            mutation_gate: Semaphore::new(1),
        };
        (controller, events_rx)
    }

    /// Snapshot of the current session state.
    pub async fn state(&self) -> SessionState {
        self.state.lock().await.clone()
    }

    pub async fn is_signed_in(&self) -> bool {
        self.state.lock().await.is_signed_in()
    }

    /// Updates the live search filter; pure and local, no remote fetch.
    pub async fn set_search_filter(&self, query: &str) {
        self.state.lock().await.cache_mut().set_filter(query);
    }

    // ---- auth ----------------------------------------------------------

    /// Registers a new account and writes its profile record.
    pub async fn register(&self, name: &str, email: &str, password: &str) {
        if email.trim().is_empty() || password.trim().is_empty() {
            self.notify(Notification::error(EMPTY_CREDENTIALS_MESSAGE));
            return;
        }
        if name.trim().is_empty() {
            self.notify(Notification::error("Please enter your name."));
            return;
        }

        match self.gateway.register(email, password).await {
            Ok(identity) => {
                if let Err(e) = self.profiles.create(&identity, name.trim()).await {
                    // The account exists either way; the display name will
                    // fall back to the email on the next sign-in.
                    warn!("profile write failed for {}: {e}", identity.id);
                }
                self.notify(Notification::success("Account created successfully!"));
                self.send(SessionEvent::NavigateToNotes);
            }
            Err(e) => {
                warn!("registration failed: {e}");
                self.notify(Notification::error(e.user_message()));
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) {
        if email.trim().is_empty() || password.trim().is_empty() {
            self.notify(Notification::error(EMPTY_CREDENTIALS_MESSAGE));
            return;
        }

        match self.gateway.login(email, password).await {
            Ok(_) => {
                self.notify(Notification::success("Login successful!"));
                self.send(SessionEvent::NavigateToNotes);
            }
            Err(e) => {
                warn!("login failed: {e}");
                self.notify(Notification::error(e.user_message()));
            }
        }
    }

    /// Signs out; the auth stream drives the state transition.
    pub async fn logout(&self) {
        self.gateway.logout().await;
    }

    // ---- mutations -----------------------------------------------------

    pub async fn add_note(&self, title: &str, content: &str) {
        let Ok(_permit) = self.mutation_gate.try_acquire() else {
            debug!("mutation already in flight; add ignored");
            return;
        };

        let draft = match NoteDraft::new(title, content) {
            Ok(draft) => draft,
            Err(e) => {
                debug!("rejected note draft: {e}");
                self.notify(Notification::error(EMPTY_NOTE_MESSAGE));
                return;
            }
        };

        let identity = self.current_identity().await;
        match self.notes.add(identity.as_ref(), &draft).await {
            Ok(Some(_)) => {
                self.notify(Notification::success("Note added successfully!"));
                self.reload_notes().await;
            }
            Ok(None) => {}
            Err(e) => {
                error!("add note failed: {e}");
                self.notify(Notification::error("Failed to add note."));
            }
        }
    }

    pub async fn update_note(&self, id: &NoteId, title: &str, content: &str) {
        let Ok(_permit) = self.mutation_gate.try_acquire() else {
            debug!("mutation already in flight; update ignored");
            return;
        };

        let draft = match NoteDraft::new(title, content) {
            Ok(draft) => draft,
            Err(e) => {
                debug!("rejected note draft: {e}");
                self.notify(Notification::error(EMPTY_NOTE_MESSAGE));
                return;
            }
        };

        match self.notes.update(id, &draft).await {
            Ok(()) => {
                self.notify(Notification::success("Note updated successfully!"));
                self.reload_notes().await;
            }
            Err(e) => {
                error!("update note {id} failed: {e}");
                self.notify(Notification::error("Failed to update note."));
            }
        }
    }

    pub async fn delete_note(&self, id: &NoteId) {
        let Ok(_permit) = self.mutation_gate.try_acquire() else {
            debug!("mutation already in flight; delete ignored");
            return;
        };

        match self.notes.delete(id).await {
            Ok(()) => {
                self.notify(Notification::success("Note deleted successfully!"));
                self.reload_notes().await;
            }
            Err(e) => {
                error!("delete note {id} failed: {e}");
                self.notify(Notification::error("Failed to delete note."));
            }
        }
    }

    // ---- transitions ---------------------------------------------------

    /// Applies one auth state change. The watcher calls this strictly in
    /// delivery order, one change at a time.
    pub(crate) async fn apply_auth_state(&self, auth: AuthState) {
        match auth {
            AuthState::SignedIn(identity) => self.handle_signed_in(identity).await,
            AuthState::SignedOut => self.handle_signed_out().await,
        }
    }

    async fn handle_signed_in(&self, identity: Identity) {
        let display_name = self.resolve_display_name(&identity).await;
        let notes = match self.notes.list(Some(&identity)).await {
            Ok(notes) => notes,
            Err(e) => {
                error!("loading notes failed: {e}");
                self.notify(Notification::error("Failed to load notes."));
                Vec::new()
            }
        };

        if !self.live.load(Ordering::Acquire) {
            return;
        }
        self.state.lock().await.sign_in(identity, display_name, notes);
    }

    async fn handle_signed_out(&self) {
        if !self.live.load(Ordering::Acquire) {
            return;
        }
        self.state.lock().await.sign_out();
        self.send(SessionEvent::NavigateToSignIn);
    }

    /// Profile name when present, identity email otherwise (including on
    /// read failures and blank profile names).
    async fn resolve_display_name(&self, identity: &Identity) -> String {
        match self.profiles.find_by_id(&identity.id).await {
            Ok(Some(profile)) if !profile.name.is_empty() => profile.name,
            Ok(_) => identity.email.clone(),
            Err(e) => {
                warn!("profile read failed for {}: {e}", identity.id);
                identity.email.clone()
            }
        }
    }

    /// Full re-fetch replacing the canonical sequence. On failure the
    /// previous sequence is kept and the user is notified.
    async fn reload_notes(&self) {
        let identity = self.current_identity().await;
        match self.notes.list(identity.as_ref()).await {
            Ok(notes) => {
                if !self.live.load(Ordering::Acquire) {
                    return;
                }
                self.state.lock().await.cache_mut().replace(notes);
            }
            Err(e) => {
                error!("reloading notes failed: {e}");
                self.notify(Notification::error("Failed to load notes."));
            }
        }
    }

    async fn current_identity(&self) -> Option<Identity> {
        self.state.lock().await.current_identity().cloned()
    }

    /// Stops any still-running work from touching state. Called on session
    /// teardown before the watcher is aborted.
    pub(crate) fn retire(&self) {
        self.live.store(false, Ordering::Release);
    }

    fn notify(&self, notification: Notification) {
        self.send(SessionEvent::Notify(notification));
    }

    fn send(&self, event: SessionEvent) {
        // A closed receiver just means no presentation layer is listening.
        let _ = self.events.send(event);
    }
}
