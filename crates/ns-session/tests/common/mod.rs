#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use ns_remote::MemoryBackend;
use ns_session::{Session, SessionEvent};
use tokio::sync::mpsc::UnboundedReceiver;

/// Starts a session wired to a fresh in-memory backend serving as both the
/// auth gateway and the document store.
pub fn start_test_session() -> (Arc<MemoryBackend>, Session, UnboundedReceiver<SessionEvent>) {
    let backend = Arc::new(MemoryBackend::new());
    let (session, events) = Session::start(backend.clone(), backend.clone());
    (backend, session, events)
}

/// Drains every event queued so far.
pub fn drain_events(events: &mut UnboundedReceiver<SessionEvent>) -> Vec<SessionEvent> {
    let mut drained = Vec::new();
    while let Ok(event) = events.try_recv() {
        drained.push(event);
    }
    drained
}

pub async fn wait_signed_in(session: &Session) {
    for _ in 0..400 {
        if session.controller().is_signed_in().await {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("session did not reach the signed-in state");
}

pub async fn wait_signed_out(session: &Session) {
    for _ in 0..400 {
        if !session.controller().is_signed_in().await {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("session did not reach the signed-out state");
}
