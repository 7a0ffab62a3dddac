use crate::{SessionController, SessionEvent};

use std::sync::Arc;

use log::debug;
use ns_remote::{AuthGateway, DocumentStore};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

/// Scoped handle over a running session.
///
/// `start` subscribes to the auth gateway's state stream exactly once and
/// spawns the watcher task that feeds the controller. Dropping the handle
/// (or calling `shutdown`) aborts the watcher, which releases the
/// subscription and stops late-arriving results from touching state.
pub struct Session {
    controller: Arc<SessionController>,
    watcher: JoinHandle<()>,
}

impl Session {
    pub fn start(
        gateway: Arc<dyn AuthGateway>,
        store: Arc<dyn DocumentStore>,
    ) -> (Self, UnboundedReceiver<SessionEvent>) {
        let (controller, events) = SessionController::new(gateway.clone(), store);
        let controller = Arc::new(controller);

        let watcher = tokio::spawn({
            let controller = Arc::clone(&controller);
            let mut auth_rx = gateway.subscribe();
            async move {
                loop {
                    // Strictly in delivery order, one change at a time;
                    // rapid flapping collapses to the latest state.
                    let state = auth_rx.borrow_and_update().clone();
                    controller.apply_auth_state(state).await;
                    if auth_rx.changed().await.is_err() {
                        debug!("auth gateway stream closed");
                        break;
                    }
                }
            }
        });

        (
            Self {
                controller,
                watcher,
            },
            events,
        )
    }

    pub fn controller(&self) -> &Arc<SessionController> {
        &self.controller
    }

    /// Tears the session down: no state mutation happens after this.
    pub fn shutdown(&self) {
        self.controller.retire();
        self.watcher.abort();
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.shutdown();
    }
}
