pub mod note_cache;
pub mod session;
pub mod session_controller;
pub mod session_event;
pub mod session_state;

pub use note_cache::NoteCache;
pub use session::Session;
pub use session_controller::SessionController;
pub use session_event::{Notification, SessionEvent, Severity};
pub use session_state::SessionState;

#[cfg(test)]
mod tests;
