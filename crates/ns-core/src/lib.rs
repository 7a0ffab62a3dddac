pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::identity::Identity;
pub use models::note::Note;
pub use models::note_draft::NoteDraft;
pub use models::note_id::NoteId;
pub use models::user_id::UserId;
pub use models::user_profile::UserProfile;

#[cfg(test)]
mod tests;
