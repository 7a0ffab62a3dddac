pub mod identity;
pub mod note;
pub mod note_draft;
pub mod note_id;
pub mod user_id;
pub mod user_profile;
