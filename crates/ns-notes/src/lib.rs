pub mod error;
pub mod fields;
pub mod note_service;
pub mod profile_repository;

pub use error::{NotesError, Result};
pub use fields::{NOTES_COLLECTION, USERS_COLLECTION};
pub use note_service::NoteService;
pub use profile_repository::ProfileRepository;
