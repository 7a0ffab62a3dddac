mod note;
mod note_draft;
