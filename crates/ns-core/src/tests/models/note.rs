use crate::{Note, NoteId, UserId};

use chrono::{Duration, Utc};
use googletest::prelude::*;

fn sample_note() -> Note {
    Note {
        id: NoteId::new("n-1"),
        owner_id: UserId::new("u-1"),
        title: "Groceries".to_string(),
        content: "milk and eggs".to_string(),
        created_at: Utc::now(),
        edited_at: None,
    }
}

#[test]
fn given_unedited_note_when_display_timestamp_then_creation_time() {
    let note = sample_note();

    assert_that!(note.display_timestamp(), eq(note.created_at));
}

#[test]
fn given_edited_note_when_display_timestamp_then_edit_time() {
    let mut note = sample_note();
    let edited = note.created_at + Duration::minutes(5);
    note.edited_at = Some(edited);

    assert_that!(note.display_timestamp(), eq(edited));
}
