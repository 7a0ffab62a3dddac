
use chrono::{Duration, TimeZone, Utc};
use ns_core::{Note, NoteId, UserId};

/// Creates a test Note with sensible defaults; `age` pushes creation
/// further into the past so earlier calls are newer.
pub(crate) fn create_test_note(title: &str, content: &str, age: i64) -> Note {
    let base = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
    Note {
        id: NoteId::new(format!("note-{title}")),
        owner_id: UserId::new("u-1"),
        title: title.to_string(),
        content: content.to_string(),
        created_at: base - Duration::minutes(age),
        edited_at: None,
    }
}
