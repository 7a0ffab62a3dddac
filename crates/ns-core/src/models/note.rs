use crate::{NoteId, UserId};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A titled text note owned by exactly one identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub owner_id: UserId,
    pub title: String,
    pub content: String,

    // Audit
    pub created_at: DateTime<Utc>,
    /// Absent until the first update, stamped on every update thereafter.
    pub edited_at: Option<DateTime<Utc>>,
}

impl Note {
    /// Timestamp shown for this note: last edit when present, otherwise
    /// creation time.
    pub fn display_timestamp(&self) -> DateTime<Utc> {
        self.edited_at.unwrap_or(self.created_at)
    }
}
