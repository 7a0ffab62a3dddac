use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-user profile record stored at `users/{identityId}`.
///
/// Written once at registration; read at session start to resolve the
/// display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
