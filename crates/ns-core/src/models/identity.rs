use crate::UserId;

use serde::{Deserialize, Serialize};

/// Authenticated user identity issued by the auth gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub email: String,
    pub display_name: Option<String>,
}
