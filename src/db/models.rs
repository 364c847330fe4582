//! Storage-facing records for the user directory.

use serde::{Deserialize, Serialize};

use crate::api::UserId;

/// A stored user profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Payload for creating a user; the repository assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}
