//! Data Transfer Objects for the HTTP API.
//!
//! The plan request/response types already derive Serialize/Deserialize and
//! are re-exported from the api module; only the envelope types the HTTP
//! layer adds live here.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    Importance, SessionType, StudyDay, StudyPlanRequest, StudyPlanResponse, StudyPreferences,
    StudySession, Subject, Topic, UnallocatedTopic, UserProfile,
};
pub use crate::db::models::{NewUser, User};

/// Response for the health check endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
    /// Repository status
    pub database: String,
}

/// Response listing all users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
    pub total: usize,
}
