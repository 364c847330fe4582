//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint. Plan generation delegates
//! to the pure planner; user endpoints go through the repository.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{HealthResponse, UserListResponse};
use super::error::AppError;
use super::state::AppState;
use crate::api::{StudyPlanRequest, StudyPlanResponse, UserId};
use crate::db::models::{NewUser, User};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the
/// repository is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match state.repository.health_check().await {
        Ok(()) => "connected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Study Plan Generation
// =============================================================================

/// POST /v1/study-plan
///
/// Generate a study plan for the requested subjects, date range and
/// preferences. The planner is CPU-bound and synchronous, so it runs on
/// the blocking thread pool.
pub async fn generate_study_plan(
    State(_state): State<AppState>,
    Json(request): Json<StudyPlanRequest>,
) -> HandlerResult<StudyPlanResponse> {
    if request.end_date < request.start_date {
        return Err(AppError::BadRequest(
            "end_date must not precede start_date".to_string(),
        ));
    }

    let response = tokio::task::spawn_blocking(move || crate::planner::generate_study_plan(&request))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    Ok(Json(response))
}

// =============================================================================
// User Directory
// =============================================================================

/// GET /v1/users
///
/// List all stored users.
pub async fn list_users(State(state): State<AppState>) -> HandlerResult<UserListResponse> {
    let users = state.repository.list_users().await?;
    let total = users.len();

    Ok(Json(UserListResponse { users, total }))
}

/// GET /v1/users/{user_id}
///
/// Fetch one user by id.
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> HandlerResult<User> {
    let user = state.repository.get_user(UserId::new(user_id)).await?;
    Ok(Json(user))
}

/// POST /v1/users
///
/// Create a new user.
pub async fn create_user(
    State(state): State<AppState>,
    Json(new_user): Json<NewUser>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = state.repository.create_user(new_user).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
