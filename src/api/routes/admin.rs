//! Admin routes - privileged account management

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json, Extension};
use serde::{Deserialize, Serialize};

use crate::api::middleware::Claims;
use crate::api::AppState;
use crate::application::admin::{
    BulkDeleteError, BulkDeleteUsers, BulkDeleteUsersInput, ResetPasswordByPhone,
    ResetPasswordError, ResetPasswordInput,
};

// ============================================================================
// Request/Response DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct BulkDeleteRequest {
    #[serde(rename = "userIds", default)]
    pub user_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BulkDeleteResponse {
    pub success: bool,
    pub deleted: Vec<String>,
    pub failed: Vec<FailedDeletion>,
}

#[derive(Debug, Serialize)]
pub struct FailedDeletion {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub reason: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    #[serde(default)]
    pub phone: String,
    #[serde(rename = "newPassword", default)]
    pub new_password: String,
}

#[derive(Debug, Serialize)]
pub struct ResetPasswordResponse {
    pub success: bool,
    #[serde(rename = "userId")]
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub code: String,
}

fn error(status: StatusCode, error: String, code: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            success: false,
            error,
            code: code.to_string(),
        }),
    )
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /api/admin/users/bulk-delete - Delete several accounts
pub async fn bulk_delete_users(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(body): Json<BulkDeleteRequest>,
) -> Result<Json<BulkDeleteResponse>, (StatusCode, Json<ErrorResponse>)> {
    let output = BulkDeleteUsers::new(state.user_repo.clone())
        .execute(BulkDeleteUsersInput {
            requester_id: claims.user_id.clone(),
            user_ids: body.user_ids,
        })
        .await
        .map_err(|e| match e {
            BulkDeleteError::Validation(msg) => error(StatusCode::BAD_REQUEST, msg, "VALIDATION_ERROR"),
        })?;

    Ok(Json(BulkDeleteResponse {
        success: output.failed.is_empty(),
        deleted: output.deleted,
        failed: output
            .failed
            .into_iter()
            .map(|f| FailedDeletion {
                user_id: f.user_id,
                reason: f.reason,
            })
            .collect(),
    }))
}

/// POST /api/admin/users/reset-password - Set a new password by phone number
pub async fn reset_password(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(body): Json<ResetPasswordRequest>,
) -> Result<Json<ResetPasswordResponse>, (StatusCode, Json<ErrorResponse>)> {
    let output = ResetPasswordByPhone::new(state.user_repo.clone())
        .execute(ResetPasswordInput {
            phone: body.phone,
            new_password: body.new_password,
        })
        .await
        .map_err(|e| match e {
            ResetPasswordError::InvalidPhone => {
                error(StatusCode::BAD_REQUEST, e.to_string(), "INVALID_PHONE")
            }
            ResetPasswordError::Validation(msg) => {
                error(StatusCode::BAD_REQUEST, msg, "VALIDATION_ERROR")
            }
            ResetPasswordError::UserNotFound => {
                error(StatusCode::NOT_FOUND, e.to_string(), "USER_NOT_FOUND")
            }
            ResetPasswordError::Internal(_) | ResetPasswordError::Repository(_) => {
                tracing::error!("Password reset failed: {}", e);
                error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to reset password".to_string(),
                    "RESET_PASSWORD_ERROR",
                )
            }
        })?;

    tracing::info!(admin = %claims.user_id, user_id = %output.user_id, "Admin reset a password");

    Ok(Json(ResetPasswordResponse {
        success: true,
        user_id: output.user_id,
    }))
}
