use std::sync::Arc;

use crate::domain::entities::normalize_phone;
use crate::domain::repositories::{RepositoryError, UserRepository};
use crate::infrastructure::auth::PasswordService;

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Reset password input
pub struct ResetPasswordInput {
    pub phone: String,
    pub new_password: String,
}

/// Reset password output
pub struct ResetPasswordOutput {
    pub user_id: String,
}

/// Set a new password for the account registered with a phone number
pub struct ResetPasswordByPhone<U: UserRepository> {
    user_repo: Arc<U>,
}

impl<U: UserRepository> ResetPasswordByPhone<U> {
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(
        &self,
        input: ResetPasswordInput,
    ) -> Result<ResetPasswordOutput, ResetPasswordError> {
        let phone = normalize_phone(&input.phone).ok_or(ResetPasswordError::InvalidPhone)?;

        if input.new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ResetPasswordError::Validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let user = self
            .user_repo
            .find_by_phone(&phone)
            .await?
            .ok_or(ResetPasswordError::UserNotFound)?;

        let password_hash = PasswordService::hash(&input.new_password)
            .map_err(|e| ResetPasswordError::Internal(e.to_string()))?;

        self.user_repo.update_password(&user.id, &password_hash).await?;

        tracing::info!(user_id = %user.id, "Password reset by phone");

        Ok(ResetPasswordOutput { user_id: user.id })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("Invalid phone number")]
    InvalidPhone,
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("No account registered with this phone number")]
    UserNotFound,
    #[error("Internal error: {0}")]
    Internal(String),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
