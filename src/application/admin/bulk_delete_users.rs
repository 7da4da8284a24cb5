use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::repositories::{RepositoryError, UserRepository};

/// Bulk delete input
pub struct BulkDeleteUsersInput {
    /// Admin issuing the request
    pub requester_id: String,
    pub user_ids: Vec<String>,
}

/// Per-user failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteFailure {
    pub user_id: String,
    pub reason: String,
}

/// Bulk delete output
#[derive(Debug, Default)]
pub struct BulkDeleteUsersOutput {
    pub deleted: Vec<String>,
    pub failed: Vec<DeleteFailure>,
}

/// Delete several accounts at once. Each ID succeeds or fails on its own.
pub struct BulkDeleteUsers<U: UserRepository> {
    user_repo: Arc<U>,
}

impl<U: UserRepository> BulkDeleteUsers<U> {
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(
        &self,
        input: BulkDeleteUsersInput,
    ) -> Result<BulkDeleteUsersOutput, BulkDeleteError> {
        let mut seen = HashSet::new();
        let user_ids: Vec<String> = input
            .user_ids
            .into_iter()
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty() && seen.insert(id.clone()))
            .collect();

        if user_ids.is_empty() {
            return Err(BulkDeleteError::Validation("At least one user ID is required".into()));
        }

        let mut output = BulkDeleteUsersOutput::default();

        for user_id in user_ids {
            if user_id == input.requester_id {
                output.failed.push(DeleteFailure {
                    user_id,
                    reason: "Cannot delete your own account".into(),
                });
                continue;
            }

            match self.delete_one(&user_id).await {
                Ok(()) => output.deleted.push(user_id),
                Err(e) => {
                    tracing::warn!("Failed to delete user {}: {}", user_id, e);
                    output.failed.push(DeleteFailure {
                        user_id,
                        reason: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            requester = %input.requester_id,
            deleted = output.deleted.len(),
            failed = output.failed.len(),
            "Bulk user deletion finished"
        );

        Ok(output)
    }

    async fn delete_one(&self, user_id: &str) -> Result<(), RepositoryError> {
        if self.user_repo.find_by_id(user_id).await?.is_none() {
            return Err(RepositoryError::NotFound(format!("user {user_id}")));
        }
        self.user_repo.delete(user_id).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BulkDeleteError {
    #[error("Validation error: {0}")]
    Validation(String),
}
