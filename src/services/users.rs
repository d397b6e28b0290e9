//! User administration service

use uuid::Uuid;

use crate::{
    config::ServerConfig,
    error::{AppError, AppResult},
    models::user::{Role, UserClaims, UserProfile, UserWithEmail},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
    server: ServerConfig,
}

impl UsersService {
    pub fn new(repository: Repository, server: ServerConfig) -> Self {
        Self { repository, server }
    }

    /// List all users with their emails, newest first
    pub async fn list(&self) -> AppResult<Vec<UserWithEmail>> {
        self.repository.users.list_with_email().await
    }

    /// Change another user's role
    ///
    /// Changing one's own role is rejected so an admin cannot lock
    /// themselves out.
    pub async fn change_role(
        &self,
        actor: &UserClaims,
        target_id: Uuid,
        role: Role,
    ) -> AppResult<UserProfile> {
        if actor.user_id == target_id {
            return Err(AppError::BusinessRule(
                "You cannot change your own role".to_string(),
            ));
        }

        self.repository.users.update_role(target_id, role).await
    }

    /// Build a signup invitation link carrying the invited role
    pub fn invite_link(&self, role: Role) -> String {
        format!(
            "{}/auth?role={}",
            self.server.public_url.trim_end_matches('/'),
            role
        )
    }
}
