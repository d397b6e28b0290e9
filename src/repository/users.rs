//! Users repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::user::{Account, Role, UserProfile, UserWithEmail},
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get account by email
    pub async fn get_account_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT * FROM auth_accounts WHERE LOWER(email) = LOWER($1)",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    /// Check if an email is already registered
    pub async fn email_exists(&self, email: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM auth_accounts WHERE LOWER(email) = LOWER($1))",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Create an account and its profile in one transaction
    pub async fn create_account(
        &self,
        email: &str,
        password_hash: &str,
        full_name: Option<&str>,
        role: Role,
    ) -> AppResult<UserProfile> {
        let mut tx = self.pool.begin().await?;

        let account_id: Uuid = sqlx::query_scalar(
            "INSERT INTO auth_accounts (email, password_hash) VALUES ($1, $2) RETURNING id",
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&mut *tx)
        .await?;

        let profile = sqlx::query_as::<_, UserProfile>(
            r#"
            INSERT INTO user_profiles (id, full_name, role)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(account_id)
        .bind(full_name)
        .bind(role)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(profile)
    }

    /// Get profile by user ID
    pub async fn get_profile(&self, id: Uuid) -> AppResult<UserProfile> {
        sqlx::query_as::<_, UserProfile>("SELECT * FROM user_profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User profile {} not found", id)))
    }

    /// List all profiles with their account emails, newest first
    pub async fn list_with_email(&self) -> AppResult<Vec<UserWithEmail>> {
        let users = sqlx::query_as::<_, UserWithEmail>(
            r#"
            SELECT p.id, a.email, p.full_name, p.role, p.created_at
            FROM user_profiles p
            JOIN auth_accounts a ON p.id = a.id
            ORDER BY p.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Change a user's role
    pub async fn update_role(&self, id: Uuid, role: Role) -> AppResult<UserProfile> {
        sqlx::query_as::<_, UserProfile>(
            "UPDATE user_profiles SET role = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(role)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User profile {} not found", id)))
    }
}
