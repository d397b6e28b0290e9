//! Authentication service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::{Account, Role, UserClaims, UserProfile},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Register a new account and its profile, returning a session token
    ///
    /// An invited role is honored only here, at account creation; signing
    /// up without one yields a viewer profile. An already registered email
    /// is a conflict and never changes the stored role.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        full_name: Option<&str>,
        invited_role: Option<Role>,
    ) -> AppResult<(String, UserProfile)> {
        if self.repository.users.email_exists(email).await? {
            return Err(AppError::Conflict(
                "An account with this email already exists".to_string(),
            ));
        }

        let password_hash = self.hash_password(password)?;
        let role = invited_role.unwrap_or(Role::Viewer);

        let profile = self
            .repository
            .users
            .create_account(email, &password_hash, full_name, role)
            .await?;

        let token = self.create_token(email, &profile)?;
        Ok((token, profile))
    }

    /// Authenticate by email and password, returning a session token
    pub async fn login(&self, email: &str, password: &str) -> AppResult<(String, Account, UserProfile)> {
        let account = self
            .repository
            .users
            .get_account_by_email(email)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid email or password".to_string()))?;

        if !self.verify_password(&account.password_hash, password)? {
            return Err(AppError::Authentication(
                "Invalid email or password".to_string(),
            ));
        }

        let profile = self.repository.users.get_profile(account.id).await?;
        let token = self.create_token(&account.email, &profile)?;

        Ok((token, account, profile))
    }

    /// Get the profile behind a set of verified claims
    pub async fn profile(&self, user_id: Uuid) -> AppResult<UserProfile> {
        self.repository.users.get_profile(user_id).await
    }

    /// Create a JWT for a profile
    fn create_token(&self, email: &str, profile: &UserProfile) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let exp = now + (self.config.jwt_expiration_hours as i64 * 3600);

        let claims = UserClaims {
            sub: email.to_string(),
            user_id: profile.id,
            role: profile.role,
            exp,
            iat: now,
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Verify a password against its stored hash
    fn verify_password(&self, hash: &str, password: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash a password using Argon2
    fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }
}
