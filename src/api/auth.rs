//! Authentication endpoints (signup, login, current user)

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::user::{Role, UserProfile},
};

use super::AuthenticatedUser;

#[derive(Deserialize, IntoParams)]
pub struct SignupQuery {
    /// Role granted to the new account, carried by an invite link
    pub role: Option<Role>,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    pub full_name: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public view of an authenticated user
#[derive(Serialize, ToSchema)]
pub struct UserInfo {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub role: Role,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// JWT bearer token
    pub token: String,
    pub token_type: String,
    pub user: UserInfo,
}

impl UserInfo {
    fn from_profile(email: String, profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            email,
            full_name: profile.full_name,
            role: profile.role,
        }
    }
}

/// Create a new account and sign in
///
/// The optional `role` query parameter comes from an invite link and is
/// only honored here, at account creation. Without it the account starts
/// as a viewer.
#[utoipa::path(
    post,
    path = "/auth/signup",
    tag = "auth",
    params(SignupQuery),
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = LoginResponse),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn signup(
    State(state): State<crate::AppState>,
    Query(query): Query<SignupQuery>,
    Json(request): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<LoginResponse>)> {
    request.validate()?;

    let (token, profile) = state
        .services
        .auth
        .signup(&request.email, &request.password, request.full_name.as_deref(), query.role)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(LoginResponse {
            token,
            token_type: "Bearer".to_string(),
            user: UserInfo::from_profile(request.email, profile),
        }),
    ))
}

/// Sign in with email and password
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (token, account, profile) = state
        .services
        .auth
        .login(&request.email, &request.password)
        .await?;

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        user: UserInfo::from_profile(account.email, profile),
    }))
}

/// Get the currently authenticated user
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = UserInfo),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn me(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<UserInfo>> {
    let profile = state.services.auth.profile(claims.user_id).await?;
    Ok(Json(UserInfo::from_profile(claims.sub, profile)))
}
