//! User administration endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::user::{Role, UpdateRole, UserProfile, UserWithEmail},
};

use super::AuthenticatedUser;

#[derive(Deserialize, ToSchema)]
pub struct InviteRequest {
    /// Role the invited user will receive on signup
    pub role: Role,
}

#[derive(Serialize, ToSchema)]
pub struct InviteResponse {
    /// Signup URL carrying the invited role
    pub invite_url: String,
}

/// List all users (admin only)
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of users", body = Vec<UserWithEmail>),
        (status = 403, description = "Admin privileges required")
    )
)]
pub async fn list_users(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<UserWithEmail>>> {
    claims.require_admin()?;

    let users = state.services.users.list().await?;
    Ok(Json(users))
}

/// Change a user's role (admin only)
#[utoipa::path(
    put,
    path = "/users/{id}/role",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateRole,
    responses(
        (status = 200, description = "Role updated", body = UserProfile),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "User not found"),
        (status = 422, description = "Cannot change own role")
    )
)]
pub async fn update_user_role(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRole>,
) -> AppResult<Json<UserProfile>> {
    claims.require_admin()?;

    let updated = state.services.users.change_role(&claims, id, request.role).await?;
    Ok(Json(updated))
}

/// Build an invite link for a new user (admin only)
///
/// The returned URL points at the signup page and carries the role the
/// invited user will be granted when the account is created.
#[utoipa::path(
    post,
    path = "/users/invite",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = InviteRequest,
    responses(
        (status = 200, description = "Invite link", body = InviteResponse),
        (status = 403, description = "Admin privileges required")
    )
)]
pub async fn invite_user(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<InviteRequest>,
) -> AppResult<Json<InviteResponse>> {
    claims.require_admin()?;

    let invite_url = state.services.users.invite_link(request.role);
    Ok(Json(InviteResponse { invite_url }))
}
