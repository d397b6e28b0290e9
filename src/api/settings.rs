//! Schedule window settings endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, models::settings::ScheduleWindow};

use super::AuthenticatedUser;

/// Get the visible schedule window
#[utoipa::path(
    get,
    path = "/settings",
    tag = "settings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current schedule window", body = ScheduleWindow),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_settings(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<ScheduleWindow>> {
    let window = state.services.settings.get_window().await?;
    Ok(Json(window))
}

/// Update the visible schedule window (admin only)
///
/// Saving the same window twice leaves the stored values unchanged.
#[utoipa::path(
    put,
    path = "/settings",
    tag = "settings",
    security(("bearer_auth" = [])),
    request_body = ScheduleWindow,
    responses(
        (status = 200, description = "Schedule window updated", body = ScheduleWindow),
        (status = 400, description = "Invalid hour range"),
        (status = 403, description = "Admin privileges required")
    )
)]
pub async fn update_settings(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(window): Json<ScheduleWindow>,
) -> AppResult<Json<ScheduleWindow>> {
    claims.require_admin()?;

    let updated = state.services.settings.update_window(window).await?;
    Ok(Json(updated))
}
