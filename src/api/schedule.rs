//! Schedule entry and grid endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    grid::ScheduleGrid,
    models::schedule::{CreateScheduleEntry, GridQuery, ScheduleEntry, ScheduleEntryDetails, ScheduleQuery},
};

use super::AuthenticatedUser;

/// List schedule entries
#[utoipa::path(
    get,
    path = "/schedule/entries",
    tag = "schedule",
    security(("bearer_auth" = [])),
    params(ScheduleQuery),
    responses(
        (status = 200, description = "List of schedule entries", body = Vec<ScheduleEntryDetails>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_entries(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<ScheduleQuery>,
) -> AppResult<Json<Vec<ScheduleEntryDetails>>> {
    let entries = state.services.schedule.list(&query).await?;
    Ok(Json(entries))
}

/// Create a schedule entry
///
/// Overlapping entries for the same equipment and day are accepted.
#[utoipa::path(
    post,
    path = "/schedule/entries",
    tag = "schedule",
    security(("bearer_auth" = [])),
    request_body = CreateScheduleEntry,
    responses(
        (status = 201, description = "Entry created", body = ScheduleEntry),
        (status = 400, description = "Invalid input or unknown equipment/location"),
        (status = 403, description = "Editor privileges required")
    )
)]
pub async fn create_entry(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(entry): Json<CreateScheduleEntry>,
) -> AppResult<(StatusCode, Json<ScheduleEntry>)> {
    claims.require_edit()?;

    let created = state.services.schedule.create(entry).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Delete a schedule entry
#[utoipa::path(
    delete,
    path = "/schedule/entries/{id}",
    tag = "schedule",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Schedule entry ID")
    ),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 403, description = "Editor privileges required"),
        (status = 404, description = "Entry not found")
    )
)]
pub async fn delete_entry(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    claims.require_edit()?;

    state.services.schedule.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get the weekly schedule grid
///
/// Returns equipment rows with entries placed at their start hour,
/// ready to render. The optional equipment filter restricts which rows
/// are returned without touching the underlying entries.
#[utoipa::path(
    get,
    path = "/schedule/grid",
    tag = "schedule",
    security(("bearer_auth" = [])),
    params(GridQuery),
    responses(
        (status = 200, description = "Weekly schedule grid", body = ScheduleGrid),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_grid(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<GridQuery>,
) -> AppResult<Json<ScheduleGrid>> {
    let grid = state.services.schedule.grid(query.equipment_id).await?;
    Ok(Json(grid))
}
