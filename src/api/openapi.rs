//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, equipment, health, locations, schedule, settings, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ASM Equipment Schedule API",
        version = "1.0.0",
        description = "Construction equipment scheduling REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "ASM Dev Team", email = "dev@asm-schedule.example")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::signup,
        auth::login,
        auth::me,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        // Locations
        locations::list_locations,
        locations::get_location,
        locations::create_location,
        locations::update_location,
        locations::delete_location,
        // Schedule
        schedule::list_entries,
        schedule::create_entry,
        schedule::delete_entry,
        schedule::get_grid,
        // Settings
        settings::get_settings,
        settings::update_settings,
        // Users
        users::list_users,
        users::update_user_role,
        users::invite_user,
    ),
    components(
        schemas(
            // Auth
            auth::SignupRequest,
            auth::LoginRequest,
            auth::LoginResponse,
            auth::UserInfo,
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::EquipmentShort,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            // Locations
            crate::models::location::Location,
            crate::models::location::LocationShort,
            crate::models::location::CreateLocation,
            crate::models::location::UpdateLocation,
            // Schedule
            crate::models::schedule::ScheduleEntry,
            crate::models::schedule::ScheduleEntryDetails,
            crate::models::schedule::CreateScheduleEntry,
            crate::grid::PlacedBlock,
            crate::grid::DayColumn,
            crate::grid::EquipmentRow,
            crate::grid::ScheduleGrid,
            // Settings
            crate::models::settings::ScheduleWindow,
            // Users
            crate::models::user::Role,
            crate::models::user::UserProfile,
            crate::models::user::UserWithEmail,
            crate::models::user::UpdateRole,
            users::InviteRequest,
            users::InviteResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "equipment", description = "Equipment registry"),
        (name = "locations", description = "Job site locations"),
        (name = "schedule", description = "Schedule entries and weekly grid"),
        (name = "settings", description = "Schedule window settings"),
        (name = "users", description = "User administration")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
